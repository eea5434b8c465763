//! Item stacks.

use serde::{Deserialize, Serialize};

use crate::{ItemMeta, Material};

/// A stack of items: a material, a count and mutable metadata.
///
/// The empty stack (air, count 0) is the absence of an item; slots never
/// hold `Option<ItemStack>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    material: Material,
    count: i32,
    meta: ItemMeta,
}

impl ItemStack {
    /// Returns the empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            material: Material::Air,
            count: 0,
            meta: ItemMeta::default(),
        }
    }

    /// Creates a single-item stack of the given material.
    #[must_use]
    pub fn of(material: Material) -> Self {
        Self::with_count(material, 1)
    }

    /// Creates a stack of the given material and count.
    #[must_use]
    pub fn with_count(material: Material, count: i32) -> Self {
        Self {
            material,
            count,
            meta: ItemMeta::default(),
        }
    }

    /// Returns the material of this stack.
    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Returns the number of items in this stack.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Sets the number of items in this stack.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    /// Returns true if this stack holds no item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.material.is_air() || self.count <= 0
    }

    /// Returns the maximum stack size for this stack's material.
    #[must_use]
    pub fn max_stack_size(&self) -> i32 {
        self.material.max_stack_size()
    }

    /// Returns true if more than one of this item can share a stack.
    #[must_use]
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size() > 1
    }

    /// Increases the count by `amount`.
    pub fn grow(&mut self, amount: i32) {
        self.count += amount;
    }

    /// Decreases the count by `amount`, clamping at zero.
    pub fn shrink(&mut self, amount: i32) {
        self.count = (self.count - amount).max(0);
    }

    /// Splits off up to `amount` items into a new stack.
    #[must_use]
    pub fn split(&mut self, amount: i32) -> Self {
        let taken = amount.min(self.count);
        if taken <= 0 {
            return Self::empty();
        }
        let result = self.copy_with_count(taken);
        self.shrink(taken);
        result
    }

    /// Returns a copy of this stack with a different count.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> Self {
        let mut copy = self.clone();
        copy.count = count;
        copy
    }

    /// Returns the metadata, or `None` for degenerate materials.
    #[must_use]
    pub fn meta(&self) -> Option<&ItemMeta> {
        (!self.material.is_air()).then_some(&self.meta)
    }

    /// Applies a read-modify-write edit to the metadata.
    ///
    /// A no-op when the material carries no metadata.
    pub fn edit_meta<F: FnOnce(&mut ItemMeta)>(&mut self, f: F) {
        if self.material.is_air() {
            return;
        }
        f(&mut self.meta);
    }

    /// Returns true if `other` is the same item ignoring count.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.material == other.material && self.meta == other.meta
    }

    /// Returns true if `other` is the same item with the same count.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.count == other.count && self.is_similar(other)
    }

    /// Serializes this stack into a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Deserializes a stack from a JSON value produced by [`Self::to_value`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Material> for ItemStack {
    fn from(material: Material) -> Self {
        Self::of(material)
    }
}
