//! Mutable item metadata.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use text_components::TextComponent;
use uuid::Uuid;

use crate::{Attribute, AttributeModifier, Enchantment};

bitflags! {
    /// Display flags that hide parts of an item's tooltip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ItemFlags: u32 {
        /// Hides the enchantment list.
        const HIDE_ENCHANTS = 1;
        /// Hides attribute modifier lines.
        const HIDE_ATTRIBUTES = 1 << 1;
        /// Hides the unbreakable line.
        const HIDE_UNBREAKABLE = 1 << 2;
        /// Hides what the item can destroy.
        const HIDE_DESTROYS = 1 << 3;
        /// Hides what the item can be placed on.
        const HIDE_PLACED_ON = 1 << 4;
        /// Hides additional tooltip lines (potion effects, book info).
        const HIDE_ADDITIONAL_TOOLTIP = 1 << 5;
        /// Hides leather armor dye color.
        const HIDE_DYE = 1 << 6;
    }
}

/// The mutable metadata of an item stack.
///
/// Reads and writes go through [`ItemStack::meta`](crate::ItemStack::meta)
/// and [`ItemStack::edit_meta`](crate::ItemStack::edit_meta); degenerate
/// materials carry no metadata and ignore edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Custom display name, if any.
    pub display_name: Option<TextComponent>,
    /// Tooltip lore lines.
    pub lore: Vec<TextComponent>,
    /// Applied enchantments and their levels.
    pub enchants: FxHashMap<Enchantment, u32>,
    /// Tooltip display flags.
    pub flags: ItemFlags,
    /// Custom model data for resource-pack item models.
    pub custom_model_data: Option<i32>,
    /// Whether the item ignores durability loss.
    pub unbreakable: bool,
    /// Accumulated durability damage.
    pub damage: i32,
    /// Attribute modifiers applied while the item is held or worn.
    pub attribute_modifiers: Vec<(Attribute, AttributeModifier)>,
}

impl ItemMeta {
    /// Returns true if a custom display name is set.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    /// Returns true if any lore lines are set.
    #[must_use]
    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    /// Adds an enchantment at the given level.
    ///
    /// With `ignore_level_restriction` unset, levels above the
    /// enchantment's survival maximum are rejected. Returns whether the
    /// enchantment was applied.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: u32,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && level > enchantment.max_level() {
            return false;
        }
        self.enchants.insert(enchantment, level);
        true
    }

    /// Removes an enchantment. Returns whether it was present.
    pub fn remove_enchant(&mut self, enchantment: Enchantment) -> bool {
        self.enchants.remove(&enchantment).is_some()
    }

    /// Returns true if the enchantment is applied.
    #[must_use]
    pub fn has_enchant(&self, enchantment: Enchantment) -> bool {
        self.enchants.contains_key(&enchantment)
    }

    /// Returns the applied level of an enchantment, or 0.
    #[must_use]
    pub fn enchant_level(&self, enchantment: Enchantment) -> u32 {
        self.enchants.get(&enchantment).copied().unwrap_or(0)
    }

    /// Adds an attribute modifier.
    pub fn add_attribute_modifier(&mut self, attribute: Attribute, modifier: AttributeModifier) {
        self.attribute_modifiers.push((attribute, modifier));
    }

    /// Removes the modifier with the given identity from an attribute.
    /// Returns whether anything was removed.
    pub fn remove_attribute_modifier(&mut self, attribute: Attribute, id: Uuid) -> bool {
        let before = self.attribute_modifiers.len();
        self.attribute_modifiers
            .retain(|(a, m)| *a != attribute || m.id != id);
        self.attribute_modifiers.len() != before
    }

    /// Removes all attribute modifiers.
    pub fn clear_attribute_modifiers(&mut self) {
        self.attribute_modifiers.clear();
    }
}

/// Rich-text equality by serialized form; the component type does not
/// expose structural equality.
fn text_eq<T: Serialize>(a: &T, b: &T) -> bool {
    serde_json::to_value(a).ok() == serde_json::to_value(b).ok()
}

impl PartialEq for ItemMeta {
    fn eq(&self, other: &Self) -> bool {
        self.enchants == other.enchants
            && self.flags == other.flags
            && self.custom_model_data == other.custom_model_data
            && self.unbreakable == other.unbreakable
            && self.damage == other.damage
            && self.attribute_modifiers == other.attribute_modifiers
            && text_eq(&self.display_name, &other.display_name)
            && text_eq(&self.lore, &other.lore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeOperation;

    #[test]
    fn enchant_level_restriction() {
        let mut meta = ItemMeta::default();
        assert!(!meta.add_enchant(Enchantment::Sharpness, 10, false));
        assert!(!meta.has_enchant(Enchantment::Sharpness));

        assert!(meta.add_enchant(Enchantment::Sharpness, 10, true));
        assert_eq!(meta.enchant_level(Enchantment::Sharpness), 10);

        assert!(meta.remove_enchant(Enchantment::Sharpness));
        assert!(!meta.remove_enchant(Enchantment::Sharpness));
    }

    #[test]
    fn attribute_modifiers_removed_by_identity() {
        let mut meta = ItemMeta::default();
        let speed = AttributeModifier::new(0.2, AttributeOperation::AddScalar);
        let armor = AttributeModifier::new(4.0, AttributeOperation::AddNumber);
        meta.add_attribute_modifier(Attribute::MovementSpeed, speed.clone());
        meta.add_attribute_modifier(Attribute::Armor, armor);

        assert!(meta.remove_attribute_modifier(Attribute::MovementSpeed, speed.id));
        assert!(!meta.remove_attribute_modifier(Attribute::MovementSpeed, speed.id));
        assert_eq!(meta.attribute_modifiers.len(), 1);

        meta.clear_attribute_modifiers();
        assert!(meta.attribute_modifiers.is_empty());
    }

    #[test]
    fn equality_includes_rich_text() {
        let mut a = ItemMeta::default();
        let mut b = ItemMeta::default();
        assert_eq!(a, b);

        a.display_name = Some(TextComponent::from("Menu".to_string()));
        assert_ne!(a, b);

        b.display_name = Some(TextComponent::from("Menu".to_string()));
        assert_eq!(a, b);
    }
}
