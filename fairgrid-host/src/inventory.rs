//! Host-side container inventories.

use std::sync::{Arc, Weak};

use fairgrid_item::ItemStack;
use parking_lot::{Mutex, RwLock};
use text_components::TextComponent;
use uuid::Uuid;

use crate::InventoryHolder;

/// A fixed-size grid of item slots that can be shown to a viewer.
///
/// The title and size are frozen at creation; retitling a container
/// means creating a new inventory and copying the contents across.
/// Ownership therefore hangs off the [`InventoryHolder`] back-pointer,
/// which survives handle replacement, not off handle identity.
pub struct Inventory {
    id: Uuid,
    title: TextComponent,
    size: usize,
    slots: RwLock<Vec<ItemStack>>,
    holder: Mutex<Option<Weak<dyn InventoryHolder>>>,
}

impl Inventory {
    /// Creates an inventory with no holder.
    #[must_use]
    pub fn new(title: TextComponent, size: usize) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            title,
            size,
            slots: RwLock::new((0..size).map(|_| ItemStack::empty()).collect()),
            holder: Mutex::new(None),
        })
    }

    /// Creates an inventory owned by `holder`.
    #[must_use]
    pub fn with_holder(
        title: TextComponent,
        size: usize,
        holder: Weak<dyn InventoryHolder>,
    ) -> Arc<Self> {
        let inventory = Self::new(title, size);
        inventory.set_holder(holder);
        inventory
    }

    /// Returns this inventory's unique id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the title shown on the container window.
    #[must_use]
    pub fn title(&self) -> &TextComponent {
        &self.title
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the owning holder, if it is still alive.
    #[must_use]
    pub fn holder(&self) -> Option<Arc<dyn InventoryHolder>> {
        self.holder.lock().as_ref().and_then(Weak::upgrade)
    }

    /// Installs the owning holder.
    pub fn set_holder(&self, holder: Weak<dyn InventoryHolder>) {
        *self.holder.lock() = Some(holder);
    }

    /// Returns a copy of the item in `slot`, or the empty stack when the
    /// slot is out of range.
    #[must_use]
    pub fn get_item(&self, slot: usize) -> ItemStack {
        self.slots.read().get(slot).cloned().unwrap_or_default()
    }

    /// Writes `item` into `slot`. Out-of-range writes are dropped.
    pub fn set_item(&self, slot: usize, item: ItemStack) {
        let mut slots = self.slots.write();
        if let Some(target) = slots.get_mut(slot) {
            *target = item;
        } else {
            log::trace!("dropping write to slot {slot} of {}-slot inventory", self.size);
        }
    }

    /// Adds an item, merging into similar stacks before filling empty
    /// slots, and returns whatever did not fit.
    pub fn add_item(&self, mut item: ItemStack) -> ItemStack {
        if item.is_empty() {
            return item;
        }
        let mut slots = self.slots.write();

        // First pass: top up similar stacks.
        if item.is_stackable() {
            for target in slots.iter_mut() {
                if item.is_empty() {
                    break;
                }
                if !target.is_empty() && target.is_similar(&item) {
                    let space = target.max_stack_size() - target.count();
                    let moved = item.count().min(space);
                    if moved > 0 {
                        target.grow(moved);
                        item.shrink(moved);
                    }
                }
            }
        }

        // Second pass: fill empty slots.
        if !item.is_empty() {
            for target in slots.iter_mut() {
                if item.is_empty() {
                    break;
                }
                if target.is_empty() {
                    let moved = item.count().min(item.max_stack_size());
                    *target = item.split(moved);
                }
            }
        }

        item
    }

    /// Removes up to `item.count()` items similar to `item`, scanning
    /// slots from the front. Returns how many were removed.
    pub fn remove_item(&self, item: &ItemStack) -> i32 {
        if item.is_empty() {
            return 0;
        }
        let mut remaining = item.count();
        let mut slots = self.slots.write();
        for target in slots.iter_mut() {
            if remaining <= 0 {
                break;
            }
            if !target.is_empty() && target.is_similar(item) {
                let taken = target.count().min(remaining);
                target.shrink(taken);
                remaining -= taken;
                if target.is_empty() {
                    *target = ItemStack::empty();
                }
            }
        }
        item.count() - remaining
    }

    /// Removes matching items from any slot. Identical to
    /// [`Self::remove_item`] here: every slot of a container is a
    /// storage slot.
    pub fn remove_item_any_slot(&self, item: &ItemStack) -> i32 {
        self.remove_item(item)
    }

    /// Returns the first slot holding an item similar to `item`.
    #[must_use]
    pub fn first(&self, item: &ItemStack) -> Option<usize> {
        self.slots
            .read()
            .iter()
            .position(|slot| !slot.is_empty() && slot.is_similar(item))
    }

    /// Returns the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.read().iter().position(ItemStack::is_empty)
    }

    /// Returns true if any slot holds exactly `item` (count included).
    #[must_use]
    pub fn contains(&self, item: &ItemStack) -> bool {
        self.slots.read().iter().any(|slot| slot.matches(item))
    }

    /// Returns true if slots similar to `item` hold at least `amount`
    /// items in total.
    #[must_use]
    pub fn contains_at_least(&self, item: &ItemStack, amount: i32) -> bool {
        if amount <= 0 {
            return true;
        }
        let mut found = 0;
        for slot in self.slots.read().iter() {
            if !slot.is_empty() && slot.is_similar(item) {
                found += slot.count();
                if found >= amount {
                    return true;
                }
            }
        }
        false
    }

    /// Returns a copy of the full contents array.
    #[must_use]
    pub fn contents(&self) -> Vec<ItemStack> {
        self.slots.read().clone()
    }

    /// Replaces the contents array. Extra entries are dropped, missing
    /// ones are padded with the empty stack.
    pub fn set_contents(&self, contents: Vec<ItemStack>) {
        let mut slots = self.slots.write();
        for (index, target) in slots.iter_mut().enumerate() {
            *target = contents.get(index).cloned().unwrap_or_default();
        }
    }

    /// Empties every slot.
    pub fn clear(&self) {
        let mut slots = self.slots.write();
        for target in slots.iter_mut() {
            *target = ItemStack::empty();
        }
    }

    /// Empties a single slot.
    pub fn clear_slot(&self, slot: usize) {
        self.set_item(slot, ItemStack::empty());
    }
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("id", &self.id)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairgrid_item::Material;

    fn titled(size: usize) -> Arc<Inventory> {
        Inventory::new(TextComponent::from("test".to_string()), size)
    }

    #[test]
    fn add_item_merges_before_filling() {
        let inventory = titled(9);
        inventory.set_item(3, ItemStack::with_count(Material::Stone, 60));

        let leftover = inventory.add_item(ItemStack::with_count(Material::Stone, 10));
        assert!(leftover.is_empty());
        assert_eq!(inventory.get_item(3).count(), 64);
        assert_eq!(inventory.get_item(0).count(), 6);
    }

    #[test]
    fn add_item_returns_overflow() {
        let inventory = titled(1);
        let leftover = inventory.add_item(ItemStack::with_count(Material::Stone, 100));
        assert_eq!(inventory.get_item(0).count(), 64);
        assert_eq!(leftover.count(), 36);
    }

    #[test]
    fn first_ignores_count() {
        let inventory = titled(9);
        inventory.set_item(4, ItemStack::with_count(Material::Diamond, 7));

        assert_eq!(inventory.first(&ItemStack::of(Material::Diamond)), Some(4));
        assert_eq!(inventory.first(&ItemStack::of(Material::Emerald)), None);
        assert_eq!(inventory.first_empty(), Some(0));
    }

    #[test]
    fn contains_is_exact_but_at_least_sums() {
        let inventory = titled(9);
        inventory.set_item(0, ItemStack::with_count(Material::Arrow, 10));
        inventory.set_item(5, ItemStack::with_count(Material::Arrow, 20));

        assert!(inventory.contains(&ItemStack::with_count(Material::Arrow, 10)));
        assert!(!inventory.contains(&ItemStack::with_count(Material::Arrow, 15)));
        assert!(inventory.contains_at_least(&ItemStack::of(Material::Arrow), 30));
        assert!(!inventory.contains_at_least(&ItemStack::of(Material::Arrow), 31));
    }

    #[test]
    fn remove_item_spans_slots() {
        let inventory = titled(9);
        inventory.set_item(0, ItemStack::with_count(Material::Bread, 5));
        inventory.set_item(1, ItemStack::with_count(Material::Bread, 5));

        let removed = inventory.remove_item(&ItemStack::with_count(Material::Bread, 8));
        assert_eq!(removed, 8);
        assert!(inventory.get_item(0).is_empty());
        assert_eq!(inventory.get_item(1).count(), 2);
    }

    #[test]
    fn out_of_range_access_is_lenient() {
        let inventory = titled(3);
        inventory.set_item(10, ItemStack::of(Material::Stone));
        assert!(inventory.get_item(10).is_empty());
        assert!(inventory.first_empty().is_some());
    }
}
