//! Item descriptors.

use std::sync::Arc;

use fairgrid_host::ClickEvent;
use fairgrid_item::{
    Attribute, AttributeModifier, Enchantment, ItemFlags, ItemMeta, ItemStack, Material,
};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use text_components::TextComponent;
use uuid::Uuid;

/// A per-slot click callback.
pub type ClickFn = dyn Fn(&ClickEvent) + Send + Sync;

/// An item value plus an optional click handler.
///
/// Handles are shared by reference: the same handle may sit at several
/// slots of several containers, and its click handler fires for
/// whichever slot the viewer clicks (the event carries the slot).
/// Every metadata mutator reads the item's metadata, applies one
/// change, writes it back and returns `&self` for chaining; mutators
/// are no-ops for materials that carry no metadata.
pub struct ItemHandle {
    stack: Mutex<ItemStack>,
    click: Mutex<Option<Arc<ClickFn>>>,
}

impl ItemHandle {
    /// Wraps an existing item value.
    #[must_use]
    pub fn new(stack: ItemStack) -> Arc<Self> {
        Arc::new(Self {
            stack: Mutex::new(stack),
            click: Mutex::new(None),
        })
    }

    /// Creates a handle around a default item of the given material.
    #[must_use]
    pub fn of(material: Material) -> Arc<Self> {
        Self::new(ItemStack::of(material))
    }

    /// Restores a handle from a value produced by [`Self::serialize`].
    pub fn from_value(value: serde_json::Value) -> Result<Arc<Self>, serde_json::Error> {
        Ok(Self::new(ItemStack::from_value(value)?))
    }

    /// Returns a copy of the current item value.
    #[must_use]
    pub fn get(&self) -> ItemStack {
        self.stack.lock().clone()
    }

    /// Applies one metadata edit; the escape hatch behind every other
    /// mutator.
    pub fn meta<F: FnOnce(&mut ItemMeta)>(&self, f: F) -> &Self {
        self.stack.lock().edit_meta(f);
        self
    }

    /// Sets the display name from plain text.
    pub fn name(&self, name: &str) -> &Self {
        let name = TextComponent::from(name.to_string());
        self.meta(|meta| meta.display_name = Some(name))
    }

    /// Sets the display name from a rich component.
    pub fn rich_name(&self, name: TextComponent) -> &Self {
        self.meta(|meta| meta.display_name = Some(name))
    }

    /// Sets the lore from plain text lines.
    pub fn set_lore(&self, lines: &[&str]) -> &Self {
        let lore = lines
            .iter()
            .map(|line| TextComponent::from((*line).to_string()))
            .collect();
        self.meta(|meta| meta.lore = lore)
    }

    /// Sets the lore from rich components.
    pub fn lore(&self, lines: Vec<TextComponent>) -> &Self {
        self.meta(|meta| meta.lore = lines)
    }

    /// Removes all lore lines.
    pub fn clear_lore(&self) -> &Self {
        self.meta(|meta| meta.lore.clear())
    }

    /// Returns true if any lore lines are set.
    #[must_use]
    pub fn has_lore(&self) -> bool {
        self.stack.lock().meta().is_some_and(ItemMeta::has_lore)
    }

    /// Sets the stack count.
    pub fn amount(&self, amount: i32) -> &Self {
        self.stack.lock().set_count(amount);
        self
    }

    /// Sets the durability damage.
    pub fn damage(&self, damage: i32) -> &Self {
        self.meta(|meta| meta.damage = damage)
    }

    /// Sets the custom model data.
    pub fn custom_model_data(&self, model_data: i32) -> &Self {
        self.meta(|meta| meta.custom_model_data = Some(model_data))
    }

    /// Sets whether the item ignores durability loss.
    pub fn unbreakable(&self, unbreakable: bool) -> &Self {
        self.meta(|meta| meta.unbreakable = unbreakable)
    }

    /// Adds an enchantment, ignoring level restrictions.
    pub fn enchant(&self, enchantment: Enchantment, level: u32) -> &Self {
        self.enchant_with(enchantment, level, true)
    }

    /// Adds an enchantment with explicit level-restriction handling.
    pub fn enchant_with(
        &self,
        enchantment: Enchantment,
        level: u32,
        ignore_level_restriction: bool,
    ) -> &Self {
        self.meta(|meta| {
            meta.add_enchant(enchantment, level, ignore_level_restriction);
        })
    }

    /// Removes an enchantment.
    pub fn remove_enchant(&self, enchantment: Enchantment) -> &Self {
        self.meta(|meta| {
            meta.remove_enchant(enchantment);
        })
    }

    /// Returns true if the enchantment is applied.
    #[must_use]
    pub fn has_enchant(&self, enchantment: Enchantment) -> bool {
        self.stack
            .lock()
            .meta()
            .is_some_and(|meta| meta.has_enchant(enchantment))
    }

    /// Returns the applied enchantments and their levels.
    #[must_use]
    pub fn enchants(&self) -> FxHashMap<Enchantment, u32> {
        self.stack
            .lock()
            .meta()
            .map(|meta| meta.enchants.clone())
            .unwrap_or_default()
    }

    /// Adds tooltip display flags.
    pub fn flags(&self, flags: ItemFlags) -> &Self {
        self.meta(|meta| meta.flags |= flags)
    }

    /// Removes tooltip display flags.
    pub fn remove_flags(&self, flags: ItemFlags) -> &Self {
        self.meta(|meta| meta.flags -= flags)
    }

    /// Adds an attribute modifier.
    pub fn attribute_modifier(&self, attribute: Attribute, modifier: AttributeModifier) -> &Self {
        self.meta(|meta| meta.add_attribute_modifier(attribute, modifier))
    }

    /// Removes the attribute modifier with the given identity.
    pub fn remove_attribute_modifier(&self, attribute: Attribute, id: Uuid) -> &Self {
        self.meta(|meta| {
            meta.remove_attribute_modifier(attribute, id);
        })
    }

    /// Removes all attribute modifiers.
    pub fn clear_attribute_modifiers(&self) -> &Self {
        self.meta(ItemMeta::clear_attribute_modifiers)
    }

    /// Serializes the item value.
    ///
    /// Clears the item's attribute modifiers before serializing; the
    /// serialized form never carries them and the live item loses them.
    pub fn serialize(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut stack = self.stack.lock();
        stack.edit_meta(ItemMeta::clear_attribute_modifiers);
        stack.to_value()
    }

    /// Installs the click handler, replacing any prior one.
    pub fn click<F: Fn(&ClickEvent) + Send + Sync + 'static>(&self, handler: F) -> &Self {
        *self.click.lock() = Some(Arc::new(handler));
        self
    }

    /// Forwards a click to the installed handler; a no-op when unset.
    pub fn handle_click(&self, event: &ClickEvent) {
        let handler = self.click.lock().clone();
        if let Some(handler) = handler {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fairgrid_host::{ClickType, EventBus, Inventory, InventoryAction, Player};
    use fairgrid_item::AttributeOperation;

    fn click_event(slot: i32) -> ClickEvent {
        let bus = Arc::new(EventBus::new());
        let player = Player::new("viewer", bus);
        let inventory = Inventory::new(TextComponent::from("t".to_string()), 27);
        ClickEvent::new(
            player,
            inventory,
            slot,
            ClickType::Left,
            InventoryAction::PickupAll,
        )
    }

    #[test]
    fn mutators_chain_and_apply() {
        let handle = ItemHandle::of(Material::DiamondSword);
        handle
            .name("Cleaver")
            .set_lore(&["Sharp.", "Very sharp."])
            .enchant(Enchantment::Sharpness, 10)
            .unbreakable(true)
            .amount(1);

        let stack = handle.get();
        let meta = stack.meta().unwrap();
        assert!(meta.has_display_name());
        assert_eq!(meta.lore.len(), 2);
        assert_eq!(meta.enchant_level(Enchantment::Sharpness), 10);
        assert!(meta.unbreakable);
    }

    #[test]
    fn mutators_are_noops_without_meta() {
        let handle = ItemHandle::new(ItemStack::empty());
        handle.name("Nothing").enchant(Enchantment::Mending, 1);
        assert!(handle.get().meta().is_none());
        assert!(!handle.has_enchant(Enchantment::Mending));
    }

    #[test]
    fn click_handler_replaces_and_forwards() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = ItemHandle::of(Material::Emerald);

        // Unset handler: no-op.
        handle.handle_click(&click_event(0));
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        let first = calls.clone();
        handle.click(move |_| {
            first.fetch_add(1, Ordering::Relaxed);
        });
        let second = calls.clone();
        handle.click(move |_| {
            second.fetch_add(10, Ordering::Relaxed);
        });

        handle.handle_click(&click_event(0));
        assert_eq!(calls.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn serialize_strips_attribute_modifiers() {
        let handle = ItemHandle::of(Material::IronSword);
        handle.attribute_modifier(
            Attribute::AttackDamage,
            AttributeModifier::new(7.0, AttributeOperation::AddNumber),
        );
        assert_eq!(handle.get().meta().unwrap().attribute_modifiers.len(), 1);

        let value = handle.serialize().unwrap();
        let restored = ItemHandle::from_value(value).unwrap();
        assert!(restored.get().meta().unwrap().attribute_modifiers.is_empty());

        // The live item loses them too.
        assert!(handle.get().meta().unwrap().attribute_modifiers.is_empty());
    }
}
