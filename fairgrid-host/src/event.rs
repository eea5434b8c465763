//! Container event payloads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ClickType, CloseReason, DragType, Inventory, InventoryAction, Player};

/// Raw slot value for clicks outside any window.
pub const SLOT_CLICKED_OUTSIDE: i32 = -999;

/// A viewer opened a container.
#[derive(Debug)]
pub struct OpenEvent {
    player: Arc<Player>,
    inventory: Arc<Inventory>,
}

impl OpenEvent {
    /// Creates an open event.
    #[must_use]
    pub fn new(player: Arc<Player>, inventory: Arc<Inventory>) -> Self {
        Self { player, inventory }
    }

    /// The viewer who opened the container.
    #[must_use]
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// The opened container.
    #[must_use]
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }
}

/// A viewer's container closed.
#[derive(Debug)]
pub struct CloseEvent {
    player: Arc<Player>,
    inventory: Arc<Inventory>,
    reason: CloseReason,
}

impl CloseEvent {
    /// Creates a close event.
    #[must_use]
    pub fn new(player: Arc<Player>, inventory: Arc<Inventory>, reason: CloseReason) -> Self {
        Self {
            player,
            inventory,
            reason,
        }
    }

    /// The viewer whose container closed.
    #[must_use]
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// The closed container.
    #[must_use]
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// Why the container closed.
    #[must_use]
    pub fn reason(&self) -> CloseReason {
        self.reason
    }
}

/// A viewer clicked a slot while a container was open.
///
/// Raw slots index the combined window: `0..inventory.size()` is the
/// container's own grid, anything past that is the viewer's personal
/// inventory below it, and [`SLOT_CLICKED_OUTSIDE`] is a click outside
/// both.
#[derive(Debug)]
pub struct ClickEvent {
    player: Arc<Player>,
    inventory: Arc<Inventory>,
    raw_slot: i32,
    click_type: ClickType,
    action: InventoryAction,
    cancelled: AtomicBool,
}

impl ClickEvent {
    /// Creates a click event for a raw window slot.
    #[must_use]
    pub fn new(
        player: Arc<Player>,
        inventory: Arc<Inventory>,
        raw_slot: i32,
        click_type: ClickType,
        action: InventoryAction,
    ) -> Self {
        Self {
            player,
            inventory,
            raw_slot,
            click_type,
            action,
            cancelled: AtomicBool::new(false),
        }
    }

    /// The viewer who clicked.
    #[must_use]
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// The container the viewer has open.
    #[must_use]
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// The raw combined-window slot.
    #[must_use]
    pub fn raw_slot(&self) -> i32 {
        self.raw_slot
    }

    /// The slot within the clicked sub-window (0-based).
    ///
    /// For clicks in the viewer's own inventory this is the index
    /// within that inventory, not within the container grid.
    #[must_use]
    pub fn slot(&self) -> i32 {
        if self.raw_slot >= 0 && !self.in_view() {
            self.raw_slot - self.inventory.size() as i32
        } else {
            self.raw_slot
        }
    }

    /// Returns true when the click landed in the container's own grid
    /// rather than the viewer's personal inventory.
    #[must_use]
    pub fn in_view(&self) -> bool {
        self.raw_slot >= 0 && (self.raw_slot as usize) < self.inventory.size()
    }

    /// The gesture behind the click.
    #[must_use]
    pub fn click_type(&self) -> ClickType {
        self.click_type
    }

    /// What the host will do with the items unless cancelled.
    #[must_use]
    pub fn action(&self) -> InventoryAction {
        self.action
    }

    /// Returns true if the item movement has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Cancels (or un-cancels) the item movement.
    pub fn set_cancelled(&self, cancelled: bool) {
        self.cancelled.store(cancelled, Ordering::Relaxed);
    }
}

/// A viewer dragged the cursor stack across slots.
#[derive(Debug)]
pub struct DragEvent {
    player: Arc<Player>,
    inventory: Arc<Inventory>,
    raw_slots: Vec<usize>,
    drag_type: DragType,
}

impl DragEvent {
    /// Creates a drag event over the given raw window slots.
    #[must_use]
    pub fn new(
        player: Arc<Player>,
        inventory: Arc<Inventory>,
        raw_slots: Vec<usize>,
        drag_type: DragType,
    ) -> Self {
        Self {
            player,
            inventory,
            raw_slots,
            drag_type,
        }
    }

    /// The viewer who dragged.
    #[must_use]
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// The container the viewer has open.
    #[must_use]
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// The raw window slots the drag covered.
    #[must_use]
    pub fn raw_slots(&self) -> &[usize] {
        &self.raw_slots
    }

    /// How the drag distributes items.
    #[must_use]
    pub fn drag_type(&self) -> DragType {
        self.drag_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;
    use text_components::TextComponent;

    #[test]
    fn slot_conversion_for_lower_window() {
        let bus = Arc::new(EventBus::new());
        let player = Player::new("viewer", bus);
        let inventory = Inventory::new(TextComponent::from("t".to_string()), 27);

        let top = ClickEvent::new(
            player.clone(),
            inventory.clone(),
            4,
            ClickType::Left,
            InventoryAction::PickupAll,
        );
        assert!(top.in_view());
        assert_eq!(top.slot(), 4);

        let bottom = ClickEvent::new(
            player.clone(),
            inventory.clone(),
            30,
            ClickType::Left,
            InventoryAction::PickupAll,
        );
        assert!(!bottom.in_view());
        assert_eq!(bottom.slot(), 3);

        let outside = ClickEvent::new(
            player,
            inventory,
            SLOT_CLICKED_OUTSIDE,
            ClickType::Left,
            InventoryAction::DropAllCursor,
        );
        assert!(!outside.in_view());
        assert_eq!(outside.slot(), SLOT_CLICKED_OUTSIDE);
    }

    #[test]
    fn cancellation_flag_round_trips() {
        let bus = Arc::new(EventBus::new());
        let player = Player::new("viewer", bus);
        let inventory = Inventory::new(TextComponent::from("t".to_string()), 9);
        let event = ClickEvent::new(
            player,
            inventory,
            0,
            ClickType::Right,
            InventoryAction::PickupHalf,
        );

        assert!(!event.is_cancelled());
        event.set_cancelled(true);
        assert!(event.is_cancelled());
        event.set_cancelled(false);
        assert!(!event.is_cancelled());
    }
}
