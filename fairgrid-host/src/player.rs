//! Viewers.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::{CloseEvent, CloseReason, EventBus, Inventory, OpenEvent};

/// A connected viewer a container can be shown to.
pub struct Player {
    uuid: Uuid,
    name: String,
    bus: Arc<EventBus>,
    open: Mutex<Option<Arc<Inventory>>>,
}

impl Player {
    /// Creates a viewer wired to the given event bus.
    #[must_use]
    pub fn new(name: impl Into<String>, bus: Arc<EventBus>) -> Arc<Self> {
        Arc::new(Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            bus,
            open: Mutex::new(None),
        })
    }

    /// Returns this viewer's unique id.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns this viewer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the container this viewer currently has open.
    #[must_use]
    pub fn open_container(&self) -> Option<Arc<Inventory>> {
        self.open.lock().clone()
    }

    /// Opens a container for this viewer, firing an open event.
    ///
    /// Opening the container that is already open is a no-op. Opening
    /// over another container closes it first with
    /// [`CloseReason::OpenNew`].
    pub fn open_inventory(self: &Arc<Self>, inventory: Arc<Inventory>) {
        let previous = {
            let mut open = self.open.lock();
            match open.as_ref() {
                Some(current) if Arc::ptr_eq(current, &inventory) => return,
                _ => open.take(),
            }
        };
        if let Some(previous) = previous {
            log::trace!("{} closes {} to open {}", self.name, previous.id(), inventory.id());
            let event = CloseEvent::new(self.clone(), previous, CloseReason::OpenNew);
            self.bus.fire_close(&event);
        }
        *self.open.lock() = Some(inventory.clone());
        let event = OpenEvent::new(self.clone(), inventory);
        self.bus.fire_open(&event);
    }

    /// Closes this viewer's open container, firing a close event.
    pub fn close_inventory(self: &Arc<Self>, reason: CloseReason) {
        let closed = self.open.lock().take();
        if let Some(inventory) = closed {
            let event = CloseEvent::new(self.clone(), inventory, reason);
            self.bus.fire_close(&event);
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("uuid", &self.uuid)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_components::TextComponent;

    fn chest(size: usize) -> Arc<Inventory> {
        Inventory::new(TextComponent::from("chest".to_string()), size)
    }

    #[test]
    fn open_then_close_round_trips() {
        let bus = Arc::new(EventBus::new());
        let player = Player::new("viewer", bus);
        let inventory = chest(27);

        player.open_inventory(inventory.clone());
        assert!(player.open_container().is_some());

        player.close_inventory(CloseReason::Player);
        assert!(player.open_container().is_none());
    }

    #[test]
    fn reopening_same_inventory_is_idempotent() {
        struct Counter(std::sync::atomic::AtomicUsize);
        impl crate::InventoryListener for Counter {
            fn on_open(&self, _event: &OpenEvent) {
                self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }
        }

        let bus = Arc::new(EventBus::new());
        let counter = Arc::new(Counter(std::sync::atomic::AtomicUsize::new(0)));
        bus.register(counter.clone());

        let player = Player::new("viewer", bus);
        let inventory = chest(9);
        player.open_inventory(inventory.clone());
        player.open_inventory(inventory);
        assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 1);
    }

    #[test]
    fn opening_over_another_fires_close_first() {
        struct Track(Mutex<Vec<&'static str>>);
        impl crate::InventoryListener for Track {
            fn on_open(&self, _event: &OpenEvent) {
                self.0.lock().push("open");
            }
            fn on_close(&self, event: &CloseEvent) {
                assert_eq!(event.reason(), CloseReason::OpenNew);
                self.0.lock().push("close");
            }
        }

        let bus = Arc::new(EventBus::new());
        let track = Arc::new(Track(Mutex::new(Vec::new())));
        bus.register(track.clone());

        let player = Player::new("viewer", bus);
        player.open_inventory(chest(9));
        player.open_inventory(chest(18));
        assert_eq!(*track.0.lock(), vec!["open", "close", "open"]);
    }
}
