//! The container event bus.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{ClickEvent, CloseEvent, DragEvent, OpenEvent};

/// A subscriber to container events.
///
/// Every method defaults to a no-op so listeners implement only what
/// they route.
pub trait InventoryListener: Send + Sync {
    /// Called for every container click.
    fn on_click(&self, _event: &ClickEvent) {}

    /// Called when a container is opened.
    fn on_open(&self, _event: &OpenEvent) {}

    /// Called when a container is closed.
    fn on_close(&self, _event: &CloseEvent) {}

    /// Called for every container drag.
    fn on_drag(&self, _event: &DragEvent) {}
}

/// Synchronous fan-out of container events to registered listeners.
///
/// Listeners run on the firing thread, in registration order, with the
/// registry lock released, so a listener may open or close inventories
/// (and thereby fire further events) without deadlocking.
#[derive(Default)]
pub struct EventBus {
    listeners: Mutex<Vec<Arc<dyn InventoryListener>>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn register(&self, listener: Arc<dyn InventoryListener>) {
        self.listeners.lock().push(listener);
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn InventoryListener>> {
        self.listeners.lock().clone()
    }

    /// Delivers a click event to every listener.
    pub fn fire_click(&self, event: &ClickEvent) {
        for listener in self.snapshot() {
            listener.on_click(event);
        }
    }

    /// Delivers an open event to every listener.
    pub fn fire_open(&self, event: &OpenEvent) {
        for listener in self.snapshot() {
            listener.on_open(event);
        }
    }

    /// Delivers a close event to every listener.
    pub fn fire_close(&self, event: &CloseEvent) {
        for listener in self.snapshot() {
            listener.on_close(event);
        }
    }

    /// Delivers a drag event to every listener.
    pub fn fire_drag(&self, event: &DragEvent) {
        for listener in self.snapshot() {
            listener.on_drag(event);
        }
    }
}
