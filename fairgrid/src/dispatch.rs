//! The process-wide event dispatcher.

use std::sync::Arc;

use fairgrid_host::{
    ClickEvent, CloseEvent, DragEvent, Inventory, InventoryListener, OpenEvent,
};

use crate::FairView;

/// Returns the managed container owning an inventory, if any.
fn owning_view(inventory: &Arc<Inventory>) -> Option<Arc<FairView>> {
    inventory
        .holder()?
        .as_any_arc()
        .downcast::<FairView>()
        .ok()
}

/// The single bus subscriber routing host events into managed
/// containers.
///
/// Registered exactly once at [`crate::init`]; a second registration
/// would dispatch every event twice. Events whose inventory is not
/// held by a [`FairView`] are ignored.
pub(crate) struct GridDispatcher;

impl InventoryListener for GridDispatcher {
    fn on_click(&self, event: &ClickEvent) {
        if let Some(view) = owning_view(event.inventory()) {
            view.handle_click(event);
        }
    }

    fn on_open(&self, event: &OpenEvent) {
        if let Some(view) = owning_view(event.inventory()) {
            view.handle_open(event);
        }
    }

    fn on_close(&self, event: &CloseEvent) {
        if let Some(view) = owning_view(event.inventory()) {
            view.handle_close(event);
        }
    }

    fn on_drag(&self, event: &DragEvent) {
        if let Some(view) = owning_view(event.inventory()) {
            view.handle_drag(event);
        }
    }
}
