//! Process-wide dispatch options.

use std::sync::atomic::{AtomicBool, Ordering};

static TRIGGER_CLICK_ON_MAIN_INVENTORY: AtomicBool = AtomicBool::new(true);

/// When true (the default), per-slot click handlers only fire for
/// clicks inside the managed container's own grid. When false, they
/// fire for any click routed to a managed container, including clicks
/// in the viewer's personal inventory below it.
///
/// Container-scope handlers fire either way; they can read
/// [`ClickEvent::in_view`](fairgrid_host::ClickEvent::in_view) to tell
/// the windows apart.
#[must_use]
pub fn trigger_click_on_main_inventory() -> bool {
    TRIGGER_CLICK_ON_MAIN_INVENTORY.load(Ordering::Relaxed)
}

/// Sets [`trigger_click_on_main_inventory`].
pub fn set_trigger_click_on_main_inventory(value: bool) {
    TRIGGER_CLICK_ON_MAIN_INVENTORY.store(value, Ordering::Relaxed);
}
