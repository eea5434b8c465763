//! Inventory holder identity.

use std::any::Any;
use std::sync::Arc;

/// The object an inventory reports as its owner.
///
/// Event routing keys off holder identity: a dispatcher downcasts the
/// holder to its own container type and forwards the event, so no side
/// map from inventory handle to owner is needed (the handle is replaced
/// wholesale on title changes, the holder is not).
pub trait InventoryHolder: Send + Sync + 'static {
    /// Returns self for identity tests.
    fn as_any(&self) -> &dyn Any;

    /// Returns self as an `Arc` for owned downcasts.
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
