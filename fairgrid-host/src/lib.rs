//! Host runtime model for the FairGrid container facade.
//!
//! This crate is the single-threaded cooperative host the facade
//! decorates: inventories with holder identity, viewers, the container
//! event bus and the tick scheduler. All event delivery and all state
//! mutation observed by callbacks happen on the host main thread; the
//! only suspension point is the "next tick" boundary.

mod bus;
mod click;
mod event;
mod holder;
mod host;
mod inventory;
mod player;
mod scheduler;

pub use bus::{EventBus, InventoryListener};
pub use click::{ClickType, CloseReason, DragType, InventoryAction};
pub use event::{ClickEvent, CloseEvent, DragEvent, OpenEvent, SLOT_CLICKED_OUTSIDE};
pub use holder::InventoryHolder;
pub use host::Host;
pub use inventory::Inventory;
pub use player::Player;
pub use scheduler::{Scheduler, Task, TickQueue};
