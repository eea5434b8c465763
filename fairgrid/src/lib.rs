//! # FairGrid
//!
//! A declarative container-GUI facade for a tick-driven game server
//! host. Plugin code describes a container (title, rows, items at
//! slots, per-item click handlers, container-wide handlers, a
//! close-prevention policy) and a single process-wide dispatcher
//! routes host events to the right container and slot.
//!
//! ```no_run
//! use fairgrid::{FairView, InventorySize, ItemHandle};
//! use fairgrid_host::Host;
//! use fairgrid_item::Material;
//!
//! let (host, _ticks) = Host::with_tick_queue();
//! fairgrid::init(host.clone()).expect("first init");
//!
//! let menu = FairView::create("Quests", InventorySize::rows(3));
//! let button = ItemHandle::of(Material::Emerald);
//! button.name("Accept").click(|event| {
//!     log::info!("{} accepted", event.player().name());
//! });
//! menu.set(5, &button).prevent_close(true);
//!
//! let player = host.join("Alex");
//! menu.show(&player);
//! ```

mod dispatch;
mod item;
pub mod options;
mod registry;
mod size;
mod view;

pub use item::{ClickFn, ItemHandle};
pub use registry::{InitError, host, init, try_host};
pub use size::{InventorySize, SizeError};
pub use view::FairView;
