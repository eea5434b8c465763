//! The process-wide host handle.

use std::sync::Arc;

use crate::{EventBus, Player, Scheduler, TickQueue};

/// The host runtime handle a plugin is initialized with.
///
/// Bundles the container event bus and the main-thread scheduler; the
/// facade stores one of these process-wide at init and reads it back
/// for event registration and deferred work.
pub struct Host {
    bus: Arc<EventBus>,
    scheduler: Arc<dyn Scheduler>,
}

impl Host {
    /// Creates a host around the given scheduler.
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Arc<Self> {
        Arc::new(Self {
            bus: Arc::new(EventBus::new()),
            scheduler,
        })
    }

    /// Creates a host driven by a [`TickQueue`], returning both.
    ///
    /// The caller owns the queue and pumps it from the main loop.
    #[must_use]
    pub fn with_tick_queue() -> (Arc<Self>, Arc<TickQueue>) {
        let queue = Arc::new(TickQueue::new());
        (Self::new(queue.clone()), queue)
    }

    /// Returns the container event bus.
    #[must_use]
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Returns the main-thread scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &Arc<dyn Scheduler> {
        &self.scheduler
    }

    /// Connects a viewer to this host.
    #[must_use]
    pub fn join(&self, name: impl Into<String>) -> Arc<Player> {
        let player = Player::new(name, self.bus.clone());
        log::debug!("{} joined", player.name());
        player
    }
}
