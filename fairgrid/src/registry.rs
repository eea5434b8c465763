//! Process-wide host binding.

use std::sync::{Arc, OnceLock};

use fairgrid_host::Host;
use thiserror::Error;

use crate::dispatch::GridDispatcher;

static HOST: OnceLock<Arc<Host>> = OnceLock::new();

/// Initialization failures.
#[derive(Debug, Error)]
pub enum InitError {
    /// [`init`] was already called; a second dispatcher registration
    /// would multiply every event.
    #[error("fairgrid is already initialized")]
    AlreadyInitialized,
}

/// Binds the host handle and registers the event dispatcher.
///
/// Call once at plugin startup. Everything that needs the host
/// afterwards (showing containers, the prevent-close reopen) reads the
/// handle stored here.
pub fn init(host: Arc<Host>) -> Result<(), InitError> {
    if HOST.set(host.clone()).is_err() {
        return Err(InitError::AlreadyInitialized);
    }
    host.bus().register(Arc::new(GridDispatcher));
    log::debug!("container dispatcher registered");
    Ok(())
}

/// Returns the bound host handle.
///
/// # Panics
/// Panics when called before [`init`]; binding the host is part of
/// plugin startup.
#[must_use]
pub fn host() -> Arc<Host> {
    try_host().map_or_else(
        || panic!("fairgrid::init must be called at plugin startup"),
        |host| host,
    )
}

/// Returns the bound host handle, or `None` before [`init`].
#[must_use]
pub fn try_host() -> Option<Arc<Host>> {
    HOST.get().cloned()
}
