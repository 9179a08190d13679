//! Server state shared by the handlers.

use crate::usecase::RelayHandle;

/// Shared application state
pub struct AppState {
    /// Handle to the relay actor that owns the roster
    pub relay: RelayHandle,
}
