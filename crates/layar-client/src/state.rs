//! Application state shared across all Tauri commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` and registered with
//! Tauri's managed state system so that every invoke handler can access it.

use layar_shared::auth::{AuthPolicy, StaticCredentials};
use layar_store::SliceStore;

/// Central application state.
///
/// Holds the open slice store, the session-local admin flag, and the
/// injected credential policy behind the admin gate.
pub struct AppState {
    /// Handle to the local SQLite-backed slice store.
    pub store: SliceStore,

    /// Whether this session has passed the admin login gate.
    /// Never persisted; reopening the app requires a fresh login.
    pub is_admin: bool,

    /// Credential check used by the login command.
    pub auth: Box<dyn AuthPolicy>,
}

impl AppState {
    /// Create the state for an opened store with the default credential
    /// policy.
    pub fn new(store: SliceStore) -> Self {
        Self::with_policy(store, Box::new(StaticCredentials::default()))
    }

    /// Create the state with an explicit credential policy.
    pub fn with_policy(store: SliceStore, auth: Box<dyn AuthPolicy>) -> Self {
        Self {
            store,
            is_admin: false,
            auth,
        }
    }
}
