//! Per-Request Transport Session
//!
//! Each inbound POST gets its own session with a fresh identifier. This is
//! what keeps concurrent clients from colliding on request ids: no session
//! is ever reused across requests, and none outlives the request that
//! created it. The teardown hook runs exactly once on every exit path,
//! including abnormal disconnect (axum drops the request future, which
//! drops the session).

use tracing::debug;
use uuid::Uuid;

/// Ephemeral binding between one inbound request and one protocol dispatch.
pub struct Session {
    id: Uuid,
    teardown: Option<Box<dyn FnOnce() + Send>>,
}

impl Session {
    /// Creates a fresh session with a new identifier.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teardown: None,
        }
    }

    /// Session identifier, unique per request.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Registers a hook to run when the session closes. A later hook
    /// replaces an earlier one.
    pub fn on_teardown(&mut self, hook: impl FnOnce() + Send + 'static) {
        self.teardown = Some(Box::new(hook));
    }

    /// Closes the session, running the teardown hook at most once.
    pub fn close(&mut self) {
        if let Some(hook) = self.teardown.take() {
            hook();
            debug!(session = %self.id, "transport session closed");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
