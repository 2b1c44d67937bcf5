//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::scheduling::notify::NotificationSink;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn FullRepository>,
    /// Sink for best-effort schedule-change notifications
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Create a new application state with the given repository and sink.
    pub fn new(repository: Arc<dyn FullRepository>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}
