//! Class session repository trait.
//!
//! CRUD operations for cohort-scoped class sessions. Creation is a batch
//! operation so that a multi-cohort insert is one transaction: the
//! admission check (no overlapping record for the same cohort and day)
//! runs per record inside that transaction, and any failure aborts the
//! whole batch.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ClassId, SessionId};
use crate::models::schedule::{ClassSession, ClassSessionUpdate, NewClassSession};

/// Repository trait for class session records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ClassSessionRepository: Send + Sync {
    /// Check if the backing store is reachable and healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List sessions, optionally restricted to one cohort.
    async fn list_sessions(
        &self,
        class_filter: Option<ClassId>,
    ) -> RepositoryResult<Vec<ClassSession>>;

    /// Retrieve a single session by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - if the session doesn't exist
    async fn get_session(&self, id: SessionId) -> RepositoryResult<ClassSession>;

    /// Resolve a list of ids to the sessions that exist, preserving the
    /// request order. Unknown ids are omitted, not an error.
    async fn get_sessions_by_ids(&self, ids: &[SessionId]) -> RepositoryResult<Vec<ClassSession>>;

    /// Insert a batch of sessions atomically.
    ///
    /// Each record is admission-checked against the committed state plus
    /// the records staged earlier in the same batch. On any conflict the
    /// whole batch is rejected and nothing is persisted.
    ///
    /// # Returns
    /// * `Ok(Vec<ClassSession>)` - the created records, in input order
    /// * `Err(RepositoryError::ValidationError)` - admission failure
    async fn create_sessions(
        &self,
        specs: &[NewClassSession],
    ) -> RepositoryResult<Vec<ClassSession>>;

    /// Apply a partial update to a session.
    async fn update_session(
        &self,
        id: SessionId,
        update: &ClassSessionUpdate,
    ) -> RepositoryResult<ClassSession>;

    /// Delete a session outright. Selection records referencing it are
    /// left in place (weak references, dropped lazily on timetable reads).
    async fn delete_session(&self, id: SessionId) -> RepositoryResult<()>;
}
