//! Timetable selection repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{SessionId, UserId};
use crate::models::schedule::SelectionRecord;

/// Repository trait for per-user timetable selections.
///
/// Selections only change through full replacement: the caller's entire
/// prior set is deleted and the new set inserted within one transaction.
/// There is no single-record insert or delete on purpose.
#[async_trait]
pub trait SelectionRepository: Send + Sync {
    /// All selection records for a user, in insertion order.
    async fn selections_for(&self, user_id: UserId) -> RepositoryResult<Vec<SelectionRecord>>;

    /// Atomically replace a user's selections with one record per given
    /// session id. An empty list clears the timetable.
    ///
    /// The `(user, session)` pair is unique: a duplicated id in `session_ids`
    /// fails the whole replace with `ConstraintViolation` and the prior
    /// selection set is left untouched.
    async fn replace_selections(
        &self,
        user_id: UserId,
        session_ids: &[SessionId],
    ) -> RepositoryResult<()>;
}
