//! Repository trait definitions for database operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract store operations. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`sessions`]: Cohort-scoped class session CRUD with batch admission
//! - [`facility`]: Gender-scoped facility slot CRUD with admission
//! - [`selections`]: Per-user timetable selections with atomic replace-all
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> SchedulingResult<()> {
//!     let sessions = repo.list_sessions(None).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod facility;
pub mod selections;
pub mod sessions;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use facility::FacilitySlotRepository;
pub use selections::SelectionRepository;
pub use sessions::ClassSessionRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all three
/// repository traits. Use this as a convenient bound when a service needs
/// access to more than one record kind (the timetable and calendar paths
/// touch both sessions and selections).
pub trait FullRepository:
    ClassSessionRepository + FacilitySlotRepository + SelectionRepository
{
}

// Blanket implementation: any type implementing all three traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: ClassSessionRepository + FacilitySlotRepository + SelectionRepository
{
}
