//! Repository implementations.
//!
//! Only the in-memory local backend lives here; the trait split in
//! [`crate::db::repository`] keeps a SQL-backed implementation pluggable.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
