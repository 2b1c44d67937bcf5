//! Database module for schedule data storage.
//!
//! This module provides abstractions for store operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (scheduling/) - Business Logic           │
//! │  - Authorization policy                                 │
//! │  - Sequencing validation                                │
//! │  - Conflict reporting, calendar export                  │
//! └───────────────────┬─────────────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - Admission checks run inside the store transaction    │
//! └───────────────────┬─────────────────────────────────────┘
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                 │
//!     │               (in-memory)                    │
//!     └──────────────────────────────────────────────┘
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

// ==================== Repository Pattern Exports ====================

pub use repositories::LocalRepository;
pub use repository::{
    ClassSessionRepository, FacilitySlotRepository, FullRepository, RepositoryError,
    RepositoryResult, SelectionRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Store not initialized. Call init_repository() first.")
}
