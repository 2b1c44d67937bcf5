//! Facility slot repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::SlotId;
use crate::models::schedule::{FacilitySlot, FacilitySlotUpdate, Gender, NewFacilitySlot};

/// Repository trait for gender-scoped facility slots.
///
/// The single-record create is the degenerate case of the batch admission
/// used for class sessions: the slot is checked against existing records
/// for the same gender and day inside the store transaction.
#[async_trait]
pub trait FacilitySlotRepository: Send + Sync {
    /// List slots, optionally restricted to one gender bucket.
    async fn list_slots(&self, gender_filter: Option<Gender>) -> RepositoryResult<Vec<FacilitySlot>>;

    /// Retrieve a single slot by id.
    async fn get_slot(&self, id: SlotId) -> RepositoryResult<FacilitySlot>;

    /// Insert a slot after admission-checking it.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - the slot overlaps an
    ///   existing one for the same gender and day
    async fn create_slot(&self, spec: &NewFacilitySlot) -> RepositoryResult<FacilitySlot>;

    /// Apply a partial update to a slot.
    async fn update_slot(
        &self,
        id: SlotId,
        update: &FacilitySlotUpdate,
    ) -> RepositoryResult<FacilitySlot>;

    /// Delete a slot outright.
    async fn delete_slot(&self, id: SlotId) -> RepositoryResult<()>;
}
