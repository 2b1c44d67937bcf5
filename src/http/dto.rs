//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The record and request types from the service layer already derive
//! Serialize/Deserialize and are re-exported here; this module only adds
//! the wrappers and query shapes specific to the wire.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CalendarExport, ClassSession, ClassSessionUpdate, FacilitySlot, FacilitySlotUpdate, Gender,
    SessionId, TimetableConflict, TimetableData,
};
pub use crate::scheduling::facility::SlotRequest;
pub use crate::scheduling::sessions::SessionRequest;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}

/// Query parameters for the class session listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassListQuery {
    /// Restrict to one cohort (privileged callers only; ignored otherwise)
    #[serde(default)]
    pub class_id: Option<i64>,
}

/// Query parameters for the gym slot listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GymListQuery {
    /// Restrict to one gender bucket (privileged callers only)
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Class session list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassListResponse {
    /// Sessions visible to the caller
    pub sessions: Vec<ClassSession>,
    /// Total count
    pub total: usize,
}

/// Gym slot list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymListResponse {
    /// Slots visible to the caller
    pub slots: Vec<FacilitySlot>,
    /// Total count
    pub total: usize,
}

/// Request body for replacing the caller's timetable. A missing or empty
/// id list clears the timetable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimetableUpdateRequest {
    #[serde(default)]
    pub session_ids: Option<Vec<SessionId>>,
}
