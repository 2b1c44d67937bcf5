//! Public API surface for the scheduling backend.
//!
//! This file consolidates the identifier newtypes and DTO types for the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::interval::{Interval, Weekday};
pub use crate::models::schedule::{
    ClassSession, ClassSessionUpdate, FacilitySlot, FacilitySlotUpdate, Gender, NewClassSession,
    NewFacilitySlot, SelectionRecord,
};
pub use crate::scheduling::calendar::CalendarExport;
pub use crate::scheduling::timetable::{TimetableConflict, TimetableData};

use serde::{Deserialize, Serialize};

/// Class session identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub i64);

/// Facility slot identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub i64);

/// User identifier, resolved by the identity gateway.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Student cohort identifier. Treated as an opaque owner key; the cohort
/// catalog itself lives outside this engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub i64);

impl SessionId {
    pub fn new(value: i64) -> Self {
        SessionId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SlotId {
    pub fn new(value: i64) -> Self {
        SlotId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ClassId {
    pub fn new(value: i64) -> Self {
        ClassId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
