//! Scheduled resource records and their create/update specs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::interval::{Interval, Weekday};
use crate::api::{ClassId, SessionId, SlotId, UserId};

/// Gender bucket used as the owner key for facility slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weekly recurring class session, owned by a single student cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: SessionId,
    pub class_id: ClassId,
    pub course_name: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
}

impl ClassSession {
    pub fn interval(&self) -> Interval {
        Interval::new(self.day, self.start_time, self.end_time)
    }
}

/// Payload for inserting one class session record. Multi-cohort creation
/// produces one of these per cohort, all sharing the same interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassSession {
    pub class_id: ClassId,
    pub course_name: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
}

impl NewClassSession {
    pub fn interval(&self) -> Interval {
        Interval::new(self.day, self.start_time, self.end_time)
    }
}

/// Partial update of a class session; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassSessionUpdate {
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub day: Option<Weekday>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A weekly recurring facility opening slot, owned by a gender bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySlot {
    pub id: SlotId,
    pub gender: Gender,
    pub day: Weekday,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl FacilitySlot {
    pub fn interval(&self) -> Interval {
        Interval::new(self.day, self.open_time, self.close_time)
    }
}

/// Payload for inserting a facility slot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFacilitySlot {
    pub gender: Gender,
    pub day: Weekday,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl NewFacilitySlot {
    pub fn interval(&self) -> Interval {
        Interval::new(self.day, self.open_time, self.close_time)
    }
}

/// Partial update of a facility slot; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilitySlotUpdate {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub day: Option<Weekday>,
    #[serde(default)]
    pub open_time: Option<NaiveTime>,
    #[serde(default)]
    pub close_time: Option<NaiveTime>,
}

/// One entry of a user's personal timetable: a weak reference into the
/// class session store, unique on `(user_id, session_id)`. Deleting the
/// referenced session does not cascade here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub id: i64,
    pub user_id: UserId,
    pub session_id: SessionId,
}
