//! Owner-scoped admission checking.
//!
//! Both scheduled resource kinds (class sessions keyed by cohort, facility
//! slots keyed by gender) run the same write-time gate: a candidate
//! interval is rejected as soon as one existing record with the same owner
//! key and weekday overlaps it. The gate stops at the first hit — it is a
//! rejection, not a report; the read-time pairwise report lives in
//! [`crate::scheduling::timetable`].

use crate::models::interval::Interval;
use crate::models::schedule::{ClassSession, FacilitySlot};

/// A stored record that participates in owner-scoped admission.
pub trait ScheduledEntry {
    /// Scope within which two intervals can conflict. Records with
    /// different owner keys never conflict with each other.
    type OwnerKey: PartialEq + Copy;

    fn owner_key(&self) -> Self::OwnerKey;
    fn interval(&self) -> Interval;
}

impl ScheduledEntry for ClassSession {
    type OwnerKey = crate::api::ClassId;

    fn owner_key(&self) -> Self::OwnerKey {
        self.class_id
    }

    fn interval(&self) -> Interval {
        ClassSession::interval(self)
    }
}

impl ScheduledEntry for FacilitySlot {
    type OwnerKey = crate::models::schedule::Gender;

    fn owner_key(&self) -> Self::OwnerKey {
        self.gender
    }

    fn interval(&self) -> Interval {
        FacilitySlot::interval(self)
    }
}

/// Find the first existing entry that blocks admission of `candidate` for
/// `owner`: same owner key, same day, overlapping time range.
pub fn find_admission_conflict<'a, E, I>(
    owner: E::OwnerKey,
    candidate: &Interval,
    existing: I,
) -> Option<&'a E>
where
    E: ScheduledEntry + 'a,
    I: IntoIterator<Item = &'a E>,
{
    existing
        .into_iter()
        .find(|entry| entry.owner_key() == owner && candidate.conflicts_with(&entry.interval()))
}
