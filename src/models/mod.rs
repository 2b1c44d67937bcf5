//! Core record and value types shared across the engine.

pub mod auth;
pub mod interval;
pub mod schedule;

pub use auth::AuthContext;
pub use interval::{Interval, Weekday};
pub use schedule::{
    ClassSession, ClassSessionUpdate, FacilitySlot, FacilitySlotUpdate, Gender, NewClassSession,
    NewFacilitySlot, SelectionRecord,
};
