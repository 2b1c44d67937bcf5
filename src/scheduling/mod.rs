//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository. They apply
//! the authorization policy to an already-resolved caller context, run the
//! cheap validations (time sequencing) before the store-level admission
//! checks, and assemble the response shapes.

pub mod calendar;
pub mod error;
pub mod facility;
pub mod notify;
pub mod overlap;
pub mod sessions;
pub mod timetable;

pub use calendar::{export_my_timetable, render_calendar, CalendarExport};
pub use error::{SchedulingError, SchedulingResult};
pub use facility::SlotRequest;
pub use notify::{LogNotifier, NotificationSink};
pub use overlap::{find_admission_conflict, ScheduledEntry};
pub use sessions::SessionRequest;
pub use timetable::{
    detect_overlaps, get_timetable, replace_timetable, TimetableConflict, TimetableData,
};
