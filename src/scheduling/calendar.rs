//! iCalendar export of a user's timetable.
//!
//! Each selected session is a weekly recurring event. The abstract
//! `(weekday, start, end)` tuple is anchored to the next-or-same concrete
//! date relative to "today", so the first occurrence is never in the past
//! and never a full week away. Event UIDs derive from the session and user
//! ids alone, which keeps repeated exports idempotent for calendar clients
//! that merge by UID.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::SchedulingResult;
use super::timetable::resolve_selected_sessions;
use crate::api::UserId;
use crate::db::repository::FullRepository;
use crate::models::auth::AuthContext;
use crate::models::interval::Weekday;
use crate::models::schedule::ClassSession;

const PRODID: &str = "-//Campus Schedule//EN";
const EXPORT_FILENAME: &str = "campus_timetable.ics";

/// A rendered calendar document plus the filename to suggest for download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarExport {
    pub filename: String,
    pub content: String,
}

/// Export the caller's current timetable as an iCalendar document.
///
/// Uses the same read path as the timetable view (dangling selections are
/// dropped); the conflict report is not part of the export.
pub async fn export_my_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
) -> SchedulingResult<CalendarExport> {
    let sessions = resolve_selected_sessions(repo, ctx.user_id).await?;
    let today = Utc::now().date_naive();

    Ok(render_calendar(&sessions, ctx.user_id, today))
}

/// Render sessions into a VCALENDAR document, anchored at `today`.
pub fn render_calendar(sessions: &[ClassSession], user_id: UserId, today: NaiveDate) -> CalendarExport {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str(&format!("PRODID:{}\r\n", PRODID));

    for session in sessions {
        let date = next_or_same(today, session.day);
        let start = date.and_time(session.start_time);
        let end = date.and_time(session.end_time);
        let uid = format!(
            "campus-{}-{}@campus-schedule",
            session.id.value(),
            user_id.value()
        );

        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!("UID:{}\r\n", uid));
        out.push_str(&format!("SUMMARY:{}\r\n", escape_text(&session.course_name)));
        out.push_str(&format!("LOCATION:{}\r\n", escape_text(&session.location)));
        out.push_str(&format!("DTSTART:{}\r\n", start.format("%Y%m%dT%H%M%S")));
        out.push_str(&format!("DTEND:{}\r\n", end.format("%Y%m%dT%H%M%S")));
        out.push_str("RRULE:FREQ=WEEKLY\r\n");
        out.push_str("END:VEVENT\r\n");
    }

    out.push_str("END:VCALENDAR\r\n");

    CalendarExport {
        filename: EXPORT_FILENAME.to_string(),
        content: out,
    }
}

/// The next date falling on `day`, counting `today` itself as a match.
pub fn next_or_same(today: NaiveDate, day: Weekday) -> NaiveDate {
    let mut diff =
        day.number_from_monday() as i64 - today.weekday().number_from_monday() as i64;
    if diff < 0 {
        diff += 7;
    }
    today
        .checked_add_days(chrono::Days::new(diff as u64))
        .unwrap_or(today)
}

/// Escape the characters RFC 5545 reserves in TEXT values.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
