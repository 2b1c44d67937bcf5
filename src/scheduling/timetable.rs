//! Personal timetable management.
//!
//! A user's timetable is the set of class sessions they have selected,
//! stored as weak references into the session catalog. Reads resolve the
//! references and attach a conflict report; writes replace the whole set
//! atomically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{SchedulingError, SchedulingResult};
use crate::api::{SessionId, UserId};
use crate::db::repository::{FullRepository, RepositoryError};
use crate::models::auth::AuthContext;
use crate::models::interval::Weekday;
use crate::models::schedule::ClassSession;

/// One overlapping pair in a user's resolved timetable. Derived on every
/// read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableConflict {
    pub day: Weekday,
    pub first_session_id: SessionId,
    pub second_session_id: SessionId,
    pub message: String,
}

/// A resolved timetable: the selected sessions plus their conflict report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableData {
    pub entries: Vec<ClassSession>,
    pub conflicts: Vec<TimetableConflict>,
}

/// Resolve the caller's current timetable and its conflict report.
pub async fn get_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
) -> SchedulingResult<TimetableData> {
    let entries = resolve_selected_sessions(repo, ctx.user_id).await?;
    let conflicts = detect_overlaps(&entries);

    Ok(TimetableData { entries, conflicts })
}

/// Atomically replace the caller's timetable with the given session ids.
///
/// Unknown ids are dropped during resolution. An unprivileged caller must
/// have a cohort and may only select sessions of that cohort; both checks
/// run before anything is deleted, so a rejected replace leaves the prior
/// selection intact. An empty request clears the timetable and is not an
/// error.
pub async fn replace_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    session_ids: &[SessionId],
) -> SchedulingResult<TimetableData> {
    if session_ids.is_empty() {
        repo.replace_selections(ctx.user_id, &[]).await?;
        return Ok(TimetableData {
            entries: Vec::new(),
            conflicts: Vec::new(),
        });
    }

    let entries = repo.get_sessions_by_ids(session_ids).await?;

    if !ctx.is_superuser {
        let class_id = ctx.class_id.ok_or_else(|| {
            SchedulingError::AccessDenied(
                "You must have a class assigned to build a timetable".to_string(),
            )
        })?;
        if entries.iter().any(|s| s.class_id != class_id) {
            return Err(SchedulingError::AccessDenied(
                "Invalid schedule selection".to_string(),
            ));
        }
    }

    let resolved_ids: Vec<SessionId> = entries.iter().map(|s| s.id).collect();
    repo.replace_selections(ctx.user_id, &resolved_ids).await?;

    let conflicts = detect_overlaps(&entries);
    Ok(TimetableData { entries, conflicts })
}

/// Resolve a user's selection records to sessions, dropping references to
/// sessions that have since been deleted.
pub(crate) async fn resolve_selected_sessions<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
) -> SchedulingResult<Vec<ClassSession>> {
    let selections = repo.selections_for(user_id).await?;

    let mut sessions = Vec::with_capacity(selections.len());
    for selection in &selections {
        match repo.get_session(selection.session_id).await {
            Ok(session) => sessions.push(session),
            Err(RepositoryError::NotFound(_)) => {
                log::warn!(
                    "dropping dangling selection: session {} referenced by user {} no longer exists",
                    selection.session_id.value(),
                    user_id.value()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(sessions)
}

/// All pairwise overlaps within a resolved session set, grouped by day.
///
/// Within each day group the sessions are sorted by start time (stable, so
/// ties keep their original order) and scanned pairwise. Because the group
/// is start-sorted, the inner scan for a given earlier session can stop at
/// the first partner starting at or after its end; the bound is re-tested
/// as the partner index advances rather than assumed across the group.
pub fn detect_overlaps(sessions: &[ClassSession]) -> Vec<TimetableConflict> {
    let mut by_day: BTreeMap<u32, Vec<&ClassSession>> = BTreeMap::new();
    for session in sessions {
        by_day
            .entry(session.day.number_from_monday())
            .or_default()
            .push(session);
    }

    let mut conflicts = Vec::new();

    for group in by_day.values_mut() {
        group.sort_by_key(|s| s.start_time);

        for i in 0..group.len() {
            let a = group[i];
            for &b in &group[i + 1..] {
                if b.start_time >= a.end_time {
                    break;
                }

                if a.start_time < b.end_time && a.end_time > b.start_time {
                    conflicts.push(TimetableConflict {
                        day: a.day,
                        first_session_id: a.id,
                        second_session_id: b.id,
                        message: format!(
                            "Overlapping classes: {} and {}",
                            a.course_name, b.course_name
                        ),
                    });
                }
            }
        }
    }

    conflicts
}
