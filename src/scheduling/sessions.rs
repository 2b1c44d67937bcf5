//! Class session service: authorization policy, sequencing validation and
//! multi-cohort creation over the session repository.
//!
//! A privileged caller targets explicit cohorts; an unprivileged caller is
//! implicitly scoped to the single cohort on their profile. That
//! resolution happens here, at the boundary, so the repository always
//! receives concrete, already-authorized owner keys.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::error::{SchedulingError, SchedulingResult};
use super::notify::{notify_best_effort, NotificationSink};
use crate::api::{ClassId, SessionId};
use crate::db::repository::ClassSessionRepository;
use crate::models::auth::AuthContext;
use crate::models::interval::Weekday;
use crate::models::schedule::{ClassSession, ClassSessionUpdate, NewClassSession};

/// Request to create a class session.
///
/// `class_ids` is only honored for privileged callers, which must supply
/// at least one cohort; one record per cohort is created, all sharing the
/// same payload. Unprivileged callers always create for their own cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub course_name: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub class_ids: Option<Vec<ClassId>>,
}

/// List sessions visible to the caller.
///
/// Privileged callers see everything, optionally filtered by cohort.
/// Unprivileged callers only see their own cohort; with no cohort on the
/// profile the list is empty rather than an error.
pub async fn list_sessions<R: ClassSessionRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    class_filter: Option<ClassId>,
) -> SchedulingResult<Vec<ClassSession>> {
    if ctx.is_superuser {
        Ok(repo.list_sessions(class_filter).await?)
    } else {
        match ctx.class_id {
            Some(class_id) => Ok(repo.list_sessions(Some(class_id)).await?),
            None => Ok(Vec::new()),
        }
    }
}

/// Fetch one session, enforcing owner-key visibility.
pub async fn get_session<R: ClassSessionRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    id: SessionId,
) -> SchedulingResult<ClassSession> {
    let session = repo.get_session(id).await?;

    if !ctx.is_superuser && ctx.class_id != Some(session.class_id) {
        return Err(SchedulingError::AccessDenied(
            "schedule belongs to another cohort".to_string(),
        ));
    }

    Ok(session)
}

/// Create a session (one record per resolved cohort).
///
/// Sequencing is validated first, then the repository runs the admission
/// check per cohort inside a single transaction; a conflict for any cohort
/// aborts the whole batch. Only the first created record is returned.
pub async fn create_session<R: ClassSessionRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    request: SessionRequest,
) -> SchedulingResult<ClassSession> {
    let class_ids = resolve_owner_cohorts(ctx, request.class_ids.as_deref())?;

    validate_sequencing(request.start_time, request.end_time)?;

    let specs: Vec<NewClassSession> = class_ids
        .into_iter()
        .map(|class_id| NewClassSession {
            class_id,
            course_name: request.course_name.clone(),
            day: request.day,
            start_time: request.start_time,
            end_time: request.end_time,
            location: request.location.clone(),
        })
        .collect();

    let created = repo.create_sessions(&specs).await?;
    created.into_iter().next().ok_or_else(|| {
        SchedulingError::Validation("At least one cohort id is required".to_string())
    })
}

/// Apply a partial update. Privileged-only.
///
/// Affected students are notified best-effort after the mutation commits;
/// a failed dispatch never fails the update.
pub async fn update_session<R: ClassSessionRepository + ?Sized>(
    repo: &R,
    sink: &dyn NotificationSink,
    ctx: &AuthContext,
    id: SessionId,
    update: ClassSessionUpdate,
) -> SchedulingResult<ClassSession> {
    let _existing = repo.get_session(id).await?;

    if !ctx.is_superuser {
        return Err(SchedulingError::AccessDenied(
            "only administrators may modify schedules".to_string(),
        ));
    }

    if let (Some(start), Some(end)) = (update.start_time, update.end_time) {
        validate_sequencing(start, end)?;
    }

    let saved = repo.update_session(id, &update).await?;

    let message = format!(
        "Class updated: {} ({} {}-{}) @ {}",
        saved.course_name, saved.day, saved.start_time, saved.end_time, saved.location
    );
    notify_best_effort(sink, ctx.user_id, saved.class_id, "CLASS_UPDATED", &message).await;

    Ok(saved)
}

/// Delete a session outright. Privileged-only.
pub async fn delete_session<R: ClassSessionRepository + ?Sized>(
    repo: &R,
    sink: &dyn NotificationSink,
    ctx: &AuthContext,
    id: SessionId,
) -> SchedulingResult<()> {
    let session = repo.get_session(id).await?;

    if !ctx.is_superuser {
        return Err(SchedulingError::AccessDenied(
            "only administrators may delete schedules".to_string(),
        ));
    }

    repo.delete_session(id).await?;

    let message = format!(
        "Class deleted: {} ({} {}-{}) @ {}",
        session.course_name, session.day, session.start_time, session.end_time, session.location
    );
    notify_best_effort(sink, ctx.user_id, session.class_id, "CLASS_DELETED", &message).await;

    Ok(())
}

/// Resolve the owner cohorts a create request targets.
fn resolve_owner_cohorts(
    ctx: &AuthContext,
    requested: Option<&[ClassId]>,
) -> SchedulingResult<Vec<ClassId>> {
    if ctx.is_superuser {
        match requested {
            Some(ids) if !ids.is_empty() => Ok(ids.to_vec()),
            _ => Err(SchedulingError::Validation(
                "Admin must specify at least one cohort id".to_string(),
            )),
        }
    } else {
        // Any explicitly requested cohorts are ignored for regular callers.
        match ctx.class_id {
            Some(class_id) => Ok(vec![class_id]),
            None => Err(SchedulingError::AccessDenied(
                "You must have a class assigned to add lessons".to_string(),
            )),
        }
    }
}

fn validate_sequencing(start: NaiveTime, end: NaiveTime) -> SchedulingResult<()> {
    if start >= end {
        return Err(SchedulingError::Validation(
            "Start time must be before end time".to_string(),
        ));
    }
    Ok(())
}
