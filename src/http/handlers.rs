//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    ClassListQuery, ClassListResponse, GymListQuery, GymListResponse, HealthResponse,
    SessionRequest, SlotRequest, TimetableUpdateRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ClassId, SessionId, SlotId};
use crate::models::auth::AuthContext;
use crate::models::schedule::{ClassSession, ClassSessionUpdate, FacilitySlot, FacilitySlotUpdate};
use crate::scheduling::{calendar, facility, sessions, timetable};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Class Sessions
// =============================================================================

/// GET /v1/classes
///
/// List the class sessions visible to the caller.
pub async fn list_classes(
    State(state): State<AppState>,
    ctx: AuthContext,
    Query(query): Query<ClassListQuery>,
) -> HandlerResult<ClassListResponse> {
    let filter = query.class_id.map(ClassId::new);
    let sessions = sessions::list_sessions(state.repository.as_ref(), &ctx, filter).await?;
    let total = sessions.len();

    Ok(Json(ClassListResponse { sessions, total }))
}

/// GET /v1/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
) -> HandlerResult<ClassSession> {
    let session =
        sessions::get_session(state.repository.as_ref(), &ctx, SessionId::new(id)).await?;
    Ok(Json(session))
}

/// POST /v1/classes
///
/// Create a class session (one record per targeted cohort; the first is
/// returned).
pub async fn create_class(
    State(state): State<AppState>,
    ctx: AuthContext,
    Json(request): Json<SessionRequest>,
) -> Result<(StatusCode, Json<ClassSession>), AppError> {
    let session = sessions::create_session(state.repository.as_ref(), &ctx, request).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /v1/classes/{id}
pub async fn update_class(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
    Json(update): Json<ClassSessionUpdate>,
) -> HandlerResult<ClassSession> {
    let session = sessions::update_session(
        state.repository.as_ref(),
        state.notifier.as_ref(),
        &ctx,
        SessionId::new(id),
        update,
    )
    .await?;
    Ok(Json(session))
}

/// DELETE /v1/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    sessions::delete_session(
        state.repository.as_ref(),
        state.notifier.as_ref(),
        &ctx,
        SessionId::new(id),
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Gym Slots
// =============================================================================

/// GET /v1/gym
pub async fn list_gym_slots(
    State(state): State<AppState>,
    ctx: AuthContext,
    Query(query): Query<GymListQuery>,
) -> HandlerResult<GymListResponse> {
    let slots = facility::list_slots(state.repository.as_ref(), &ctx, query.gender).await?;
    let total = slots.len();

    Ok(Json(GymListResponse { slots, total }))
}

/// GET /v1/gym/{id}
pub async fn get_gym_slot(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
) -> HandlerResult<FacilitySlot> {
    let slot = facility::get_slot(state.repository.as_ref(), &ctx, SlotId::new(id)).await?;
    Ok(Json(slot))
}

/// POST /v1/gym
pub async fn create_gym_slot(
    State(state): State<AppState>,
    ctx: AuthContext,
    Json(request): Json<SlotRequest>,
) -> Result<(StatusCode, Json<FacilitySlot>), AppError> {
    let slot = facility::create_slot(state.repository.as_ref(), &ctx, request).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// PUT /v1/gym/{id}
pub async fn update_gym_slot(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
    Json(update): Json<FacilitySlotUpdate>,
) -> HandlerResult<FacilitySlot> {
    let slot =
        facility::update_slot(state.repository.as_ref(), &ctx, SlotId::new(id), update).await?;
    Ok(Json(slot))
}

/// DELETE /v1/gym/{id}
pub async fn delete_gym_slot(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    facility::delete_slot(state.repository.as_ref(), &ctx, SlotId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Personal Timetable
// =============================================================================

/// GET /v1/timetable
///
/// The caller's resolved timetable plus its conflict report.
pub async fn get_timetable(
    State(state): State<AppState>,
    ctx: AuthContext,
) -> HandlerResult<crate::api::TimetableData> {
    let data = timetable::get_timetable(state.repository.as_ref(), &ctx).await?;
    Ok(Json(data))
}

/// PUT /v1/timetable
///
/// Atomically replace the caller's timetable. An empty id list clears it.
pub async fn put_timetable(
    State(state): State<AppState>,
    ctx: AuthContext,
    Json(request): Json<TimetableUpdateRequest>,
) -> HandlerResult<crate::api::TimetableData> {
    let ids = request.session_ids.unwrap_or_default();
    let data = timetable::replace_timetable(state.repository.as_ref(), &ctx, &ids).await?;
    Ok(Json(data))
}

/// GET /v1/timetable/calendar
///
/// Export the caller's timetable as an iCalendar attachment.
pub async fn export_timetable(
    State(state): State<AppState>,
    ctx: AuthContext,
) -> Result<Response, AppError> {
    let export = calendar::export_my_timetable(state.repository.as_ref(), &ctx).await?;

    let disposition = format!("attachment; filename={}", export.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}
