//! Facility slot service.
//!
//! Same policy shape as the class session service with gender as the
//! owner key. Creation is always single-owner: a slot belongs to exactly
//! one gender bucket.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::error::{SchedulingError, SchedulingResult};
use crate::api::SlotId;
use crate::db::repository::FacilitySlotRepository;
use crate::models::auth::AuthContext;
use crate::models::interval::Weekday;
use crate::models::schedule::{FacilitySlot, FacilitySlotUpdate, Gender, NewFacilitySlot};

/// Request to create a facility slot. `gender` is required for privileged
/// callers and ignored for unprivileged ones (their own is used).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRequest {
    #[serde(default)]
    pub gender: Option<Gender>,
    pub day: Weekday,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

/// List slots visible to the caller.
pub async fn list_slots<R: FacilitySlotRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    gender_filter: Option<Gender>,
) -> SchedulingResult<Vec<FacilitySlot>> {
    if ctx.is_superuser {
        Ok(repo.list_slots(gender_filter).await?)
    } else {
        match ctx.gender {
            Some(gender) => Ok(repo.list_slots(Some(gender)).await?),
            None => Ok(Vec::new()),
        }
    }
}

/// Fetch one slot, enforcing owner-key visibility.
pub async fn get_slot<R: FacilitySlotRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    id: SlotId,
) -> SchedulingResult<FacilitySlot> {
    let slot = repo.get_slot(id).await?;

    if !ctx.is_superuser && ctx.gender != Some(slot.gender) {
        return Err(SchedulingError::AccessDenied(
            "gym slot belongs to another gender bucket".to_string(),
        ));
    }

    Ok(slot)
}

/// Create a slot for the resolved gender bucket.
pub async fn create_slot<R: FacilitySlotRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    request: SlotRequest,
) -> SchedulingResult<FacilitySlot> {
    let gender = if ctx.is_superuser {
        request.gender.ok_or_else(|| {
            SchedulingError::Validation("Admin must specify a gender for gym slots".to_string())
        })?
    } else {
        ctx.gender.ok_or_else(|| {
            SchedulingError::AccessDenied(
                "You must have a gender assigned to add gym slots".to_string(),
            )
        })?
    };

    validate_sequencing(request.open_time, request.close_time)?;

    let spec = NewFacilitySlot {
        gender,
        day: request.day,
        open_time: request.open_time,
        close_time: request.close_time,
    };

    Ok(repo.create_slot(&spec).await?)
}

/// Apply a partial update. Privileged-only.
pub async fn update_slot<R: FacilitySlotRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    id: SlotId,
    update: FacilitySlotUpdate,
) -> SchedulingResult<FacilitySlot> {
    let _existing = repo.get_slot(id).await?;

    if !ctx.is_superuser {
        return Err(SchedulingError::AccessDenied(
            "only administrators may modify gym slots".to_string(),
        ));
    }

    if let (Some(open), Some(close)) = (update.open_time, update.close_time) {
        validate_sequencing(open, close)?;
    }

    Ok(repo.update_slot(id, &update).await?)
}

/// Delete a slot outright. Privileged-only.
pub async fn delete_slot<R: FacilitySlotRepository + ?Sized>(
    repo: &R,
    ctx: &AuthContext,
    id: SlotId,
) -> SchedulingResult<()> {
    let _existing = repo.get_slot(id).await?;

    if !ctx.is_superuser {
        return Err(SchedulingError::AccessDenied(
            "only administrators may delete gym slots".to_string(),
        ));
    }

    Ok(repo.delete_slot(id).await?)
}

fn validate_sequencing(open: NaiveTime, close: NaiveTime) -> SchedulingResult<()> {
    if open >= close {
        return Err(SchedulingError::Validation(
            "Open time must be before close time".to_string(),
        ));
    }
    Ok(())
}
