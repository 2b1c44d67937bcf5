//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap and Vec structures, providing fast, deterministic,
//! and isolated execution.
//!
//! Every mutating operation takes the single write lock for its whole
//! duration and stages its writes before committing them, so the
//! transactional guarantees the traits promise (atomic multi-cohort
//! create, atomic replace-all) hold here by construction, and concurrent
//! admission checks are serialized rather than racing check-then-act.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::api::{ClassId, SessionId, SlotId, UserId};
use crate::db::repository::*;
use crate::models::schedule::{
    ClassSession, ClassSessionUpdate, FacilitySlot, FacilitySlotUpdate, Gender, NewClassSession,
    NewFacilitySlot, SelectionRecord,
};
use crate::scheduling::overlap::find_admission_conflict;

/// In-memory local repository.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
/// let created = repo.create_sessions(&[spec]).await?;
/// assert_eq!(repo.session_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    sessions: HashMap<SessionId, ClassSession>,
    slots: HashMap<SlotId, FacilitySlot>,
    selections: Vec<SelectionRecord>,

    // ID counters
    next_session_id: i64,
    next_slot_id: i64,
    next_selection_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
            slots: HashMap::new(),
            selections: Vec::new(),
            next_session_id: 1,
            next_slot_id: 1,
            next_selection_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of class sessions stored.
    pub fn session_count(&self) -> usize {
        self.data.read().unwrap().sessions.len()
    }

    /// Number of selection records stored, across all users.
    pub fn selection_count(&self) -> usize {
        self.data.read().unwrap().selections.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassSessionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn list_sessions(
        &self,
        class_filter: Option<ClassId>,
    ) -> RepositoryResult<Vec<ClassSession>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        let mut sessions: Vec<ClassSession> = data
            .sessions
            .values()
            .filter(|s| class_filter.is_none_or(|c| s.class_id == c))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.id);

        Ok(sessions)
    }

    async fn get_session(&self, id: SessionId) -> RepositoryResult<ClassSession> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        data.sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Session {}", id.value())))
    }

    async fn get_sessions_by_ids(&self, ids: &[SessionId]) -> RepositoryResult<Vec<ClassSession>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        // Unknown ids are dropped; request order (and duplicates) preserved.
        Ok(ids
            .iter()
            .filter_map(|id| data.sessions.get(id).cloned())
            .collect())
    }

    async fn create_sessions(
        &self,
        specs: &[NewClassSession],
    ) -> RepositoryResult<Vec<ClassSession>> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        // Stage the whole batch before touching the map: a conflict for any
        // cohort aborts the entire create.
        let mut staged: Vec<ClassSession> = Vec::with_capacity(specs.len());
        for spec in specs {
            let candidate = spec.interval();
            let conflict = find_admission_conflict(
                spec.class_id,
                &candidate,
                data.sessions.values().chain(staged.iter()),
            );
            if let Some(existing) = conflict {
                return Err(RepositoryError::ValidationError(format!(
                    "This class overlaps with '{}' in cohort {}'s schedule",
                    existing.course_name,
                    spec.class_id.value()
                )));
            }

            let id = SessionId::new(data.next_session_id + staged.len() as i64);
            staged.push(ClassSession {
                id,
                class_id: spec.class_id,
                course_name: spec.course_name.clone(),
                day: spec.day,
                start_time: spec.start_time,
                end_time: spec.end_time,
                location: spec.location.clone(),
            });
        }

        data.next_session_id += staged.len() as i64;
        for session in &staged {
            data.sessions.insert(session.id, session.clone());
        }

        Ok(staged)
    }

    async fn update_session(
        &self,
        id: SessionId,
        update: &ClassSessionUpdate,
    ) -> RepositoryResult<ClassSession> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        let session = data
            .sessions
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Session {}", id.value())))?;

        if let Some(course_name) = &update.course_name {
            session.course_name = course_name.clone();
        }
        if let Some(day) = update.day {
            session.day = day;
        }
        if let Some(start_time) = update.start_time {
            session.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            session.end_time = end_time;
        }
        if let Some(location) = &update.location {
            session.location = location.clone();
        }

        Ok(session.clone())
    }

    async fn delete_session(&self, id: SessionId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        data.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Session {}", id.value())))
    }
}

#[async_trait]
impl FacilitySlotRepository for LocalRepository {
    async fn list_slots(
        &self,
        gender_filter: Option<Gender>,
    ) -> RepositoryResult<Vec<FacilitySlot>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        let mut slots: Vec<FacilitySlot> = data
            .slots
            .values()
            .filter(|s| gender_filter.is_none_or(|g| s.gender == g))
            .cloned()
            .collect();
        slots.sort_by_key(|s| s.id);

        Ok(slots)
    }

    async fn get_slot(&self, id: SlotId) -> RepositoryResult<FacilitySlot> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        data.slots
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Gym slot {}", id.value())))
    }

    async fn create_slot(&self, spec: &NewFacilitySlot) -> RepositoryResult<FacilitySlot> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        let candidate = spec.interval();
        if let Some(existing) =
            find_admission_conflict(spec.gender, &candidate, data.slots.values())
        {
            return Err(RepositoryError::ValidationError(format!(
                "This time slot overlaps with an existing gym slot ({} {}-{})",
                existing.day, existing.open_time, existing.close_time
            )));
        }

        let slot = FacilitySlot {
            id: SlotId::new(data.next_slot_id),
            gender: spec.gender,
            day: spec.day,
            open_time: spec.open_time,
            close_time: spec.close_time,
        };
        data.next_slot_id += 1;
        data.slots.insert(slot.id, slot.clone());

        Ok(slot)
    }

    async fn update_slot(
        &self,
        id: SlotId,
        update: &FacilitySlotUpdate,
    ) -> RepositoryResult<FacilitySlot> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        let slot = data
            .slots
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Gym slot {}", id.value())))?;

        if let Some(gender) = update.gender {
            slot.gender = gender;
        }
        if let Some(day) = update.day {
            slot.day = day;
        }
        if let Some(open_time) = update.open_time {
            slot.open_time = open_time;
        }
        if let Some(close_time) = update.close_time {
            slot.close_time = close_time;
        }

        Ok(slot.clone())
    }

    async fn delete_slot(&self, id: SlotId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        data.slots
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Gym slot {}", id.value())))
    }
}

#[async_trait]
impl SelectionRepository for LocalRepository {
    async fn selections_for(&self, user_id: UserId) -> RepositoryResult<Vec<SelectionRecord>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        Ok(data
            .selections
            .iter()
            .filter(|s| s.user_id == user_id)
            .copied()
            .collect())
    }

    async fn replace_selections(
        &self,
        user_id: UserId,
        session_ids: &[SessionId],
    ) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();

        // Stage the new set first; the delete only happens once the whole
        // insert list has passed the uniqueness constraint.
        let mut seen: HashSet<SessionId> = HashSet::new();
        let mut staged: Vec<SelectionRecord> = Vec::with_capacity(session_ids.len());
        for (offset, session_id) in session_ids.iter().enumerate() {
            if !data.sessions.contains_key(session_id) {
                return Err(RepositoryError::NotFound(format!(
                    "Session {}",
                    session_id.value()
                )));
            }
            if !seen.insert(*session_id) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Duplicate selection of session {} for user {}",
                    session_id.value(),
                    user_id.value()
                )));
            }
            staged.push(SelectionRecord {
                id: data.next_selection_id + offset as i64,
                user_id,
                session_id: *session_id,
            });
        }

        data.next_selection_id += staged.len() as i64;
        data.selections.retain(|s| s.user_id != user_id);
        data.selections.extend(staged);

        Ok(())
    }
}
