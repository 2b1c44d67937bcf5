//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::NaiveTime;

use campus_rust::api::{ClassId, SessionId, UserId};
use campus_rust::db::repositories::LocalRepository;
use campus_rust::db::repository::ClassSessionRepository;
use campus_rust::models::auth::AuthContext;
use campus_rust::models::interval::Weekday;
use campus_rust::models::schedule::{Gender, NewClassSession};
use campus_rust::scheduling::sessions::SessionRequest;

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Privileged caller.
pub fn admin() -> AuthContext {
    AuthContext::superuser(UserId::new(1))
}

/// Regular caller with an optional cohort.
pub fn student(user_id: i64, class_id: Option<i64>) -> AuthContext {
    AuthContext::student(UserId::new(user_id), class_id.map(ClassId::new), None)
}

/// Regular caller with an optional gender.
pub fn gym_member(user_id: i64, gender: Option<Gender>) -> AuthContext {
    AuthContext::student(UserId::new(user_id), None, gender)
}

pub fn session_request(
    course_name: &str,
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
    class_ids: Option<Vec<i64>>,
) -> SessionRequest {
    SessionRequest {
        course_name: course_name.to_string(),
        day,
        start_time: start,
        end_time: end,
        location: "Main building".to_string(),
        class_ids: class_ids.map(|ids| ids.into_iter().map(ClassId::new).collect()),
    }
}

/// Insert one session directly through the repository, bypassing the
/// service-layer authorization, and return its id.
pub async fn seed_session(
    repo: &LocalRepository,
    class_id: i64,
    course_name: &str,
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
) -> SessionId {
    let created = repo
        .create_sessions(&[NewClassSession {
            class_id: ClassId::new(class_id),
            course_name: course_name.to_string(),
            day,
            start_time: start,
            end_time: end,
            location: "Main building".to_string(),
        }])
        .await
        .expect("seeding session failed");
    created[0].id
}
