//! Integration tests for the class session store: admission control,
//! owner-key scoping and the authorization policy.

mod support;

use campus_rust::api::{ClassId, SessionId, UserId};
use campus_rust::db::repositories::LocalRepository;
use campus_rust::db::repository::ClassSessionRepository;
use campus_rust::models::interval::Weekday;
use campus_rust::models::schedule::ClassSessionUpdate;
use campus_rust::scheduling::error::SchedulingError;
use campus_rust::scheduling::notify::{LogNotifier, NotificationSink};
use campus_rust::scheduling::sessions;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use support::{admin, seed_session, session_request, student, t};

#[tokio::test]
async fn test_admin_create_one_record_per_cohort() {
    let repo = LocalRepository::new();

    let first = sessions::create_session(
        &repo,
        &admin(),
        session_request("Algorithms", Weekday::Monday, t(9, 0), t(10, 0), Some(vec![1, 2])),
    )
    .await
    .unwrap();

    assert_eq!(first.class_id, ClassId::new(1));
    assert_eq!(repo.session_count(), 2);

    let for_second = repo.list_sessions(Some(ClassId::new(2))).await.unwrap();
    assert_eq!(for_second.len(), 1);
    assert_eq!(for_second[0].course_name, "Algorithms");
}

#[tokio::test]
async fn test_admission_rejects_overlap_same_owner_only() {
    let repo = LocalRepository::new();
    seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    // Same cohort, overlapping interval: rejected.
    let err = sessions::create_session(
        &repo,
        &admin(),
        session_request("Physics", Weekday::Monday, t(9, 30), t(10, 30), Some(vec![1])),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));
    assert!(err.to_string().contains("Algorithms"));

    // Different cohort, same interval: admitted.
    sessions::create_session(
        &repo,
        &admin(),
        session_request("Physics", Weekday::Monday, t(9, 30), t(10, 30), Some(vec![2])),
    )
    .await
    .unwrap();

    // Same cohort, different day: admitted.
    sessions::create_session(
        &repo,
        &admin(),
        session_request("Physics", Weekday::Tuesday, t(9, 30), t(10, 30), Some(vec![1])),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_admission_allows_back_to_back_sessions() {
    let repo = LocalRepository::new();
    seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    sessions::create_session(
        &repo,
        &admin(),
        session_request("Physics", Weekday::Monday, t(10, 0), t(11, 0), Some(vec![1])),
    )
    .await
    .unwrap();

    assert_eq!(repo.session_count(), 2);
}

#[tokio::test]
async fn test_sequencing_validated_before_admission() {
    let repo = LocalRepository::new();

    for (start, end) in [(t(10, 0), t(9, 0)), (t(9, 0), t(9, 0))] {
        let err = sessions::create_session(
            &repo,
            &admin(),
            session_request("Algorithms", Weekday::Monday, start, end, Some(vec![1])),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Start time must be before end time"));
    }
    assert_eq!(repo.session_count(), 0);
}

#[tokio::test]
async fn test_multi_cohort_create_is_atomic() {
    let repo = LocalRepository::new();
    // Only cohort 2 has a conflicting session.
    seed_session(&repo, 2, "Chemistry", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let err = sessions::create_session(
        &repo,
        &admin(),
        session_request("Algorithms", Weekday::Monday, t(9, 30), t(10, 30), Some(vec![1, 2])),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));

    // The cohort-1 record staged before the conflict must not survive.
    let for_first = repo.list_sessions(Some(ClassId::new(1))).await.unwrap();
    assert!(for_first.is_empty());
    assert_eq!(repo.session_count(), 1);
}

#[tokio::test]
async fn test_student_create_scoped_to_own_cohort() {
    let repo = LocalRepository::new();

    // An explicit cohort list from a student is ignored.
    let created = sessions::create_session(
        &repo,
        &student(10, Some(5)),
        session_request("Algorithms", Weekday::Monday, t(9, 0), t(10, 0), Some(vec![1, 2])),
    )
    .await
    .unwrap();

    assert_eq!(created.class_id, ClassId::new(5));
    assert_eq!(repo.session_count(), 1);
}

#[tokio::test]
async fn test_student_create_runs_admission() {
    let repo = LocalRepository::new();
    seed_session(&repo, 5, "Chemistry", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let err = sessions::create_session(
        &repo,
        &student(10, Some(5)),
        session_request("Algorithms", Weekday::Monday, t(9, 30), t(10, 30), None),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));
}

#[tokio::test]
async fn test_student_without_cohort_cannot_create() {
    let repo = LocalRepository::new();

    let err = sessions::create_session(
        &repo,
        &student(10, None),
        session_request("Algorithms", Weekday::Monday, t(9, 0), t(10, 0), None),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));
}

#[tokio::test]
async fn test_admin_create_requires_cohorts() {
    let repo = LocalRepository::new();

    for class_ids in [None, Some(vec![])] {
        let err = sessions::create_session(
            &repo,
            &admin(),
            session_request("Algorithms", Weekday::Monday, t(9, 0), t(10, 0), class_ids),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SchedulingError::Validation(_)));
    }
}

#[tokio::test]
async fn test_list_scoped_to_callers_cohort() {
    let repo = LocalRepository::new();
    seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;
    seed_session(&repo, 2, "Physics", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let own = sessions::list_sessions(&repo, &student(10, Some(1)), None).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].class_id, ClassId::new(1));

    // No cohort on the profile: empty list, not an error.
    let none = sessions::list_sessions(&repo, &student(11, None), None).await.unwrap();
    assert!(none.is_empty());

    let all = sessions::list_sessions(&repo, &admin(), None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = sessions::list_sessions(&repo, &admin(), Some(ClassId::new(2)))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
}

#[tokio::test]
async fn test_get_distinguishes_missing_from_foreign() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let missing = sessions::get_session(&repo, &admin(), SessionId::new(999))
        .await
        .unwrap_err();
    assert!(matches!(missing, SchedulingError::NotFound(_)));

    let foreign = sessions::get_session(&repo, &student(10, Some(2)), id)
        .await
        .unwrap_err();
    assert!(matches!(foreign, SchedulingError::AccessDenied(_)));

    let own = sessions::get_session(&repo, &student(10, Some(1)), id).await;
    assert!(own.is_ok());
}

#[tokio::test]
async fn test_update_is_admin_only_and_partial() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let err = sessions::update_session(
        &repo,
        &LogNotifier,
        &student(10, Some(1)),
        id,
        ClassSessionUpdate::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));

    let update = ClassSessionUpdate {
        location: Some("Annex".to_string()),
        ..Default::default()
    };
    let saved = sessions::update_session(&repo, &LogNotifier, &admin(), id, update)
        .await
        .unwrap();
    assert_eq!(saved.location, "Annex");
    assert_eq!(saved.course_name, "Algorithms");
    assert_eq!(saved.start_time, t(9, 0));
}

#[tokio::test]
async fn test_update_rejects_inverted_times() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let update = ClassSessionUpdate {
        start_time: Some(t(11, 0)),
        end_time: Some(t(10, 0)),
        ..Default::default()
    };
    let err = sessions::update_session(&repo, &LogNotifier, &admin(), id, update)
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));
}

#[tokio::test]
async fn test_delete_is_admin_only() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let err = sessions::delete_session(&repo, &LogNotifier, &student(10, Some(1)), id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));

    sessions::delete_session(&repo, &LogNotifier, &admin(), id)
        .await
        .unwrap();

    let gone = sessions::get_session(&repo, &admin(), id).await.unwrap_err();
    assert!(matches!(gone, SchedulingError::NotFound(_)));
}

#[tokio::test]
async fn test_unhealthy_store_surfaces_repository_error() {
    let repo = LocalRepository::new();
    seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    repo.set_healthy(false);
    assert!(!repo.health_check().await.unwrap());

    let err = sessions::list_sessions(&repo, &admin(), None).await.unwrap_err();
    assert!(matches!(err, SchedulingError::Repository(_)));

    repo.set_healthy(true);
    repo.clear();
    assert_eq!(repo.session_count(), 0);
}

struct CountingSink(AtomicUsize);

#[async_trait]
impl NotificationSink for CountingSink {
    async fn notify_class(
        &self,
        _actor: UserId,
        _class_id: ClassId,
        _kind: &str,
        _message: &str,
    ) -> anyhow::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn notify_class(
        &self,
        _actor: UserId,
        _class_id: ClassId,
        _kind: &str,
        _message: &str,
    ) -> anyhow::Result<()> {
        anyhow::bail!("notification channel down")
    }
}

#[tokio::test]
async fn test_update_and_delete_dispatch_notifications() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    let sink = CountingSink(AtomicUsize::new(0));
    sessions::update_session(&repo, &sink, &admin(), id, ClassSessionUpdate::default())
        .await
        .unwrap();
    sessions::delete_session(&repo, &sink, &admin(), id).await.unwrap();

    assert_eq!(sink.0.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_mutation() {
    let repo = LocalRepository::new();
    let id = seed_session(&repo, 1, "Algorithms", Weekday::Monday, t(9, 0), t(10, 0)).await;

    // The sink always errors; the delete must still commit.
    sessions::delete_session(&repo, &FailingSink, &admin(), id)
        .await
        .unwrap();
    assert_eq!(repo.session_count(), 0);
}
