//! Integration tests for the gym slot store: gender-bucket scoping and
//! admission control.

mod support;

use campus_rust::api::SlotId;
use campus_rust::db::repositories::LocalRepository;
use campus_rust::db::repository::FacilitySlotRepository;
use campus_rust::models::interval::Weekday;
use campus_rust::models::schedule::{FacilitySlotUpdate, Gender, NewFacilitySlot};
use campus_rust::scheduling::error::SchedulingError;
use campus_rust::scheduling::facility::{self, SlotRequest};

use support::{admin, gym_member, t};

fn slot_request(gender: Option<Gender>, day: Weekday, open: chrono::NaiveTime, close: chrono::NaiveTime) -> SlotRequest {
    SlotRequest {
        gender,
        day,
        open_time: open,
        close_time: close,
    }
}

async fn seed_slot(
    repo: &LocalRepository,
    gender: Gender,
    day: Weekday,
    open: chrono::NaiveTime,
    close: chrono::NaiveTime,
) -> SlotId {
    repo.create_slot(&NewFacilitySlot {
        gender,
        day,
        open_time: open,
        close_time: close,
    })
    .await
    .expect("seeding slot failed")
    .id
}

#[tokio::test]
async fn test_admin_create_requires_gender() {
    let repo = LocalRepository::new();

    let err = facility::create_slot(
        &repo,
        &admin(),
        slot_request(None, Weekday::Monday, t(8, 0), t(12, 0)),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));
}

#[tokio::test]
async fn test_member_create_uses_own_gender() {
    let repo = LocalRepository::new();

    // An explicit gender from a regular member is ignored.
    let slot = facility::create_slot(
        &repo,
        &gym_member(10, Some(Gender::Female)),
        slot_request(Some(Gender::Male), Weekday::Monday, t(8, 0), t(12, 0)),
    )
    .await
    .unwrap();
    assert_eq!(slot.gender, Gender::Female);

    let err = facility::create_slot(
        &repo,
        &gym_member(11, None),
        slot_request(None, Weekday::Tuesday, t(8, 0), t(12, 0)),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));
}

#[tokio::test]
async fn test_admission_scoped_by_gender() {
    let repo = LocalRepository::new();
    seed_slot(&repo, Gender::Male, Weekday::Monday, t(8, 0), t(12, 0)).await;

    // Same bucket, overlapping: rejected.
    let err = facility::create_slot(
        &repo,
        &admin(),
        slot_request(Some(Gender::Male), Weekday::Monday, t(11, 0), t(14, 0)),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::Validation(_)));

    // Other bucket, same interval: admitted.
    facility::create_slot(
        &repo,
        &admin(),
        slot_request(Some(Gender::Female), Weekday::Monday, t(11, 0), t(14, 0)),
    )
    .await
    .unwrap();

    // Same bucket, back-to-back: admitted.
    facility::create_slot(
        &repo,
        &admin(),
        slot_request(Some(Gender::Male), Weekday::Monday, t(12, 0), t(14, 0)),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_sequencing_rejected() {
    let repo = LocalRepository::new();

    let err = facility::create_slot(
        &repo,
        &admin(),
        slot_request(Some(Gender::Male), Weekday::Monday, t(12, 0), t(8, 0)),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Open time must be before close time"));
}

#[tokio::test]
async fn test_list_scoped_to_callers_gender() {
    let repo = LocalRepository::new();
    seed_slot(&repo, Gender::Male, Weekday::Monday, t(8, 0), t(12, 0)).await;
    seed_slot(&repo, Gender::Female, Weekday::Monday, t(12, 0), t(16, 0)).await;

    let own = facility::list_slots(&repo, &gym_member(10, Some(Gender::Female)), None)
        .await
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].gender, Gender::Female);

    let none = facility::list_slots(&repo, &gym_member(11, None), None).await.unwrap();
    assert!(none.is_empty());

    let all = facility::list_slots(&repo, &admin(), None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = facility::list_slots(&repo, &admin(), Some(Gender::Male)).await.unwrap();
    assert_eq!(filtered.len(), 1);
}

#[tokio::test]
async fn test_get_distinguishes_missing_from_foreign() {
    let repo = LocalRepository::new();
    let id = seed_slot(&repo, Gender::Male, Weekday::Monday, t(8, 0), t(12, 0)).await;

    let missing = facility::get_slot(&repo, &admin(), SlotId::new(999)).await.unwrap_err();
    assert!(matches!(missing, SchedulingError::NotFound(_)));

    let foreign = facility::get_slot(&repo, &gym_member(10, Some(Gender::Female)), id)
        .await
        .unwrap_err();
    assert!(matches!(foreign, SchedulingError::AccessDenied(_)));

    assert!(facility::get_slot(&repo, &gym_member(10, Some(Gender::Male)), id)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_update_and_delete_are_admin_only() {
    let repo = LocalRepository::new();
    let id = seed_slot(&repo, Gender::Male, Weekday::Monday, t(8, 0), t(12, 0)).await;

    let err = facility::update_slot(
        &repo,
        &gym_member(10, Some(Gender::Male)),
        id,
        FacilitySlotUpdate::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));

    let update = FacilitySlotUpdate {
        close_time: Some(t(13, 0)),
        ..Default::default()
    };
    let saved = facility::update_slot(&repo, &admin(), id, update).await.unwrap();
    assert_eq!(saved.close_time, t(13, 0));
    assert_eq!(saved.open_time, t(8, 0));

    let err = facility::delete_slot(&repo, &gym_member(10, Some(Gender::Male)), id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulingError::AccessDenied(_)));

    facility::delete_slot(&repo, &admin(), id).await.unwrap();
    let gone = facility::get_slot(&repo, &admin(), id).await.unwrap_err();
    assert!(matches!(gone, SchedulingError::NotFound(_)));
}
