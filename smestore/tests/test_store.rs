use mockall::Sequence;
use std::sync::Arc;

use smecore::{
    error::BackendError,
    status::RequestStatus,
    student::{
        Student,
        StudentCreate,
        StudentUpdate,
    },
};
use smestore::{
    StudentStore,
    store::Builder,
};
use test_sme::{
    backend::MockStudentApi,
    fixtures::{
        make_listing,
        make_paged_listing,
        make_student,
    },
    is_send_sync,
};

fn ids(records: &[Student]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

fn build(mock: MockStudentApi) -> Arc<StudentStore> {
    Builder::new().backend(mock).build()
}

#[async_std::test]
async fn list_replaces_collection_wholesale() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    let mut seq = Sequence::new();
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(make_listing(vec![make_student(1), make_student(2)])));
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(make_listing(vec![make_student(3)])));
    let store = build(mock);

    assert_eq!(store.list().await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![1, 2]);
    assert_eq!(store.query().total, 2);

    // the second result set wins outright, never a merge of both
    assert_eq!(store.list().await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![3]);
    assert_eq!(store.query().total, 1);
    Ok(())
}

#[async_std::test]
async fn failed_list_preserves_stale_collection() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    let mut seq = Sequence::new();
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(make_listing(vec![make_student(1), make_student(2)])));
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(BackendError::Server("database offline".to_string())));
    let store = build(mock);

    store.list().await;
    let before = store.collection();

    assert_eq!(store.list().await, RequestStatus::Failed);
    assert_eq!(store.collection(), before);
    assert_eq!(store.query().total, 2);
    let error = store.error().expect("error slot should be set");
    assert!(!error.is_empty());
    assert_eq!(store.status(), RequestStatus::Failed);
    Ok(())
}

#[async_std::test]
async fn successful_list_clears_error_slot() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    let mut seq = Sequence::new();
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(BackendError::Network("unable to reach the server".to_string())));
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(make_listing(vec![make_student(1)])));
    let store = build(mock);

    store.list().await;
    assert!(store.error().is_some());

    store.list().await;
    assert_eq!(store.error(), None);
    assert_eq!(store.status(), RequestStatus::Succeeded);
    Ok(())
}

#[async_std::test]
async fn error_slot_survives_other_successes() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Err(BackendError::Server("database offline".to_string())));
    mock.expect_create()
        .returning(|_| Ok(make_student(7)));
    let store = build(mock);

    store.list().await;
    assert!(store.error().is_some());

    // only a fresh list fetch clears the slot implicitly
    assert_eq!(store.create(StudentCreate::default()).await, RequestStatus::Succeeded);
    assert!(store.error().is_some());

    store.clear_error();
    assert_eq!(store.error(), None);
    store.clear_error();
    assert_eq!(store.error(), None);
    Ok(())
}

#[async_std::test]
async fn create_and_update_leave_collection_alone() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_student(1)])));
    mock.expect_create()
        .returning(|_| Ok(make_student(7)));
    mock.expect_update()
        .returning(|id, _| Ok(make_student(id)));
    let store = build(mock);

    store.list().await;

    assert_eq!(store.create(StudentCreate::default()).await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![1]);
    assert_eq!(store.query().total, 1);

    assert_eq!(
        store.update(1, StudentUpdate {
            email: Some("new@example.edu".to_string()),
            ..Default::default()
        }).await,
        RequestStatus::Succeeded,
    );
    // the cached record is not patched in place
    assert_eq!(store.collection()[0].email, make_student(1).email);
    Ok(())
}

#[async_std::test]
async fn get_sets_focus_and_failure_preserves_it() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    let mut seq = Sequence::new();
    mock.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| Ok(make_student(id)));
    mock.expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(BackendError::NotFound("no such student".to_string())));
    let store = build(mock);

    assert_eq!(store.get(5).await, RequestStatus::Succeeded);
    assert_eq!(store.focus().map(|record| record.id), Some(5));
    assert!(store.collection().is_empty());

    assert_eq!(store.get(9).await, RequestStatus::Failed);
    assert_eq!(store.focus().map(|record| record.id), Some(5));
    assert_eq!(store.error(), Some("no such student".to_string()));
    Ok(())
}

#[async_std::test]
async fn delete_reconciles_collection_total_and_focus() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_student(1), make_student(2)])));
    mock.expect_get()
        .returning(|id| Ok(make_student(id)));
    mock.expect_delete()
        .returning(|_| Ok(()));
    let store = build(mock);

    store.list().await;
    store.get(1).await;

    assert_eq!(store.delete(1).await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![2]);
    assert_eq!(store.query().total, 1);
    assert_eq!(store.focus(), None);
    Ok(())
}

#[async_std::test]
async fn delete_leaves_unrelated_focus_in_place() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_get()
        .returning(|id| Ok(make_student(id)));
    mock.expect_delete()
        .returning(|_| Ok(()));
    let store = build(mock);

    store.get(5).await;
    assert_eq!(store.delete(6).await, RequestStatus::Succeeded);
    assert_eq!(store.focus().map(|record| record.id), Some(5));
    Ok(())
}

#[async_std::test]
async fn delete_of_absent_id_still_decrements_total() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_student(1), make_student(2)])));
    mock.expect_delete()
        .times(1)
        .returning(|_| Ok(()));
    let store = build(mock);

    store.list().await;

    // the request is issued even though id 9 is not cached, and the
    // total drops regardless
    assert_eq!(store.delete(9).await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![1, 2]);
    assert_eq!(store.query().total, 1);
    Ok(())
}

#[async_std::test]
async fn delete_total_saturates_at_zero() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_delete()
        .returning(|_| Ok(()));
    let store = build(mock);

    assert_eq!(store.delete(1).await, RequestStatus::Succeeded);
    assert_eq!(store.query().total, 0);
    Ok(())
}

#[async_std::test]
async fn delete_failure_leaves_cache_alone() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_student(1), make_student(2)])));
    mock.expect_delete()
        .returning(|_| Err(BackendError::Server("database offline".to_string())));
    let store = build(mock);

    store.list().await;

    assert_eq!(store.delete(1).await, RequestStatus::Failed);
    assert_eq!(ids(&store.collection()), vec![1, 2]);
    assert_eq!(store.query().total, 2);
    assert!(store.error().is_some());
    Ok(())
}

#[async_std::test]
async fn filter_mutators_reset_page_offset() -> anyhow::Result<()> {
    let store = build(MockStudentApi::new());

    store.set_page_offset(40);
    assert_eq!(store.query().skip, 40);
    store.set_search_query("bob");
    assert_eq!(store.query().skip, 0);

    store.set_page_offset(20);
    store.set_status_filter(Some("active".to_string()));
    assert_eq!(store.query().skip, 0);

    store.set_page_offset(30);
    store.set_filter("class", "5A");
    assert_eq!(store.query().skip, 0);

    // paging alone leaves the filters untouched
    store.set_page_offset(10);
    let query = store.query();
    assert_eq!(query.skip, 10);
    assert_eq!(query.search_query, "bob");
    assert_eq!(query.status_filter.as_deref(), Some("active"));
    assert_eq!(store.snapshot().filters, vec![
        ("class".to_string(), "5A".to_string()),
    ]);
    Ok(())
}

// The list -> delete -> filtered list walk-through: wholesale
// replacement, optimistic delete reconciliation, and the page reset on a
// search change, in one pass.
#[async_std::test]
async fn paged_listing_scenario() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    let mut seq = Sequence::new();
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|query| query.skip == 0 && query.limit == 50 && query.search.is_none())
        .returning(|_| Ok(make_paged_listing(vec![make_student(1), make_student(2)], 2)));
    mock.expect_delete()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|id| *id == 1)
        .returning(|_| Ok(()));
    mock.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|query| query.skip == 0 && query.search.as_deref() == Some("bob"))
        .returning(|_| Ok(make_paged_listing(vec![make_student(2)], 1)));
    let store = Builder::new()
        .backend(mock)
        .limit(50)
        .build();

    assert_eq!(store.list().await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![1, 2]);
    assert_eq!(store.query().total, 2);

    assert_eq!(store.delete(1).await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![2]);
    assert_eq!(store.query().total, 1);

    store.set_page_offset(40);
    store.set_search_query("bob");
    assert_eq!(store.list().await, RequestStatus::Succeeded);
    assert_eq!(ids(&store.collection()), vec![2]);
    assert_eq!(store.query().total, 1);
    assert_eq!(store.query().skip, 0);
    Ok(())
}

#[async_std::test]
async fn subscription_observes_commits() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_student(1)])));
    let store = build(mock);

    let receiver = store.subscribe();
    let before = *receiver.borrow();
    store.set_search_query("bob");
    assert!(*receiver.borrow() > before);

    let before = *receiver.borrow();
    store.list().await;
    assert!(*receiver.borrow() > before);
    Ok(())
}

#[async_std::test]
async fn clear_focus_is_idempotent() -> anyhow::Result<()> {
    let mut mock = MockStudentApi::new();
    mock.expect_get()
        .returning(|id| Ok(make_student(id)));
    let store = build(mock);

    store.get(5).await;
    assert!(store.focus().is_some());
    store.clear_focus();
    assert_eq!(store.focus(), None);
    store.clear_focus();
    assert_eq!(store.focus(), None);
    Ok(())
}

#[test]
fn store_is_send_sync() {
    is_send_sync::<StudentStore>();
    is_send_sync::<smestore::NotificationStore>();
}
