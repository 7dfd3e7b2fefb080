use smecore::{
    error::BackendError,
    notification::NotificationBroadcast,
    status::RequestStatus,
};
use smestore::notification::Builder;
use test_sme::{
    backend::MockNotificationApi,
    fixtures::{
        make_listing,
        make_notification,
    },
};

#[async_std::test]
async fn mark_all_read_transforms_cached_records() -> anyhow::Result<()> {
    let mut mock = MockNotificationApi::new();
    mock.expect_list()
        .times(1)
        .returning(|_| Ok(make_listing(vec![
            make_notification(1, false),
            make_notification(2, false),
            make_notification(3, true),
        ])));
    mock.expect_mark_all_read()
        .times(1)
        .returning(|| Ok(()));
    let store = Builder::new().backend(mock).build();

    store.list().await;

    // full local transform, no refetch
    assert_eq!(store.mark_all_read().await, RequestStatus::Succeeded);
    let collection = store.collection();
    assert_eq!(collection.len(), 3);
    assert!(collection.iter().all(|record| record.read));
    assert_eq!(store.query().total, 3);
    Ok(())
}

#[async_std::test]
async fn clear_all_empties_collection_and_total() -> anyhow::Result<()> {
    let mut mock = MockNotificationApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![
            make_notification(1, false),
            make_notification(2, true),
        ])));
    mock.expect_clear_all()
        .returning(|| Ok(()));
    let store = Builder::new().backend(mock).build();

    store.list().await;
    assert_eq!(store.query().total, 2);

    assert_eq!(store.clear_all().await, RequestStatus::Succeeded);
    assert!(store.collection().is_empty());
    assert_eq!(store.query().total, 0);
    Ok(())
}

#[async_std::test]
async fn broadcast_leaves_cache_untouched() -> anyhow::Result<()> {
    let mut mock = MockNotificationApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_notification(1, false)])));
    mock.expect_broadcast()
        .withf(|payload| payload.title == "Holiday")
        .returning(|_| Ok(()));
    let store = Builder::new().backend(mock).build();

    store.list().await;
    let before = store.collection();

    assert_eq!(
        store.broadcast(NotificationBroadcast {
            title: "Holiday".to_string(),
            message: "School closed on Friday.".to_string(),
        }).await,
        RequestStatus::Succeeded,
    );
    assert_eq!(store.collection(), before);
    assert_eq!(store.query().total, 1);
    Ok(())
}

#[async_std::test]
async fn bulk_failure_sets_error_and_keeps_cache() -> anyhow::Result<()> {
    let mut mock = MockNotificationApi::new();
    mock.expect_list()
        .returning(|_| Ok(make_listing(vec![make_notification(1, false)])));
    mock.expect_mark_all_read()
        .returning(|| Err(BackendError::Server("the server encountered an error".to_string())));
    let store = Builder::new().backend(mock).build();

    store.list().await;

    assert_eq!(store.mark_all_read().await, RequestStatus::Failed);
    let collection = store.collection();
    assert_eq!(collection.len(), 1);
    assert!(!collection[0].read);
    assert!(store.error().is_some());
    Ok(())
}

#[async_std::test]
async fn crud_surface_reaches_through_deref() -> anyhow::Result<()> {
    let mut mock = MockNotificationApi::new();
    mock.expect_get()
        .returning(|id| Ok(make_notification(id, false)));
    mock.expect_delete()
        .returning(|_| Ok(()));
    let store = Builder::new().backend(mock).build();

    assert_eq!(store.get(4).await, RequestStatus::Succeeded);
    assert_eq!(store.focus().map(|record| record.id), Some(4));

    assert_eq!(store.delete(4).await, RequestStatus::Succeeded);
    assert_eq!(store.focus(), None);
    Ok(())
}
