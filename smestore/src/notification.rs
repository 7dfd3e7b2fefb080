use std::ops::Deref;
use std::sync::Arc;

use smecore::{
    entity::EntityBackend,
    notification::{
        Notification,
        NotificationBroadcast,
        traits::NotificationBackend,
    },
    status::RequestStatus,
};

use crate::store::{
    self,
    EntityStore,
};

/// Store for the notification collection, extending the generic CRUD
/// surface with the bulk endpoints. Each bulk operation carries its own
/// explicit local reconciliation contract.
pub struct NotificationStore {
    inner: Arc<EntityStore<Notification>>,
    backend: Arc<dyn NotificationBackend>,
}

#[derive(Default)]
pub struct Builder {
    entity: Option<Arc<dyn EntityBackend<Notification>>>,
    bulk: Option<Arc<dyn NotificationBackend>>,
    limit: Option<i64>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, val: impl NotificationBackend + 'static) -> Self {
        let backend = Arc::new(val);
        self.entity = Some(backend.clone());
        self.bulk = Some(backend);
        self
    }

    pub fn limit(mut self, val: i64) -> Self {
        self.limit = Some(val);
        self
    }

    pub fn build(self) -> Arc<NotificationStore> {
        let mut builder = store::Builder::new()
            .boxed_backend(self.entity
                .expect("missing required argument backend"));
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        Arc::new(NotificationStore {
            inner: builder.build(),
            backend: self.bulk
                .expect("missing required argument backend"),
        })
    }
}

impl NotificationStore {
    /// Marks every notification read server-side; on success the cached
    /// records are flagged read in place, with no refetch.
    pub async fn mark_all_read(&self) -> RequestStatus {
        self.inner.begin();
        log::trace!("notification: mark all read");
        match self.backend.mark_all_read().await {
            Ok(()) => self.inner.commit(|state| {
                for record in &mut state.collection {
                    record.read = true;
                }
            }),
            Err(err) => self.inner.fail(err),
        }
    }

    /// Deletes every notification server-side; on success the cached
    /// collection empties and the known total zeroes, with no refetch.
    pub async fn clear_all(&self) -> RequestStatus {
        self.inner.begin();
        log::trace!("notification: clear all");
        match self.backend.clear_all().await {
            Ok(()) => self.inner.commit(|state| {
                state.collection.clear();
                state.query.total = 0;
            }),
            Err(err) => self.inner.fail(err),
        }
    }

    /// Sends a broadcast to every recipient; the local cache is left
    /// untouched and callers re-list for the updated view.
    pub async fn broadcast(&self, payload: NotificationBroadcast) -> RequestStatus {
        self.inner.begin();
        log::trace!("notification: broadcast");
        match self.backend.broadcast(&payload).await {
            Ok(()) => self.inner.commit(|_| ()),
            Err(err) => self.inner.fail(err),
        }
    }
}

impl Deref for NotificationStore {
    type Target = EntityStore<Notification>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
