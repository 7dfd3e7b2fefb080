use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

use smecore::{
    entity::{
        Entity,
        EntityBackend,
    },
    error::BackendError,
    query::QueryState,
    status::RequestStatus,
};

use crate::state::{
    StoreSnapshot,
    StoreState,
};

pub struct Builder<E: Entity> {
    backend: Option<Arc<dyn EntityBackend<E>>>,
    query: QueryState,
}

pub struct EntityStore<E: Entity> {
    backend: Arc<dyn EntityBackend<E>>,
    state: RwLock<StoreState<E>>,
    revision: watch::Sender<u64>,
}

impl<E: Entity> Default for Builder<E> {
    fn default() -> Self {
        Self {
            backend: None,
            query: QueryState::default(),
        }
    }
}

impl<E: Entity> Builder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, val: impl EntityBackend<E> + 'static) -> Self {
        self.backend = Some(Arc::new(val));
        self
    }

    pub fn boxed_backend(mut self, val: Arc<dyn EntityBackend<E>>) -> Self {
        self.backend = Some(val);
        self
    }

    pub fn limit(mut self, val: i64) -> Self {
        self.query.limit = val.max(1);
        self
    }

    pub fn build(self) -> Arc<EntityStore<E>> {
        let (revision, _) = watch::channel(0);
        Arc::new(EntityStore {
            backend: self.backend
                .expect("missing required argument backend"),
            state: RwLock::new(StoreState {
                query: self.query,
                ..StoreState::default()
            }),
            revision,
        })
    }
}

// Request lifecycle. Every operation shares the one status flag: a fresh
// dispatch forces `Loading`, and whichever in-flight operation settles
// last owns the terminal value.
impl<E: Entity> EntityStore<E> {
    pub(crate) fn begin(&self) {
        self.state.write().status = RequestStatus::Loading;
        self.bump();
    }

    pub(crate) fn commit(&self, apply: impl FnOnce(&mut StoreState<E>)) -> RequestStatus {
        {
            let mut state = self.state.write();
            apply(&mut state);
            state.status = RequestStatus::Succeeded;
        }
        self.bump();
        RequestStatus::Succeeded
    }

    pub(crate) fn fail(&self, err: BackendError) -> RequestStatus {
        log::warn!("{}: {}", E::KIND, err);
        {
            let mut state = self.state.write();
            state.error = Some(err.to_string());
            state.status = RequestStatus::Failed;
        }
        self.bump();
        RequestStatus::Failed
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

// Asynchronous operations. The backend call is the only suspension point;
// no retry, no backoff, a single attempt per call. Failures never cross
// this boundary: they land in the error slot and the returned status.
impl<E: Entity> EntityStore<E> {
    /// Fetches the collection described by the current query state,
    /// replacing the cached records wholesale on success. A failure
    /// leaves the previous records visible next to the error.
    pub async fn list(&self) -> RequestStatus {
        let query = {
            let state = self.state.read();
            let mut query = state.query.to_list_query();
            query.filters = state.filters.clone();
            query
        };
        self.begin();
        log::trace!("{}: list skip={} limit={}", E::KIND, query.skip, query.limit);
        match self.backend.list(&query).await {
            Ok(listing) => self.commit(|state| {
                state.collection = listing.items;
                state.query.total = listing.total.max(0);
                // a fresh listing clears any stale error banner
                state.error = None;
            }),
            Err(err) => self.fail(err),
        }
    }

    /// Loads one record into the focus slot, leaving the collection
    /// untouched. On failure the previous focus stays in place.
    pub async fn get(&self, id: i64) -> RequestStatus {
        self.begin();
        log::trace!("{}: get {}", E::KIND, id);
        match self.backend.get(id).await {
            Ok(record) => self.commit(|state| {
                state.focus = Some(record);
            }),
            Err(err) => self.fail(err),
        }
    }

    /// Creates a record server-side. The new record is not appended to
    /// the cached collection; callers re-list for an updated view.
    pub async fn create(&self, payload: E::Create) -> RequestStatus {
        self.begin();
        log::trace!("{}: create", E::KIND);
        match self.backend.create(&payload).await {
            Ok(record) => {
                log::debug!("{}: created id {}", E::KIND, record.id());
                self.commit(|_| ())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Updates a record server-side. The cached copy, if any, is not
    /// patched locally; callers re-list for an updated view.
    pub async fn update(&self, id: i64, payload: E::Update) -> RequestStatus {
        self.begin();
        log::trace!("{}: update {}", E::KIND, id);
        match self.backend.update(id, &payload).await {
            Ok(_) => self.commit(|_| ()),
            Err(err) => self.fail(err),
        }
    }

    /// Deletes a record server-side and reconciles the local cache: the
    /// id-matching record leaves the collection, the known total drops by
    /// one without a refetch (saturating at zero), and a matching focus
    /// is cleared.
    pub async fn delete(&self, id: i64) -> RequestStatus {
        self.begin();
        log::trace!("{}: delete {}", E::KIND, id);
        match self.backend.delete(id).await {
            Ok(()) => self.commit(|state| {
                state.collection.retain(|record| record.id() != id);
                state.query.total = (state.query.total - 1).max(0);
                if state.focus.as_ref().map(Entity::id) == Some(id) {
                    state.focus = None;
                }
            }),
            Err(err) => self.fail(err),
        }
    }
}

// Synchronous local state edits; no network involvement.
impl<E: Entity> EntityStore<E> {
    /// Sets the search term; changing the filter criteria invalidates the
    /// current page position.
    pub fn set_search_query(&self, val: impl Into<String>) {
        self.state.write().query.set_search_query(val);
        self.bump();
    }

    /// Sets or clears the status filter, resetting the page position.
    pub fn set_status_filter(&self, val: Option<String>) {
        self.state.write().query.set_status_filter(val);
        self.bump();
    }

    /// Sets an entity-specific filter pair, replacing a previous pair
    /// with the same key and resetting the page position.
    pub fn set_filter(&self, key: impl Into<String>, val: impl Into<String>) {
        {
            let mut state = self.state.write();
            let key = key.into();
            state.filters.retain(|(existing, _)| *existing != key);
            state.filters.push((key, val.into()));
            state.query.skip = 0;
        }
        self.bump();
    }

    /// Drops every entity-specific filter pair, resetting the page
    /// position.
    pub fn clear_filters(&self) {
        {
            let mut state = self.state.write();
            state.filters.clear();
            state.query.skip = 0;
        }
        self.bump();
    }

    /// Moves to a new page offset (in record units) without touching the
    /// filters.
    pub fn set_page_offset(&self, skip: i64) {
        self.state.write().query.set_page_offset(skip);
        self.bump();
    }

    /// Empties the error slot. Idempotent.
    pub fn clear_error(&self) {
        self.state.write().error = None;
        self.bump();
    }

    /// Empties the focus slot. Idempotent.
    pub fn clear_focus(&self) {
        self.state.write().focus = None;
        self.bump();
    }
}

// Read surface.
impl<E: Entity> EntityStore<E> {
    pub fn snapshot(&self) -> StoreSnapshot<E> {
        StoreSnapshot::of(&self.state.read())
    }

    pub fn status(&self) -> RequestStatus {
        self.state.read().status
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn collection(&self) -> Vec<E> {
        self.state.read().collection.clone()
    }

    pub fn focus(&self) -> Option<E> {
        self.state.read().focus.clone()
    }

    pub fn query(&self) -> QueryState {
        self.state.read().query.clone()
    }

    /// Change notification: the receiver observes a revision counter
    /// bumped on every committed state change; re-read a snapshot when it
    /// moves.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
