use async_trait::async_trait;
use serde::Serialize;

use crate::{
    error::BackendError,
    query::ListQuery,
};

/// One page of records as returned by a listing endpoint, normalized to a
/// uniform shape regardless of the key the server nested the records under.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<E> {
    pub items: Vec<E>,
    /// Server-reported number of records matching the query, independent
    /// of how many this page carries.
    pub total: i64,
}

/// A server-owned domain record mirrored by a synchronization store.
///
/// The store treats the record as opaque beyond its id; domain fields are
/// only inspected where an entity-specific bulk operation requires it.
pub trait Entity: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Payload for creating a record; the server assigns the id.
    type Create: Serialize + Send + Sync;
    /// Partial payload for updating a record; absent fields are omitted
    /// from the serialized body.
    type Update: Serialize + Send + Sync;

    /// Label used in log lines.
    const KIND: &'static str;

    /// Server-assigned unique identifier, immutable once created.
    fn id(&self) -> i64;
}

/// Remote CRUD capability for one entity type.
///
/// Implemented by the REST client for production and by mocks under test;
/// stores hold this behind `Arc<dyn EntityBackend<E>>`.
#[async_trait]
pub trait EntityBackend<E: Entity>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Listing<E>, BackendError>;
    async fn get(&self, id: i64) -> Result<E, BackendError>;
    async fn create(&self, payload: &E::Create) -> Result<E, BackendError>;
    async fn update(&self, id: i64, payload: &E::Update) -> Result<E, BackendError>;
    async fn delete(&self, id: i64) -> Result<(), BackendError>;
}
