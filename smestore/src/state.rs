use smecore::{
    query::QueryState,
    status::RequestStatus,
};

/// Mutable state exclusively owned by one store instance.
///
/// Mutations are atomic field replacements at the moment an operation
/// settles; the lock around this struct is never held across an await.
#[derive(Debug)]
pub(crate) struct StoreState<E> {
    pub(crate) collection: Vec<E>,
    pub(crate) query: QueryState,
    /// Entity-specific filter pairs carried alongside the generic query
    /// state and sent with every listing request.
    pub(crate) filters: Vec<(String, String)>,
    pub(crate) status: RequestStatus,
    pub(crate) error: Option<String>,
    pub(crate) focus: Option<E>,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            query: QueryState::default(),
            filters: Vec::new(),
            status: RequestStatus::default(),
            error: None,
            focus: None,
        }
    }
}

/// Point-in-time copy of a store's observable state.
#[derive(Clone, Debug)]
pub struct StoreSnapshot<E> {
    pub collection: Vec<E>,
    pub query: QueryState,
    pub filters: Vec<(String, String)>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub focus: Option<E>,
}

impl<E: Clone> StoreSnapshot<E> {
    pub(crate) fn of(state: &StoreState<E>) -> Self {
        Self {
            collection: state.collection.clone(),
            query: state.query.clone(),
            filters: state.filters.clone(),
            status: state.status,
            error: state.error.clone(),
            focus: state.focus.clone(),
        }
    }
}
