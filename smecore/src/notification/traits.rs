use async_trait::async_trait;

use crate::{
    entity::EntityBackend,
    error::BackendError,
    notification::{
        Notification,
        NotificationBroadcast,
    },
};

/// Remote capability for the notification bulk endpoints, on top of the
/// ordinary CRUD surface.
#[async_trait]
pub trait NotificationBackend: EntityBackend<Notification> {
    async fn mark_all_read(&self) -> Result<(), BackendError>;
    async fn clear_all(&self) -> Result<(), BackendError>;
    async fn broadcast(&self, payload: &NotificationBroadcast) -> Result<(), BackendError>;
}
