use async_trait::async_trait;
use serde::Deserialize;

use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    notification::{
        Notification,
        NotificationBroadcast,
        NotificationCreate,
        NotificationUpdate,
        traits::NotificationBackend,
    },
    query::ListQuery,
};

use crate::client::Client;

#[derive(Deserialize)]
struct NotificationListing {
    #[serde(alias = "notifications")]
    items: Vec<Notification>,
    total: i64,
}

impl From<NotificationListing> for Listing<Notification> {
    fn from(wire: NotificationListing) -> Self {
        Self {
            items: wire.items,
            total: wire.total,
        }
    }
}

#[async_trait]
impl EntityBackend<Notification> for Client {
    async fn list(&self, query: &ListQuery) -> Result<Listing<Notification>, BackendError> {
        Ok(self.get_json::<NotificationListing>("/notifications", &query.to_query_pairs())
            .await?
            .into())
    }

    async fn get(&self, id: i64) -> Result<Notification, BackendError> {
        self.get_json(&format!("/notifications/{}", id), &[]).await
    }

    async fn create(&self, payload: &NotificationCreate) -> Result<Notification, BackendError> {
        self.post_json("/notifications", payload).await
    }

    async fn update(&self, id: i64, payload: &NotificationUpdate) -> Result<Notification, BackendError> {
        self.put_json(&format!("/notifications/{}", id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.request_delete(&format!("/notifications/{}", id)).await
    }
}

#[async_trait]
impl NotificationBackend for Client {
    async fn mark_all_read(&self) -> Result<(), BackendError> {
        self.post_empty("/notifications/mark-all-read").await
    }

    async fn clear_all(&self) -> Result<(), BackendError> {
        self.request_delete("/notifications/clear").await
    }

    async fn broadcast(&self, payload: &NotificationBroadcast) -> Result<(), BackendError> {
        self.post_json_discard("/notifications/broadcast", payload).await
    }
}
