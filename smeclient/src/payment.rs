use async_trait::async_trait;
use serde::Deserialize;

use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    payment::{
        Payment,
        PaymentCreate,
        PaymentUpdate,
    },
    query::ListQuery,
};

use crate::client::Client;

#[derive(Deserialize)]
struct PaymentListing {
    #[serde(alias = "payments")]
    items: Vec<Payment>,
    total: i64,
}

impl From<PaymentListing> for Listing<Payment> {
    fn from(wire: PaymentListing) -> Self {
        Self {
            items: wire.items,
            total: wire.total,
        }
    }
}

#[async_trait]
impl EntityBackend<Payment> for Client {
    async fn list(&self, query: &ListQuery) -> Result<Listing<Payment>, BackendError> {
        Ok(self.get_json::<PaymentListing>("/payments", &query.to_query_pairs())
            .await?
            .into())
    }

    async fn get(&self, id: i64) -> Result<Payment, BackendError> {
        self.get_json(&format!("/payments/{}", id), &[]).await
    }

    async fn create(&self, payload: &PaymentCreate) -> Result<Payment, BackendError> {
        self.post_json("/payments", payload).await
    }

    async fn update(&self, id: i64, payload: &PaymentUpdate) -> Result<Payment, BackendError> {
        self.put_json(&format!("/payments/{}", id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.request_delete(&format!("/payments/{}", id)).await
    }
}
