use async_trait::async_trait;
use serde::Deserialize;

use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    query::ListQuery,
    report::{
        Report,
        ReportCreate,
        ReportUpdate,
    },
};

use crate::client::Client;

#[derive(Deserialize)]
struct ReportListing {
    #[serde(alias = "reports")]
    items: Vec<Report>,
    total: i64,
}

impl From<ReportListing> for Listing<Report> {
    fn from(wire: ReportListing) -> Self {
        Self {
            items: wire.items,
            total: wire.total,
        }
    }
}

#[async_trait]
impl EntityBackend<Report> for Client {
    async fn list(&self, query: &ListQuery) -> Result<Listing<Report>, BackendError> {
        Ok(self.get_json::<ReportListing>("/reports", &query.to_query_pairs())
            .await?
            .into())
    }

    async fn get(&self, id: i64) -> Result<Report, BackendError> {
        self.get_json(&format!("/reports/{}", id), &[]).await
    }

    async fn create(&self, payload: &ReportCreate) -> Result<Report, BackendError> {
        self.post_json("/reports", payload).await
    }

    async fn update(&self, id: i64, payload: &ReportUpdate) -> Result<Report, BackendError> {
        self.put_json(&format!("/reports/{}", id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.request_delete(&format!("/reports/{}", id)).await
    }
}
