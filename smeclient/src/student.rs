use async_trait::async_trait;
use serde::Deserialize;

use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    query::ListQuery,
    student::{
        Student,
        StudentCreate,
        StudentUpdate,
    },
};

use crate::client::Client;

/// Wire shape of the listing endpoint; the records arrive either under a
/// generic `items` key or nested under the resource plural.
#[derive(Deserialize)]
struct StudentListing {
    #[serde(alias = "students")]
    items: Vec<Student>,
    total: i64,
}

impl From<StudentListing> for Listing<Student> {
    fn from(wire: StudentListing) -> Self {
        Self {
            items: wire.items,
            total: wire.total,
        }
    }
}

#[async_trait]
impl EntityBackend<Student> for Client {
    async fn list(&self, query: &ListQuery) -> Result<Listing<Student>, BackendError> {
        Ok(self.get_json::<StudentListing>("/students", &query.to_query_pairs())
            .await?
            .into())
    }

    async fn get(&self, id: i64) -> Result<Student, BackendError> {
        self.get_json(&format!("/students/{}", id), &[]).await
    }

    async fn create(&self, payload: &StudentCreate) -> Result<Student, BackendError> {
        self.post_json("/students", payload).await
    }

    async fn update(&self, id: i64, payload: &StudentUpdate) -> Result<Student, BackendError> {
        self.put_json(&format!("/students/{}", id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.request_delete(&format!("/students/{}", id)).await
    }
}
