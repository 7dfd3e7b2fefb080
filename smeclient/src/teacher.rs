use async_trait::async_trait;
use serde::Deserialize;

use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    query::ListQuery,
    teacher::{
        Teacher,
        TeacherCreate,
        TeacherUpdate,
    },
};

use crate::client::Client;

#[derive(Deserialize)]
struct TeacherListing {
    #[serde(alias = "teachers")]
    items: Vec<Teacher>,
    total: i64,
}

impl From<TeacherListing> for Listing<Teacher> {
    fn from(wire: TeacherListing) -> Self {
        Self {
            items: wire.items,
            total: wire.total,
        }
    }
}

#[async_trait]
impl EntityBackend<Teacher> for Client {
    async fn list(&self, query: &ListQuery) -> Result<Listing<Teacher>, BackendError> {
        Ok(self.get_json::<TeacherListing>("/teachers", &query.to_query_pairs())
            .await?
            .into())
    }

    async fn get(&self, id: i64) -> Result<Teacher, BackendError> {
        self.get_json(&format!("/teachers/{}", id), &[]).await
    }

    async fn create(&self, payload: &TeacherCreate) -> Result<Teacher, BackendError> {
        self.post_json("/teachers", payload).await
    }

    async fn update(&self, id: i64, payload: &TeacherUpdate) -> Result<Teacher, BackendError> {
        self.put_json(&format!("/teachers/{}", id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.request_delete(&format!("/teachers/{}", id)).await
    }
}
