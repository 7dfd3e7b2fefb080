use reqwest::{
    RequestBuilder,
    Response,
    StatusCode,
};
use serde::{
    Serialize,
    de::DeserializeOwned,
};
use std::sync::Arc;

use smecore::error::BackendError;

use crate::{
    error,
    token::{
        StaticToken,
        TokenProvider,
    },
};

/// REST client for the school-management API.
///
/// One instance is shared by every store; it owns the connection pool,
/// the base URL and the token capability, and implements the per-entity
/// backend traits in the sibling resource modules.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

#[derive(Default)]
pub struct Builder {
    http: Option<reqwest::Client>,
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, val: impl Into<String>) -> Self {
        let mut base_url: String = val.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = Some(base_url);
        self
    }

    pub fn token_provider(mut self, val: impl TokenProvider + 'static) -> Self {
        self.tokens = Some(Arc::new(val));
        self
    }

    pub fn boxed_token_provider(mut self, val: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(val);
        self
    }

    pub fn http_client(mut self, val: reqwest::Client) -> Self {
        self.http = Some(val);
        self
    }

    pub fn build(self) -> Client {
        Client {
            http: self.http.unwrap_or_default(),
            base_url: self.base_url
                .expect("missing required argument base_url"),
            tokens: self.tokens
                .unwrap_or_else(|| Arc::new(StaticToken::anonymous())),
        }
    }
}

impl Client {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request with the current bearer token attached. An
    /// unauthorized response triggers exactly one retry with a refreshed
    /// token; a second rejection flows into the ordinary error mapping.
    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let retry = request.try_clone();
        let request = match self.tokens.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(error::from_reqwest)?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        let (Some(request), Some(token)) = (retry, self.tokens.refresh().await) else {
            return Ok(response);
        };
        log::debug!("unauthorized, retrying with refreshed token");
        request.bearer_auth(token)
            .send()
            .await
            .map_err(error::from_reqwest)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, BackendError> {
        log::trace!("GET {}", path);
        let response = self.send(self.http.get(self.endpoint(path)).query(query)).await?;
        error::check(response).await?
            .json::<T>()
            .await
            .map_err(error::from_reqwest)
    }

    pub(crate) async fn post_json<T, P>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        log::trace!("POST {}", path);
        let response = self.send(self.http.post(self.endpoint(path)).json(payload)).await?;
        error::check(response).await?
            .json::<T>()
            .await
            .map_err(error::from_reqwest)
    }

    pub(crate) async fn put_json<T, P>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        log::trace!("PUT {}", path);
        let response = self.send(self.http.put(self.endpoint(path)).json(payload)).await?;
        error::check(response).await?
            .json::<T>()
            .await
            .map_err(error::from_reqwest)
    }

    /// POST without a payload, for bulk endpoints that return no body of
    /// interest.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), BackendError> {
        log::trace!("POST {}", path);
        let response = self.send(self.http.post(self.endpoint(path))).await?;
        error::check(response).await?;
        Ok(())
    }

    /// POST a payload, ignoring the response body.
    pub(crate) async fn post_json_discard<P>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<(), BackendError>
    where
        P: Serialize + ?Sized,
    {
        log::trace!("POST {}", path);
        let response = self.send(self.http.post(self.endpoint(path)).json(payload)).await?;
        error::check(response).await?;
        Ok(())
    }

    pub(crate) async fn request_delete(&self, path: &str) -> Result<(), BackendError> {
        log::trace!("DELETE {}", path);
        let response = self.send(self.http.delete(self.endpoint(path))).await?;
        error::check(response).await?;
        Ok(())
    }
}
