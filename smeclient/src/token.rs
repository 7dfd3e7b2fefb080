use async_trait::async_trait;

/// Source of the bearer token attached to every request.
///
/// The storage and refresh machinery behind it lives outside this crate;
/// the client only asks for the current token and, after an unauthorized
/// response, for a refreshed one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// The token to attach, if any.
    fn access_token(&self) -> Option<String>;

    /// Attempts a refresh after an unauthorized response; `None` means
    /// the failure surfaces as-is.
    async fn refresh(&self) -> Option<String>;
}

/// Fixed token with no refresh capability.
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }

    async fn refresh(&self) -> Option<String> {
        None
    }
}
