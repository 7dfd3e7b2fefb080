use reqwest::Response;
use serde::Deserialize;
use smecore::error::BackendError;

pub(crate) const GENERIC_SERVER: &str = "the server encountered an error";
pub(crate) const GENERIC_NETWORK: &str = "unable to reach the server";

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Transport-level failure: no usable response, or a body that did not
/// decode into the expected shape.
pub(crate) fn from_reqwest(err: reqwest::Error) -> BackendError {
    log::debug!("transport error: {}", err);
    if err.is_decode() {
        BackendError::Server(GENERIC_SERVER.to_string())
    } else {
        BackendError::Network(GENERIC_NETWORK.to_string())
    }
}

/// Passes a successful response through; anything else becomes the
/// matching error class, carrying the body's `detail` message when the
/// server supplied one.
pub(crate) async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    Err(classify(status.as_u16(), detail))
}

pub(crate) fn classify(status: u16, detail: Option<String>) -> BackendError {
    match status {
        401 => BackendError::Auth(
            detail.unwrap_or_else(|| "authentication required".to_string())),
        404 => BackendError::NotFound(
            detail.unwrap_or_else(|| "record not found".to_string())),
        400..=499 => BackendError::Validation(
            detail.unwrap_or_else(|| "invalid request".to_string())),
        _ => BackendError::Server(
            detail.unwrap_or_else(|| GENERIC_SERVER.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_passes_detail_through() {
        assert_eq!(
            classify(422, Some("email is required".to_string())),
            BackendError::Validation("email is required".to_string()),
        );
        assert_eq!(
            classify(404, Some("no such student".to_string())),
            BackendError::NotFound("no such student".to_string()),
        );
        assert_eq!(
            classify(500, Some("database offline".to_string())),
            BackendError::Server("database offline".to_string()),
        );
    }

    #[test]
    fn classify_falls_back_to_generic_messages() {
        assert!(matches!(classify(400, None), BackendError::Validation(_)));
        assert!(matches!(classify(401, None), BackendError::Auth(_)));
        assert!(matches!(classify(404, None), BackendError::NotFound(_)));
        assert_eq!(
            classify(503, None),
            BackendError::Server(GENERIC_SERVER.to_string()),
        );
    }

    #[test]
    fn error_body_detail_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "nope"}"#)
            .expect("body should parse");
        assert_eq!(body.detail.as_deref(), Some("nope"));
        let body: ErrorBody = serde_json::from_str(r#"{}"#)
            .expect("body should parse");
        assert_eq!(body.detail, None);
    }
}
