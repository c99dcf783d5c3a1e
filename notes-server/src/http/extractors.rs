//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body.
///
/// Parses the body whatever the `Content-Type` says, and routes every
/// failure through [`ApiError`] instead of axum's 4xx rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::{json, Value};

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/notes")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn parses_without_content_type() {
        let JsonBody(data) = JsonBody::<Value>::from_request(
            request(r#"{"name":"Ada","lastname":"Lovelace"}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(data, json!({ "name": "Ada", "lastname": "Lovelace" }));
    }

    #[tokio::test]
    async fn non_json_is_malformed() {
        let result = JsonBody::<Value>::from_request(request("name=Ada"), &()).await;
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn empty_body_is_malformed() {
        let result = JsonBody::<Value>::from_request(request(""), &()).await;
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }
}
