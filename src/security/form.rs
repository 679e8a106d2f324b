use std::error::Error as StdError;

use axum::{
    async_trait,
    body::to_bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

pub const MAX_BODY_SIZE_BYTES: usize = 16 * 1024; // 16 KiB upper bound for form bodies

/// Strict `application/x-www-form-urlencoded` extractor: enforces the
/// content type, bounds the body read, and surfaces parse failures as
/// structured JSON errors instead of the framework default.
#[derive(Debug)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        validate_content_type(&parts.headers)?;

        let body_bytes = to_bytes(body, MAX_BODY_SIZE_BYTES)
            .await
            .map_err(|err| {
                if is_length_limit(&err) {
                    AppError::PayloadTooLarge
                } else {
                    AppError::MalformedBody(format!("failed to read request body: {err}"))
                }
            })?;

        let value = serde_urlencoded::from_bytes(body_bytes.as_ref())
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;

        Ok(FormBody(value))
    }
}

// `to_bytes` reports the limit and mid-stream read failures through the
// same opaque error type; only the former is a 413.
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(inner) = source {
        if inner.downcast_ref::<LengthLimitError>().is_some() {
            return true;
        }
        source = inner.source();
    }
    false
}

fn validate_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    if let Some(value) = headers.get(CONTENT_TYPE) {
        if let Ok(value) = value.to_str() {
            let mime = value.split(';').next().unwrap_or("").trim();
            if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
                return Ok(());
            }
        }
    }

    Err(AppError::UnsupportedMediaType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_accepts_urlencoded() {
        assert!(validate_content_type(&headers_with("application/x-www-form-urlencoded")).is_ok());
        assert!(validate_content_type(&headers_with(
            "application/x-www-form-urlencoded; charset=UTF-8"
        ))
        .is_ok());
    }

    #[test]
    fn test_rejects_other_content_types() {
        assert!(validate_content_type(&headers_with("application/json")).is_err());
        assert!(validate_content_type(&headers_with("text/plain")).is_err());
        assert!(validate_content_type(&HeaderMap::new()).is_err());
    }

    #[test]
    fn test_rejects_mime_with_trailing_garbage() {
        assert!(validate_content_type(&headers_with("application/x-www-form-urlencodedfoo")).is_err());
    }

    #[test]
    fn test_mime_match_is_case_insensitive() {
        assert!(validate_content_type(&headers_with("Application/X-WWW-Form-Urlencoded")).is_ok());
    }

    #[tokio::test]
    async fn test_over_limit_read_is_detected_as_length_limit() {
        let body = axum::body::Body::from(vec![0u8; 64]);
        let err = to_bytes(body, 16).await.unwrap_err();
        assert!(is_length_limit(&err));
    }

    #[test]
    fn test_other_read_errors_are_not_length_limit() {
        let err = axum::Error::new(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection reset by peer",
        ));
        assert!(!is_length_limit(&err));
    }
}
