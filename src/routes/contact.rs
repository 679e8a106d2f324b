use axum::http::StatusCode;
use axum::{Router, response::Html, routing::get};

use crate::errors::AppError;
use crate::logging::{ContactEvent, SanitizedEmail};
use crate::models::contact::{self, RawContactSubmission};
use crate::page;
use crate::security::form::FormBody;

pub fn router() -> Router {
    Router::new().route("/", get(show_page).post(submit))
}

pub async fn show_page() -> Html<&'static str> {
    Html(page::render())
}

#[tracing::instrument(name = "contact_submission", skip(payload), fields(email))]
pub async fn submit(
    FormBody(payload): FormBody<RawContactSubmission>,
) -> Result<StatusCode, AppError> {
    let submission = contact::server::validate(&payload).map_err(AppError::Validation)?;

    // Record sanitized info in the current span
    tracing::Span::current().record(
        "email",
        tracing::field::display(SanitizedEmail::new(&submission.email)),
    );

    crate::log_contact_event!(
        ContactEvent::SubmissionAccepted,
        email = %SanitizedEmail::new(&submission.email),
        name_chars = submission.name.chars().count(),
        content_chars = submission.content.chars().count(),
        "Contact submission accepted"
    );

    // Delivery is not wired up; the submission is acknowledged and dropped.
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_form(body: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_page_is_served() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("id=\"contact-form\""));
    }

    #[tokio::test]
    async fn test_invalid_fields_report_all_three_keys() {
        let (status, body) = post_form("name=A&email=bad&content=short").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let errors = json.get("errors").and_then(|e| e.as_object()).unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], "Name must have at least 2 characters.");
        assert_eq!(errors["email"], "Invalid email.");
        assert_eq!(
            errors["content"],
            "Content must have at least 12 characters."
        );
    }

    #[tokio::test]
    async fn test_valid_submission_returns_ok_with_empty_body() {
        let (status, body) =
            post_form("name=Sylvie+Brown&email=sylvie%40example.com&content=How+can+I+help+you+today%3F")
                .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_content_below_server_minimum_is_rejected() {
        // Passes the page gate (10 chars) but not the handler's minimum.
        let (status, body) =
            post_form("name=Sylvie+Brown&email=sylvie%40example.com&content=1234567890").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["errors"]["content"],
            "Content must have at least 12 characters."
        );
        assert!(json["errors"].get("name").is_none());
        assert!(json["errors"].get("email").is_none());
    }

    #[tokio::test]
    async fn test_loose_server_email_rule_accepts_bare_at() {
        let (status, _) =
            post_form("name=Sylvie+Brown&email=a%40&content=How+can+I+help+you+today%3F").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_fields_are_reported_as_required() {
        let (status, body) = post_form("name=Sylvie+Brown").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"]["email"], "Email is required.");
        assert_eq!(json["errors"]["content"], "Message is required.");
    }

    #[tokio::test]
    async fn test_oversized_body_returns_413() {
        use crate::security::form::MAX_BODY_SIZE_BYTES;

        let body = format!(
            "name=Sylvie+Brown&email=sylvie%40example.com&content={}",
            "a".repeat(MAX_BODY_SIZE_BYTES + 1)
        );
        let (status, _) = post_form(&body).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_rejects_wrong_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_rejects_unknown_form_keys() {
        let (status, body) = post_form("name=Sylvie+Brown&email=a%40b.com&extra=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
    }
}
