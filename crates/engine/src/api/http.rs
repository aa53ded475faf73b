//! HTTP routes.
//!
//! The platform can deliver events to an HTTPS endpoint instead of invoking a
//! function directly; this is that endpoint.

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use groupcontact_shared::ResponseEnvelope;

use crate::api::router;
use crate::app::App;
use crate::use_cases::SkillError;

/// Create all HTTP routes. Platform events are accepted on `skill_path`.
pub fn routes(skill_path: &str) -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route(skill_path, post(skill_event))
}

async fn health() -> &'static str {
    "OK"
}

async fn skill_event(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let event: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Skill event body is not JSON");
        SkillError::MalformedEvent(e.to_string())
    })?;
    let envelope = router::handle_json(&app, event).await?;
    Ok(Json(envelope))
}

pub enum ApiError {
    BadRequest(&'static str),
    Internal,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<SkillError> for ApiError {
    fn from(e: SkillError) -> Self {
        // Callers only get a generic message; the full error was logged where it was raised.
        match e {
            SkillError::MalformedEvent(_) => ApiError::BadRequest("Malformed event"),
            SkillError::UnsupportedRequestType(_) => {
                ApiError::BadRequest("Unsupported request type")
            }
            _ => ApiError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{intent_event, launch_event, seeded_app};
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_router() -> Router {
        routes("/skill").with_state(Arc::new(seeded_app()))
    }

    fn post_json(body: impl Into<Body>) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/skill")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = HttpRequest::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn launch_event_returns_envelope() {
        let response = app_router()
            .oneshot(post_json(launch_event().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["version"], json!("1.0"));
        assert_eq!(body["response"]["shouldEndSession"], json!(false));
        assert_eq!(body["response"]["card"]["title"], json!("Welcome"));
    }

    #[tokio::test]
    async fn find_by_name_over_http() {
        let event = intent_event(
            "findByNameIntent",
            None,
            json!({ "name": { "name": "name", "value": "Trevor" } }),
        );

        let response = app_router()
            .oneshot(post_json(event.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"]["outputSpeech"]["type"], json!("SSML"));
        assert_eq!(
            body["response"]["outputSpeech"]["ssml"],
            json!("<speak>The number is <say-as interpret-as=\"digits\">8642948274</say-as></speak>")
        );
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let response = app_router()
            .oneshot(post_json("{ not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unsupported_request_type_is_bad_request() {
        let event = json!({ "request": { "type": "SessionEndedRequest" } });

        let response = app_router()
            .oneshot(post_json(event.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
