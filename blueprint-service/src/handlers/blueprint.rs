use crate::models::{BlueprintResponse, MessageResponse};
use crate::services::metrics::{record_failure, record_generation};
use crate::services::BlueprintError;
use crate::startup::AppState;
use axum::{
    body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service_core::observability::extract_request_id;

/// Largest answers body read into memory.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// `/api/generate-blueprint`, mounted for every method.
///
/// Non-POST requests are refused before the body is read. Every failure
/// after that collapses into a 500 carrying the generic error fragment; the
/// cause only goes to the log.
pub async fn generate_blueprint(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MessageResponse::method_not_allowed()),
        )
            .into_response();
    }

    let (parts, body) = request.into_parts();
    let result = match body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => state.generator.generate(&bytes).await,
        Err(e) => Err(BlueprintError::UnreadableBody(e)),
    };

    match result {
        Ok((blueprint_html, outcome)) => {
            record_generation(outcome);
            (StatusCode::OK, Json(BlueprintResponse::new(blueprint_html))).into_response()
        }
        Err(e) => {
            record_failure();
            tracing::error!(
                request_id = %extract_request_id(&parts.headers).unwrap_or_else(|| "-".to_string()),
                error = %e,
                "Error calling Gemini API"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BlueprintResponse::failed()),
            )
                .into_response()
        }
    }
}
