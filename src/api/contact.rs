use super::AppState;
use crate::domain::model::ContactRequest;
use crate::domain::ports::AssetStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// POST /api/contact
///
/// 200 `{"message": ...}` on delivery, 400 `{"error": ...}` for bad input,
/// 500 `{"error": ...}` when the email service is missing or fails.
pub async fn submit<S: AssetStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Unreadable contact payload: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request body" })),
            );
        }
    };

    match state.contact.submit(&request).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Message sent successfully" })),
        ),
        Err(e) => {
            let status = if e.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(json!({ "error": e.to_string() })))
        }
    }
}
