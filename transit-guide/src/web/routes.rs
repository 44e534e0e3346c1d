//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::protocol::{ResponseRecord, StatRequests, records};

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/query", post(answer_queries))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Answer a batch of stat requests.
///
/// Route searches are CPU-bound, so the batch runs on the blocking pool.
async fn answer_queries(
    State(state): State<AppState>,
    Json(request): Json<StatRequests>,
) -> Result<Json<Vec<ResponseRecord>>, AppError> {
    let queries = request.queries();
    debug!(queries = queries.len(), "answering batch");

    let guide = state.guide.clone();
    let responses = tokio::task::spawn_blocking(move || guide.answer_all(&queries))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("query worker failed: {e}"),
        })?;

    Ok(Json(records(&responses)))
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::protocol::Document;

    fn state() -> AppState {
        let doc = Document::parse(
            r#"{
                "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
                "base_requests": [
                    {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0,
                     "road_distances": {"B": 1000}},
                    {"type": "Stop", "name": "B", "latitude": 55.01, "longitude": 37.0},
                    {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
                ]
            }"#,
        )
        .unwrap();
        AppState::new(doc.build_guide(&CacheConfig::default()).unwrap())
    }

    fn stat_requests(json: &str) -> StatRequests {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn answers_batch_in_order() {
        let request = stat_requests(
            r#"{"stat_requests": [
                {"id": 5, "type": "Route", "from": "A", "to": "B"},
                {"id": 4, "type": "Stop", "name": "Z"},
                {"id": 6, "type": "Map"},
                {"id": 3, "type": "Bus", "name": "1"}
            ]}"#,
        );

        let Json(body) = answer_queries(State(state()), Json(request))
            .await
            .unwrap();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value[0]["request_id"], 5);
        // 2 min wait + 1 km at 500 m/min
        assert_eq!(value[0]["total_time"], 4.0);
        assert_eq!(value[0]["items"][1]["type"], "Bus");
        assert_eq!(value[1]["request_id"], 4);
        assert_eq!(value[1]["error_message"], "not found");
        assert_eq!(value[2]["request_id"], 3);
        assert_eq!(value[2]["stop_count"], 3);
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn internal_error_status() {
        let response = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
