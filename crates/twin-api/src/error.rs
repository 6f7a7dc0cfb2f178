//! Error-to-response mapping for the API boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use twin_core::ValidationErrors;
use twin_graph::GraphError;

/// Failures a handler can surface to a client.
///
/// Validation failures carry per-field detail back to the caller; storage
/// failures are logged with detail and returned as an opaque server error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("storage error: {0}")]
    Storage(#[from] GraphError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errs) => {
                let body = Json(json!({
                    "error": {
                        "message": "SLA contract failed validation",
                        "violations": errs.violations,
                    }
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "Failed to persist SLA contract");
                let body = Json(json!({
                    "error": {
                        "message": "Failed to save SLA contract to the knowledge graph",
                    }
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_core::SlaContract;

    fn invalid_contract_errors() -> ValidationErrors {
        SlaContract {
            supplier_name: String::new(),
            material: "Steel".to_string(),
            lead_time_days: 0,
            penalty_clause: "2% per day".to_string(),
        }
        .validate()
        .unwrap_err()
    }

    #[tokio::test]
    async fn test_validation_maps_to_422_with_violations() {
        let resp = ApiError::Validation(invalid_contract_errors()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let violations = body["error"]["violations"].as_array().unwrap();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0]["field"], "supplier_name");
        assert_eq!(violations[1]["field"], "lead_time_days");
    }

    #[tokio::test]
    async fn test_storage_maps_to_opaque_500() {
        let err = GraphError::Connection("bolt handshake refused".to_string());
        let resp = ApiError::Storage(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        // Connection detail stays in the log, not the response.
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("handshake"));
    }
}
