//! Request handlers for the SLA sandbox endpoints.
//!
//! Handlers hold no business logic: they validate the payload, call the
//! graph layer, and shape the response.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use twin_core::SlaContract;
use twin_graph::{GraphClient, SupplyWritten};

use crate::error::ApiError;

/// Fixed payload returned by the health check.
pub const HEALTH_MESSAGE: &str = "Digital Twin Engine is alive";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// `GET /` — liveness check. Never touches the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadSlaResponse {
    pub status: String,
    pub message: String,
    pub graph_data: SupplyWritten,
}

/// `POST /api/sandbox/upload-sla` — validate an SLA contract and upsert it
/// into the supply graph.
///
/// Returns 422 with per-field violations before any database call when the
/// payload fails validation, 500 when the graph write fails.
pub async fn upload_sla(
    State(graph): State<GraphClient>,
    Json(contract): Json<SlaContract>,
) -> Result<Json<UploadSlaResponse>, ApiError> {
    contract.validate()?;

    let written = graph.upsert_supply_record(&contract).await?;
    tracing::info!(
        supplier = %written.supplier,
        material = %written.material,
        "SLA contract saved"
    );

    Ok(Json(UploadSlaResponse {
        status: "success".to_string(),
        message: format!(
            "SLA contract saved to the knowledge graph. Created/updated: \
             ({})-[:SUPPLIES]->({})",
            written.supplier, written.material
        ),
        graph_data: written,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_returns_fixed_message() {
        let Json(resp) = health().await;
        assert_eq!(resp.message, HEALTH_MESSAGE);
    }

    #[test]
    fn test_upload_response_shape() {
        let resp = UploadSlaResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            graph_data: SupplyWritten {
                supplier: "Stark Industries".to_string(),
                material: "Cold-Rolled Steel".to_string(),
            },
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["graph_data"]["supplier"], "Stark Industries");
        assert_eq!(value["graph_data"]["material"], "Cold-Rolled Steel");
    }
}
