//! Write operations for the supply graph.
//!
//! All mutations use MERGE (upsert) semantics so that re-submitting a
//! contract for an existing (supplier, material) pair updates the
//! relationship in place instead of duplicating nodes or edges.

use neo4rs::query;

use twin_core::SlaContract;

use crate::client::{GraphClient, GraphError};

/// Confirmation of a persisted supply record, echoing the written identities.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SupplyWritten {
    pub supplier: String,
    pub material: String,
}

impl GraphClient {
    /// Upsert a validated SLA contract as a Supplier→SUPPLIES→RawMaterial
    /// pattern.
    ///
    /// Locates or creates the Supplier and RawMaterial nodes by name,
    /// locates or creates the SUPPLIES relationship between them, and sets
    /// its `lead_time_days` and `penalty_clause` unconditionally to the
    /// incoming values (last-write-wins).
    pub async fn upsert_supply_record(
        &self,
        contract: &SlaContract,
    ) -> Result<SupplyWritten, GraphError> {
        let q = query(
            "MERGE (s:Supplier {name: $supplier_name})
             MERGE (m:RawMaterial {name: $material_name})
             MERGE (s)-[r:SUPPLIES]->(m)
             ON CREATE SET
               r.lead_time_days = $lead_time_days,
               r.penalty_clause = $penalty_clause
             ON MATCH SET
               r.lead_time_days = $lead_time_days,
               r.penalty_clause = $penalty_clause
             RETURN s.name AS supplier, m.name AS material",
        )
        .param("supplier_name", contract.supplier_name.clone())
        .param("material_name", contract.material.clone())
        .param("lead_time_days", contract.lead_time_days)
        .param("penalty_clause", contract.penalty_clause.clone());

        let row = self
            .query_one(q)
            .await?
            .ok_or_else(|| GraphError::NoConfirmation {
                supplier: contract.supplier_name.clone(),
                material: contract.material.clone(),
            })?;

        let supplier: String = row
            .get("supplier")
            .map_err(|e| GraphError::Serialization(e.to_string()))?;
        let material: String = row
            .get("material")
            .map_err(|e| GraphError::Serialization(e.to_string()))?;

        tracing::debug!(%supplier, %material, "Upserted supply record");
        Ok(SupplyWritten { supplier, material })
    }
}
