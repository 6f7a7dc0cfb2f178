//! Read operations for the supply graph.
//!
//! Dashboard read endpoints are out of scope; these lookups exist for the
//! integration suite and operator tooling.

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

/// A supply relationship read back from the graph.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SupplyRecord {
    pub supplier: String,
    pub material: String,
    pub lead_time_days: i64,
    pub penalty_clause: String,
}

impl GraphClient {
    /// Fetch the SUPPLIES relationship for a (supplier, material) pair, if any.
    pub async fn get_supply_record(
        &self,
        supplier: &str,
        material: &str,
    ) -> Result<Option<SupplyRecord>, GraphError> {
        let q = query(
            "MATCH (s:Supplier {name: $supplier_name})
                   -[r:SUPPLIES]->
                   (m:RawMaterial {name: $material_name})
             RETURN s.name AS supplier, m.name AS material,
                    r.lead_time_days AS lead_time_days,
                    r.penalty_clause AS penalty_clause",
        )
        .param("supplier_name", supplier.to_string())
        .param("material_name", material.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let record = SupplyRecord {
                    supplier: get_column(&row, "supplier")?,
                    material: get_column(&row, "material")?,
                    lead_time_days: get_column(&row, "lead_time_days")?,
                    penalty_clause: get_column(&row, "penalty_clause")?,
                };
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Count nodes carrying the given label and name.
    pub async fn count_nodes(&self, label: &str, name: &str) -> Result<i64, GraphError> {
        let cypher = format!("MATCH (n:{label} {{name: $name}}) RETURN count(n) AS cnt");
        let q = query(&cypher).param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }

    /// Count SUPPLIES relationships between a supplier and a material.
    pub async fn count_supply_relationships(
        &self,
        supplier: &str,
        material: &str,
    ) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (:Supplier {name: $supplier_name})
                   -[r:SUPPLIES]->
                   (:RawMaterial {name: $material_name})
             RETURN count(r) AS cnt",
        )
        .param("supplier_name", supplier.to_string())
        .param("material_name", material.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}

fn get_column<T: for<'a> serde::Deserialize<'a>>(
    row: &neo4rs::Row,
    column: &str,
) -> Result<T, GraphError> {
    row.get::<T>(column)
        .map_err(|e| GraphError::Serialization(format!("column {column}: {e}")))
}
