//! The SLA contract record and its validation.
//!
//! An `SlaContract` is the transient input to the write path: it arrives as
//! JSON, is validated once, becomes a graph write, and is never stored as-is.

use serde::{Deserialize, Serialize};

/// A supplier SLA (Service-Level Agreement) contract covering one raw material.
///
/// Persisted as `(:Supplier {name})-[:SUPPLIES {lead_time_days,
/// penalty_clause}]->(:RawMaterial {name})`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaContract {
    /// Name of the raw-material supplier.
    pub supplier_name: String,
    /// Raw material covered by this SLA.
    pub material: String,
    /// Max delivery lead time in days before the SLA is breached.
    pub lead_time_days: i64,
    /// Penalty clause text for SLA violations.
    pub penalty_clause: String,
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All constraint violations found in a contract, one entry per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("contract validation failed: {}", summary(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SlaContract {
    /// Check every field constraint and report all violations at once.
    ///
    /// Runs before any database interaction; a contract that fails here
    /// never reaches the repository.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        if self.supplier_name.is_empty() {
            violations.push(FieldViolation {
                field: "supplier_name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }
        if self.material.is_empty() {
            violations.push(FieldViolation {
                field: "material".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }
        if self.lead_time_days <= 0 {
            violations.push(FieldViolation {
                field: "lead_time_days".to_string(),
                message: format!("must be greater than 0, got {}", self.lead_time_days),
            });
        }
        if self.penalty_clause.is_empty() {
            violations.push(FieldViolation {
                field: "penalty_clause".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contract() -> SlaContract {
        SlaContract {
            supplier_name: "Stark Industries".to_string(),
            material: "Cold-Rolled Steel".to_string(),
            lead_time_days: 14,
            penalty_clause: "2% per day".to_string(),
        }
    }

    #[test]
    fn test_valid_contract_passes() {
        assert!(valid_contract().validate().is_ok());
    }

    #[test]
    fn test_zero_lead_time_rejected() {
        let contract = SlaContract {
            lead_time_days: 0,
            ..valid_contract()
        };
        let errs = contract.validate().unwrap_err();
        assert_eq!(errs.violations.len(), 1);
        assert_eq!(errs.violations[0].field, "lead_time_days");
    }

    #[test]
    fn test_negative_lead_time_rejected() {
        let contract = SlaContract {
            lead_time_days: -3,
            ..valid_contract()
        };
        assert!(contract.validate().is_err());
    }

    #[test]
    fn test_empty_text_fields_rejected() {
        let contract = SlaContract {
            supplier_name: String::new(),
            penalty_clause: String::new(),
            ..valid_contract()
        };
        let errs = contract.validate().unwrap_err();
        let fields: Vec<&str> = errs.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["supplier_name", "penalty_clause"]);
    }

    #[test]
    fn test_all_violations_enumerated() {
        let contract = SlaContract {
            supplier_name: String::new(),
            material: String::new(),
            lead_time_days: 0,
            penalty_clause: String::new(),
        };
        let errs = contract.validate().unwrap_err();
        assert_eq!(errs.violations.len(), 4);
    }

    #[test]
    fn test_contract_deserializes_from_json() {
        let json = r#"{
            "supplier_name": "Stark Industries",
            "material": "Cold-Rolled Steel",
            "lead_time_days": 14,
            "penalty_clause": "2% per day"
        }"#;
        let contract: SlaContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.lead_time_days, 14);
        assert!(contract.validate().is_ok());
    }
}
