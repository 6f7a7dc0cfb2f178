//! twin-core: Shared types, configuration, and validation for the Digital Twin Engine.
//!
//! This crate provides the foundational pieces used across all engine components:
//! - The SLA contract record and its field-level validation
//! - Configuration management (Neo4j credentials, HTTP bind address)

pub mod config;
pub mod contract;

pub use config::{ConfigError, EngineConfig, HttpConfig, Neo4jConfig};
pub use contract::{FieldViolation, SlaContract, ValidationErrors};
