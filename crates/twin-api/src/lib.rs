//! twin-api: HTTP API server for the Digital Twin Engine.
//!
//! Accepts SLA contract submissions, validates them, and persists them to
//! the Neo4j supply graph through twin-graph.

pub mod error;
pub mod handlers;
pub mod routes;
