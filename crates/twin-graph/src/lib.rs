//! Twin Graph — Neo4j client for the supply knowledge graph.
//!
//! This crate is the single mutation point for the Neo4j supply graph.
//! All graph reads and writes flow through this crate so that every write
//! uses the same MERGE (upsert) semantics and parameterized Cypher.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphError};
pub use mutations::SupplyWritten;
pub use queries::SupplyRecord;
