//! schemascope-core: DDL schema extraction library
//!
//! This library turns raw SQL `CREATE TABLE` text into a structured schema
//! model (tables, columns, foreign keys) and renders textual summaries and
//! Graphviz diagrams from it, without requiring a database connection.

pub mod error;
pub mod extract;
pub mod render;
pub mod schema;

pub use error::RenderError;
pub use extract::extract_schema;
pub use schema::{Column, ForeignKey, Schema, Table};
