// Pokemon Catalog Schema - Shared type definitions
// This crate holds the record shape and the query parameter types shared
// between the catalog engine and its HTTP surface.

// Re-export the main types
pub use pokemon::*;
pub use query::*;

pub mod pokemon;
pub mod query;
