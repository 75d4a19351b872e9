// In: src/lib.rs

//! Pokemon Catalog
//!
//! A small catalog of Pokemon served over HTTP: CRUD by id, a distinct type
//! listing, filtered and sorted search, and pagination. The catalog lives in
//! memory and is reseeded from the bundled dataset on every start.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod search;
pub mod server;
pub mod storage;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{PageQuery, Pokemon, SearchQuery, SortField, SortOrder, MAX_ITEMS_PER_PAGE};

// --- From this crate's modules (`src/`) ---
pub use catalog::Catalog;
pub use config::{Config, LogLevel};
pub use server::{router, AppState};
pub use storage::{PokemonRow, PokemonTable};

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult};
