use std::fs;
use std::path::Path;

use schema::Pokemon;

use crate::catalog::Catalog;
use crate::errors::{CatalogError, CatalogResult};

/// The seed dataset shipped inside the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/pokemons.json");

/// Parse a JSON array of records.
pub fn parse_records(json: &str) -> CatalogResult<Vec<Pokemon>> {
    serde_json::from_str(json).map_err(|e| CatalogError::Dataset(e.to_string()))
}

/// Key each record by its 1-based position in the dataset.
pub fn catalog_from_records(records: Vec<Pokemon>) -> CatalogResult<Catalog> {
    let mut keyed = Vec::with_capacity(records.len());
    for (index, pokemon) in records.into_iter().enumerate() {
        let key = u32::try_from(index + 1)
            .map_err(|_| CatalogError::Dataset(format!("too many records ({})", index + 1)))?;
        if pokemon.id != key {
            log::warn!(
                "dataset entry {} declares id {}; stored under {}",
                key,
                pokemon.id,
                key
            );
        }
        keyed.push((key, pokemon));
    }
    Ok(Catalog::with_records(keyed))
}

/// Load the catalog from `path`, or from the bundled dataset when no path is given.
pub fn load_catalog(path: Option<&Path>) -> CatalogResult<Catalog> {
    let records = match path {
        Some(path) => {
            log::info!("loading dataset from {}", path.display());
            let json = fs::read_to_string(path)?;
            parse_records(&json)?
        }
        None => parse_records(BUNDLED_DATASET)?,
    };
    let catalog = catalog_from_records(records)?;
    log::info!("catalog seeded with {} pokemon", catalog.len());
    Ok(catalog)
}
