//! The in-memory collection behind every endpoint.
//!
//! Records are keyed by id and kept in insertion order. Nothing here touches
//! disk: writes live until the process exits and the next start reseeds from
//! the dataset.
//!
//! The records the catalog was built from are also kept, unchanged, as the
//! seed. Type listing and search read the seed; CRUD, pagination and counts
//! read the live records.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use schema::{Pokemon, SearchQuery, MAX_ITEMS_PER_PAGE};

use crate::errors::{CatalogError, CatalogResult};
use crate::search;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: IndexMap<u32, Pokemon>,
    seed: Vec<Pokemon>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(key, record)` pairs, keeping their order.
    /// A repeated key keeps its first position and the last record given for it.
    /// Every record given, duplicates included, becomes part of the seed.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (u32, Pokemon)>,
    {
        let mut catalog = Self::new();
        for (key, pokemon) in records {
            catalog.seed.push(pokemon.clone());
            catalog.records.insert(key, pokemon);
        }
        catalog
    }

    /// The records the catalog started from, in dataset order.
    pub fn seed(&self) -> &[Pokemon] {
        &self.seed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record in collection order.
    pub fn list_all(&self) -> Vec<Pokemon> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: u32) -> CatalogResult<Pokemon> {
        self.records.get(&id).cloned().ok_or_else(|| {
            log::debug!("lookup miss for pokemon {}", id);
            CatalogError::NotFound(id)
        })
    }

    /// Appends `pokemon` under its own id.
    pub fn create(&mut self, pokemon: Pokemon) -> CatalogResult<Pokemon> {
        if self.records.contains_key(&pokemon.id) {
            log::debug!("refusing to create pokemon {}: id taken", pokemon.id);
            return Err(CatalogError::AlreadyExists(pokemon.id));
        }
        log::info!("created {}", pokemon);
        self.records.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    /// Replaces the record stored under `id` with `pokemon` as given.
    ///
    /// The payload's own `id` is not checked against `id`; the record is stored
    /// under the path key even when the two disagree.
    pub fn update(&mut self, id: u32, pokemon: Pokemon) -> CatalogResult<Pokemon> {
        let slot = self.records.get_mut(&id).ok_or_else(|| {
            log::debug!("update miss for pokemon {}", id);
            CatalogError::NotFound(id)
        })?;
        if pokemon.id != id {
            log::warn!(
                "pokemon stored under key {} now carries id {}",
                id,
                pokemon.id
            );
        }
        log::info!("updated key {} to {}", id, pokemon);
        *slot = pokemon.clone();
        Ok(pokemon)
    }

    /// Removes the record under `id` and hands back its last value.
    pub fn delete(&mut self, id: u32) -> CatalogResult<Pokemon> {
        let removed = self.records.shift_remove(&id).ok_or_else(|| {
            log::debug!("delete miss for pokemon {}", id);
            CatalogError::NotFound(id)
        })?;
        log::info!("deleted {}", removed);
        Ok(removed)
    }

    /// Every distinct type tag in the seed, sorted ascending.
    pub fn types(&self) -> Vec<String> {
        self.seed
            .iter()
            .flat_map(|pokemon| pokemon.types.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Searches the seed. Created, updated and deleted records are not seen.
    pub fn search(&self, query: &SearchQuery) -> CatalogResult<Vec<Pokemon>> {
        let full: Vec<&Pokemon> = self.seed.iter().collect();
        search::run(&full, query)
    }

    /// One page of the collection in collection order.
    ///
    /// `items` is held to `1..=20` and `page` to the existing pages, so a page
    /// past the end serves the last one. Only an empty collection yields an
    /// empty page.
    pub fn paginate(&self, page: i64, items: i64) -> Vec<Pokemon> {
        let items = items.clamp(1, MAX_ITEMS_PER_PAGE) as usize;
        let size = self.records.len();
        let max_page = size.div_ceil(items);
        if max_page == 0 {
            return Vec::new();
        }

        let page = usize::try_from(page.max(1))
            .unwrap_or(usize::MAX)
            .min(max_page);
        let start = (page - 1) * items;
        let stop = (start + items).min(size);

        self.records
            .values()
            .skip(start)
            .take(stop - start)
            .cloned()
            .collect()
    }
}
