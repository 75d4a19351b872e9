//! HTTP surface of the catalog.
//!
//! Handlers only translate between HTTP and the [`Catalog`]; every rule lives
//! in the catalog itself. State is injected through [`AppState`].

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use schema::{PageQuery, Pokemon, SearchQuery};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::dataset;
use crate::errors::{CatalogError, CatalogResult};
use crate::storage::PokemonTable;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<Catalog>>,
    pub table: Arc<Mutex<PokemonTable>>,
}

impl AppState {
    pub fn new(catalog: Catalog, table: PokemonTable) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            table: Arc::new(Mutex::new(table)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/total_pokemons", get(total_pokemons))
        .route("/pokemons", get(list_pokemons))
        .route("/pokemon/", post(create_pokemon))
        .route(
            "/pokemon/:id",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        .route("/types", get(list_types))
        .route("/pokemons/search/", get(search_pokemons))
        .route("/pokemons2/", get(paginate_pokemons))
        .with_state(state)
}

type PathId = Result<Path<i64>, PathRejection>;
type PokemonBody = Result<Json<Pokemon>, JsonRejection>;

/// Path ids must parse, be at least 1 and fit the record id type.
fn checked_id(path: PathId) -> CatalogResult<u32> {
    let Path(raw) = path.map_err(|rejection| {
        log::debug!("rejected path: {}", rejection.body_text());
        CatalogError::from(rejection)
    })?;
    match u32::try_from(raw) {
        Ok(id) if id >= 1 => Ok(id),
        _ => {
            log::debug!("rejected path id {}", raw);
            Err(CatalogError::InvalidId(raw))
        }
    }
}

async fn total_pokemons(State(state): State<AppState>) -> CatalogResult<Json<Value>> {
    let rows = state.table.lock().all()?;
    log::debug!("pokemons table rows: {:?}", rows);
    let total = state.catalog.lock().len();
    Ok(Json(json!({ "total": total })))
}

async fn list_pokemons(State(state): State<AppState>) -> Json<Vec<Pokemon>> {
    Json(state.catalog.lock().list_all())
}

async fn get_pokemon(
    State(state): State<AppState>,
    id: PathId,
) -> CatalogResult<Json<Pokemon>> {
    let id = checked_id(id)?;
    let pokemon = state.catalog.lock().get(id)?;
    Ok(Json(pokemon))
}

async fn create_pokemon(
    State(state): State<AppState>,
    body: PokemonBody,
) -> CatalogResult<Json<Pokemon>> {
    let Json(pokemon) = body?;
    let created = state.catalog.lock().create(pokemon)?;
    Ok(Json(created))
}

async fn update_pokemon(
    State(state): State<AppState>,
    id: PathId,
    body: PokemonBody,
) -> CatalogResult<Json<Pokemon>> {
    let id = checked_id(id)?;
    let Json(pokemon) = body?;
    let updated = state.catalog.lock().update(id, pokemon)?;
    Ok(Json(updated))
}

async fn delete_pokemon(
    State(state): State<AppState>,
    id: PathId,
) -> CatalogResult<Json<Pokemon>> {
    let id = checked_id(id)?;
    let removed = state.catalog.lock().delete(id)?;
    Ok(Json(removed))
}

async fn list_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.lock().types())
}

async fn search_pokemons(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> CatalogResult<Json<Vec<Pokemon>>> {
    let Query(query) = query?;
    let results = state.catalog.lock().search(&query)?;
    Ok(Json(results))
}

async fn paginate_pokemons(
    State(state): State<AppState>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> CatalogResult<Json<Vec<Pokemon>>> {
    let Query(page) = page?;
    Ok(Json(state.catalog.lock().paginate(page.page, page.items)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

/// Seed both stores, then serve until Ctrl-C.
pub async fn run(config: Config) -> CatalogResult<()> {
    let catalog = dataset::load_catalog(config.dataset.as_deref())?;

    let table = match &config.database {
        Some(path) => {
            log::info!("opening pokemons table at {}", path.display());
            PokemonTable::open(path)?
        }
        None => PokemonTable::in_memory()?,
    };
    table.seed_if_empty()?;

    let app = router(AppState::new(catalog, table));
    let listener = TcpListener::bind(config.bind).await?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
