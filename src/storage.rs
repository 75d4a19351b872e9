//! SQLite-backed `pokemons` table.
//!
//! The table lives beside the in-memory catalog and shares no data with it.
//! It is seeded once and only ever read back for a row count.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::errors::CatalogResult;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS pokemons (
        id INTEGER PRIMARY KEY,
        name TEXT,
        hp INTEGER,
        attack INTEGER,
        weakness TEXT,
        evolution_id INTEGER UNIQUE
    );
";

/// One row of the `pokemons` table. The table has no `types` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRow {
    pub id: i64,
    pub name: String,
    pub hp: i64,
    pub attack: i64,
    pub weakness: String,
    pub evolution_id: Option<i64>,
}

impl PokemonRow {
    /// The row written into an empty table.
    pub fn starter() -> Self {
        Self {
            id: 1,
            name: "bulbizarre".to_string(),
            hp: 60,
            attack: 20,
            weakness: "fire".to_string(),
            evolution_id: Some(2),
        }
    }
}

pub struct PokemonTable {
    conn: Connection,
}

impl PokemonTable {
    /// Open (or create) the table in the SQLite file at `path`.
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// A table that disappears with the process.
    pub fn in_memory() -> CatalogResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn count(&self) -> CatalogResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pokemons", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn insert(&self, row: &PokemonRow) -> CatalogResult<()> {
        self.conn.execute(
            "INSERT INTO pokemons (id, name, hp, attack, weakness, evolution_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.id,
                row.name,
                row.hp,
                row.attack,
                row.weakness,
                row.evolution_id
            ],
        )?;
        Ok(())
    }

    pub fn all(&self) -> CatalogResult<Vec<PokemonRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, hp, attack, weakness, evolution_id FROM pokemons ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PokemonRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    hp: row.get(2)?,
                    attack: row.get(3)?,
                    weakness: row.get(4)?,
                    evolution_id: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Writes the starter row when the table is empty.
    /// Returns the number of rows found before seeding.
    pub fn seed_if_empty(&self) -> CatalogResult<usize> {
        let existing = self.count()?;
        if existing == 0 {
            self.insert(&PokemonRow::starter())?;
            log::info!("pokemons table was empty, seeded starter row");
        } else {
            log::info!("{} pokemon already in the pokemons table", existing);
        }
        Ok(existing)
    }
}
