use crate::catalog::Catalog;
use schema::Pokemon;

/// A builder for creating test Pokemon records with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(4, "charmander")
///     .with_types(&["fire"])
///     .with_total(309)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    pokemon: Pokemon,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a normal-type record with no total and no evolution.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            pokemon: Pokemon {
                id,
                name: name.to_string(),
                types: vec!["normal".to_string()],
                hp: 50,
                attack: 50,
                weakness: "fighting".to_string(),
                evolution_id: None,
                total: None,
            },
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.pokemon.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_total(mut self, total: u32) -> Self {
        self.pokemon.total = Some(total);
        self
    }

    pub fn evolves_into(mut self, id: u32) -> Self {
        self.pokemon.evolution_id = Some(id);
        self
    }

    pub fn build(self) -> Pokemon {
        self.pokemon
    }
}

/// A six record catalog keyed 1..=6, in id order.
///
/// | id | name       | types          | total | evolves |
/// |----|------------|----------------|-------|---------|
/// | 1  | bulbasaur  | grass, poison  | 318   | 2       |
/// | 2  | ivysaur    | grass, poison  | 405   | 3       |
/// | 3  | charmander | fire           | 309   | 4       |
/// | 4  | charizard  | fire, flying   | 534   | -       |
/// | 5  | pidgey     | normal, flying | 251   | 17      |
/// | 6  | pikachu    | electric       | 318   | -       |
pub fn sample_catalog() -> Catalog {
    Catalog::with_records(
        sample_records()
            .into_iter()
            .map(|pokemon| (pokemon.id, pokemon)),
    )
}

pub fn sample_records() -> Vec<Pokemon> {
    vec![
        TestPokemonBuilder::new(1, "bulbasaur")
            .with_types(&["grass", "poison"])
            .with_total(318)
            .evolves_into(2)
            .build(),
        TestPokemonBuilder::new(2, "ivysaur")
            .with_types(&["grass", "poison"])
            .with_total(405)
            .evolves_into(3)
            .build(),
        TestPokemonBuilder::new(3, "charmander")
            .with_types(&["fire"])
            .with_total(309)
            .evolves_into(4)
            .build(),
        TestPokemonBuilder::new(4, "charizard")
            .with_types(&["fire", "flying"])
            .with_total(534)
            .build(),
        TestPokemonBuilder::new(5, "pidgey")
            .with_types(&["normal", "flying"])
            .with_total(251)
            .evolves_into(17)
            .build(),
        TestPokemonBuilder::new(6, "pikachu")
            .with_types(&["electric"])
            .with_total(318)
            .build(),
    ]
}

/// Ids of `records`, in order.
pub fn ids(records: &[Pokemon]) -> Vec<u32> {
    records.iter().map(|p| p.id).collect()
}
