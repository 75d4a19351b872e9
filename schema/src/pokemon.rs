use serde::{Deserialize, Serialize};
use std::fmt;

/// One creature entry in the catalog.
///
/// `total` travels alongside the record for filtering and sorting but is never
/// part of the response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub hp: u32,
    pub attack: u32,
    pub weakness: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_id: Option<u32>,
    #[serde(default, skip_serializing)]
    pub total: Option<u32>,
}

impl Pokemon {
    pub fn has_evolution(&self) -> bool {
        self.evolution_id.is_some()
    }

    /// True when every tag in `tags` appears in this record's types.
    pub fn has_all_types<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .all(|tag| self.types.iter().any(|t| t == tag.as_ref()))
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03} {} [{}]", self.id, self.name, self.types.join(" / "))
    }
}
