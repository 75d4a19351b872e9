use serde::Deserialize;
use std::str::FromStr;
use strum::EnumString;

/// Upper bound on `items` for a paginated listing.
pub const MAX_ITEMS_PER_PAGE: i64 = 20;

/// Fields a search result can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Raw search parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub types: Option<String>,
    pub evo: Option<String>,
    pub totalgt: Option<i64>,
    pub totallt: Option<i64>,
    pub sortby: Option<String>,
    pub order: Option<String>,
}

impl SearchQuery {
    /// Comma separated tags from `types`, in the order given.
    pub fn type_tags(&self) -> Option<Vec<&str>> {
        self.types.as_deref().map(|raw| raw.split(',').collect())
    }

    /// Unknown `sortby` values disable sorting rather than failing.
    pub fn sort_field(&self) -> Option<SortField> {
        self.sortby
            .as_deref()
            .and_then(|raw| SortField::from_str(raw).ok())
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
            .as_deref()
            .and_then(|raw| SortOrder::from_str(raw).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_items")]
    pub items: i64,
}

fn default_page() -> i64 {
    1
}

fn default_items() -> i64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            items: default_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_rejects_unknown_names() {
        let mut query = SearchQuery {
            sortby: Some("total".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_field(), Some(SortField::Total));

        query.sortby = Some("hp".to_string());
        assert_eq!(query.sort_field(), None);

        query.sortby = Some("Name".to_string());
        assert_eq!(query.sort_field(), None);
    }

    #[test]
    fn anything_but_desc_is_ascending() {
        let mut query = SearchQuery::default();
        assert_eq!(query.sort_order(), SortOrder::Asc);

        query.order = Some("desc".to_string());
        assert_eq!(query.sort_order(), SortOrder::Desc);

        query.order = Some("sideways".to_string());
        assert_eq!(query.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn type_tags_split_on_commas() {
        let query = SearchQuery {
            types: Some("fire,flying".to_string()),
            ..Default::default()
        };
        assert_eq!(query.type_tags(), Some(vec!["fire", "flying"]));
        assert_eq!(SearchQuery::default().type_tags(), None);
    }

    #[test]
    fn page_query_defaults() {
        let page: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(page, PageQuery { page: 1, items: 10 });
    }
}
