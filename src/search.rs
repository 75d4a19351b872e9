//! Search over the catalog: a chain of filter steps followed by an optional sort.
//!
//! Steps do not form a plain conjunction. Each step filters the previous
//! step's result when that result is non-empty and the full dataset
//! otherwise, so a step that matches nothing is forgotten by the next one.
//! When no record totals above 600, `totalgt=600&totallt=300` returns the
//! same records as `totallt=300` alone.

use std::cmp::Ordering;

use schema::{Pokemon, SearchQuery, SortField, SortOrder};

use crate::errors::{CatalogError, CatalogResult};

/// A single filter in the chain, applied after the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterStep {
    /// `Some(wanted)` keeps records whose evolution presence equals `wanted`.
    /// `None` comes from an unrecognised `evo` value and keeps nothing.
    Evolution(Option<bool>),
    TotalAbove(i64),
    TotalBelow(i64),
}

impl FilterStep {
    fn matches(&self, pokemon: &Pokemon) -> bool {
        match *self {
            FilterStep::Evolution(Some(wanted)) => pokemon.has_evolution() == wanted,
            FilterStep::Evolution(None) => false,
            FilterStep::TotalAbove(bound) => pokemon.total.is_some_and(|t| i64::from(t) > bound),
            FilterStep::TotalBelow(bound) => pokemon.total.is_some_and(|t| i64::from(t) < bound),
        }
    }
}

fn chained_steps(query: &SearchQuery) -> Vec<FilterStep> {
    let mut steps = Vec::new();
    if let Some(evo) = query.evo.as_deref() {
        let wanted = match evo {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        steps.push(FilterStep::Evolution(wanted));
    }
    if let Some(bound) = query.totalgt {
        steps.push(FilterStep::TotalAbove(bound));
    }
    if let Some(bound) = query.totallt {
        steps.push(FilterStep::TotalBelow(bound));
    }
    steps
}

/// The set a step starts from.
fn working_set<'s, 'a>(filtered: &'s [&'a Pokemon], full: &'s [&'a Pokemon]) -> &'s [&'a Pokemon] {
    if filtered.is_empty() {
        full
    } else {
        filtered
    }
}

fn compare(a: &Pokemon, b: &Pokemon, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        // Records without a total sort first.
        SortField::Total => a.total.cmp(&b.total),
    }
}

fn sort_records(records: &mut [&Pokemon], field: SortField, order: SortOrder) {
    // sort_by is stable, and reversing the comparator keeps ties in their
    // original order for descending sorts as well.
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Runs `query` against `full`, every searchable record in dataset order.
pub fn run(full: &[&Pokemon], query: &SearchQuery) -> CatalogResult<Vec<Pokemon>> {
    let mut filtered: Vec<&Pokemon> = Vec::new();

    // The type filter always reads the full dataset.
    if let Some(tags) = query.type_tags() {
        filtered = full
            .iter()
            .copied()
            .filter(|pokemon| pokemon.has_all_types(&tags))
            .collect();
    }

    for step in chained_steps(query) {
        filtered = working_set(&filtered, full)
            .iter()
            .copied()
            .filter(|pokemon| step.matches(pokemon))
            .collect();
        log::trace!("{:?} left {} records", step, filtered.len());
    }

    if let Some(field) = query.sort_field() {
        let mut sorted = working_set(&filtered, full).to_vec();
        sort_records(&mut sorted, field, query.sort_order());
        filtered = sorted;
    }

    if filtered.is_empty() {
        log::debug!("search {:?} matched nothing", query);
        return Err(CatalogError::NoMatch);
    }
    Ok(filtered.into_iter().cloned().collect())
}
