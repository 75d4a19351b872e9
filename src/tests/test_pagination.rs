use crate::catalog::Catalog;
use crate::tests::common::{ids, TestPokemonBuilder};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schema::MAX_ITEMS_PER_PAGE;

fn catalog_of(size: u32) -> Catalog {
    Catalog::with_records((1..=size).map(|id| {
        (
            id,
            TestPokemonBuilder::new(id, &format!("pokemon-{}", id)).build(),
        )
    }))
}

#[rstest]
#[case(1, 10, (1..=10).collect())]
#[case(2, 10, (11..=20).collect())]
#[case(3, 10, (21..=25).collect())]
#[case(4, 10, (21..=25).collect())]
#[case(99, 10, (21..=25).collect())]
#[case(0, 10, (1..=10).collect())]
#[case(-3, 10, (1..=10).collect())]
#[case(1, 100, (1..=20).collect())]
#[case(2, 100, (21..=25).collect())]
#[case(1, 0, vec![1])]
#[case(5, 7, (22..=25).collect())]
fn test_paginate(#[case] page: i64, #[case] items: i64, #[case] expected: Vec<u32>) {
    assert_eq!(ids(&catalog_of(25).paginate(page, items)), expected);
}

#[rstest]
fn test_pages_partition_collection(
    #[values(1, 3, 7, 10, 20)] items: i64,
    #[values(1, 19, 20, 21, 45)] size: u32,
) {
    let catalog = catalog_of(size);
    let pages = (size as i64 + items - 1) / items;

    let mut seen = Vec::new();
    for page in 1..=pages {
        let chunk = catalog.paginate(page, items);
        assert!(!chunk.is_empty());
        assert!(chunk.len() as i64 <= items.min(MAX_ITEMS_PER_PAGE));
        seen.extend(ids(&chunk));
    }
    assert_eq!(seen, ids(&catalog.list_all()));
}

#[test]
fn test_page_past_end_is_last_page_never_empty() {
    let catalog = catalog_of(3);
    assert_eq!(ids(&catalog.paginate(1000, 2)), vec![3]);
}

#[test]
fn test_empty_catalog_gives_empty_page() {
    assert!(Catalog::new().paginate(1, 10).is_empty());
    assert!(Catalog::new().paginate(5, 20).is_empty());
}

#[test]
fn test_pages_follow_insertion_order() {
    let mut catalog = catalog_of(3);
    catalog
        .create(TestPokemonBuilder::new(100, "late").build())
        .unwrap();
    catalog.delete(1).unwrap();
    assert_eq!(ids(&catalog.paginate(1, 2)), vec![2, 3]);
    assert_eq!(ids(&catalog.paginate(2, 2)), vec![100]);
}
