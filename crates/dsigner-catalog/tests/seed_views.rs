//! Views over the seed catalogs, exercised through the public API only.

use dsigner_catalog::prelude::*;

fn ids<T: CatalogItem>(items: &[&T]) -> Vec<i64> {
    items.iter().map(|p| p.id().value()).collect()
}

#[test]
fn test_every_designer_tab_is_sound_and_complete() {
    let catalog = designer_catalog();
    for tab in CategoryFilter::<DesignerCategory>::tabs() {
        let state = FilterSortState::default().set_category(tab);
        let view = derive(&catalog, &state);
        match tab {
            CategoryFilter::All => assert_eq!(view.len(), catalog.len()),
            CategoryFilter::Only(category) => {
                assert_eq!(view.len(), catalog.count_in(category));
                assert!(view.iter().all(|p| p.category() == Some(category)));
            }
        }
    }
}

#[test]
fn test_heritage_tab_shows_three() {
    let catalog = designer_catalog();
    let state = FilterSortState::from_query(Some("heritage"), None);
    assert_eq!(ids(&derive(&catalog, &state)), vec![2, 5, 8]);
}

#[test]
fn test_escort_sorts_are_stable_permutations() {
    let catalog = escort_catalog();
    let mut all: Vec<i64> = catalog.list().iter().map(|p| p.id().value()).collect();
    all.sort_unstable();

    for key in SortKey::ALL {
        let view = derive(&catalog, &FilterSortState::default().set_sort(key));
        let mut seen = ids(&view);
        seen.sort_unstable();
        assert_eq!(seen, all, "{:?} must be a permutation", key);

        for pair in view.windows(2) {
            match key {
                SortKey::PopularityDesc => assert!(pair[0].popularity() >= pair[1].popularity()),
                SortKey::PriceAsc => assert!(pair[0].price() <= pair[1].price()),
                SortKey::PriceDesc => assert!(pair[0].price() >= pair[1].price()),
            }
        }
    }
}

#[test]
fn test_escort_cheapest_first() {
    let catalog = escort_catalog();
    let view = derive(&catalog, &FilterSortState::from_query(None, Some("price-low")));
    assert_eq!(view[0].id(), ProductId::new(101));
    assert_eq!(view[0].price().amount, 4999);
}

#[test]
fn test_selection_of_unknown_id_stays_closed() {
    let catalog = designer_catalog();
    assert_eq!(Selection::resolve(&catalog, Some("104")), Selection::Closed);
    let open = Selection::resolve(&catalog, Some("6"));
    assert_eq!(open.product(&catalog).map(|p| p.name.as_str()), Some("Elite Midnight"));
}
