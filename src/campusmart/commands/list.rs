use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FilterState;
use crate::query::view_indexed;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::indexed_listings;

pub fn run<B: StorageBackend>(store: &ListingStore<B>, filters: &FilterState) -> Result<CmdResult> {
    let listed = view_indexed(&indexed_listings(store), filters);
    let mut result = CmdResult::default();

    if listed.is_empty() {
        if store.is_empty() {
            result.add_message(CmdMessage::info(
                "The marketplace is empty. Seed it with sample listings or post your own.",
            ));
        } else {
            result.add_message(CmdMessage::info("No listings match your filters."));
        }
    }

    Ok(result.with_listed_listings(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{Category, CategoryFilter, SortMode};
    use crate::store::mem_backend::fixtures::{empty_store, form, seeded_store};

    #[test]
    fn empty_store_reports_empty_state() {
        let store = empty_store();
        let result = run(&store, &FilterState::default()).unwrap();
        assert!(result.listed_listings.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("empty"));
    }

    #[test]
    fn no_match_is_not_an_error() {
        let store = seeded_store();
        let result = run(&store, &FilterState::default().with_query("bicycle")).unwrap();
        assert!(result.listed_listings.is_empty());
        assert!(result.messages[0].content.contains("No listings match"));
    }

    #[test]
    fn new_listing_is_first_in_neutral_view() {
        let mut store = seeded_store();
        create::run(&mut store, form("Brand New")).unwrap();

        let filters = FilterState::default();
        let result = run(&store, &filters).unwrap();

        assert_eq!(result.listed_listings[0].listing.title, "Brand New");
        assert_eq!(result.listed_listings[0].index, 1);
        assert_eq!(result.listed_listings.len(), 4);
    }

    #[test]
    fn filters_and_sorts_with_indexes() {
        let store = seeded_store();
        let filters = FilterState::default()
            .with_category(CategoryFilter::Only(Category::Books))
            .with_sort(SortMode::PriceDesc);

        let result = run(&store, &filters).unwrap();

        assert_eq!(result.listed_listings.len(), 1);
        assert_eq!(result.listed_listings[0].index, 2);
        assert!(result.messages.is_empty());
    }
}
