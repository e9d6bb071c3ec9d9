use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ListingSelector;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::resolve_all;

/// Deletes the selected listings. Selectors are resolved up front; unknown ones
/// are reported and skipped.
pub fn run<B: StorageBackend>(
    store: &mut ListingStore<B>,
    selectors: &[ListingSelector],
) -> Result<CmdResult> {
    let resolved = resolve_all(store, selectors)?;
    let mut result = CmdResult::default();

    for (selector, found) in resolved {
        let Some(dl) = found else {
            result.add_message(CmdMessage::info(format!(
                "Listing {} not found; nothing deleted",
                selector
            )));
            continue;
        };
        let mutation = store.delete(&dl.listing.id);
        if mutation.applied() {
            let message = format!("Listing deleted ({}): {}", dl.index, dl.listing.title);
            result.affected_listings.push(dl);
            result.record_mutation(store, mutation, message);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::fixtures::seeded_store;

    #[test]
    fn deletes_by_original_indexes() {
        let mut store = seeded_store();
        let third = store.listings()[2].id.clone();

        let result = run(
            &mut store,
            &[ListingSelector::Index(1), ListingSelector::Index(2)],
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.listings()[0].id, third);
        assert_eq!(result.affected_listings.len(), 2);
    }

    #[test]
    fn same_listing_twice_deletes_once() {
        let mut store = seeded_store();
        let id = store.listings()[0].id.to_string();

        let result = run(
            &mut store,
            &[ListingSelector::Index(1), ListingSelector::Id(id)],
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(result.affected_listings.len(), 1);
    }

    #[test]
    fn unknown_id_leaves_store_untouched() {
        let mut store = seeded_store();
        let writes = store.persistence().backend().write_count();

        let result = run(&mut store, &[ListingSelector::Id("nope".into())]).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.persistence().backend().write_count(), writes);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
