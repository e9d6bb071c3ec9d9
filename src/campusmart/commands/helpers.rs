use crate::error::{MarketError, Result};
use crate::index::{index_listings, DisplayListing, ListingSelector};
use crate::model::ListingId;
use crate::store::{ListingStore, StorageBackend};

pub fn indexed_listings<B: StorageBackend>(store: &ListingStore<B>) -> Vec<DisplayListing> {
    index_listings(store.listings())
}

/// Finds the listing a selector points at.
///
/// Unknown indexes and ids resolve to `None`: a stale reference is not an error.
/// An id prefix shared by several listings is, since acting on a guess would be
/// worse than asking again.
pub fn resolve<B: StorageBackend>(
    store: &ListingStore<B>,
    selector: &ListingSelector,
) -> Result<Option<DisplayListing>> {
    let indexed = indexed_listings(store);
    match selector {
        ListingSelector::Index(n) => Ok(indexed.into_iter().find(|dl| dl.index == *n)),
        ListingSelector::Id(id) => {
            if let Some(exact) = indexed.iter().find(|dl| dl.listing.id.as_str() == id) {
                return Ok(Some(exact.clone()));
            }
            let mut matches: Vec<DisplayListing> = indexed
                .into_iter()
                .filter(|dl| dl.listing.id.as_str().starts_with(id.as_str()))
                .collect();
            match matches.len() {
                0 => Ok(None),
                1 => Ok(matches.pop()),
                n => Err(MarketError::Api(format!(
                    "Id prefix {} matches {} listings; use more characters",
                    id, n
                ))),
            }
        }
    }
}

/// Resolves every selector before anything is changed, so deleting listing 1
/// does not shift what "2" means halfway through.
pub fn resolve_all<B: StorageBackend>(
    store: &ListingStore<B>,
    selectors: &[ListingSelector],
) -> Result<Vec<(ListingSelector, Option<DisplayListing>)>> {
    selectors
        .iter()
        .map(|s| resolve(store, s).map(|found| (s.clone(), found)))
        .collect()
}

/// Display index of the listing with `id`, if it is in the store.
pub fn index_of<B: StorageBackend>(store: &ListingStore<B>, id: &ListingId) -> Option<usize> {
    store
        .listings()
        .iter()
        .position(|l| &l.id == id)
        .map(|pos| pos + 1)
}
