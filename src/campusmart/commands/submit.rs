use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::ListingForm;
use crate::index::DisplayListing;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::index_of;

/// Saves a form the way a post/edit dialog does: a form carrying the id of a
/// stored listing updates it in place, anything else becomes a new listing.
pub fn run<B: StorageBackend>(store: &mut ListingStore<B>, form: ListingForm) -> Result<CmdResult> {
    let listing = form.into_listing()?;
    let id = listing.id.clone();
    let mut result = CmdResult::default();

    let (mutation, verb) = if store.contains(&id) {
        (store.update(&id, listing)?, "updated")
    } else {
        (store.insert(listing)?, "created")
    };

    if let (Some(index), Some(saved)) = (index_of(store, &id), store.get(&id)) {
        let message = format!("Listing {}: {}", verb, saved.title);
        result.affected_listings.push(DisplayListing {
            index,
            listing: saved.clone(),
        });
        result.record_mutation(store, mutation, message);
    }
    Ok(result)
}
