use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ListingSelector;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::resolve_all;

/// Full details for the selected listings, in the order they were asked for.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    selectors: &[ListingSelector],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut listed = Vec::new();

    for (selector, found) in resolve_all(store, selectors)? {
        match found {
            Some(dl) => listed.push(dl),
            None => result.add_message(CmdMessage::info(format!(
                "Listing {} not found",
                selector
            ))),
        }
    }

    Ok(result.with_listed_listings(listed))
}
