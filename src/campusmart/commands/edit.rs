use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{ListingForm, ListingPatch};
use crate::index::{DisplayListing, ListingSelector};
use crate::store::{ListingStore, StorageBackend};

use super::helpers::resolve;

/// What an edit carries: a whole replacement form, or changes over the stored
/// values.
#[derive(Debug, Clone)]
pub enum EditInput {
    Replace(ListingForm),
    Patch(ListingPatch),
}

/// Edits the selected listing in place. An unknown selector changes nothing.
pub fn run<B: StorageBackend>(
    store: &mut ListingStore<B>,
    selector: &ListingSelector,
    input: EditInput,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(current) = resolve(store, selector)? else {
        result.add_message(CmdMessage::info(format!(
            "Listing {} not found; nothing changed",
            selector
        )));
        return Ok(result);
    };

    let mut form = match input {
        EditInput::Replace(form) => form,
        EditInput::Patch(patch) => {
            let mut form = ListingForm::from_listing(&current.listing);
            patch.apply_to(&mut form);
            form
        }
    };
    form.id = Some(current.listing.id.to_string());

    let replacement = form.into_listing_at(current.listing.created_at)?;
    let id = current.listing.id.clone();
    let mutation = store.update(&id, replacement)?;

    if let Some(updated) = store.get(&id) {
        result.affected_listings.push(DisplayListing {
            index: current.index,
            listing: updated.clone(),
        });
        let message = format!("Listing updated ({}): {}", current.index, updated.title);
        result.record_mutation(store, mutation, message);
    }
    Ok(result)
}
