use crate::clipboard::format_contact;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ListingSelector;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::resolve;

/// How to reach the seller of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub seller: String,
    pub email: String,
    pub phone: Option<String>,
    /// Single line suitable for the clipboard.
    pub clipboard_line: String,
}

pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    selector: &ListingSelector,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(dl) = resolve(store, selector)? else {
        result.add_message(CmdMessage::info(format!("Listing {} not found", selector)));
        return Ok(result);
    };

    let listing = &dl.listing;
    result.contact = Some(ContactCard {
        seller: listing.seller.clone(),
        email: listing.email.clone(),
        phone: listing.phone.clone(),
        clipboard_line: format_contact(&listing.seller, &listing.email, listing.phone.as_deref()),
    });
    result.listed_listings.push(dl);
    Ok(result)
}
