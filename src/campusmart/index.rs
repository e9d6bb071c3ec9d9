//! # Display Indexes
//!
//! Ids are long opaque tokens, which makes them awkward to type. Every listing
//! therefore also gets a display index: its 1-based position in the store's natural
//! order (most recent insert first).
//!
//! The index is assigned **before** filtering and sorting, so a listing keeps its
//! number in every view. `campusmart list --sort price-asc` may print `3.` on the
//! first row, and `campusmart view 3` shows exactly that row.
//!
//! Users can also select a listing by id or by any unique id prefix. See
//! [`ListingSelector`].

use crate::model::Listing;
use std::fmt;
use std::str::FromStr;

/// A listing paired with its display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayListing {
    pub index: usize,
    pub listing: Listing,
}

/// User input that picks a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSelector {
    Index(usize),
    /// Full id or a unique prefix of one.
    Id(String),
}

impl fmt::Display for ListingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSelector::Index(i) => write!(f, "{}", i),
            ListingSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for ListingSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty listing selector".to_string());
        }
        // Short all-digit input is an index; longer digit runs can only be ids.
        if s.len() <= 6 {
            if let Ok(n) = s.parse::<usize>() {
                if n == 0 {
                    return Err("Listing indexes start at 1".to_string());
                }
                return Ok(ListingSelector::Index(n));
            }
        }
        Ok(ListingSelector::Id(s.to_string()))
    }
}

/// Numbers listings 1..n in the order given.
pub fn index_listings(listings: &[Listing]) -> Vec<DisplayListing> {
    listings
        .iter()
        .enumerate()
        .map(|(i, listing)| DisplayListing {
            index: i + 1,
            listing: listing.clone(),
        })
        .collect()
}
