//! # Query Engine
//!
//! Derives the visible listings from the store and a [`FilterState`]:
//!
//! 1. Category: everything on `all`, otherwise exact matches.
//! 2. Text: the trimmed, lowercased query must be a substring of the lowercased
//!    title, description or seller. An empty query keeps everything.
//! 3. Stable sort by [`SortMode`]. Titles use Unicode root-locale collation, so
//!    accents and case order the way a reader expects (`apple` < `Apple` < `Écran`).
//!
//! The input is never touched; results are fresh copies. An empty result is a
//! normal outcome, not an error.

use crate::index::DisplayListing;
use crate::model::{CategoryFilter, FilterState, Listing, SortMode};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Anything the engine can filter: a bare listing or one carrying its index.
pub trait AsListing {
    fn as_listing(&self) -> &Listing;
}

impl AsListing for Listing {
    fn as_listing(&self) -> &Listing {
        self
    }
}

impl AsListing for DisplayListing {
    fn as_listing(&self) -> &Listing {
        &self.listing
    }
}

/// Filtered and sorted copy of `listings`.
pub fn view(listings: &[Listing], filters: &FilterState) -> Vec<Listing> {
    derive(listings, filters)
}

/// Same as [`view`], keeping display indexes attached.
pub fn view_indexed(listings: &[DisplayListing], filters: &FilterState) -> Vec<DisplayListing> {
    derive(listings, filters)
}

fn derive<T: AsListing + Clone>(items: &[T], filters: &FilterState) -> Vec<T> {
    let needle = filters.normalized_query();
    let mut out: Vec<T> = items
        .iter()
        .filter(|item| matches(item.as_listing(), filters.category, &needle))
        .cloned()
        .collect();
    let titles = match filters.sort {
        SortMode::Title => TitleCollator::new(),
        _ => TitleCollator::fallback(),
    };
    // sort_by is stable: equal keys keep store order.
    out.sort_by(|a, b| compare(a.as_listing(), b.as_listing(), filters.sort, &titles));
    out
}

/// `needle` must already be trimmed and lowercased.
pub fn matches(listing: &Listing, category: CategoryFilter, needle: &str) -> bool {
    if !category.admits(listing.category) {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    [&listing.title, &listing.description, &listing.seller]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn compare(a: &Listing, b: &Listing, sort: SortMode, titles: &TitleCollator) -> Ordering {
    match sort {
        SortMode::Newest => b.created_at.cmp(&a.created_at),
        SortMode::PriceAsc => a.price.cmp(&b.price),
        SortMode::PriceDesc => b.price.cmp(&a.price),
        SortMode::Title => titles.compare(&a.title, &b.title),
    }
}

/// Locale-aware title order (root locale, tertiary strength).
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn new() -> Self {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                tracing::warn!(error = ?e, "collation data unavailable, sorting titles case-insensitively");
                Self::fallback()
            }
        }
    }

    /// Case-insensitive code point order, without collation data.
    pub fn fallback() -> Self {
        Self { collator: None }
    }

    /// Collated order; exact ties fall back to the raw text so the result is
    /// deterministic.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}
