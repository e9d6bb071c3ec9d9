use super::backend::StorageBackend;
use super::persistence::Persistence;
use crate::error::{MarketError, Result};
use crate::form::check_required;
use crate::model::{Listing, ListingId};
use std::collections::HashSet;

/// Outcome of a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Nothing matched; neither memory nor storage was touched.
    Unchanged,
    /// Applied in memory and written back.
    Saved,
    /// Applied in memory, but the write-back failed.
    Unsaved,
}

impl Mutation {
    pub fn applied(&self) -> bool {
        !matches!(self, Mutation::Unchanged)
    }
}

/// The in-memory source of truth for listings, most recent first.
///
/// Loaded once by [`ListingStore::open`]; every mutation writes the full
/// collection back through the [`Persistence`] adapter. Only records that
/// storage would load back are admitted: required fields filled, ids unique.
pub struct ListingStore<B: StorageBackend> {
    persistence: Persistence<B>,
    listings: Vec<Listing>,
}

impl<B: StorageBackend> ListingStore<B> {
    pub fn open(persistence: Persistence<B>) -> Self {
        let listings = persistence.load();
        Self {
            persistence,
            listings,
        }
    }

    /// Discards the in-memory collection and reads storage again.
    pub fn reload(&mut self) {
        self.listings = self.persistence.load();
    }

    /// Tears the store down, handing back the backend.
    pub fn close(self) -> B {
        self.persistence.into_backend()
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.get(id).is_some()
    }

    /// Puts a new listing at the front.
    pub fn insert(&mut self, listing: Listing) -> Result<Mutation> {
        check_required(&listing)?;
        if self.contains(&listing.id) {
            return Err(MarketError::DuplicateId(listing.id));
        }
        tracing::info!(id = %listing.id, title = %listing.title, "listing created");
        self.listings.insert(0, listing);
        Ok(self.persist())
    }

    /// Replaces the listing with `id` in place. `id` and `created_at` of the
    /// existing record win over whatever `listing` carries.
    pub fn update(&mut self, id: &ListingId, mut listing: Listing) -> Result<Mutation> {
        check_required(&listing)?;
        let Some(slot) = self.listings.iter_mut().find(|l| &l.id == id) else {
            tracing::debug!(id = %id, "update of unknown listing ignored");
            return Ok(Mutation::Unchanged);
        };
        listing.id = slot.id.clone();
        listing.created_at = slot.created_at;
        *slot = listing;
        tracing::info!(id = %id, "listing updated");
        Ok(self.persist())
    }

    pub fn delete(&mut self, id: &ListingId) -> Mutation {
        let Some(pos) = self.listings.iter().position(|l| &l.id == id) else {
            tracing::debug!(id = %id, "delete of unknown listing ignored");
            return Mutation::Unchanged;
        };
        self.listings.remove(pos);
        tracing::info!(id = %id, "listing deleted");
        self.persist()
    }

    /// Replaces the whole collection. Nothing changes unless every record is
    /// admissible.
    pub fn seed(&mut self, samples: Vec<Listing>) -> Result<Mutation> {
        let mut seen = HashSet::with_capacity(samples.len());
        for listing in &samples {
            check_required(listing)?;
            if !seen.insert(&listing.id) {
                return Err(MarketError::DuplicateId(listing.id.clone()));
            }
        }
        tracing::info!(count = samples.len(), "seeding listings");
        self.listings = samples;
        Ok(self.persist())
    }

    fn persist(&self) -> Mutation {
        match self.persistence.save(&self.listings) {
            Ok(()) => Mutation::Saved,
            Err(e) => {
                tracing::warn!(error = %e, location = %self.persistence.location().display(), "failed to save listings");
                Mutation::Unsaved
            }
        }
    }
}
