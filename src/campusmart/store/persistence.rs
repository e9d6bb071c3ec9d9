use super::backend::StorageBackend;
use crate::error::{MarketError, Result};
use crate::form::check_required;
use crate::model::Listing;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "cmp_listings_v1";

/// Reads and writes the whole listing collection as one JSON array under a fixed key.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    /// Loads the stored collection.
    ///
    /// Never fails: absent data, unreadable storage and anything that is not an
    /// array of well-formed listings all come back as an empty collection.
    pub fn load(&self) -> Vec<Listing> {
        let raw = match self.backend.read_blob(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored listings");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "listing storage unavailable, starting empty");
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(listings) => {
                tracing::debug!(key = %self.key, count = listings.len(), "loaded listings");
                listings
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored listings are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Replaces the stored collection with `listings`.
    pub fn save(&self, listings: &[Listing]) -> Result<()> {
        let content = serde_json::to_string_pretty(listings).map_err(MarketError::Serialization)?;
        self.backend.write_blob(&self.key, &content)?;
        tracing::debug!(key = %self.key, count = listings.len(), "saved listings");
        Ok(())
    }
}

/// Strict decode: the shape must match and the collection invariants must hold.
fn decode(raw: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> = serde_json::from_str(raw).map_err(MarketError::Serialization)?;

    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !seen.insert(&listing.id) {
            return Err(MarketError::Store(format!(
                "duplicate listing id {}",
                listing.id
            )));
        }
        check_required(listing).map_err(|e| {
            MarketError::Store(format!("listing {} is invalid: {}", listing.id, e))
        })?;
    }

    Ok(listings)
}
