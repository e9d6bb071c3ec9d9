use super::backend::StorageBackend;
use crate::error::{MarketError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since campusmart is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with a raw blob, e.g. to simulate corruption.
    pub fn with_blob(key: &str, content: &str) -> Self {
        let backend = Self::default();
        backend
            .blobs
            .borrow_mut()
            .insert(key.to_string(), content.to_string());
        backend
    }

    /// Enable write error simulation (a full or read-only storage).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation (unavailable storage).
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw content under `key`, bypassing the error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_blob(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(MarketError::Store("Simulated read error".to_string()));
        }
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write_blob(&self, key: &str, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(MarketError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::MemBackend;
    use crate::form::ListingForm;
    use crate::model::now_millis;
    use crate::samples::sample_listings;
    use crate::store::{ListingStore, Persistence};

    pub fn empty_store() -> ListingStore<MemBackend> {
        ListingStore::open(Persistence::with_default_key(MemBackend::new()))
    }

    /// Store holding the three demonstration listings.
    pub fn seeded_store() -> ListingStore<MemBackend> {
        let mut store = empty_store();
        store
            .seed(sample_listings(now_millis()))
            .expect("sample listings are admissible");
        store
    }

    /// A form that passes validation.
    pub fn form(title: &str) -> ListingForm {
        ListingForm {
            title: title.to_string(),
            category: "other".to_string(),
            price: "100".to_string(),
            seller: "Test Seller".to_string(),
            email: "seller@college.edu".to_string(),
            ..Default::default()
        }
    }
}
