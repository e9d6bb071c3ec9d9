use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw blob storage.
///
/// A backend knows nothing about listings: it maps a key to one opaque string.
/// [`Persistence`](super::persistence::Persistence) decides what goes in the blob,
/// [`ListingStore`](super::listing_store::ListingStore) decides when to write it.
pub trait StorageBackend {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_blob(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_blob(&self, key: &str, content: &str) -> Result<()>;

    /// Where the blob for `key` lives. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
