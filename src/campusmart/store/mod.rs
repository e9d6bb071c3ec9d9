//! # Storage Layer
//!
//! Three pieces, from the bottom up:
//!
//! - [`backend::StorageBackend`]: raw key → blob I/O. [`fs_backend::FsBackend`]
//!   writes files atomically, [`mem_backend::MemBackend`] keeps blobs in memory for
//!   tests and can simulate read/write failures.
//! - [`persistence::Persistence`]: owns the storage key and the JSON encoding of
//!   the whole collection. `load` never fails; anything unexpected is an empty
//!   collection.
//! - [`listing_store::ListingStore`]: the ordered in-memory collection. Loads once,
//!   writes back after every mutation, and treats unknown ids as no-ops.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── cmp_listings_v1.json   # JSON array of listings, most recent first
//! └── config.json            # Optional configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod listing_store;
pub mod mem_backend;
pub mod persistence;

pub use backend::StorageBackend;
pub use listing_store::{ListingStore, Mutation};
pub use persistence::{Persistence, DEFAULT_STORAGE_KEY};
