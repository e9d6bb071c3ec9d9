//! # Campusmart Architecture
//!
//! Campusmart is a **UI-agnostic listing library** for a small campus marketplace.
//! The command-line client shipped with it is one consumer among many possible ones.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders listings, owns stdout/stderr   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the ListingStore for the lifetime of the client     │
//! │  - Resolves selectors (display index or id prefix)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + query.rs + form.rs         │
//! │  - Business logic on plain Rust types, returns CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ListingStore: ordered in-memory collection               │
//! │  - Persistence: one JSON blob under a fixed key             │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The whole collection is the unit of persistence. It is read once when the store
//! is opened and written back in full after every mutation. A blob that is missing,
//! unreadable or not a well-formed array of listings is treated as an empty
//! collection, and a failed write never rolls back the in-memory change.
//!
//! ## Display Indexes
//!
//! Listings are numbered 1..n in the store's natural order (most recent first).
//! Filtering and sorting keep those numbers, so `campusmart edit 3` always means
//! the same listing no matter which view it was seen in. Ids (or a unique prefix)
//! are accepted anywhere an index is.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI talks to
//! - [`commands`]: One module per user action
//! - [`query`]: Filter and sort engine
//! - [`form`]: Raw form input to validated [`model::Listing`]
//! - [`store`]: Listing store, persistence adapter and backends
//! - [`model`]: `Listing`, `Category`, `FilterState`, `SortMode`
//! - [`index`]: Display indexes and selectors
//! - [`samples`]: Demonstration listings used for seeding
//! - [`format`]: Price formatting
//! - [`config`]: Configuration file
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod index;
pub mod model;
pub mod query;
pub mod samples;
pub mod store;
