use crate::config::MarketConfig;
use crate::index::DisplayListing;
use crate::store::{ListingStore, Mutation, StorageBackend};

pub mod config;
pub mod contact;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod seed;
pub mod submit;
pub mod view;

pub use contact::ContactCard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Listings changed by the command, with their index after the change.
    pub affected_listings: Vec<DisplayListing>,
    /// Listings to display, in display order.
    pub listed_listings: Vec<DisplayListing>,
    pub contact: Option<ContactCard>,
    pub config: Option<MarketConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_listings(mut self, listings: Vec<DisplayListing>) -> Self {
        self.listed_listings = listings;
        self
    }

    pub fn with_config(mut self, config: MarketConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Records the outcome of a store mutation: `success` when it was applied,
    /// plus a warning when it could not be written back.
    pub(crate) fn record_mutation<B: StorageBackend>(
        &mut self,
        store: &ListingStore<B>,
        mutation: Mutation,
        success: impl Into<String>,
    ) {
        match mutation {
            Mutation::Saved => self.add_message(CmdMessage::success(success)),
            Mutation::Unsaved => {
                self.add_message(CmdMessage::success(success));
                self.add_message(CmdMessage::warning(format!(
                    "Changes could not be saved to {}; they will be lost on exit",
                    store.persistence().location().display()
                )));
            }
            Mutation::Unchanged => {}
        }
    }
}
