use crate::form::ValidationError;
use crate::model::ListingId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid listing: {0}")]
    Validation(#[from] ValidationError),

    #[error("A listing with id {0} already exists")]
    DuplicateId(ListingId),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
