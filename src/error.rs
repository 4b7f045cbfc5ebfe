use thiserror::Error;

/// Reasons an `/order` request is rejected before any packs are computed.
///
/// `ZeroItems` and `NegativeItems` are both out-of-range quantities; they
/// keep separate messages so clients can tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderInputError {
    #[error("No items provided. Please provide a valid list of items")]
    MissingItems,

    #[error("Invalid input. Please provide a valid number of items")]
    MalformedItems { value: String },

    #[error("Invalid input. You cannot order 0 items. Please provide a valid number of items")]
    ZeroItems,

    #[error("Invalid input. You cannot order negative items. Please provide a valid number of items")]
    NegativeItems { value: i64 },
}

pub type Result<T> = std::result::Result<T, OrderInputError>;
