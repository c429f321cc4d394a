//! Crate-level error type for callers that chain construction and pricing.

use thiserror::Error;

pub use crate::engine::TierError;
pub use crate::parcel::ValidationError;
pub use crate::pricing::PriceSheetError;

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure the core can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Tier(#[from] TierError),
    #[error(transparent)]
    PriceSheet(#[from] PriceSheetError),
}
