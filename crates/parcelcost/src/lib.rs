//! Shipping cost tiers and orientation search for rectangular parcels.
//!
//! Layout
//! - `parcel`: validated `Parcel` value type.
//! - `pricing`: providers, price tables, the price record parser, tier rules.
//! - `engine`: `CostTierEngine` (tier lookup, express surcharge, VAT).
//! - `rotation`: rotation grid and bounding-box projection.
//! - `optimizer`: `OrientationOptimizer` grid search.
//!
//! Everything here is pure, synchronous computation. Loading price files,
//! logging and presentation belong to callers (see the `parcelcost-cli` crate).

pub mod cfg;
pub mod engine;
pub mod error;
pub mod optimizer;
pub mod parcel;
pub mod pricing;
pub mod rotation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{CostTierEngine, Quote, TierError, VatRate};
pub use error::{Error, Result};
pub use optimizer::{OptimizationResult, OrientationOptimizer, SearchCfg};
pub use parcel::{Parcel, ValidationError};
pub use pricing::{PriceSheet, PriceSheetError, PriceTable, Provider, Tier};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{CostTierEngine, Quote, TierError, VatRate};
    pub use crate::optimizer::{OptimizationResult, OrientationOptimizer, SearchCfg};
    pub use crate::parcel::{Parcel, ValidationError};
    pub use crate::pricing::{PriceSheet, PriceTable, Provider, Tier};
    pub use crate::rotation::{BoundingBox, BoundingBoxProjector, RotationSample, RotationSampler};
}
