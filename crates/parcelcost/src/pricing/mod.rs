//! Price data: providers, tier tables, and the size/weight tier schedule.
//!
//! - `table`: `Provider`, `PriceTable`, `PriceSheet` and the record parser.
//! - `tier`: `Tier` and the first-match decision list `TIER_RULES`.
//!
//! Cross-refs: `engine::CostTierEngine` looks up `PriceSheet` prices by
//! `Tier::price_index`.

mod table;
mod tier;

pub use table::{
    PriceSheet, PriceSheetError, PriceTable, Provider, UnknownProvider, HERMES_MARKER, TIER_COUNT,
};
pub use tier::{match_tier, Tier, TierRule, TIER_RULES};
