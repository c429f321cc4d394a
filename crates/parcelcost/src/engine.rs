//! Cost tier engine: tier classification plus price post-processing.
//!
//! `calculate` is a pure function of its arguments and the engine's
//! `PriceSheet`: no logging, no I/O, no interior mutability. One engine may be
//! shared freely between threads.

use thiserror::Error;

use crate::cfg::EXPRESS_SURCHARGE;
use crate::parcel::Parcel;
use crate::pricing::{match_tier, PriceSheet, Provider, Tier};

/// A structurally valid parcel that no tier admits.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TierError {
    #[error("parcel is oversized: no price tier matches")]
    Oversized,
}

/// VAT presets offered to users; `calculate` itself accepts any fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VatRate {
    #[default]
    None,
    /// 7 %.
    Reduced,
    /// 19 %.
    Standard,
}

impl VatRate {
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Reduced => 0.07,
            Self::Standard => 0.19,
        }
    }
}

/// Priced classification of one parcel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quote {
    pub provider: Provider,
    pub tier: Tier,
    /// Table price before express/VAT modifiers.
    pub base_price: f64,
    pub price: f64,
}

#[derive(Clone, Debug, Default)]
pub struct CostTierEngine {
    sheet: PriceSheet,
}

impl CostTierEngine {
    pub fn new(sheet: PriceSheet) -> Self {
        Self { sheet }
    }

    pub fn sheet(&self) -> &PriceSheet {
        &self.sheet
    }

    /// First-match tier of `parcel`.
    pub fn classify(&self, parcel: &Parcel) -> Result<Tier, TierError> {
        match_tier(parcel).ok_or(TierError::Oversized)
    }

    /// Tier price for `provider`, then `×1.2` if `express`, then `×(1 − vat_rate)`.
    pub fn calculate(
        &self,
        parcel: &Parcel,
        provider: Provider,
        express: bool,
        vat_rate: f64,
    ) -> Result<f64, TierError> {
        self.quote(parcel, provider, express, vat_rate)
            .map(|q| q.price)
    }

    pub fn quote(
        &self,
        parcel: &Parcel,
        provider: Provider,
        express: bool,
        vat_rate: f64,
    ) -> Result<Quote, TierError> {
        let tier = self.classify(parcel)?;
        let base_price = self
            .sheet
            .table(provider)
            .price(tier.price_index())
            .ok_or(TierError::Oversized)?;
        let mut price = base_price;
        if express {
            price *= EXPRESS_SURCHARGE;
        }
        price *= 1.0 - vat_rate;
        Ok(Quote {
            provider,
            tier,
            base_price,
            price,
        })
    }
}
