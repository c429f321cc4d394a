//! Providers, per-provider price tables, and the price record format.
//!
//! Record format (one line, `;`-delimited):
//! `label;d1;d2;d3;d4;d5;Hermes;h1;h2;h3;h4;h5`
//! where `d*`/`h*` are the tier prices for DHL and Hermes in tier order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of tiers, and therefore prices, per provider.
pub const TIER_COUNT: usize = 5;

/// Token separating the DHL block from the Hermes block in a price record.
pub const HERMES_MARKER: &str = "Hermes";

/// Shipping carrier with its own price table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Provider {
    Dhl,
    Hermes,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Dhl, Provider::Hermes];
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dhl => f.write_str("DHL"),
            Self::Hermes => f.write_str("Hermes"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown provider `{0}` (expected `dhl` or `hermes`)")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dhl" => Ok(Self::Dhl),
            "hermes" => Ok(Self::Hermes),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Malformed price data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PriceSheetError {
    #[error("price record is empty")]
    MissingLabel,
    #[error("price record has no `Hermes` separator")]
    MissingHermesMarker,
    #[error("{provider} block has {found} prices, expected 5")]
    WrongTierCount { provider: Provider, found: usize },
    #[error("{provider} price #{index} is invalid: `{raw}`")]
    InvalidPrice {
        provider: Provider,
        index: usize,
        raw: String,
    },
}

/// Ordered tier prices of one provider; index `i` belongs to tier `i + 1`.
///
/// Invariants: every price is finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceTable([f64; TIER_COUNT]);

impl PriceTable {
    pub fn new(provider: Provider, prices: [f64; TIER_COUNT]) -> Result<Self, PriceSheetError> {
        for (index, &p) in prices.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(PriceSheetError::InvalidPrice {
                    provider,
                    index,
                    raw: p.to_string(),
                });
            }
        }
        Ok(Self(prices))
    }

    #[inline]
    pub fn price(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn prices(&self) -> [f64; TIER_COUNT] {
        self.0
    }

    fn parse(provider: Provider, raw: &[&str]) -> Result<Self, PriceSheetError> {
        if raw.len() != TIER_COUNT {
            return Err(PriceSheetError::WrongTierCount {
                provider,
                found: raw.len(),
            });
        }
        let mut prices = [0.0; TIER_COUNT];
        for (index, (slot, field)) in prices.iter_mut().zip(raw).enumerate() {
            *slot = field
                .parse::<f64>()
                .map_err(|_| PriceSheetError::InvalidPrice {
                    provider,
                    index,
                    raw: field.to_string(),
                })?;
        }
        Self::new(provider, prices)
    }
}

/// Price tables for every provider, as delivered by one price record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSheet {
    label: String,
    dhl: PriceTable,
    hermes: PriceTable,
}

impl PriceSheet {
    pub fn new(label: impl Into<String>, dhl: PriceTable, hermes: PriceTable) -> Self {
        Self {
            label: label.into(),
            dhl,
            hermes,
        }
    }

    /// Parse one `;`-delimited record line.
    pub fn parse_record(line: &str) -> Result<Self, PriceSheetError> {
        let fields: Vec<&str> = line.trim().split(';').collect();
        Self::from_fields(&fields)
    }

    /// Build from already-split record fields. Surrounding whitespace and
    /// trailing empty fields (e.g. from a trailing `;`) are ignored.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, PriceSheetError> {
        let mut fields: Vec<&str> = fields.iter().map(|f| f.as_ref().trim()).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        let (label, rest) = fields
            .split_first()
            .ok_or(PriceSheetError::MissingLabel)?;
        let marker = rest
            .iter()
            .position(|f| *f == HERMES_MARKER)
            .ok_or(PriceSheetError::MissingHermesMarker)?;
        let dhl = PriceTable::parse(Provider::Dhl, &rest[..marker])?;
        let hermes = PriceTable::parse(Provider::Hermes, &rest[marker + 1..])?;
        Ok(Self::new(*label, dhl, hermes))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn table(&self, provider: Provider) -> &PriceTable {
        match provider {
            Provider::Dhl => &self.dhl,
            Provider::Hermes => &self.hermes,
        }
    }

    /// Tier prices of `provider` in tier order.
    pub fn prices(&self, provider: Provider) -> [f64; TIER_COUNT] {
        self.table(provider).prices()
    }
}

impl Default for PriceSheet {
    /// Reference rates used when no price record is supplied.
    fn default() -> Self {
        Self {
            label: "reference".to_string(),
            dhl: PriceTable([3.89, 4.39, 5.99, 7.99, 14.99]),
            hermes: PriceTable([4.19, 4.69, 6.39, 9.49, 18.49]),
        }
    }
}
