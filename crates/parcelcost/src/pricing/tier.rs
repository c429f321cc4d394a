//! Fixed size/weight tiers as a first-match decision list.
//!
//! Order is binding: later rules are supersets of earlier ones along some
//! dimensions, so the first rule a parcel satisfies decides its tier.

use std::fmt;

use crate::cfg::{MAX_GIRTH_MM, MAX_HEIGHT_MM, MAX_LENGTH_MM, MAX_WEIGHT_G, MAX_WIDTH_MM};
use crate::parcel::Parcel;

/// Price tier, `One` being the smallest/lightest class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tier {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Tier {
    /// Position of this tier's price in a `PriceTable`.
    #[inline]
    pub fn price_index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
            Self::Five => 4,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.price_index() + 1)
    }
}

/// Inclusive upper bounds of one tier. `max_girth: None` leaves girth free.
#[derive(Clone, Copy, Debug)]
pub struct TierRule {
    pub tier: Tier,
    pub max_length: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub max_girth: Option<u32>,
    pub max_weight: u32,
}

impl TierRule {
    pub fn admits(&self, p: &Parcel) -> bool {
        p.length() <= self.max_length
            && p.width() <= self.max_width
            && p.height() <= self.max_height
            && self.max_girth.map_or(true, |g| p.girth() <= g)
            && p.weight() <= self.max_weight
    }
}

/// The decision list, evaluated top to bottom.
pub const TIER_RULES: [TierRule; 5] = [
    TierRule {
        tier: Tier::One,
        max_length: 300,
        max_width: 300,
        max_height: 150,
        max_girth: None,
        max_weight: 1000,
    },
    TierRule {
        tier: Tier::Two,
        max_length: 600,
        max_width: 300,
        max_height: 150,
        max_girth: None,
        max_weight: 2000,
    },
    TierRule {
        tier: Tier::Three,
        max_length: MAX_LENGTH_MM,
        max_width: MAX_WIDTH_MM,
        max_height: MAX_HEIGHT_MM,
        max_girth: Some(MAX_GIRTH_MM),
        max_weight: 5000,
    },
    TierRule {
        tier: Tier::Four,
        max_length: MAX_LENGTH_MM,
        max_width: MAX_WIDTH_MM,
        max_height: MAX_HEIGHT_MM,
        max_girth: Some(MAX_GIRTH_MM),
        max_weight: 10_000,
    },
    TierRule {
        tier: Tier::Five,
        max_length: MAX_LENGTH_MM,
        max_width: MAX_WIDTH_MM,
        max_height: MAX_HEIGHT_MM,
        max_girth: None,
        max_weight: MAX_WEIGHT_G,
    },
];

/// First rule admitting `p`, or `None` if the parcel falls between tiers.
pub fn match_tier(p: &Parcel) -> Option<Tier> {
    TIER_RULES.iter().find(|r| r.admits(p)).map(|r| r.tier)
}
