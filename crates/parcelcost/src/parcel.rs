//! The parcel value type and its construction-time validation.
//!
//! A `Parcel` that exists is always inside the legal envelope
//! (`L ≤ 1200`, `W ≤ 600`, `H ≤ 600` mm, `weight ≤ 31500` g, all positive).
//! Fields are private so the invariant cannot be bypassed after construction.

use thiserror::Error;

use crate::cfg::{MAX_HEIGHT_MM, MAX_LENGTH_MM, MAX_WEIGHT_G, MAX_WIDTH_MM};

/// Rejected parcel construction.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be greater than 0")]
    NonPositive { field: &'static str },
    #[error("{field} of {value} exceeds the limit of {limit}")]
    ExceedsLimit {
        field: &'static str,
        value: u32,
        limit: u32,
    },
}

/// Rectangular parcel: dimensions in millimetres, weight in grams.
///
/// Invariants:
/// - every field is `> 0`;
/// - `length ≤ 1200`, `width ≤ 600`, `height ≤ 600`, `weight ≤ 31500`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parcel {
    length: u32,
    width: u32,
    height: u32,
    weight: u32,
}

impl Parcel {
    pub fn new(length: u32, width: u32, height: u32, weight: u32) -> Result<Self, ValidationError> {
        check("length", length, MAX_LENGTH_MM)?;
        check("width", width, MAX_WIDTH_MM)?;
        check("height", height, MAX_HEIGHT_MM)?;
        check("weight", weight, MAX_WEIGHT_G)?;
        Ok(Self {
            length,
            width,
            height,
            weight,
        })
    }

    /// Same weight, new `[length, width, height]`; re-validated.
    pub fn with_dimensions(&self, dims: [u32; 3]) -> Result<Self, ValidationError> {
        Self::new(dims[0], dims[1], dims[2], self.weight)
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[inline]
    pub fn dimensions(&self) -> [u32; 3] {
        [self.length, self.width, self.height]
    }

    /// `length + 2·width + 2·height`. Cannot overflow within the envelope.
    #[inline]
    pub fn girth(&self) -> u32 {
        self.length + 2 * self.width + 2 * self.height
    }
}

fn check(field: &'static str, value: u32, limit: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NonPositive { field });
    }
    if value > limit {
        return Err(ValidationError::ExceedsLimit {
            field,
            value,
            limit,
        });
    }
    Ok(())
}
