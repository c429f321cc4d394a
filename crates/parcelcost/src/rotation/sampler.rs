//! Discrete rotation grid: `S` equally spaced angles per axis.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use crate::cfg::DEFAULT_STEPS;

/// One grid point `(θx, θy, θz)`, each angle `index · 2π/S`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotationSample {
    /// Grid coordinates `(ix, iy, iz)`, each in `0..S`.
    pub index: [usize; 3],
    /// Angles in radians, each in `[0, 2π)`.
    pub angles: [f64; 3],
}

impl RotationSample {
    /// `(0, 0, 0)`; first sample of every grid.
    pub fn identity() -> Self {
        Self {
            index: [0; 3],
            angles: [0.0; 3],
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.index == [0; 3]
    }

    /// Angles in degrees, for display.
    pub fn degrees(&self) -> [f64; 3] {
        self.angles.map(f64::to_degrees)
    }
}

/// Enumerates `S³` samples with `θx` outermost and `θz` innermost.
///
/// The order is the tie-break order of the optimizer; `flat_index` and
/// `sample_at` expose it for sharded searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationSampler {
    steps: usize,
}

impl RotationSampler {
    /// Grid with `steps` angles per axis; at least one (the identity).
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Angular spacing `2π/S`.
    #[inline]
    pub fn step(&self) -> f64 {
        TAU / self.steps as f64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps * self.steps * self.steps
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of grid point `index` in enumeration order.
    #[inline]
    pub fn flat_index(&self, index: [usize; 3]) -> usize {
        (index[0] * self.steps + index[1]) * self.steps + index[2]
    }

    pub fn sample_at(&self, flat: usize) -> Option<RotationSample> {
        if flat >= self.len() {
            return None;
        }
        let s = self.steps;
        let index = [flat / (s * s), (flat / s) % s, flat % s];
        let step = self.step();
        Some(RotationSample {
            index,
            angles: index.map(|i| i as f64 * step),
        })
    }

    /// Fresh pass over the grid; call again to restart.
    pub fn iter(&self) -> RotationGrid {
        RotationGrid {
            sampler: *self,
            next: 0,
        }
    }
}

impl Default for RotationSampler {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl IntoIterator for RotationSampler {
    type Item = RotationSample;
    type IntoIter = RotationGrid;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &RotationSampler {
    type Item = RotationSample;
    type IntoIter = RotationGrid;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over a `RotationSampler` grid.
#[derive(Clone, Debug)]
pub struct RotationGrid {
    sampler: RotationSampler,
    next: usize,
}

impl Iterator for RotationGrid {
    type Item = RotationSample;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.sampler.sample_at(self.next)?;
        self.next += 1;
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.sampler.len().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for RotationGrid {}
impl FusedIterator for RotationGrid {}
