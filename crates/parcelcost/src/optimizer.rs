//! Orientation optimizer: grid search over rotations for the cheapest tier.
//!
//! Every `RotationSample` of the grid is projected to a candidate bounding
//! box, turned into a candidate `Parcel` with the original weight, and priced
//! with `express = false`, `vat = 0`. Candidates that leave the legal envelope
//! or match no tier are skipped.
//!
//! Tie-break: the minimum is taken over `(cost, flat grid index)`, i.e. the
//! first sample in canonical `(θx, θy, θz)` order wins among equal costs. The
//! sequential and the rayon-sharded search share this rule and therefore
//! return identical results.
//!
//! Because the identity rotation is always sampled and reproduces the original
//! box, `optimize(p).min_cost <= calculate(p, provider, false, 0.0)`.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::cfg::DEFAULT_STEPS;
use crate::engine::{CostTierEngine, TierError};
use crate::parcel::Parcel;
use crate::pricing::Provider;
use crate::rotation::{BoundingBox, BoundingBoxProjector, RotationSample, RotationSampler};

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Grid steps per rotation axis (`S`); the grid has `S³` samples.
    pub steps: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

/// Outcome of one optimization run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizationResult {
    pub best_rotation: RotationSample,
    pub best_box: BoundingBox,
    pub min_cost: f64,
    /// Samples that produced a priced candidate.
    pub evaluated: usize,
    /// Samples whose box left the envelope or matched no tier.
    pub rejected: usize,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    flat: usize,
    cost: f64,
    rotation: RotationSample,
    bbox: BoundingBox,
}

impl Candidate {
    #[inline]
    fn beats(&self, other: &Candidate) -> bool {
        self.cost < other.cost || (self.cost == other.cost && self.flat < other.flat)
    }
}

/// Running minimum plus counters; mergeable across shards.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    best: Option<Candidate>,
    evaluated: usize,
    rejected: usize,
}

impl Tally {
    fn offer(mut self, candidate: Option<Candidate>) -> Self {
        match candidate {
            Some(c) => {
                self.evaluated += 1;
                if self.best.map_or(true, |b| c.beats(&b)) {
                    self.best = Some(c);
                }
            }
            None => self.rejected += 1,
        }
        self
    }

    fn merge(self, other: Tally) -> Self {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(if b.beats(&a) { b } else { a }),
            (a, b) => a.or(b),
        };
        Self {
            best,
            evaluated: self.evaluated + other.evaluated,
            rejected: self.rejected + other.rejected,
        }
    }

    fn finish(self) -> Result<OptimizationResult, TierError> {
        let best = self.best.ok_or(TierError::Oversized)?;
        Ok(OptimizationResult {
            best_rotation: best.rotation,
            best_box: best.bbox,
            min_cost: best.cost,
            evaluated: self.evaluated,
            rejected: self.rejected,
        })
    }
}

/// Drives `RotationSampler` × `BoundingBoxProjector` × `CostTierEngine`.
#[derive(Clone, Copy, Debug)]
pub struct OrientationOptimizer<'a> {
    engine: &'a CostTierEngine,
    provider: Provider,
    sampler: RotationSampler,
}

impl<'a> OrientationOptimizer<'a> {
    pub fn new(engine: &'a CostTierEngine, provider: Provider) -> Self {
        Self::with_cfg(engine, provider, SearchCfg::default())
    }

    pub fn with_cfg(engine: &'a CostTierEngine, provider: Provider, cfg: SearchCfg) -> Self {
        Self {
            engine,
            provider,
            sampler: RotationSampler::new(cfg.steps),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn sampler(&self) -> &RotationSampler {
        &self.sampler
    }

    /// Price of `parcel` turned by `rotation`, with its bounding box;
    /// `None` if the rotated box cannot be priced.
    pub fn evaluate(
        &self,
        parcel: &Parcel,
        rotation: &RotationSample,
    ) -> Option<(f64, BoundingBox)> {
        self.evaluate_edges(parcel, &BoundingBoxProjector::edges_of(parcel), rotation)
    }

    fn evaluate_edges(
        &self,
        parcel: &Parcel,
        edges: &[Vector3<f64>; 3],
        rotation: &RotationSample,
    ) -> Option<(f64, BoundingBox)> {
        let bbox = BoundingBoxProjector::project(edges, rotation);
        let candidate = parcel.with_dimensions(bbox.dimensions()).ok()?;
        let cost = self
            .engine
            .calculate(&candidate, self.provider, false, 0.0)
            .ok()?;
        Some((cost, bbox))
    }

    fn candidate(
        &self,
        parcel: &Parcel,
        edges: &[Vector3<f64>; 3],
        flat: usize,
        rotation: RotationSample,
    ) -> Option<Candidate> {
        self.evaluate_edges(parcel, edges, &rotation)
            .map(|(cost, bbox)| Candidate {
                flat,
                cost,
                rotation,
                bbox,
            })
    }

    /// Sequential search over the full grid.
    pub fn optimize(&self, parcel: &Parcel) -> Result<OptimizationResult, TierError> {
        let edges = BoundingBoxProjector::edges_of(parcel);
        self.sampler
            .iter()
            .enumerate()
            .fold(Tally::default(), |tally, (flat, rotation)| {
                tally.offer(self.candidate(parcel, &edges, flat, rotation))
            })
            .finish()
    }

    /// Same result as [`optimize`](Self::optimize), with the grid sharded
    /// across the rayon thread pool.
    pub fn optimize_parallel(&self, parcel: &Parcel) -> Result<OptimizationResult, TierError> {
        let edges = BoundingBoxProjector::edges_of(parcel);
        let sampler = self.sampler;
        (0..sampler.len())
            .into_par_iter()
            .fold(Tally::default, |tally, flat| {
                let candidate = sampler
                    .sample_at(flat)
                    .and_then(|rotation| self.candidate(parcel, &edges, flat, rotation));
                tally.offer(candidate)
            })
            .reduce(Tally::default, Tally::merge)
            .finish()
    }
}
