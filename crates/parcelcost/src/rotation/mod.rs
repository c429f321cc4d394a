//! Rotation search space and bounding-box projection.
//!
//! - `sampler`: `RotationSampler` grid and `RotationSample` points.
//! - `projector`: `BoundingBoxProjector` and the resulting `BoundingBox`.
//!
//! Cross-refs: `optimizer::OrientationOptimizer` drives both.

mod projector;
mod sampler;

pub use projector::{BoundingBox, BoundingBoxProjector};
pub use sampler::{RotationGrid, RotationSample, RotationSampler};

#[cfg(test)]
mod tests;
