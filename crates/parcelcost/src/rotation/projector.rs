//! Axis-aligned bounding box of a rotated parcel.
//!
//! Steps
//! - rotate the three edge vectors by `Rx(θx)`, then `Ry(θy)`, then `Rz(θz)`;
//! - enumerate the 8 corners of the spanned parallelepiped;
//! - shift every axis by its most negative coordinate so all corners are `≥ 0`;
//! - per-axis maxima, rounded up to whole millimetres.

use nalgebra::{Rotation3, Vector3};

use super::sampler::RotationSample;
use crate::cfg::CEIL_EPS;
use crate::parcel::Parcel;

/// Bounding box dimensions in whole millimetres plus the raw extents.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    /// Un-rounded per-axis maxima after the shift.
    pub extents: [f64; 3],
}

impl BoundingBox {
    #[inline]
    pub fn dimensions(&self) -> [u32; 3] {
        [self.length, self.width, self.height]
    }
}

pub struct BoundingBoxProjector;

impl BoundingBoxProjector {
    /// `(L,0,0)`, `(0,W,0)`, `(0,0,H)`.
    pub fn edges_of(parcel: &Parcel) -> [Vector3<f64>; 3] {
        [
            Vector3::new(f64::from(parcel.length()), 0.0, 0.0),
            Vector3::new(0.0, f64::from(parcel.width()), 0.0),
            Vector3::new(0.0, 0.0, f64::from(parcel.height())),
        ]
    }

    /// Apply `Rx`, `Ry`, `Rz` in that order to each edge.
    pub fn rotate_edges(edges: &[Vector3<f64>; 3], rotation: &RotationSample) -> [Vector3<f64>; 3] {
        let [ax, ay, az] = rotation.angles;
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), ax);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), ay);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), az);
        let edges = *edges;
        edges.map(|e| rz * (ry * (rx * e)))
    }

    /// Origin, the three edges, their pairwise sums, and the triple sum.
    pub fn corners(edges: &[Vector3<f64>; 3]) -> [Vector3<f64>; 8] {
        let [a, b, c] = *edges;
        [
            Vector3::zeros(),
            a,
            b,
            c,
            a + b,
            a + c,
            b + c,
            a + b + c,
        ]
    }

    pub fn project(edges: &[Vector3<f64>; 3], rotation: &RotationSample) -> BoundingBox {
        let rotated = Self::rotate_edges(edges, rotation);
        let mut corners = Self::corners(&rotated);

        // The origin is a corner, so the per-axis minimum is never positive.
        let lo = corners
            .iter()
            .fold(Vector3::zeros(), |acc: Vector3<f64>, p| acc.inf(p));
        let shift = -lo;
        for p in corners.iter_mut() {
            *p += shift;
        }
        let hi = corners
            .iter()
            .fold(Vector3::zeros(), |acc: Vector3<f64>, p| acc.sup(p));

        BoundingBox {
            length: ceil_mm(hi.x),
            width: ceil_mm(hi.y),
            height: ceil_mm(hi.z),
            extents: [hi.x, hi.y, hi.z],
        }
    }

    /// Convenience: edges of `parcel` projected under `rotation`.
    pub fn project_parcel(parcel: &Parcel, rotation: &RotationSample) -> BoundingBox {
        Self::project(&Self::edges_of(parcel), rotation)
    }
}

/// Round up to whole millimetres; overshoot below `CEIL_EPS` is noise.
fn ceil_mm(x: f64) -> u32 {
    let v = (x - CEIL_EPS).ceil();
    if v <= 0.0 {
        0
    } else {
        v as u32
    }
}
