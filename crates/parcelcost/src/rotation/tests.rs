use super::*;
use crate::parcel::Parcel;
use std::f64::consts::{FRAC_PI_2, TAU};

fn sample(index: [usize; 3]) -> RotationSample {
    let sampler = RotationSampler::default();
    sampler.sample_at(sampler.flat_index(index)).unwrap()
}

#[test]
fn grid_has_s_cubed_samples_in_canonical_order() {
    let sampler = RotationSampler::new(20);
    assert_eq!(sampler.len(), 8000);
    let all: Vec<_> = sampler.iter().collect();
    assert_eq!(all.len(), 8000);
    assert!(all[0].is_identity());
    assert_eq!(all[1].index, [0, 0, 1]);
    assert_eq!(all[20].index, [0, 1, 0]);
    assert_eq!(all[400].index, [1, 0, 0]);
    assert_eq!(all[7999].index, [19, 19, 19]);
    for (flat, s) in all.iter().enumerate() {
        assert_eq!(sampler.flat_index(s.index), flat);
    }
}

#[test]
fn grid_is_restartable_and_exact_sized() {
    let sampler = RotationSampler::new(3);
    let mut it = sampler.iter();
    assert_eq!(it.len(), 27);
    it.next();
    assert_eq!(it.len(), 26);
    let first_again = sampler.iter().next().unwrap();
    assert!(first_again.is_identity());
    assert_eq!((&sampler).into_iter().count(), 27);
    assert!(sampler.sample_at(27).is_none());
}

#[test]
fn angles_stay_below_full_turn() {
    let sampler = RotationSampler::default();
    assert!((sampler.step() - TAU / 20.0).abs() < 1e-15);
    for s in sampler.iter() {
        assert!(s.angles.iter().all(|&a| (0.0..TAU).contains(&a)));
    }
    let quarter = sample([0, 5, 0]);
    assert!((quarter.angles[1] - FRAC_PI_2).abs() < 1e-12);
    assert!((quarter.degrees()[1] - 90.0).abs() < 1e-9);
}

#[test]
fn zero_steps_degenerates_to_identity_only() {
    let sampler = RotationSampler::new(0);
    let all: Vec<_> = sampler.iter().collect();
    assert_eq!(all, vec![RotationSample::identity()]);
}

#[test]
fn identity_projection_is_exact() {
    let p = Parcel::new(1200, 600, 600, 100).unwrap();
    let bb = BoundingBoxProjector::project_parcel(&p, &RotationSample::identity());
    assert_eq!(bb.dimensions(), [1200, 600, 600]);
    assert_eq!(bb.extents, [1200.0, 600.0, 600.0]);
}

#[test]
fn quarter_turns_permute_axes_without_drift() {
    let p = Parcel::new(100, 300, 250, 100).unwrap();
    // 90° about x swaps width and height.
    let bb = BoundingBoxProjector::project_parcel(&p, &sample([5, 0, 0]));
    assert_eq!(bb.dimensions(), [100, 250, 300]);
    // 90° about y swaps length and height.
    let bb = BoundingBoxProjector::project_parcel(&p, &sample([0, 5, 0]));
    assert_eq!(bb.dimensions(), [250, 300, 100]);
    // 90° about z swaps length and width.
    let bb = BoundingBoxProjector::project_parcel(&p, &sample([0, 0, 5]));
    assert_eq!(bb.dimensions(), [300, 100, 250]);
    // half turn about z keeps the box.
    let bb = BoundingBoxProjector::project_parcel(&p, &sample([0, 0, 10]));
    assert_eq!(bb.dimensions(), [100, 300, 250]);
}

#[test]
fn oblique_rotation_grows_box_to_projected_extent() {
    // 36° about z: x-extent = L cos + W sin, y-extent = L sin + W cos.
    let p = Parcel::new(400, 200, 100, 100).unwrap();
    let s = sample([0, 0, 2]);
    let (sin, cos) = s.angles[2].sin_cos();
    let bb = BoundingBoxProjector::project_parcel(&p, &s);
    let ex = 400.0 * cos + 200.0 * sin;
    let ey = 400.0 * sin + 200.0 * cos;
    assert!((bb.extents[0] - ex).abs() < 1e-9);
    assert!((bb.extents[1] - ey).abs() < 1e-9);
    assert_eq!(bb.length, ex.ceil() as u32);
    assert_eq!(bb.width, ey.ceil() as u32);
    assert_eq!(bb.height, 100);
}

#[test]
fn corners_cover_parallelepiped() {
    let edges = BoundingBoxProjector::edges_of(&Parcel::new(1, 2, 3, 1).unwrap());
    let corners = BoundingBoxProjector::corners(&edges);
    assert_eq!(corners[0], nalgebra::Vector3::zeros());
    assert_eq!(corners[7], nalgebra::Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn rotation_order_is_x_then_y_then_z() {
    // x-edge: Rx leaves it, Ry(90°) maps it to -z, Rz leaves -z alone.
    let edges = BoundingBoxProjector::edges_of(&Parcel::new(10, 1, 1, 1).unwrap());
    let rotated = BoundingBoxProjector::rotate_edges(&edges, &sample([0, 5, 5]));
    assert!((rotated[0] - nalgebra::Vector3::new(0.0, 0.0, -10.0)).norm() < 1e-9);
    // y-edge: Rz(90°) maps it to -x.
    assert!((rotated[1] - nalgebra::Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-9);
}
