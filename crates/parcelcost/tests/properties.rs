//! Property tests over the legal parcel envelope.

use parcelcost::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn parcel_strategy() -> impl Strategy<Value = Parcel> {
    (1u32..=1200, 1u32..=600, 1u32..=600, 1u32..=31_500)
        .prop_map(|(l, w, h, g)| Parcel::new(l, w, h, g).unwrap())
}

fn provider_strategy() -> impl Strategy<Value = Provider> {
    prop_oneof![Just(Provider::Dhl), Just(Provider::Hermes)]
}

proptest! {
    #[test]
    fn calculate_is_pure(
        p in parcel_strategy(),
        provider in provider_strategy(),
        express in any::<bool>(),
        vat in 0.0f64..0.3,
    ) {
        let engine = CostTierEngine::default();
        let a = engine.calculate(&p, provider, express, vat);
        let b = engine.calculate(&p, provider, express, vat);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_valid_parcel_is_priced(p in parcel_strategy(), provider in provider_strategy()) {
        let engine = CostTierEngine::default();
        prop_assert!(engine.calculate(&p, provider, false, 0.0).is_ok());
    }

    #[test]
    fn price_never_drops_with_length(
        (l1, l2) in (1u32..=1200, 1u32..=1200).prop_map(|(a, b)| (a.min(b), a.max(b))),
        w in 1u32..=600,
        h in 1u32..=600,
        g in 1u32..=31_500,
        provider in provider_strategy(),
    ) {
        let engine = CostTierEngine::default();
        let short = Parcel::new(l1, w, h, g).unwrap();
        let long = Parcel::new(l2, w, h, g).unwrap();
        let c1 = engine.calculate(&short, provider, false, 0.0).unwrap();
        let c2 = engine.calculate(&long, provider, false, 0.0).unwrap();
        prop_assert!(c1 <= c2);
    }

    #[test]
    fn identity_projection_round_trips(p in parcel_strategy()) {
        let bb = BoundingBoxProjector::project_parcel(&p, &RotationSample::identity());
        prop_assert_eq!(bb.dimensions(), p.dimensions());
    }

    #[test]
    fn rotated_box_never_undercuts_shortest_edge(p in parcel_strategy(), flat in 0usize..8000) {
        let sampler = RotationSampler::default();
        let s = sampler.sample_at(flat).unwrap();
        let bb = BoundingBoxProjector::project_parcel(&p, &s);
        let min_edge = p.dimensions().into_iter().min().unwrap();
        prop_assert!(bb.dimensions().into_iter().all(|d| d + 1 >= min_edge));
    }
}

proptest! {
    // Each case runs the full 8000-sample grid.
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn optimizer_never_worse_than_direct(p in parcel_strategy(), provider in provider_strategy()) {
        let engine = CostTierEngine::default();
        let direct = engine.calculate(&p, provider, false, 0.0).unwrap();
        let res = OrientationOptimizer::new(&engine, provider).optimize(&p).unwrap();
        prop_assert!(res.min_cost <= direct);
    }
}

#[test]
fn boundary_parcels_seeded_sweep() {
    // Parcels at and just past the tier-1 corner, perturbed one axis at a time.
    let engine = CostTierEngine::default();
    let t1 = engine.sheet().prices(Provider::Dhl)[0];
    let t2 = engine.sheet().prices(Provider::Dhl)[1];
    let at_corner = Parcel::new(300, 300, 150, 1000).unwrap();
    assert_eq!(engine.calculate(&at_corner, Provider::Dhl, false, 0.0), Ok(t1));
    let heavier = Parcel::new(300, 300, 150, 1001).unwrap();
    assert_eq!(engine.calculate(&heavier, Provider::Dhl, false, 0.0), Ok(t2));

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let l = rng.gen_range(1..=300);
        let w = rng.gen_range(1..=300);
        let h = rng.gen_range(1..=150);
        let g = rng.gen_range(1..=1000);
        let p = Parcel::new(l, w, h, g).unwrap();
        assert_eq!(engine.classify(&p), Ok(Tier::One));
    }
}

#[test]
fn out_of_envelope_parcels_fail_validation() {
    assert!(matches!(
        Parcel::new(1300, 700, 700, 10_000),
        Err(ValidationError::ExceedsLimit { .. })
    ));
    assert!(matches!(
        Parcel::new(1200, 600, 600, 32_000),
        Err(ValidationError::ExceedsLimit { field: "weight", .. })
    ));
}

#[test]
fn optimize_parallel_is_deterministic() {
    let engine = CostTierEngine::default();
    let p = Parcel::new(580, 120, 290, 1500).unwrap();
    let opt = OrientationOptimizer::new(&engine, Provider::Hermes);
    let seq = opt.optimize(&p).unwrap();
    for _ in 0..3 {
        assert_eq!(opt.optimize_parallel(&p).unwrap(), seq);
    }
}
