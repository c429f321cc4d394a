//! Timing probe for one orientation search on the production grid.
//!
//! Purpose
//! - Show the full path: price record → engine → direct quote → grid search.
//! - Give a concrete number for "how long do 8000 samples take?", sequential
//!   and sharded.
//!
//! Run: `cargo run --release -p parcelcost --example cheapest_orientation`

use std::time::Instant;

use parcelcost::prelude::*;

fn main() {
    let sheet = PriceSheet::parse_record(
        "Versandkosten;3.89;4.39;5.99;7.99;14.99;Hermes;4.19;4.69;6.39;9.49;18.49",
    )
    .expect("reference record parses");
    let engine = CostTierEngine::new(sheet);
    let parcel = Parcel::new(120, 290, 280, 900).expect("parcel inside envelope");

    for provider in Provider::ALL {
        let direct = engine
            .quote(&parcel, provider, false, 0.0)
            .expect("valid parcel is priced");
        let opt = OrientationOptimizer::new(&engine, provider);

        let t0 = Instant::now();
        let seq = opt.optimize(&parcel).expect("identity is always priced");
        let seq_ms = t0.elapsed().as_secs_f64() * 1e3;

        let t1 = Instant::now();
        let par = opt.optimize_parallel(&parcel).expect("identity is always priced");
        let par_ms = t1.elapsed().as_secs_f64() * 1e3;
        assert_eq!(seq, par, "sharded search must agree with sequential");

        println!(
            "{provider}: direct {:.2} ({}), best {:.2} at {:?}° -> {:?} mm \
             [{} priced, {} rejected] seq {seq_ms:.1} ms, par {par_ms:.1} ms",
            direct.price,
            direct.tier,
            seq.min_cost,
            seq.best_rotation.degrees(),
            seq.best_box.dimensions(),
            seq.evaluated,
            seq.rejected,
        );
    }
}
