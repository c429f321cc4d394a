use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use parcelcost::cfg::DEFAULT_STEPS;
use parcelcost::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod prices;

#[derive(Parser)]
#[command(name = "parcelcost")]
#[command(about = "Shipping cost quotes and orientation search for parcels")]
struct Cmd {
    /// Price record file (`label;5 DHL prices;Hermes;5 Hermes prices`); reference rates if omitted
    #[arg(long, global = true)]
    prices: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct ParcelArgs {
    /// Length in millimetres
    #[arg(long)]
    length: u32,
    /// Width in millimetres
    #[arg(long)]
    width: u32,
    /// Height in millimetres
    #[arg(long)]
    height: u32,
    /// Weight in grams
    #[arg(long)]
    weight: u32,
}

impl ParcelArgs {
    fn parcel(&self) -> Result<Parcel> {
        Ok(Parcel::new(
            self.length,
            self.width,
            self.height,
            self.weight,
        )?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VatArg {
    /// No VAT deduction
    None,
    /// Deduct 7 %
    Reduced,
    /// Deduct 19 %
    Standard,
}

impl From<VatArg> for VatRate {
    fn from(v: VatArg) -> Self {
        match v {
            VatArg::None => VatRate::None,
            VatArg::Reduced => VatRate::Reduced,
            VatArg::Standard => VatRate::Standard,
        }
    }
}

#[derive(Serialize)]
struct QuoteReport {
    parcel: Parcel,
    girth: u32,
    express: bool,
    vat: VatRate,
    quote: Quote,
}

#[derive(Serialize)]
struct OptimizeReport {
    parcel: Parcel,
    provider: Provider,
    direct_cost: f64,
    savings: f64,
    best_rotation_deg: [f64; 3],
    result: OptimizationResult,
}

#[derive(Subcommand)]
enum Action {
    /// Price a parcel as given
    Quote {
        #[command(flatten)]
        parcel: ParcelArgs,
        #[arg(long, default_value = "dhl")]
        provider: Provider,
        /// Express shipping (+20 %)
        #[arg(long)]
        express: bool,
        #[arg(long, value_enum, default_value_t = VatArg::None)]
        vat: VatArg,
    },
    /// Search rotations for the cheapest bounding box
    Optimize {
        #[command(flatten)]
        parcel: ParcelArgs,
        #[arg(long, default_value = "dhl")]
        provider: Provider,
        /// Grid steps per rotation axis
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
        /// Shard the grid across all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Print the loaded price sheet
    Prices,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let engine = CostTierEngine::new(prices::load_sheet(cmd.prices.as_deref())?);
    let report = match cmd.action {
        Action::Quote {
            parcel,
            provider,
            express,
            vat,
        } => quote(&engine, parcel, provider, express, vat.into())?,
        Action::Optimize {
            parcel,
            provider,
            steps,
            parallel,
        } => optimize(&engine, parcel, provider, SearchCfg { steps }, parallel)?,
        Action::Prices => serde_json::to_value(engine.sheet())?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn quote(
    engine: &CostTierEngine,
    args: ParcelArgs,
    provider: Provider,
    express: bool,
    vat: VatRate,
) -> Result<Value> {
    let parcel = args.parcel()?;
    let q = engine.quote(&parcel, provider, express, vat.fraction())?;
    tracing::info!(
        provider = %provider,
        tier = %q.tier,
        price = q.price,
        "quote"
    );
    Ok(serde_json::to_value(QuoteReport {
        parcel,
        girth: parcel.girth(),
        express,
        vat,
        quote: q,
    })?)
}

fn optimize(
    engine: &CostTierEngine,
    args: ParcelArgs,
    provider: Provider,
    cfg: SearchCfg,
    parallel: bool,
) -> Result<Value> {
    let parcel = args.parcel()?;
    let direct = engine.calculate(&parcel, provider, false, 0.0)?;
    let optimizer = OrientationOptimizer::with_cfg(engine, provider, cfg);
    tracing::info!(
        provider = %provider,
        samples = optimizer.sampler().len(),
        parallel,
        "optimize"
    );
    let res = if parallel {
        optimizer.optimize_parallel(&parcel)?
    } else {
        optimizer.optimize(&parcel)?
    };
    tracing::info!(
        min_cost = res.min_cost,
        direct,
        rotation_deg = ?res.best_rotation.degrees(),
        evaluated = res.evaluated,
        rejected = res.rejected,
        "best_rotation"
    );
    Ok(serde_json::to_value(OptimizeReport {
        parcel,
        provider,
        direct_cost: direct,
        savings: direct - res.min_cost,
        best_rotation_deg: res.best_rotation.degrees(),
        result: res,
    })?)
}
