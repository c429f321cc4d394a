//! Fixed limits and numeric constants (internal).
//!
//! Policy
//! - The legal parcel envelope and the tier bounds are carrier rules, not
//!   tuning knobs. They stay constants; only the search resolution is exposed
//!   through `SearchCfg`.

/// Largest admissible length in millimetres.
pub const MAX_LENGTH_MM: u32 = 1200;
/// Largest admissible width in millimetres.
pub const MAX_WIDTH_MM: u32 = 600;
/// Largest admissible height in millimetres.
pub const MAX_HEIGHT_MM: u32 = 600;
/// Largest admissible weight in grams.
pub const MAX_WEIGHT_G: u32 = 31_500;
/// Girth bound shared by tiers 3 and 4.
pub const MAX_GIRTH_MM: u32 = 3000;

/// Multiplier applied to the tier price for express shipping.
pub const EXPRESS_SURCHARGE: f64 = 1.2;

/// Default number of grid steps per rotation axis.
pub const DEFAULT_STEPS: usize = 20;

/// Slack (mm) below which a projected extent is not rounded up to the next
/// millimetre. Absorbs trigonometric noise such as `cos(π/2) ≈ 6e-17`.
pub(crate) const CEIL_EPS: f64 = 1e-6;
