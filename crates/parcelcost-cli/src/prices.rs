use anyhow::{bail, Context, Result};
use parcelcost::PriceSheet;
use polars::prelude::*;
use std::path::Path;

/// Load the price sheet from a `;`-delimited record file, or fall back to the
/// reference rates when no file is given.
pub fn load_sheet(path: Option<&Path>) -> Result<PriceSheet> {
    let Some(path) = path else {
        tracing::debug!("no price file given; using reference rates");
        return Ok(PriceSheet::default());
    };
    let fields = read_record_fields(path)?;
    let sheet = PriceSheet::from_fields(&fields)
        .with_context(|| format!("parsing price record in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        label = sheet.label(),
        "price_sheet_loaded"
    );
    Ok(sheet)
}

/// First record of the file as raw string fields (no header, all columns
/// read as strings so prices keep their original spelling).
fn read_record_fields(path: &Path) -> Result<Vec<String>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_separator(b';')
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening price file {}", path.display()))?
        .limit(1)
        .collect()
        .with_context(|| format!("reading price file {}", path.display()))?;
    if df.height() == 0 {
        bail!("price file {} has no records", path.display());
    }
    tracing::debug!(cols = df.width(), "price_record_shape");
    let mut fields = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        let value = col.str()?.get(0).unwrap_or_default();
        fields.push(value.to_string());
    }
    Ok(fields)
}
