//! Deterministic synthetic mandi data for demos and tests.
//!
//! The generator is seeded from the (region, commodity) pair, so the same
//! pair always produces the same records. Synthetic data is a development
//! convenience only — callers should make clear when a data directory was
//! seeded rather than sourced.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use crate::domain::PriceRecord;
use crate::error::MarketError;

/// Generate `days` consecutive daily records for a (region, commodity)
/// pair, ending the random walk wherever it lands.
///
/// Prices follow a bounded random walk around a commodity-specific base;
/// min/max brackets and arrival volumes are drawn per day. Deterministic:
/// the RNG is seeded with BLAKE3 of `region|commodity`.
pub fn generate_records(
    region: &str,
    commodity: &str,
    start: NaiveDate,
    days: usize,
) -> Vec<PriceRecord> {
    let seed = *blake3::hash(format!("{region}|{commodity}").as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    // Base price in rupees per quintal, itself seeded per pair.
    let mut modal = rng.gen_range(1500.0..9000.0_f64);

    (0..days)
        .map(|i| {
            let drift: f64 = rng.gen_range(-0.03..0.035);
            modal = (modal * (1.0 + drift)).max(100.0);
            let spread = modal * rng.gen_range(0.04..0.12);
            PriceRecord {
                date: start + chrono::Duration::days(i as i64),
                region: region.to_string(),
                commodity: commodity.to_string(),
                min_price: modal - spread / 2.0,
                max_price: modal + spread / 2.0,
                modal_price: modal,
                volume: Some(rng.gen_range(2.0..60.0)),
            }
        })
        .collect()
}

/// Write records as a region CSV with the canonical header row.
///
/// Always truncates; seed one region file per call with every commodity
/// it should carry.
pub fn write_region_csv(path: &Path, records: &[PriceRecord]) -> Result<(), MarketError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "commodity", "min_price", "max_price", "modal_price", "volume"])?;
    for r in records {
        writer.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.commodity.clone(),
            format!("{:.2}", r.min_price),
            format!("{:.2}", r.max_price),
            format!("{:.2}", r.modal_price),
            r.volume.map_or(String::new(), |v| format!("{v:.2}")),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
