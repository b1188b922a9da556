//! PriceRecord — the fundamental mandi data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of mandi prices for a commodity in a region.
///
/// Prices are rupees per quintal, already normalized from whatever column
/// names and number formats the source CSV used. A record is immutable once
/// loaded; identity is (region, commodity, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub region: String,
    pub commodity: String,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
    /// Arrival volume in tonnes, when the source reports it.
    pub volume: Option<f64>,
}

impl PriceRecord {
    /// Basic sanity check: non-negative prices, min <= max, finite values.
    ///
    /// The modal price is allowed to sit outside [min, max] — some mandi
    /// boards report it that way on thin trading days — but it must still
    /// be a finite non-negative number.
    pub fn is_sane(&self) -> bool {
        self.min_price.is_finite()
            && self.max_price.is_finite()
            && self.modal_price.is_finite()
            && self.min_price >= 0.0
            && self.modal_price >= 0.0
            && self.min_price <= self.max_price
            && self.volume.map_or(true, |v| v.is_finite() && v >= 0.0)
    }
}

/// Min/max price range over a record window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Range spanning a set of records, from the lowest `min_price` to the
    /// highest `max_price`. Empty input yields a zero range.
    pub fn of(records: &[PriceRecord]) -> Self {
        if records.is_empty() {
            return Self { min: 0.0, max: 0.0 };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in records {
            min = min.min(r.min_price);
            max = max.max(r.max_price);
        }
        Self { min, max }
    }
}
