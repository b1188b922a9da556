//! Trend series builder — a bounded recent window of price points.

use crate::domain::{PriceRecord, TrendPoint};
use crate::error::MarketError;

/// Hard upper bound on the series window.
pub const MAX_SERIES_DAYS: usize = 30;

/// Project the most recent `days` distinct dates of `records` into trend
/// points, ascending by date.
///
/// `records` must be sorted ascending by date (the loader contract).
/// Fewer than `days` dates in the source yields a shorter series — partial
/// series are valid. Missing dates are never fabricated. Fails with
/// `InsufficientData` only when zero records exist, and with `Validation`
/// when `days` is outside [1, MAX_SERIES_DAYS].
pub fn build_series(records: &[PriceRecord], days: usize) -> Result<Vec<TrendPoint>, MarketError> {
    if days == 0 || days > MAX_SERIES_DAYS {
        return Err(MarketError::Validation(format!(
            "days must be between 1 and {MAX_SERIES_DAYS}, got {days}"
        )));
    }
    if records.is_empty() {
        return Err(MarketError::InsufficientData);
    }

    let mut points: Vec<TrendPoint> = Vec::with_capacity(days.min(records.len()));
    for record in records.iter().rev() {
        if points.last().is_some_and(|p| p.date == record.date) {
            continue;
        }
        points.push(TrendPoint {
            date: record.date,
            price: record.modal_price,
        });
        if points.len() == days {
            break;
        }
    }
    points.reverse();
    Ok(points)
}
