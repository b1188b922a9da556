//! TrendPoint — one point of the bounded price trend series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A (date, price) point projected from `PriceRecord::modal_price`.
///
/// Series are ordered ascending by date with all dates distinct; missing
/// dates are never fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serialization_roundtrip() {
        let p = TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            price: 2600.0,
        };
        let json = serde_json::to_string(&p).unwrap();
        let deser: TrendPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deser);
    }
}
