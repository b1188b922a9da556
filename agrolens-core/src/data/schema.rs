//! Column normalization for heterogeneous mandi CSV exports.
//!
//! Different state boards export the same data under different headers
//! ("Modal Price", "modal_price", "Modal_x0020_Price", ...) and number
//! formats ("2,600"). This module maps whatever headers a file carries
//! onto the fixed PriceRecord shape.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::MarketError;

/// Accepted aliases per canonical column, compared after `canonical_name`
/// folding (lowercase, alphanumeric only).
const DATE_ALIASES: &[&str] = &["date", "pricedate", "arrivaldate", "reporteddate"];
const COMMODITY_ALIASES: &[&str] = &["commodity", "commodityname", "crop", "item"];
const MIN_ALIASES: &[&str] = &["minprice", "minimumprice", "min", "minx0020price"];
const MAX_ALIASES: &[&str] = &["maxprice", "maximumprice", "max", "maxx0020price"];
const MODAL_ALIASES: &[&str] = &["modalprice", "modal", "modalx0020price", "price"];
const VOLUME_ALIASES: &[&str] = &["volume", "arrivals", "arrivalstonnes", "quantity", "arrivalqty"];

/// Resolved column indices for one source file.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    pub date: usize,
    pub commodity: usize,
    pub min_price: usize,
    pub max_price: usize,
    pub modal_price: usize,
    /// Volume is optional in the wild.
    pub volume: Option<usize>,
}

impl HeaderMap {
    /// Resolve a header row into column indices.
    ///
    /// Fails when any required column (date, commodity, min, max, modal)
    /// has no recognized alias.
    pub fn resolve(headers: &StringRecord) -> Result<Self, MarketError> {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.contains(&canonical_name(h).as_str()))
        };
        let require = |name: &str, aliases: &[&str]| {
            find(aliases).ok_or_else(|| {
                MarketError::Validation(format!("source is missing a '{name}' column"))
            })
        };

        Ok(Self {
            date: require("date", DATE_ALIASES)?,
            commodity: require("commodity", COMMODITY_ALIASES)?,
            min_price: require("min price", MIN_ALIASES)?,
            max_price: require("max price", MAX_ALIASES)?,
            modal_price: require("modal price", MODAL_ALIASES)?,
            volume: find(VOLUME_ALIASES),
        })
    }
}

/// Fold a header or commodity name to its canonical comparison form:
/// lowercase, alphanumerics only.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Parse a price cell: trims whitespace and thousands separators.
pub fn parse_price(cell: &str) -> Option<f64> {
    let cleaned: String = cell.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a date cell. Accepts ISO (`2024-06-03`) and the day-first forms
/// (`03/06/2024`, `03-06-2024`) used by state board exports.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let s = cell.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%d-%m-%Y"))
        .ok()
}
