//! Market enrichment: trend, buyer signal, and risk classification.
//!
//! Every classifier here is a total pure function — any input maps to
//! exactly one variant, and sparse data degrades to the documented
//! defaults (Stable / Stable / Moderate) instead of failing.

use crate::domain::{
    BuyerSignal, EnrichedMarket, PriceRange, PriceRecord, RiskLevel, Trend, TrendPoint,
};

/// Half-over-half mean shift (percent) the series must exceed before the
/// trend leaves Stable.
pub const TREND_TOLERANCE_PCT: f64 = 1.0;

/// Records inspected for the buyer-signal proxies.
pub const BUYER_WINDOW: usize = 7;

/// Half-over-half shift (percent) in volume or price dispersion that
/// counts as a demand move.
pub const BUYER_SHIFT_PCT: f64 = 10.0;

/// Coefficient-of-variation cut-offs: below `RISK_LOW_CV` is Low, at or
/// above `RISK_HIGH_CV` is High, Moderate between.
pub const RISK_LOW_CV: f64 = 0.05;
pub const RISK_HIGH_CV: f64 = 0.15;

/// Derive the descriptive market state from the raw record set plus the
/// trend series. Idempotent: identical inputs yield identical output.
pub fn enrich(records: &[PriceRecord], series: &[TrendPoint]) -> EnrichedMarket {
    let (region, commodity) = records
        .first()
        .map(|r| (r.region.clone(), r.commodity.clone()))
        .unwrap_or_default();

    let latest = records.last();
    let average_price = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.modal_price).sum::<f64>() / records.len() as f64
    };

    EnrichedMarket {
        region,
        commodity,
        trend: classify_trend(series),
        buyer_signal: classify_buyer_signal(records),
        risk_level: classify_risk(series),
        latest_price: latest.map_or(0.0, |r| r.modal_price),
        average_price,
        price_range: PriceRange::of(records),
        record_count: records.len(),
        as_of: latest.map(|r| r.date),
    }
}

/// Trend: mean of the first half of the series vs the second half, or
/// first point vs last when the series has three points or fewer.
pub fn classify_trend(series: &[TrendPoint]) -> Trend {
    if series.len() < 2 {
        return Trend::Stable;
    }

    let (baseline, recent) = if series.len() <= 3 {
        (series[0].price, series[series.len() - 1].price)
    } else {
        let mid = series.len() / 2;
        (mean(&series[..mid]), mean(&series[mid..]))
    };
    if baseline == 0.0 {
        return Trend::Stable;
    }

    let shift_pct = (recent - baseline) / baseline * 100.0;
    if shift_pct > TREND_TOLERANCE_PCT {
        Trend::Up
    } else if shift_pct < -TREND_TOLERANCE_PCT {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Buyer signal: an explicit rule set over the last `BUYER_WINDOW` records.
///
/// Two demand proxies are each scored -1/0/+1 by comparing the later half
/// of the window against the earlier half:
/// - mean arrival volume (skipped when the source reports none),
/// - mean daily price dispersion (max - min), widening ranges reading as
///   active bidding.
/// A positive score sum is Strong, negative Weak, zero Stable.
pub fn classify_buyer_signal(records: &[PriceRecord]) -> BuyerSignal {
    let window = &records[records.len().saturating_sub(BUYER_WINDOW)..];
    if window.len() < 2 {
        return BuyerSignal::Stable;
    }
    let mid = window.len() / 2;
    let (earlier, later) = (&window[..mid], &window[mid..]);

    let volume_mean = |half: &[PriceRecord]| {
        let volumes: Vec<f64> = half.iter().filter_map(|r| r.volume).collect();
        if volumes.is_empty() {
            None
        } else {
            Some(volumes.iter().sum::<f64>() / volumes.len() as f64)
        }
    };
    let spread_mean =
        |half: &[PriceRecord]| mean_by(half, |r| r.max_price - r.min_price);

    let score = proxy_score(volume_mean(earlier), volume_mean(later))
        + proxy_score(Some(spread_mean(earlier)), Some(spread_mean(later)));

    match score {
        s if s > 0 => BuyerSignal::Strong,
        s if s < 0 => BuyerSignal::Weak,
        _ => BuyerSignal::Stable,
    }
}

/// Risk: coefficient of variation of series prices. Empty series or a
/// zero mean degrade to Moderate.
pub fn classify_risk(series: &[TrendPoint]) -> RiskLevel {
    if series.is_empty() {
        return RiskLevel::Moderate;
    }
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    if mean == 0.0 {
        return RiskLevel::Moderate;
    }
    let variance =
        prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / prices.len() as f64;
    let cv = variance.sqrt() / mean;

    if cv < RISK_LOW_CV {
        RiskLevel::Low
    } else if cv < RISK_HIGH_CV {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Score one demand proxy: +1 when the later half sits at least
/// `BUYER_SHIFT_PCT` above the earlier, -1 when at least that far below,
/// 0 otherwise or when either half has no data.
fn proxy_score(earlier: Option<f64>, later: Option<f64>) -> i32 {
    let (Some(earlier), Some(later)) = (earlier, later) else {
        return 0;
    };
    if earlier == 0.0 {
        return 0;
    }
    let shift_pct = (later - earlier) / earlier * 100.0;
    if shift_pct >= BUYER_SHIFT_PCT {
        1
    } else if shift_pct <= -BUYER_SHIFT_PCT {
        -1
    } else {
        0
    }
}

fn mean(points: &[TrendPoint]) -> f64 {
    points.iter().map(|p| p.price).sum::<f64>() / points.len() as f64
}

fn mean_by(records: &[PriceRecord], f: impl Fn(&PriceRecord) -> f64) -> f64 {
    records.iter().map(f).sum::<f64>() / records.len() as f64
}
