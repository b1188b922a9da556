//! Presentation mappers: enriched state → stable output shapes.
//!
//! These are the shapes the HTTP-facing caller serializes verbatim. Every
//! field a consumer relies on is always present — absent values serialize
//! as defined defaults (zero, null, empty list), never as a missing key.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Action, BuyerSignal, EnrichedMarket, MomentumResult, PriceRange, PriceRecord, Recommendation,
    RiskLevel, Trend, TrendPoint,
};

/// One plotting-ready chart point; `x` is the ISO-8601 date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

/// Map a trend series to chart points. Empty in, empty out — never an
/// error.
pub fn to_chart_series(series: &[TrendPoint]) -> Vec<ChartPoint> {
    series
        .iter()
        .map(|p| ChartPoint {
            x: p.date.format("%Y-%m-%d").to_string(),
            y: p.price,
        })
        .collect()
}

/// The summary card: enrichment + momentum + recommendation in one flat
/// response shape, with the chart embedded by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub region: String,
    pub commodity: String,
    pub latest_price: f64,
    pub average_price: f64,
    pub price_range: PriceRange,
    pub record_count: usize,
    /// ISO date of the newest record; null when the source had zero rows.
    pub as_of: Option<chrono::NaiveDate>,
    pub trend: Trend,
    pub buyer_signal: BuyerSignal,
    pub risk_level: RiskLevel,
    pub momentum: MomentumResult,
    pub action: Action,
    pub confidence: u8,
    pub reason: String,
    pub chart: Vec<ChartPoint>,
}

/// Flatten enrichment, momentum, and the recommendation into the summary
/// card. The chart starts empty; the orchestrator fills it.
pub fn to_market_summary(
    enriched: &EnrichedMarket,
    momentum: &MomentumResult,
    recommendation: &Recommendation,
) -> MarketSummary {
    MarketSummary {
        region: enriched.region.clone(),
        commodity: enriched.commodity.clone(),
        latest_price: enriched.latest_price,
        average_price: enriched.average_price,
        price_range: enriched.price_range,
        record_count: enriched.record_count,
        as_of: enriched.as_of,
        trend: enriched.trend,
        buyer_signal: enriched.buyer_signal,
        risk_level: enriched.risk_level,
        momentum: momentum.clone(),
        action: recommendation.action,
        confidence: recommendation.confidence,
        reason: recommendation.reason.clone(),
        chart: Vec::new(),
    }
}

/// One page of normalized records plus paging totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedRecords {
    pub records: Vec<PriceRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
}

/// Slice a record set for one page. `page` is 1-based; a page beyond the
/// end returns an empty slice with the true totals, not an error.
pub fn paginate(records: &[PriceRecord], page: usize, page_size: usize) -> PagedRecords {
    let total_records = records.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        (total_records + page_size - 1) / page_size
    };
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = if start >= total_records {
        &[]
    } else {
        &records[start..(start + page_size).min(total_records)]
    };

    PagedRecords {
        records: slice.to_vec(),
        page,
        page_size,
        total_records,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Momentum;
    use chrono::NaiveDate;

    fn record(day: u32) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            region: "Kerala_Kottayam".into(),
            commodity: "Banana".into(),
            min_price: 2400.0,
            max_price: 2800.0,
            modal_price: 2600.0,
            volume: None,
        }
    }

    fn records(n: usize) -> Vec<PriceRecord> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let mut r = record(1);
                r.date = base + chrono::Duration::days(i as i64);
                r
            })
            .collect()
    }

    #[test]
    fn chart_series_maps_points() {
        let series = vec![
            TrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                price: 2600.0,
            },
            TrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
                price: 2650.0,
            },
        ];
        let chart = to_chart_series(&series);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].x, "2024-06-03");
        assert_eq!(chart[1].y, 2650.0);
    }

    #[test]
    fn chart_series_of_empty_is_empty() {
        assert!(to_chart_series(&[]).is_empty());
    }

    #[test]
    fn summary_keeps_every_consumer_field() {
        let enriched = crate::signals::enrich(&[record(3)], &[]);
        let momentum = MomentumResult::neutral(0);
        let rec = Recommendation::new(Action::Hold, 70, "stable prices with no directional signal");
        let summary = to_market_summary(&enriched, &momentum, &rec);

        let json = serde_json::to_value(&summary).unwrap();
        for key in [
            "region",
            "commodity",
            "latest_price",
            "average_price",
            "price_range",
            "record_count",
            "as_of",
            "trend",
            "buyer_signal",
            "risk_level",
            "momentum",
            "action",
            "confidence",
            "reason",
            "chart",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["action"], "HOLD");
        assert_eq!(json["momentum"]["momentum"], "neutral");
    }

    #[test]
    fn summary_of_empty_market_serializes_defaults_not_missing_keys() {
        let enriched = crate::signals::enrich(&[], &[]);
        let rec = crate::signals::synthesize(
            enriched.trend,
            enriched.buyer_signal,
            Momentum::Neutral,
        );
        let summary = to_market_summary(&enriched, &MomentumResult::neutral(0), &rec);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["as_of"], serde_json::Value::Null);
        assert_eq!(json["latest_price"], 0.0);
        assert_eq!(json["chart"], serde_json::json!([]));
    }

    #[test]
    fn pagination_slices_and_totals() {
        let all = records(105);
        let page3 = paginate(&all, 3, 50);
        assert_eq!(page3.records.len(), 5);
        assert_eq!(page3.total_records, 105);
        assert_eq!(page3.total_pages, 3);

        let page4 = paginate(&all, 4, 50);
        assert!(page4.records.is_empty());
        assert_eq!(page4.total_pages, 3);
    }

    #[test]
    fn pagination_of_empty_set() {
        let page = paginate(&[], 1, 50);
        assert!(page.records.is_empty());
        assert_eq!(page.total_records, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn pagination_first_page() {
        let all = records(12);
        let page = paginate(&all, 1, 10);
        assert_eq!(page.records.len(), 10);
        assert_eq!(page.records[0].date, all[0].date);
        assert_eq!(page.total_pages, 2);
    }
}
