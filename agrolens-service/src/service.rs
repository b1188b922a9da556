//! MarketService — the operations the HTTP-facing caller composes.
//!
//! `intelligence` runs the dual-path derivation as a rayon fork-join: one
//! task resolves the raw record snapshot, the other builds the trend
//! series and momentum. Neither touches the other's intermediate state;
//! the join is a hard barrier, after which enrichment and synthesis run
//! on the combined results.

use std::sync::Arc;

use agrolens_core::data::{list_available, MandiStore, MarketFilters};
use agrolens_core::domain::{MomentumResult, PriceRecord};
use agrolens_core::present::{paginate, to_chart_series, to_market_summary, MarketSummary, PagedRecords};
use agrolens_core::series::build_series;
use agrolens_core::signals::{compute_momentum, enrich, synthesize};
use agrolens_core::MarketError;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::request::{IntelligenceRequest, RecordsRequest};

pub struct MarketService {
    config: ServiceConfig,
    store: MandiStore,
}

impl MarketService {
    pub fn new(config: ServiceConfig) -> Self {
        let store = MandiStore::new(&config.data_dir);
        Self { config, store }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Full market intelligence: summary card with embedded chart.
    pub fn intelligence(&self, req: &IntelligenceRequest) -> Result<MarketSummary, ServiceError> {
        req.validate()?;

        let (raw, series) = rayon::join(
            || self.store.load_records(&req.region, &req.commodity),
            || self.derive_series(req),
        );
        let raw = raw?;
        let (series, momentum) = series?;

        let enriched = enrich(&raw, &series);
        let recommendation = synthesize(enriched.trend, enriched.buyer_signal, momentum.momentum);

        let mut summary = to_market_summary(&enriched, &momentum, &recommendation);
        summary.chart = to_chart_series(&series);
        Ok(summary)
    }

    /// Paginated normalized records for the data table.
    pub fn records(&self, req: &RecordsRequest) -> Result<PagedRecords, ServiceError> {
        req.validate()?;
        let records = self.store.load_records(&req.region, &req.commodity)?;
        Ok(paginate(&records, req.page, req.page_size))
    }

    /// Filter choices (topology and commodity set) for callers.
    pub fn filters(&self) -> Result<MarketFilters, ServiceError> {
        Ok(MarketFilters::discover(self.store.data_dir())?)
    }

    /// The (region, commodity) pairs that have a source, optionally
    /// narrowed.
    pub fn available_pairs(
        &self,
        region: Option<&str>,
        commodity: Option<&str>,
    ) -> Result<std::collections::BTreeSet<(String, String)>, ServiceError> {
        Ok(list_available(self.store.data_dir(), region, commodity)?)
    }

    /// The trend-series half of the fork: load, window, momentum.
    fn derive_series(
        &self,
        req: &IntelligenceRequest,
    ) -> Result<(Vec<agrolens_core::domain::TrendPoint>, MomentumResult), MarketError> {
        let records: Arc<[PriceRecord]> =
            self.store.load_records(&req.region, &req.commodity)?;
        let series = build_series(&records, req.days)?;
        let momentum = compute_momentum(&series);
        Ok((series, momentum))
    }
}
