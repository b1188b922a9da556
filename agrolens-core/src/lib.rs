//! Agrolens Core — mandi price records, trend series, signals, and the
//! recommendation decision table.
//!
//! This crate contains the heart of the market intelligence pipeline:
//! - Domain types (price records, trend points, signal enums)
//! - CSV record store with normalization and a snapshot cache
//! - Bounded trend series builder
//! - Momentum, trend, buyer-signal, and risk classifiers
//! - The 27-row recommendation decision table
//! - Presentation mappers (summary card, chart series, pagination)
//! - Deterministic synthetic data for demos and tests

pub mod data;
pub mod domain;
pub mod error;
pub mod present;
pub mod sample;
pub mod series;
pub mod signals;

pub use error::MarketError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything the service layer shares across its
    /// fork-join tasks is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::PriceRecord>();
        require_sync::<domain::PriceRecord>();
        require_send::<domain::TrendPoint>();
        require_sync::<domain::TrendPoint>();
        require_send::<domain::MomentumResult>();
        require_sync::<domain::MomentumResult>();
        require_send::<domain::EnrichedMarket>();
        require_sync::<domain::EnrichedMarket>();
        require_send::<domain::Recommendation>();
        require_sync::<domain::Recommendation>();

        // Store and snapshots cross the join boundary
        require_send::<data::MandiStore>();
        require_sync::<data::MandiStore>();
        require_send::<data::Snapshot>();
        require_sync::<data::Snapshot>();

        // Output shapes
        require_send::<present::MarketSummary>();
        require_sync::<present::MarketSummary>();
        require_send::<present::PagedRecords>();
        require_sync::<present::PagedRecords>();

        // Errors travel out of worker closures
        require_send::<error::MarketError>();
        require_sync::<error::MarketError>();
    }
}
