//! Derived signals: momentum, market enrichment, trade recommendation.

pub mod enrich;
pub mod momentum;
pub mod recommend;

pub use enrich::enrich;
pub use momentum::{compute_momentum, MOMENTUM_THRESHOLD_PCT};
pub use recommend::synthesize;
