//! Domain types: price records, trend points, signal enums, derived shapes.

pub mod record;
pub mod series;
pub mod signals;

pub use record::{PriceRange, PriceRecord};
pub use series::TrendPoint;
pub use signals::{
    Action, BuyerSignal, EnrichedMarket, Momentum, MomentumResult, Recommendation, RiskLevel,
    Trend,
};
