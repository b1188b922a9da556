//! Agrolens Service — request orchestration over `agrolens-core`.
//!
//! This crate builds on the core pipeline to provide:
//! - Fail-fast request validation (days, page, page_size bounds)
//! - The fork-join market intelligence operation
//! - Paginated record listing
//! - Filter discovery exposure
//! - Farmer-profile defaults and the dashboard composition
//! - State geocoding for climate/satellite callers
//! - TOML-backed configuration

pub mod config;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod profile;
pub mod request;
pub mod service;

pub use config::ServiceConfig;
pub use dashboard::{Dashboard, FarmerHeader};
pub use error::ServiceError;
pub use geo::resolve_coordinates;
pub use profile::{FarmerProfile, InMemoryProfileDirectory, ProfileDirectory};
pub use request::{IntelligenceRequest, RecordsRequest, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
pub use service::MarketService;

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn service_is_shareable_across_request_handlers() {
        assert_send::<MarketService>();
        assert_sync::<MarketService>();
        assert_send::<ServiceError>();
        assert_sync::<ServiceError>();
    }
}
