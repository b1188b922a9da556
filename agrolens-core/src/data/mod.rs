//! Record store: CSV ingest, normalization, snapshot cache, discovery.

pub mod catalog;
pub mod ingest;
pub mod schema;
pub mod store;

pub use catalog::{list_available, MarketFilters};
pub use ingest::{canonicalize, read_records};
pub use schema::HeaderMap;
pub use store::{MandiStore, Snapshot};
