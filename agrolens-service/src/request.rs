//! Request shapes and fail-fast validation.
//!
//! Bounds are checked before any loading or computation begins; a request
//! outside them never touches the store.

use agrolens_core::series::MAX_SERIES_DAYS;

use crate::error::ServiceError;

/// Paging bounds for the records table.
pub const MIN_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 200;

/// Parameters for the market intelligence operation.
#[derive(Debug, Clone, PartialEq)]
pub struct IntelligenceRequest {
    pub region: String,
    pub commodity: String,
    /// Trend window in days, 1..=30.
    pub days: usize,
}

impl IntelligenceRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.days == 0 || self.days > MAX_SERIES_DAYS {
            return Err(ServiceError::InvalidRequest(format!(
                "days must be between 1 and {MAX_SERIES_DAYS}, got {}",
                self.days
            )));
        }
        validate_pair(&self.region, &self.commodity)
    }
}

/// Parameters for the paginated records operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsRequest {
    pub region: String,
    pub commodity: String,
    /// 1-based page number.
    pub page: usize,
    /// Records per page, 10..=200.
    pub page_size: usize,
}

impl RecordsRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.page == 0 {
            return Err(ServiceError::InvalidRequest(
                "page must be >= 1".to_string(),
            ));
        }
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::InvalidRequest(format!(
                "page_size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        validate_pair(&self.region, &self.commodity)
    }
}

fn validate_pair(region: &str, commodity: &str) -> Result<(), ServiceError> {
    if region.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(
            "region must not be empty".to_string(),
        ));
    }
    if commodity.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(
            "commodity must not be empty".to_string(),
        ));
    }
    Ok(())
}
