//! Service error mapping.
//!
//! Internally the pipeline distinguishes missing sources, empty sources,
//! and validation failures; the wire contract collapses everything except
//! "not found" and "invalid request" into one generic computation failure.
//! The detailed cause stays reachable through `source()` for diagnostics.

use agrolens_core::MarketError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("market computation failed")]
    ComputationFailed(#[source] MarketError),
}

impl From<MarketError> for ServiceError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::SourceNotFound { .. } => ServiceError::NotFound(err.to_string()),
            MarketError::Validation(msg) => ServiceError::InvalidRequest(msg),
            other => ServiceError::ComputationFailed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn source_not_found_maps_to_not_found_class() {
        let err: ServiceError = MarketError::SourceNotFound {
            region: "Kerala_Kottayam".into(),
            commodity: "Banana".into(),
        }
        .into();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(err.to_string().contains("Banana"));
    }

    #[test]
    fn internal_errors_collapse_to_generic_failure() {
        let err: ServiceError = MarketError::InsufficientData.into();
        assert!(matches!(err, ServiceError::ComputationFailed(_)));
        // Wire message is generic...
        assert_eq!(err.to_string(), "market computation failed");
        // ...but the cause survives for diagnostics.
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_maps_to_invalid_request() {
        let err: ServiceError = MarketError::Validation("days must be <= 30".into()).into();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }
}
