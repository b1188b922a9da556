//! Structured error types for the market pipeline.
//!
//! Only the record store can fail for a missing source; derivations over
//! well-formed inputs are total. `InsufficientData` is distinct from
//! `SourceNotFound`: the source exists but carries zero records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("no price source matches region '{region}' and commodity '{commodity}'")]
    SourceNotFound { region: String, commodity: String },

    #[error("no price records available to derive market signals")]
    InsufficientData,

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_pair() {
        let err = MarketError::SourceNotFound {
            region: "Kerala_Kottayam".into(),
            commodity: "Banana".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Kerala_Kottayam"));
        assert!(msg.contains("Banana"));
    }

    #[test]
    fn insufficient_data_is_distinct_from_not_found() {
        assert!(!matches!(
            MarketError::InsufficientData,
            MarketError::SourceNotFound { .. }
        ));
    }
}
