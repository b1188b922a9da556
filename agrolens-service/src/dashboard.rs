//! Farmer dashboard: market intelligence tailored to a saved profile.

use agrolens_core::domain::{Action, RiskLevel};
use agrolens_core::present::MarketSummary;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::profile::ProfileDirectory;
use crate::request::IntelligenceRequest;
use crate::service::MarketService;

/// Farmer header echoed back with the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerHeader {
    pub id: String,
    pub full_name: String,
    pub primary_region: String,
    pub primary_commodity: String,
    pub land_size: Option<f64>,
    pub available_capital: Option<f64>,
}

/// Dashboard response: profile header plus the market summary, with the
/// recommendation fields lifted to the top level for card rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub farmer: FarmerHeader,
    pub market: MarketSummary,
    pub ai_recommendation: Action,
    pub recommendation_reason: String,
    pub consensus_score: u8,
    pub risk_level: RiskLevel,
}

impl MarketService {
    /// Build the dashboard for a farmer, defaulting the (region,
    /// commodity) pair from the profile and falling back to the
    /// configured defaults when the profile leaves them unset.
    pub fn dashboard(
        &self,
        profiles: &dyn ProfileDirectory,
        farmer_id: &str,
    ) -> Result<Dashboard, ServiceError> {
        let profile = profiles
            .get_profile(farmer_id)
            .ok_or_else(|| ServiceError::NotFound(format!("farmer '{farmer_id}'")))?;

        let region = profile
            .primary_region
            .clone()
            .unwrap_or_else(|| self.config().default_region.clone());
        let commodity = profile
            .primary_commodity
            .clone()
            .unwrap_or_else(|| self.config().default_commodity.clone());

        let summary = self.intelligence(&IntelligenceRequest {
            region: region.clone(),
            commodity: commodity.clone(),
            days: self.config().default_days,
        })?;

        Ok(Dashboard {
            farmer: FarmerHeader {
                id: profile.id,
                full_name: profile.full_name,
                primary_region: region,
                primary_commodity: commodity,
                land_size: profile.land_size,
                available_capital: profile.available_capital,
            },
            ai_recommendation: summary.action,
            recommendation_reason: summary.reason.clone(),
            consensus_score: summary.confidence,
            risk_level: summary.risk_level,
            market: summary,
        })
    }
}
