//! Farmer profile collaborator.
//!
//! Profile persistence lives in another system; the service only needs a
//! lookup seam to default (region, commodity) for farmer-scoped calls.
//! The trait keeps that seam mockable, and the in-memory directory backs
//! tests and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The slice of a farmer profile the market service consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub id: String,
    pub full_name: String,
    pub primary_region: Option<String>,
    pub primary_commodity: Option<String>,
    pub land_size: Option<f64>,
    pub available_capital: Option<f64>,
}

/// Profile lookup seam. Implementations must be cheap and side-effect
/// free; the service never writes back.
pub trait ProfileDirectory: Send + Sync {
    fn get_profile(&self, id: &str) -> Option<FarmerProfile>;
}

/// In-memory directory for tests and CLI runs.
#[derive(Debug, Default)]
pub struct InMemoryProfileDirectory {
    profiles: HashMap<String, FarmerProfile>,
}

impl InMemoryProfileDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from a list of profiles (e.g. deserialized from
    /// a JSON file).
    pub fn from_profiles(profiles: Vec<FarmerProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn insert(&mut self, profile: FarmerProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }
}

impl ProfileDirectory for InMemoryProfileDirectory {
    fn get_profile(&self, id: &str) -> Option<FarmerProfile> {
        self.profiles.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> FarmerProfile {
        FarmerProfile {
            id: id.into(),
            full_name: "Asha Varma".into(),
            primary_region: Some("Kerala_Kottayam".into()),
            primary_commodity: Some("Banana".into()),
            land_size: Some(1.5),
            available_capital: Some(50_000.0),
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let directory = InMemoryProfileDirectory::from_profiles(vec![profile("f-1")]);
        assert_eq!(directory.get_profile("f-1").unwrap().id, "f-1");
        assert!(directory.get_profile("f-2").is_none());
    }

    #[test]
    fn profile_json_roundtrip() {
        let p = profile("f-1");
        let json = serde_json::to_string(&p).unwrap();
        let deser: FarmerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deser);
    }
}
