//! Source discovery: which (region, commodity) pairs exist.
//!
//! Region files are named `{State}_{District}.csv`; the state/district
//! topology comes from the filenames and the commodity set from the files'
//! commodity columns. Discovery feeds filter pickers only — the pipeline
//! itself never consults it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MarketError;

use super::ingest::read_records;
use super::schema::canonical_name;

/// Filter choices offered to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFilters {
    /// State → districts, from file stems split at the first underscore.
    pub topology: BTreeMap<String, Vec<String>>,
    /// Region keys exactly as the loader expects them (file stems).
    pub regions: Vec<String>,
    /// Every commodity seen across all sources.
    pub commodities: BTreeSet<String>,
}

impl MarketFilters {
    /// Scan a data directory for region CSVs and build the filter set.
    ///
    /// Files whose rows cannot be read are skipped with a warning rather
    /// than failing the whole discovery.
    pub fn discover(data_dir: &Path) -> Result<Self, MarketError> {
        let mut topology: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut regions = BTreeSet::new();
        let mut commodities = BTreeSet::new();

        for entry in std::fs::read_dir(data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let (state, district) = split_region(stem);
            topology
                .entry(state.to_string())
                .or_default()
                .insert(district.to_string());
            regions.insert(stem.to_string());

            match read_records(&path, stem) {
                Ok(records) => {
                    commodities.extend(records.into_iter().map(|r| r.commodity));
                }
                Err(e) => {
                    eprintln!("WARNING: skipping unreadable source {}: {e}", path.display());
                }
            }
        }

        Ok(Self {
            topology: topology
                .into_iter()
                .map(|(state, districts)| (state, districts.into_iter().collect()))
                .collect(),
            regions: regions.into_iter().collect(),
            commodities,
        })
    }
}

/// Enumerate the (region, commodity) pairs that have a source, optionally
/// narrowed to one region and/or one commodity.
pub fn list_available(
    data_dir: &Path,
    region: Option<&str>,
    commodity: Option<&str>,
) -> Result<BTreeSet<(String, String)>, MarketError> {
    let wanted_commodity = commodity.map(canonical_name);
    let mut pairs = BTreeSet::new();

    for entry in std::fs::read_dir(data_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if region.is_some_and(|r| r != stem) {
            continue;
        }

        let records = match read_records(&path, stem) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("WARNING: skipping unreadable source {}: {e}", path.display());
                continue;
            }
        };
        for r in records {
            if wanted_commodity
                .as_deref()
                .is_some_and(|w| canonical_name(&r.commodity) != w)
            {
                continue;
            }
            pairs.insert((stem.to_string(), r.commodity));
        }
    }

    Ok(pairs)
}

/// Split a region file stem into (state, district) at the first underscore.
/// A stem with no underscore is its own state with an empty district.
fn split_region(stem: &str) -> (&str, &str) {
    match stem.split_once('_') {
        Some((state, district)) => (state, district),
        None => (stem, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "date,commodity,min_price,max_price,modal_price\n";

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Kerala_Kottayam.csv"),
            format!(
                "{HEADER}2024-06-03,Banana,2400,2800,2600\n2024-06-03,Coconut,9000,9500,9200\n"
            ),
        )
        .unwrap();
        fs::write(
            dir.path().join("Kerala_Palakkad.csv"),
            format!("{HEADER}2024-06-03,Banana,2300,2700,2500\n"),
        )
        .unwrap();
        fs::write(
            dir.path().join("Punjab_Ludhiana.csv"),
            format!("{HEADER}2024-06-03,Wheat,2100,2300,2200\n"),
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        dir
    }

    #[test]
    fn discovers_topology_and_commodities() {
        let dir = data_dir();
        let filters = MarketFilters::discover(dir.path()).unwrap();

        assert_eq!(
            filters.topology["Kerala"],
            vec!["Kottayam".to_string(), "Palakkad".to_string()]
        );
        assert_eq!(filters.topology["Punjab"], vec!["Ludhiana".to_string()]);
        assert_eq!(filters.regions.len(), 3);
        assert!(filters.commodities.contains("Banana"));
        assert!(filters.commodities.contains("Wheat"));
        assert!(!filters.commodities.contains("notes"));
    }

    #[test]
    fn lists_all_pairs() {
        let dir = data_dir();
        let pairs = list_available(dir.path(), None, None).unwrap();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&("Kerala_Kottayam".to_string(), "Coconut".to_string())));
    }

    #[test]
    fn narrows_by_region_and_commodity() {
        let dir = data_dir();
        let pairs = list_available(dir.path(), Some("Kerala_Kottayam"), None).unwrap();
        assert_eq!(pairs.len(), 2);

        let pairs = list_available(dir.path(), None, Some("banana")).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(_, c)| c == "Banana"));
    }

    #[test]
    fn stem_without_underscore_is_its_own_state() {
        assert_eq!(split_region("Delhi"), ("Delhi", ""));
        assert_eq!(split_region("Kerala_Kottayam"), ("Kerala", "Kottayam"));
    }
}
