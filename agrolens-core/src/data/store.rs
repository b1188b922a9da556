//! MandiStore — region CSV sources behind a read-through snapshot cache.
//!
//! Layout: `{data_dir}/{State}_{District}.csv`; the region key is the file
//! stem (e.g. `Kerala_Kottayam`). Commodity is a column filter inside the
//! file.
//!
//! Cache strategy: immutable `Arc` snapshots keyed by (region, commodity),
//! replaced wholesale when the source file's mtime changes. Readers clone
//! the `Arc`; nothing is ever mutated in place, so concurrent reads need no
//! locking beyond the map's `RwLock`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use crate::domain::PriceRecord;
use crate::error::MarketError;

use super::ingest::{canonicalize, read_records};
use super::schema::canonical_name;

/// Cache key: one entry per (region, commodity) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SourceKey {
    region: String,
    commodity: String,
}

/// An immutable view of one (region, commodity) record set.
#[derive(Debug)]
pub struct Snapshot {
    /// Records sorted ascending by date, duplicate dates removed
    /// (first occurrence wins).
    pub records: Arc<[PriceRecord]>,
    /// BLAKE3 fingerprint over dates and prices, for diagnostics and
    /// reproducibility labelling.
    pub data_hash: String,
    /// Source file mtime at load, used for staleness checks.
    modified: Option<SystemTime>,
}

/// The record store.
pub struct MandiStore {
    data_dir: PathBuf,
    cache: RwLock<HashMap<SourceKey, Arc<Snapshot>>>,
}

impl MandiStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Root directory of the CSV sources.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the CSV file backing a region: `{data_dir}/{region}.csv`
    fn region_path(&self, region: &str) -> PathBuf {
        self.data_dir.join(format!("{region}.csv"))
    }

    /// Load normalized records for a (region, commodity) pair, sorted
    /// ascending by date.
    ///
    /// Fails with `SourceNotFound` when the region file does not exist, or
    /// when it has rows but the commodity never appears in it. A region
    /// file with zero data rows is a discovered source with zero rows and
    /// loads as an empty slice.
    pub fn load_records(
        &self,
        region: &str,
        commodity: &str,
    ) -> Result<Arc<[PriceRecord]>, MarketError> {
        Ok(self.snapshot(region, commodity)?.records.clone())
    }

    /// Load the full snapshot (records plus fingerprint) for a pair.
    pub fn snapshot(&self, region: &str, commodity: &str) -> Result<Arc<Snapshot>, MarketError> {
        let path = self.region_path(region);
        if !path.exists() {
            return Err(MarketError::SourceNotFound {
                region: region.to_string(),
                commodity: commodity.to_string(),
            });
        }
        let modified = std::fs::metadata(&path)?.modified().ok();

        let key = SourceKey {
            region: region.to_string(),
            commodity: commodity.to_string(),
        };

        if let Some(snapshot) = self.cached(&key, modified) {
            return Ok(snapshot);
        }

        // Miss or stale: read outside the lock, then replace the entry.
        let all = read_records(&path, region)?;
        let wanted = canonical_name(commodity);
        let matched: Vec<PriceRecord> = all
            .iter()
            .filter(|r| canonical_name(&r.commodity) == wanted)
            .cloned()
            .collect();

        if matched.is_empty() && !all.is_empty() {
            return Err(MarketError::SourceNotFound {
                region: region.to_string(),
                commodity: commodity.to_string(),
            });
        }

        let records: Arc<[PriceRecord]> = canonicalize(matched).into();
        let snapshot = Arc::new(Snapshot {
            data_hash: dataset_hash(&records),
            records,
            modified,
        });

        let mut cache = self.cache.write().expect("snapshot cache lock poisoned");
        cache.insert(key, snapshot.clone());
        Ok(snapshot)
    }

    fn cached(&self, key: &SourceKey, modified: Option<SystemTime>) -> Option<Arc<Snapshot>> {
        let cache = self.cache.read().expect("snapshot cache lock poisoned");
        let snapshot = cache.get(key)?;
        // A snapshot without a readable mtime is never trusted across loads.
        if snapshot.modified.is_some() && snapshot.modified == modified {
            Some(snapshot.clone())
        } else {
            None
        }
    }
}

/// Deterministic BLAKE3 hash over a record set: dates and all price/volume
/// values in order.
fn dataset_hash(records: &[PriceRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    for r in records {
        hasher.update(r.date.to_string().as_bytes());
        hasher.update(r.commodity.as_bytes());
        hasher.update(&r.min_price.to_le_bytes());
        hasher.update(&r.max_price.to_le_bytes());
        hasher.update(&r.modal_price.to_le_bytes());
        hasher.update(&r.volume.unwrap_or(-1.0).to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
