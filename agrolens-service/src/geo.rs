//! State-name geocoding for climate and satellite callers.
//!
//! The market pipeline never consults this; it exists so the callers that
//! need coordinates can resolve them from the same region vocabulary the
//! filters expose. Centroids are approximate state midpoints.

/// Approximate (lat, lon) centroids for Indian states, keyed by folded
/// name (lowercase, alphanumerics only).
const STATE_CENTROIDS: &[(&str, (f64, f64))] = &[
    ("andhrapradesh", (15.91, 79.74)),
    ("assam", (26.20, 92.94)),
    ("bihar", (25.10, 85.31)),
    ("gujarat", (22.26, 71.19)),
    ("haryana", (29.06, 76.09)),
    ("himachalpradesh", (31.10, 77.17)),
    ("karnataka", (15.32, 75.71)),
    ("kerala", (10.85, 76.27)),
    ("madhyapradesh", (22.97, 78.66)),
    ("maharashtra", (19.75, 75.71)),
    ("odisha", (20.95, 85.10)),
    ("punjab", (31.15, 75.34)),
    ("rajasthan", (27.02, 74.22)),
    ("tamilnadu", (11.13, 78.66)),
    ("telangana", (18.11, 79.02)),
    ("uttarpradesh", (26.85, 80.91)),
    ("westbengal", (22.99, 87.85)),
];

/// Resolve a state name to coordinates. Tolerant of case, spaces, and
/// underscores ("Tamil Nadu", "tamil_nadu", "TamilNadu" all resolve).
pub fn resolve_coordinates(state_name: &str) -> Option<(f64, f64)> {
    let folded: String = state_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    STATE_CENTROIDS
        .iter()
        .find(|(name, _)| *name == folded)
        .map(|(_, coords)| *coords)
}
