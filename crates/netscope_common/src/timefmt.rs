//! Axis tick-label derivation for the time-series chart.

use chrono::NaiveDateTime;

/// Timestamp shapes the backend is known to emit. The aggregation endpoint
/// produces `YYYY-MM-DD HH:MM:SS` minute buckets; the ISO `T` separator and
/// second-less variants are accepted for tolerance.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Zero-padded `HH:MM` label for a bucket timestamp.
///
/// Unparseable input falls back to the raw string, so a misbehaving backend
/// degrades to ugly ticks rather than a missing axis.
pub fn hhmm_label(timestamp: &str) -> String {
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return dt.format("%H:%M").to_string();
        }
    }
    timestamp.to_string()
}
