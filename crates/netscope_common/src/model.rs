//! Wire model for the backend's aggregated telemetry payload.
//!
//! One `TelemetrySnapshot` is one complete, internally consistent view of the
//! selected time window. Snapshots are never diffed against each other; each
//! fetch replaces the previous one wholesale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bucket of the per-minute traffic aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPoint {
    /// Bucket timestamp as delivered by the backend (minute resolution).
    pub timestamp: String,

    /// Total bytes observed in the bucket.
    pub total_size: u64,
}

/// Per-device traffic total for the selected window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRow {
    pub ip_address: String,
    pub total_size: u64,
}

/// One raw captured-packet record from the traffic log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub src_ip: String,
    pub dst_ip: String,
    pub protocol: String,
    pub packet_size: u64,
}

/// Complete telemetry payload for one time window.
///
/// All four fields are required; a body missing any of them is structurally
/// malformed and must be rejected at the fetch boundary.
///
/// `protocol_summary` arrives as an unordered JSON object. A `BTreeMap` gives
/// every render pass the same label order, which keeps the categorical chart
/// stable across refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Chronological traffic-over-time series, order as delivered.
    pub traffic_over_time: Vec<TrafficPoint>,

    /// Protocol label to total byte count.
    pub protocol_summary: BTreeMap<String, u64>,

    /// Per-device totals, order as delivered.
    pub device_table: Vec<DeviceRow>,

    /// Raw traffic log, most-recent-first as delivered (never re-sorted).
    pub traffic_log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "traffic_over_time": [
            {"timestamp": "2024-01-01 00:00:00", "total_size": 100},
            {"timestamp": "2024-01-01 00:01:00", "total_size": 50}
        ],
        "protocol_summary": {"TCP": 120, "UDP": 30},
        "device_table": [{"ip_address": "10.0.0.1", "total_size": 150}],
        "traffic_log": [
            {"timestamp": "2024-01-01 00:01:12", "src_ip": "10.0.0.1",
             "dst_ip": "10.0.0.2", "protocol": "TCP", "packet_size": 60}
        ]
    }"#;

    #[test]
    fn deserializes_full_payload() {
        let snapshot: TelemetrySnapshot = serde_json::from_str(FULL_PAYLOAD).unwrap();

        assert_eq!(snapshot.traffic_over_time.len(), 2);
        assert_eq!(snapshot.traffic_over_time[0].total_size, 100);
        assert_eq!(snapshot.protocol_summary.get("TCP"), Some(&120));
        assert_eq!(snapshot.device_table[0].ip_address, "10.0.0.1");
        assert_eq!(snapshot.traffic_log[0].protocol, "TCP");
    }

    #[test]
    fn missing_section_is_rejected() {
        let body = r#"{
            "traffic_over_time": [],
            "device_table": [],
            "traffic_log": []
        }"#;

        assert!(serde_json::from_str::<TelemetrySnapshot>(body).is_err());
    }

    #[test]
    fn protocol_summary_order_is_deterministic() {
        let a: TelemetrySnapshot = serde_json::from_str(
            r#"{"traffic_over_time": [], "protocol_summary": {"UDP": 1, "TCP": 2},
                "device_table": [], "traffic_log": []}"#,
        )
        .unwrap();
        let b: TelemetrySnapshot = serde_json::from_str(
            r#"{"traffic_over_time": [], "protocol_summary": {"TCP": 2, "UDP": 1},
                "device_table": [], "traffic_log": []}"#,
        )
        .unwrap();

        let labels_a: Vec<_> = a.protocol_summary.keys().collect();
        let labels_b: Vec<_> = b.protocol_summary.keys().collect();
        assert_eq!(labels_a, labels_b);
    }

    #[test]
    fn traffic_log_order_is_preserved() {
        let body = r#"{
            "traffic_over_time": [], "protocol_summary": {},
            "device_table": [],
            "traffic_log": [
                {"timestamp": "2024-01-01 00:02:00", "src_ip": "b", "dst_ip": "c",
                 "protocol": "UDP", "packet_size": 2},
                {"timestamp": "2024-01-01 00:01:00", "src_ip": "a", "dst_ip": "c",
                 "protocol": "TCP", "packet_size": 1}
            ]
        }"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(body).unwrap();

        // Most-recent-first as delivered; nothing re-sorts it.
        assert_eq!(snapshot.traffic_log[0].src_ip, "b");
        assert_eq!(snapshot.traffic_log[1].src_ip, "a");
    }
}
