//! Reconciliation correctness tests
//!
//! Deterministic, no network: snapshots are built in memory and applied to a
//! fresh view state exactly the way the event loop applies accepted fetches.

use netscope::reconcile::reconcile;
use netscope::view::ViewState;
use netscope_common::{DeviceRow, LogEntry, TelemetrySnapshot, TrafficPoint};

fn sample_snapshot() -> TelemetrySnapshot {
    TelemetrySnapshot {
        traffic_over_time: vec![
            TrafficPoint {
                timestamp: "2024-01-01 00:00:00".into(),
                total_size: 100,
            },
            TrafficPoint {
                timestamp: "2024-01-01 00:01:00".into(),
                total_size: 50,
            },
        ],
        protocol_summary: [("TCP".to_string(), 120), ("UDP".to_string(), 30)]
            .into_iter()
            .collect(),
        device_table: vec![DeviceRow {
            ip_address: "10.0.0.1".into(),
            total_size: 150,
        }],
        traffic_log: vec![],
    }
}

/// The reference scenario: two chart points in order, fixed protocol colors,
/// one device row, empty traffic log.
#[test]
fn scenario_snapshot_renders_expected_views() {
    let mut state = ViewState::new(60);
    reconcile(&sample_snapshot(), &mut state);

    let ts = state.time_series.as_ref().unwrap();
    assert_eq!(ts.values, vec![100, 50]);
    assert_eq!(
        ts.labels,
        vec!["2024-01-01 00:00:00", "2024-01-01 00:01:00"]
    );

    let proto = state.protocol.as_ref().unwrap();
    assert_eq!(proto.labels, vec!["TCP", "UDP"]);
    assert_eq!(proto.values, vec![120, 30]);
    let colors: Vec<String> = proto.colors.iter().map(|c| c.to_string()).collect();
    assert_eq!(colors, vec!["#4FC3F7", "#EF5350"]);

    assert_eq!(state.device_rows.len(), 1);
    assert_eq!(state.device_rows[0].ip_address, "10.0.0.1");
    assert_eq!(state.device_rows[0].total_size, 150);

    assert!(state.log_rows.is_empty());
}

/// Reconciling twice with the identical snapshot shows the same content as
/// reconciling once.
#[test]
fn reconciliation_is_idempotent() {
    let snapshot = sample_snapshot();

    let mut once = ViewState::new(60);
    reconcile(&snapshot, &mut once);

    let mut twice = ViewState::new(60);
    reconcile(&snapshot, &mut twice);
    reconcile(&snapshot, &mut twice);

    assert_eq!(once.time_series.as_ref().unwrap().labels, twice.time_series.as_ref().unwrap().labels);
    assert_eq!(once.time_series.as_ref().unwrap().values, twice.time_series.as_ref().unwrap().values);
    assert_eq!(once.protocol.as_ref().unwrap().labels, twice.protocol.as_ref().unwrap().labels);
    assert_eq!(once.protocol.as_ref().unwrap().values, twice.protocol.as_ref().unwrap().values);
    assert_eq!(once.protocol.as_ref().unwrap().colors, twice.protocol.as_ref().unwrap().colors);
    assert_eq!(once.device_rows, twice.device_rows);
    assert_eq!(once.log_rows, twice.log_rows);
}

/// Prior rows never leak into the next render: N rows then M rows leaves
/// exactly M.
#[test]
fn tables_are_fully_replaced() {
    let mut state = ViewState::new(60);

    let mut first = sample_snapshot();
    first.device_table = (0..5)
        .map(|i| DeviceRow {
            ip_address: format!("10.0.0.{}", i),
            total_size: i,
        })
        .collect();
    first.traffic_log = vec![LogEntry {
        timestamp: "2024-01-01 00:00:30".into(),
        src_ip: "10.0.0.1".into(),
        dst_ip: "10.0.0.2".into(),
        protocol: "TCP".into(),
        packet_size: 60,
    }];
    reconcile(&first, &mut state);
    assert_eq!(state.device_rows.len(), 5);
    assert_eq!(state.log_rows.len(), 1);

    let mut second = sample_snapshot();
    second.device_table = vec![DeviceRow {
        ip_address: "192.168.1.7".into(),
        total_size: 999,
    }];
    second.traffic_log = vec![];
    reconcile(&second, &mut state);

    assert_eq!(state.device_rows.len(), 1);
    assert_eq!(state.device_rows[0].ip_address, "192.168.1.7");
    assert!(state.log_rows.is_empty());
}

/// The first reconciliation creates each chart exactly once; later ones only
/// repaint in place, visible as the revision counter advancing from 0.
#[test]
fn charts_are_created_once_and_reused() {
    let mut state = ViewState::new(60);

    reconcile(&sample_snapshot(), &mut state);
    assert_eq!(state.time_series.as_ref().unwrap().revision, 0);
    assert_eq!(state.protocol.as_ref().unwrap().revision, 0);

    let mut next = sample_snapshot();
    next.traffic_over_time.push(TrafficPoint {
        timestamp: "2024-01-01 00:02:00".into(),
        total_size: 75,
    });
    reconcile(&next, &mut state);
    reconcile(&next, &mut state);

    let ts = state.time_series.as_ref().unwrap();
    assert_eq!(ts.revision, 2);
    assert_eq!(ts.values, vec![100, 50, 75]);
    assert_eq!(state.protocol.as_ref().unwrap().revision, 2);
}

/// A label disappearing and a new one appearing across refreshes still gets
/// colors recomputed for the whole set, pair by pair.
#[test]
fn protocol_colors_follow_the_current_label_set() {
    let mut state = ViewState::new(60);
    reconcile(&sample_snapshot(), &mut state);

    let mut next = sample_snapshot();
    next.protocol_summary = [("Other".to_string(), 10), ("ICMP".to_string(), 5)]
        .into_iter()
        .collect();
    reconcile(&next, &mut state);

    let proto = state.protocol.as_ref().unwrap();
    assert_eq!(proto.labels, vec!["ICMP", "Other"]);
    let colors: Vec<String> = proto.colors.iter().map(|c| c.to_string()).collect();
    assert_eq!(colors, vec!["#A1887F", "#FFD54F"]);
    assert_eq!(proto.labels.len(), proto.colors.len());
}

/// An empty snapshot is still a valid full replacement.
#[test]
fn empty_snapshot_clears_everything() {
    let mut state = ViewState::new(60);
    reconcile(&sample_snapshot(), &mut state);

    reconcile(&TelemetrySnapshot::default(), &mut state);

    assert!(state.time_series.as_ref().unwrap().values.is_empty());
    assert!(state.protocol.as_ref().unwrap().labels.is_empty());
    assert!(state.device_rows.is_empty());
    assert!(state.log_rows.is_empty());
}
