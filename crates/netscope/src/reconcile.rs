//! Reconciler - applies a fresh snapshot to the rendered views
//!
//! Always full replacement, never an incremental diff. Snapshots are
//! independently aggregated server-side windows, not deltas; there is no
//! stable key to match rows against across refreshes, so every cycle rebuilds
//! chart data and table rows wholesale. The one concession is reusing chart
//! states instead of recreating them, which keeps repaints flicker-free.

use crate::view::ViewState;
use netscope_common::{color_for, Rgb, TelemetrySnapshot};

/// Apply `snapshot` to `state`.
///
/// Infallible: malformed payloads are rejected at the fetch boundary and
/// never reach this point.
pub fn reconcile(snapshot: &TelemetrySnapshot, state: &mut ViewState) {
    // Time-series chart: seed on first snapshot, repaint in place after.
    let labels: Vec<String> = snapshot
        .traffic_over_time
        .iter()
        .map(|p| p.timestamp.clone())
        .collect();
    let values: Vec<u64> = snapshot
        .traffic_over_time
        .iter()
        .map(|p| p.total_size)
        .collect();

    match state.time_series {
        Some(ref mut chart) => chart.replace_data(labels, values),
        None => {
            state.ensure_time_series(labels, values);
        }
    }

    // Categorical chart: colors are recomputed for the current label set on
    // every pass. Label sets change between windows, so a cached color array
    // would go stale.
    let labels: Vec<String> = snapshot.protocol_summary.keys().cloned().collect();
    let values: Vec<u64> = snapshot.protocol_summary.values().copied().collect();
    let colors: Vec<Rgb> = labels.iter().map(|l| color_for(l)).collect();

    match state.protocol {
        Some(ref mut chart) => chart.replace_data(labels, values, colors),
        None => {
            state.ensure_protocol(labels, values, colors);
        }
    }

    // Tables: clear all rows, then append in delivered order, raw values.
    state.device_rows.clear();
    state.device_rows.extend(snapshot.device_table.iter().cloned());

    state.log_rows.clear();
    state.log_rows.extend(snapshot.traffic_log.iter().cloned());
}
