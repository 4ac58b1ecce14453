//! View State - exclusive owner of the live chart states and table buffers
//!
//! Chart states are created lazily by the first reconciliation and only ever
//! mutated in place after that; data changes never trigger re-creation. The
//! whole struct is passed explicitly to the reconciler, never reached through
//! any ambient lookup.

use netscope_common::{DeviceRow, LogEntry, Rgb};

/// Menu of selectable time windows, in minutes.
pub const TIME_RANGE_MINUTES: &[u32] = &[5, 15, 60, 180, 1440];

/// Live state of the time-series traffic chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesChart {
    /// Bucket timestamps, chronological, as delivered.
    pub labels: Vec<String>,

    /// Bytes per bucket, same order as `labels`.
    pub values: Vec<u64>,

    /// In-place repaints since creation; 0 right after seeding.
    pub revision: u64,
}

impl TimeSeriesChart {
    fn seeded(labels: Vec<String>, values: Vec<u64>) -> Self {
        Self {
            labels,
            values,
            revision: 0,
        }
    }

    /// Replace both data arrays together and count the repaint.
    pub fn replace_data(&mut self, labels: Vec<String>, values: Vec<u64>) {
        self.labels = labels;
        self.values = values;
        self.revision += 1;
    }
}

/// Live state of the protocol-distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,

    /// One color per label, recomputed on every pass.
    pub colors: Vec<Rgb>,

    /// In-place repaints since creation; 0 right after seeding.
    pub revision: u64,
}

impl ProtocolChart {
    fn seeded(labels: Vec<String>, values: Vec<u64>, colors: Vec<Rgb>) -> Self {
        Self {
            labels,
            values,
            colors,
            revision: 0,
        }
    }

    /// Replace labels, values and colors together, so no (label, value) pair
    /// is ever rendered with a stale color.
    pub fn replace_data(&mut self, labels: Vec<String>, values: Vec<u64>, colors: Vec<Rgb>) {
        self.labels = labels;
        self.values = values;
        self.colors = colors;
        self.revision += 1;
    }
}

/// Single authoritative owner of everything the dashboard renders.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Currently selected time window in minutes. Mutated only by explicit
    /// user selection.
    pub selected_minutes: u32,

    /// Time-series chart; absent until the first snapshot arrives.
    pub time_series: Option<TimeSeriesChart>,

    /// Protocol-distribution chart; absent until the first snapshot arrives.
    pub protocol: Option<ProtocolChart>,

    /// Device table rows, rebuilt in full each reconciliation.
    pub device_rows: Vec<DeviceRow>,

    /// Traffic log rows, rebuilt in full each reconciliation.
    pub log_rows: Vec<LogEntry>,
}

impl ViewState {
    pub fn new(selected_minutes: u32) -> Self {
        Self {
            selected_minutes,
            time_series: None,
            protocol: None,
            device_rows: Vec::new(),
            log_rows: Vec::new(),
        }
    }

    /// Create the time-series chart on the first call, seeded with the given
    /// arrays. Later calls are a no-op handing back the existing instance
    /// untouched; data mutation happens in the reconciler, not here.
    pub fn ensure_time_series(
        &mut self,
        labels: Vec<String>,
        values: Vec<u64>,
    ) -> &mut TimeSeriesChart {
        self.time_series
            .get_or_insert_with(|| TimeSeriesChart::seeded(labels, values))
    }

    /// Same contract as [`ensure_time_series`](Self::ensure_time_series) for
    /// the protocol chart.
    pub fn ensure_protocol(
        &mut self,
        labels: Vec<String>,
        values: Vec<u64>,
        colors: Vec<Rgb>,
    ) -> &mut ProtocolChart {
        self.protocol
            .get_or_insert_with(|| ProtocolChart::seeded(labels, values, colors))
    }

    /// Step the time-range selection through the fixed menu. Returns the new
    /// value when the selection actually changed.
    pub fn cycle_selection(&mut self, step: isize) -> Option<u32> {
        let current = TIME_RANGE_MINUTES
            .iter()
            .position(|&m| m == self.selected_minutes)
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(step)
            .min(TIME_RANGE_MINUTES.len() - 1);

        let minutes = TIME_RANGE_MINUTES[next];
        if minutes == self.selected_minutes {
            return None;
        }
        self.selected_minutes = minutes;
        Some(minutes)
    }
}
