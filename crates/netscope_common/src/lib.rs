//! Netscope Common - Shared wire model and pure helpers
//!
//! Types deserialized straight off the capture backend's `/api/data` payload,
//! plus the deterministic protocol color assignment and tick-label formatting
//! used by every render pass.

pub mod colors;
pub mod model;
pub mod timefmt;

pub use colors::{color_for, Rgb};
pub use model::{DeviceRow, LogEntry, TelemetrySnapshot, TrafficPoint};
