//! Deterministic protocol label to display color assignment.
//!
//! Called identically whether a chart is being seeded for the first time or
//! repainted, so colors stay stable across refreshes even as the label set
//! changes between windows.

use std::fmt;

/// 24-bit display color. Formats as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Fixed color for TCP traffic.
pub const TCP: Rgb = Rgb(0x4F, 0xC3, 0xF7);

/// Fixed color for UDP traffic.
pub const UDP: Rgb = Rgb(0xEF, 0x53, 0x50);

/// Fixed color for the backend's catch-all "Other" bucket.
pub const OTHER: Rgb = Rgb(0xFF, 0xD5, 0x4F);

/// Shared fallback for any label the backend starts emitting later.
pub const FALLBACK: Rgb = Rgb(0xA1, 0x88, 0x7F);

/// Total, pure mapping from a protocol label to its display color.
pub fn color_for(label: &str) -> Rgb {
    match label {
        "TCP" => TCP,
        "UDP" => UDP,
        "Other" => OTHER,
        _ => FALLBACK,
    }
}
