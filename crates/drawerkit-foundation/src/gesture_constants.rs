//! Shared gesture thresholds, in logical pixels and milliseconds.

/// Movement past this distance from the press position cancels a pending tap.
///
/// Matches the common platform touch slop (Android's ViewConfiguration uses ~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Default travel along the drag axis before a pan activates.
pub const PAN_MIN_DISTANCE: f32 = 3.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// A press held longer than this is not a tap.
pub const MAX_TAP_DURATION_MS: i64 = 500;
