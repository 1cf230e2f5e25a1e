//! Pure distance and elapsed-time helpers.

use glam::Vec2;

/// Euclidean distance between two screen-space points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Signed milliseconds from `start_ms` to `end_ms`.
pub fn elapsed(start_ms: u64, end_ms: u64) -> i64 {
    end_ms as i64 - start_ms as i64
}
