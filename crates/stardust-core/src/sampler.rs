//! Input-boundary normalization and the motion state that gates star spawns.

use glam::Vec2;

use crate::config::EngineConfig;
use crate::geometry::{distance, elapsed};

/// A raw pointer-move event from the host environment. Mouse events carry
/// coordinates directly; touch events carry zero or more touch points, of
/// which only the first is consulted.
#[derive(Debug, Clone)]
pub enum PointerEvent {
    Mouse { x: f32, y: f32 },
    Touch { points: Vec<Vec2> },
}

impl PointerEvent {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::Mouse { x, y }
    }

    pub fn touch(points: Vec<Vec2>) -> Self {
        Self::Touch { points }
    }

    /// Normalized position, or `None` when the event carries no coordinate
    /// data (empty touch list). Such events are skipped entirely.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::Mouse { x, y } => Some(Vec2::new(*x, *y)),
            Self::Touch { points } => points.first().copied(),
        }
    }
}

/// Where and when the last star spawned.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StarMark {
    pub position: Vec2,
    pub at_ms: u64,
}

/// Per-engine motion state. Star spacing and glow spacing are tracked
/// independently: spawning a star does not touch the glow trail's
/// reference point beyond the normal per-event update.
///
/// `None` means "no sample yet" — an explicit empty state rather than an
/// origin sentinel, so a legitimate first event at (0, 0) behaves the same
/// as any other first event.
#[derive(Debug, Default)]
pub(crate) struct MotionState {
    last_star: Option<StarMark>,
    last_pointer: Option<Vec2>,
}

impl MotionState {
    /// Whether a star may spawn at `position` at `now_ms`: far enough from
    /// the last star (inclusive) or long enough since it (strict). The
    /// first event after initialization always qualifies.
    pub(crate) fn star_eligible(&self, position: Vec2, now_ms: u64, config: &EngineConfig) -> bool {
        match self.last_star {
            None => true,
            Some(mark) => {
                let moved_far =
                    distance(mark.position, position) >= config.min_distance_between_stars;
                let long_enough =
                    elapsed(mark.at_ms, now_ms) > config.min_time_between_stars_ms as i64;
                moved_far || long_enough
            }
        }
    }

    /// Start of the glow segment ending at `current`: the previous pointer
    /// sample, or `current` itself for the very first event (first-sample
    /// correction — prevents a spurious burst from an arbitrary origin).
    pub(crate) fn glow_origin(&self, current: Vec2) -> Vec2 {
        self.last_pointer.unwrap_or(current)
    }

    pub(crate) fn mark_star(&mut self, position: Vec2, at_ms: u64) {
        self.last_star = Some(StarMark { position, at_ms });
    }

    pub(crate) fn mark_pointer(&mut self, position: Vec2) {
        self.last_pointer = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_event_yields_its_coordinates() {
        assert_eq!(
            PointerEvent::mouse(12.0, 34.0).position(),
            Some(Vec2::new(12.0, 34.0))
        );
    }

    #[test]
    fn touch_event_yields_first_point_only() {
        let event = PointerEvent::touch(vec![Vec2::new(1.0, 2.0), Vec2::new(9.0, 9.0)]);
        assert_eq!(event.position(), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn empty_touch_event_yields_nothing() {
        assert_eq!(PointerEvent::touch(Vec::new()).position(), None);
    }

    #[test]
    fn first_event_is_always_star_eligible() {
        let state = MotionState::default();
        assert!(state.star_eligible(Vec2::new(1.0, 1.0), 0, &EngineConfig::default()));
    }

    #[test]
    fn distance_threshold_is_inclusive() {
        let config = EngineConfig::default();
        let mut state = MotionState::default();
        state.mark_star(Vec2::ZERO, 1000);
        assert!(!state.star_eligible(Vec2::new(74.9, 0.0), 1001, &config));
        assert!(state.star_eligible(Vec2::new(75.0, 0.0), 1001, &config));
    }

    #[test]
    fn time_threshold_is_strict() {
        let config = EngineConfig::default();
        let mut state = MotionState::default();
        state.mark_star(Vec2::ZERO, 1000);
        assert!(!state.star_eligible(Vec2::new(1.0, 0.0), 1250, &config));
        assert!(state.star_eligible(Vec2::new(1.0, 0.0), 1251, &config));
    }

    #[test]
    fn glow_origin_falls_back_to_current_on_first_event() {
        let mut state = MotionState::default();
        let first = Vec2::new(500.0, 500.0);
        assert_eq!(state.glow_origin(first), first);
        state.mark_pointer(first);
        assert_eq!(state.glow_origin(Vec2::new(600.0, 500.0)), first);
    }
}
