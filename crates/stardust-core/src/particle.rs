//! Transient visual entities and their identities.

use glam::Vec2;

/// Unique particle identity. Monotonic per engine, never reused, so a
/// removal scheduled for one particle can never hit another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next);
        self.next += 1;
        id
    }
}

/// A star glyph spawned on qualifying pointer movement. Appearance fields
/// are drawn from the configured palettes at creation and never change.
#[derive(Debug, Clone)]
pub struct Star {
    pub id: ParticleId,
    pub position: Vec2,
    /// RGB triple string, e.g. `"249 146 253"`.
    pub color: String,
    pub size: String,
    /// Name of the fall animation the render adapter should drive.
    pub animation: String,
}

/// A trail mark interpolated along the pointer's path.
#[derive(Debug, Clone, Copy)]
pub struct GlowPoint {
    pub id: ParticleId,
    pub position: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }
}
