//! Live-particle collections consumed by the render adapter.

use crate::particle::{GlowPoint, ParticleId, Star};

/// Two insertion-ordered collections of live particles. Presence in the
/// store is the sole liveness signal for rendering; removal happens only
/// through the engine's removal schedule. Mutation is crate-internal so
/// render adapters get a read-only view.
#[derive(Debug, Default)]
pub struct ParticleStore {
    stars: Vec<Star>,
    glow_points: Vec<GlowPoint>,
}

impl ParticleStore {
    /// Live stars, in insertion order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Live glow points, in insertion order.
    pub fn glow_points(&self) -> &[GlowPoint] {
        &self.glow_points
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.glow_points.is_empty()
    }

    pub(crate) fn push_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    pub(crate) fn push_glow_point(&mut self, point: GlowPoint) {
        self.glow_points.push(point);
    }

    /// Remove a star by id. A missing id is a no-op, not an error: its
    /// removal may already have fired.
    pub(crate) fn remove_star(&mut self, id: ParticleId) -> bool {
        match self.stars.iter().position(|star| star.id == id) {
            Some(index) => {
                self.stars.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove a glow point by id, with the same no-op-if-absent policy.
    pub(crate) fn remove_glow_point(&mut self, id: ParticleId) -> bool {
        match self.glow_points.iter().position(|point| point.id == id) {
            Some(index) => {
                self.glow_points.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::IdGenerator;
    use glam::Vec2;

    fn glow(ids: &mut IdGenerator, x: f32) -> GlowPoint {
        GlowPoint {
            id: ids.next_id(),
            position: Vec2::new(x, 0.0),
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut ids = IdGenerator::default();
        let mut store = ParticleStore::default();
        for x in [3.0, 1.0, 2.0] {
            store.push_glow_point(glow(&mut ids, x));
        }
        let xs: Vec<f32> = store.glow_points().iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let mut ids = IdGenerator::default();
        let mut store = ParticleStore::default();
        let point = glow(&mut ids, 5.0);
        let id = point.id;
        store.push_glow_point(point);

        assert!(store.remove_glow_point(id));
        assert!(!store.remove_glow_point(id));
        assert!(!store.remove_star(ids.next_id()));
        assert!(store.is_empty());
    }
}
