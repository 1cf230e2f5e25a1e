//! The trail engine: consumes pointer events, spawns and retires particles,
//! and publishes store revisions to render-side subscribers.

use crossbeam_channel::{Receiver, Sender};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::config::EngineConfig;
use crate::geometry::distance;
use crate::particle::{GlowPoint, IdGenerator, Star};
use crate::sampler::{MotionState, PointerEvent};
use crate::schedule::{ParticleKind, RemovalSchedule};
use crate::store::ParticleStore;

/// Monotonic store-revision number, bumped on every mutation batch.
pub type StoreRevision = u64;

/// Single logical owner of all trail state. All methods are synchronous and
/// take explicit timestamps; the caller (one event loop) supplies time.
pub struct TrailEngine {
    config: EngineConfig,
    motion: MotionState,
    store: ParticleStore,
    schedule: RemovalSchedule,
    ids: IdGenerator,
    rng: StdRng,
    revision: StoreRevision,
    subscribers: Vec<Sender<StoreRevision>>,
}

impl TrailEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Seeded construction for deterministic palette draws in tests.
    pub fn with_rng_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        Self {
            config,
            motion: MotionState::default(),
            store: ParticleStore::default(),
            schedule: RemovalSchedule::default(),
            ids: IdGenerator::default(),
            rng,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view for the render adapter. Polling this each frame is
    /// fine; `subscribe` exists for adapters that prefer being notified.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn pending_removals(&self) -> usize {
        self.schedule.pending()
    }

    /// Register a render-side subscriber. It receives the new revision
    /// number after every mutation batch; dropped receivers are pruned.
    pub fn subscribe(&mut self) -> Receiver<StoreRevision> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Handle one pointer-move event at `now_ms`. Due removals fire first
    /// so the store is consistent with `now_ms` before anything spawns.
    /// Events without coordinate data (empty touch list) are skipped.
    pub fn pointer_moved(&mut self, event: &PointerEvent, now_ms: u64) {
        let mut changed = self.fire_due_removals(now_ms);

        if let Some(position) = event.position() {
            let glow_origin = self.motion.glow_origin(position);
            if self.motion.star_eligible(position, now_ms, &self.config) {
                self.spawn_star(position, now_ms);
                self.motion.mark_star(position, now_ms);
            }
            self.spawn_glow_trail(glow_origin, position, now_ms);
            self.motion.mark_pointer(position);
            changed = true;
        }

        if changed {
            self.publish();
        }
    }

    /// Advance virtual time: fire every removal due at or before `now_ms`.
    /// Called once per frame tick by the host loop.
    pub fn advance_to(&mut self, now_ms: u64) {
        if self.fire_due_removals(now_ms) {
            self.publish();
        }
    }

    fn spawn_star(&mut self, position: Vec2, now_ms: u64) {
        let star = Star {
            id: self.ids.next_id(),
            position,
            color: self.pick(|c| &c.colors),
            size: self.pick(|c| &c.sizes),
            animation: self.pick(|c| &c.animations),
        };
        trace!(?star.id, x = position.x, y = position.y, "spawn star");
        self.schedule.schedule(
            now_ms + self.config.star_lifetime_ms,
            ParticleKind::Star,
            star.id,
        );
        self.store.push_star(star);
    }

    /// Emit the glow trail for the segment `last -> current`: at least one
    /// point, one per `max_glow_point_spacing` of travel, walking from
    /// `last` but stopping one step short of `current` (the endpoint itself
    /// is never emitted; the next event's segment starts there).
    fn spawn_glow_trail(&mut self, last: Vec2, current: Vec2, now_ms: u64) {
        let d = distance(last, current);
        let quantity = ((d / self.config.max_glow_point_spacing).floor() as u32).max(1);
        let delta = (current - last) / quantity as f32;

        for index in 0..quantity {
            let point = GlowPoint {
                id: self.ids.next_id(),
                position: last + delta * index as f32,
            };
            self.schedule.schedule(
                now_ms + self.config.glow_lifetime_ms,
                ParticleKind::Glow,
                point.id,
            );
            self.store.push_glow_point(point);
        }
        trace!(count = quantity, "spawn glow trail");
    }

    fn fire_due_removals(&mut self, now_ms: u64) -> bool {
        let mut removed_any = false;
        while let Some((kind, id)) = self.schedule.pop_due(now_ms) {
            removed_any |= match kind {
                ParticleKind::Star => self.store.remove_star(id),
                ParticleKind::Glow => self.store.remove_glow_point(id),
            };
        }
        removed_any
    }

    /// Uniform draw from one of the config palettes. Palettes are validated
    /// non-empty at load time; an empty one degrades to an empty value
    /// rather than panicking.
    fn pick(&mut self, palette: fn(&EngineConfig) -> &Vec<String>) -> String {
        let palette = palette(&self.config);
        if palette.is_empty() {
            return String::new();
        }
        palette[self.rng.gen_range(0..palette.len())].clone()
    }

    fn publish(&mut self) {
        self.revision += 1;
        let revision = self.revision;
        self.subscribers
            .retain(|subscriber| subscriber.send(revision).is_ok());
    }
}
