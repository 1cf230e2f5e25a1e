//! Stardust core engine: platform-agnostic motion sampling and particle lifecycle
//! for a decorative cursor trail.
//!
//! Pointer movement spawns short-lived star glyphs at distance/time-gated
//! intervals and a denser trail of glow points interpolated along the path.
//! Everything here is synchronous and driven by explicit timestamps, so the
//! whole engine can be tested with virtual time.

pub mod config;
pub mod engine;
pub mod geometry;
pub mod particle;
pub mod sampler;
pub mod store;

mod schedule;

pub use config::{ConfigError, EngineConfig};
pub use engine::{StoreRevision, TrailEngine};
pub use particle::{GlowPoint, ParticleId, Star};
pub use sampler::PointerEvent;
pub use store::ParticleStore;
