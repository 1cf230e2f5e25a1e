//! Collaborator boundary traits so `stardust-core` stays host-agnostic.

use crossbeam_channel::Sender;
use stardust_core::{GlowPoint, PointerEvent, Star};
use tracing::warn;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Source of pointer-move events from the host environment (OS hook,
/// window event pump, or a synthetic generator). Events are delivered over
/// the channel handed to `start`.
pub trait PointerSource: Send + Sync {
    fn start(&mut self, sink: Sender<PointerEvent>) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
}

/// Render adapter: consumes the live particle sequences once per tick and
/// paints them however it likes. The engine never calls back into it.
pub trait RenderSurface: Send + Sync {
    fn render_frame(&mut self, stars: &[Star], glow_points: &[GlowPoint]) -> Result<()>;
}

/// Scoped acquisition of a pointer source: started on construction and
/// guaranteed stopped on drop, however the session ends.
pub struct PointerSession<S: PointerSource> {
    source: S,
}

impl<S: PointerSource> PointerSession<S> {
    pub fn start(mut source: S, sink: Sender<PointerEvent>) -> Result<Self> {
        source.start(sink)?;
        Ok(Self { source })
    }
}

impl<S: PointerSource> Drop for PointerSession<S> {
    fn drop(&mut self) {
        if let Err(err) = self.source.stop() {
            warn!("pointer source failed to stop cleanly: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FlagSource {
        running: Arc<AtomicBool>,
    }

    impl PointerSource for FlagSource {
        fn start(&mut self, _sink: Sender<PointerEvent>) -> Result<()> {
            self.running.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.running.store(false, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn session_stops_source_on_drop() {
        let running = Arc::new(AtomicBool::new(false));
        let (sink, _events) = crossbeam_channel::unbounded();
        let session = PointerSession::start(
            FlagSource {
                running: Arc::clone(&running),
            },
            sink,
        )
        .unwrap();
        assert!(running.load(Ordering::SeqCst));

        drop(session);
        assert!(!running.load(Ordering::SeqCst));
    }
}
