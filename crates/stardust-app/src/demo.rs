//! Demo wiring: a synthetic pointer source and a logging render surface
//! around the engine's event loop. Real hosts swap in their own
//! `PointerSource` and `RenderSurface`; the loop stays the same.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{select, tick, Sender};
use tracing::{debug, info};

use stardust_core::{EngineConfig, GlowPoint, PointerEvent, Star, TrailEngine};
use stardust_platform::{PointerSession, PointerSource, RenderSurface, Result};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const EVENT_INTERVAL: Duration = Duration::from_millis(8);
const DEMO_DURATION: Duration = Duration::from_secs(6);

pub fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_toml_path(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = TrailEngine::new(config);
    let revisions = engine.subscribe();

    let (event_sender, event_receiver) = crossbeam_channel::unbounded();
    let session = PointerSession::start(SweepSource::default(), event_sender)?;
    let mut surface = LogSurface::default();

    let started = Instant::now();
    let frames = tick(FRAME_INTERVAL);
    let mut last_summary = Instant::now();

    while started.elapsed() < DEMO_DURATION {
        select! {
            recv(event_receiver) -> event => {
                if let Ok(event) = event {
                    engine.pointer_moved(&event, now_ms(started));
                }
            }
            recv(frames) -> _ => {
                engine.advance_to(now_ms(started));
                if revisions.try_iter().last().is_some() {
                    let store = engine.store();
                    surface.render_frame(store.stars(), store.glow_points())?;
                }
                if last_summary.elapsed() >= Duration::from_secs(1) {
                    info!(
                        stars = engine.store().stars().len(),
                        glow_points = engine.store().glow_points().len(),
                        pending_removals = engine.pending_removals(),
                        "trail status"
                    );
                    last_summary = Instant::now();
                }
            }
        }
    }

    // Detach the pointer listener before draining what remains.
    drop(session);
    engine.advance_to(now_ms(started) + engine.config().star_lifetime_ms);
    info!("Stardust demo finished");
    Ok(())
}

fn now_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Synthetic pointer source: a worker thread sweeping a Lissajous-style
/// path across a virtual 1920x1080 screen.
#[derive(Default)]
struct SweepSource {
    stop_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl PointerSource for SweepSource {
    fn start(&mut self, sink: Sender<PointerEvent>) -> Result<()> {
        let stop_flag = Arc::clone(&self.stop_flag);
        self.worker = Some(std::thread::spawn(move || {
            let mut t: f32 = 0.0;
            while !stop_flag.load(Ordering::Relaxed) {
                let x = 960.0 + 600.0 * (t * 0.9).cos();
                let y = 540.0 + 320.0 * (t * 1.3).sin();
                if sink.send(PointerEvent::mouse(x, y)).is_err() {
                    break;
                }
                t += 0.05;
                std::thread::sleep(EVENT_INTERVAL);
            }
        }));
        info!("synthetic pointer source started");
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        info!("synthetic pointer source stopped");
        Ok(())
    }
}

/// Render surface that just logs live counts whenever they change. A real
/// adapter would paint glyphs at each star's position with its color, size
/// and animation, and a glow mark at each glow point.
#[derive(Default)]
struct LogSurface {
    last_counts: (usize, usize),
}

impl RenderSurface for LogSurface {
    fn render_frame(&mut self, stars: &[Star], glow_points: &[GlowPoint]) -> Result<()> {
        let counts = (stars.len(), glow_points.len());
        if counts != self.last_counts {
            debug!(stars = counts.0, glow_points = counts.1, "render frame");
            self.last_counts = counts;
        }
        Ok(())
    }
}
