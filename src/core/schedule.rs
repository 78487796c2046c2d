//! Frame driver with an explicit, cancellable scheduling handle.

use super::constants::STATS_REPORT_INTERVAL_SEC;
use super::scene::Scene;
use super::stats::{FrameReport, FrameStats};
use super::surface::{Surface, Translate};
use instant::Instant;
use std::time::Duration;

/// Source of "call me on the next display refresh" requests.
pub trait FrameScheduler {
    type Handle: Copy;
    /// Ask for one more tick. `None` if the host refused.
    fn request(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

pub struct RenderLoop<S, T, F>
where
    S: Surface,
    T: Translate,
    F: FrameScheduler,
{
    scene: Scene,
    network: S,
    dust: S,
    container: Option<T>,
    scheduler: F,
    pending: Option<F::Handle>,
    running: bool,
    stats: FrameStats,
}

impl<S, T, F> RenderLoop<S, T, F>
where
    S: Surface,
    T: Translate,
    F: FrameScheduler,
{
    /// Start drawing on the `(network, dust)` layer pair.
    ///
    /// Without both layers nothing is built and no frame is requested.
    pub fn start(
        layers: Option<(S, S)>,
        container: Option<T>,
        scene: Scene,
        scheduler: F,
    ) -> Option<Self> {
        let (mut network, mut dust) = layers?;
        let vp = scene.viewport;
        network.resize(vp.width, vp.height);
        dust.resize(vp.width, vp.height);

        let mut this = Self {
            scene,
            network,
            dust,
            container,
            scheduler,
            pending: None,
            running: true,
            stats: FrameStats::new(Duration::from_secs_f32(STATS_REPORT_INTERVAL_SEC)),
        };
        this.pending = this.scheduler.request();
        if this.pending.is_none() {
            log::warn!("[backdrop] first frame request refused");
        }
        Some(this)
    }

    /// Draw one frame and book the next one.
    pub fn tick(&mut self) {
        self.pending = None;
        if !self.running {
            return;
        }

        let out = self.scene.frame(&mut self.network, &mut self.dust);
        if let Some(c) = self.container.as_mut() {
            c.translate(out.parallax_offset);
        }

        if let Some(report) = self.stats.record(Instant::now(), out.links) {
            log_report(&report);
        }
        self.pending = self.scheduler.request();
    }

    /// Cancel the pending frame; later ticks are no-ops. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.running {
            self.running = false;
            log::info!(
                "[backdrop] stopped after {} frames",
                self.stats.total_frames()
            );
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
        self.network.resize(width, height);
        self.dust.resize(width, height);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.scene.pointer_moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.scene.pointer_left();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn layers(&self) -> (&S, &S) {
        (&self.network, &self.dust)
    }

    #[inline]
    pub fn container(&self) -> Option<&T> {
        self.container.as_ref()
    }

    #[inline]
    pub fn frames_drawn(&self) -> u64 {
        self.stats.total_frames()
    }
}

fn log_report(report: &FrameReport) {
    log::debug!(
        "[backdrop] {} frames, {:.1} fps, {} links",
        report.frames,
        report.fps,
        report.links
    );
}

