use instant::Instant;
use std::time::Duration;

/// Frame-rate summary for one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub fps: f32,
    pub links: usize,
}

/// Counts frames and emits a report once per interval.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    window_frames: u32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            window_frames: 0,
            total_frames: 0,
        }
    }

    #[inline]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Record a finished frame; returns a report when the window closes.
    pub fn record(&mut self, now: Instant, links: usize) -> Option<FrameReport> {
        self.total_frames += 1;
        let start = *self.window_start.get_or_insert(now);
        self.window_frames += 1;

        if now <= start {
            return None;
        }
        let elapsed = now.duration_since(start);
        if elapsed < self.interval {
            return None;
        }
        let report = FrameReport {
            frames: self.window_frames,
            fps: self.window_frames as f32 / elapsed.as_secs_f32(),
            links,
        };
        self.window_start = Some(now);
        self.window_frames = 0;
        Some(report)
    }
}
