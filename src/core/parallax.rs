use super::constants::{PARALLAX_GAIN, PARALLAX_SMOOTHING, PARALLAX_VERTICAL_DAMPING};
use super::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    /// Target offset in px when the pointer sits on a viewport edge (half of
    /// this value in each direction from center).
    pub gain: f32,
    /// First-order low-pass factor applied once per frame, in (0, 1].
    pub smoothing: f32,
    /// Scales the vertical component of the applied transform.
    pub vertical_damping: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            gain: PARALLAX_GAIN,
            smoothing: PARALLAX_SMOOTHING,
            vertical_damping: PARALLAX_VERTICAL_DAMPING,
        }
    }
}

/// Smoothed offset for the foreground container.
///
/// The current offset chases the target geometrically. There is no
/// elapsed-time correction, so the convergence speed follows the display
/// refresh rate.
#[derive(Clone, Debug, Default)]
pub struct Parallax {
    pub params: ParallaxParams,
    pub target: Vec2,
    pub current: Vec2,
}

impl Parallax {
    pub fn new(params: ParallaxParams) -> Self {
        Self {
            params,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
        }
    }

    /// Point the target at the pointer, relative to the viewport center.
    pub fn aim(&mut self, pointer: Vec2, viewport: &Viewport) {
        let gain = self.params.gain;
        self.target = Vec2::new(
            centered_ratio(pointer.x, viewport.width) * gain,
            centered_ratio(pointer.y, viewport.height) * gain,
        );
    }

    /// Return to rest once the pointer has left.
    pub fn rest(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.params.smoothing;
    }

    /// Offset to apply to the container, vertical axis damped.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.current.x, self.current.y * self.params.vertical_damping)
    }
}

/// `pos / extent - 0.5`, or 0 for an empty axis.
#[inline]
fn centered_ratio(pos: f32, extent: u32) -> f32 {
    if extent == 0 {
        return 0.0;
    }
    pos / extent as f32 - 0.5
}

/// CSS transform for a container offset.
pub fn transform_css(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}
