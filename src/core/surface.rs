//! Seams between the simulation and whatever draws it.
//!
//! The browser implements these with a 2D canvas context and the container's
//! inline style; tests implement them with recorders.

use glam::Vec2;

/// Straight RGBA colour; channels in 0..=255, alpha in 0..=1 (CSS `rgba()`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r as u8, self.g as u8, self.b as u8, self.a
        )
    }
}

/// One drawing layer.
pub trait Surface {
    /// Wipe the whole layer; the previous frame is never kept.
    fn clear(&mut self, width: u32, height: u32);
    /// Match the backing store to the viewport.
    fn resize(&mut self, width: u32, height: u32);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Something that follows the parallax offset.
pub trait Translate {
    fn translate(&mut self, offset: Vec2);
}
