use super::constants::{
    DUST_COUNT_NARROW, DUST_COUNT_WIDE, NARROW_BREAKPOINT_PX, NODE_COUNT_NARROW, NODE_COUNT_WIDE,
};
use glam::Vec2;

/// Drawable area shared by every layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Upper corner of the simulation box; the lower corner is the origin.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// True when `pos` lies in `[0, width] x [0, height]`.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        let b = self.bounds();
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= b.x && pos.y <= b.y
    }

    #[inline]
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::for_width(self.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Narrow,
    Wide,
}

impl DeviceClass {
    pub fn for_width(width: u32) -> Self {
        if width < NARROW_BREAKPOINT_PX {
            DeviceClass::Narrow
        } else {
            DeviceClass::Wide
        }
    }
}

/// Fixed field sizes, decided once from the device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Population {
    pub nodes: usize,
    pub dust: usize,
}

impl Population {
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Narrow => Self {
                nodes: NODE_COUNT_NARROW,
                dust: DUST_COUNT_NARROW,
            },
            DeviceClass::Wide => Self {
                nodes: NODE_COUNT_WIDE,
                dust: DUST_COUNT_WIDE,
            },
        }
    }
}
