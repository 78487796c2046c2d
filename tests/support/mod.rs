// Recording stand-ins for the browser side of the core's seams.

use crate::backdrop::particle::Particle;
use crate::backdrop::schedule::FrameScheduler;
use crate::backdrop::surface::{Rgba, Surface, Translate};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear(u32, u32),
    Resize(u32, u32),
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Draw>,
}

impl Recorder {
    pub fn discs(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Draw::Disc { .. }))
            .count()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Line { from, to, color, .. } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Draw::Clear(..)))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: u32, height: u32) {
        self.calls.push(Draw::Clear(width, height));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(Draw::Resize(width, height));
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Draw::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Draw::Line {
            from,
            to,
            width,
            color,
        });
    }
}

#[derive(Debug, Default)]
pub struct Follower {
    pub offsets: Vec<Vec2>,
}

impl Translate for Follower {
    fn translate(&mut self, offset: Vec2) {
        self.offsets.push(offset);
    }
}

/// Hands out increasing handles and remembers what was cancelled.
#[derive(Clone, Debug, Default)]
pub struct CountingScheduler {
    pub requested: Rc<Cell<u32>>,
    pub cancelled: Rc<RefCell<Vec<u32>>>,
}

impl FrameScheduler for CountingScheduler {
    type Handle = u32;

    fn request(&mut self) -> Option<u32> {
        let n = self.requested.get() + 1;
        self.requested.set(n);
        Some(n)
    }

    fn cancel(&mut self, handle: u32) {
        self.cancelled.borrow_mut().push(handle);
    }
}

pub fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
}
