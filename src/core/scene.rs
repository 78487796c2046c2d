//! Simulation context: everything one frame reads or mutates, owned in one
//! place and handed to each layer's step.

use super::dust::{DustField, DustParams};
use super::network::{NetworkParams, NodeField};
use super::parallax::{Parallax, ParallaxParams};
use super::pointer::PointerTracker;
use super::surface::Surface;
use super::viewport::{Population, Viewport};
use glam::Vec2;
use rand::Rng;

/// Tunables for a whole scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimConfig {
    pub network: NetworkParams,
    pub dust: DustParams,
    pub parallax: ParallaxParams,
}

/// What a single frame produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub parallax_offset: Vec2,
    pub links: usize,
}

pub struct Scene {
    pub viewport: Viewport,
    pub pointer: PointerTracker,
    pub parallax: Parallax,
    pub nodes: NodeField,
    pub dust: DustField,
    population: Population,
}

impl Scene {
    /// Scatter both fields over `viewport`, sized by its device class.
    ///
    /// The population is decided here once; later resizes keep it.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: SimConfig, rng: &mut R) -> Self {
        let population = Population::for_class(viewport.device_class());
        let bounds = viewport.bounds();
        Self {
            viewport,
            pointer: PointerTracker::default(),
            parallax: Parallax::new(config.parallax),
            nodes: NodeField::scattered(config.network, rng, population.nodes, bounds),
            dust: DustField::scattered(config.dust, rng, population.dust, bounds),
            population,
        }
    }

    /// Assemble a scene from prepared fields.
    pub fn from_parts(
        viewport: Viewport,
        parallax: ParallaxParams,
        nodes: NodeField,
        dust: DustField,
    ) -> Self {
        let population = Population {
            nodes: nodes.len(),
            dust: dust.len(),
        };
        Self {
            viewport,
            pointer: PointerTracker::default(),
            parallax: Parallax::new(parallax),
            nodes,
            dust,
            population,
        }
    }

    #[inline]
    pub fn population(&self) -> Population {
        self.population
    }

    /// Resize the viewport. A pointer left outside the new bounds is dropped,
    /// otherwise it would keep pulling nearby nodes out of the box.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        match self.pointer.position() {
            Some(pos) if self.viewport.contains(pos) => self.parallax.aim(pos, &self.viewport),
            Some(_) => self.pointer_left(),
            None => {}
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
        self.parallax.aim(Vec2::new(x, y), &self.viewport);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
        self.parallax.rest();
    }

    /// Run one frame: clear, parallax, nodes with links, dust.
    pub fn frame<N, D>(&mut self, network: &mut N, dust: &mut D) -> FrameOutput
    where
        N: Surface + ?Sized,
        D: Surface + ?Sized,
    {
        let Viewport { width, height } = self.viewport;
        network.clear(width, height);
        dust.clear(width, height);

        self.parallax.step();

        let bounds = self.viewport.bounds();
        let links = self.nodes.step(bounds, self.pointer.position(), network);
        self.dust.step(bounds, dust);

        FrameOutput {
            parallax_offset: self.parallax.offset(),
            links,
        }
    }
}
