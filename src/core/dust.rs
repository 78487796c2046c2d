use super::constants::{DUST_COLOR, DUST_RADIUS_MIN, DUST_RADIUS_SPAN, DUST_SPEED_SPAN};
use super::particle::{scatter, Particle, SeedParams};
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParams {
    pub seed: SeedParams,
    pub color: Rgba,
}

impl Default for DustParams {
    fn default() -> Self {
        Self {
            seed: SeedParams {
                speed_span: DUST_SPEED_SPAN,
                radius_min: DUST_RADIUS_MIN,
                radius_span: DUST_RADIUS_SPAN,
            },
            color: Rgba::from_array(DUST_COLOR),
        }
    }
}

/// Ambient specks on the back layer. They ignore the pointer and each other.
pub struct DustField {
    pub params: DustParams,
    particles: Vec<Particle>,
}

impl DustField {
    pub fn new(params: DustParams, particles: Vec<Particle>) -> Self {
        Self { params, particles }
    }

    pub fn scattered<R: Rng + ?Sized>(
        params: DustParams,
        rng: &mut R,
        count: usize,
        bounds: Vec2,
    ) -> Self {
        let particles = scatter(rng, count, bounds, &params.seed);
        Self::new(params, particles)
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn step<S: Surface + ?Sized>(&mut self, bounds: Vec2, surface: &mut S) {
        let color = self.params.color;
        for speck in &mut self.particles {
            speck.advance(bounds);
            surface.fill_disc(speck.pos, speck.radius, color);
        }
    }
}
