use glam::Vec2;
use rand::Rng;

/// Ranges used when scattering a population across the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedParams {
    /// Each velocity component is drawn from `[-span / 2, span / 2)`.
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
}

/// Moving disc shared by the node and dust layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, seed: &SeedParams) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * seed.speed_span,
            (rng.gen::<f32>() - 0.5) * seed.speed_span,
        );
        let radius = rng.gen::<f32>() * seed.radius_span + seed.radius_min;
        Self { pos, vel, radius }
    }

    /// Integrate one frame, then bounce off the walls of `[0, bounds]`.
    ///
    /// Only the velocity is flipped; the position may overshoot a wall by up
    /// to one frame of travel and comes back on the following steps.
    #[inline]
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.vel.x = reflect(self.pos.x, self.vel.x, bounds.x);
        self.vel.y = reflect(self.pos.y, self.vel.y, bounds.y);
    }
}

/// Flip `vel` if `pos` is past a wall and still heading away from the box.
///
/// A particle left outside by a shrinking viewport keeps its inward velocity
/// instead of flipping back and forth on the wall.
#[inline]
fn reflect(pos: f32, vel: f32, max: f32) -> f32 {
    if (pos < 0.0 && vel < 0.0) || (pos > max && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

pub fn scatter<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bounds: Vec2,
    seed: &SeedParams,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::random(rng, bounds, seed))
        .collect()
}
