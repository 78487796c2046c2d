//! The proximity network: drifting nodes, pulled gently toward the pointer and
//! linked to every neighbour closer than the connection distance.
//!
//! Links are found with an all-pairs pass over `i < j`, so the cost is
//! quadratic in the node count; populations stay in the tens. Distances are
//! compared squared and the square root is only taken for pairs that end up
//! linked, where the opacity falloff needs the true distance.

use super::constants::{
    ATTRACTION_STRENGTH, CONNECTION_DISTANCE, INFLUENCE_RADIUS, LINK_ALPHA_SCALE, LINK_COLOR,
    LINK_WIDTH, NODE_COLOR, NODE_RADIUS_MIN, NODE_RADIUS_SPAN, NODE_SPEED_SPAN,
};
use super::particle::{scatter, Particle, SeedParams};
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkParams {
    pub seed: SeedParams,
    pub influence_radius: f32,
    pub attraction_strength: f32,
    pub connection_distance: f32,
    /// Multiplies the linear link falloff.
    pub link_alpha_scale: f32,
    pub link_width: f32,
    pub node_color: Rgba,
    pub link_color: Rgba,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            seed: SeedParams {
                speed_span: NODE_SPEED_SPAN,
                radius_min: NODE_RADIUS_MIN,
                radius_span: NODE_RADIUS_SPAN,
            },
            influence_radius: INFLUENCE_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            connection_distance: CONNECTION_DISTANCE,
            link_alpha_scale: LINK_ALPHA_SCALE,
            link_width: LINK_WIDTH,
            node_color: Rgba::from_array(NODE_COLOR),
            link_color: Rgba::new(LINK_COLOR[0], LINK_COLOR[1], LINK_COLOR[2], 1.0),
        }
    }
}

pub struct NodeField {
    pub params: NetworkParams,
    nodes: Vec<Particle>,
}

impl NodeField {
    pub fn new(params: NetworkParams, nodes: Vec<Particle>) -> Self {
        Self { params, nodes }
    }

    pub fn scattered<R: Rng + ?Sized>(
        params: NetworkParams,
        rng: &mut R,
        count: usize,
        bounds: Vec2,
    ) -> Self {
        let nodes = scatter(rng, count, bounds, &params.seed);
        Self::new(params, nodes)
    }

    #[inline]
    pub fn nodes(&self) -> &[Particle] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advance every node one frame and draw it with its outgoing links.
    ///
    /// Node `i` is moved and drawn before its links to `j > i` are tested, so
    /// a link joins a node's new position to the neighbour's position from
    /// the previous frame. Returns the number of links drawn.
    pub fn step<S: Surface + ?Sized>(
        &mut self,
        bounds: Vec2,
        pointer: Option<Vec2>,
        surface: &mut S,
    ) -> usize {
        let p = self.params;
        let max_dist_sq = p.connection_distance * p.connection_distance;
        let mut links = 0;

        for i in 0..self.nodes.len() {
            let (head, tail) = self.nodes.split_at_mut(i + 1);
            let node = &mut head[i];

            node.advance(bounds);
            if let Some(target) = pointer {
                node.pos += attraction(node.pos, target, p.influence_radius, p.attraction_strength);
            }
            surface.fill_disc(node.pos, node.radius, p.node_color);

            for other in tail.iter() {
                let dist_sq = node.pos.distance_squared(other.pos);
                if dist_sq >= max_dist_sq {
                    continue;
                }
                if let Some(alpha) = link_alpha(dist_sq, p.connection_distance) {
                    let color = p.link_color.with_alpha(alpha * p.link_alpha_scale);
                    surface.stroke_line(node.pos, other.pos, p.link_width, color);
                    links += 1;
                }
            }
        }
        links
    }
}

/// Displacement pulling `node` toward `pointer` for one frame.
///
/// Inside `radius` the node closes `(radius - d) / radius * strength` of the
/// gap, so the pull fades to nothing at the rim. The result scales the gap
/// vector itself, which makes it exactly zero when the node sits on the
/// pointer. Outside the radius there is no pull.
#[inline]
pub fn attraction(node: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let gap = pointer - node;
    let dist_sq = gap.length_squared();
    if radius <= 0.0 || dist_sq >= radius * radius {
        return Vec2::ZERO;
    }
    let dist = dist_sq.sqrt();
    gap * ((radius - dist) / radius * strength)
}

/// Link opacity before dimming: `1 - d / max`, or `None` at or past `max`.
///
/// The returned value is always in `(0, 1]`.
#[inline]
pub fn link_alpha(dist_sq: f32, max_dist: f32) -> Option<f32> {
    if dist_sq >= max_dist * max_dist {
        return None;
    }
    let alpha = 1.0 - dist_sq.sqrt() / max_dist;
    (alpha > 0.0).then_some(alpha)
}
