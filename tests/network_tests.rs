// Host-side tests for the proximity network: pointer pull and link drawing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod backdrop;
mod support;

use backdrop::constants::{CONNECTION_DISTANCE, INFLUENCE_RADIUS, LINK_ALPHA_SCALE};
use backdrop::network::{attraction, link_alpha, NetworkParams, NodeField};
use backdrop::particle::Particle;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use support::{still, Recorder};

const BOUNDS: Vec2 = Vec2::new(1000.0, 1000.0);

#[test]
fn attraction_is_zero_on_the_pointer() {
    let p = Vec2::new(120.0, 80.0);
    assert_eq!(attraction(p, p, INFLUENCE_RADIUS, 0.25), Vec2::ZERO);
}

#[test]
fn attraction_is_zero_at_and_beyond_the_radius() {
    let node = Vec2::ZERO;
    assert_eq!(
        attraction(node, Vec2::new(140.0, 0.0), INFLUENCE_RADIUS, 0.25),
        Vec2::ZERO
    );
    assert_eq!(
        attraction(node, Vec2::new(0.0, 300.0), INFLUENCE_RADIUS, 0.25),
        Vec2::ZERO
    );
}

#[test]
fn attraction_pulls_toward_pointer_with_linear_falloff() {
    let node = Vec2::ZERO;
    let pointer = Vec2::new(70.0, 0.0);
    // (140 - 70) / 140 * 0.25 = 0.125 of the 70px gap
    let d = attraction(node, pointer, INFLUENCE_RADIUS, 0.25);
    assert!((d.x - 8.75).abs() < 1e-4, "got {d:?}");
    assert_eq!(d.y, 0.0);

    let near = attraction(node, Vec2::new(0.0, 10.0), INFLUENCE_RADIUS, 0.25);
    let far = attraction(node, Vec2::new(0.0, 130.0), INFLUENCE_RADIUS, 0.25);
    assert!(near.y > 0.0 && far.y > 0.0);
    // Fraction of the gap closed shrinks with distance.
    assert!(near.y / 10.0 > far.y / 130.0);
}

#[test]
fn attraction_never_overshoots_the_pointer() {
    let pointer = Vec2::new(500.0, 500.0);
    for i in 1..140 {
        let node = pointer - Vec2::new(i as f32, 0.0);
        let moved = node + attraction(node, pointer, INFLUENCE_RADIUS, 0.25);
        assert!(moved.x <= pointer.x);
        assert!(moved.distance(pointer) < node.distance(pointer));
    }
}

#[test]
fn link_alpha_just_inside_threshold_is_positive() {
    let d = CONNECTION_DISTANCE - 0.01;
    let alpha = link_alpha(d * d, CONNECTION_DISTANCE).expect("should connect");
    assert!(alpha > 0.0 && alpha < 1e-3);
}

#[test]
fn link_alpha_at_or_past_threshold_is_none() {
    let d = CONNECTION_DISTANCE;
    assert_eq!(link_alpha(d * d, CONNECTION_DISTANCE), None);
    assert_eq!(link_alpha(170.0 * 170.0, CONNECTION_DISTANCE), None);
}

#[test]
fn link_alpha_is_one_for_coincident_nodes() {
    assert_eq!(link_alpha(0.0, CONNECTION_DISTANCE), Some(1.0));
}

#[test]
fn link_alpha_falls_off_linearly() {
    let half = link_alpha(80.0 * 80.0, CONNECTION_DISTANCE).unwrap();
    assert!((half - 0.5).abs() < 1e-6);
}

#[test]
fn step_draws_every_node_and_links_close_pairs_once() {
    let nodes = vec![still(100.0, 100.0), still(200.0, 100.0), still(900.0, 900.0)];
    let mut field = NodeField::new(NetworkParams::default(), nodes);
    let mut surface = Recorder::default();

    let links = field.step(BOUNDS, None, &mut surface);

    assert_eq!(surface.discs(), 3);
    assert_eq!(links, 1);
    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    let (from, to, color) = lines[0];
    assert_eq!(from, Vec2::new(100.0, 100.0));
    assert_eq!(to, Vec2::new(200.0, 100.0));
    let expected = (1.0 - 100.0 / CONNECTION_DISTANCE) * LINK_ALPHA_SCALE;
    assert!((color.a - expected).abs() < 1e-6);
}

#[test]
fn step_orders_disc_before_its_links() {
    let nodes = vec![still(10.0, 10.0), still(20.0, 10.0), still(30.0, 10.0)];
    let mut field = NodeField::new(NetworkParams::default(), nodes);
    let mut surface = Recorder::default();
    let links = field.step(BOUNDS, None, &mut surface);

    assert_eq!(links, 3);
    let kinds: Vec<&str> = surface
        .calls
        .iter()
        .map(|c| match c {
            support::Draw::Disc { .. } => "disc",
            support::Draw::Line { .. } => "line",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["disc", "line", "line", "disc", "line", "disc"]
    );
}

#[test]
fn pointer_nudges_nodes_inside_the_radius_only() {
    let nodes = vec![still(100.0, 100.0), still(600.0, 600.0)];
    let mut field = NodeField::new(NetworkParams::default(), nodes);
    let mut surface = Recorder::default();

    field.step(BOUNDS, Some(Vec2::new(150.0, 100.0)), &mut surface);

    // 50px gap, (140 - 50) / 140 * 0.25 of it closed
    let expected_x = 100.0 + 50.0 * ((140.0 - 50.0) / 140.0 * 0.25);
    let near = field.nodes()[0];
    assert!((near.pos.x - expected_x).abs() < 1e-3, "got {}", near.pos.x);
    assert_eq!(near.pos.y, 100.0);
    assert_eq!(near.vel, Vec2::ZERO, "pull is a nudge, not a force");
    assert_eq!(field.nodes()[1].pos, Vec2::new(600.0, 600.0));
}

#[test]
fn pull_stops_when_pointer_goes_away() {
    let mut field = NodeField::new(
        NetworkParams::default(),
        vec![Particle::new(Vec2::new(100.0, 100.0), Vec2::new(0.1, 0.0), 2.0)],
    );
    let mut surface = Recorder::default();
    field.step(BOUNDS, Some(Vec2::new(150.0, 100.0)), &mut surface);
    let after_pull = field.nodes()[0].pos.x;
    field.step(BOUNDS, None, &mut surface);
    assert!((field.nodes()[0].pos.x - (after_pull + 0.1)).abs() < 1e-4);
}

#[test]
fn link_opacity_stays_in_bounds_over_a_random_run() {
    let mut rng = StdRng::seed_from_u64(11);
    let bounds = Vec2::new(400.0, 300.0);
    let mut field = NodeField::scattered(NetworkParams::default(), &mut rng, 80, bounds);
    let mut surface = Recorder::default();
    let mut seen = 0;
    for _ in 0..200 {
        surface.calls.clear();
        field.step(bounds, Some(Vec2::new(200.0, 150.0)), &mut surface);
        for (from, to, color) in surface.lines() {
            assert!(from.distance(to) < CONNECTION_DISTANCE + 1.0);
            assert!(color.a > 0.0 && color.a <= LINK_ALPHA_SCALE + 1e-6);
            seen += 1;
        }
    }
    assert!(seen > 0, "a dense field should have links");
}

#[test]
fn colors_render_as_css_rgba() {
    let p = NetworkParams::default();
    assert_eq!(p.node_color.css(), "rgba(0,255,255,0.9)");
    assert_eq!(p.link_color.with_alpha(0.5).css(), "rgba(0,255,255,0.5)");
}
