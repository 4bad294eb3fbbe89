//! Procedural initial-condition generators
//!
//! Each builder takes an explicit RNG so a seeded `StdRng` reproduces the
//! same layout on every run. Degenerate parameters (zero counts, inverted
//! or non-positive radii) produce zero bodies instead of panicking.

use std::f32::consts::TAU;

use rand::Rng;

use crate::bodies::{presets, Body, BodyKind, Rgb};
use crate::core::{BodyId, World};
use crate::math::Vector2;

/// Speed of a circular orbit of radius `r` around a central mass, matching
/// the constraint solver's convention
fn circular_speed(central_mass: f32, r: f32) -> f32 {
    (0.5 * central_mass.max(0.0) / r.max(1.0e-4)).sqrt()
}

/// Builds a spiral galaxy: a static central black hole plus `arms` spiral
/// arms of `stars_per_arm` small bodies on circular orbits
///
/// Returns the ids of every body created, central hole first. Zero arms or
/// zero stars per arm creates nothing.
pub fn create_galaxy(
    world: &mut World,
    center: Vector2,
    arms: usize,
    stars_per_arm: usize,
    rng: &mut impl Rng,
) -> Vec<BodyId> {
    if arms == 0 || stars_per_arm == 0 {
        return Vec::new();
    }

    let mut created = Vec::with_capacity(arms * stars_per_arm + 1);

    // Arms start outside the hole's event horizon
    let hole_mass = 10.0;
    let mut hole = presets::black_hole(center.x, center.y, hole_mass);
    hole.set_static(true);
    created.push(world.insert_body(hole));

    for arm in 0..arms {
        let base_angle = arm as f32 * TAU / arms as f32;
        for s in 0..stars_per_arm {
            let t = s as f32 / stars_per_arm as f32;
            let radius = 0.12 + t * 0.6 + rng.gen_range(-0.01..0.01);
            let angle = base_angle + t * 4.0 + rng.gen_range(-0.05..0.05);

            let position = center + Vector2::from_angle(angle) * radius;
            let speed = circular_speed(hole_mass, radius);
            let tangent = Vector2::new(-angle.sin(), angle.cos());

            let mass = rng.gen_range(0.5..3.0);
            let mut body = Body::new(position, tangent * speed, 0.004 + mass * 0.001, mass);
            body.color = Rgb::new(
                0.7 + rng.gen_range(0.0..0.3),
                0.7 + rng.gen_range(0.0..0.3),
                0.8 + rng.gen_range(0.0..0.2),
            );
            created.push(world.insert_body(body));
        }
    }

    created
}

/// Builds an annular asteroid belt around `center` between `inner_radius`
/// and `outer_radius`
///
/// Each asteroid gets a tangential velocity for a rough circular orbit about
/// the center. An empty annulus (inner >= outer, or non-positive radii) or a
/// zero count creates nothing.
pub fn create_asteroid_belt(
    world: &mut World,
    center: Vector2,
    inner_radius: f32,
    outer_radius: f32,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<BodyId> {
    if count == 0 || inner_radius <= 0.0 || outer_radius <= inner_radius {
        return Vec::new();
    }

    let mut created = Vec::with_capacity(count);
    // Orbital speeds assume roughly unit central mass; the belt is a dressing
    // around whatever the caller already placed at the center
    let assumed_central_mass = 1.0;

    for _ in 0..count {
        let radius = rng.gen_range(inner_radius..outer_radius);
        let angle = rng.gen_range(0.0..TAU);

        let position = center + Vector2::from_angle(angle) * radius;
        let speed = circular_speed(assumed_central_mass, radius) * rng.gen_range(0.8..1.2);
        let tangent = Vector2::new(-angle.sin(), angle.cos());

        let mut body = Body::new(
            position,
            tangent * speed,
            rng.gen_range(0.003..0.006),
            rng.gen_range(0.01..0.05),
        );
        body.kind = BodyKind::Asteroid;
        let grey = rng.gen_range(0.4..0.6);
        body.color = Rgb::new(grey, grey * 0.95, grey * 0.85);
        body.spin = rng.gen_range(-2.0..2.0);
        created.push(world.insert_body(body));
    }

    created
}

/// Builds a single debris fragment: random direction, speed in [0.5, 1.5]
/// times `base_speed`, finite lifetime. Shared by the scenario builder and
/// the world's internal spawns so the fragment constants stay in one place.
pub(crate) fn debris_fragment(center: Vector2, base_speed: f32, rng: &mut impl Rng) -> Body {
    let angle = rng.gen_range(0.0..TAU);
    let speed = base_speed.max(0.0) * rng.gen_range(0.5..1.5);
    let direction = Vector2::from_angle(angle);

    let mut body = Body::new(center + direction * 0.01, direction * speed, 0.004, 0.02);
    body.kind = BodyKind::Asteroid;
    body.color = Rgb::new(0.55 + rng.gen_range(-0.1..0.1), 0.5, 0.45);
    body.lifetime = Some(rng.gen_range(3.0..8.0));
    body.spin = rng.gen_range(-2.0..2.0);
    body
}

/// Scatters `count` short-lived fragments radially out of `center`
///
/// Each fragment carries a finite lifetime so the field clears itself out.
/// A zero count creates nothing.
pub fn create_debris_field(
    world: &mut World,
    center: Vector2,
    count: usize,
    base_speed: f32,
    rng: &mut impl Rng,
) -> Vec<BodyId> {
    let mut created = Vec::with_capacity(count);

    for _ in 0..count {
        let body = debris_fragment(center, base_speed, rng);
        created.push(world.insert_body(body));
    }

    created
}
