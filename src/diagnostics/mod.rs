//! Read-only aggregates over the body list, recomputed on demand
//!
//! Used by regression tests and the diagnostics panel, never by the
//! simulation itself. All functions return zero for an empty list and skip
//! bodies with non-finite velocities.

use crate::bodies::Body;
use crate::math::Vector2;

/// Total kinetic energy of all non-static bodies
pub fn kinetic_energy(bodies: &[Body]) -> f32 {
    bodies
        .iter()
        .filter(|b| !b.is_static() && b.mass > 0.0 && b.velocity.is_finite())
        .map(|b| 0.5 * b.mass * b.velocity.length_squared())
        .sum()
}

/// Total momentum vector of all non-static bodies
pub fn momentum(bodies: &[Body]) -> Vector2 {
    let mut total = Vector2::zero();
    for body in bodies {
        if !body.is_static() && body.mass > 0.0 && body.velocity.is_finite() {
            total += body.velocity * body.mass;
        }
    }
    total
}

/// Total gravitational potential energy over unique pairs
///
/// `-sum G * m_i * m_j / d` with the distance floored to avoid blowing up
/// on coincident bodies.
pub fn potential_energy(bodies: &[Body], g: f32) -> f32 {
    let mut total = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let a = &bodies[i];
            let b = &bodies[j];
            if a.mass <= 0.0 || b.mass <= 0.0 {
                continue;
            }
            let dist = a.position.distance(&b.position).max(1.0e-4);
            total -= g * a.mass * b.mass / dist;
        }
    }
    total
}

/// Total angular momentum about the origin of all non-static bodies
pub fn angular_momentum(bodies: &[Body]) -> f32 {
    bodies
        .iter()
        .filter(|b| !b.is_static() && b.mass > 0.0 && b.velocity.is_finite())
        .map(|b| b.mass * b.position.cross(&b.velocity))
        .sum()
}
