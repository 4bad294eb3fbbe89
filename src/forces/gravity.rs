use crate::bodies::Body;

/// Accumulates pairwise Newtonian gravity into body velocities
///
/// `F = G * m_a * m_b / d^2`, with `softening` added to the distance before
/// dividing and pairs closer than ~1e-4 skipped entirely. The resulting
/// velocity change is scaled by `damping`, an empirical per-substep factor
/// kept small for numerical stability. Static bodies neither attract nor are
/// attracted. Positions are not touched here; integration happens later in
/// the pipeline.
pub fn apply_gravity(bodies: &mut [Body], g: f32, damping: f32, softening: f32) {
    let n = bodies.len();
    for i in 0..n {
        if bodies[i].is_static() {
            continue;
        }
        for j in 0..n {
            if i == j || bodies[j].is_static() {
                continue;
            }

            let other_position = bodies[j].position;
            let other_mass = bodies[j].mass;

            let body = &mut bodies[i];
            let delta = other_position - body.position;
            let dist_sq = delta.length_squared();
            if dist_sq < 1.0e-8 {
                // Coincident bodies; leave them to the collision resolver
                continue;
            }
            let dist = dist_sq.sqrt() + softening;

            let force = g * body.mass * other_mass / dist_sq;
            let accel = delta * (force / (dist * body.mass));
            body.velocity += accel * damping;
        }
    }
}
