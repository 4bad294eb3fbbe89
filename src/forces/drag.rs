use crate::bodies::Body;

/// Applies quadratic air drag opposing each body's velocity
///
/// Deceleration is `coefficient * v^2 * radius / mass`, so large light
/// bodies slow fastest. A no-op unless the coefficient is positive; never
/// reverses a body's direction of travel.
pub fn apply_air_drag(bodies: &mut [Body], coefficient: f32, subdt: f32) {
    if coefficient <= 0.0 {
        return;
    }
    for body in bodies.iter_mut() {
        if body.is_static() || body.mass <= 0.0 {
            continue;
        }
        let speed = body.speed();
        if speed < crate::math::EPSILON {
            continue;
        }
        let decel = coefficient * speed * speed * body.radius / body.mass;
        let scale = (speed - decel * subdt).max(0.0) / speed;
        body.velocity *= scale;
    }
}
