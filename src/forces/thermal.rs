use crate::bodies::Body;

/// Equilibrium temperature of empty space
const BACKGROUND_TEMPERATURE: f32 = 2.7;

/// Relaxation rate toward the target temperature, per second
const COOLING_RATE: f32 = 0.25;

/// Faster relaxation for tidally locked bodies (one face always heated)
const LOCKED_RATE: f32 = 1.0;

/// Runs the once-per-frame radiative temperature update
///
/// Each non-emitting body relaxes toward the strongest influence among the
/// light-emitting bodies, approximated as the emitter's temperature scaled
/// by `radius / distance`, or toward the cosmic background when nothing
/// shines on it. Emitters hold their own temperature.
pub fn update_thermal(bodies: &mut [Body], dt: f32) {
    if dt <= 0.0 {
        return;
    }

    let emitters: Vec<(crate::math::Vector2, f32, f32)> = bodies
        .iter()
        .filter(|b| b.emits_light())
        .map(|b| (b.position, b.radius, b.temperature))
        .collect();

    for body in bodies.iter_mut() {
        if body.emits_light() {
            continue;
        }

        let mut target = BACKGROUND_TEMPERATURE;
        for &(position, radius, temperature) in &emitters {
            let dist = body.position.distance(&position).max(crate::math::EPSILON);
            let influence = temperature * (radius / dist).min(1.0);
            target = target.max(influence);
        }

        let rate = if body.is_tidally_locked() { LOCKED_RATE } else { COOLING_RATE };
        let blend = (rate * dt).min(1.0);
        body.temperature += (target - body.temperature) * blend;
    }
}
