use crate::bodies::{Body, BodyKind};
use crate::core::{SimStats, WorldConfig};

/// Mass stand-in for static bodies so impulse math treats them as immovable
const STATIC_MASS: f32 = 1.0e10;

/// Structural change requested by the resolver, applied by the world after
/// the full pair scan so indices stay valid during it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEvent {
    /// Two Normal bodies touched below the merge speed threshold
    Merge { a: usize, b: usize },

    /// A Merged body was struck above the split speed threshold
    Split { index: usize },
}

/// Detects and resolves contact for the given candidate pairs
///
/// Impulse-based with Baumgarte positional correction. Mutates positions and
/// velocities in place; merge/split requests are returned as events rather
/// than applied, keeping this a pure pair-local pass.
pub fn resolve_collisions(
    bodies: &mut [Body],
    pairs: &[(usize, usize)],
    config: &WorldConfig,
    stats: &mut SimStats,
) -> Vec<ContactEvent> {
    let mut events = Vec::new();
    let restitution = config.restitution;

    for &(i, j) in pairs {
        debug_assert!(i < j);
        let (head, tail) = bodies.split_at_mut(j);
        let a = &mut head[i];
        let b = &mut tail[0];

        if a.is_static() && b.is_static() {
            continue;
        }

        let delta = b.position - a.position;
        let dist_sq = delta.length_squared();
        let min_dist = a.radius + b.radius;
        if dist_sq >= min_dist * min_dist {
            continue;
        }

        let dist = dist_sq.sqrt() + 1.0e-8;
        let normal = delta / dist;

        let ma = if a.is_static() { STATIC_MASS } else { a.mass };
        let mb = if b.is_static() { STATIC_MASS } else { b.mass };

        // Positional correction, distributed by inverse mass
        let penetration = min_dist - dist;
        let correction = (penetration - config.slop).max(0.0) * config.position_correction;
        if !a.is_static() && !b.is_static() {
            a.position -= normal * (correction * (mb / (ma + mb)));
            b.position += normal * (correction * (ma / (ma + mb)));
        } else if !a.is_static() {
            a.position -= normal * correction;
        } else {
            b.position += normal * correction;
        }

        // Relative velocity along the normal; positive means approaching
        let van = a.velocity.dot(&normal);
        let vbn = b.velocity.dot(&normal);
        let rel_vel = van - vbn;
        if rel_vel < 0.0 {
            continue;
        }

        // Slow contact between two plain bodies coalesces instead of
        // bouncing. Still a resolved contact: the merge absorbs the entire
        // relative normal kinetic energy.
        if a.kind == BodyKind::Normal
            && b.kind == BodyKind::Normal
            && !a.is_static()
            && !b.is_static()
            && rel_vel < config.merge_speed_threshold
        {
            let reduced_mass = 1.0 / (1.0 / ma + 1.0 / mb);
            stats.record_collision(0.5 * reduced_mass * rel_vel * rel_vel);
            events.push(ContactEvent::Merge { a: i, b: j });
            continue;
        }

        let impulse = -(1.0 + restitution) * rel_vel / (1.0 / ma + 1.0 / mb);
        if !a.is_static() {
            a.velocity += normal * (impulse / ma);
        }
        if !b.is_static() {
            b.velocity -= normal * (impulse / mb);
        }

        // Normal-direction energy dissipated by the inelastic impulse
        let reduced_mass = 1.0 / (1.0 / ma + 1.0 / mb);
        let energy_lost = 0.5 * reduced_mass * (1.0 - restitution * restitution) * rel_vel * rel_vel;
        stats.record_collision(energy_lost);

        if rel_vel > config.split_speed_threshold {
            if a.kind == BodyKind::Merged {
                events.push(ContactEvent::Split { index: i });
            }
            if b.kind == BodyKind::Merged {
                events.push(ContactEvent::Split { index: j });
            }
        }
    }

    events
}
