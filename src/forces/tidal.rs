use crate::bodies::Body;
use crate::math::Vector2;

/// A planet scheduled for tidal disruption
#[derive(Debug, Clone, Copy)]
pub struct TidalDisruption {
    /// Index of the disrupted planet in the body list
    pub index: usize,

    /// Where the debris field should spawn
    pub position: Vector2,

    /// Mass of the disrupted planet; below 0.1 it vanishes without debris
    pub mass: f32,
}

/// Finds planets inside the Roche limit of a much more massive neighbor
///
/// For each planet-kind body the nearest body at least 5x more massive is
/// located; if the separation is below the tidal radius
/// `2.44 * R * (rho_M / rho_p)^(1/3)` the planet is disrupted. Read-only
/// scan; the world applies the removals and debris spawns afterwards.
pub fn find_tidal_disruptions(bodies: &[Body]) -> Vec<TidalDisruption> {
    let mut disruptions = Vec::new();

    for (i, planet) in bodies.iter().enumerate() {
        if !planet.kind.is_planet() {
            continue;
        }

        let mut nearest: Option<(usize, f32)> = None;
        for (j, other) in bodies.iter().enumerate() {
            if i == j || other.mass < 5.0 * planet.mass {
                continue;
            }
            let dist = planet.position.distance(&other.position);
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((j, dist)),
            }
        }

        if let Some((j, dist)) = nearest {
            let massive = &bodies[j];
            let density_ratio = massive.density / planet.density.max(crate::math::EPSILON);
            let tidal_radius = 2.44 * massive.radius * density_ratio.cbrt();
            if dist < tidal_radius {
                disruptions.push(TidalDisruption {
                    index: i,
                    position: planet.position,
                    mass: planet.mass,
                });
            }
        }
    }

    disruptions
}
