//! Preset factories for celestial body kinds
//!
//! Deterministic given their inputs; each sets the kind-specific defaults so
//! callers only supply the physically interesting parameters.

use crate::bodies::{Body, BodyFlags, BodyKind, Rgb, temperature_to_color};
use crate::math::Vector2;

/// Scale folded into the Schwarzschild-like event horizon formula so the
/// horizon lands in view-space units
pub const SCHWARZSCHILD_SCALE: f32 = 0.001;

/// Event horizon radius for a black hole of the given mass
pub fn event_horizon_for_mass(mass: f32) -> f32 {
    2.0 * mass * SCHWARZSCHILD_SCALE * 2.0
}

/// Creates a star colored by its surface temperature
pub fn star(x: f32, y: f32, mass: f32, temperature: f32) -> Body {
    let radius = 0.02 + 0.003 * mass.max(0.0).cbrt();
    let mut body = Body::new(Vector2::new(x, y), Vector2::zero(), radius, mass);
    body.kind = BodyKind::Star;
    body.temperature = temperature;
    body.color = temperature_to_color(temperature);
    body.luminosity = mass * 0.1;
    body.density = 1.4;
    body.spin = 0.5;
    body.flags.insert(BodyFlags::EMITS_LIGHT);
    body
}

/// Creates a planet; `gas_giant` selects the kind and density
pub fn planet(x: f32, y: f32, radius: f32, mass: f32, gas_giant: bool) -> Body {
    let mut body = Body::new(Vector2::new(x, y), Vector2::zero(), radius, mass);
    if gas_giant {
        body.kind = BodyKind::GasGiant;
        body.density = 1.3;
        body.color = Rgb::new(0.9, 0.8, 0.5);
    } else {
        body.kind = BodyKind::RockyPlanet;
        body.density = 5.5;
        body.color = Rgb::new(0.4, 0.5, 0.6);
    }
    body.temperature = 288.0;
    body
}

/// Creates a black hole with a Schwarzschild-derived event horizon
pub fn black_hole(x: f32, y: f32, mass: f32) -> Body {
    let radius = 0.01 + mass.max(0.0) * 0.001;
    let mut body = Body::new(Vector2::new(x, y), Vector2::zero(), radius, mass);
    body.kind = BodyKind::BlackHole;
    body.event_horizon = event_horizon_for_mass(mass);
    body.absorption = 1.0;
    body.density = 1000.0;
    body.color = Rgb::new(0.05, 0.0, 0.1);
    body
}

/// Creates a comet with an initial velocity and a finite lifetime
pub fn comet(x: f32, y: f32, vx: f32, vy: f32) -> Body {
    let mut body = Body::new(Vector2::new(x, y), Vector2::new(vx, vy), 0.008, 0.05);
    body.kind = BodyKind::Comet;
    body.color = Rgb::new(0.7, 0.9, 1.0);
    body.density = 0.6;
    body.temperature = 150.0;
    body.lifetime = Some(20.0);
    body
}

/// Creates a neutron star: tiny, dense, fast-spinning, strongly magnetic
pub fn neutron_star(x: f32, y: f32, mass: f32) -> Body {
    let mut body = Body::new(Vector2::new(x, y), Vector2::zero(), 0.006, mass);
    body.kind = BodyKind::NeutronStar;
    body.density = 1.0e6;
    body.temperature = 600_000.0;
    body.magnetic_field = mass * 10.0;
    body.spin = 20.0;
    body.color = Rgb::new(0.8, 0.85, 1.0);
    body.flags.insert(BodyFlags::EMITS_LIGHT);
    body
}
