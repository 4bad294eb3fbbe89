use crate::bodies::{Body, BodyKind};
use crate::math;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An RGB color triple with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Creates a new color
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Blends two colors by the given weights (typically masses)
    pub fn blend_weighted(a: Rgb, wa: f32, b: Rgb, wb: f32) -> Rgb {
        let total = wa + wb;
        if total <= crate::math::EPSILON {
            return a;
        }
        Rgb::new(
            (a.r * wa + b.r * wb) / total,
            (a.g * wa + b.g * wb) / total,
            (a.b * wa + b.b * wb) / total,
        )
    }
}

/// Scans all non-Merged bodies and returns `(min_mass, max_mass)`
///
/// Returns `(1.0, 10.0)` when the list is empty or holds only Merged bodies,
/// so the color mapping always has a usable range.
pub fn mass_range(bodies: &[Body]) -> (f32, f32) {
    let mut min_mass = f32::MAX;
    let mut max_mass = f32::MIN;
    for body in bodies {
        if body.kind == BodyKind::Merged {
            continue;
        }
        min_mass = min_mass.min(body.mass);
        max_mass = max_mass.max(body.mass);
    }
    if min_mass > max_mass {
        (1.0, 10.0)
    } else {
        (min_mass, max_mass)
    }
}

/// Maps a body's mass into a jet-like color ramp
///
/// Merged bodies are fixed cyan; others map `log10(mass)` linearly into the
/// `[min_mass, max_mass]` log-space, clamped to [0, 1], then through a
/// 5-segment piecewise-linear ramp with breakpoints at 0.25, 0.5, 0.65, 0.7.
pub fn color_for_mass(body: &Body, min_mass: f32, max_mass: f32) -> Rgb {
    if body.kind == BodyKind::Merged {
        return Rgb::new(0.2, 0.8, 1.0);
    }

    // Guard the log against non-positive masses and a degenerate range
    let mass = body.mass.max(crate::math::EPSILON);
    let lo = min_mass.max(crate::math::EPSILON).log10();
    let hi = max_mass.max(crate::math::EPSILON).log10();
    let span = hi - lo;
    let norm = if span.abs() < crate::math::EPSILON {
        0.5
    } else {
        math::clamp((mass.log10() - lo) / span, 0.0, 1.0)
    };

    if norm < 0.25 {
        let t = norm / 0.25;
        Rgb::new(0.9, 0.9 * t + 0.1 * (1.0 - t), 1.0)
    } else if norm < 0.5 {
        let t = (norm - 0.25) / 0.25;
        Rgb::new(1.0, 1.0, 1.0 - t)
    } else if norm < 0.65 {
        let t = (norm - 0.5) / 0.15;
        Rgb::new(1.0, 1.0 - t, 0.0)
    } else if norm < 0.7 {
        let t = (norm - 0.65) / 0.05;
        Rgb::new(1.0, 0.85 * (1.0 - t), 0.0)
    } else {
        Rgb::new(1.0, 0.0, 0.0)
    }
}

/// Approximates blackbody color from a surface temperature in kelvin
///
/// Four bands: red dwarf below 3500 K, orange-yellow below 5500 K,
/// yellow-white below 7500 K, white-blue beyond. Linear within each band.
pub fn temperature_to_color(kelvin: f32) -> Rgb {
    let k = kelvin.max(0.0);
    if k < 3500.0 {
        let t = k / 3500.0;
        Rgb::new(1.0, 0.2 + 0.3 * t, 0.1)
    } else if k < 5500.0 {
        let t = (k - 3500.0) / 2000.0;
        Rgb::new(1.0, 0.5 + 0.4 * t, 0.1 + 0.4 * t)
    } else if k < 7500.0 {
        let t = (k - 5500.0) / 2000.0;
        Rgb::new(1.0, 0.9 + 0.1 * t, 0.5 + 0.4 * t)
    } else {
        // Hotter stars trend toward blue; saturate around 20000 K
        let t = math::clamp((k - 7500.0) / 12500.0, 0.0, 1.0);
        Rgb::new(1.0 - 0.3 * t, 1.0 - 0.15 * t, 0.9 + 0.1 * t)
    }
}

/// Returns the rendered point size for a body
pub fn render_size(body: &Body) -> f32 {
    body.radius * body.kind.render_scale()
}
