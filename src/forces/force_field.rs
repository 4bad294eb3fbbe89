use std::fmt;

use crate::bodies::Body;
use crate::math::Vector2;

/// Type alias for the custom field callback
pub type FieldFn = Box<dyn Fn(Vector2) -> Vector2 + Send + Sync>;

/// The kind of a force field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Pushes along the radial unit vector from the center
    Radial,

    /// Applies a constant-direction force regardless of body position
    Directional,

    /// Tangential swirl with a small inward pull
    Vortex,

    /// Delegates to an injected callback
    Custom,
}

/// A localized force field affecting non-static bodies inside its radius
///
/// Influence falls off linearly with distance from the center and is zero
/// outside `radius`.
pub struct ForceField {
    /// The field kind
    pub kind: FieldKind,

    /// Center of the field
    pub center: Vector2,

    /// Signed strength; negative radial fields pull inward
    pub strength: f32,

    /// Radius of influence
    pub radius: f32,

    /// Direction angle in radians, used by directional fields
    pub angle: f32,

    /// Inactive fields are skipped without being removed
    pub active: bool,

    /// Callback for custom fields; position in, acceleration out
    custom_fn: Option<FieldFn>,
}

impl ForceField {
    /// Creates a radial field
    pub fn radial(center: Vector2, strength: f32, radius: f32) -> Self {
        Self {
            kind: FieldKind::Radial,
            center,
            strength,
            radius: radius.max(0.0),
            angle: 0.0,
            active: true,
            custom_fn: None,
        }
    }

    /// Creates a directional field pushing along `angle`
    pub fn directional(center: Vector2, strength: f32, radius: f32, angle: f32) -> Self {
        Self {
            kind: FieldKind::Directional,
            center,
            strength,
            radius: radius.max(0.0),
            angle,
            active: true,
            custom_fn: None,
        }
    }

    /// Creates a vortex field swirling counter-clockwise for positive strength
    pub fn vortex(center: Vector2, strength: f32, radius: f32) -> Self {
        Self {
            kind: FieldKind::Vortex,
            center,
            strength,
            radius: radius.max(0.0),
            angle: 0.0,
            active: true,
            custom_fn: None,
        }
    }

    /// Creates a custom field evaluating `f` at each affected body's position
    pub fn custom(
        center: Vector2,
        radius: f32,
        f: impl Fn(Vector2) -> Vector2 + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: FieldKind::Custom,
            center,
            strength: 1.0,
            radius: radius.max(0.0),
            angle: 0.0,
            active: true,
            custom_fn: Some(Box::new(f)),
        }
    }

    /// Acceleration contributed at `position`, zero outside the radius
    pub fn acceleration_at(&self, position: Vector2) -> Vector2 {
        if !self.active || self.radius <= 0.0 {
            return Vector2::zero();
        }

        let offset = position - self.center;
        let dist = offset.length();
        if dist > self.radius {
            return Vector2::zero();
        }

        let falloff = 1.0 - dist / self.radius;

        match self.kind {
            FieldKind::Radial => {
                if dist < crate::math::EPSILON {
                    return Vector2::zero();
                }
                (offset / dist) * (self.strength * falloff)
            }
            FieldKind::Directional => Vector2::from_angle(self.angle) * (self.strength * falloff),
            FieldKind::Vortex => {
                if dist < crate::math::EPSILON {
                    return Vector2::zero();
                }
                let radial = offset / dist;
                let tangent = radial.perp();
                (tangent - radial * 0.3) * (self.strength * falloff)
            }
            FieldKind::Custom => match &self.custom_fn {
                Some(f) => f(position) * falloff,
                None => Vector2::zero(),
            },
        }
    }
}

impl fmt::Debug for ForceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForceField")
            .field("kind", &self.kind)
            .field("center", &self.center)
            .field("strength", &self.strength)
            .field("radius", &self.radius)
            .field("angle", &self.angle)
            .field("active", &self.active)
            .finish()
    }
}

/// Accumulates all active fields into body velocities for one substep
pub fn apply_force_fields(bodies: &mut [Body], fields: &[ForceField], subdt: f32) {
    if fields.is_empty() {
        return;
    }
    for body in bodies.iter_mut() {
        if body.is_static() {
            continue;
        }
        for field in fields {
            let accel = field.acceleration_at(body.position);
            if !accel.is_zero() {
                body.velocity += accel * subdt;
            }
        }
    }
}
