use bitflags::bitflags;

use crate::bodies::{BodyKind, Rgb};
use crate::core::BodyId;
use crate::math::Vector2;

/// Maximum number of positions kept in a body's trail buffer
pub const TRAIL_CAPACITY: usize = 64;

bitflags! {
    /// Boolean state carried by every body
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BodyFlags: u32 {
        /// Exempt from forces and integration; still a passive collision
        /// and absorption target
        const STATIC = 1 << 0;

        /// Spin angle follows the orbit angle instead of advancing freely
        const TIDALLY_LOCKED = 1 << 1;

        /// Emits light; heats nearby bodies during the thermal pass
        const EMITS_LIGHT = 1 << 2;

        /// Lifetime has expired; scheduled for removal or supernova
        const DECAYING = 1 << 3;
    }
}

/// A simulated physical body
///
/// Flat, data-oriented struct with a `BodyKind` discriminant; kind-specific
/// fields are simply unused for kinds they don't apply to.
#[derive(Debug, Clone)]
pub struct Body {
    /// Stable identifier, assigned when the body enters a world
    pub id: BodyId,

    /// Position in world space
    pub position: Vector2,

    /// Linear velocity
    pub velocity: Vector2,

    /// Physical and visual radius
    pub radius: f32,

    /// Mass; must be positive for non-degenerate bodies
    pub mass: f32,

    /// Electric charge, carried for future field effects
    pub charge: f32,

    /// Body kind discriminant
    pub kind: BodyKind,

    /// Render color
    pub color: Rgb,

    /// Boolean state flags
    pub flags: BodyFlags,

    /// Constituent bodies of a Merged body, kept for later fragmentation
    pub components: Vec<Body>,

    /// BlackHole: absorption radius, derived from mass
    pub event_horizon: f32,

    /// Star: brightness
    pub luminosity: f32,

    /// BlackHole: absorption strength
    pub absorption: f32,

    /// Orbit constraint: distance to the orbit target
    pub orbit_radius: f32,

    /// Orbit constraint: current angle around the target
    pub orbit_angle: f32,

    /// Orbit constraint: id of the body being orbited
    pub orbit_target: Option<BodyId>,

    /// Visual angular speed in radians per second
    pub spin: f32,

    /// Current visual orientation in [0, 2*PI)
    pub spin_angle: f32,

    /// Surface temperature in kelvin
    pub temperature: f32,

    /// Mean density, used for the Roche-limit check
    pub density: f32,

    /// Magnetic field strength (neutron stars)
    pub magnetic_field: f32,

    /// Seconds of life before the body decays; None means immortal
    pub lifetime: Option<f32>,

    /// Seconds lived so far
    pub age: f32,

    /// Per-body restitution. Carried for presets and callers; the collision
    /// resolver reads the global config value instead.
    pub restitution: f32,

    /// Bounded position history for trail rendering (comets)
    pub trail: Vec<Vector2>,
}

impl Body {
    /// Creates a plain dynamic body with default derived fields
    pub fn new(position: Vector2, velocity: Vector2, radius: f32, mass: f32) -> Self {
        Self {
            id: BodyId(0),
            position,
            velocity,
            radius,
            mass,
            charge: 0.0,
            kind: BodyKind::Normal,
            color: Rgb::new(1.0, 0.0, 0.0),
            flags: BodyFlags::empty(),
            components: Vec::new(),
            event_horizon: 0.0,
            luminosity: 0.0,
            absorption: 0.0,
            orbit_radius: 0.0,
            orbit_angle: 0.0,
            orbit_target: None,
            spin: 0.0,
            spin_angle: 0.0,
            temperature: 273.0,
            density: 3.0,
            magnetic_field: 0.0,
            lifetime: None,
            age: 0.0,
            restitution: 0.95,
            trail: Vec::new(),
        }
    }

    /// Returns whether the body is static
    pub fn is_static(&self) -> bool {
        self.flags.contains(BodyFlags::STATIC)
    }

    /// Sets whether the body is static
    pub fn set_static(&mut self, is_static: bool) {
        self.flags.set(BodyFlags::STATIC, is_static);
    }

    /// Returns whether the body's lifetime has expired
    pub fn is_decaying(&self) -> bool {
        self.flags.contains(BodyFlags::DECAYING)
    }

    /// Returns whether the body emits light
    pub fn emits_light(&self) -> bool {
        self.flags.contains(BodyFlags::EMITS_LIGHT)
    }

    /// Returns whether the body is tidally locked to its orbit target
    pub fn is_tidally_locked(&self) -> bool {
        self.flags.contains(BodyFlags::TIDALLY_LOCKED)
    }

    /// Returns the current speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Returns the body's kinetic energy, zero for static bodies
    pub fn kinetic_energy(&self) -> f32 {
        if self.is_static() || !self.velocity.is_finite() {
            return 0.0;
        }
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Appends the current position to the trail, dropping the oldest entry
    /// once the buffer is full
    pub fn push_trail(&mut self) {
        if self.trail.len() >= TRAIL_CAPACITY {
            self.trail.remove(0);
        }
        self.trail.push(self.position);
    }
}
