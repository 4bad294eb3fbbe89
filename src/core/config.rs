#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned boundary box of the simulation area
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    /// Creates a new boundary box
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Returns the horizontal extent of the box
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the vertical extent of the box
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Returns whether the point lies inside the box
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }
}

impl Default for Bounds {
    fn default() -> Self {
        // Normalized device coordinates, matching the renderer's view space
        Self::new(-1.0, 1.0, -1.0, 1.0)
    }
}

/// Configuration parameters for the simulation world
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Uniform gravity bias applied along -y (0 disables it)
    pub gravity_bias: f32,

    /// The boundary box bodies bounce against
    pub bounds: Bounds,

    /// Gravitational constant for pairwise attraction
    pub gravitational_constant: f32,

    /// Empirical damping factor applied to gravity velocity updates per
    /// substep. A tuning knob for numerical stability, not a physical law.
    pub gravity_damping: f32,

    /// Softening added to pair distances to avoid singularities
    pub softening: f32,

    /// Linear friction: speed reduction per second, never reverses a body's
    /// direction. Off by default; even small rates swamp the damped gravity
    /// velocity updates and freeze cold-start systems.
    pub friction: f32,

    /// Quadratic air drag coefficient (0 disables drag)
    pub drag_coefficient: f32,

    /// Global coefficient of restitution used by the collision resolver.
    /// Authoritative over the per-body `restitution` field.
    pub restitution: f32,

    /// Baumgarte positional correction factor
    pub position_correction: f32,

    /// Penetration slop tolerated before positional correction kicks in
    pub slop: f32,

    /// Fraction of normal velocity retained after a wall bounce
    pub wall_damping: f32,

    /// Number of rows in the collision grid
    pub grid_rows: usize,

    /// Number of columns in the collision grid
    pub grid_cols: usize,

    /// Time-warp factor applied to every `step(dt)` call
    pub time_scale: f32,

    /// When enabled, speeds are capped at `max_speed`
    pub relativistic_effects: bool,

    /// Speed cap used when relativistic effects are enabled
    pub max_speed: f32,

    /// Reject `add_body` candidates that overlap an existing body
    pub strict_spawn_overlap: bool,

    /// Approach speed below which two Normal bodies merge on contact
    pub merge_speed_threshold: f32,

    /// Impact speed above which a Merged body fragments
    pub split_speed_threshold: f32,

    /// Seed for the world's internal RNG (debris spray, supernova scatter)
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_bias: 0.0,
            bounds: Bounds::default(),
            gravitational_constant: 0.01,
            gravity_damping: 0.001,
            softening: 1.0e-6,
            friction: 0.0,
            drag_coefficient: 0.0,
            restitution: 0.95,
            position_correction: 0.2,
            slop: 1.0e-4,
            wall_damping: 0.2,
            grid_rows: 20,
            grid_cols: 20,
            time_scale: 1.0,
            relativistic_effects: false,
            max_speed: 2.0,
            strict_spawn_overlap: true,
            merge_speed_threshold: 0.05,
            split_speed_threshold: 0.6,
            seed: 0,
        }
    }
}
