#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of simulated body, determining how it behaves in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// Standard particle
    Normal,

    /// Composite formed by a slow collision of two Normal bodies
    Merged,

    /// Absorbs anything inside its event horizon
    BlackHole,

    /// Emits light, goes supernova at end of life
    Star,

    /// Terrestrial planet, may hold an orbit constraint
    RockyPlanet,

    /// Gas planet, may hold an orbit constraint
    GasGiant,

    /// Small body, typical debris
    Asteroid,

    /// Small icy body that leaves a trail
    Comet,

    /// Dense stellar remnant
    NeutronStar,
}

impl BodyKind {
    /// Returns whether this kind participates in the orbit constraint and
    /// tidal disruption checks
    pub fn is_planet(&self) -> bool {
        matches!(self, BodyKind::RockyPlanet | BodyKind::GasGiant)
    }

    /// Per-kind radius multiplier used to size the rendered point sprite.
    /// Presentation only; the values are load-bearing for visual parity.
    pub fn render_scale(&self) -> f32 {
        match self {
            BodyKind::BlackHole => 500.0,
            BodyKind::NeutronStar => 700.0,
            BodyKind::GasGiant => 800.0,
            BodyKind::Merged => 800.0,
            _ => 600.0,
        }
    }
}

impl Default for BodyKind {
    fn default() -> Self {
        BodyKind::Normal
    }
}
