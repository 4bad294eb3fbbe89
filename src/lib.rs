pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod forces;
pub mod diagnostics;
pub mod scenarios;

/// Re-export common types for easier usage
pub use crate::core::{World, WorldConfig, Bounds, SimStats, BodyId};
pub use crate::bodies::{Body, BodyKind, BodyFlags, Rgb};
pub use crate::forces::{ForceField, FieldKind};
pub use crate::math::Vector2;

/// Error types for the simulation engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum EngineError {
        #[error("Body with id {0:?} not found")]
        BodyNotFound(crate::core::BodyId),

        #[error("Force field index {0} out of range")]
        FieldIndexOutOfRange(usize),
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, error::EngineError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
