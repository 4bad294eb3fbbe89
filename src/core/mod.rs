pub mod world;
pub mod config;
pub mod stats;

pub use self::world::World;
pub use self::config::{WorldConfig, Bounds};
pub use self::stats::SimStats;

/// A unique, never-reused identifier for a body in the world
///
/// Bodies are stored in an ordered list whose indices shift on removal, so
/// cross-body references (orbit targets) hold a `BodyId` instead of a raw
/// index. Looking up a stale id simply fails, it can never alias a body
/// inserted later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// Returns the raw id value
    pub fn raw(&self) -> u32 {
        self.0
    }
}
