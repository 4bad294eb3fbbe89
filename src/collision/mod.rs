mod spatial_grid;
mod resolver;

pub use self::spatial_grid::SpatialGrid;
pub use self::resolver::{resolve_collisions, ContactEvent};
