mod gravity;
mod force_field;
mod drag;
mod tidal;
mod thermal;

pub use self::gravity::apply_gravity;
pub use self::force_field::{ForceField, FieldKind, apply_force_fields};
pub use self::drag::apply_air_drag;
pub use self::tidal::{find_tidal_disruptions, TidalDisruption};
pub use self::thermal::update_thermal;
