mod body;
mod body_kind;
mod color;
pub mod presets;

pub use self::body::{Body, BodyFlags, TRAIL_CAPACITY};
pub use self::body_kind::BodyKind;
pub use self::color::{Rgb, mass_range, color_for_mass, temperature_to_color, render_size};
