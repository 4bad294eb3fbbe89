mod vector;

pub use vector::Vector2;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linearly interpolates between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Wraps an angle into the range [0, 2*PI)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(2.0 * std::f32::consts::PI)
}
