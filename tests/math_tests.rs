use nbody_engine::math::{self, Vector2};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, 4.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 4.0);
    assert_eq!(sum.y, 6.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 2.0);
    assert_eq!(diff.y, 2.0);

    // Scalar multiplication, both orders
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    let scaled = 2.0 * v1;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 3.0 + 2.0 * 4.0);

    // 2D cross product magnitude
    let cross = v1.cross(&v2);
    assert_eq!(cross, 1.0 * 4.0 - 2.0 * 3.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32 + 4.0).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);

    // Normalizing a zero vector leaves it zero instead of producing NaN
    let zero = Vector2::zero().normalize();
    assert!(zero.is_zero());
    assert!(zero.is_finite());
}

#[test]
fn test_vector2_perp_and_angle() {
    let v = Vector2::new(1.0, 0.0);

    // Perp rotates 90 degrees counter-clockwise
    let p = v.perp();
    assert_relative_eq!(p.x, 0.0);
    assert_relative_eq!(p.y, 1.0);
    assert_relative_eq!(v.dot(&p), 0.0);

    // from_angle builds a unit vector
    let u = Vector2::from_angle(PI / 2.0);
    assert_relative_eq!(u.x, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(u.y, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(u.length(), 1.0);

    // angle is the inverse of from_angle
    assert_relative_eq!(Vector2::from_angle(0.7).angle(), 0.7, epsilon = 1.0e-5);
}

#[test]
fn test_vector2_distance_and_lerp() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(3.0, 4.0);

    assert_relative_eq!(a.distance(&b), 5.0);
    assert_relative_eq!(a.distance_squared(&b), 25.0);

    let mid = a.lerp(&b, 0.5);
    assert_relative_eq!(mid.x, 1.5);
    assert_relative_eq!(mid.y, 2.0);
}

#[test]
fn test_vector2_nalgebra_conversion() {
    let v = Vector2::new(1.5, -2.5);
    let na = v.to_nalgebra();
    let back = Vector2::from_nalgebra(&na);
    assert_eq!(back, v);
}

#[test]
fn test_wrap_angle() {
    // Already in range
    assert_relative_eq!(math::wrap_angle(1.0), 1.0);

    // One full turn past
    assert_relative_eq!(math::wrap_angle(2.0 * PI + 0.5), 0.5, epsilon = 1.0e-5);

    // Negative angles wrap up into [0, 2*PI)
    let wrapped = math::wrap_angle(-PI / 2.0);
    assert_relative_eq!(wrapped, 3.0 * PI / 2.0, epsilon = 1.0e-5);
    assert!(wrapped >= 0.0 && wrapped < 2.0 * PI);
}

#[test]
fn test_scalar_helpers() {
    assert_eq!(math::clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(math::clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(math::clamp(0.5, 0.0, 1.0), 0.5);

    assert_relative_eq!(math::lerp(2.0, 4.0, 0.5), 3.0);

    assert!(math::approx_eq(1.0, 1.0 + 1.0e-7));
    assert!(!math::approx_eq(1.0, 1.1));
    assert!(math::approx_zero(1.0e-8));
}
