use nalgebra as na;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 2D vector representation for physics calculations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Creates a new 2D vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new 2D vector with all components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a unit vector pointing in the x direction
    #[inline]
    pub fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    /// Creates a unit vector pointing in the y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    /// Creates a unit vector from an angle in radians (counter-clockwise from +x)
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the cross product magnitude of two 2D vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated 90 degrees counter-clockwise
    #[inline]
    pub fn perp(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// Returns the squared length of the vector
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length > crate::math::EPSILON {
            *self / length
        } else {
            *self
        }
    }

    /// Normalizes the vector in-place
    #[inline]
    pub fn normalize_mut(&mut self) {
        let length = self.length();
        if length > crate::math::EPSILON {
            self.x /= length;
            self.y /= length;
        }
    }

    /// Returns true if the vector is approximately zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        crate::math::approx_zero(self.length_squared())
    }

    /// Returns true if both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Distance between two vectors
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    /// Squared distance between two vectors
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*self - *other).length_squared()
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }

    /// Returns the angle in radians of this vector (in the range [-PI, PI])
    #[inline]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Convert to nalgebra Vector2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Vector2<f32> {
        na::Vector2::new(self.x, self.y)
    }

    /// Convert from nalgebra Vector2
    #[inline]
    pub fn from_nalgebra(v: &na::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    #[inline]
    fn mul(self, vector: Vector2) -> Vector2 {
        Vector2::new(vector.x * self, vector.y * self)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f32> for Vector2 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
