//! Vector helpers on the ground plane.

use crate::types::Vector3D;
use rand::Rng;
use std::ops::{Add, Mul, Sub};

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane (`y = 0`).
    pub fn ground(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Vector3D) -> f64 {
        (*self - *other).length()
    }

    /// Unit vector in the same direction. The zero vector maps to itself.
    pub fn normalize(&self) -> Vector3D {
        let mag = self.length();
        if mag == 0.0 {
            return Vector3D::ZERO;
        }
        Vector3D::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Unit direction toward `target`, flattened onto the ground plane.
    pub fn ground_direction_to(&self, target: &Vector3D) -> Vector3D {
        Vector3D::ground(target.x - self.x, target.z - self.z).normalize()
    }

    /// Whether every axis differs from `other` by less than `tolerance`.
    pub fn within_per_axis(&self, other: &Vector3D, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        Vector3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Uniform random ground point in the square `center ± range` (x and z).
///
/// A range that is not a positive finite number yields `center` itself.
pub fn random_point_near<R: Rng + ?Sized>(
    center: &Vector3D,
    range: f64,
    rng: &mut R,
) -> Vector3D {
    if !(range > 0.0 && range.is_finite()) {
        return Vector3D::ground(center.x, center.z);
    }
    Vector3D::ground(
        center.x + rng.random_range(-range..range),
        center.z + rng.random_range(-range..range),
    )
}

/// Yaw (radians) that faces along `direction` on the ground plane.
pub fn heading_of(direction: &Vector3D) -> f64 {
    direction.x.atan2(direction.z)
}
