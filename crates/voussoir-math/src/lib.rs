#![warn(missing_docs)]

//! Math types for voussoir vault generation.
//!
//! Thin wrappers around nalgebra providing the point, vector and transform
//! types used to build masonry blocks, together with reference frames and
//! tolerance constants.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

mod frame;

pub use frame::Frame;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Translation by a vector.
    pub fn translation_vec(v: &Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula. Positive angles turn counter-clockwise
    /// when looking down the axis towards the origin.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Rotation about an axis passing through `pivot`.
    pub fn rotation_about_point(axis: &Dir3, angle: f64, pivot: &Point3) -> Self {
        let to_origin = Self::translation(-pivot.x, -pivot.y, -pivot.z);
        let back = Self::translation(pivot.x, pivot.y, pivot.z);
        back.then(&Self::rotation_about_axis(axis, angle))
            .then(&to_origin)
    }

    /// Change of basis mapping coordinates expressed in `from` onto `to`.
    ///
    /// A point sitting at `from`'s origin lands on `to`'s origin, and `from`'s
    /// axes land on `to`'s axes.
    pub fn from_frame_to_frame(from: &Frame, to: &Frame) -> Self {
        to.to_world().then(&from.to_local())
    }

    /// Compose: `self` then `other` (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Tolerance scaled to the size of the model.
    ///
    /// Vaults are drawn in metres or millimetres alike, so absolute tolerances
    /// must follow the magnitude of the input.
    pub fn scaled(scale: f64) -> Self {
        Self {
            linear: Self::DEFAULT.linear * scale.abs().max(1.0),
            angular: Self::DEFAULT.angular,
        }
    }

    /// Check if two vectors are parallel (or either is degenerate).
    pub fn parallel(&self, a: &Vec3, b: &Vec3) -> bool {
        let (na, nb) = (a.norm(), b.norm());
        if na < self.linear || nb < self.linear {
            return true;
        }
        a.cross(b).norm() / (na * nb) < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let result = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(result, Point3::new(11.0, 22.0, 33.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_about_y_is_right_handed() {
        // +90° about +Y takes +Z onto +X
        let axis = Dir3::new_normalize(Vec3::y());
        let t = Transform::rotation_about_axis(&axis, PI / 2.0);
        let result = t.apply_point(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(result, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_about_point_keeps_pivot() {
        let axis = Dir3::new_normalize(Vec3::y());
        let pivot = Point3::new(0.0, 0.0, -10.0);
        let t = Transform::rotation_about_point(&axis, 0.3, &pivot);
        assert_relative_eq!(t.apply_point(&pivot), pivot, epsilon = 1e-12);

        // Distance to the pivot is preserved
        let p = Point3::new(0.0, 5.0, 2.0);
        let q = t.apply_point(&p);
        assert_relative_eq!((q - pivot).norm(), (p - pivot).norm(), epsilon = 1e-12);
        assert_relative_eq!(q.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_then_applies_right_operand_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let axis = Dir3::new_normalize(Vec3::z());
        let rotate = Transform::rotation_about_axis(&axis, PI / 2.0);
        // translate to (1,0,0), then rotate to (0,1,0)
        let composed = rotate.then(&translate);
        let result = composed.apply_point(&Point3::origin());
        assert_relative_eq!(result, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::translation(1.0, 2.0, 3.0);
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        assert_relative_eq!(t.then(&inv).apply_point(&p), p, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_vec_ignores_translation() {
        let t = Transform::translation(4.0, 5.0, 6.0);
        assert_eq!(t.apply_vec(&Vec3::x()), Vec3::x());
    }

    #[test]
    fn test_tolerance_scaled() {
        assert_relative_eq!(Tolerance::scaled(6000.0).linear, 6e-6, max_relative = 1e-12);
        assert_eq!(Tolerance::scaled(0.5).linear, Tolerance::DEFAULT.linear);
        assert_eq!(Tolerance::scaled(-6000.0).angular, Tolerance::DEFAULT.angular);
    }

    #[test]
    fn test_tolerance_parallel() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.parallel(&Vec3::x(), &(Vec3::x() * 3.0)));
        assert!(tol.parallel(&Vec3::x(), &Vec3::zeros()));
        assert!(!tol.parallel(&Vec3::x(), &Vec3::new(1.0, 1.0, 0.0)));
    }
}
