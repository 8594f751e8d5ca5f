//! Right-handed orthonormal reference frames.

use crate::{Dir3, Point3, Tolerance, Transform, Vec3};
use nalgebra::Matrix4;

/// A local coordinate system: an origin and three orthonormal axes.
///
/// The z-axis is always `x_axis × y_axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Origin of the frame.
    pub origin: Point3,
    /// Unit x-axis.
    pub x_axis: Dir3,
    /// Unit y-axis, orthogonal to `x_axis`.
    pub y_axis: Dir3,
}

impl Frame {
    /// Build a frame from an origin and two spanning vectors.
    ///
    /// `x_axis` is normalized as given; `y_axis` is made orthogonal to it
    /// within their common plane. Returns `None` when the vectors are
    /// degenerate or parallel.
    pub fn new(origin: Point3, x_axis: Vec3, y_axis: Vec3) -> Option<Self> {
        if Tolerance::DEFAULT.parallel(&x_axis, &y_axis) {
            return None;
        }
        let x = Dir3::new_normalize(x_axis);
        let y = y_axis - x.as_ref() * x.dot(&y_axis);
        Some(Self {
            origin,
            x_axis: x,
            y_axis: Dir3::new_normalize(y),
        })
    }

    /// The world XY frame at the origin.
    pub fn world_xy() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vec3::x_axis(),
            y_axis: Vec3::y_axis(),
        }
    }

    /// Unit normal of the frame's XY plane.
    pub fn z_axis(&self) -> Dir3 {
        Dir3::new_normalize(self.x_axis.cross(self.y_axis.as_ref()))
    }

    /// Transform taking frame-local coordinates to world coordinates.
    pub fn to_world(&self) -> Transform {
        let (x, y, z, o) = (self.x_axis, self.y_axis, self.z_axis(), self.origin);
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            x.x, y.x, z.x, o.x,
            x.y, y.y, z.y, o.y,
            x.z, y.z, z.z, o.z,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform { matrix }
    }

    /// Transform taking world coordinates to frame-local coordinates.
    pub fn to_local(&self) -> Transform {
        let (x, y, z) = (self.x_axis, self.y_axis, self.z_axis());
        let o = self.origin.coords;
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            x.x, x.y, x.z, -x.dot(&o),
            y.x, y.y, y.z, -y.dot(&o),
            z.x, z.y, z.z, -z.dot(&o),
            0.0, 0.0, 0.0, 1.0,
        );
        Transform { matrix }
    }

    /// Apply a rigid transform to this frame.
    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            origin: t.apply_point(&self.origin),
            x_axis: Dir3::new_normalize(t.apply_vec(self.x_axis.as_ref())),
            y_axis: Dir3::new_normalize(t.apply_vec(self.y_axis.as_ref())),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::world_xy()
    }
}
