//! Circular arch geometry shared by every voussoir of a vault.

use std::f64::consts::PI;

use voussoir_math::{Point3, Transform, Vec3};

use crate::params::VaultParameters;

/// A radial cross-section of the vault shell at one angle around the arch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rib {
    /// Point on the inner (lower) surface.
    pub intrados: Point3,
    /// Point on the outer (upper) surface.
    pub extrados: Point3,
}

/// The arc followed by the vault cross-section and its subdivision into ribs.
///
/// The arch lies in the XZ plane with the crown on the Z axis. Ribs are laid
/// out from the +X springing towards the -X springing, all at the vault's
/// front edge `y = -length / 2`.
#[derive(Debug, Clone)]
pub struct ArchGeometry {
    /// Radius of the arch centerline.
    pub radius: f64,
    /// Center of the arch circle.
    pub center: Point3,
    /// Total angle subtended by the arch, in radians.
    pub sector: f64,
    /// Angle between consecutive ribs, in radians.
    pub step: f64,
    /// `voussoirs_span + 1` ribs.
    pub ribs: Vec<Rib>,
}

impl ArchGeometry {
    /// Compute the arch for already validated parameters.
    pub fn new(params: &VaultParameters) -> Self {
        let radius = params.radius();
        let center = Point3::new(0.0, 0.0, params.rise - radius);
        let left = Point3::new(-params.span / 2.0, 0.0, 0.0);

        let springing = (left - center).angle(&-Vec3::x());
        let sector = PI - 2.0 * springing;
        let step = sector / params.voussoirs_span as f64;

        let y = -params.length / 2.0;
        let half = params.thickness / 2.0;
        let crown = Rib {
            intrados: Point3::new(0.0, y, params.rise - half),
            extrados: Point3::new(0.0, y, params.rise + half),
        };

        let axis = Vec3::y_axis();
        let ribs = (0..=params.voussoirs_span)
            .map(|i| {
                let angle = 0.5 * sector - step * i as f64;
                let rotation = Transform::rotation_about_point(&axis, angle, &center);
                Rib {
                    intrados: rotation.apply_point(&crown.intrados),
                    extrados: rotation.apply_point(&crown.extrados),
                }
            })
            .collect();

        Self {
            radius,
            center,
            sector,
            step,
            ribs,
        }
    }

    /// Angle between the springing line and the radius through a springing point.
    pub fn springing_angle(&self) -> f64 {
        0.5 * (PI - self.sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn golden() -> ArchGeometry {
        let params = VaultParameters::new(6000.0, 6000.0, 250.0, 600.0).with_voussoirs(5, 5);
        ArchGeometry::new(&params)
    }

    #[test]
    fn test_center_and_radius() {
        let arch = golden();
        assert_relative_eq!(arch.radius, 7800.0, epsilon = 1e-9);
        assert_relative_eq!(arch.center, Point3::new(0.0, 0.0, -7200.0), epsilon = 1e-9);
    }

    #[test]
    fn test_sector_matches_half_chord() {
        let arch = golden();
        // sin(sector / 2) = (span / 2) / radius
        assert_relative_eq!((arch.sector / 2.0).sin(), 3000.0 / 7800.0, epsilon = 1e-12);
        assert_relative_eq!(arch.step * 5.0, arch.sector, epsilon = 1e-12);
        assert_relative_eq!(
            arch.springing_angle(),
            (7200.0_f64 / 3000.0).atan(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rib_count_and_springers() {
        let arch = golden();
        assert_eq!(arch.ribs.len(), 6);

        // Centerline of the first and last rib sits on the springing points
        let first = &arch.ribs[0];
        let mid = first.intrados + (first.extrados - first.intrados) / 2.0;
        assert_relative_eq!(mid, Point3::new(3000.0, -3000.0, 0.0), epsilon = 1e-6);

        let last = &arch.ribs[5];
        let mid = last.intrados + (last.extrados - last.intrados) / 2.0;
        assert_relative_eq!(mid, Point3::new(-3000.0, -3000.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_ribs_are_radial() {
        let arch = golden();
        for rib in &arch.ribs {
            // Ribs sit at the front edge, so only the XZ offset is radial
            let inner = rib.intrados - arch.center;
            let outer = rib.extrados - arch.center;
            assert_relative_eq!(inner.x.hypot(inner.z), 7675.0, epsilon = 1e-6);
            assert_relative_eq!(outer.x.hypot(outer.z), 7925.0, epsilon = 1e-6);
            assert_relative_eq!(rib.intrados.y, -3000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ribs_are_symmetric() {
        let arch = golden();
        for (a, b) in arch.ribs.iter().zip(arch.ribs.iter().rev()) {
            assert_relative_eq!(a.intrados.x, -b.intrados.x, epsilon = 1e-6);
            assert_relative_eq!(a.intrados.z, b.intrados.z, epsilon = 1e-6);
        }
    }
}
