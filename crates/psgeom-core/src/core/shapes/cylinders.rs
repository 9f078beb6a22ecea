//! Cylindrical shapes: hollow and filled cylinders, chi patches, and tricorne blobs.
//!
//! The cylinder axis depends on dimensionality. A planar run (`NZ == 1`) treats z as
//! the long axis and evaluates everything in the plane `z = PLANAR_Z`; a 3D run lays
//! the axis along x through `(cylcenterY, cylcenterZ)`.

use super::FieldFunction;
use crate::core::grid::{GridExtents, PLANAR_Z};
use crate::core::profile::{MIN_ANGLE_OFFSET, affine, clamp_away_from_zero, tanh_interface};
use nalgebra::{Point3, distance};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CylinderParams {
    pub radius: f64,
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "cylcenterX")]
    pub center_x: f64,
    #[serde(rename = "cylcenterY")]
    pub center_y: f64,
    #[serde(rename = "cylcenterZ")]
    pub center_z: f64,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            width: 1.0,
            center_x: 1.0,
            center_y: 1.0,
            center_z: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChiPatchParams {
    pub radius: f64,
    #[serde(rename = "chiNBase")]
    pub chi_n_base: f64,
    #[serde(rename = "chiNDel")]
    pub chi_n_delta: f64,
    #[serde(rename = "cylcenterX")]
    pub center_x: f64,
    #[serde(rename = "cylcenterY")]
    pub center_y: f64,
    #[serde(rename = "cylcenterZ")]
    pub center_z: f64,
    #[serde(rename = "widthParam", default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl ChiPatchParams {
    pub const DEFAULT_WIDTH: f64 = 1.0;

    pub fn width(&self) -> f64 {
        self.width.unwrap_or(Self::DEFAULT_WIDTH)
    }
}

impl Default for ChiPatchParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            chi_n_base: 1.0,
            chi_n_delta: 1.0,
            center_x: 1.0,
            center_y: 1.0,
            center_z: 1.0,
            width: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TricorneParams {
    pub radius: f64,
    #[serde(rename = "outRadius")]
    pub out_radius: f64,
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "cylcenterX")]
    pub center_x: f64,
    #[serde(rename = "cylcenterY")]
    pub center_y: f64,
    #[serde(rename = "cylcenterZ")]
    pub center_z: f64,
}

impl Default for TricorneParams {
    fn default() -> Self {
        Self {
            radius: 10.0,
            out_radius: 14.0,
            width: 1.0,
            center_x: 1.0,
            center_y: 1.0,
            center_z: 1.0,
        }
    }
}

/// Distance from `point` to the cylinder axis through `(cx, cy, cz)`.
fn axial_distance(point: &Point3<f64>, cx: f64, cy: f64, cz: f64, grid: &GridExtents) -> f64 {
    let p = grid.project(point);
    let on_axis = if grid.is_planar() {
        Point3::new(cx, cy, PLANAR_Z)
    } else {
        Point3::new(p.x, cy, cz)
    };
    distance(&p, &on_axis)
}

/// Cylinder indicator: 0 inside `radius`, 1 outside. A filled cylinder (the
/// particle variant) flips it to 1 inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub params: CylinderParams,
    pub filled: bool,
}

impl FieldFunction for Cylinder {
    fn value(&self, point: &Point3<f64>, _time: f64, grid: &GridExtents) -> f64 {
        let p = &self.params;
        let r = axial_distance(point, p.center_x, p.center_y, p.center_z, grid);
        let hollow = tanh_interface(r - p.radius, p.width);
        if self.filled { 1.0 - hollow } else { hollow }
    }
}

/// Filled circular region mapped onto `[chiNBase, chiNBase + chiNDel]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiPatch {
    pub params: ChiPatchParams,
}

impl FieldFunction for ChiPatch {
    fn value(&self, point: &Point3<f64>, _time: f64, grid: &GridExtents) -> f64 {
        let p = &self.params;
        let r = axial_distance(point, p.center_x, p.center_y, p.center_z, grid);
        let inside = 1.0 - tanh_interface(r - p.radius, p.width());
        affine(inside, p.chi_n_base, p.chi_n_base + p.chi_n_delta)
    }
}

/// Hollow three-lobed cylinder whose boundary radius swings between `radius` and
/// `outRadius` as `cos²(1.5 θ)` around the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tricorne {
    pub params: TricorneParams,
}

impl Tricorne {
    /// Boundary radius in the direction of `point` as seen from the center.
    pub fn boundary_radius(&self, point: &Point3<f64>) -> f64 {
        let p = &self.params;
        let dy = point.y - p.center_y;
        let dx = clamp_away_from_zero(point.x - p.center_x, MIN_ANGLE_OFFSET);
        let theta = dy.atan2(dx);
        let lobe = (1.5 * theta).cos().powi(2);
        (p.out_radius - p.radius) * lobe + p.radius
    }
}

impl FieldFunction for Tricorne {
    fn value(&self, point: &Point3<f64>, _time: f64, grid: &GridExtents) -> f64 {
        let p = &self.params;
        let r = axial_distance(point, p.center_x, p.center_y, p.center_z, grid);
        tanh_interface(r - self.boundary_radius(point), p.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn expected(d: f64, w: f64) -> f64 {
        ((d / w).tanh() + 1.0) / 2.0
    }

    fn cylinder(radius: f64, cx: f64, cy: f64, cz: f64, filled: bool) -> Cylinder {
        Cylinder {
            params: CylinderParams {
                radius,
                width: 1.0,
                center_x: cx,
                center_y: cy,
                center_z: cz,
            },
            filled,
        }
    }

    #[test]
    fn planar_cylinder_matches_closed_form_on_a_4x4_grid() {
        let grid = GridExtents::new(4, 4, 1).unwrap();
        let cyl = cylinder(1.0, 2.0, 2.0, 0.0, false);

        // On the boundary.
        assert_eq!(cyl.value(&Point3::new(1.0, 2.0, 0.0), 0.0, &grid), 0.5);
        assert_eq!(cyl.value(&Point3::new(3.0, 2.0, 0.0), 0.0, &grid), 0.5);

        // Far corner: r = sqrt(8).
        let corner = cyl.value(&Point3::new(0.0, 0.0, 0.0), 0.0, &grid);
        assert!(f64_approx_equal(corner, expected(8.0f64.sqrt() - 1.0, 1.0)));
        assert!(corner > 0.97 && corner < 0.98);

        // Center: r = 0, tanh(-1).
        let center = cyl.value(&Point3::new(2.0, 2.0, 0.0), 0.0, &grid);
        assert!(f64_approx_equal(center, expected(-1.0, 1.0)));
        assert!(center > 0.11 && center < 0.12);
    }

    #[test]
    fn planar_cylinder_ignores_z_and_center_z() {
        let grid = GridExtents::new(8, 8, 1).unwrap();
        let a = cylinder(2.0, 4.0, 4.0, 0.0, false);
        let b = cylinder(2.0, 4.0, 4.0, 50.0, false);
        let p = Point3::new(5.0, 6.0, 0.0);
        let q = Point3::new(5.0, 6.0, 9.0);
        assert_eq!(a.value(&p, 0.0, &grid), b.value(&q, 0.0, &grid));
    }

    #[test]
    fn volumetric_cylinder_runs_along_x() {
        let grid = GridExtents::new(16, 16, 16).unwrap();
        let cyl = cylinder(3.0, 0.0, 8.0, 8.0, false);
        let near = cyl.value(&Point3::new(1.0, 8.0, 11.0), 0.0, &grid);
        let far_along_axis = cyl.value(&Point3::new(15.0, 8.0, 11.0), 0.0, &grid);
        assert_eq!(near, 0.5);
        assert_eq!(far_along_axis, 0.5);
    }

    #[test]
    fn particle_is_exact_complement_of_hollow_cylinder() {
        let grid = GridExtents::new(32, 32, 1).unwrap();
        let hollow = cylinder(5.0, 16.0, 16.0, 1.0, false);
        let particle = cylinder(5.0, 16.0, 16.0, 1.0, true);
        for ix in 0..32 {
            for iy in (0..32).step_by(3) {
                let p = Point3::new(ix as f64, iy as f64, 0.0);
                assert_eq!(
                    particle.value(&p, 0.0, &grid),
                    1.0 - hollow.value(&p, 0.0, &grid)
                );
            }
        }
    }

    #[test]
    fn hollow_cylinder_is_non_decreasing_with_radial_distance() {
        let grid = GridExtents::new(64, 64, 1).unwrap();
        let cyl = cylinder(10.0, 32.0, 32.0, 1.0, false);
        let mut previous = f64::NEG_INFINITY;
        for ix in 32..64 {
            let v = cyl.value(&Point3::new(ix as f64, 32.0, 0.0), 0.0, &grid);
            assert!(v >= previous);
            assert!((0.0..=1.0).contains(&v));
            previous = v;
        }
    }

    #[test]
    fn chi_patch_interpolates_between_base_and_base_plus_delta() {
        let grid = GridExtents::new(128, 128, 1).unwrap();
        let patch = ChiPatch {
            params: ChiPatchParams {
                radius: 5.44,
                chi_n_base: 0.0,
                chi_n_delta: 10.0,
                center_x: 64.0,
                center_y: 55.0,
                center_z: 1.0,
                width: None,
            },
        };
        let center = patch.value(&Point3::new(64.0, 55.0, 0.0), 0.0, &grid);
        let far = patch.value(&Point3::new(0.0, 0.0, 0.0), 0.0, &grid);
        let edge = patch.value(&Point3::new(64.0 + 5.44, 55.0, 0.0), 0.0, &grid);
        assert!(f64_approx_equal(center, 10.0 * (1.0 - expected(-5.44, 1.0))));
        assert!(far < 1e-9);
        assert!(f64_approx_equal(edge, 5.0));
    }

    #[test]
    fn chi_patch_width_defaults_to_one() {
        let params = ChiPatchParams::default();
        assert_eq!(params.width(), 1.0);
        let widened = ChiPatchParams {
            width: Some(2.5),
            ..params
        };
        assert_eq!(widened.width(), 2.5);
    }

    fn tricorne() -> Tricorne {
        Tricorne {
            params: TricorneParams {
                radius: 20.0,
                out_radius: 28.0,
                width: 1.0,
                center_x: 32.0,
                center_y: 32.0,
                center_z: 1.0,
            },
        }
    }

    #[test]
    fn tricorne_boundary_swings_between_inner_and_outer_radius() {
        let t = tricorne();
        // θ = 0 → cos²(0) = 1 → outer radius.
        assert!(f64_approx_equal(
            t.boundary_radius(&Point3::new(40.0, 32.0, 0.0)),
            28.0
        ));
        // θ = π/3 → cos²(π/2) = 0 → inner radius.
        let theta = std::f64::consts::FRAC_PI_3;
        let p = Point3::new(32.0 + 10.0 * theta.cos(), 32.0 + 10.0 * theta.sin(), 0.0);
        assert!((t.boundary_radius(&p) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn tricorne_is_finite_and_continuous_where_dx_vanishes() {
        let grid = GridExtents::new(64, 64, 1).unwrap();
        let t = tricorne();
        for y in [0.0, 10.0, 31.0, 32.0, 33.0, 50.0, 63.0] {
            let on_axis = t.value(&Point3::new(32.0, y, 0.0), 0.0, &grid);
            let left = t.value(&Point3::new(32.0 - 1e-4, y, 0.0), 0.0, &grid);
            let right = t.value(&Point3::new(32.0 + 1e-4, y, 0.0), 0.0, &grid);
            assert!(on_axis.is_finite());
            assert!((0.0..=1.0).contains(&on_axis));
            assert!((on_axis - left).abs() < 1e-3, "jump at y={}", y);
            assert!((on_axis - right).abs() < 1e-3, "jump at y={}", y);
        }
    }

    #[test]
    fn tricorne_center_point_is_finite() {
        let grid = GridExtents::new(64, 64, 1).unwrap();
        let v = tricorne().value(&Point3::new(32.0, 32.0, 0.0), 0.0, &grid);
        assert!(v.is_finite());
        assert!(v < 1e-6);
    }
}
