//! Planar walls, optionally with a sinusoidal or crenellated edge.
//!
//! Every wall measures the distance from the query point to its foot on the plane
//! through the origin normal to the wall axis, and places the smoothed interface at
//! `walledge` along that normal. Walls never take the planar branch: projecting z
//! leaves an in-plane normal distance unchanged, and z-normal walls are measured on
//! the raw z coordinate.

use super::FieldFunction;
use crate::core::grid::{Axis, GridExtents};
use crate::core::profile::tanh_interface;
use nalgebra::{Point3, distance};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Which side of the edge the wall material occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Between the origin plane and the edge (left, bottom, negative z).
    Low,
    /// Beyond the edge (right, top, positive z).
    High,
}

impl Side {
    #[inline]
    fn orient(self, edge: f64, normal_distance: f64) -> f64 {
        match self {
            Side::Low => edge - normal_distance,
            Side::High => normal_distance - edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatWallParams {
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "walledge")]
    pub wall_edge: f64,
}

impl Default for FlatWallParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            wall_edge: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SineWallParams {
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "walledge")]
    pub wall_edge: f64,
    pub amplitude: f64,
    #[serde(rename = "freq")]
    pub frequency: f64,
}

impl Default for SineWallParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            wall_edge: 10.0,
            amplitude: 3.0,
            frequency: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrenaWallParams {
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "lowEdge")]
    pub low_edge: f64,
    #[serde(rename = "highEdge")]
    pub high_edge: f64,
    #[serde(rename = "edgeSharpness")]
    pub edge_sharpness: f64,
    #[serde(rename = "freq")]
    pub frequency: f64,
}

impl Default for CrenaWallParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            low_edge: 10.0,
            high_edge: 20.0,
            edge_sharpness: 0.2,
            frequency: 4.0,
        }
    }
}

#[inline]
fn normal_distance(point: &Point3<f64>, normal: Axis) -> f64 {
    distance(point, &normal.foot(point))
}

/// `sin(freq * 2π * coord / N)` with `coord` read from `along` and `N` from `period`.
#[inline]
fn sine_modulation(
    point: &Point3<f64>,
    frequency: f64,
    along: Axis,
    period: Axis,
    grid: &GridExtents,
) -> f64 {
    let coord = along.component(point);
    (frequency * 2.0 * PI * coord / grid.extent(period) as f64).sin()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatWall {
    pub params: FlatWallParams,
    pub normal: Axis,
    pub side: Side,
}

impl FieldFunction for FlatWall {
    fn value(&self, point: &Point3<f64>, _time: f64, _grid: &GridExtents) -> f64 {
        let d = normal_distance(point, self.normal);
        tanh_interface(self.side.orient(self.params.wall_edge, d), self.params.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWall {
    pub params: SineWallParams,
    pub normal: Axis,
    pub side: Side,
    /// Coordinate the sine runs along.
    pub along: Axis,
    /// Grid extent normalizing one period of the sine.
    pub period: Axis,
}

impl FieldFunction for SineWall {
    fn value(&self, point: &Point3<f64>, _time: f64, grid: &GridExtents) -> f64 {
        let p = &self.params;
        let offset =
            p.amplitude * sine_modulation(point, p.frequency, self.along, self.period, grid);
        let d = normal_distance(point, self.normal) - offset;
        tanh_interface(self.side.orient(p.wall_edge, d), p.width)
    }
}

/// Negative-z wall whose edge alternates between `lowEdge` and `highEdge` along y,
/// the sine sharpened into a rounded square wave by `edgeSharpness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrenaWall {
    pub params: CrenaWallParams,
}

impl CrenaWall {
    pub fn edge_at(&self, point: &Point3<f64>, grid: &GridExtents) -> f64 {
        let p = &self.params;
        let sine = sine_modulation(point, p.frequency, Axis::Y, Axis::Y, grid);
        let square = (sine / p.edge_sharpness).tanh();
        0.5 * (p.high_edge - p.low_edge) * square + 0.5 * (p.high_edge + p.low_edge)
    }
}

impl FieldFunction for CrenaWall {
    fn value(&self, point: &Point3<f64>, _time: f64, grid: &GridExtents) -> f64 {
        let edge = self.edge_at(point, grid);
        let d = normal_distance(point, Axis::Z);
        tanh_interface(Side::Low.orient(edge, d), self.params.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn grid() -> GridExtents {
        GridExtents::new(64, 64, 1).unwrap()
    }

    fn flat(normal: Axis, side: Side) -> FlatWall {
        FlatWall {
            params: FlatWallParams {
                width: 1.0,
                wall_edge: 10.0,
            },
            normal,
            side,
        }
    }

    #[test]
    fn flat_wall_is_one_half_exactly_at_the_edge() {
        let g = grid();
        let left = flat(Axis::Y, Side::Low);
        let right = flat(Axis::Y, Side::High);
        let p = Point3::new(5.0, 10.0, 0.0);
        assert_eq!(left.value(&p, 0.0, &g), 0.5);
        assert_eq!(right.value(&p, 0.0, &g), 0.5);
    }

    #[test]
    fn low_side_wall_is_filled_near_the_origin_plane() {
        let g = grid();
        let left = flat(Axis::Y, Side::Low);
        assert!(left.value(&Point3::new(3.0, 0.0, 0.0), 0.0, &g) > 0.999);
        assert!(left.value(&Point3::new(3.0, 30.0, 0.0), 0.0, &g) < 0.001);
    }

    #[test]
    fn opposite_sides_are_complementary() {
        let g = grid();
        let bottom = flat(Axis::X, Side::Low);
        let top = flat(Axis::X, Side::High);
        for x in [0.0, 4.5, 9.0, 10.0, 11.0, 40.0] {
            let p = Point3::new(x, 7.0, 0.0);
            assert!(f64_approx_equal(
                bottom.value(&p, 0.0, &g) + top.value(&p, 0.0, &g),
                1.0
            ));
        }
    }

    #[test]
    fn flat_wall_matches_closed_form_off_the_edge() {
        let g = grid();
        let neg_z = flat(Axis::Z, Side::Low);
        let p = Point3::new(1.0, 2.0, 12.0);
        let expected = (((10.0f64 - 12.0) / 1.0).tanh() + 1.0) / 2.0;
        assert!(f64_approx_equal(neg_z.value(&p, 0.0, &g), expected));
    }

    #[test]
    fn low_side_wall_is_non_increasing_away_from_the_origin() {
        let g = grid();
        let left = flat(Axis::Y, Side::Low);
        let mut previous = f64::INFINITY;
        for iy in 0..40 {
            let v = left.value(&Point3::new(0.0, iy as f64, 0.0), 0.0, &g);
            assert!(v <= previous);
            previous = v;
        }
    }

    #[test]
    fn sine_wall_edge_shifts_by_the_modulation() {
        let g = grid();
        let wall = SineWall {
            params: SineWallParams::default(),
            normal: Axis::Y,
            side: Side::Low,
            along: Axis::X,
            period: Axis::X,
        };
        // x = NX / (4 * freq) puts the sine at its maximum, so the edge sits at walledge + A.
        let x = 64.0 / 16.0;
        let p = Point3::new(x, 13.0, 0.0);
        assert!(f64_approx_equal(wall.value(&p, 0.0, &g), 0.5));
        // Where the sine vanishes the wall is flat.
        let q = Point3::new(0.0, 10.0, 0.0);
        assert!(f64_approx_equal(wall.value(&q, 0.0, &g), 0.5));
    }

    #[test]
    fn sine_z_wall_normalizes_z_by_nx() {
        let g = GridExtents::new(32, 32, 8).unwrap();
        let wall = SineWall {
            params: SineWallParams::default(),
            normal: Axis::Y,
            side: Side::Low,
            along: Axis::Z,
            period: Axis::X,
        };
        let z = 2.0;
        let offset = 3.0 * (4.0 * 2.0 * PI * z / 32.0).sin();
        let p = Point3::new(0.0, 10.0 + offset, z);
        assert!(f64_approx_equal(wall.value(&p, 0.0, &g), 0.5));
    }

    #[test]
    fn crenellated_edge_alternates_between_low_and_high_edges() {
        let g = grid();
        let wall = CrenaWall {
            params: CrenaWallParams::default(),
        };
        let crest = wall.edge_at(&Point3::new(0.0, 4.0, 0.0), &g);
        let trough = wall.edge_at(&Point3::new(0.0, 12.0, 0.0), &g);
        let node = wall.edge_at(&Point3::new(0.0, 0.0, 0.0), &g);
        assert!(crest > 19.9 && crest <= 20.0);
        assert!(trough < 10.1 && trough >= 10.0);
        assert!(f64_approx_equal(node, 15.0));
    }

    #[test]
    fn crenellated_wall_is_one_half_at_its_local_edge() {
        let g = grid();
        let wall = CrenaWall {
            params: CrenaWallParams::default(),
        };
        let p = Point3::new(3.0, 0.0, 15.0);
        assert!(f64_approx_equal(wall.value(&p, 0.0, &g), 0.5));
    }
}
