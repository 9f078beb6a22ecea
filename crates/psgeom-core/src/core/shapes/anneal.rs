use super::FieldFunction;
use crate::core::grid::GridExtents;
use crate::core::profile::affine;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneAnnealParams {
    #[serde(rename = "zoneSize")]
    pub zone_size: f64,
    #[serde(rename = "widthParam")]
    pub width: f64,
    #[serde(rename = "chiNmax")]
    pub chi_n_max: f64,
    #[serde(rename = "chiNmin")]
    pub chi_n_min: f64,
    #[serde(rename = "initialXpos")]
    pub initial_x: f64,
    #[serde(rename = "zoneRate")]
    pub zone_rate: f64,
}

impl Default for ZoneAnnealParams {
    fn default() -> Self {
        Self {
            zone_size: 10.0,
            width: 2.0,
            chi_n_max: 14.0,
            chi_n_min: 2.0,
            initial_x: 20.0,
            zone_rate: 200.0,
        }
    }
}

/// A hot zone of half-width `zoneSize` sweeping along x at `1 / zoneRate` grid
/// units per unit time. chiN is raised to `chiNmax` inside the zone and relaxes to
/// `chiNmin` outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneAnneal {
    pub params: ZoneAnnealParams,
}

impl ZoneAnneal {
    /// Zone center at time `t`.
    pub fn center_at(&self, time: f64) -> f64 {
        self.params.initial_x + time / self.params.zone_rate
    }
}

impl FieldFunction for ZoneAnneal {
    fn value(&self, point: &Point3<f64>, time: f64, _grid: &GridExtents) -> f64 {
        let p = &self.params;
        let center = self.center_at(time);
        let rising = ((point.x - (center - p.zone_size)) / p.width).tanh();
        let falling = (((center + p.zone_size) - point.x) / p.width).tanh();
        affine(0.5 * (rising + falling), p.chi_n_min, p.chi_n_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn anneal() -> ZoneAnneal {
        ZoneAnneal {
            params: ZoneAnnealParams::default(),
        }
    }

    fn grid() -> GridExtents {
        GridExtents::new(256, 32, 1).unwrap()
    }

    #[test]
    fn center_moves_with_time() {
        let z = anneal();
        assert_eq!(z.center_at(0.0), 20.0);
        assert_eq!(z.center_at(2000.0), 30.0);
        assert_eq!(z.center_at(-400.0), 18.0);
    }

    #[test]
    fn zone_peaks_near_chi_n_max_at_its_center() {
        let z = anneal();
        let g = grid();
        for t in [0.0, 1000.0, 10_000.0] {
            let c = z.center_at(t);
            let peak = z.value(&Point3::new(c, 0.0, 0.0), t, &g);
            let expected = 2.0 + 12.0 * (10.0f64 / 2.0).tanh();
            assert!(f64_approx_equal(peak, expected));
            assert!(peak > 13.9);
        }
    }

    #[test]
    fn far_from_the_zone_relaxes_to_chi_n_min() {
        let z = anneal();
        let v = z.value(&Point3::new(200.0, 0.0, 0.0), 0.0, &grid());
        assert!(f64_approx_equal(v, 2.0));
    }

    #[test]
    fn zone_edge_is_halfway_between_bounds() {
        let z = anneal();
        let g = grid();
        // At x = c + zoneSize the falling term vanishes and the rising term is tanh(10).
        let edge = z.value(&Point3::new(30.0, 0.0, 0.0), 0.0, &g);
        let expected = 2.0 + 12.0 * 0.5 * (20.0f64 / 2.0).tanh();
        assert!(f64_approx_equal(edge, expected));
    }

    #[test]
    fn same_point_differs_across_times() {
        let z = anneal();
        let g = grid();
        let p = Point3::new(40.0, 0.0, 0.0);
        let early = z.value(&p, 0.0, &g);
        let late = z.value(&p, 4000.0, &g);
        assert!(late > early);
        assert!(f64_approx_equal(late, z.value(&Point3::new(20.0, 0.0, 0.0), 0.0, &g)));
    }
}
