use super::{FieldFunction, ShapeError};
use crate::core::grid::{Axis, GridExtents};
use crate::core::profile::step_window;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StripeParams {
    #[serde(rename = "leftedge")]
    pub left_edge: f64,
    #[serde(rename = "rightedge")]
    pub right_edge: f64,
    #[serde(rename = "leftedge2", default, skip_serializing_if = "Option::is_none")]
    pub left_edge2: Option<f64>,
    #[serde(rename = "rightedge2", default, skip_serializing_if = "Option::is_none")]
    pub right_edge2: Option<f64>,
}

impl StripeParams {
    /// The optional second stripe, present only when both of its edges are given.
    pub fn second_pair(&self, shape: &'static str) -> Result<Option<(f64, f64)>, ShapeError> {
        match (self.left_edge2, self.right_edge2) {
            (Some(left), Some(right)) => Ok(Some((left, right))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ShapeError::IncompletePair {
                shape,
                present: "leftedge2",
                missing: "rightedge2",
            }),
            (None, Some(_)) => Err(ShapeError::IncompletePair {
                shape,
                present: "rightedge2",
                missing: "leftedge2",
            }),
        }
    }
}

/// Sharp-edged stripe regions along one axis: 1 on `[leftedge, rightedge)`, plus 1
/// on `[leftedge2, rightedge2)` when a second stripe is configured. Overlapping
/// stripes add up to 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stripes {
    pub first: (f64, f64),
    pub second: Option<(f64, f64)>,
    pub axis: Axis,
}

impl Stripes {
    pub fn new(
        params: &StripeParams,
        axis: Axis,
        shape: &'static str,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            first: (params.left_edge, params.right_edge),
            second: params.second_pair(shape)?,
            axis,
        })
    }

    pub fn params(&self) -> StripeParams {
        StripeParams {
            left_edge: self.first.0,
            right_edge: self.first.1,
            left_edge2: self.second.map(|(left, _)| left),
            right_edge2: self.second.map(|(_, right)| right),
        }
    }
}

impl FieldFunction for Stripes {
    fn value(&self, point: &Point3<f64>, _time: f64, _grid: &GridExtents) -> f64 {
        let coord = self.axis.component(point);
        let (left, right) = self.first;
        let first = step_window(coord, left, right);
        let second = self
            .second
            .map_or(0.0, |(left, right)| step_window(coord, left, right));
        first + second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridExtents {
        GridExtents::new(64, 64, 1).unwrap()
    }

    fn at_x(stripes: &Stripes, x: f64) -> f64 {
        stripes.value(&Point3::new(x, 0.0, 0.0), 0.0, &grid())
    }

    #[test]
    fn single_stripe_is_one_inside_half_open_interval() {
        let s = Stripes {
            first: (10.0, 20.0),
            second: None,
            axis: Axis::X,
        };
        assert_eq!(at_x(&s, 9.0), 0.0);
        assert_eq!(at_x(&s, 10.0), 1.0);
        assert_eq!(at_x(&s, 19.0), 1.0);
        assert_eq!(at_x(&s, 20.0), 0.0);
    }

    #[test]
    fn second_pair_adds_to_the_first_on_both_sides_of_every_edge() {
        let one = Stripes {
            first: (10.0, 20.0),
            second: None,
            axis: Axis::X,
        };
        let two = Stripes {
            second: Some((30.0, 40.0)),
            ..one
        };
        let only_second = Stripes {
            first: (30.0, 40.0),
            second: None,
            axis: Axis::X,
        };
        for edge in [10.0, 20.0, 30.0, 40.0] {
            for x in [edge - 0.5, edge, edge + 0.5] {
                assert_eq!(at_x(&two, x), at_x(&one, x) + at_x(&only_second, x));
            }
        }
        assert_eq!(at_x(&two, 35.0), 1.0);
        assert_eq!(at_x(&one, 35.0), 0.0);
    }

    #[test]
    fn overlapping_stripes_sum_to_two() {
        let s = Stripes {
            first: (0.0, 20.0),
            second: Some((10.0, 30.0)),
            axis: Axis::X,
        };
        assert_eq!(at_x(&s, 15.0), 2.0);
        assert_eq!(at_x(&s, 25.0), 1.0);
    }

    #[test]
    fn stripes_along_y_ignore_x() {
        let s = Stripes {
            first: (5.0, 6.0),
            second: None,
            axis: Axis::Y,
        };
        let g = grid();
        assert_eq!(s.value(&Point3::new(50.0, 5.0, 0.0), 0.0, &g), 1.0);
        assert_eq!(s.value(&Point3::new(5.0, 50.0, 0.0), 0.0, &g), 0.0);
    }

    #[test]
    fn half_a_second_pair_is_rejected() {
        let params = StripeParams {
            left_edge: 1.0,
            right_edge: 2.0,
            left_edge2: Some(3.0),
            right_edge2: None,
        };
        let err = Stripes::new(&params, Axis::X, "stripeRegionsX").unwrap_err();
        assert_eq!(
            err,
            ShapeError::IncompletePair {
                shape: "stripeRegionsX",
                present: "leftedge2",
                missing: "rightedge2",
            }
        );
    }

    #[test]
    fn params_round_trip_through_the_shape() {
        let params = StripeParams {
            left_edge: 1.0,
            right_edge: 2.0,
            left_edge2: Some(3.0),
            right_edge2: Some(4.0),
        };
        let s = Stripes::new(&params, Axis::Y, "stripeRegionsY").unwrap();
        assert_eq!(s.params(), params);
    }
}
