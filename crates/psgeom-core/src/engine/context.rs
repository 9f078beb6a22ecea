use super::config::SweepConfig;
use crate::core::grid::{GridExtents, grid_point};
use crate::core::shapes::{FieldFunction, Shape};
use nalgebra::Point3;

/// Read-only evaluation state shared by every point of a sweep.
///
/// The grid extents are bound once when the context is created, so no shape can be
/// evaluated before they are known.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    grid: GridExtents,
    time: f64,
    terms: &'a [Shape],
}

/// One term's share of a summed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermContribution {
    pub name: &'static str,
    pub value: f64,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(grid: GridExtents, time: f64, terms: &'a [Shape]) -> Self {
        Self { grid, time, terms }
    }

    pub fn from_config(config: &'a SweepConfig) -> Self {
        Self::new(config.grid, config.time, &config.terms)
    }

    pub fn grid(&self) -> &GridExtents {
        &self.grid
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn terms(&self) -> &'a [Shape] {
        self.terms
    }

    /// Sum of every term at `point`, accumulated from zero in configuration order.
    pub fn evaluate(&self, point: &Point3<f64>) -> f64 {
        let mut total = 0.0;
        for term in self.terms {
            total += term.value(point, self.time, &self.grid);
        }
        total
    }

    #[inline]
    pub fn evaluate_index(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        self.evaluate(&grid_point(ix, iy, iz))
    }

    pub fn contributions(&self, point: &Point3<f64>) -> Vec<TermContribution> {
        self.terms
            .iter()
            .map(|term| TermContribution {
                name: term.name(),
                value: term.value(point, self.time, &self.grid),
            })
            .collect()
    }
}
