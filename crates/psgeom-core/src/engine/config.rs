use crate::core::grid::{GridExtents, SweepOrder};
use crate::core::shapes::Shape;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("A sweep needs at least one shape term")]
    NoTerms,
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Everything a grid sweep needs: where to evaluate, when, in which order, and what.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub grid: GridExtents,
    pub time: f64,
    pub order: SweepOrder,
    /// Summed in this order.
    pub terms: Vec<Shape>,
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    grid: Option<GridExtents>,
    time: Option<f64>,
    order: Option<SweepOrder>,
    terms: Vec<Shape>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(mut self, grid: GridExtents) -> Self {
        self.grid = Some(grid);
        self
    }
    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }
    pub fn order(mut self, order: SweepOrder) -> Self {
        self.order = Some(order);
        self
    }
    pub fn term(mut self, shape: Shape) -> Self {
        self.terms.push(shape);
        self
    }
    pub fn terms(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.terms.extend(shapes);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let grid = self.grid.ok_or(ConfigError::MissingParameter("grid"))?;
        let time = self.time.ok_or(ConfigError::MissingParameter("time"))?;
        if !time.is_finite() {
            return Err(ConfigError::InvalidValue {
                parameter: "time",
                reason: format!("must be finite (got {})", time),
            });
        }
        if self.terms.is_empty() {
            return Err(ConfigError::NoTerms);
        }
        Ok(SweepConfig {
            grid,
            time,
            order: self.order.unwrap_or_default(),
            terms: self.terms,
        })
    }
}
