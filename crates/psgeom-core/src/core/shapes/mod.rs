//! # Shape Library
//!
//! Closed-form spatial shape functions evaluated pointwise over the simulation grid.
//!
//! ## Architecture
//!
//! - **Registry** ([`kind`]) - Static name → [`ShapeKind`] map, including aliases
//! - **Parameters** ([`params`]) - Named parameter mappings and their typed conversion
//! - **Families** ([`walls`], [`cylinders`], [`stripes`], [`anneal`]) - The field
//!   functions themselves, each with a typed parameter struct and documented defaults
//!
//! Every shape implements [`FieldFunction`]; [`Shape`] ties a kind to its configured
//! form so heterogeneous terms can be summed in one list.

pub mod anneal;
pub mod cylinders;
pub mod kind;
pub mod params;
pub mod stripes;
pub mod walls;

use self::anneal::{ZoneAnneal, ZoneAnnealParams};
use self::cylinders::{
    ChiPatch, ChiPatchParams, Cylinder, CylinderParams, Tricorne, TricorneParams,
};
use self::params::{ParamMap, require_nonzero, require_positive};
use self::stripes::{StripeParams, Stripes};
use self::walls::{
    CrenaWall, CrenaWallParams, FlatWall, FlatWallParams, Side, SineWall, SineWallParams,
};
use crate::core::grid::{Axis, GridExtents};
use nalgebra::Point3;
use thiserror::Error;

pub use self::kind::ShapeKind;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ShapeError {
    #[error("Unknown shape function '{0}'")]
    UnknownShape(String),

    #[error("Shape '{shape}' is missing required parameter '{parameter}'")]
    MissingParameter {
        shape: &'static str,
        parameter: &'static str,
    },

    #[error("Shape '{shape}' does not accept parameter '{parameter}'")]
    UnknownParameter {
        shape: &'static str,
        parameter: String,
    },

    #[error("Shape '{shape}' was given '{present}' without '{missing}'")]
    IncompletePair {
        shape: &'static str,
        present: &'static str,
        missing: &'static str,
    },

    #[error("Invalid value for '{parameter}' of shape '{shape}': {reason}")]
    InvalidValue {
        shape: &'static str,
        parameter: String,
        reason: String,
    },

    #[error("Malformed parameters for shape '{shape}': {message}")]
    Malformed {
        shape: &'static str,
        message: String,
    },
}

/// A scalar field over the grid, possibly time dependent.
pub trait FieldFunction {
    fn value(&self, point: &Point3<f64>, time: f64, grid: &GridExtents) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeForm {
    FlatWall(FlatWall),
    SineWall(SineWall),
    CrenaWall(CrenaWall),
    Cylinder(Cylinder),
    ChiPatch(ChiPatch),
    Tricorne(Tricorne),
    Stripes(Stripes),
    ZoneAnneal(ZoneAnneal),
}

/// A configured shape term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    form: ShapeForm,
}

impl Shape {
    /// Builds a shape from its registered name and a complete parameter mapping.
    pub fn from_params(name: &str, params: &ParamMap) -> Result<Self, ShapeError> {
        let kind =
            ShapeKind::from_name(name).ok_or_else(|| ShapeError::UnknownShape(name.to_string()))?;
        Self::build(kind, params)
    }

    /// Builds a shape with every parameter at its documented default.
    pub fn with_defaults(name: &str) -> Result<Self, ShapeError> {
        let kind =
            ShapeKind::from_name(name).ok_or_else(|| ShapeError::UnknownShape(name.to_string()))?;
        Self::build(kind, &kind.default_params())
    }

    pub fn build(kind: ShapeKind, params: &ParamMap) -> Result<Self, ShapeError> {
        let form = match kind {
            ShapeKind::LeftFlatWall => flat_wall(kind, params, Axis::Y, Side::Low)?,
            ShapeKind::RightFlatWall => flat_wall(kind, params, Axis::Y, Side::High)?,
            ShapeKind::BottomFlatWall => flat_wall(kind, params, Axis::X, Side::Low)?,
            ShapeKind::TopFlatWall => flat_wall(kind, params, Axis::X, Side::High)?,
            ShapeKind::NegZFlatWall => flat_wall(kind, params, Axis::Z, Side::Low)?,
            ShapeKind::PosZFlatWall => flat_wall(kind, params, Axis::Z, Side::High)?,
            ShapeKind::LeftSineWall => {
                sine_wall(kind, params, (Axis::Y, Side::Low), Axis::X, Axis::X)?
            }
            ShapeKind::RightSineWall => {
                sine_wall(kind, params, (Axis::Y, Side::High), Axis::X, Axis::X)?
            }
            // The z modulation is normalized by NX, as the simulation inputs expect.
            ShapeKind::LeftSineZWall => {
                sine_wall(kind, params, (Axis::Y, Side::Low), Axis::Z, Axis::X)?
            }
            ShapeKind::NegZSineWall => {
                sine_wall(kind, params, (Axis::Z, Side::Low), Axis::Y, Axis::Y)?
            }
            ShapeKind::PosZSineWall => {
                sine_wall(kind, params, (Axis::Z, Side::High), Axis::Y, Axis::Y)?
            }
            ShapeKind::NegZCrenaWall => {
                let p: CrenaWallParams = params::parse(kind, params)?;
                require_positive(kind, "widthParam", p.width)?;
                require_positive(kind, "edgeSharpness", p.edge_sharpness)?;
                ShapeForm::CrenaWall(CrenaWall { params: p })
            }
            ShapeKind::Cylinder | ShapeKind::CylinderPtcl => {
                let p: CylinderParams = params::parse(kind, params)?;
                require_positive(kind, "widthParam", p.width)?;
                ShapeForm::Cylinder(Cylinder {
                    params: p,
                    filled: kind == ShapeKind::CylinderPtcl,
                })
            }
            ShapeKind::ChiPatch => {
                let p: ChiPatchParams = params::parse(kind, params)?;
                require_positive(kind, "widthParam", p.width())?;
                ShapeForm::ChiPatch(ChiPatch { params: p })
            }
            ShapeKind::Tricorne => {
                let p: TricorneParams = params::parse(kind, params)?;
                require_positive(kind, "widthParam", p.width)?;
                ShapeForm::Tricorne(Tricorne { params: p })
            }
            ShapeKind::StripeRegionsX => stripe_regions(kind, params, Axis::X)?,
            ShapeKind::StripeRegionsY => stripe_regions(kind, params, Axis::Y)?,
            ShapeKind::ZoneAnnealX => {
                let p: ZoneAnnealParams = params::parse(kind, params)?;
                require_positive(kind, "widthParam", p.width)?;
                require_nonzero(kind, "zoneRate", p.zone_rate)?;
                ShapeForm::ZoneAnneal(ZoneAnneal { params: p })
            }
        };
        Ok(Self { kind, form })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn form(&self) -> &ShapeForm {
        &self.form
    }

    /// The parameter mapping this shape was built from.
    pub fn params(&self) -> ParamMap {
        match &self.form {
            ShapeForm::FlatWall(s) => params::to_map(&s.params),
            ShapeForm::SineWall(s) => params::to_map(&s.params),
            ShapeForm::CrenaWall(s) => params::to_map(&s.params),
            ShapeForm::Cylinder(s) => params::to_map(&s.params),
            ShapeForm::ChiPatch(s) => params::to_map(&s.params),
            ShapeForm::Tricorne(s) => params::to_map(&s.params),
            ShapeForm::Stripes(s) => params::to_map(&s.params()),
            ShapeForm::ZoneAnneal(s) => params::to_map(&s.params),
        }
    }
}

impl FieldFunction for Shape {
    #[inline]
    fn value(&self, point: &Point3<f64>, time: f64, grid: &GridExtents) -> f64 {
        match &self.form {
            ShapeForm::FlatWall(s) => s.value(point, time, grid),
            ShapeForm::SineWall(s) => s.value(point, time, grid),
            ShapeForm::CrenaWall(s) => s.value(point, time, grid),
            ShapeForm::Cylinder(s) => s.value(point, time, grid),
            ShapeForm::ChiPatch(s) => s.value(point, time, grid),
            ShapeForm::Tricorne(s) => s.value(point, time, grid),
            ShapeForm::Stripes(s) => s.value(point, time, grid),
            ShapeForm::ZoneAnneal(s) => s.value(point, time, grid),
        }
    }
}

impl ShapeKind {
    /// Documented defaults for every parameter the shape requires. Optional
    /// parameters are left out.
    pub fn default_params(self) -> ParamMap {
        match self {
            ShapeKind::LeftFlatWall
            | ShapeKind::RightFlatWall
            | ShapeKind::BottomFlatWall
            | ShapeKind::TopFlatWall
            | ShapeKind::NegZFlatWall
            | ShapeKind::PosZFlatWall => params::to_map(&FlatWallParams::default()),
            ShapeKind::LeftSineWall
            | ShapeKind::RightSineWall
            | ShapeKind::LeftSineZWall
            | ShapeKind::NegZSineWall
            | ShapeKind::PosZSineWall => params::to_map(&SineWallParams::default()),
            ShapeKind::NegZCrenaWall => params::to_map(&CrenaWallParams::default()),
            ShapeKind::Cylinder | ShapeKind::CylinderPtcl => {
                params::to_map(&CylinderParams::default())
            }
            ShapeKind::ChiPatch => params::to_map(&ChiPatchParams::default()),
            ShapeKind::Tricorne => params::to_map(&TricorneParams::default()),
            ShapeKind::StripeRegionsX | ShapeKind::StripeRegionsY => {
                params::to_map(&StripeParams::default())
            }
            ShapeKind::ZoneAnnealX => params::to_map(&ZoneAnnealParams::default()),
        }
    }
}

fn flat_wall(
    kind: ShapeKind,
    params: &ParamMap,
    normal: Axis,
    side: Side,
) -> Result<ShapeForm, ShapeError> {
    let p: FlatWallParams = params::parse(kind, params)?;
    require_positive(kind, "widthParam", p.width)?;
    Ok(ShapeForm::FlatWall(FlatWall {
        params: p,
        normal,
        side,
    }))
}

fn sine_wall(
    kind: ShapeKind,
    params: &ParamMap,
    (normal, side): (Axis, Side),
    along: Axis,
    period: Axis,
) -> Result<ShapeForm, ShapeError> {
    let p: SineWallParams = params::parse(kind, params)?;
    require_positive(kind, "widthParam", p.width)?;
    Ok(ShapeForm::SineWall(SineWall {
        params: p,
        normal,
        side,
        along,
        period,
    }))
}

fn stripe_regions(
    kind: ShapeKind,
    params: &ParamMap,
    axis: Axis,
) -> Result<ShapeForm, ShapeError> {
    let p: StripeParams = params::parse(kind, params)?;
    Ok(ShapeForm::Stripes(Stripes::new(&p, axis, kind.name())?))
}
