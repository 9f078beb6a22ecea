use nalgebra::Point3;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Out-of-plane coordinate that planar (`NZ == 1`) runs evaluate every shape at.
pub const PLANAR_Z: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Grid extent {axis} must be at least 1 (got {value})")]
    ZeroExtent { axis: Axis, value: usize },
    #[error("Grid of {nx}x{ny}x{nz} points is too large to index")]
    TooManyPoints { nx: usize, ny: usize, nz: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn component(self, point: &Point3<f64>) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }

    /// Returns `point` with the component along this axis moved to zero.
    #[inline]
    pub fn foot(self, point: &Point3<f64>) -> Point3<f64> {
        let mut foot = *point;
        match self {
            Axis::X => foot.x = 0.0,
            Axis::Y => foot.y = 0.0,
            Axis::Z => foot.z = 0.0,
        }
        foot
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "NX"),
            Axis::Y => write!(f, "NY"),
            Axis::Z => write!(f, "NZ"),
        }
    }
}

/// Discrete size of the simulation domain.
///
/// Extents are validated on construction, so any shape handed a `GridExtents`
/// can rely on every extent being at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridExtents {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridExtents {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        for (axis, value) in [(Axis::X, nx), (Axis::Y, ny), (Axis::Z, nz)] {
            if value == 0 {
                return Err(GridError::ZeroExtent { axis, value });
            }
        }
        if nx.checked_mul(ny).and_then(|n| n.checked_mul(nz)).is_none() {
            return Err(GridError::TooManyPoints { nx, ny, nz });
        }
        Ok(Self { nx, ny, nz })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Never overflows: `new` rejects extents whose product does not fit.
    pub fn num_points(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// A single z-plane marks a two-dimensional run.
    #[inline]
    pub fn is_planar(&self) -> bool {
        self.nz == 1
    }

    /// Holds the out-of-plane coordinate at [`PLANAR_Z`] for planar runs.
    #[inline]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        if self.is_planar() {
            Point3::new(point.x, point.y, PLANAR_Z)
        } else {
            *point
        }
    }

    pub fn indices(&self, order: SweepOrder) -> GridIndices {
        GridIndices {
            extents: *self,
            order,
            next: 0,
        }
    }
}

/// Nesting of the three grid loops when a sweep visits every point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepOrder {
    /// x outer, y middle, z inner.
    #[default]
    XMajor,
    /// z outer, y middle, x inner.
    ZMajor,
}

impl SweepOrder {
    pub fn outer_axis(self) -> Axis {
        match self {
            SweepOrder::XMajor => Axis::X,
            SweepOrder::ZMajor => Axis::Z,
        }
    }
}

impl FromStr for SweepOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x-major" => Ok(SweepOrder::XMajor),
            "z-major" => Ok(SweepOrder::ZMajor),
            other => Err(format!(
                "Unknown sweep order '{}'. Expected 'x-major' or 'z-major'.",
                other
            )),
        }
    }
}

impl fmt::Display for SweepOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepOrder::XMajor => write!(f, "x-major"),
            SweepOrder::ZMajor => write!(f, "z-major"),
        }
    }
}

/// Iterator over every `(ix, iy, iz)` of a grid in a fixed nesting order.
#[derive(Debug, Clone)]
pub struct GridIndices {
    extents: GridExtents,
    order: SweepOrder,
    next: usize,
}

impl Iterator for GridIndices {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let GridExtents { nx, ny, nz } = self.extents;
        if self.next >= nx * ny * nz {
            return None;
        }
        let n = self.next;
        self.next += 1;
        let item = match self.order {
            SweepOrder::XMajor => (n / (ny * nz), (n / nz) % ny, n % nz),
            SweepOrder::ZMajor => (n % nx, (n / nx) % ny, n / (nx * ny)),
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.extents.num_points() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIndices {}

/// Grid index triple as a real-valued point.
#[inline]
pub fn grid_point(ix: usize, iy: usize, iz: usize) -> Point3<f64> {
    Point3::new(ix as f64, iy as f64, iz as f64)
}
