//! # Core Module
//!
//! Stateless building blocks for evaluating geometric indicator fields on a
//! structured simulation grid.
//!
//! ## Architecture
//!
//! - **Grid Description** ([`grid`]) - Grid extents, 2D/3D detection, and sweep orders
//! - **Profile Primitives** ([`profile`]) - Hyperbolic-tangent interfaces and step functions
//! - **Shape Library** ([`shapes`]) - Walls, cylinders, patches, stripes, and anneal zones
//! - **Table I/O** ([`io`]) - Reading and writing `(ix, iy, iz, f)` grid tables
//! - **Mask Filtering** ([`filter`]) - Lithography threshold filter for mask tables
//!
//! Every shape is a pure function of its inputs and the grid extents. No function in
//! this module holds mutable state between evaluations.

pub mod filter;
pub mod grid;
pub mod io;
pub mod profile;
pub mod shapes;
