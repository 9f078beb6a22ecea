//! # PSGEOM Core Library
//!
//! Analytic geometry and material-parameter fields for PolySwift++ runs. Each shape
//! function maps a grid coordinate (plus time and a typed parameter set) to a smooth
//! scalar value; a sweep sums a static selection of shapes over every grid point and
//! writes the result as a table the simulation engine can import.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: grid extents and sweep
//!   orders, tanh/step profile primitives, the shape library with its typed parameter
//!   structs, grid-table I/O, and the lithography threshold filter.
//!
//! - **[`engine`]: The Evaluation Layer.** Binds the read-only grid extents and the
//!   configured terms into an [`engine::context::EvaluationContext`] at sweep start,
//!   and hosts sweep configuration, errors, progress reporting, and the
//!   parameter-file rendezvous between worker processes.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures: running a grid sweep
//!   and staging the shared parameter file.

pub mod core;
pub mod engine;
pub mod workflows;
