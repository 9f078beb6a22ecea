//! Provides input/output for evaluated grid tables.
//!
//! A sweep produces one record per grid point. This module defines that table,
//! a trait-based interface for reading and writing it, and the two on-disk
//! formats: the whitespace-separated `.dat` layout the simulation engine reads
//! and a CSV variant for downstream tooling.

pub mod csv;
pub mod dat;
pub mod stream;
pub mod table;
pub mod traits;
