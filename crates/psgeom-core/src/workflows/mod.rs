//! # Workflows Module
//!
//! Top-level entry points of the library. Each workflow takes a validated
//! configuration and a progress reporter and runs one complete procedure.
//!
//! ## Architecture
//!
//! - **Grid Sweep** ([`sweep`]) - Evaluates the configured terms at every grid point
//!   and writes the resulting table
//! - **Parameter Staging** ([`stage`]) - Publishes or awaits the shared parameter file
//!   for one rank of a job

pub mod stage;
pub mod sweep;
