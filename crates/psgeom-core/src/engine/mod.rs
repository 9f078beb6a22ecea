//! # Engine Module
//!
//! The evaluation layer between the stateless shape library and the public workflows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sweep settings and their builder
//! - **Evaluation Context** ([`context`]) - Grid extents, time, and terms bound once per sweep
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Parameter Staging** ([`rendezvous`]) - Publishing the shared parameter file and
//!   waiting for it across worker processes
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping every lower layer

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod rendezvous;
