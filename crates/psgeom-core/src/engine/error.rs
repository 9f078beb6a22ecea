use super::config::ConfigError;
use crate::core::filter::FilterError;
use crate::core::grid::GridError;
use crate::core::io::table::TableError;
use crate::core::shapes::ShapeError;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Shape configuration error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Grid table error: {0}")]
    Table(#[from] TableError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Timed out after {waited:?} waiting for parameter file {path:?}")]
    RendezvousTimeout { path: PathBuf, waited: Duration },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
