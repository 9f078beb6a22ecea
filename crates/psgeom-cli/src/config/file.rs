use crate::error::{CliError, Result};
use psgeom::core::grid::SweepOrder;
use psgeom::core::io::table::TableFormat;
use psgeom::core::shapes::params::ParamMap;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub nx: Option<usize>,
    pub ny: Option<usize>,
    pub nz: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSweepConfig {
    pub time: Option<f64>,
    pub order: Option<SweepOrder>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub path: Option<String>,
    pub format: Option<TableFormat>,
}

/// One `[[term]]` table: a shape name plus its named parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct FileTerm {
    pub shape: String,
    #[serde(flatten)]
    pub params: ParamMap,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub grid: Option<FileGridConfig>,
    pub sweep: Option<FileSweepConfig>,
    pub output: Option<FileOutputConfig>,
    #[serde(default, rename = "term")]
    pub terms: Vec<FileTerm>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
