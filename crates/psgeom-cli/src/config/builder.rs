use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{EvalArgs, SweepArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use psgeom::core::grid::GridExtents;
use psgeom::core::io::table::TableFormat;
use psgeom::core::shapes::Shape;
use psgeom::engine::config::{SweepConfig, SweepConfigBuilder};
use psgeom::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn build_config(args: &SweepArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load(&args.config, &args.set_values)?;

    let output_file = file_config.output.take().unwrap_or_default();
    let output_path = args
        .output
        .clone()
        .or(output_file.path.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(&defaults.output_path));
    let output_format = args
        .format
        .or(output_file.format)
        .or(defaults.output_format)
        .unwrap_or_else(|| TableFormat::from_path(&output_path));

    let core_config = build_core_config(file_config, args.time, &defaults)?;

    Ok(AppConfig {
        output_path,
        output_format,
        core_config,
    })
}

pub fn build_eval_config(args: &EvalArgs) -> Result<SweepConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = load(&args.config, &args.set_values)?;
    build_core_config(file_config, args.time, &defaults)
}

fn load(path: &Path, set_values: &[String]) -> Result<FileConfig> {
    let file_config = FileConfig::from_file(path)?;
    apply_set_values(file_config, set_values)
}

fn build_core_config(
    mut file_config: FileConfig,
    time_override: Option<f64>,
    defaults: &DefaultsConfig,
) -> Result<SweepConfig> {
    let grid_file = file_config.grid.take().unwrap_or_default();
    let grid = GridExtents::new(
        grid_file.nx.ok_or_else(|| missing("grid.nx"))?,
        grid_file.ny.ok_or_else(|| missing("grid.ny"))?,
        grid_file.nz.ok_or_else(|| missing("grid.nz"))?,
    )
    .map_err(EngineError::from)?;

    let sweep_file = file_config.sweep.take().unwrap_or_default();
    let time = time_override.or(sweep_file.time).unwrap_or(defaults.time);
    let order = sweep_file.order.unwrap_or(defaults.order);

    let terms = file_config
        .terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            Shape::from_params(&term.shape, &term.params).map_err(|source| CliError::Term {
                index: i + 1,
                shape: term.shape.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "Resolved {} term(s) on a {}x{}x{} grid at t = {}.",
        terms.len(),
        grid.nx(),
        grid.ny(),
        grid.nz(),
        time
    );

    SweepConfigBuilder::new()
        .grid(grid)
        .time(time)
        .order(order)
        .terms(terms)
        .build()
        .map_err(|e| CliError::Core(EngineError::from(e)))
}

fn missing(key: &str) -> CliError {
    CliError::Config(format!("Missing required setting '{}'", key))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = parser::split_set_pair(kv_pair)?;

        match key {
            "grid.nx" | "grid.ny" | "grid.nz" => {
                let value: usize = value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?;
                let grid = config.grid.get_or_insert_with(Default::default);
                match key {
                    "grid.nx" => grid.nx = Some(value),
                    "grid.ny" => grid.ny = Some(value),
                    _ => grid.nz = Some(value),
                }
            }
            "sweep.time" => {
                config.sweep.get_or_insert_with(Default::default).time =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
            }
            "sweep.order" => {
                config.sweep.get_or_insert_with(Default::default).order =
                    Some(value_str.parse().map_err(CliError::Config)?);
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(value_str.to_string());
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format =
                    Some(value_str.parse().map_err(CliError::Config)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
