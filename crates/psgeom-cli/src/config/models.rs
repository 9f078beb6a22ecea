use psgeom::core::io::table::TableFormat;
use psgeom::engine::config::SweepConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub output_path: PathBuf,
    pub output_format: TableFormat,
    pub core_config: SweepConfig,
}
