use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use psgeom::core::io::table::TableFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "PSGEOM CLI - Evaluate analytic geometry and chiN fields over PolySwift++ simulation grids.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the configured shape terms at every grid point and write the table.
    Sweep(SweepArgs),
    /// Evaluate the configured shape terms at a single point.
    Eval(EvalArgs),
    /// List the registered shape functions, or describe one of them.
    Shapes(ShapesArgs),
    /// Publish (rank 0) or wait for (other ranks) the shared parameter file of a job.
    Stage(StageArgs),
    /// Apply the lithography threshold filter to a grid table.
    Filter(FilterArgs),
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Path to the sweep configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Path for the output grid table, overriding `output.path`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output table format, overriding `output.format`.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<TableFormat>,

    /// Simulation time to evaluate at, overriding `sweep.time`.
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub time: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.nx=128
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the sweep configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Point to evaluate at, as comma-separated coordinates.
    #[arg(
        short,
        long,
        required = true,
        value_name = "X,Y,Z",
        value_parser = parser::parse_point,
        allow_hyphen_values = true
    )]
    pub point: [f64; 3],

    /// Simulation time to evaluate at, overriding `sweep.time`.
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub time: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `shapes` subcommand.
#[derive(Args, Debug)]
pub struct ShapesArgs {
    /// Shape to describe. Lists every registered shape when omitted.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `stage` subcommand.
#[derive(Args, Debug)]
pub struct StageArgs {
    /// Job script whose `<stem>Vars.<ext>` file holds the job's parameters.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub job: PathBuf,

    /// Rank of this process within the job.
    #[arg(short, long, env = "PSGEOM_RANK", value_name = "INT")]
    pub rank: usize,

    /// Directory in which the shared parameter file is published.
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    pub work_dir: PathBuf,

    /// Give up waiting for the shared parameter file after this many seconds.
    #[arg(long, default_value_t = 600, value_name = "SECONDS")]
    pub timeout_secs: u64,

    /// Interval between checks for the shared parameter file.
    #[arg(long, default_value_t = 100, value_name = "MILLISECONDS")]
    pub poll_ms: u64,
}

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input grid table (`.dat` or `.csv`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output grid table (`.dat` or `.csv`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Values at or below this become 1.
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub lower: f64,

    /// Values at or above this become 0.
    #[arg(long, required = true, value_name = "FLOAT", allow_negative_numbers = true)]
    pub upper: f64,
}
