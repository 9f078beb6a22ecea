use crate::cli::SweepArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use psgeom::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: SweepArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = config::build_config(&args)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Sweeping {} grid points with {} term(s)...",
        app.core_config.grid.num_points(),
        app.core_config.terms.len()
    );
    let written = workflows::sweep::run_to_path(
        &app.core_config,
        &app.output_path,
        app.output_format,
        &reporter,
    )?;

    println!(
        "✓ Wrote {} records ({}) to: {}",
        written,
        app.output_format,
        app.output_path.display()
    );
    Ok(())
}
