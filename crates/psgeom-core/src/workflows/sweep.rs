use crate::core::io::stream::RecordWriter;
use crate::core::io::table::{GridRecord, GridTable, TableFormat};
use crate::engine::config::SweepConfig;
use crate::engine::context::EvaluationContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Evaluates the summed terms at every integer grid coordinate.
///
/// Records are appended in the configured sweep order. One task step is reported
/// per slice of the outer loop.
#[instrument(skip_all, name = "sweep_workflow")]
pub fn run(config: &SweepConfig, reporter: &ProgressReporter) -> Result<GridTable, EngineError> {
    let mut table = GridTable::with_capacity(config.grid.num_points());
    sweep(config, reporter, |record| {
        table.records.push(record);
        Ok(())
    })?;
    info!("Sweep complete: {} grid points evaluated.", table.len());
    Ok(table)
}

/// Runs the sweep and streams every record to `path`, replacing any previous file.
///
/// The destination is created before the first point is evaluated, so an
/// unwritable path fails without sweeping. Returns the number of records written.
#[instrument(skip_all, name = "sweep_to_path", fields(path = %path.display()))]
pub fn run_to_path(
    config: &SweepConfig,
    path: &Path,
    format: TableFormat,
    reporter: &ProgressReporter,
) -> Result<usize, EngineError> {
    let mut writer = RecordWriter::create(path, format)?;
    let written = sweep(config, reporter, |record| {
        writer.write_record(&record).map_err(EngineError::from)
    })?;
    writer.finish()?;

    info!("Wrote {} records to {}.", written, path.display());
    Ok(written)
}

fn sweep<F>(
    config: &SweepConfig,
    reporter: &ProgressReporter,
    mut emit: F,
) -> Result<usize, EngineError>
where
    F: FnMut(GridRecord) -> Result<(), EngineError>,
{
    let grid = config.grid;
    let outer = config.order.outer_axis();
    let slice_len = grid.num_points() / grid.extent(outer);

    reporter.report(Progress::PhaseStart { name: "Sweep" });
    info!(
        "Sweeping {}x{}x{} grid ({} order, t = {}) over {} term(s).",
        grid.nx(),
        grid.ny(),
        grid.nz(),
        config.order,
        config.time,
        config.terms.len()
    );
    for term in &config.terms {
        debug!(shape = term.name(), params = ?term.params(), "Configured term");
    }

    let context = EvaluationContext::from_config(config);
    reporter.report(Progress::TaskStart {
        total_steps: grid.extent(outer) as u64,
        unit: "slices",
    });
    let mut count = 0;
    for (ix, iy, iz) in grid.indices(config.order) {
        emit(GridRecord {
            ix,
            iy,
            iz,
            f: context.evaluate_index(ix, iy, iz),
        })?;
        count += 1;
        if count % slice_len == 0 {
            reporter.report(Progress::TaskIncrement);
        }
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(count)
}
