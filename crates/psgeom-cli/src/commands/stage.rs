use crate::cli::StageArgs;
use crate::error::Result;
use psgeom::engine::progress::ProgressReporter;
use psgeom::engine::rendezvous::{ParameterStage, StageOutcome};
use psgeom::workflows;
use std::time::Duration;
use tracing::info;

pub fn run(args: StageArgs) -> Result<()> {
    let stage = ParameterStage::new(&args.job, &args.work_dir)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_poll_interval(Duration::from_millis(args.poll_ms));
    info!(
        "Rank {} staging {} -> {}",
        args.rank,
        stage.source().display(),
        stage.target().display()
    );

    match workflows::stage::run(&stage, args.rank, &ProgressReporter::new())? {
        StageOutcome::Published => println!(
            "✓ Copied {} to {}",
            stage.source().display(),
            stage.target().display()
        ),
        StageOutcome::Observed { waited } => println!(
            "✓ Found {} after {:.1}s",
            stage.target().display(),
            waited.as_secs_f64()
        ),
    }
    Ok(())
}
