use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::rendezvous::{ParameterStage, StageOutcome};
use tracing::{info, instrument};

/// Publishes (rank 0) or awaits (every other rank) the shared parameter file.
#[instrument(skip_all, name = "stage_workflow", fields(rank = rank))]
pub fn run(
    stage: &ParameterStage,
    rank: usize,
    reporter: &ProgressReporter,
) -> Result<StageOutcome, EngineError> {
    let phase = if rank == 0 { "Publishing" } else { "Waiting" };
    reporter.report(Progress::PhaseStart { name: phase });
    let outcome = stage.stage(rank)?;
    reporter.report(Progress::PhaseFinish);

    match outcome {
        StageOutcome::Published => info!(
            "Rank {} published {}.",
            rank,
            stage.target().display()
        ),
        StageOutcome::Observed { waited } => info!(
            "Rank {} found {} after {:.1}s.",
            rank,
            stage.target().display(),
            waited.as_secs_f64()
        ),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn rank_zero_then_rank_one_both_succeed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("polyDisperseVars.toml"), "chiN = 14.0\n").unwrap();
        let stage = ParameterStage::new(&dir.path().join("polyDisperse.toml"), dir.path())
            .with_poll_interval(Duration::from_millis(1))
            .with_timeout(Duration::from_secs(1));
        let reporter = ProgressReporter::new();

        assert_eq!(run(&stage, 0, &reporter).unwrap(), StageOutcome::Published);
        assert!(matches!(
            run(&stage, 1, &reporter).unwrap(),
            StageOutcome::Observed { .. }
        ));
    }
}
