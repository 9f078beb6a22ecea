//! Shared parameter-file rendezvous between the ranks of one simulation job.
//!
//! Every rank of a job reads its geometry parameters from a file with a fixed,
//! job-independent name. Rank 0 publishes the job-specific file under that name;
//! the other ranks block until it appears. Publishing writes a temporary sibling
//! and renames it into place, so a waiting rank never sees a partially written
//! file. Waiting is bounded by a timeout.

use super::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// File stem every rank reads the shared parameters from.
pub const CANONICAL_STEM: &str = "geometryVars";

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Job-specific parameter file for a job script: `nanoPtcl.toml` → `nanoPtclVars.toml`,
/// in the script's directory.
pub fn vars_file_for(job_script: &Path) -> PathBuf {
    let stem = job_script
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match job_script.extension() {
        Some(ext) => format!("{}Vars.{}", stem, ext.to_string_lossy()),
        None => format!("{}Vars", stem),
    };
    job_script.with_file_name(name)
}

/// Canonical shared name in `work_dir`, keeping the extension of `vars_file`.
pub fn canonical_path(work_dir: &Path, vars_file: &Path) -> PathBuf {
    let name = match vars_file.extension() {
        Some(ext) => format!("{}.{}", CANONICAL_STEM, ext.to_string_lossy()),
        None => CANONICAL_STEM.to_string(),
    };
    work_dir.join(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Published,
    Observed { waited: Duration },
}

#[derive(Debug, Clone)]
pub struct ParameterStage {
    source: PathBuf,
    target: PathBuf,
    poll_interval: Duration,
    timeout: Duration,
}

impl ParameterStage {
    pub fn new(job_script: &Path, work_dir: &Path) -> Self {
        let source = vars_file_for(job_script);
        let target = canonical_path(work_dir, &source);
        Self {
            source,
            target,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rank 0 publishes; every other rank waits.
    pub fn stage(&self, rank: usize) -> Result<StageOutcome, EngineError> {
        if rank == 0 {
            self.publish()?;
            Ok(StageOutcome::Published)
        } else {
            let waited = self.await_published()?;
            Ok(StageOutcome::Observed { waited })
        }
    }

    pub fn publish(&self) -> Result<(), EngineError> {
        let temp = self.temp_path();
        info!(
            "Publishing {} as {}",
            self.source.display(),
            self.target.display()
        );
        fs::copy(&self.source, &temp).map_err(|source| EngineError::Io {
            path: self.source.clone(),
            source,
        })?;
        fs::rename(&temp, &self.target).map_err(|source| {
            let _ = fs::remove_file(&temp);
            EngineError::Io {
                path: self.target.clone(),
                source,
            }
        })?;
        Ok(())
    }

    /// Blocks until the canonical file exists, returning how long that took.
    pub fn await_published(&self) -> Result<Duration, EngineError> {
        let start = Instant::now();
        loop {
            if self.target.is_file() {
                let waited = start.elapsed();
                debug!("Found {} after {:?}", self.target.display(), waited);
                return Ok(waited);
            }
            let elapsed = start.elapsed();
            if elapsed >= self.timeout {
                return Err(EngineError::RendezvousTimeout {
                    path: self.target.clone(),
                    waited: elapsed,
                });
            }
            thread::sleep(self.poll_interval.min(self.timeout - elapsed));
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| CANONICAL_STEM.to_string());
        self.target
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}
