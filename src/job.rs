use std::path::PathBuf;

use tracing::warn;

use crate::error::{Result, SpeedError};

/// Single-stage range of ffmpeg's `atempo` filter. Factors outside this
/// range must be expressed as a chain of in-range stages.
const ATEMPO_MIN: f64 = 0.5;
const ATEMPO_MAX: f64 = 2.0;

/// One speed-change job: where to read, where to write, and the tempo
/// multiplier (1.0 = unchanged, > 1.0 faster, < 1.0 slower).
///
/// The output path is overwritten unconditionally when the job runs.
#[derive(Debug, Clone)]
pub struct SpeedJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub speed: f64,
}

impl SpeedJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, speed: f64) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            speed,
        }
    }

    /// Checks the job invariants before anything is spawned.
    ///
    /// Only the shape of the job is validated here; whether `input` exists
    /// and is decodable is left to ffmpeg.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SpeedError::InvalidSpeed(self.speed));
        }
        if self.input.as_os_str().is_empty() {
            return Err(SpeedError::EmptyPath("input"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(SpeedError::EmptyPath("output"));
        }
        Ok(())
    }

    /// The `atempo` filter expression for this job's speed factor.
    ///
    /// `atempo` accepts factors in [0.5, 2.0] per stage. Factors outside
    /// that range are decomposed into a comma-joined chain of in-range
    /// stages that multiply back to the requested factor; the whole chain
    /// remains a single `-filter:a` value.
    pub fn filter_expr(&self) -> String {
        let mut remaining = self.speed;
        let mut stages = Vec::new();
        while remaining > ATEMPO_MAX {
            stages.push(ATEMPO_MAX);
            remaining /= ATEMPO_MAX;
        }
        while remaining < ATEMPO_MIN {
            stages.push(ATEMPO_MIN);
            remaining /= ATEMPO_MIN;
        }
        stages.push(remaining);

        if stages.len() > 1 {
            warn!(
                speed = self.speed,
                stages = stages.len(),
                "speed factor outside single-stage atempo range, chaining filters"
            );
        }

        stages
            .iter()
            .map(|stage| format!("atempo={stage}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
