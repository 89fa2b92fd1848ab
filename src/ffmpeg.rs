//! Invocation of the external ffmpeg binary.
//!
//! ffmpeg is treated as an opaque collaborator: its exit status and stderr
//! stream are the only failure signals, and both are captured here.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Result, SpeedError};
use crate::job::SpeedJob;

/// Runs [`SpeedJob`]s through an external ffmpeg binary.
#[derive(Debug, Clone)]
pub struct FfmpegInvoker {
    program: PathBuf,
}

impl Default for FfmpegInvoker {
    /// Invoker for plain `ffmpeg` resolved from the execution path.
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl FfmpegInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The arguments following the program name, always six tokens in a
    /// fixed order: `-y -i <input> -filter:a <expr> <output>`.
    pub fn args_for(job: &SpeedJob) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-i"),
            job.input.clone().into_os_string(),
            OsString::from("-filter:a"),
            OsString::from(job.filter_expr()),
            job.output.clone().into_os_string(),
        ]
    }

    /// Validates `job`, runs ffmpeg to completion, and inspects the exit
    /// status on every return path.
    ///
    /// A program that cannot be resolved maps to
    /// [`SpeedError::ToolNotFound`]; a non-zero exit (missing input,
    /// rejected filter expression, unwritable output) maps to
    /// [`SpeedError::ProcessFailed`] carrying the child's captured stderr.
    pub fn run(&self, job: &SpeedJob) -> Result<()> {
        job.validate()?;

        let args = Self::args_for(job);
        debug!(program = %self.program.display(), ?args, "invoking ffmpeg");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SpeedError::ToolNotFound {
                    program: self.program.display().to_string(),
                },
                _ => SpeedError::Spawn {
                    program: self.program.display().to_string(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(SpeedError::ProcessFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        info!(
            input = %job.input.display(),
            output = %job.output.display(),
            speed = job.speed,
            "ffmpeg finished"
        );
        Ok(())
    }
}
