//! Error types for speed-change runs.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while preparing or running a speed-change job.
#[derive(Debug, Error)]
pub enum SpeedError {
    /// The speed factor is not a positive, finite number.
    #[error("invalid speed factor {0}: must be finite and greater than zero")]
    InvalidSpeed(f64),

    /// The input or output path is empty.
    #[error("{0} path is empty")]
    EmptyPath(&'static str),

    /// The ffmpeg binary could not be resolved on the execution path.
    #[error("{program}: command not found (install ffmpeg or pass --ffmpeg)")]
    ToolNotFound {
        /// The program name or path that failed to resolve.
        program: String,
    },

    /// Spawning the child process failed for a reason other than lookup.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// The program name or path being spawned.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// ffmpeg ran but exited with a non-zero status.
    #[error("ffmpeg exited with {status}:\n{stderr}")]
    ProcessFailed {
        /// Exit status reported by the child process.
        status: ExitStatus,
        /// Captured standard error from the child process.
        stderr: String,
    },
}

/// A specialized `Result` type for speed-change operations.
pub type Result<T> = std::result::Result<T, SpeedError>;
