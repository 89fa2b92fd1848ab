//! Change the playback speed of audio files without altering pitch.
//!
//! All resampling is delegated to an external `ffmpeg` binary and its
//! `atempo` audio filter; this crate builds the invocation, runs it to
//! completion, and turns failures into typed errors.

pub mod error;
pub mod ffmpeg;
pub mod job;

pub use error::{Result, SpeedError};
pub use ffmpeg::FfmpegInvoker;
pub use job::SpeedJob;
