//! Command-line entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use retempo::{FfmpegInvoker, SpeedJob};

/// Speed up or slow down an audio file without changing its pitch.
#[derive(Parser)]
#[command(name = "retempo")]
#[command(version, about = "Change audio playback speed with ffmpeg", long_about = None)]
struct Cli {
    /// Input audio file.
    input: PathBuf,
    /// Output audio file, overwritten if it already exists.
    output: PathBuf,
    /// Speed multiplier: 1.0 keeps the tempo, 2.0 doubles it, 0.5 halves it.
    #[arg(long, short)]
    speed: f64,
    /// ffmpeg binary to invoke.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
    /// Print debug output.
    #[arg(long, short)]
    verbose: bool,
}

/// Logs go to stderr; stdout is reserved for the completion message.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let job = SpeedJob::new(cli.input, cli.output, cli.speed);
    FfmpegInvoker::new(cli.ffmpeg)
        .run(&job)
        .with_context(|| format!("failed to change speed of {}", job.input.display()))?;

    println!("Speed-changed audio written to {}", job.output.display());
    Ok(())
}
