use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use spiral_core::SpiralArm;

#[derive(Parser)]
#[command(
    name = "spiral",
    version,
    about = "Print the total length of the spiral arm in millimeters"
)]
struct Cli {
    /// Log every generated segment to stderr
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let arm = SpiralArm::default();
    let segments = arm.segments();
    for (index, length) in segments.iter().enumerate() {
        tracing::debug!(index, length, "segment");
    }

    let total = segments.total();
    tracing::debug!(
        segments = segments.len(),
        innermost = segments.last().unwrap_or_default(),
        closed_form = arm.closed_form_length(),
        "total length {total}mm"
    );
    if !arm.is_tapering() {
        tracing::warn!(
            ratio = arm.downscale_ratio,
            "downscale ratio outside (0, 1): segments do not taper"
        );
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{total}").context("failed to write total length")?;
    Ok(())
}
