//! Headless studio: runs a demo draw script through the host and writes the
//! presented frames as PNG files.

mod fonts;
mod png_surface;
mod smiley;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use scrim_canvas::FontFace;
use scrim_host::logging::{init_logging, LoggingConfig};
use scrim_host::Host;

use crate::png_surface::PngSequence;
use crate::smiley::Smiley;

#[derive(Parser, Debug)]
#[command(name = "scrim-studio", version, about = "Render a scrim draw script to PNG frames")]
struct Cli {
    /// Window options JSON (width, height, layer, anchor, ...). Built-in defaults when omitted.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Number of frames to render
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Directory receiving frame-NNNNN.png files
    #[arg(long, value_name = "DIR", default_value = "frames")]
    out: PathBuf,

    /// Write every Nth presented frame only
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// TrueType/OpenType font for text; a system sans-serif is tried when omitted
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long, default_value_t = FontFace::DEFAULT_SIZE)]
    font_size: f32,

    /// Draw the frame-rate overlay
    #[arg(long)]
    fps: bool,

    /// Target frame interval in milliseconds (0 renders back to back)
    #[arg(long, default_value_t = 16)]
    interval_ms: u64,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..LoggingConfig::default() });

    let surface = PngSequence::new(&cli.out, cli.every)?;
    let interval = (cli.interval_ms > 0).then(|| Duration::from_millis(cli.interval_ms));

    let mut host = Host::new(Smiley::new(cli.options.clone()), surface)?
        .show_fps(cli.fps)
        .frame_interval(interval);

    match fonts::load(cli.font.as_deref()).context("failed to read font")? {
        Some(bytes) => {
            let face = FontFace::from_bytes(&bytes, cli.font_size).context("failed to parse font")?;
            host = host.with_font(face);
        }
        None => log::warn!("no font found; text will not be drawn"),
    }

    let stats = host.run(Some(cli.frames))?;
    log::info!(
        "{} frame(s) presented, {} skipped, {} written to {}",
        stats.presented,
        stats.skipped,
        host.surface().written(),
        cli.out.display()
    );
    Ok(())
}
