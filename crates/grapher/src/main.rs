// File: crates/grapher/src/main.rs
// Summary: Driver: builds the graph data, renders the stack and writes the image file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bargraph_core::palette::{DARK_GRAY, LIGHT_GRAY};
use bargraph_core::{GraphConfig, PanelConfig, RenderContext, SegmentConfig};
use clap::Parser;
use tracing::info;

/// Render stacked bar graphs (image size, boot time) into one image.
#[derive(Debug, Parser)]
#[command(name = "grapher", version, about)]
struct Cli {
    /// Output image; the encoding follows the extension.
    #[arg(default_value = "graph.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&graph(), &cli.output)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn run(config: &GraphConfig, output: &Path) -> Result<()> {
    let ctx = RenderContext::default();
    let mut stack = config.build();
    let canvas = stack.render(&ctx).context("failed to render graph")?;
    canvas
        .save(output)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    info!("Wrote {} ({}x{})", output.display(), canvas.width(), canvas.height());
    Ok(())
}

fn graph() -> GraphConfig {
    GraphConfig {
        width: 600,
        spacing: 10,
        panels: vec![
            PanelConfig::new(
                "Image Size",
                vec![
                    SegmentConfig::new(6349.0, DARK_GRAY, "6 349KiB", "kernel(bz)"),
                    SegmentConfig::new(25240.0, LIGHT_GRAY, "25 240KiB", "rootfs"),
                ],
            ),
            PanelConfig::new(
                "Boot time",
                vec![
                    SegmentConfig::new(6400.0, DARK_GRAY, "6.4s", "kernel"),
                    SegmentConfig::new(4900.0, LIGHT_GRAY, "4.9s", "userspace"),
                ],
            ),
        ],
    }
}
