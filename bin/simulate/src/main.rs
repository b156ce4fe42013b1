use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colourblind::{Argb, Color, Component, Simulator, Variant, DEFAULT_SEVERITY};
use image::RgbaImage;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "colourblind")]
#[command(about = "Simulate color vision deficiencies on images and colors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a variant on an image
    Apply {
        /// Image to read
        input: PathBuf,

        /// Where to write the simulated image
        output: PathBuf,

        /// Form of vision to simulate, e.g. "protanopia"
        #[arg(short, long, default_value = "deuteranomaly")]
        variant: Variant,

        /// Severity of the anomalous variants, from 0 to 1
        #[arg(short, long, default_value_t = DEFAULT_SEVERITY)]
        severity: Component,
    },
    /// Render a hue sweep as seen with every variant, one row per variant
    Swatches {
        /// Where to write the image
        output: PathBuf,

        /// Width of the image in pixels
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Height of each row in pixels
        #[arg(long, default_value_t = 100)]
        row_height: u32,

        /// Severity of the anomalous variants, from 0 to 1
        #[arg(short, long, default_value_t = DEFAULT_SEVERITY)]
        severity: Component,
    },
    /// Print a hex color as seen with every variant
    Colour {
        /// Color as #RGB, #RRGGBB or #AARRGGBB
        hex: String,

        /// Severity of the anomalous variants, from 0 to 1
        #[arg(short, long, default_value_t = DEFAULT_SEVERITY)]
        severity: Component,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            input,
            output,
            variant,
            severity,
        } => apply(input, output, Simulator::new(variant).with_severity(severity)),
        Commands::Swatches {
            output,
            width,
            row_height,
            severity,
        } => swatches(output, width, row_height, severity),
        Commands::Colour { hex, severity } => colour(&hex, severity),
    }
}

fn apply(input: PathBuf, output: PathBuf, simulator: Simulator) -> anyhow::Result<()> {
    let mut img = image::open(&input)
        .with_context(|| format!("could not read image from {}", input.display()))?
        .into_rgba8();

    info!(
        variant = %simulator.variant(),
        severity = simulator.severity(),
        width = img.width(),
        height = img.height(),
        "simulating"
    );
    simulator.transform_rgba8(&mut img);

    img.save(&output)
        .with_context(|| format!("could not write image to {}", output.display()))?;
    info!("wrote {}", output.display());

    Ok(())
}

/// A fully saturated color at `hue` in [0..1].
fn hue(hue: Component) -> Color {
    let h = hue * 6.0;
    Color::srgb(
        ((h - 3.0).abs() - 1.0).clamp(0.0, 1.0),
        (2.0 - (h - 2.0).abs()).clamp(0.0, 1.0),
        (2.0 - (h - 4.0).abs()).clamp(0.0, 1.0),
        1.0,
    )
}

fn swatches(
    output: PathBuf,
    width: u32,
    row_height: u32,
    severity: Component,
) -> anyhow::Result<()> {
    let (height, row_bytes) = swatch_layout(width, row_height)?;
    let mut img = RgbaImage::from_fn(width, height, |x, _| {
        let c = Argb::from_color(&hue(x as Component / width as Component));
        image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    });

    for (variant, row) in Variant::ALL.into_iter().zip(img.chunks_exact_mut(row_bytes)) {
        Simulator::new(variant)
            .with_severity(severity)
            .transform_rgba8(row);
    }

    img.save(&output)
        .with_context(|| format!("could not write image to {}", output.display()))?;
    info!(rows = ?Variant::ALL.map(|v| v.name()), "wrote {}", output.display());

    Ok(())
}

/// The image height and the number of RGBA8 bytes in one variant's row.
fn swatch_layout(width: u32, row_height: u32) -> anyhow::Result<(u32, usize)> {
    anyhow::ensure!(width > 0 && row_height > 0, "image dimensions must be positive");

    let height = row_height
        .checked_mul(Variant::ALL.len() as u32)
        .context("row height is too large")?;
    let row_bytes = (width as usize)
        .checked_mul(row_height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| bytes.checked_mul(Variant::ALL.len()).map(|_| bytes))
        .with_context(|| format!("a {width}x{height} image is too large"))?;

    Ok((height, row_bytes))
}

fn colour(hex: &str, severity: Component) -> anyhow::Result<()> {
    let argb: Argb = hex
        .parse()
        .with_context(|| format!("could not parse color {hex:?}"))?;

    for variant in Variant::ALL {
        let seen = Simulator::new(variant).with_severity(severity).transform(argb);
        println!("{:<14} {}  {}", variant.name(), seen, variant.description());
    }

    Ok(())
}
