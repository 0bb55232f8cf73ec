use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use asciiart::{TokenEncoding, TokenLayout, TranscodeConfig};
use clap::{Parser, ValueEnum};

/// Channel order of the colour tokens
#[derive(ValueEnum, Copy, Clone, PartialEq, Eq, Debug)]
#[value(rename_all = "lower")]
enum Layout {
    /// red, red, green
    Rrg,
    /// red, red, red
    Rrr,
    /// red, green, blue
    Rgb,
}

impl From<Layout> for TokenLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Rrg => TokenLayout::Rrg,
            Layout::Rrr => TokenLayout::Rrr,
            Layout::Rgb => TokenLayout::Rgb,
        }
    }
}

/// Image to colour-escaped text converter
///
/// Prints one line per pixel row: a colour token for every run of identical
/// colour, one space per upscaled pixel and a terminator at the end.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to convert
    #[arg(value_name = "FILE", default_value = "Terminal.png")]
    input: PathBuf,
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Horizontal upscaling factor
    #[arg(short, long, default_value_t = 1.5)]
    scale: f64,
    /// Channel order of the colour tokens
    #[arg(short, long, value_enum, default_value_t = Layout::Rrg)]
    layout: Layout,
    /// Emit control bytes instead of escape text
    #[arg(long)]
    raw: bool,
    /// Start a new colour run when only alpha changes
    #[arg(long = "alpha-runs")]
    alpha_runs: bool,
}

impl Cli {
    fn config(&self) -> TranscodeConfig {
        TranscodeConfig {
            scale: self.scale,
            layout: self.layout.into(),
            encoding: if self.raw {
                TokenEncoding::Raw
            } else {
                TokenEncoding::Escaped
            },
            alpha_splits_runs: self.alpha_runs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid arguments")?;

    log::info!("Converting {:?} with {:?}", cli.input, config);

    let image = asciiart::load_image(&cli.input)?;
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    asciiart::write_image(&image, &config, writer)?;

    log::info!(
        "Wrote {} lines to {}",
        image.height(),
        cli.output
            .as_deref()
            .map_or_else(|| "stdout".to_owned(), |p| p.display().to_string())
    );
    Ok(())
}
