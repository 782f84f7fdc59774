use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

use pixflate::cli::{self, LogArgs};
use pixflate::input::InputReader;
use pixflate_core::pixels::RgbFrame;

#[derive(Debug, ClapParser)]
#[command(
    name       = "pixpeek",
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Print the pixels of the working directory's image.png as R G B triples",
    long_about = None,
)]
struct Cli {
    /// Input image; defaults to image.png in the working directory.
    #[arg(value_name = "IMAGE", default_value = "image.png")]
    input: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log)?;

    let data = InputReader::open(&cli.input)
        .and_then(|mut reader| reader.read_all())
        .with_context(|| format!("failed to open image {}", cli.input.display()))?;
    let frame = RgbFrame::from_bytes(&data)
        .with_context(|| format!("failed to decode image {}", cli.input.display()))?;

    log::info!(
        "dumping {}x{} pixels from {}",
        frame.width(),
        frame.height(),
        cli.input.display()
    );

    let mut writer = BufWriter::new(io::stdout().lock());
    frame.write_triples(&mut writer)?;
    writer.flush()?;

    Ok(())
}
