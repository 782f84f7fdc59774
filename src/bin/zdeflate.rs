use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

use pixflate::cli::{self, LogArgs};
use pixflate::input::InputReader;
use pixflate::output;
use pixflate_core::zlib;

#[derive(Debug, ClapParser)]
#[command(
    name       = "zdeflate",
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Compress a file into an RFC 1950 zlib stream",
    long_about = None,
)]
struct Cli {
    /// Input file (use "-" for stdin).
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Compression level, 0 (store) through 9 (best).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9), default_value_t = zlib::DEFAULT_LEVEL)]
    level: u32,

    /// Write to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log)?;

    let data = InputReader::open(&cli.input)
        .and_then(|mut reader| reader.read_all())
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let compressed = zlib::compress(&data, cli.level)?;

    log::info!(
        "deflated {} bytes to {} at level {}",
        data.len(),
        compressed.len(),
        cli.level
    );

    let mut writer = output::create_writer(cli.output.as_deref())?;
    writer.write_all(&compressed)?;
    writer.flush()?;

    Ok(())
}
