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
    name       = "zinflate",
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Decompress an RFC 1950 zlib stream",
    long_about = None,
)]
struct Cli {
    /// Input zlib stream (use "-" for stdin).
    #[arg(value_name = "FILE")]
    input: PathBuf,

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
    let decompressed = zlib::decompress(&data)
        .with_context(|| format!("failed to decompress {}", cli.input.display()))?;

    log::info!("inflated {} bytes to {}", data.len(), decompressed.len());

    let mut writer = output::create_writer(cli.output.as_deref())?;
    writer.write_all(&decompressed)?;
    writer.flush()?;

    Ok(())
}
