use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

use pixflate::bits::BitDumper;
use pixflate::cli::{self, LogArgs};
use pixflate::input::InputReader;

#[derive(Debug, ClapParser)]
#[command(
    name       = "bitdump",
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Print a byte stream as bits, least-significant bit first",
    long_about = None,
)]
struct Cli {
    /// Input file (defaults to stdin).
    #[arg(value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Bytes printed per output line.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), default_value_t = 8)]
    per_line: u64,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log)?;

    let mut reader = InputReader::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;

    let mut writer = BufWriter::new(io::stdout().lock());
    let mut dumper = BitDumper::new(cli.per_line);

    reader.process_chunks(64 * 1024, |chunk| {
        dumper.write_chunk(chunk, &mut writer)?;
        Ok(())
    })?;
    dumper.finish(&mut writer)?;
    writer.flush()?;

    Ok(())
}
