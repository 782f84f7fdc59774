use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Byte sink for one utility invocation: `--output PATH`, or locked stdout.
///
/// Bytes pass through untouched; no text encoding is applied.
pub fn create_writer(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
