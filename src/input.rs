use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::Result;

/// Byte source for one utility invocation: a file path, or stdin for `-`.
pub enum InputReader {
    File(BufReader<File>),
    Stdin(io::StdinLock<'static>),
}

impl InputReader {
    /// Open `path`, treating the literal `-` as stdin.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        if path.as_ref().as_os_str() == "-" {
            Ok(Self::Stdin(io::stdin().lock()))
        } else {
            Ok(Self::File(BufReader::new(File::open(path)?)))
        }
    }

    fn reader(&mut self) -> &mut dyn Read {
        match self {
            Self::File(reader) => reader,
            Self::Stdin(lock) => lock,
        }
    }

    /// Read the entire input into memory.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader().read_to_end(&mut data)?;
        Ok(data)
    }

    /// Feed the input to `callback` in chunks of at most `chunk_size` bytes.
    pub fn process_chunks<F>(&mut self, chunk_size: usize, mut callback: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        let mut buffer = vec![0u8; chunk_size];

        loop {
            let bytes_read = self.reader().read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            callback(&buffer[..bytes_read])?;
        }

        Ok(())
    }
}
