use std::io::{self, Write};

/// Formats bytes as binary text, least-significant bit first.
///
/// DEFLATE fills bytes starting from the least-significant bit, so this
/// ordering matches how an inflater consumes the stream. Bytes are separated
/// by a single space and grouped `bytes_per_line` to a line; the byte counter
/// survives across chunks, so grouping does not depend on read boundaries.
pub struct BitDumper {
    bytes_per_line: u64,
    count: u64,
}

impl BitDumper {
    /// `bytes_per_line` must be nonzero.
    pub fn new(bytes_per_line: u64) -> Self {
        Self {
            bytes_per_line,
            count: 0,
        }
    }

    /// Write the bits of `chunk`, continuing any line in progress.
    pub fn write_chunk<W: Write>(&mut self, chunk: &[u8], writer: &mut W) -> io::Result<()> {
        for &byte in chunk {
            for bit in 0..8 {
                let digit = if byte & (1 << bit) != 0 { b'1' } else { b'0' };
                writer.write_all(&[digit])?;
            }
            writer.write_all(b" ")?;

            self.count += 1;
            if self.count % self.bytes_per_line == 0 {
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Terminate the dump with a final newline.
    pub fn finish<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(chunks: &[&[u8]], per_line: u64) -> Vec<u8> {
        let mut dumper = BitDumper::new(per_line);
        let mut out = Vec::new();
        for chunk in chunks {
            dumper.write_chunk(chunk, &mut out).unwrap();
        }
        dumper.finish(&mut out).unwrap();
        out
    }

    #[test]
    fn test_bits_are_lsb_first() {
        assert_eq!(dump(&[&[0x01]], 8), b"10000000 \n");
        assert_eq!(dump(&[&[0x80]], 8), b"00000001 \n");
    }

    #[test]
    fn test_line_breaks_every_n_bytes() {
        let out = dump(&[&[0x00, 0xFF, 0x00]], 2);
        assert_eq!(out, b"00000000 11111111 \n00000000 \n");
    }

    #[test]
    fn test_grouping_ignores_chunk_boundaries() {
        let whole = dump(&[&[1, 2, 3, 4]], 2);
        let split = dump(&[&[1], &[2, 3], &[4]], 2);
        assert_eq!(whole, split);
    }
}
