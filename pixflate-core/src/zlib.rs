use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::errors::CodecError;

/// zlib's own default level, a speed/ratio middle ground rather than maximum.
pub const DEFAULT_LEVEL: u32 = 6;

/// Wrap `data` in an RFC 1950 zlib stream.
///
/// `level` selects the DEFLATE effort, 0 (store) through 9 (best).
/// Output is deterministic for a fixed input and level; byte stability
/// across other zlib implementations is not promised.
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>, CodecError> {
    if level > 9 {
        return Err(CodecError::InvalidLevel(level));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(data).map_err(CodecError::Io)?;
    let compressed = encoder.finish().map_err(CodecError::Io)?;

    log::debug!(
        "deflated {} bytes to {} at level {level}",
        data.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Inflate a whole RFC 1950 zlib stream.
///
/// Truncated or non-zlib input yields [`CodecError::Corrupt`]; no partial
/// output is returned.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(CodecError::Corrupt)?;

    log::debug!("inflated {} bytes to {}", data.len(), decompressed.len());
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_levels() -> Result<(), CodecError> {
        let data = b"the quick brown fox jumps over the lazy dog ".repeat(20);
        for level in 0..=9 {
            let compressed = compress(&data, level)?;
            assert_eq!(decompress(&compressed)?, data);
        }
        Ok(())
    }

    #[test]
    fn test_empty_input_round_trips() -> Result<(), CodecError> {
        let compressed = compress(b"", DEFAULT_LEVEL)?;
        assert!(decompress(&compressed)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_stream_carries_zlib_magic() {
        let compressed = compress(b"abc", DEFAULT_LEVEL).unwrap();
        // CMF byte: deflate method, 32K window
        assert_eq!(compressed[0], 0x78);
    }

    #[test]
    fn test_corrupt_stream_is_rejected() {
        let result = decompress(b"not a zlib stream");
        assert!(matches!(result, Err(CodecError::Corrupt(_))));
    }

    #[test]
    fn test_truncated_stream_is_rejected() {
        let compressed = compress(b"a moderately sized input buffer", DEFAULT_LEVEL).unwrap();
        let truncated = &compressed[..compressed.len() - 5];
        assert!(decompress(truncated).is_err());
    }

    #[test]
    fn test_level_out_of_range() {
        assert!(matches!(compress(b"", 10), Err(CodecError::InvalidLevel(10))));
    }
}
