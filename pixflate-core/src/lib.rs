//! Shared building blocks for the pixflate command-line utilities.
//!
//! Two concerns live here:
//!
//! 1. **Pixel access** ([`pixels`]): decode raster images and walk their
//!    pixels as 8-bit RGB triples in row-major order.
//! 2. **zlib streams** ([`zlib`]): wrap and unwrap RFC 1950 zlib containers
//!    around whole byte buffers.
//!
//! ```rust
//! use pixflate_core::zlib;
//!
//! let data = b"hello hello hello";
//! let compressed = zlib::compress(data, zlib::DEFAULT_LEVEL)?;
//! assert_eq!(zlib::decompress(&compressed)?, data);
//! # Ok::<(), pixflate_core::errors::CodecError>(())
//! ```

/// Error types for the frame and codec facilities.
pub mod errors;

/// Image decoding and row-major RGB pixel iteration.
pub mod pixels;

/// RFC 1950 zlib compression and decompression of whole buffers.
pub mod zlib;
