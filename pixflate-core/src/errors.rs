use std::io;

#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("undecodable image data: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("compression level must be 0-9, got {0}")]
    InvalidLevel(u32),

    #[error("corrupt zlib stream: {0}")]
    Corrupt(io::Error),

    #[error("zlib write failed: {0}")]
    Io(io::Error),
}
