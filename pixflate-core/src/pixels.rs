use std::io::{self, Write};

use image::RgbImage;

use crate::errors::FrameError;

/// Decoded image flattened to 8-bit RGB.
///
/// Alpha channels, palette indexing and wider sample depths are discarded
/// during conversion; every pixel is exactly three channel values in 0-255.
///
/// # Example
///
/// ```rust,no_run
/// use pixflate_core::pixels::RgbFrame;
///
/// let bytes = std::fs::read("image.png")?;
/// let frame = RgbFrame::from_bytes(&bytes)?;
///
/// for [r, g, b] in frame.triples() {
///     println!("{r} {g} {b}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct RgbFrame {
    image: RgbImage,
}

impl RgbFrame {
    /// Decode `bytes` as any supported raster format and convert to RGB8.
    ///
    /// The container format is guessed from the magic bytes, so the one
    /// decode path serves PNG, JPEG, BMP and the rest alike.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        let decoded = image::load_from_memory(bytes)?;
        log::debug!(
            "decoded {}x{} image, source color type {:?}",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(Self {
            image: decoded.to_rgb8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Channel values of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Pixels in row-major order: all columns of row 0, then row 1, and so on.
    pub fn triples(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.image.pixels().map(|pixel| pixel.0)
    }

    /// Write one decimal `R G B` line per pixel in row-major order.
    ///
    /// Emits exactly `width * height` lines and nothing else.
    pub fn write_triples<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for [r, g, b] in self.triples() {
            writeln!(writer, "{r} {g} {b}")?;
        }
        Ok(())
    }
}

impl From<RgbImage> for RgbFrame {
    fn from(image: RgbImage) -> Self {
        Self { image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn red_green_frame() -> RgbFrame {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        RgbFrame::from(image)
    }

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_triples_are_row_major() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([1, 2, 3]));
        image.put_pixel(1, 0, Rgb([4, 5, 6]));
        image.put_pixel(0, 1, Rgb([7, 8, 9]));
        image.put_pixel(1, 1, Rgb([10, 11, 12]));

        let triples: Vec<_> = RgbFrame::from(image).triples().collect();
        assert_eq!(
            triples,
            vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]]
        );
    }

    #[test]
    fn test_write_triples_exact_output() -> io::Result<()> {
        let mut out = Vec::new();
        red_green_frame().write_triples(&mut out)?;
        assert_eq!(out, b"255 0 0\n0 255 0\n");
        Ok(())
    }

    #[test]
    fn test_line_count_matches_dimensions() -> io::Result<()> {
        let frame = RgbFrame::from(RgbImage::new(3, 4));
        let mut out = Vec::new();
        frame.write_triples(&mut out)?;

        let lines = out.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();
        assert_eq!(lines, 12);
        Ok(())
    }

    #[test]
    fn test_decodes_png_container() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        let bytes = encode_png(DynamicImage::ImageRgb8(image));

        let frame = RgbFrame::from_bytes(&bytes).unwrap();
        assert_eq!((frame.width(), frame.height()), (2, 1));
        assert_eq!(frame.pixel(0, 0), [255, 0, 0]);
        assert_eq!(frame.pixel(1, 0), [0, 255, 0]);
    }

    #[test]
    fn test_alpha_is_discarded() {
        let mut image = RgbaImage::new(1, 1);
        image.put_pixel(0, 0, Rgba([9, 8, 7, 0]));
        let bytes = encode_png(DynamicImage::ImageRgba8(image));

        let frame = RgbFrame::from_bytes(&bytes).unwrap();
        assert_eq!(frame.pixel(0, 0), [9, 8, 7]);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = RgbFrame::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(FrameError::Decode(_))));
    }
}
