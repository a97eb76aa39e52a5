//! Format-guessed decoding with EXIF orientation correction.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image from raw bytes, applying EXIF orientation correction.
///
/// The container format is sniffed from the bytes. The returned image is
/// RGB8 and already rotated/flipped per its EXIF orientation tag, so callers
/// never have to reason about orientation again.
///
/// # Errors
///
/// [`DecodeError::InvalidFormat`] when the bytes are not a recognized image
/// container, [`DecodeError::CorruptedFile`] when decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // Orientation comes from the raw bytes, before decoding
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    let rgb = oriented.into_rgb8();
    debug!(
        width = rgb.width(),
        height = rgb.height(),
        ?orientation,
        "decoded crop source"
    );
    Ok(DecodedImage::from_rgb_image(rgb))
}

/// Extract the EXIF orientation tag from raw image bytes.
///
/// Missing EXIF data, an unreadable tag, or an out-of-range value all yield
/// `Orientation::Normal` (fail closed).
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90Cw => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270Cw => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    /// Encode a small gradient image as PNG bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(8, 5);
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width, 8);
        assert_eq!(img.height, 5);
        assert_eq!(img.pixels.len(), 8 * 5 * 3);
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(16, 16);
        let result = decode_image(&bytes[..40]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_orientation_without_exif() {
        // PNG output carries no EXIF block
        let bytes = png_bytes(4, 4);
        assert_eq!(read_orientation(&bytes), Orientation::Normal);
        assert_eq!(read_orientation(&[0xde, 0xad]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let pixels = vec![
            255, 0, 0, // red, left
            0, 255, 0, // green, right
        ];
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(2, 1, pixels).unwrap());

        let rotated = apply_orientation(img, Orientation::Rotate90Cw).into_rgb8();
        assert_eq!(rotated.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180_reverses_pixels() {
        let pixels = vec![255, 0, 0, 0, 255, 0];
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(2, 1, pixels).unwrap());

        let rotated = apply_orientation(img, Orientation::Rotate180).into_rgb8();
        assert_eq!(rotated.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(rotated.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let pixels = vec![255, 0, 0, 0, 255, 0];
        let img = DynamicImage::ImageRgb8(RgbImage::from_raw(2, 1, pixels).unwrap());

        let flipped = apply_orientation(img, Orientation::FlipHorizontal).into_rgb8();
        assert_eq!(flipped.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(flipped.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
