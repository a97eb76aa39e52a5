//! Downscaling for the bounded crop output.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// `DecodeError::InvalidFormat` for zero target dimensions,
/// `DecodeError::CorruptedFile` if the pixel buffer is inconsistent.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("pixel buffer size mismatch".to_string()))?;
    let resized = image::imageops::resize(&rgb, width, height, filter.to_image_filter());
    Ok(DecodedImage::from_rgb_image(resized))
}

/// Uniformly downscale so the larger dimension equals `max_edge`.
///
/// Images already within `max_edge` on both sides are returned unchanged;
/// this never upscales.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }
    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (width, height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, width, height, filter)
}

/// Dimensions that fit `max_edge` with the aspect ratio preserved: the
/// larger input dimension maps to exactly `max_edge`.
pub fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;
    if width >= height {
        let scaled = (max_edge as f64 / ratio).round() as u32;
        (max_edge, scaled.max(1))
    } else {
        let scaled = (max_edge as f64 * ratio).round() as u32;
        (scaled.max(1), max_edge)
    }
}
