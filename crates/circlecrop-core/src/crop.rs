//! Final crop extraction and bounded downscale.

use thiserror::Error;
use tracing::{debug, warn};

use crate::decode::{resize_to_fit, DecodeError, DecodedImage, FilterType};
use crate::geometry::Rect;

/// Default bound on the larger output dimension, in pixels.
pub const OUTPUT_BITMAP_RESOLUTION: u32 = 420;

/// Error types for the crop/downscale stage.
#[derive(Debug, Error)]
pub enum CropError {
    /// The pixel rectangle lies entirely outside the source image. Under a
    /// corrected transform this cannot happen; it indicates a stale or
    /// skipped bounds correction.
    #[error("crop region {left},{top}-{right},{bottom} lies outside the {width}x{height} source")]
    OutOfBounds {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        width: u32,
        height: u32,
    },

    /// The source image has no pixels.
    #[error("source image is empty")]
    EmptySource,

    /// Downscaling the extracted region failed.
    #[error("downscale failed: {0}")]
    Downscale(#[from] DecodeError),
}

/// Extract `pixel_rect` from the source and downscale to a bounded size.
///
/// The rectangle comes from
/// [`map_crop_to_source_pixels`](crate::geometry::map_crop_to_source_pixels)
/// and is expected to be in bounds already. A rectangle that partially
/// escapes the source is clamped with a warning rather than rejected - an
/// escape means a correction was skipped, and clamping loses at most the
/// sliver that was never backed by pixels. A rectangle with no in-bounds
/// area at all is an error.
///
/// When either extracted dimension exceeds `max_output_dimension`, the
/// result is uniformly downscaled so the larger dimension equals
/// `max_output_dimension`. The output is always 3-channel RGB8.
pub fn crop_and_downscale(
    image: &DecodedImage,
    pixel_rect: &Rect,
    max_output_dimension: u32,
) -> Result<DecodedImage, CropError> {
    if image.is_empty() {
        return Err(CropError::EmptySource);
    }

    let src_w = image.width as f32;
    let src_h = image.height as f32;
    let left = pixel_rect.top_left.x;
    let top = pixel_rect.top_left.y;
    let right = pixel_rect.bottom_right.x;
    let bottom = pixel_rect.bottom_right.y;

    if left < 0.0 || top < 0.0 || right > src_w || bottom > src_h {
        warn!(
            left, top, right, bottom,
            src_width = image.width,
            src_height = image.height,
            "crop rectangle escapes source bounds, clamping"
        );
    }

    let px_left = left.clamp(0.0, src_w).round() as u32;
    let px_top = top.clamp(0.0, src_h).round() as u32;
    let px_right = right.clamp(0.0, src_w).round() as u32;
    let px_bottom = bottom.clamp(0.0, src_h).round() as u32;

    if px_right <= px_left || px_bottom <= px_top {
        return Err(CropError::OutOfBounds {
            left,
            top,
            right,
            bottom,
            width: image.width,
            height: image.height,
        });
    }

    let out_w = px_right - px_left;
    let out_h = px_bottom - px_top;
    let row_bytes = (out_w * 3) as usize;
    let mut output = vec![0u8; (out_w * out_h * 3) as usize];

    for y in 0..out_h {
        let src_start = (((px_top + y) * image.width + px_left) * 3) as usize;
        let dst_start = (y as usize) * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    let cropped = DecodedImage::new(out_w, out_h, output);
    debug!(
        crop_width = out_w,
        crop_height = out_h,
        max_output_dimension,
        "extracted crop region"
    );

    let result = resize_to_fit(&cropped, max_output_dimension, FilterType::Bilinear)?;
    Ok(result)
}
