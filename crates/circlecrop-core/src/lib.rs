//! Circlecrop Core - circular crop geometry and pixel operations
//!
//! This crate holds everything needed to crop a circular region out of a
//! photo that the user pans and zooms under a fixed crop window:
//!
//! - `geometry` - virtual image bounds, containment enforcement, and the
//!   screen-to-source pixel mapping
//! - `decode` - orientation-corrected image decoding and downscaling
//! - `crop` - extraction of the final pixel region at a bounded resolution
//!
//! All geometry is pure and synchronous; the session driver crate layers
//! events and background work on top.

pub mod crop;
pub mod decode;
pub mod geometry;

pub use crop::{crop_and_downscale, CropError, OUTPUT_BITMAP_RESOLUTION};
pub use decode::{decode_image, DecodeError, DecodedImage, FilterType, Orientation};
pub use geometry::{
    aspect_correction, enforce_bounds, map_crop_to_source_pixels, virtual_image_bounds, CropFrame,
    Point, Rect, Transform, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE,
};
