//! Screen-space geometry for the circular crop frame.
//!
//! The crop window is a fixed circle; the image underneath it is panned and
//! zoomed by the user. Everything in this module is pure rectangle math over
//! three pieces of state:
//!
//! 1. `image_bounds` - the laid-out, pre-transform bounds of the image
//! 2. `transform` - the user's pan offset and uniform zoom scale
//! 3. `crop_circle_bounds` - the axis-aligned bounding box of the crop circle
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the viewport
//! - X grows right, Y grows down
//! - Screen coordinates are `f32`; conversion to source pixels happens only
//!   in [`map_crop_to_source_pixels`]

mod enforce;
mod pixel_map;
mod types;
mod virtual_bounds;

pub use enforce::enforce_bounds;
pub use pixel_map::map_crop_to_source_pixels;
pub use types::{aspect_correction, CropFrame, Point, Rect, Transform};
pub use types::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
pub use virtual_bounds::virtual_image_bounds;
