//! Derivation of the virtual (post-transform) image bounds.

use super::{Point, Rect, Transform};

/// Compute the screen-space bounding box of the image after pan/zoom.
///
/// The image is scaled about its own center by `transform.scale`, then
/// shifted by `transform.pan`: each edge moves outward by
/// `dimension * (scale - 1) / 2` along its axis before the translation is
/// applied.
///
/// Pure and total over finite input. A degenerate `image_bounds` yields a
/// degenerate result; callers that divide by the output size must guard for
/// that themselves.
pub fn virtual_image_bounds(image_bounds: &Rect, transform: &Transform) -> Rect {
    let delta = transform.scale - 1.0;
    let grow_x = image_bounds.width() * delta / 2.0;
    let grow_y = image_bounds.height() * delta / 2.0;

    Rect::new(
        Point::new(
            image_bounds.top_left.x - grow_x + transform.pan.x,
            image_bounds.top_left.y - grow_y + transform.pan.y,
        ),
        Point::new(
            image_bounds.bottom_right.x + grow_x + transform.pan.x,
            image_bounds.bottom_right.y + grow_y + transform.pan.y,
        ),
    )
}
