//! Containment correction: keep the image covering the crop circle.
//!
//! After every gesture the image may have been panned or zoomed so that part
//! of the crop circle hangs over empty background. `enforce_bounds` computes
//! the closest transform whose virtual image bounds fully contain the crop
//! box again: translation when the image span is large enough, a rescale
//! only when it is not.
//!
//! The correction is closed-form. Each axis is resolved independently, X
//! first, with the already-adjusted rectangle fed into the Y pass; a rescale
//! on one axis symmetrically expands the other axis about its midpoint so
//! the single uniform scale stays consistent. The X-before-Y order is an
//! arbitrary but fixed tie-break.

use tracing::debug;

use super::{virtual_image_bounds, Point, Rect, Transform};

/// Correct `transform` so its virtual image bounds contain `crop_bounds`.
///
/// Returns the input unchanged when the containment already holds (the
/// function is idempotent) or when either rectangle has zero area (nothing
/// meaningful to correct against; the previous transform is retained).
pub fn enforce_bounds(image_bounds: &Rect, transform: Transform, crop_bounds: &Rect) -> Transform {
    if image_bounds.is_empty() || crop_bounds.is_empty() {
        return transform;
    }

    let virtual_bounds = virtual_image_bounds(image_bounds, &transform);
    if virtual_bounds.contains_rect(crop_bounds) {
        return transform;
    }

    let mut left = virtual_bounds.top_left.x;
    let mut top = virtual_bounds.top_left.y;
    let mut right = virtual_bounds.bottom_right.x;
    let mut bottom = virtual_bounds.bottom_right.y;

    // X axis: shift when the span suffices, otherwise snap the span to the
    // crop box and expand Y symmetrically to keep the scale uniform.
    let span_x = right - left;
    if span_x >= crop_bounds.width() {
        if right < crop_bounds.bottom_right.x {
            let shift = crop_bounds.bottom_right.x - right;
            left += shift;
            right += shift;
        } else if left > crop_bounds.top_left.x {
            let shift = left - crop_bounds.top_left.x;
            left -= shift;
            right -= shift;
        }
    } else {
        let scale_x = crop_bounds.width() / span_x;
        left = crop_bounds.top_left.x;
        right = crop_bounds.bottom_right.x;
        let add_y = (bottom - top) * (scale_x - 1.0);
        top -= add_y / 2.0;
        bottom += add_y / 2.0;
    }

    // Y axis, against the rectangle the X pass produced.
    let span_y = bottom - top;
    if span_y >= crop_bounds.height() {
        if bottom < crop_bounds.bottom_right.y {
            let shift = crop_bounds.bottom_right.y - bottom;
            top += shift;
            bottom += shift;
        } else if top > crop_bounds.top_left.y {
            let shift = top - crop_bounds.top_left.y;
            top -= shift;
            bottom -= shift;
        }
    } else {
        let scale_y = crop_bounds.height() / span_y;
        top = crop_bounds.top_left.y;
        bottom = crop_bounds.bottom_right.y;
        let add_x = (right - left) * (scale_y - 1.0);
        left -= add_x / 2.0;
        right += add_x / 2.0;
    }

    // Solve scale and pan so the virtual-bounds formula reproduces the
    // adjusted rectangle exactly.
    let scale = (right - left) / image_bounds.width();
    let delta = scale - 1.0;
    let pan = Point::new(
        left + delta * image_bounds.width() / 2.0 - image_bounds.top_left.x,
        top + delta * image_bounds.height() / 2.0 - image_bounds.top_left.y,
    );

    debug!(
        old_scale = transform.scale,
        new_scale = scale,
        pan_x = pan.x,
        pan_y = pan.y,
        "corrected transform to cover crop bounds"
    );

    Transform::new(pan, scale)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
