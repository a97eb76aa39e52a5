//! Pure reducers over the crop frame.
//!
//! The frame is a plain value: each layout or gesture event produces the
//! next frame without hidden scheduling or observable cells. The session
//! driver applies these in order, one event at a time.

use circlecrop_core::{
    aspect_correction, enforce_bounds, CropFrame, Point, Rect, Transform,
};
use tracing::debug;

use crate::config::SessionConfig;
use crate::event::{GestureEvent, Viewport};

/// Recompute the laid-out geometry for a new viewport size or source image.
///
/// The crop circle is centered horizontally, lifted by the bottom padding,
/// with a radius filling the smaller viewport side minus the horizontal
/// padding. The image is aspect-fit: width-aligned on portrait viewports,
/// height-aligned otherwise, centered either way. The previous transform is
/// carried over and re-corrected against the new rectangles.
///
/// A degenerate viewport, padding larger than the viewport, or a degenerate
/// source aspect retains the previous frame unchanged.
pub fn apply_layout(
    frame: &CropFrame,
    config: &SessionConfig,
    viewport: Viewport,
    source_aspect: f32,
) -> CropFrame {
    if viewport.is_empty() || !source_aspect.is_finite() || source_aspect <= 0.0 {
        return *frame;
    }

    let min_side = viewport.width.min(viewport.height);
    let radius = (min_side - 2.0 * config.horizontal_padding) / 2.0;
    if radius <= 0.0 {
        return *frame;
    }

    let circle_center = Point::new(
        viewport.width / 2.0,
        (viewport.height - config.bottom_padding) / 2.0,
    );
    let crop_circle_bounds = Rect::from_circle(circle_center, radius);

    let (image_w, image_h) = if viewport.is_portrait() {
        let w = viewport.width - 2.0 * config.horizontal_padding;
        (w, w / source_aspect)
    } else {
        let h = viewport.height - 2.0 * config.horizontal_padding;
        (h * source_aspect, h)
    };
    let image_bounds = Rect::from_edges(
        (viewport.width - image_w) / 2.0,
        (viewport.height - image_h) / 2.0,
        (viewport.width + image_w) / 2.0,
        (viewport.height + image_h) / 2.0,
    );

    let transform = enforce_bounds(&image_bounds, frame.transform, &crop_circle_bounds);
    debug!(
        ?viewport,
        source_aspect,
        scale = transform.scale,
        "laid out crop frame"
    );

    CropFrame {
        image_bounds,
        transform,
        crop_circle_bounds,
    }
}

/// Apply one gesture event to the frame.
///
/// `Pan` and `Zoom` mutate the transform freely (zoom clamped to the
/// configured range, widened by the aspect correction); the containment
/// correction only runs on `End`, so mid-gesture the image may briefly
/// uncover the circle.
pub fn apply_gesture(
    frame: &CropFrame,
    event: GestureEvent,
    config: &SessionConfig,
    source_aspect: f32,
) -> CropFrame {
    if frame.is_degenerate() {
        return *frame;
    }

    let mut next = *frame;
    match event {
        GestureEvent::Pan { delta } => {
            next.transform.pan = next.transform.pan + delta;
        }
        GestureEvent::Zoom { factor } => {
            let max = config.max_zoom * aspect_correction(source_aspect);
            next.transform.scale = (next.transform.scale * factor).clamp(config.min_zoom, max);
        }
        GestureEvent::End => {
            next.transform = enforce_bounds(
                &frame.image_bounds,
                frame.transform,
                &frame.crop_circle_bounds,
            );
        }
    }
    next
}

/// Reset helper used when the source image is replaced mid-session.
pub(crate) fn reset_transform(frame: &CropFrame) -> CropFrame {
    CropFrame {
        transform: Transform::default(),
        ..*frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlecrop_core::virtual_image_bounds;

    const EPS: f32 = 1e-3;

    fn laid_out_frame(viewport: Viewport, aspect: f32) -> (CropFrame, SessionConfig) {
        let config = SessionConfig::default();
        let frame = apply_layout(&CropFrame::default(), &config, viewport, aspect);
        (frame, config)
    }

    fn assert_covered(frame: &CropFrame) {
        let v = virtual_image_bounds(&frame.image_bounds, &frame.transform);
        let crop = &frame.crop_circle_bounds;
        assert!(
            v.top_left.x <= crop.top_left.x + EPS
                && v.top_left.y <= crop.top_left.y + EPS
                && v.bottom_right.x >= crop.bottom_right.x - EPS
                && v.bottom_right.y >= crop.bottom_right.y - EPS,
            "crop circle {crop:?} not covered by {v:?}"
        );
    }

    #[test]
    fn test_layout_portrait_viewport() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);

        // Circle fills the width minus padding, centered horizontally
        assert!((frame.crop_circle_bounds.width() - (400.0 - 2.0 * config.horizontal_padding))
            .abs()
            < EPS);
        assert!((frame.crop_circle_bounds.center().x - 200.0).abs() < EPS);
        // Square image is width-aligned
        assert!((frame.image_bounds.width() - (400.0 - 2.0 * config.horizontal_padding)).abs()
            < EPS);
        assert_covered(&frame);
    }

    #[test]
    fn test_layout_landscape_viewport() {
        let (frame, _) = laid_out_frame(Viewport::new(800.0, 400.0), 2.0);

        // Height-aligned: image height fills the viewport minus padding
        assert!((frame.image_bounds.height() - (400.0 - 32.0)).abs() < EPS);
        assert!((frame.image_bounds.width() - 2.0 * frame.image_bounds.height()).abs() < EPS);
        assert_covered(&frame);
    }

    #[test]
    fn test_layout_bottom_padding_lifts_circle() {
        let mut config = SessionConfig::default();
        config.bottom_padding = 100.0;
        let frame = apply_layout(
            &CropFrame::default(),
            &config,
            Viewport::new(400.0, 800.0),
            1.0,
        );
        assert!((frame.crop_circle_bounds.center().y - 350.0).abs() < EPS);
    }

    #[test]
    fn test_layout_degenerate_viewport_retains_frame() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);
        let same = apply_layout(&frame, &config, Viewport::new(0.0, 800.0), 1.0);
        assert_eq!(same, frame);
        // Padding swallowing the whole viewport behaves the same way
        let same = apply_layout(&frame, &config, Viewport::new(20.0, 20.0), 1.0);
        assert_eq!(same, frame);
    }

    #[test]
    fn test_layout_preserves_transform_when_still_valid() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);
        let zoomed = apply_gesture(&frame, GestureEvent::Zoom { factor: 2.0 }, &config, 1.0);

        let relaid = apply_layout(&zoomed, &config, Viewport::new(400.0, 800.0), 1.0);
        assert_eq!(relaid.transform, zoomed.transform);
    }

    #[test]
    fn test_pan_accumulates() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);
        let d = Point::new(5.0, -3.0);

        let once = apply_gesture(&frame, GestureEvent::Pan { delta: d }, &config, 1.0);
        let twice = apply_gesture(&once, GestureEvent::Pan { delta: d }, &config, 1.0);
        assert_eq!(twice.transform.pan, Point::new(10.0, -6.0));
        // Pan alone never rescales
        assert_eq!(twice.transform.scale, frame.transform.scale);
    }

    #[test]
    fn test_zoom_clamps_to_configured_range() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);

        let far_out = apply_gesture(&frame, GestureEvent::Zoom { factor: 0.01 }, &config, 1.0);
        assert_eq!(far_out.transform.scale, config.min_zoom);

        let far_in = apply_gesture(&frame, GestureEvent::Zoom { factor: 100.0 }, &config, 1.0);
        assert_eq!(far_in.transform.scale, config.max_zoom);
    }

    #[test]
    fn test_zoom_clamp_widens_for_non_square_images() {
        // A 3:1 panorama needs 3x the zoom headroom
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 3.0);

        let far_in = apply_gesture(&frame, GestureEvent::Zoom { factor: 1000.0 }, &config, 3.0);
        assert!((far_in.transform.scale - config.max_zoom * 3.0).abs() < EPS);
    }

    #[test]
    fn test_gesture_end_corrects_runaway_pan() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);

        let dragged = apply_gesture(
            &frame,
            GestureEvent::Pan {
                delta: Point::new(500.0, 0.0),
            },
            &config,
            1.0,
        );
        let ended = apply_gesture(&dragged, GestureEvent::End, &config, 1.0);
        assert_covered(&ended);
    }

    #[test]
    fn test_gesture_end_is_noop_on_conforming_frame() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);
        let ended = apply_gesture(&frame, GestureEvent::End, &config, 1.0);
        assert_eq!(ended, frame);
    }

    #[test]
    fn test_gesture_on_degenerate_frame_is_noop() {
        let config = SessionConfig::default();
        let frame = CropFrame::default();
        let next = apply_gesture(
            &frame,
            GestureEvent::Pan {
                delta: Point::new(10.0, 10.0),
            },
            &config,
            1.0,
        );
        assert_eq!(next, frame);
    }

    #[test]
    fn test_zoom_out_then_end_restores_coverage() {
        let (frame, config) = laid_out_frame(Viewport::new(400.0, 800.0), 1.0);

        let shrunk = apply_gesture(&frame, GestureEvent::Zoom { factor: 0.5 }, &config, 1.0);
        let ended = apply_gesture(&shrunk, GestureEvent::End, &config, 1.0);
        assert_covered(&ended);
        assert!(ended.transform.scale > shrunk.transform.scale);
    }
}
