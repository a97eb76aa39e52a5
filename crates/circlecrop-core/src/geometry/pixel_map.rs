//! Mapping from the screen-space crop box into source-pixel coordinates.

use super::{Point, Rect};

/// Map the crop box into source-pixel space.
///
/// The virtual image bounds are taken as the affine frame covering the full
/// source image `(0,0)-(width,height)`: a screen point maps to
/// `(p - virtual.top_left) * (source_size / virtual.size)`, independently per
/// axis. Both corners of `crop_bounds` are mapped.
///
/// The result is not clamped. Under a transform corrected by
/// [`enforce_bounds`](super::enforce_bounds) it always lies inside the
/// source; anything else indicates a stale or skipped correction, and the
/// crop stage clamps (and logs) before touching pixel data.
///
/// Degenerate `virtual_bounds` produce non-finite output; callers guard by
/// refusing to crop a frame that has not been laid out.
pub fn map_crop_to_source_pixels(
    crop_bounds: &Rect,
    virtual_bounds: &Rect,
    source_width: u32,
    source_height: u32,
) -> Rect {
    let scale_x = source_width as f32 / virtual_bounds.width();
    let scale_y = source_height as f32 / virtual_bounds.height();

    let map = |p: Point| {
        Point::new(
            (p.x - virtual_bounds.top_left.x) * scale_x,
            (p.y - virtual_bounds.top_left.y) * scale_y,
        )
    };

    Rect::new(map(crop_bounds.top_left), map(crop_bounds.bottom_right))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_maps_through_affine_frame() {
        // 1000x2000 source displayed at (0,0)-(100,200): factor 10 per axis
        let virtual_bounds = Rect::from_edges(0.0, 0.0, 100.0, 200.0);
        let crop = Rect::from_edges(20.0, 20.0, 80.0, 180.0);

        let result = map_crop_to_source_pixels(&crop, &virtual_bounds, 1000, 2000);
        assert_eq!(result, Rect::from_edges(200.0, 200.0, 800.0, 1800.0));
    }

    #[test]
    fn test_offset_virtual_frame() {
        let virtual_bounds = Rect::from_edges(-50.0, 10.0, 150.0, 210.0);
        let crop = Rect::from_edges(0.0, 60.0, 100.0, 160.0);

        let result = map_crop_to_source_pixels(&crop, &virtual_bounds, 400, 400);
        assert_eq!(result, Rect::from_edges(100.0, 100.0, 300.0, 300.0));
    }

    #[test]
    fn test_full_frame_crop_maps_to_full_source() {
        let virtual_bounds = Rect::from_edges(12.0, 34.0, 112.0, 134.0);
        let result = map_crop_to_source_pixels(&virtual_bounds, &virtual_bounds, 600, 400);
        assert_eq!(result, Rect::from_edges(0.0, 0.0, 600.0, 400.0));
    }

    #[test]
    fn test_crop_outside_frame_maps_outside_source() {
        let virtual_bounds = Rect::from_edges(0.0, 0.0, 100.0, 100.0);
        let crop = Rect::from_edges(-10.0, -10.0, 110.0, 110.0);

        let result = map_crop_to_source_pixels(&crop, &virtual_bounds, 100, 100);
        assert!(result.top_left.x < 0.0);
        assert!(result.bottom_right.x > 100.0);
    }

    #[test]
    fn test_round_trip_through_inverse() {
        let virtual_bounds = Rect::from_edges(-33.0, 12.0, 167.0, 412.0);
        let crop = Rect::from_edges(10.0, 50.0, 150.0, 390.0);
        let (sw, sh) = (3000u32, 4000u32);

        let pixels = map_crop_to_source_pixels(&crop, &virtual_bounds, sw, sh);

        // Inverse affine map: source pixel back to screen
        let inv = |p: Point| {
            Point::new(
                p.x * virtual_bounds.width() / sw as f32 + virtual_bounds.top_left.x,
                p.y * virtual_bounds.height() / sh as f32 + virtual_bounds.top_left.y,
            )
        };
        let back = Rect::new(inv(pixels.top_left), inv(pixels.bottom_right));

        assert!((back.top_left.x - crop.top_left.x).abs() < EPS);
        assert!((back.top_left.y - crop.top_left.y).abs() < EPS);
        assert!((back.bottom_right.x - crop.bottom_right.x).abs() < EPS);
        assert!((back.bottom_right.y - crop.bottom_right.y).abs() < EPS);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
