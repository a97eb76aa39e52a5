//! Core value types: points, rectangles, and the pan/zoom transform.

use serde::{Deserialize, Serialize};

/// Smallest zoom scale the user can pinch down to.
pub const MIN_ZOOM_SCALE: f32 = 0.5;

/// Largest zoom scale for a square image. Non-square images get a larger
/// effective maximum via [`aspect_correction`].
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// A point in screen or source-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle given by its two extreme corners.
///
/// Invariant: `bottom_right >= top_left` on both axes. Zero-size rectangles
/// are legal transient states (e.g. before the first layout pass).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Build a rectangle from left/top/right/bottom edge coordinates.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(Point::new(left, top), Point::new(right, bottom))
    }

    /// Build the bounding box of a circle.
    pub fn from_circle(center: Point, radius: f32) -> Self {
        let r = Point::new(radius, radius);
        Self::new(center - r, center + r)
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }

    /// True when the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// True when `other` lies fully inside `self` on both axes.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.top_left.x <= other.top_left.x
            && self.top_left.y <= other.top_left.y
            && self.bottom_right.x >= other.bottom_right.x
            && self.bottom_right.y >= other.bottom_right.y
    }

    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.top_left + delta, self.bottom_right + delta)
    }
}

/// The user-applied pan offset and uniform zoom scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation applied after scaling, in screen units.
    pub pan: Point,
    /// Uniform zoom about the image center. 1.0 = laid-out size.
    pub scale: f32,
}

impl Transform {
    pub fn new(pan: Point, scale: f32) -> Self {
        Self { pan, scale }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pan: Point::default(),
            scale: 1.0,
        }
    }
}

/// Full geometry snapshot of one crop session.
///
/// `image_bounds` and `crop_circle_bounds` change only on layout;
/// `transform` is mutated by the gesture stream and corrected by
/// [`enforce_bounds`](super::enforce_bounds) after every gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropFrame {
    /// On-screen laid-out bounds of the image, before any transform.
    pub image_bounds: Rect,
    /// Current user pan/zoom.
    pub transform: Transform,
    /// Fixed bounding box of the circular crop window.
    pub crop_circle_bounds: Rect,
}

impl CropFrame {
    /// True when either rectangle still has zero area (pre-layout state).
    pub fn is_degenerate(&self) -> bool {
        self.image_bounds.is_empty() || self.crop_circle_bounds.is_empty()
    }
}

/// Maximum-zoom multiplier for images whose aspect ratio deviates from 1:1.
///
/// The smaller image dimension must be able to stretch across the whole crop
/// circle, so an image twice as wide as tall needs twice the zoom headroom.
/// Returns 1.0 for square or degenerate aspect ratios.
pub fn aspect_correction(aspect_ratio: f32) -> f32 {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return 1.0;
    }
    if aspect_ratio > 1.0 {
        aspect_ratio
    } else {
        1.0 / aspect_ratio
    }
}
