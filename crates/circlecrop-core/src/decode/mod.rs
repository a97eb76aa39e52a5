//! Image decoding for crop sources.
//!
//! The crop geometry only ever sees correctly-oriented images: EXIF
//! orientation is read and applied here, before any layout or gesture
//! processing. Decoding accepts any container the `image` crate can sniff
//! (the sources are user-picked photos, typically JPEG or PNG).
//!
//! Pixel data is normalized to 3-channel RGB8 at decode time; alpha and
//! higher bit depths are dropped. That reduction is deliberate - the crop
//! output format is fixed RGB8.

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, read_orientation};
pub use resize::{fit_dimensions, resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
