//! Circlecrop Session - the interactive crop-session driver
//!
//! One [`CropSession`] per crop attempt: it owns the source image and the
//! current [`CropFrame`](circlecrop_core::CropFrame), consumes serialized
//! gesture and layout events through pure reducers, and dispatches the final
//! crop to a blocking worker task. Results reach the embedding view layer
//! through a [`SessionObserver`].
//!
//! Nothing here renders or detects gestures; the GUI toolkit hosting the
//! crop view is expected to feed events in and subscribe to the observer.

pub mod config;
pub mod event;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use event::{GestureEvent, Viewport};
pub use session::{CropSession, SessionError, SessionObserver};
pub use state::{apply_gesture, apply_layout};
