//! The crop-session driver.
//!
//! A [`CropSession`] owns one source image and one crop frame, applies the
//! reducers in `state` to the serialized event stream, and runs the final
//! crop on the blocking worker pool. All state mutation happens on the
//! session's own thread of control; the only thing that leaves it is the
//! crop computation itself.

use std::sync::Arc;

use circlecrop_core::{
    crop_and_downscale, map_crop_to_source_pixels, virtual_image_bounds, CropError, CropFrame,
    DecodedImage, Rect,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::event::{GestureEvent, Viewport};
use crate::state::{apply_gesture, apply_layout, reset_transform};

/// Callbacks from the session to the embedding view layer.
///
/// Implementations must be cheap and non-blocking; they are invoked inline
/// from the session's thread of control.
pub trait SessionObserver: Send + Sync {
    /// Fired after every layout and every gesture-end, once the containment
    /// correction has run.
    fn on_crop_area_changed(&self, _crop_area: Rect, _virtual_bounds: Rect, _output_resolution: u32) {
    }

    /// Fired at most once per [`CropSession::confirm_crop`], with the final
    /// cropped and downscaled image.
    fn on_cropped_image(&self, _image: DecodedImage) {}

    /// Single failure channel for a confirmed crop; there is no retry.
    fn on_crop_failed(&self, _error: CropError) {}

    /// Fired when the user abandons the crop.
    fn on_cancel_crop(&self) {}
}

/// Error types for session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A confirmed crop is still being processed; at most one crop may be
    /// in flight per session.
    #[error("a crop is already in flight for this session")]
    CropInFlight,

    /// The frame has no usable geometry yet (no layout event has arrived).
    #[error("crop frame has not been laid out")]
    NotLaidOut,
}

/// One interactive crop attempt over a single source image.
pub struct CropSession {
    config: SessionConfig,
    source: Arc<DecodedImage>,
    frame: CropFrame,
    viewport: Option<Viewport>,
    observer: Arc<dyn SessionObserver>,
    pending: Option<JoinHandle<Result<DecodedImage, CropError>>>,
}

impl CropSession {
    pub fn new(
        source: DecodedImage,
        config: SessionConfig,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        Self {
            config,
            source: Arc::new(source),
            frame: CropFrame::default(),
            viewport: None,
            observer,
            pending: None,
        }
    }

    /// The current geometry snapshot.
    pub fn frame(&self) -> &CropFrame {
        &self.frame
    }

    /// True while a confirmed crop has not been driven to completion.
    pub fn has_pending_crop(&self) -> bool {
        self.pending.is_some()
    }

    /// The viewport was (re)sized: recompute the laid-out geometry.
    pub fn handle_layout(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.frame = apply_layout(
            &self.frame,
            &self.config,
            viewport,
            self.source.aspect_ratio(),
        );
        self.notify_area_changed();
    }

    /// Feed one gesture event through the reducer.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.frame = apply_gesture(&self.frame, event, &self.config, self.source.aspect_ratio());
        if matches!(event, GestureEvent::End) {
            self.notify_area_changed();
        }
    }

    /// Kick off the final crop on the blocking worker pool.
    ///
    /// The result is delivered through the observer by
    /// [`finish_crop`](Self::finish_crop); exactly one of `on_cropped_image`
    /// or `on_crop_failed` fires per confirm. A second confirm while the
    /// first is still pending is rejected.
    pub fn confirm_crop(&mut self) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::CropInFlight);
        }
        if self.frame.is_degenerate() {
            return Err(SessionError::NotLaidOut);
        }

        let virtual_bounds = virtual_image_bounds(&self.frame.image_bounds, &self.frame.transform);
        if virtual_bounds.is_empty() {
            return Err(SessionError::NotLaidOut);
        }

        let pixel_rect = map_crop_to_source_pixels(
            &self.frame.crop_circle_bounds,
            &virtual_bounds,
            self.source.width,
            self.source.height,
        );
        info!(
            ?pixel_rect,
            output_resolution = self.config.output_resolution,
            "confirming crop"
        );

        let source = Arc::clone(&self.source);
        let max = self.config.output_resolution;
        self.pending = Some(tokio::task::spawn_blocking(move || {
            crop_and_downscale(&source, &pixel_rect, max)
        }));
        Ok(())
    }

    /// Drive the pending crop to completion and deliver its result.
    ///
    /// No-op when nothing is pending. A crop discarded by
    /// [`set_image`](Self::set_image) or [`cancel`](Self::cancel) never
    /// reaches this point.
    pub async fn finish_crop(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        match handle.await {
            Ok(Ok(image)) => {
                info!(width = image.width, height = image.height, "crop finished");
                self.observer.on_cropped_image(image);
            }
            Ok(Err(error)) => {
                warn!(%error, "crop failed");
                self.observer.on_crop_failed(error);
            }
            Err(join_error) => {
                // Worker panic: nothing sensible to deliver
                warn!(%join_error, "crop worker did not complete");
            }
        }
    }

    /// Replace the source image mid-session.
    ///
    /// Any in-flight crop result belongs to the old image and is discarded.
    /// The transform resets and the frame is laid out again for the new
    /// image's aspect ratio.
    pub fn set_image(&mut self, image: DecodedImage) {
        if self.pending.take().is_some() {
            debug!("discarding in-flight crop for replaced image");
        }
        self.source = Arc::new(image);
        self.frame = reset_transform(&self.frame);
        if let Some(viewport) = self.viewport {
            self.handle_layout(viewport);
        }
    }

    /// The user abandoned the crop.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("discarding in-flight crop on cancel");
        }
        self.observer.on_cancel_crop();
    }

    fn notify_area_changed(&self) {
        if self.frame.is_degenerate() {
            return;
        }
        let virtual_bounds = virtual_image_bounds(&self.frame.image_bounds, &self.frame.transform);
        self.observer.on_crop_area_changed(
            self.frame.crop_circle_bounds,
            virtual_bounds,
            self.config.output_resolution,
        );
    }
}
