//! Zoom overlay controller.
//!
//! Opening is two-phase. `open` mounts the overlay and snaps the image box
//! onto the tapped element's rectangle with no transition, then hands back a
//! [`FrameTicket`]. The host runs [`ZoomOverlay::on_frame`] with that ticket on
//! the next animation frame, which commits the centered target geometry with
//! the configured transition. Keeping the two writes on separate frames is
//! what makes the snap visible before the box starts moving.
//!
//! The controller does not listen for viewport resizes; an open overlay keeps
//! the target computed when it opened.

use crate::constants::DEFAULT_ASPECT;
use crate::core::geometry::{
    aspect_ratio, centered_target, Rect, Transition, Viewport, ZoomConfig,
};

/// Rendering surface the overlay drives (the DOM in the browser).
pub trait OverlaySurface {
    fn viewport(&self) -> Viewport;
    /// Create the backdrop and image box, or swap the image if already mounted.
    fn mount(&mut self, image: &ZoomImage);
    /// Write box geometry. `None` means no transition and must be committed
    /// before returning.
    fn place(&mut self, rect: Rect, transition: Option<&Transition>);
    /// Fade the backdrop in.
    fn reveal(&mut self, fade_ms: u32);
    fn unmount(&mut self);
    fn scroll_overflow(&self) -> String;
    fn set_scroll_overflow(&mut self, value: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    /// Mounted and snapped to the origin rectangle, waiting for a frame.
    Opening,
    /// Target geometry committed (animating or settled).
    Open,
}

/// Identifies the deferred frame requested by one `open` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Backdrop,
    CloseButton,
}

struct Shown {
    image: ZoomImage,
    aspect: f64,
    phase: OverlayPhase,
    ticket: FrameTicket,
    geometry: Rect,
}

pub struct ZoomOverlay<S: OverlaySurface> {
    surface: S,
    config: ZoomConfig,
    shown: Option<Shown>,
    // Scroll setting from before the first open; restored exactly on close.
    saved_overflow: Option<String>,
    next_ticket: u64,
}

impl<S: OverlaySurface> ZoomOverlay<S> {
    pub fn new(surface: S, config: ZoomConfig) -> Self {
        Self {
            surface,
            config,
            shown: None,
            saved_overflow: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.shown
            .as_ref()
            .map_or(OverlayPhase::Closed, |shown| shown.phase)
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    /// Last geometry written to the surface.
    pub fn geometry(&self) -> Option<Rect> {
        self.shown.as_ref().map(|shown| shown.geometry)
    }

    pub fn image(&self) -> Option<&ZoomImage> {
        self.shown.as_ref().map(|shown| &shown.image)
    }

    pub fn aspect(&self) -> Option<f64> {
        self.shown.as_ref().map(|shown| shown.aspect)
    }

    /// Start the show sequence. Without an origin rectangle this is a no-op.
    ///
    /// Opening while already open restarts from the new origin; the frame
    /// ticket of the earlier request becomes stale.
    pub fn open(&mut self, origin: Option<Rect>, image: ZoomImage) -> Option<FrameTicket> {
        let Some(origin) = origin else {
            log::debug!("[zoom] open ignored: no origin rectangle");
            return None;
        };

        if self.saved_overflow.is_none() {
            let prev = self.surface.scroll_overflow();
            self.surface.set_scroll_overflow("hidden");
            self.saved_overflow = Some(prev);
        }

        self.next_ticket += 1;
        let ticket = FrameTicket(self.next_ticket);
        self.surface.mount(&image);
        self.surface.place(origin, None);
        log::info!(
            "[zoom] open {} from ({:.0},{:.0}) {:.0}x{:.0}",
            image.src,
            origin.x,
            origin.y,
            origin.width,
            origin.height
        );
        self.shown = Some(Shown {
            image,
            aspect: DEFAULT_ASPECT,
            phase: OverlayPhase::Opening,
            ticket,
            geometry: origin,
        });
        Some(ticket)
    }

    /// Second phase of `open`: commit the centered target with a transition.
    /// Returns false for stale tickets or when nothing is opening.
    pub fn on_frame(&mut self, ticket: FrameTicket) -> bool {
        let Some(shown) = self.shown.as_mut() else {
            return false;
        };
        if shown.ticket != ticket || shown.phase != OverlayPhase::Opening {
            return false;
        }
        let target = centered_target(self.surface.viewport(), shown.aspect, &self.config);
        shown.geometry = target;
        shown.phase = OverlayPhase::Open;
        self.surface.place(target, Some(&self.config.transition));
        self.surface.reveal(self.config.backdrop_fade_ms);
        true
    }

    /// Natural image size became known. Re-centers when the aspect ratio
    /// moved away from the provisional one.
    pub fn on_image_loaded(&mut self, src: &str, natural_width: u32, natural_height: u32) -> bool {
        let aspect = aspect_ratio(natural_width, natural_height);
        let Some(shown) = self.shown.as_mut() else {
            return false;
        };
        let unchanged = (aspect - shown.aspect).abs() <= self.config.aspect_tolerance;
        if shown.image.src != src || unchanged {
            return false;
        }
        shown.aspect = aspect;
        log::debug!("[zoom] aspect resolved to {:.3} for {}", aspect, src);
        if shown.phase == OverlayPhase::Open {
            let target = centered_target(self.surface.viewport(), aspect, &self.config);
            shown.geometry = target;
            self.surface.place(target, Some(&self.config.transition));
        }
        true
    }

    /// Hide and unmount. Closing an already closed overlay does nothing.
    pub fn close(&mut self) -> bool {
        if self.shown.take().is_none() {
            return false;
        }
        self.surface.unmount();
        self.restore_scroll();
        log::info!("[zoom] closed");
        true
    }

    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let closed = self.close();
        if closed {
            log::debug!("[zoom] dismissed via {:?}", reason);
        }
        closed
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.dismiss(DismissReason::Escape)
    }

    /// Clicks inside the image box bubble up to the backdrop; only a click
    /// whose target is the backdrop element itself dismisses.
    pub fn handle_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        target_is_backdrop && self.dismiss(DismissReason::Backdrop)
    }

    fn restore_scroll(&mut self) {
        if let Some(prev) = self.saved_overflow.take() {
            self.surface.set_scroll_overflow(&prev);
        }
    }
}

impl<S: OverlaySurface> Drop for ZoomOverlay<S> {
    fn drop(&mut self) {
        self.restore_scroll();
    }
}
