//! Audio context lifecycle.
//!
//! One context per page session, created on first use and resumed on the
//! first user gesture (autoplay policy). Platforms without audio processing
//! leave the session permanently empty and every request becomes a no-op.

use crate::core::tones::ToneSpec;
use std::cell::RefCell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio processing is not available")]
    Unavailable,
    #[error("audio graph error: {0}")]
    Graph(String),
}

/// A live audio processing context.
pub trait AudioContextHandle {
    /// Monotonic audio clock in seconds.
    fn current_time(&self) -> f64;
    fn is_suspended(&self) -> bool;
    fn resume(&self);
    /// Build an independent oscillator/gain pair for `tone` and schedule it
    /// relative to `now`.
    fn play_tone(&self, now: f64, tone: &ToneSpec) -> Result<(), AudioError>;
}

pub trait AudioPlatform {
    type Context: AudioContextHandle;
    fn create_context(&self) -> Result<Self::Context, AudioError>;
}

enum Slot<C> {
    Empty,
    Ready(C),
    Failed,
}

pub struct AudioSession<P: AudioPlatform> {
    platform: P,
    slot: RefCell<Slot<P::Context>>,
}

impl<P: AudioPlatform> AudioSession<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            slot: RefCell::new(Slot::Empty),
        }
    }

    fn ensure(&self) {
        let mut slot = self.slot.borrow_mut();
        if let Slot::Empty = *slot {
            *slot = match self.platform.create_context() {
                Ok(ctx) => {
                    log::info!("[audio] context created");
                    Slot::Ready(ctx)
                }
                Err(e) => {
                    log::warn!("[audio] context unavailable: {}", e);
                    Slot::Failed
                }
            };
        }
    }

    pub fn is_available(&self) -> bool {
        self.ensure();
        matches!(*self.slot.borrow(), Slot::Ready(_))
    }

    /// Run `f` against the context, creating it first if needed.
    pub fn with_context<R>(&self, f: impl FnOnce(&P::Context) -> R) -> Option<R> {
        self.ensure();
        match &*self.slot.borrow() {
            Slot::Ready(ctx) => Some(f(ctx)),
            _ => None,
        }
    }

    /// Gesture hook: create the context if needed and resume it if suspended.
    pub fn resume(&self) {
        self.with_context(|ctx| {
            if ctx.is_suspended() {
                log::debug!("[audio] resuming suspended context");
                ctx.resume();
            }
        });
    }
}
