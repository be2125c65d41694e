//! Procedural sound effects.
//!
//! Tones are plain data: an oscillator waveform, an optional exponential
//! frequency sweep and an exponential gain envelope, with all times in seconds
//! relative to the tone's own start. [`ToneSynth`] schedules them on the shared
//! audio session; each call builds fresh nodes, so overlapping calls layer.

use crate::constants::ENVELOPE_FLOOR;
use crate::core::audio::{AudioContextHandle, AudioPlatform, AudioSession};
use smallvec::SmallVec;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    pub to_hz: f32,
    pub at: f64,
}

/// Gain rises from `ENVELOPE_FLOOR` to `peak` by `attack_at`, then falls back
/// to the floor by `release_at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub peak: f32,
    pub attack_at: f64,
    pub release_at: f64,
}

impl Envelope {
    pub const FLOOR: f32 = ENVELOPE_FLOOR;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    /// Offset from the moment the tone was requested.
    pub start: f64,
    pub frequency_hz: f32,
    pub sweep: Option<Sweep>,
    pub envelope: Envelope,
    pub stop_at: f64,
}

pub type ToneSequence = SmallVec<[ToneSpec; 4]>;

/// Short percussive square blip, 1200 Hz down to 200 Hz.
pub fn pop() -> ToneSpec {
    ToneSpec {
        waveform: Waveform::Square,
        start: 0.0,
        frequency_hz: 1200.0,
        sweep: Some(Sweep {
            to_hz: 200.0,
            at: 0.12,
        }),
        envelope: Envelope {
            peak: 0.3,
            attack_at: 0.02,
            release_at: 0.14,
        },
        stop_at: 0.15,
    }
}

/// Falling sine, 600 Hz down to 180 Hz.
pub fn boing() -> ToneSpec {
    ToneSpec {
        waveform: Waveform::Sine,
        start: 0.0,
        frequency_hz: 600.0,
        sweep: Some(Sweep {
            to_hz: 180.0,
            at: 0.38,
        }),
        envelope: Envelope {
            peak: 0.4,
            attack_at: 0.04,
            release_at: 0.45,
        },
        stop_at: 0.48,
    }
}

const FALLBACK_FREQS_HZ: [f32; 4] = [600.0, 550.0, 580.0, 540.0];
const FALLBACK_STEP_SEC: f64 = 0.08;

/// Four soft triangle beeps standing in for speech.
pub fn fallback_sequence() -> ToneSequence {
    FALLBACK_FREQS_HZ
        .iter()
        .enumerate()
        .map(|(i, &frequency_hz)| ToneSpec {
            waveform: Waveform::Triangle,
            start: i as f64 * FALLBACK_STEP_SEC,
            frequency_hz,
            sweep: None,
            envelope: Envelope {
                peak: 0.12,
                attack_at: 0.01,
                release_at: 0.1,
            },
            stop_at: 0.12,
        })
        .collect()
}

pub struct ToneSynth<P: AudioPlatform> {
    session: Rc<AudioSession<P>>,
}

impl<P: AudioPlatform> ToneSynth<P> {
    pub fn new(session: Rc<AudioSession<P>>) -> Self {
        Self { session }
    }

    pub fn play_pop(&self) {
        self.play(&[pop()]);
    }

    pub fn play_boing(&self) {
        self.play(&[boing()]);
    }

    pub fn play_fallback_sequence(&self) {
        self.play(&fallback_sequence());
    }

    fn play(&self, tones: &[ToneSpec]) {
        self.session.with_context(|ctx| {
            let now = ctx.current_time();
            for tone in tones {
                if let Err(e) = ctx.play_tone(now, tone) {
                    log::debug!("[audio] tone dropped: {}", e);
                }
            }
        });
    }
}
