//! Spoken lines with a beep fallback.
//!
//! The fallback decision is made synchronously: when the engine reports no
//! support, or cancelling/queueing the utterance raises, the fallback tone
//! sequence plays instead. An utterance that starts and fails later is not
//! covered.

use crate::constants::{SPEECH_LOCALE, SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME};
use crate::core::actors::Cues;
use crate::core::audio::AudioPlatform;
use crate::core::tones::ToneSynth;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech request rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Utterance<'a> {
    pub text: &'a str,
    pub lang: &'a str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Text-to-speech capability.
pub trait SpeechEngine {
    fn is_supported(&self) -> bool;
    /// Drop the current and any queued utterances.
    fn cancel(&self) -> Result<(), SpeechError>;
    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Announcement {
    Spoken,
    Fallback,
}

pub struct SpeechAnnouncer<S: SpeechEngine, P: AudioPlatform> {
    engine: S,
    tones: Rc<ToneSynth<P>>,
    locale: &'static str,
}

impl<S: SpeechEngine, P: AudioPlatform> SpeechAnnouncer<S, P> {
    pub fn new(engine: S, tones: Rc<ToneSynth<P>>) -> Self {
        Self {
            engine,
            tones,
            locale: SPEECH_LOCALE,
        }
    }

    /// Replace whatever is being said with `text`.
    pub fn speak(&self, text: &str) -> Announcement {
        match self.try_speak(text) {
            Ok(()) => Announcement::Spoken,
            Err(e) => {
                log::debug!("[speech] falling back to beeps: {}", e);
                self.tones.play_fallback_sequence();
                Announcement::Fallback
            }
        }
    }

    fn try_speak(&self, text: &str) -> Result<(), SpeechError> {
        if !self.engine.is_supported() {
            return Err(SpeechError::Unavailable);
        }
        self.engine.cancel()?;
        self.engine.speak(&Utterance {
            text,
            lang: self.locale,
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        })
    }
}

/// Tone synthesizer and announcer bundled as the grid's reaction cues.
pub struct SoundBoard<S: SpeechEngine, P: AudioPlatform> {
    tones: Rc<ToneSynth<P>>,
    announcer: SpeechAnnouncer<S, P>,
}

impl<S: SpeechEngine, P: AudioPlatform> SoundBoard<S, P> {
    pub fn new(engine: S, tones: Rc<ToneSynth<P>>) -> Self {
        Self {
            announcer: SpeechAnnouncer::new(engine, tones.clone()),
            tones,
        }
    }
}

impl<S: SpeechEngine, P: AudioPlatform> Cues for SoundBoard<S, P> {
    fn pop(&self) {
        self.tones.play_pop();
    }

    fn boing(&self) {
        self.tones.play_boing();
    }

    fn speak(&self, line: &str) {
        self.announcer.speak(line);
    }
}
