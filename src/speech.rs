use crate::core::{SpeechEngine, SpeechError, Utterance};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `window.speechSynthesis`, when the browser has it.
pub struct WebSpeech {
    synth: Option<web::SpeechSynthesis>,
}

impl WebSpeech {
    pub fn detect() -> Self {
        let synth = web::window().and_then(|w| {
            let present =
                js_sys::Reflect::has(&w, &JsValue::from_str("speechSynthesis")).unwrap_or(false);
            if present {
                w.speech_synthesis().ok()
            } else {
                None
            }
        });
        if synth.is_none() {
            log::warn!("[speech] speechSynthesis unavailable; using beep fallback");
        }
        Self { synth }
    }

    fn synth(&self) -> Result<&web::SpeechSynthesis, SpeechError> {
        self.synth.as_ref().ok_or(SpeechError::Unavailable)
    }
}

impl SpeechEngine for WebSpeech {
    fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        self.synth()?.cancel();
        Ok(())
    }

    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError> {
        let synth = self.synth()?;
        let u = web::SpeechSynthesisUtterance::new_with_text(utterance.text)
            .map_err(|e| SpeechError::Rejected(format!("{:?}", e)))?;
        u.set_lang(utterance.lang);
        u.set_rate(utterance.rate);
        u.set_pitch(utterance.pitch);
        u.set_volume(utterance.volume);
        synth.speak(&u);
        Ok(())
    }
}
