use crate::core::{AudioContextHandle, AudioError, AudioPlatform, Envelope, ToneSpec, Waveform};
use web_sys as web;

/// WebAudio-backed platform; contexts are created lazily by `AudioSession`.
pub struct WebAudio;

impl AudioPlatform for WebAudio {
    type Context = web::AudioContext;

    fn create_context(&self) -> Result<web::AudioContext, AudioError> {
        if web::window().is_none() {
            return Err(AudioError::Unavailable);
        }
        web::AudioContext::new().map_err(|e| AudioError::Graph(format!("{:?}", e)))
    }
}

fn graph_err(label: &str) -> impl Fn(wasm_bindgen::JsValue) -> AudioError + '_ {
    move |e| AudioError::Graph(format!("{}: {:?}", label, e))
}

impl AudioContextHandle for web::AudioContext {
    fn current_time(&self) -> f64 {
        web::BaseAudioContext::current_time(self)
    }

    fn is_suspended(&self) -> bool {
        self.state() == web::AudioContextState::Suspended
    }

    fn resume(&self) {
        _ = web::AudioContext::resume(self);
    }

    // Fire a one-shot oscillator through its own envelope gain
    fn play_tone(&self, now: f64, tone: &ToneSpec) -> Result<(), AudioError> {
        let src = web::OscillatorNode::new(self).map_err(graph_err("OscillatorNode"))?;
        src.set_type(match tone.waveform {
            Waveform::Sine => web::OscillatorType::Sine,
            Waveform::Square => web::OscillatorType::Square,
            Waveform::Triangle => web::OscillatorType::Triangle,
        });
        let g = web::GainNode::new(self).map_err(graph_err("GainNode"))?;

        let t0 = now + tone.start;
        let freq = src.frequency();
        freq.set_value_at_time(tone.frequency_hz, t0)
            .map_err(graph_err("frequency"))?;
        if let Some(sweep) = tone.sweep {
            freq.exponential_ramp_to_value_at_time(sweep.to_hz, t0 + sweep.at)
                .map_err(graph_err("frequency sweep"))?;
        }

        let gain = g.gain();
        let env = tone.envelope;
        gain.set_value_at_time(Envelope::FLOOR, t0)
            .map_err(graph_err("gain"))?;
        gain.exponential_ramp_to_value_at_time(env.peak, t0 + env.attack_at)
            .map_err(graph_err("attack"))?;
        gain.exponential_ramp_to_value_at_time(Envelope::FLOOR, t0 + env.release_at)
            .map_err(graph_err("release"))?;

        src.connect_with_audio_node(&g)
            .map_err(graph_err("connect"))?;
        g.connect_with_audio_node(&self.destination())
            .map_err(graph_err("connect"))?;
        src.start_with_when(t0).map_err(graph_err("start"))?;
        src.stop_with_when(t0 + tone.stop_at)
            .map_err(graph_err("stop"))?;
        Ok(())
    }
}
