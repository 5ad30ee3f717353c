use crate::core::{CapabilityError, Synth, Tone, Waveform};
use crate::SharedSound;
use wasm_bindgen::JsValue;
use web_sys as web;

fn synth_err(e: JsValue) -> CapabilityError {
    CapabilityError::Synthesis(format!("{:?}", e))
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Result<web::GainNode, CapabilityError> {
    let g = web::GainNode::new(audio_ctx).map_err(synth_err)?;
    g.gain().set_value(value);
    Ok(g)
}

#[inline]
fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// WebAudio backend: one oscillator + gain envelope per cue, straight to the
/// destination.
pub struct WebAudioSynth {
    audio_ctx: web::AudioContext,
}

impl WebAudioSynth {
    pub fn open() -> Result<Self, CapabilityError> {
        let audio_ctx = web::AudioContext::new()
            .map_err(|e| CapabilityError::unavailable("Web Audio", format!("{:?}", e)))?;
        // Called from a gesture handler, so resuming here is allowed.
        _ = audio_ctx.resume();
        Ok(Self { audio_ctx })
    }
}

impl Synth for WebAudioSynth {
    fn play(&self, tone: &Tone) -> Result<(), CapabilityError> {
        let now = self.audio_ctx.current_time();
        let end = now + tone.duration_sec as f64;

        let src = web::OscillatorNode::new(&self.audio_ctx).map_err(synth_err)?;
        src.set_type(oscillator_type(tone.waveform));
        src.frequency()
            .set_value_at_time(tone.start_hz, now)
            .map_err(synth_err)?;
        if let Some(end_hz) = tone.end_hz {
            src.frequency()
                .exponential_ramp_to_value_at_time(end_hz, end)
                .map_err(synth_err)?;
        }

        let g = create_gain(&self.audio_ctx, tone.peak_gain)?;
        g.gain()
            .set_value_at_time(tone.peak_gain, now)
            .map_err(synth_err)?;
        g.gain()
            .exponential_ramp_to_value_at_time(tone.floor_gain, end)
            .map_err(synth_err)?;

        src.connect_with_audio_node(&g).map_err(synth_err)?;
        g.connect_with_audio_node(&self.audio_ctx.destination())
            .map_err(synth_err)?;
        src.start_with_when(now).map_err(synth_err)?;
        src.stop_with_when(end).map_err(synth_err)?;
        Ok(())
    }
}

/// Open the audio backend if this is the first request; later calls are no-ops.
pub fn initialize(sound: &SharedSound) {
    sound.borrow_mut().initialize_with(WebAudioSynth::open);
}
