// Host-side tests for the sound engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code, unused_imports)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingSynth {
    played: Rc<RefCell<Vec<Tone>>>,
    suspended: bool,
}

impl Synth for RecordingSynth {
    fn play(&self, tone: &Tone) -> Result<(), CapabilityError> {
        if self.suspended {
            return Err(CapabilityError::Synthesis("context suspended".into()));
        }
        self.played.borrow_mut().push(*tone);
        Ok(())
    }
}

// Stands in for localStorage: the slot outlives any one engine, like a reload.
#[derive(Clone, Default)]
struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MuteStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        self.slot.borrow().as_deref().map(decode_mute)
    }

    fn store(&mut self, muted: bool) {
        *self.slot.borrow_mut() = Some(encode_mute(muted).to_string());
    }
}

fn ready_engine() -> (SoundEngine<RecordingSynth, MemoryStore>, RecordingSynth, MemoryStore) {
    let store = MemoryStore::default();
    let synth = RecordingSynth::default();
    let mut engine = SoundEngine::new(store.clone());
    let s = synth.clone();
    engine.initialize_with(move || Ok(s));
    (engine, synth, store)
}

#[test]
fn mute_defaults_to_false_without_stored_value() {
    let engine: SoundEngine<RecordingSynth, MemoryStore> = SoundEngine::new(MemoryStore::default());
    assert!(!engine.is_muted());
}

#[test]
fn mute_is_seeded_from_store_before_initialize() {
    let store = MemoryStore::default();
    *store.slot.borrow_mut() = Some("true".to_string());
    let engine: SoundEngine<RecordingSynth, _> = SoundEngine::new(store);
    assert!(engine.is_muted());
    assert!(!engine.is_initialized());
}

#[test]
fn odd_number_of_toggles_flips_and_survives_reload() {
    let (mut engine, _synth, store) = ready_engine();
    for _ in 0..3 {
        engine.toggle_mute();
    }
    assert!(engine.is_muted());
    assert_eq!(store.slot.borrow().as_deref(), Some("true"));

    let reloaded: SoundEngine<RecordingSynth, _> = SoundEngine::new(store.clone());
    assert!(reloaded.is_muted());
}

#[test]
fn toggle_returns_new_value_and_persists_strings() {
    let (mut engine, _synth, store) = ready_engine();
    assert!(engine.toggle_mute());
    assert_eq!(store.slot.borrow().as_deref(), Some("true"));
    assert!(!engine.toggle_mute());
    assert_eq!(store.slot.borrow().as_deref(), Some("false"));
}

#[test]
fn unmuting_plays_pop_but_muting_is_silent() {
    let (mut engine, synth, _store) = ready_engine();
    engine.toggle_mute(); // -> muted
    assert!(synth.played.borrow().is_empty());
    engine.toggle_mute(); // -> unmuted, confirmation cue
    let played = synth.played.borrow();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].start_hz, CueName::Pop.cue().frequency_hz);
}

#[test]
fn set_muted_persists_and_returns_value() {
    let (mut engine, synth, store) = ready_engine();
    assert!(engine.set_muted(true));
    assert_eq!(store.slot.borrow().as_deref(), Some("true"));
    assert!(!engine.set_muted(false));
    assert_eq!(store.slot.borrow().as_deref(), Some("false"));
    // set_muted never plays a confirmation
    assert!(synth.played.borrow().is_empty());
}

#[test]
fn play_is_noop_before_initialize() {
    let synth = RecordingSynth::default();
    let engine: SoundEngine<RecordingSynth, _> = SoundEngine::new(MemoryStore::default());
    engine.play(CueName::Click);
    assert!(synth.played.borrow().is_empty());
}

#[test]
fn play_is_noop_while_muted() {
    let (mut engine, synth, _store) = ready_engine();
    engine.set_muted(true);
    engine.play(CueName::Success);
    engine.play_named("whoosh");
    assert!(synth.played.borrow().is_empty());
}

#[test]
fn unknown_cue_names_are_ignored() {
    let (engine, synth, _store) = ready_engine();
    engine.play_named("fanfare");
    engine.play_named("");
    engine.play_named("Pop");
    assert!(synth.played.borrow().is_empty());
    engine.play_named("pop");
    assert_eq!(synth.played.borrow().len(), 1);
}

#[test]
fn initialize_opens_only_once() {
    let store = MemoryStore::default();
    let mut engine: SoundEngine<RecordingSynth, _> = SoundEngine::new(store);
    let mut opens = 0;
    for _ in 0..3 {
        engine.initialize_with(|| {
            opens += 1;
            Ok(RecordingSynth::default())
        });
    }
    assert_eq!(opens, 1);
    assert!(engine.is_initialized());
}

#[test]
fn failed_initialize_leaves_engine_silent_for_the_session() {
    let mut engine: SoundEngine<RecordingSynth, _> = SoundEngine::new(MemoryStore::default());
    engine.initialize_with(|| Err(CapabilityError::unavailable("Web Audio", "not supported")));
    assert!(!engine.is_initialized());

    let synth = RecordingSynth::default();
    let s = synth.clone();
    engine.initialize_with(move || Ok(s));
    assert!(!engine.is_initialized());
    engine.play(CueName::Pop);
    assert!(synth.played.borrow().is_empty());
    // Mute still works without audio.
    assert!(engine.toggle_mute());
}

#[test]
fn suspended_context_errors_are_swallowed() {
    let mut engine: SoundEngine<RecordingSynth, _> = SoundEngine::new(MemoryStore::default());
    engine.initialize_with(|| {
        Ok(RecordingSynth {
            suspended: true,
            ..RecordingSynth::default()
        })
    });
    for cue in CueName::ALL {
        engine.play(cue);
    }
    assert!(engine.is_initialized());
}

#[test]
fn volume_is_clamped_and_scales_peak_gain() {
    let (mut engine, synth, _store) = ready_engine();
    engine.set_volume(4.0);
    assert_eq!(engine.volume(), 1.0);
    engine.set_volume(-1.0);
    assert_eq!(engine.volume(), 0.0);
    engine.set_volume(f32::NAN);
    assert_eq!(engine.volume(), 0.0);

    engine.set_volume(0.5);
    engine.play(CueName::Hover);
    let tone = synth.played.borrow()[0];
    assert!((tone.peak_gain - 0.15).abs() < 1e-6);
    assert!((tone.floor_gain - 0.01).abs() < 1e-6);
}

#[test]
fn sweep_cues_halve_their_frequency() {
    for cue in CueName::ALL {
        let def = cue.cue();
        let tone = def.tone(0.3);
        assert_eq!(tone.start_hz, def.frequency_hz);
        assert_eq!(tone.duration_sec, def.duration_sec);
        match tone.end_hz {
            Some(end) => {
                assert!(def.sweep, "{} should not sweep", cue.as_str());
                assert!((end - def.frequency_hz * 0.5).abs() < 1e-4);
            }
            None => assert!(!def.sweep, "{} should sweep", cue.as_str()),
        }
    }
    assert!(CueName::Whoosh.cue().sweep);
    assert!(CueName::Transition.cue().sweep);
}

#[test]
fn catalog_is_indexed_by_cue_name() {
    for cue in CueName::ALL {
        assert_eq!(cue.cue().name, cue);
        assert_eq!(CueName::from_name(cue.as_str()), Some(cue));
    }
    assert_eq!(CueName::Click.cue().waveform, Waveform::Square);
    assert_eq!(CueName::Transition.cue().waveform, Waveform::Triangle);
}

#[test]
fn decode_mute_only_accepts_true() {
    assert!(decode_mute("true"));
    assert!(!decode_mute("false"));
    assert!(!decode_mute("TRUE"));
    assert!(!decode_mute("1"));
    assert_eq!(encode_mute(true), "true");
    assert_eq!(encode_mute(false), "false");
}
