use crate::constants::{
    CUE_GAIN_FLOOR, CUE_GAIN_SCALE, DEFAULT_VOLUME, SWEEP_END_RATIO,
};
use crate::core::error::CapabilityError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueName {
    Hover,
    Click,
    Whoosh,
    Success,
    Pop,
    Transition,
}

impl CueName {
    pub const ALL: [CueName; 6] = [
        CueName::Hover,
        CueName::Click,
        CueName::Whoosh,
        CueName::Success,
        CueName::Pop,
        CueName::Transition,
    ];

    /// Resolve a host-supplied cue name. Unknown names yield `None` and are
    /// ignored by the engine.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hover" => Some(CueName::Hover),
            "click" => Some(CueName::Click),
            "whoosh" => Some(CueName::Whoosh),
            "success" => Some(CueName::Success),
            "pop" => Some(CueName::Pop),
            "transition" => Some(CueName::Transition),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CueName::Hover => "hover",
            CueName::Click => "click",
            CueName::Whoosh => "whoosh",
            CueName::Success => "success",
            CueName::Pop => "pop",
            CueName::Transition => "transition",
        }
    }

    #[inline]
    pub fn cue(self) -> &'static SoundCue {
        &CUE_CATALOG[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCue {
    pub name: CueName,
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub waveform: Waveform,
    pub sweep: bool,
}

// Indexed by `CueName` discriminant.
pub const CUE_CATALOG: [SoundCue; 6] = [
    SoundCue {
        name: CueName::Hover,
        frequency_hz: 800.0,
        duration_sec: 0.05,
        waveform: Waveform::Sine,
        sweep: false,
    },
    SoundCue {
        name: CueName::Click,
        frequency_hz: 600.0,
        duration_sec: 0.08,
        waveform: Waveform::Square,
        sweep: false,
    },
    SoundCue {
        name: CueName::Whoosh,
        frequency_hz: 400.0,
        duration_sec: 0.15,
        waveform: Waveform::Sine,
        sweep: true,
    },
    SoundCue {
        name: CueName::Success,
        frequency_hz: 880.0,
        duration_sec: 0.2,
        waveform: Waveform::Sine,
        sweep: false,
    },
    SoundCue {
        name: CueName::Pop,
        frequency_hz: 1200.0,
        duration_sec: 0.03,
        waveform: Waveform::Sine,
        sweep: false,
    },
    SoundCue {
        name: CueName::Transition,
        frequency_hz: 300.0,
        duration_sec: 0.25,
        waveform: Waveform::Triangle,
        sweep: true,
    },
];

/// Fully resolved parameters for one synthesized tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    /// Target of an exponential frequency sweep, if any.
    pub end_hz: Option<f32>,
    pub duration_sec: f32,
    pub peak_gain: f32,
    pub floor_gain: f32,
}

impl SoundCue {
    pub fn tone(&self, volume: f32) -> Tone {
        Tone {
            waveform: self.waveform,
            start_hz: self.frequency_hz,
            end_hz: self.sweep.then(|| self.frequency_hz * SWEEP_END_RATIO),
            duration_sec: self.duration_sec,
            peak_gain: volume * CUE_GAIN_SCALE,
            floor_gain: CUE_GAIN_FLOOR,
        }
    }
}

/// Something that can turn a `Tone` into audible output.
pub trait Synth {
    fn play(&self, tone: &Tone) -> Result<(), CapabilityError>;
}

/// Durable home of the mute flag.
pub trait MuteStore {
    fn load(&self) -> Option<bool>;
    fn store(&mut self, muted: bool);
}

#[inline]
pub fn encode_mute(muted: bool) -> &'static str {
    if muted {
        "true"
    } else {
        "false"
    }
}

#[inline]
pub fn decode_mute(raw: &str) -> bool {
    raw == "true"
}

/// Procedural UI sound engine.
///
/// The mute flag is seeded from the store at construction, before any synth
/// exists, so UI can render the correct state ahead of the first gesture.
/// All writes of the flag go through this type.
pub struct SoundEngine<S, P> {
    synth: Option<S>,
    store: P,
    muted: bool,
    volume: f32,
    init_attempted: bool,
}

impl<S: Synth, P: MuteStore> SoundEngine<S, P> {
    pub fn new(store: P) -> Self {
        let muted = store.load().unwrap_or(false);
        Self {
            synth: None,
            store,
            muted,
            volume: DEFAULT_VOLUME,
            init_attempted: false,
        }
    }

    /// Open the synth on the first call only. Must run inside a user gesture
    /// in browsers. A failure leaves the engine silent for the session.
    pub fn initialize_with<F>(&mut self, open: F)
    where
        F: FnOnce() -> Result<S, CapabilityError>,
    {
        if self.init_attempted {
            return;
        }
        self.init_attempted = true;
        match open() {
            Ok(synth) => {
                self.synth = Some(synth);
                log::info!("[sound] initialized (muted={})", self.muted);
            }
            Err(e) => log::warn!("[sound] {e}; cues disabled"),
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.synth.is_some()
    }

    pub fn play(&self, cue: CueName) {
        if self.muted {
            return;
        }
        let Some(synth) = &self.synth else {
            return;
        };
        if let Err(e) = synth.play(&cue.cue().tone(self.volume)) {
            // Typically a suspended context before a gesture; the next cue retries naturally.
            log::debug!("[sound] {} dropped: {e}", cue.as_str());
        }
    }

    pub fn play_named(&self, name: &str) {
        match CueName::from_name(name) {
            Some(cue) => self.play(cue),
            None => log::debug!("[sound] unknown cue {name:?}"),
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        if !self.muted {
            self.play(CueName::Pop);
        }
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) -> bool {
        self.muted = muted;
        self.store.store(muted);
        self.muted
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }
}
