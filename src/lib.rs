#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod observe;
mod overlay;
mod render;
mod reveal;
mod storage;
mod ui;

use crate::constants::*;
use crate::core::{FieldParams, SectionRegistry};
use crate::dom::Listener;

pub(crate) type SoundEngine = crate::core::SoundEngine<audio::WebAudioSynth, storage::LocalStorageMute>;
pub(crate) type SharedSound = Rc<RefCell<SoundEngine>>;

/// Mount-time configuration read from an optional plain JS object.
struct MountOptions {
    canvas_id: String,
    sections: Vec<String>,
    on_secret: Option<js_sys::Function>,
    on_toggle_theme: Option<js_sys::Function>,
    help_overlay_id: String,
    mute_button_id: String,
    track_pointer: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            on_secret: None,
            on_toggle_theme: None,
            help_overlay_id: DEFAULT_HELP_OVERLAY_ID.to_string(),
            mute_button_id: DEFAULT_MUTE_BUTTON_ID.to_string(),
            track_pointer: true,
        }
    }
}

fn js_prop(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

impl MountOptions {
    fn from_js(value: &JsValue) -> Self {
        let mut opts = Self::default();
        if !value.is_object() {
            return opts;
        }
        if let Some(id) = js_prop(value, "canvas").and_then(|v| v.as_string()) {
            opts.canvas_id = id;
        }
        if let Some(arr) = js_prop(value, "sections").and_then(|v| v.dyn_into::<js_sys::Array>().ok()) {
            opts.sections = arr.iter().filter_map(|v| v.as_string()).collect();
        }
        opts.on_secret = js_prop(value, "onSecret").and_then(|v| v.dyn_into().ok());
        opts.on_toggle_theme = js_prop(value, "onToggleTheme").and_then(|v| v.dyn_into().ok());
        if let Some(id) = js_prop(value, "helpOverlay").and_then(|v| v.as_string()) {
            opts.help_overlay_id = id;
        }
        if let Some(id) = js_prop(value, "muteButton").and_then(|v| v.as_string()) {
            opts.mute_button_id = id;
        }
        if let Some(flag) = js_prop(value, "trackPointer").and_then(|v| v.as_bool()) {
            opts.track_pointer = flag;
        }
        opts
    }
}

/// First click or keypress anywhere opens the audio backend.
fn wire_audio_unlock(document: &web::Document, sound: &SharedSound) -> Vec<Listener> {
    ["click", "keydown"]
        .into_iter()
        .filter_map(|kind| {
            let sound = sound.clone();
            Listener::attach_once(document, kind, move |_ev| audio::initialize(&sound))
                .map_err(|e| log::warn!("[sound] gesture unlock ({kind}): {e}"))
                .ok()
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");
    Ok(())
}

/// Handle to the mounted interaction layer. The host owns it for the page's
/// lifetime and calls `unmount` on teardown.
#[wasm_bindgen]
pub struct Site {
    sound: SharedSound,
    nav: Option<nav::NavController>,
    reveal: Option<reveal::RevealTrigger>,
    particles: Option<frame::ParticleRenderer>,
    unlock: Vec<Listener>,
    mute_button: Option<Listener>,
    mute_button_id: String,
}

fn mount_site(opts: MountOptions) -> anyhow::Result<Site> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let sound: SharedSound = Rc::new(RefCell::new(SoundEngine::new(
        storage::LocalStorageMute::open(),
    )));
    let unlock = wire_audio_unlock(&document, &sound);
    let mute_button = ui::wire_mute_button(&document, &opts.mute_button_id, sound.clone());

    let mute_button_id = opts.mute_button_id.clone();
    let sections = Rc::new(SectionRegistry::new(opts.sections));
    let nav = nav::NavController::mount(
        &document,
        sections,
        sound.clone(),
        nav::NavHooks {
            on_secret: opts.on_secret,
            on_toggle_theme: opts.on_toggle_theme,
            help_overlay_id: opts.help_overlay_id,
            mute_button_id: opts.mute_button_id,
        },
    );
    let reveal = reveal::RevealTrigger::mount(&document, sound.clone());

    let particles = match document
        .get_element_by_id(&opts.canvas_id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(canvas) => {
            frame::ParticleRenderer::mount(canvas, FieldParams::default(), opts.track_pointer)
                .map_err(|e| log::warn!("[particles] disabled: {e}"))
                .ok()
        }
        None => {
            log::info!("[particles] no #{} canvas; backdrop off", opts.canvas_id);
            None
        }
    };

    log::info!("[site] mounted (muted={})", sound.borrow().is_muted());
    Ok(Site {
        sound,
        nav: Some(nav),
        reveal: Some(reveal),
        particles,
        unlock,
        mute_button,
        mute_button_id,
    })
}

#[wasm_bindgen]
impl Site {
    /// Assemble and wire every component. `options` may be `undefined`.
    pub fn mount(options: &JsValue) -> Result<Site, JsValue> {
        mount_site(MountOptions::from_js(options)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = initializeSound)]
    pub fn initialize_sound(&self) {
        audio::initialize(&self.sound);
    }

    #[wasm_bindgen(js_name = playCue)]
    pub fn play_cue(&self, name: &str) {
        self.sound.borrow().play_named(name);
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) -> bool {
        let muted = self.sound.borrow_mut().toggle_mute();
        self.sync_mute_button(muted);
        muted
    }

    #[wasm_bindgen(js_name = setMuted)]
    pub fn set_muted(&self, muted: bool) -> bool {
        let muted = self.sound.borrow_mut().set_muted(muted);
        self.sync_mute_button(muted);
        muted
    }

    #[wasm_bindgen(js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.sound.borrow().is_muted()
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, volume: f32) {
        self.sound.borrow_mut().set_volume(volume);
    }

    /// Absolute jump, clamped. Returns the target index, or -1 if nothing scrolled.
    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&self, index: i32) -> i32 {
        self.nav
            .as_ref()
            .and_then(|n| n.scroll_to_section(index as i64))
            .map_or(-1, |i| i as i32)
    }

    /// Relative jump from the current section, clamped.
    #[wasm_bindgen(js_name = scrollBySections)]
    pub fn scroll_by_sections(&self, delta: i32) -> i32 {
        self.nav
            .as_ref()
            .and_then(|n| n.scroll_by(delta as i64))
            .map_or(-1, |i| i as i32)
    }

    #[wasm_bindgen(js_name = currentSectionIndex)]
    pub fn current_section_index(&self) -> u32 {
        self.nav.as_ref().map_or(0, |n| n.current_index() as u32)
    }

    #[wasm_bindgen(js_name = revealedCount)]
    pub fn revealed_count(&self) -> u32 {
        self.reveal.as_ref().map_or(0, |r| r.revealed_count() as u32)
    }

    #[wasm_bindgen(js_name = setPointer)]
    pub fn set_pointer(&self, x: f32, y: f32) {
        if let Some(p) = &self.particles {
            p.set_pointer(x, y);
        }
    }

    #[wasm_bindgen(js_name = particlesVisible)]
    pub fn particles_visible(&self) -> bool {
        self.particles.as_ref().is_some_and(|p| p.is_visible())
    }

    /// Stop every loop, observer, listener and timer. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(mut n) = self.nav.take() {
            n.stop();
        }
        if let Some(mut r) = self.reveal.take() {
            r.stop();
        }
        if let Some(mut p) = self.particles.take() {
            p.stop();
        }
        for mut l in self.unlock.drain(..) {
            l.remove();
        }
        if let Some(mut l) = self.mute_button.take() {
            l.remove();
        }
        log::info!("[site] unmounted");
    }
}

impl Site {
    fn sync_mute_button(&self, muted: bool) {
        if let Some(document) = dom::window_document() {
            ui::render_mute_button(&document, &self.mute_button_id, muted);
        }
    }
}
