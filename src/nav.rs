use crate::constants::{SECTION_ROOT_MARGIN, SECTION_THRESHOLD};
use crate::core::{CueName, NavEffect, NavEffects, Navigator, SectionRegistry};
use crate::dom::Listener;
use crate::events::keyboard;
use crate::observe::Observer;
use crate::{overlay, ui, SharedSound};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Host hooks and element ids the controller acts on.
pub struct NavHooks {
    pub on_secret: Option<js_sys::Function>,
    pub on_toggle_theme: Option<js_sys::Function>,
    pub help_overlay_id: String,
    pub mute_button_id: String,
}

struct NavInner {
    navigator: RefCell<Navigator>,
    sound: SharedSound,
    hooks: NavHooks,
    document: web::Document,
}

impl NavInner {
    fn scroll_to(&self, index: i64) -> Option<usize> {
        let target = self.navigator.borrow().target(index)?;
        let el = {
            let nav = self.navigator.borrow();
            let id = &nav.sections().get(target)?.id;
            self.document.get_element_by_id(id)
        };
        let Some(el) = el else {
            log::debug!("[keys] section #{} not in document", target);
            return None;
        };
        self.navigator.borrow_mut().commit(target);
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        self.sound.borrow().play(CueName::Whoosh);
        Some(target)
    }

    fn apply(&self, ev: &web::KeyboardEvent, effects: NavEffects) {
        for effect in effects {
            match effect {
                NavEffect::PreventDefault => ev.prevent_default(),
                NavEffect::ScrollTo(index) => {
                    self.scroll_to(index as i64);
                }
                NavEffect::PlayCue(cue) => self.sound.borrow().play(cue),
                NavEffect::ToggleMute => {
                    let muted = self.sound.borrow_mut().toggle_mute();
                    ui::render_mute_button(&self.document, &self.hooks.mute_button_id, muted);
                    log::info!("[keys] muted={}", muted);
                }
                NavEffect::ToggleTheme => {
                    if let Some(f) = &self.hooks.on_toggle_theme {
                        if let Err(e) = f.call0(&JsValue::NULL) {
                            log::warn!("[keys] theme callback failed: {:?}", e);
                        }
                        self.sound.borrow().play(CueName::Transition);
                    }
                }
                NavEffect::ToggleHelp => overlay::toggle(&self.document, &self.hooks.help_overlay_id),
                NavEffect::OpenHelp => overlay::show(&self.document, &self.hooks.help_overlay_id),
                NavEffect::CloseHelp => overlay::close(&self.document, &self.hooks.help_overlay_id),
                NavEffect::SecretUnlocked => {
                    log::info!("[keys] secret sequence unlocked");
                    if let Some(f) = &self.hooks.on_secret {
                        if let Err(e) = f.call0(&JsValue::NULL) {
                            log::warn!("[keys] secret callback failed: {:?}", e);
                        }
                    }
                }
            }
        }
    }
}

/// Keyboard navigation plus the scroll tracker that keeps the current
/// section in sync with the viewport.
pub struct NavController {
    inner: Rc<NavInner>,
    keydown: Option<Listener>,
    tracker: Option<Observer>,
}

impl NavController {
    pub fn mount(
        document: &web::Document,
        sections: Rc<SectionRegistry>,
        sound: SharedSound,
        hooks: NavHooks,
    ) -> Self {
        let inner = Rc::new(NavInner {
            navigator: RefCell::new(Navigator::new(sections.clone())),
            sound,
            hooks,
            document: document.clone(),
        });

        let inner_keys = inner.clone();
        let keydown = keyboard::wire_global_keydown(move |ev, input| {
            // Effects are collected first so the navigator borrow ends before they run.
            let effects = inner_keys.navigator.borrow_mut().handle_key(&input);
            inner_keys.apply(ev, effects);
        })
        .map_err(|e| log::warn!("[keys] keyboard navigation disabled: {e}"))
        .ok();

        let inner_obs = inner.clone();
        let tracker = Observer::new(SECTION_ROOT_MARGIN, SECTION_THRESHOLD, move |entry| {
            if entry.is_intersecting() {
                inner_obs
                    .navigator
                    .borrow_mut()
                    .sync_visible(&entry.target().id());
            }
        })
        .map_err(|e| log::warn!("[keys] section tracking disabled: {e}"))
        .ok();
        if let Some(obs) = &tracker {
            for section in sections.iter() {
                if let Some(el) = document.get_element_by_id(&section.id) {
                    obs.observe(&el);
                }
            }
        }

        log::info!("[keys] navigation over {} sections", sections.len());
        Self {
            inner,
            keydown,
            tracker,
        }
    }

    /// Absolute jump, clamped to the registry. Returns the index scrolled to.
    pub fn scroll_to_section(&self, index: i64) -> Option<usize> {
        self.inner.scroll_to(index)
    }

    /// Relative jump from the current section, clamped.
    pub fn scroll_by(&self, delta: i64) -> Option<usize> {
        let current = self.inner.navigator.borrow().current() as i64;
        self.inner.scroll_to(current.saturating_add(delta))
    }

    pub fn current_index(&self) -> usize {
        self.inner.navigator.borrow().current()
    }

    pub fn stop(&mut self) {
        if let Some(mut l) = self.keydown.take() {
            l.remove();
        }
        if let Some(mut obs) = self.tracker.take() {
            obs.disconnect();
        }
    }
}
