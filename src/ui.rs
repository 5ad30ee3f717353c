use crate::audio;
use crate::constants::MUTED_CLASS;
use crate::dom::Listener;
use crate::SharedSound;
use web_sys as web;

/// Reflect the mute flag on the toggle button: label and a `muted` class.
pub fn render_mute_button(document: &web::Document, id: &str, muted: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let label = if muted { "Unmute sounds" } else { "Mute sounds" };
        _ = el.set_attribute("aria-label", label);
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
        _ = el.class_list().toggle_with_force(MUTED_CLASS, muted);
    }
}

pub fn wire_mute_button(
    document: &web::Document,
    id: &str,
    sound: SharedSound,
) -> Option<Listener> {
    let el = document.get_element_by_id(id)?;
    render_mute_button(document, id, sound.borrow().is_muted());
    let doc = document.clone();
    let id_owned = id.to_string();
    let listener = Listener::attach(&el, "click", move |_ev| {
        // The click itself is a gesture, so the engine may be opened here.
        audio::initialize(&sound);
        let muted = sound.borrow_mut().toggle_mute();
        render_mute_button(&doc, &id_owned, muted);
        log::info!("[sound] muted={}", muted);
    });
    match listener {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[site] mute button: {e}");
            None
        }
    }
}
