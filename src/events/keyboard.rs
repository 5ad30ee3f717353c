use crate::core::{is_text_field_tag, KeyInput};
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

fn targets_text_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_text_field_tag(&el.tag_name()))
        .unwrap_or(false)
}

#[inline]
pub fn key_input(ev: &web::KeyboardEvent) -> KeyInput {
    KeyInput {
        code: ev.code(),
        shift: ev.shift_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
        in_text_field: targets_text_field(ev),
    }
}

/// Register one window-level keydown handler. The returned listener is the
/// only registration; dropping or removing it detaches the handler.
pub fn wire_global_keydown(
    mut handler: impl FnMut(&web::KeyboardEvent, KeyInput) + 'static,
) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::attach(&window, "keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            let input = key_input(kev);
            handler(kev, input);
        }
    })
}
