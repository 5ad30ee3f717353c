use crate::constants::POINTER_INTERVAL_MS;
use crate::core::FrameThrottle;
use crate::dom::Listener;
use crate::input::PointerState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed `pointermove` into `pointer` at a throttled cadence. Used when the
/// host page does not supply coordinates itself.
pub fn wire_pointer_tracking(pointer: PointerState) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut throttle = FrameThrottle::new(POINTER_INTERVAL_MS);
    Listener::attach(&window, "pointermove", move |ev: web::Event| {
        if !throttle.accept(instant::now()) {
            return;
        }
        if let Some(pev) = ev.dyn_ref::<web::PointerEvent>() {
            pointer.set(pev.client_x() as f32, pev.client_y() as f32);
        }
    })
}
