use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::{Release, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

struct Registration {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Release for Registration {
    fn release(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// An event listener that stays registered until `remove` (or drop).
pub struct Listener {
    registration: Teardown<Registration>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self::registered(target, kind, closure))
    }

    /// Like `attach`, but the browser drops the registration after the first event.
    pub fn attach_once(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self::registered(target, kind, closure))
    }

    fn registered(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web::Event)>,
    ) -> Self {
        Self {
            registration: Teardown::new(Registration {
                target: target.clone(),
                kind,
                closure,
            }),
        }
    }

    pub fn remove(&mut self) {
        self.registration.release();
    }
}

struct PendingTimeout(i32);

impl Release for PendingTimeout {
    fn release(self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.0);
        }
    }
}

/// Trailing-edge debounce over `setTimeout`: each `trigger` restarts the quiet period.
pub struct Debounce {
    delay_ms: i32,
    pending: Rc<RefCell<Teardown<PendingTimeout>>>,
    callback: Closure<dyn FnMut()>,
}

impl Debounce {
    pub fn new(delay_ms: i32, mut f: impl FnMut() + 'static) -> Self {
        let pending: Rc<RefCell<Teardown<PendingTimeout>>> = Rc::default();
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            // Fired timers have nothing left to clear.
            pending_cb.borrow_mut().disarm();
            f();
        }) as Box<dyn FnMut()>);
        Self {
            delay_ms,
            pending,
            callback,
        }
    }

    pub fn trigger(&self) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(handle) => *self.pending.borrow_mut() = Teardown::new(PendingTimeout(handle)),
            Err(e) => log::debug!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().release();
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[inline]
pub fn capped_device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

/// Match the canvas backing store to its CSS size times the capped DPR and
/// reset the 2D transform so drawing happens in CSS pixels. Returns the DPR used.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> f64 {
    let dpr = capped_device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    dpr
}
