use crate::core::{Release, Teardown};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct Connection {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Release for Connection {
    fn release(self) {
        // Disconnect before the callback is freed.
        self.observer.disconnect();
    }
}

/// Owned `IntersectionObserver` with its callback; `disconnect` is idempotent
/// and also runs on drop.
pub struct Observer {
    connection: Teardown<Connection>,
}

impl Observer {
    pub fn new(
        root_margin: &str,
        threshold: f64,
        mut on_entry: impl FnMut(&web::IntersectionObserverEntry) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver unavailable: {:?}", e))?;
        Ok(Self {
            connection: Teardown::new(Connection {
                observer,
                _callback: callback,
            }),
        })
    }

    pub fn observe(&self, el: &web::Element) {
        if let Some(c) = self.connection.get() {
            c.observer.observe(el);
        }
    }

    pub fn disconnect(&mut self) {
        self.connection.release();
    }
}
