use crate::constants::{REVEAL_ACTIVE_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::core::{Reveal, RevealTracker};
use crate::observe::Observer;
use crate::SharedSound;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const KEY_ATTR: &str = "data-reveal-key";

fn reveal_elements(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Scroll-reveal: adds `active` on first entry into the viewport and plays
/// the transition cue once for elements with an id.
pub struct RevealTrigger {
    tracker: Rc<RefCell<RevealTracker>>,
    observer: Option<Observer>,
}

impl RevealTrigger {
    pub fn mount(document: &web::Document, sound: SharedSound) -> Self {
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let elements = reveal_elements(document);
        for (key, el) in elements.iter().enumerate() {
            _ = el.set_attribute(KEY_ATTR, &key.to_string());
        }

        let tracker_cb = tracker.clone();
        let observer = Observer::new(REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, move |entry| {
            let el = entry.target();
            let Some(key) = el
                .get_attribute(KEY_ATTR)
                .and_then(|k| k.parse::<u32>().ok())
            else {
                return;
            };
            let outcome =
                tracker_cb
                    .borrow_mut()
                    .observe(key, entry.is_intersecting(), !el.id().is_empty());
            if let Reveal::Activated { cue } = outcome {
                _ = el.class_list().add_1(REVEAL_ACTIVE_CLASS);
                if let Some(cue) = cue {
                    sound.borrow().play(cue);
                }
            }
        });

        let observer = match observer {
            Ok(obs) => {
                for el in &elements {
                    obs.observe(el);
                }
                Some(obs)
            }
            Err(e) => {
                // Never leave content hidden: reveal everything, silently.
                log::warn!("[reveal] {e}; revealing all {} elements", elements.len());
                let mut t = tracker.borrow_mut();
                for (key, el) in elements.iter().enumerate() {
                    t.observe(key as u32, true, false);
                    _ = el.class_list().add_1(REVEAL_ACTIVE_CLASS);
                }
                None
            }
        };

        log::info!("[reveal] observing {} elements", elements.len());
        Self { tracker, observer }
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().active_count()
    }

    pub fn stop(&mut self) {
        if let Some(mut obs) = self.observer.take() {
            obs.disconnect();
        }
    }
}
