use crate::constants::HIDDEN_CLASS;
use web_sys as web;

// Shortcuts-help overlay, addressed by element id and toggled via a `hidden` class.

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
}

/// A missing overlay counts as hidden.
#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Escape closes but never opens.
#[inline]
pub fn close(document: &web::Document, id: &str) {
    if !is_hidden(document, id) {
        hide(document, id);
    }
}
