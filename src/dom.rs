//! Fallible DOM helpers. A page section can legitimately be absent (the
//! layout changes, an id is renamed), so every lookup degrades to a
//! silent no-op instead of panicking.

use wasm_bindgen::JsCast;
use web_sys::{
    DomRect, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn section_rect(id: &str) -> Option<DomRect> {
    Some(element_by_id(id)?.get_bounding_client_rect())
}

pub fn scroll_to_section(id: &str) {
    if let Some(element) = element_by_id(id) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Suspends or restores background page scroll (modal overlays). Callers
/// pair every lock with an unlock in their effect cleanup.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

pub fn set_root_css_var(name: &str, value: &str) {
    if let Some(root) = document()
        .and_then(|doc| doc.document_element())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = root.style().set_property(name, value);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}
