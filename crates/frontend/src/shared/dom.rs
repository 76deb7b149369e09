//! Small DOM side effects used by the catalog browser.
//!
//! Every helper here is best-effort: a missing window, document or element is
//! silently ignored.

use crate::shared::image::ResolvedImage;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element with the given id into view.
pub fn scroll_into_view(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));

    let Some(element) = element else {
        log::debug!("scroll target #{element_id} is not rendered");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `error` handler for an `<img>`: point it at the fallback image.
///
/// Only the element is touched, the resolved image stays as it was, so the
/// next render tries the resolved source again.
pub fn swap_to_fallback(target: Option<EventTarget>, image: &ResolvedImage) {
    let Some(img) = target.and_then(|t| t.dyn_into::<HtmlImageElement>().ok()) else {
        return;
    };
    let current = img.get_attribute("src").unwrap_or_default();
    if let Some(fallback) = image.fallback_for(&current) {
        log::debug!("image {current} failed, using {fallback}");
        img.set_src(fallback);
    }
}
