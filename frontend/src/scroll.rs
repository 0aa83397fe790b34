use log::warn;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to the element with `id`. Returns false when it is missing.
pub fn scroll_to_section(id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));
    match element {
        Some(element) => {
            scroll_into_view(&element);
            true
        }
        None => {
            warn!("No section with id '{}'", id);
            false
        }
    }
}
