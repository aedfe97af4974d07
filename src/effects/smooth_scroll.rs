//! In-page anchor navigation: clicks on nav links scroll smoothly to the
//! target section instead of jumping, compensating for the fixed navbar.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

/// Height of the fixed navigation bar the scroll target must clear.
const HEADER_OFFSET_PX: f64 = 80.0;

pub fn install(window: &Window, document: &Document) {
    let Some(links) = document.query_selector_all(".nav-menu a[href^='#']").ok() else {
        return;
    };

    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let callback = {
            let link = link.clone();
            let window = window.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let id = href.trim_start_matches('#');
                // Dangling anchors do nothing at all.
                let Some(target) = document.get_element_by_id(id) else {
                    return;
                };
                let top = scroll_target(
                    target.get_bounding_client_rect().top(),
                    window.page_y_offset().unwrap_or(0.0),
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        link.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .unwrap();
        callback.forget();
    }
}

/// Absolute scroll position that puts `rect_top` just below the fixed header.
fn scroll_target(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_accounts_for_the_fixed_header() {
        assert_eq!(scroll_target(500.0, 0.0), 420.0);
        assert_eq!(scroll_target(120.0, 1000.0), 1040.0);
        // Sections above the current viewport produce a smaller offset.
        assert_eq!(scroll_target(-300.0, 1000.0), 620.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn dangling_anchor_click_is_a_silent_no_op() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(
            "<ul class=\"nav-menu\"><li><a id=\"dangling\" href=\"#nowhere\">Nowhere</a></li></ul>",
        );
        document.body().unwrap().append_child(&host).unwrap();

        install(&window, &document);

        let link: web_sys::HtmlElement = document
            .get_element_by_id("dangling")
            .unwrap()
            .dyn_into()
            .unwrap();
        link.click();

        assert_eq!(window.page_y_offset().unwrap(), 0.0);
        host.remove();
    }
}
