//! Hero parallax: the inner hero container drifts at a tenth of the scroll
//! speed while the hero is still on screen.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::timing;

const PARALLAX_FACTOR: f64 = 0.1;
const RESIZE_DEBOUNCE_MS: u32 = 150;

pub fn install(window: &Window, document: &Document) {
    // The hero section is part of the page's own markup; its absence is a
    // developer error.
    let hero = document.query_selector(".hero").unwrap().unwrap();
    let Some(inner) = hero
        .query_selector(".hero-container")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    // Viewport height is read once and refreshed on (debounced) resize, so
    // the per-frame scroll handler never forces a layout read.
    let viewport = Rc::new(Cell::new(inner_height(window)));
    {
        let viewport = viewport.clone();
        let window_for_resize = window.clone();
        let refresh = timing::debounce(
            move || viewport.set(inner_height(&window_for_resize)),
            RESIZE_DEBOUNCE_MS,
        );
        let callback = Closure::wrap(Box::new(refresh) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .unwrap();
        callback.forget();
    }

    let handler = {
        let window = window.clone();
        timing::per_frame(move || {
            let scrolled = window.page_y_offset().unwrap_or(0.0);
            if let Some(offset) = offset_for(scrolled, viewport.get()) {
                let _ = inner
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        })
    };
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .unwrap();
    callback.forget();
}

fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// No offset once the hero has scrolled fully past; there is nothing left
/// to move.
fn offset_for(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_a_tenth_of_scroll_within_the_first_viewport() {
        assert_eq!(offset_for(0.0, 800.0), Some(0.0));
        assert_eq!(offset_for(100.0, 800.0), Some(10.0));
        assert_eq!(offset_for(799.0, 800.0), Some(79.9));
    }

    #[test]
    fn offset_stops_once_the_hero_is_scrolled_past() {
        assert_eq!(offset_for(800.0, 800.0), None);
        assert_eq!(offset_for(5000.0, 800.0), None);
    }
}
