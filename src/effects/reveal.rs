//! Scroll-triggered reveal of page sections.
//!
//! Every target starts hidden (opacity 0, pushed down 30px) and is revealed
//! exactly once: elements already on screen at install time go through a
//! fast path so the visible part of the page never flashes, everything else
//! waits for its first viewport intersection and is then unobserved.

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use gloo_timers::callback::Timeout;

const TARGET_SELECTOR: &str =
    ".overview-item, .feature-card, .tech-item, .highlight-card, .section-title, .category-title";

/// Card classes stagger within their sibling group; titles reveal undelayed.
const CARD_CLASSES: [&str; 4] = ["feature-card", "overview-item", "tech-item", "highlight-card"];

const INTERSECTION_THRESHOLD: f64 = 0.1;
// Negative bottom margin so the reveal fires a little before the element
// clears the viewport edge.
const ROOT_MARGIN: &str = "0px 0px -40px 0px";

const CARD_STAGGER_MS: u32 = 100;
const FAST_PATH_STAGGER_MS: u32 = 60;

const TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";
// Transition length plus slack, after which the acceleration hint comes off.
const SETTLE_MS: u32 = 700;

pub fn install(window: &Window, document: &Document) {
    let Some(nodes) = document.query_selector_all(TARGET_SELECTOR).ok() else {
        return;
    };

    let observer = build_observer();
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let mut fast_lane = 0u32;
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        hide(&el);
        if el.get_bounding_client_rect().top() < viewport {
            // Already on screen: reveal right away, cascading gently so the
            // above-the-fold content eases in instead of popping.
            reveal_after(&el, fast_lane * FAST_PATH_STAGGER_MS);
            fast_lane += 1;
        } else {
            observer.observe(&el);
        }
    }

    info!(
        "reveal: {} targets ({} above the fold)",
        nodes.length(),
        fast_lane
    );
}

fn build_observer() -> IntersectionObserver {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                // One-shot: the element never re-hides, so stop watching it
                // before the (possibly delayed) reveal even starts.
                observer.unobserve(&target);
                let delay = if is_card(&target) {
                    stagger_delay(sibling_index(&target))
                } else {
                    0
                };
                if let Ok(el) = target.dyn_into::<HtmlElement>() {
                    reveal_after(&el, delay);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(INTERSECTION_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .unwrap();
    callback.forget();
    observer
}

fn hide(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translate3d(0, 30px, 0)");
    let _ = style.set_property("transition", TRANSITION);
}

fn reveal_after(el: &HtmlElement, delay_ms: u32) {
    if delay_ms == 0 {
        reveal(el);
        return;
    }
    let el = el.clone();
    Timeout::new(delay_ms, move || reveal(&el)).forget();
}

fn reveal(el: &HtmlElement) {
    let style = el.style();
    if already_revealed(&style.get_property_value("opacity").unwrap_or_default()) {
        debug!("reveal: skipping element already past half opacity");
        return;
    }
    let _ = el.class_list().add_1("accelerated");
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translate3d(0, 0, 0)");

    let el = el.clone();
    Timeout::new(SETTLE_MS, move || {
        let _ = el.class_list().remove_1("accelerated");
    })
    .forget();
}

fn is_card(el: &Element) -> bool {
    let classes = el.class_list();
    CARD_CLASSES.iter().any(|c| classes.contains(c))
}

/// Position of `el` among its parent's children, 0 when detached.
fn sibling_index(el: &Element) -> usize {
    let Some(parent) = el.parent_element() else {
        return 0;
    };
    let children = parent.children();
    for i in 0..children.length() {
        if children.item(i).as_ref() == Some(el) {
            return i as usize;
        }
    }
    0
}

/// Cascade delay for the Nth card of a sibling group.
fn stagger_delay(index: usize) -> u32 {
    index as u32 * CARD_STAGGER_MS
}

/// An element past half opacity is mid-transition or settled; both the fast
/// path and the observer callback leave it alone.
fn already_revealed(opacity: &str) -> bool {
    opacity.parse::<f64>().map_or(false, |o| o > 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_threshold_separates_pending_from_revealed() {
        assert!(!already_revealed(""));
        assert!(!already_revealed("0"));
        assert!(!already_revealed("0.5"));
        assert!(!already_revealed("garbage"));
        assert!(already_revealed("0.51"));
        assert!(already_revealed("1"));
    }

    #[test]
    fn card_stagger_grows_linearly_with_sibling_position() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(5), 500);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn mount(html: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(html);
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn sibling_index_matches_dom_order() {
        let host = mount(
            "<div class=\"grid\">\
               <div class=\"feature-card\" id=\"c0\"></div>\
               <div class=\"feature-card\" id=\"c1\"></div>\
               <div class=\"feature-card\" id=\"c2\"></div>\
             </div>",
        );
        let document = web_sys::window().unwrap().document().unwrap();
        for i in 0..3 {
            let card = document.get_element_by_id(&format!("c{i}")).unwrap();
            assert_eq!(sibling_index(&card), i);
            assert!(is_card(&card));
        }
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn above_the_fold_targets_settle_to_full_opacity() {
        let host = mount(
            "<h2 class=\"section-title\" id=\"fold-title\">Why</h2>\
             <div>\
               <div class=\"feature-card\" id=\"fold-card\"></div>\
             </div>",
        );
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        install(&window, &document);

        // Fast-path stagger plus a couple of frames.
        TimeoutFuture::new(300).await;

        for id in ["fold-title", "fold-card"] {
            let el: HtmlElement = document
                .get_element_by_id(id)
                .unwrap()
                .dyn_into()
                .unwrap();
            assert_eq!(el.style().get_property_value("opacity").unwrap(), "1");
            assert_eq!(
                el.style().get_property_value("transform").unwrap(),
                "translate3d(0, 0, 0)"
            );
        }
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn reveal_is_idempotent_once_past_half_opacity() {
        let host = mount("<div class=\"feature-card\" id=\"once\"></div>");
        let document = web_sys::window().unwrap().document().unwrap();
        let el: HtmlElement = document
            .get_element_by_id("once")
            .unwrap()
            .dyn_into()
            .unwrap();

        hide(&el);
        reveal(&el);
        // A second reveal must not restart the transition.
        reveal(&el);
        TimeoutFuture::new(50).await;
        assert_eq!(el.style().get_property_value("opacity").unwrap(), "1");
        host.remove();
    }
}
