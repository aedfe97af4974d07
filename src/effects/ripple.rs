//! Click feedback on `.btn` buttons: a ripple expanding from the pointer,
//! plus the demo notifications the call-to-action buttons fire.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::components::notification::{notify, NoticeKind};

const RIPPLE_LIFETIME_MS: u32 = 600;

pub fn install(document: &Document) {
    let Some(buttons) = document.query_selector_all(".btn").ok() else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let callback = {
            let button = button.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                spawn_ripple(&document, &button, &event);
                if let Some(message) = demo_action(&button.text_content().unwrap_or_default()) {
                    notify(message, NoticeKind::Info);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        button
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .unwrap();
        callback.forget();
    }
}

fn spawn_ripple(document: &Document, button: &HtmlElement, event: &MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let (size, x, y) = ripple_geometry(
        rect.width(),
        rect.height(),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
    );
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute(
        "style",
        &format!("width: {size}px; height: {size}px; left: {x}px; top: {y}px;"),
    );
    let _ = button.append_child(&ripple);

    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}

/// A square covering the whole button, centered on the click point.
fn ripple_geometry(
    width: f64,
    height: f64,
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64, f64) {
    let size = width.max(height);
    (
        size,
        client_x - rect_left - size / 2.0,
        client_y - rect_top - size / 2.0,
    )
}

/// The landing page's buttons are demo stand-ins; the actionable ones
/// explain what they would do in the real product.
fn demo_action(label: &str) -> Option<&'static str> {
    if label.contains("Start Free Trial") || label.contains("Get Started") {
        Some("Demo: this button would take you to the sign-up flow")
    } else if label.contains("Watch Demo") || label.contains("Contact Us") {
        Some("Demo: this button would open the product tour or contact form")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_covers_the_longest_button_side() {
        let (size, _, _) = ripple_geometry(200.0, 48.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(size, 200.0);
        let (size, _, _) = ripple_geometry(40.0, 90.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(size, 90.0);
    }

    #[test]
    fn ripple_is_centered_on_the_click_point() {
        // Button at (100, 50), 200x48; click dead center.
        let (size, x, y) = ripple_geometry(200.0, 48.0, 200.0, 74.0, 100.0, 50.0);
        assert_eq!(size, 200.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, -76.0);
    }

    #[test]
    fn only_actionable_labels_trigger_demo_notifications() {
        assert!(demo_action("Start Free Trial").is_some());
        assert!(demo_action(" Get Started → ").is_some());
        assert!(demo_action("Watch Demo").is_some());
        assert!(demo_action("Contact Us").is_some());
        assert!(demo_action("Learn more").is_none());
    }
}
