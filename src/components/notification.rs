//! Transient toast notifications. Fire-and-forget: at most one toast is on
//! screen, and a new one replaces whatever is currently showing.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const AUTO_DISMISS_MS: u32 = 5_000;
const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
        }
    }
}

pub fn notify(message: &str, kind: NoticeKind) {
    let document = web_sys::window().unwrap().document().unwrap();

    // Single slot: whatever is currently showing goes away immediately.
    if let Some(existing) = document.query_selector(".notification").ok().flatten() {
        existing.remove();
    }
    let Some(body) = document.body() else {
        return;
    };

    let Some(toast) = build_toast(&document, message, kind) else {
        return;
    };
    let _ = body.append_child(&toast);

    Timeout::new(AUTO_DISMISS_MS, {
        let toast = toast.clone();
        move || {
            // May already have been closed by hand or replaced.
            if toast.is_connected() {
                dismiss(&toast);
            }
        }
    })
    .forget();
}

fn build_toast(document: &Document, message: &str, kind: NoticeKind) -> Option<HtmlElement> {
    let toast: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    toast.set_class_name(&format!("notification notification-{}", kind.class()));
    let _ = toast.set_attribute(
        "style",
        "position: fixed; top: 20px; right: 20px; background: white; \
         border: 1px solid #e0e6ed; border-radius: 8px; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.15); z-index: 10000; \
         max-width: 400px; animation: notice-in 0.3s ease-out;",
    );

    let content: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    content.set_class_name("notification-content");
    let _ = content.set_attribute(
        "style",
        "display: flex; align-items: center; padding: 16px; gap: 12px;",
    );

    let icon: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    icon.set_class_name("notification-icon");
    icon.set_text_content(Some(kind.icon()));

    let text: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    text.set_class_name("notification-message");
    text.set_text_content(Some(message));
    let _ = text.set_attribute("style", "flex: 1; font-size: 14px; color: #333;");

    let close: HtmlElement = document.create_element("button").ok()?.dyn_into().ok()?;
    close.set_class_name("notification-close");
    close.set_text_content(Some("×"));
    let _ = close.set_attribute(
        "style",
        "background: none; border: none; font-size: 18px; cursor: pointer; \
         color: #999; padding: 0; width: 20px; height: 20px; \
         display: flex; align-items: center; justify-content: center;",
    );

    content.append_child(&icon).ok()?;
    content.append_child(&text).ok()?;
    content.append_child(&close).ok()?;
    toast.append_child(&content).ok()?;

    let on_close = {
        let toast = toast.clone();
        Closure::wrap(Box::new(move || dismiss(&toast)) as Box<dyn FnMut()>)
    };
    close
        .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
        .ok()?;
    on_close.forget();

    Some(toast)
}

fn dismiss(toast: &HtmlElement) {
    let _ = toast
        .style()
        .set_property("animation", "notice-out 0.3s ease-in");
    let toast = toast.clone();
    Timeout::new(EXIT_MS, move || toast.remove()).forget();
}
