//! Types the hero title out one character at a time after a short delay.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const START_DELAY_MS: u32 = 500;
const CHAR_INTERVAL_MS: u32 = 100;

pub fn install(document: &Document) {
    let title: HtmlElement = document
        .query_selector(".hero-title")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let full: Rc<Vec<char>> = Rc::new(
        title
            .text_content()
            .unwrap_or_default()
            .chars()
            .collect(),
    );
    title.set_text_content(Some(""));

    Timeout::new(START_DELAY_MS, move || type_next(title, full, 0)).forget();
}

// Self-rescheduling timeout chain; ends when the last character is out.
fn type_next(title: HtmlElement, full: Rc<Vec<char>>, shown: usize) {
    if shown >= full.len() {
        return;
    }
    let shown = shown + 1;
    title.set_text_content(Some(&typed_prefix(&full, shown)));
    Timeout::new(CHAR_INTERVAL_MS, move || type_next(title, full, shown)).forget();
}

fn typed_prefix(full: &[char], shown: usize) -> String {
    full.iter().take(shown).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn prefix_grows_one_character_at_a_time() {
        let text = chars("Beacon");
        assert_eq!(typed_prefix(&text, 0), "");
        assert_eq!(typed_prefix(&text, 1), "B");
        assert_eq!(typed_prefix(&text, 3), "Bea");
        assert_eq!(typed_prefix(&text, 6), "Beacon");
        assert_eq!(typed_prefix(&text, 99), "Beacon");
    }

    #[test]
    fn prefix_respects_multibyte_characters() {
        let text = chars("héllo — ✓");
        assert_eq!(typed_prefix(&text, 2), "hé");
        assert_eq!(typed_prefix(&text, 9), "héllo — ✓");
    }
}
