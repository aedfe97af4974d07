//! Animated statistics: every `[data-count]` element counts up from zero to
//! its target once the page has fully loaded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const DURATION_MS: u32 = 2_000;
const STEPS: u32 = 60;

pub fn install(document: &Document) {
    let Some(nodes) = document.query_selector_all("[data-count]").ok() else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(target) = el
            .get_attribute("data-count")
            .and_then(|raw| raw.parse::<u64>().ok())
        else {
            debug!("counter: skipping element with a non-numeric data-count");
            continue;
        };
        animate(el, target);
    }
}

// Each element gets its own interval; they tick independently and each one
// cancels itself on the final step.
fn animate(el: HtmlElement, target: u64) {
    let step = Rc::new(Cell::new(0u32));
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let tick = {
        let ticker = ticker.clone();
        move || {
            let current = step.get() + 1;
            step.set(current);
            el.set_text_content(Some(&value_at_step(current, target).to_string()));
            if current >= STEPS {
                ticker.borrow_mut().take();
            }
        }
    };
    *ticker.borrow_mut() = Some(Interval::new(DURATION_MS / STEPS, tick));
}

/// Linear interpolation toward `target`; the final step snaps exactly so no
/// rounding residue is ever displayed.
fn value_at_step(step: u32, target: u64) -> u64 {
    if step >= STEPS {
        return target;
    }
    (target as f64 * f64::from(step) / f64::from(STEPS)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_step_lands_exactly_on_the_target() {
        for target in [0, 1, 7, 250, 99_999] {
            assert_eq!(value_at_step(STEPS, target), target);
            assert_eq!(value_at_step(STEPS + 5, target), target);
        }
    }

    #[test]
    fn progression_is_monotonic_from_zero() {
        let target = 250;
        assert_eq!(value_at_step(0, target), 0);
        let mut last = 0;
        for step in 1..=STEPS {
            let value = value_at_step(step, target);
            assert!(value >= last, "step {step} went backwards");
            assert!(value <= target);
            last = value;
        }
        assert_eq!(last, target);
    }

    #[test]
    fn awkward_targets_do_not_drift() {
        // 7 / 60 rounds badly at every step; the snap still wins.
        assert_eq!(value_at_step(STEPS, 7), 7);
        assert_eq!(value_at_step(STEPS - 1, 7), 6);
    }
}
