use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Defers `action` until `wait_ms` have passed since the last call to the
/// returned wrapper. Each new call cancels the pending one.
pub fn debounce<F>(action: F, wait_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let action = Rc::new(RefCell::new(action));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move || {
        if let Some(previous) = pending.borrow_mut().take() {
            previous.cancel();
        }
        let action = action.clone();
        let slot = pending.clone();
        let timeout = Timeout::new(wait_ms, move || {
            slot.borrow_mut().take();
            (&mut *action.borrow_mut())();
        });
        *pending.borrow_mut() = Some(timeout);
    }
}

/// Leading-edge rate limiter: the first call runs `action` immediately,
/// further calls are ignored until `limit_ms` have elapsed.
pub fn throttle<F>(action: F, limit_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let action = Rc::new(RefCell::new(action));
    let gated = Rc::new(Cell::new(false));

    move || {
        if gated.get() {
            return;
        }
        gated.set(true);
        (&mut *action.borrow_mut())();
        let gated = gated.clone();
        Timeout::new(limit_ms, move || gated.set(false)).forget();
    }
}

/// Coalesces bursts of calls into at most one `action` run per rendered
/// frame. Scroll handlers go through this so style writes happen once per
/// frame instead of once per event.
pub fn per_frame<F>(action: F) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let action = Rc::new(RefCell::new(action));
    let scheduled = Rc::new(Cell::new(false));

    let frame = {
        let action = action.clone();
        let scheduled = scheduled.clone();
        Closure::wrap(Box::new(move || {
            scheduled.set(false);
            (&mut *action.borrow_mut())();
        }) as Box<dyn FnMut()>)
    };

    move || {
        if scheduled.get() {
            return;
        }
        scheduled.set(true);
        let window = web_sys::window().unwrap();
        window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0u32));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[wasm_bindgen_test]
    async fn debounce_collapses_a_burst_into_one_run() {
        let (count, bump) = counter();
        let mut debounced = debounce(bump, 50);

        debounced();
        debounced();
        debounced();
        assert_eq!(count.get(), 0, "nothing runs before the wait elapses");

        TimeoutFuture::new(120).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn debounce_restarts_the_wait_on_each_call() {
        let (count, bump) = counter();
        let mut debounced = debounce(bump, 60);

        debounced();
        TimeoutFuture::new(30).await;
        debounced();
        TimeoutFuture::new(30).await;
        assert_eq!(count.get(), 0, "second call pushed the deadline back");

        TimeoutFuture::new(80).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn throttle_runs_on_the_leading_edge_only() {
        let (count, bump) = counter();
        let mut throttled = throttle(bump, 100);

        for _ in 0..5 {
            throttled();
        }
        assert_eq!(count.get(), 1, "first call runs, the rest are swallowed");

        TimeoutFuture::new(150).await;
        throttled();
        assert_eq!(count.get(), 2, "gate reopens after the limit");
    }

    #[wasm_bindgen_test]
    async fn per_frame_runs_once_per_frame() {
        let (count, bump) = counter();
        let mut coalesced = per_frame(bump);

        coalesced();
        coalesced();
        coalesced();
        assert_eq!(count.get(), 0, "work is deferred to the next frame");

        TimeoutFuture::new(100).await;
        assert_eq!(count.get(), 1);
    }
}
