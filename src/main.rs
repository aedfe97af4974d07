use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod notification;
}
mod effects {
    pub mod counter;
    pub mod parallax;
    pub mod reveal;
    pub mod ripple;
    pub mod smooth_scroll;
    pub mod timing;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

/// The navbar crosses into its "scrolled" look once the page has moved past
/// the hero's upper edge.
const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;

fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    // Level-triggered on every scroll; `use_state_eq` keeps the re-renders
    // to the two actual state flips.
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                // Scroll events arrive faster than frames render; coalesce
                // so the style write happens at most once per frame.
                let handler = {
                    let window = window.clone();
                    effects::timing::per_frame(move || {
                        let offset = window.page_y_offset().unwrap_or(0.0);
                        is_scrolled.set(navbar_scrolled(offset));
                    })
                };
                let scroll_callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Navigating anywhere always collapses the drawer.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"Beacon"}
            </Link<Route>>

            <button
                class={classes!("nav-toggle", (*menu_open).then(|| "nav-toggle-active"))}
                onclick={toggle_menu}
                aria-label="Toggle navigation menu"
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <ul class={classes!("nav-menu", (*menu_open).then(|| "nav-menu-active"))}>
                <li onclick={close_menu.clone()}><a href="#overview">{"Overview"}</a></li>
                <li onclick={close_menu.clone()}><a href="#features">{"Features"}</a></li>
                <li onclick={close_menu.clone()}><a href="#tech">{"Integrations"}</a></li>
                <li onclick={close_menu}><a href="#highlights">{"Why Beacon"}</a></li>
            </ul>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Panics from missing required page elements surface in the console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::navbar_scrolled;

    #[test]
    fn navbar_state_is_level_triggered_on_the_threshold() {
        assert!(!navbar_scrolled(0.0), "top of page is plain");
        assert!(navbar_scrolled(150.0), "past the threshold is scrolled");
        assert!(!navbar_scrolled(50.0), "coming back up is plain again");
        assert!(!navbar_scrolled(100.0), "the threshold itself is plain");
    }
}
