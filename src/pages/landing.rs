use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::effects;

#[function_component(Landing)]
pub fn landing() -> Html {
    // All presentation effects hook up once, after the first render has put
    // the page markup in the DOM. Nothing here needs teardown: the page
    // lifetime bounds every listener and timer.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            window.scroll_to_with_x_and_y(0.0, 0.0);

            effects::reveal::install(&window, &document);
            effects::parallax::install(&window, &document);
            effects::smooth_scroll::install(&window, &document);
            effects::typewriter::install(&document);
            effects::ripple::install(&document);

            // The hero's scroll hint fades out the moment the visitor starts
            // scrolling; a leading-edge throttle keeps the handler cheap.
            if let Some(hint) = document
                .query_selector(".scroll-hint")
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let window_for_hint = window.clone();
                let on_scroll = effects::timing::throttle(
                    move || {
                        if window_for_hint.page_y_offset().unwrap_or(0.0) > 0.0 {
                            let _ = hint.style().set_property("opacity", "0");
                        }
                    },
                    200,
                );
                let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                callback.forget();
            }

            // Counters (and the body marker) wait for the full load so they
            // animate over settled layout.
            if document.ready_state() == "complete" {
                on_page_loaded(&document);
            } else {
                let document_for_load = document.clone();
                let callback = Closure::wrap(Box::new(move || {
                    on_page_loaded(&document_for_load);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())
                    .unwrap();
                callback.forget();
            }

            info!("landing page effects installed");
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero" id="home">
                <div class="hero-container">
                    <h1 class="hero-title">{"Beacon keeps every launch on course"}</h1>
                    <p class="hero-subtitle">
                        {"One dashboard for releases, incidents and the people handling them — \
                          built for teams that ship every day."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary">{"Start Free Trial"}</button>
                        <button class="btn btn-secondary">{"Watch Demo"}</button>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <span class="stat-value" data-count="250">{"0"}</span>
                            <span class="stat-label">{"teams on board"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value" data-count="12000">{"0"}</span>
                            <span class="stat-label">{"releases tracked"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value" data-count="99">{"0"}</span>
                            <span class="stat-label">{"% uptime"}</span>
                        </div>
                    </div>
                </div>
                <div class="scroll-hint" aria-hidden="true">{"▾"}</div>
            </section>

            <section class="section" id="overview">
                <h2 class="section-title">{"Everything in one place"}</h2>
                <div class="card-grid">
                    <div class="overview-item">
                        <h3>{"Release timeline"}</h3>
                        <p>{"Every deploy, flag flip and rollback on a single timeline."}</p>
                    </div>
                    <div class="overview-item">
                        <h3>{"Live status"}</h3>
                        <p>{"Service health at a glance, straight from your checks."}</p>
                    </div>
                    <div class="overview-item">
                        <h3>{"On-call handoff"}</h3>
                        <p>{"Context travels with the pager, not in someone's head."}</p>
                    </div>
                    <div class="overview-item">
                        <h3>{"Postmortems"}</h3>
                        <p>{"Drafted from the incident channel while it's still fresh."}</p>
                    </div>
                </div>
            </section>

            <section class="section" id="features">
                <h2 class="section-title">{"Built around your workflow"}</h2>

                <h3 class="category-title">{"Ship"}</h3>
                <div class="card-grid">
                    <div class="feature-card">
                        <h3>{"Pipelines"}</h3>
                        <p>{"Connect CI once, see every environment's state forever."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Feature flags"}</h3>
                        <p>{"Gradual rollouts with automatic halt on error spikes."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Change review"}</h3>
                        <p>{"Risky changes get flagged before they land, not after."}</p>
                    </div>
                </div>

                <h3 class="category-title">{"Respond"}</h3>
                <div class="card-grid">
                    <div class="feature-card">
                        <h3>{"Alert routing"}</h3>
                        <p>{"Alerts reach the person who can act, with the context to act on."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Incident rooms"}</h3>
                        <p>{"A timeline, a scribe and a severity — spun up in one click."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Status pages"}</h3>
                        <p>{"Customers hear it from you first, automatically."}</p>
                    </div>
                </div>
            </section>

            <section class="section" id="tech">
                <h2 class="section-title">{"Plays well with your stack"}</h2>
                <div class="card-grid">
                    <div class="tech-item">{"GitHub"}</div>
                    <div class="tech-item">{"GitLab"}</div>
                    <div class="tech-item">{"Kubernetes"}</div>
                    <div class="tech-item">{"Terraform"}</div>
                    <div class="tech-item">{"Grafana"}</div>
                    <div class="tech-item">{"Slack"}</div>
                </div>
            </section>

            <section class="section" id="highlights">
                <h2 class="section-title">{"Why teams switch"}</h2>
                <div class="card-grid">
                    <div class="highlight-card">
                        <h3>{"Five-minute setup"}</h3>
                        <p>{"A deploy webhook and you're live. No agents to roll out."}</p>
                    </div>
                    <div class="highlight-card">
                        <h3>{"Your data stays yours"}</h3>
                        <p>{"Self-host the whole thing or bring your own storage."}</p>
                    </div>
                    <div class="highlight-card">
                        <h3>{"Priced for teams"}</h3>
                        <p>{"Per team, not per seat. Invite everyone who ships."}</p>
                    </div>
                </div>
            </section>

            <section class="section cta">
                <h2 class="section-title">{"Ready when you are"}</h2>
                <div class="hero-actions">
                    <button class="btn btn-primary">{"Get Started"}</button>
                    <button class="btn btn-secondary">{"Contact Us"}</button>
                </div>
            </section>

            <footer class="footer">
                <span>{"© 2026 Beacon. All systems nominal."}</span>
            </footer>

            <PageStyles />
        </div>
    }
}

fn on_page_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
    effects::counter::install(document);
    info!("page fully loaded, counters running");
}

/// Page CSS, kept next to the markup it styles. Includes the keyframes the
/// imperative effects rely on (ripples, toast slide-in/out) and the
/// will-change hint class the reveal effect toggles.
#[function_component(PageStyles)]
fn page_styles() -> Html {
    html! {
        <style>
            {r#"
            * { box-sizing: border-box; }
            body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: #1f2430; }
            body.loaded .hero-container { transition: transform 0.1s linear; }

            /* Navbar */
            .navbar {
                position: fixed; top: 0; left: 0; right: 0; z-index: 100;
                display: flex; align-items: center; justify-content: space-between;
                height: 64px; padding: 0 24px;
                background: rgba(255, 255, 255, 0.95);
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }
            .navbar.scrolled {
                background: rgba(255, 255, 255, 0.98);
                box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
            }
            .nav-logo { font-weight: 700; font-size: 20px; color: #1f2430; text-decoration: none; }
            .nav-menu { display: flex; gap: 24px; list-style: none; margin: 0; padding: 0; }
            .nav-menu a { color: #4b5565; text-decoration: none; font-size: 15px; }
            .nav-menu a:hover { color: #2563eb; }
            .nav-toggle { display: none; background: none; border: none; cursor: pointer; padding: 8px; }
            .nav-toggle span { display: block; width: 22px; height: 2px; background: #1f2430; margin: 5px 0; transition: transform 0.3s ease; }
            .nav-toggle.nav-toggle-active span:first-child { transform: translateY(7px) rotate(45deg); }
            .nav-toggle.nav-toggle-active span:nth-child(2) { opacity: 0; }
            .nav-toggle.nav-toggle-active span:last-child { transform: translateY(-7px) rotate(-45deg); }

            @media (max-width: 768px) {
                .nav-toggle { display: block; }
                .nav-menu {
                    position: fixed; top: 64px; right: 0; width: 70%;
                    flex-direction: column; padding: 24px; gap: 16px;
                    background: white; box-shadow: -4px 0 20px rgba(0,0,0,0.1);
                    transform: translateX(100%); transition: transform 0.3s ease;
                }
                .nav-menu.nav-menu-active { transform: translateX(0); }
            }

            /* Hero */
            .hero {
                min-height: 100vh; display: flex; align-items: center; justify-content: center;
                position: relative; overflow: hidden;
                background: linear-gradient(160deg, #eef4ff 0%, #fdfdfd 60%);
            }
            .hero-container { text-align: center; max-width: 760px; padding: 0 24px; }
            .hero-title { font-size: 48px; min-height: 1.2em; margin: 0 0 16px; }
            .hero-subtitle { font-size: 20px; color: #4b5565; margin: 0 0 32px; }
            .hero-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
            .hero-stats { display: flex; gap: 48px; justify-content: center; margin-top: 56px; }
            .stat { display: flex; flex-direction: column; }
            .stat-value { font-size: 36px; font-weight: 700; color: #2563eb; }
            .stat-label { font-size: 14px; color: #4b5565; }
            .scroll-hint {
                position: absolute; bottom: 24px; left: 50%;
                font-size: 24px; color: #9aa3b2; animation: hint-bounce 2s infinite;
                transition: opacity 0.4s ease;
            }
            @keyframes hint-bounce {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, 8px); }
            }

            /* Sections and cards */
            .section { max-width: 1080px; margin: 0 auto; padding: 96px 24px; }
            .section-title { font-size: 32px; text-align: center; margin: 0 0 48px; }
            .category-title { font-size: 22px; margin: 48px 0 24px; }
            .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
            .overview-item, .feature-card, .tech-item, .highlight-card {
                background: white; border: 1px solid #e0e6ed; border-radius: 12px;
                padding: 28px;
            }
            .tech-item { text-align: center; font-weight: 600; }
            .overview-item:hover, .feature-card:hover, .tech-item:hover, .highlight-card:hover {
                transform: translateY(-10px) scale(1.02) !important;
                box-shadow: 0 12px 30px rgba(31, 36, 48, 0.12);
            }

            /* Reveal effect keeps transforms on the compositor while it runs */
            .accelerated { will-change: opacity, transform; }

            /* Buttons and ripples */
            .btn {
                position: relative; overflow: hidden;
                padding: 14px 28px; font-size: 16px; font-weight: 600;
                border-radius: 10px; border: none; cursor: pointer;
            }
            .btn-primary { background: #2563eb; color: white; }
            .btn-primary:hover { background: #1d4ed8; }
            .btn-secondary { background: white; color: #1f2430; border: 2px solid #c6ccd8; }
            .ripple {
                position: absolute;
                background: rgba(255, 255, 255, 0.6);
                border-radius: 50%;
                pointer-events: none;
                transform: scale(0);
                animation: ripple-grow 0.6s linear;
            }
            @keyframes ripple-grow {
                to { transform: scale(1); opacity: 0; }
            }

            /* Toast notifications */
            @keyframes notice-in {
                from { transform: translateX(100%); opacity: 0; }
                to { transform: translateX(0); opacity: 1; }
            }
            @keyframes notice-out {
                from { transform: translateX(0); opacity: 1; }
                to { transform: translateX(100%); opacity: 0; }
            }

            .cta { text-align: center; }
            .footer {
                border-top: 1px solid #e0e6ed; padding: 32px 24px;
                text-align: center; color: #9aa3b2; font-size: 14px;
            }
            "#}
        </style>
    }
}
