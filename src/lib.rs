//! Interactive behaviors for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It wires
//! scroll reveal, a sticky nav, two navigation menus, pointer parallax, a
//! marquee, a typewriter, a preloader and a routed contact form onto markup
//! that already exists. The page owns layout and styling; this crate only
//! toggles classes and attributes and handles events.
//!
//! Everything outside `dom`, `behaviors` and `controller` is plain Rust and
//! is tested on the host. Browser glue is compiled only with the `hydrate`
//! feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Testable cores: reveal, sticky nav, menus, parallax, preloader |
//! | [`contact`] | Contact submission model and route-aware router |
//! | [`net`] | Contact backend wire types and HTTP transport |
//! | [`util`] | Phrase parsing and outbound link builders |
//! | [`config`] | Page configuration with JSON override |
//! | [`error`] | Error types |
//! | [`consts`] | Thresholds, timings, selectors, class names and messages |
//! | `dom` | RAII listener, observer and frame-loop handles (`hydrate`) |
//! | `behaviors` | One installer per feature (`hydrate`) |
//! | `controller` | Element snapshot and handle ownership (`hydrate`) |

pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod behaviors;
#[cfg(feature = "hydrate")]
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::DocumentReadyState;

    use crate::controller::PageController;
    use crate::dom;

    thread_local! {
        static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    }

    fn boot() {
        let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
            log::warn!("page behaviors: no window or document");
            return;
        };
        let controller = PageController::start(&window, &document);
        CONTROLLER.with(|slot| *slot.borrow_mut() = controller);
    }

    /// Module start: panic hook, logger, then the controller once the DOM is
    /// ready.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("logger already installed");
        }

        let Some(document) = dom::document() else {
            return;
        };
        if document.ready_state() != DocumentReadyState::Loading {
            boot();
            return;
        }
        let on_ready = Closure::once_into_js(boot);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("page behaviors: could not wait for DOMContentLoaded: {err:?}");
        }
    }

    /// Remove every listener, observer, timer and frame loop.
    #[wasm_bindgen]
    pub fn teardown() {
        let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
        if controller.is_some() {
            log::info!("page behaviors torn down");
        }
        drop(controller);
    }
}
