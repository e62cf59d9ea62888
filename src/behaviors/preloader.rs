//! Preloader overlay: fade out after `load`, then remove from the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::consts::{CLASS_HIDDEN, CLASS_LOADED, PRELOADER_REMOVE_FALLBACK_MS};
use crate::dom::{Handles, Listener, ListenerOptions, SharedHandles, on_window_load, set_class};
use crate::state::preloader::{PreloaderPlan, RemovalGuard, plan};

/// Install the preloader sequence.
///
/// # Errors
///
/// Returns the browser exception if the `load` listener could not be added.
pub fn install(
    window: &Window,
    document: &Document,
    body: &HtmlElement,
    preloader: Option<Element>,
    reduced_motion: bool,
) -> Result<Handles, JsValue> {
    let mut handles = Handles::new();
    let (delay_ms, preloader) = match (plan(preloader.is_some(), reduced_motion), preloader) {
        (PreloaderPlan::FinalizeOnLoad { delay_ms }, Some(preloader)) => (delay_ms, preloader),
        _ => {
            set_class(body, CLASS_LOADED, true);
            return Ok(handles);
        }
    };

    let pending = SharedHandles::new();
    handles.push(pending.owner());

    let on_load = {
        let body = body.clone();
        let pending = pending.clone();
        move || {
            if delay_ms == 0 {
                finalize(&body, &preloader, &pending);
                return;
            }
            let inner = pending.clone();
            pending.push(Timeout::new(delay_ms, move || finalize(&body, &preloader, &inner)));
        }
    };
    if let Some(listener) = on_window_load(window, document, on_load)? {
        handles.push(listener);
    }
    Ok(handles)
}

/// Mark the page loaded, fade the overlay, and remove it on `transitionend`
/// or after the fallback delay, whichever comes first.
fn finalize(body: &HtmlElement, preloader: &Element, pending: &SharedHandles) {
    set_class(body, CLASS_LOADED, true);
    set_class(preloader, CLASS_HIDDEN, true);

    let guard = Rc::new(RefCell::new(RemovalGuard::default()));
    let remove = {
        let preloader = preloader.clone();
        move || {
            if guard.borrow_mut().claim() {
                preloader.remove();
                log::debug!("preloader removed");
            }
        }
    };

    let options = ListenerOptions { passive: false, once: true };
    let on_transition = {
        let remove = remove.clone();
        move |_: Event| remove()
    };
    match Listener::with_options(preloader.as_ref(), "transitionend", options, on_transition) {
        Ok(listener) => pending.push(listener),
        Err(err) => log::debug!("preloader: transitionend listener failed: {err:?}"),
    }
    pending.push(Timeout::new(PRELOADER_REMOVE_FALLBACK_MS, remove));
}
