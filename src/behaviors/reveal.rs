//! Scroll-reveal over an `IntersectionObserver`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements carrying `data-animate` start hidden in CSS and gain
//! `is-visible` once. Under reduced motion everything is revealed up front.
//! The optional force pass covers layouts where the observer never fires for
//! content that is already on screen (tall first viewport, zoomed pages).

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::consts::{CLASS_VISIBLE, FORCE_REVEAL_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::{
    Handles, Listener, ListenerOptions, ObserverHandle, SharedHandles, has_class, on_window_load, set_class,
    viewport_size,
};
use crate::state::reveal::{self, RevealPlan, RevealTarget};

struct DomRevealTarget(Element);

impl RevealTarget for DomRevealTarget {
    fn is_revealed(&self) -> bool {
        has_class(&self.0, CLASS_VISIBLE)
    }

    fn mark_revealed(&self) {
        set_class(&self.0, CLASS_VISIBLE, true);
    }

    fn vertical_span(&self) -> (f64, f64) {
        let rect = self.0.get_bounding_client_rect();
        (rect.top(), rect.bottom())
    }
}

/// Install reveal for `elements`.
///
/// # Errors
///
/// Returns the browser exception if the observer or a fallback listener
/// could not be created.
pub fn install(
    window: &Window,
    document: &Document,
    elements: &[Element],
    reduced_motion: bool,
    force_fallback: bool,
) -> Result<Handles, JsValue> {
    let targets: Vec<DomRevealTarget> = elements.iter().cloned().map(DomRevealTarget).collect();
    let mut handles = Handles::new();

    match reveal::plan(targets.len(), reduced_motion, force_fallback) {
        RevealPlan::RevealAll => {
            let count = reveal::reveal_all(&targets);
            log::debug!("reveal: {count} elements shown without animation");
        }
        RevealPlan::Observe { force_fallback } => {
            handles.push(observe(&targets)?);
            if force_fallback {
                handles.append(install_force_pass(window, document, targets)?);
            }
        }
    }
    Ok(handles)
}

fn observe(targets: &[DomRevealTarget]) -> Result<ObserverHandle, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = DomRevealTarget(entry.target());
            if reveal::on_intersection(&target, entry.is_intersecting()) {
                observer.unobserve(&target.0);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(&target.0);
    }
    Ok(ObserverHandle::new(observer, callback))
}

/// Force pass: once shortly after `load`, and once on the first scroll.
fn install_force_pass(window: &Window, document: &Document, targets: Vec<DomRevealTarget>) -> Result<Handles, JsValue> {
    let targets = Rc::new(targets);
    let run = {
        let window = window.clone();
        let targets = Rc::clone(&targets);
        move || {
            let (_, height) = viewport_size(&window);
            let count = reveal::force_reveal_in_view(&targets, height);
            if count > 0 {
                log::debug!("reveal: force pass showed {count} elements");
            }
        }
    };

    let mut handles = Handles::new();
    let timers = SharedHandles::new();
    handles.push(timers.owner());

    let on_load = {
        let run = run.clone();
        let timers = timers.clone();
        move || timers.push(Timeout::new(FORCE_REVEAL_DELAY_MS, run))
    };
    if let Some(listener) = on_window_load(window, document, on_load)? {
        handles.push(listener);
    }

    let options = ListenerOptions { passive: true, once: true };
    handles.push(Listener::with_options(window.as_ref(), "scroll", options, move |_| run())?);
    Ok(handles)
}
