//! Thin web-sys helpers with drop-based cleanup.
//!
//! Every listener, observer, timer and frame loop a behavior creates is held
//! by a handle whose `Drop` detaches it. Behaviors return those handles in a
//! [`Handles`] bag, and the controller keeps the bags alive for the page
//! lifetime, so teardown is a plain drop.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, DocumentReadyState, Element, Event, EventTarget, FocusOptions, HtmlElement, IntersectionObserver,
    NodeList, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Discard a browser result that is allowed to fail, leaving a debug trace.
pub fn ignore<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::debug!("ignored DOM failure in {what}: {err:?}");
    }
}

/// Checked downcast; `None` when `value` is not a `T`.
pub fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Unwrap a lookup whose failure means "absent", leaving a debug trace.
pub fn found<T>(what: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::debug!("lookup failed in {what}: {err:?}");
            None
        }
    }
}

/// Collect the element nodes of a `NodeList`.
pub fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(cast::<Element>).collect()
}

/// `document.querySelectorAll`, with failures treated as no matches.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements_of(&list),
        Err(err) => {
            log::debug!("invalid selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

/// `element.querySelectorAll`, with failures treated as no matches.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements_of(&list),
        Err(err) => {
            log::debug!("invalid selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    found(selector, document.query_selector(selector))
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    found(selector, root.query_selector(selector))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    ignore("classList.toggle", element.class_list().toggle_with_force(class, on));
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Focus without scrolling the page.
pub fn focus_quietly(element: &HtmlElement) {
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    ignore("focus", element.focus_with_options(&options));
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    (extent("innerWidth", window.inner_width()), extent("innerHeight", window.inner_height()))
}

fn extent(what: &str, result: Result<JsValue, JsValue>) -> f64 {
    match result {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("{what} unavailable: {err:?}");
            0.0
        }
    }
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

// ── Listeners ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct ListenerOptions {
    pub passive: bool,
    pub once: bool,
}

/// An attached event listener; dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl Listener {
    /// Attach `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns the browser exception if the listener could not be added.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_options(target, event, ListenerOptions::default(), handler)
    }

    /// Attach with `passive`/`once` flags.
    ///
    /// # Errors
    ///
    /// Returns the browser exception if the listener could not be added.
    pub fn with_options<F>(
        target: &EventTarget,
        event: &'static str,
        options: ListenerOptions,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let add_options = AddEventListenerOptions::new();
        add_options.set_passive(options.passive);
        add_options.set_once(options.once);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &add_options,
        )?;
        Ok(Self { target: target.clone(), event, callback, attached: true })
    }

    /// Remove the listener but keep the closure alive. Safe to call from
    /// inside the listener itself.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        ignore(
            "removeEventListener",
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
        );
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Run `handler` once the window `load` event has fired. Runs it right away
/// when the document is already complete, which is common because the wasm
/// module itself loads asynchronously.
///
/// # Errors
///
/// Returns the browser exception if the listener could not be added.
pub fn on_window_load<F>(window: &Window, document: &Document, handler: F) -> Result<Option<Listener>, JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == DocumentReadyState::Complete {
        handler();
        return Ok(None);
    }
    let mut handler = Some(handler);
    let options = ListenerOptions { passive: false, once: true };
    Listener::with_options(window.as_ref(), "load", options, move |_| {
        if let Some(handler) = handler.take() {
            handler();
        }
    })
    .map(Some)
}

// ── Observers and frame loops ───────────────────────────────────

/// An intersection observer together with its callback; dropping disconnects.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self { observer, _callback: callback }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` loop. Runs until dropped.
pub struct FrameLoop {
    window: Window,
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Start calling `tick` once per display frame.
    ///
    /// # Errors
    ///
    /// Returns the browser exception if the first frame could not be requested.
    pub fn start<F>(window: &Window, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let slot_for_cb = Rc::clone(&slot);
        let pending_for_cb = Rc::clone(&pending);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            pending_for_cb.set(None);
            tick();
            let Ok(slot) = slot_for_cb.try_borrow() else {
                return;
            };
            if let Some(next) = slot.as_ref() {
                match window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => pending_for_cb.set(Some(id)),
                    Err(err) => log::warn!("animation frame loop stopped: {err:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(cb);
        Ok(Self { window: window.clone(), slot, pending })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            ignore("cancelAnimationFrame", self.window.cancel_animation_frame(id));
        }
        // Breaks the closure -> slot -> closure cycle.
        self.slot.borrow_mut().take();
    }
}

// ── Handle bag ──────────────────────────────────────────────────

/// Owned cleanup handles for one behavior. Dropping the bag tears it down.
#[derive(Default)]
pub struct Handles(Vec<Box<dyn Any>>);

impl Handles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: 'static>(&mut self, handle: T) {
        self.0.push(Box::new(handle));
    }

    pub fn append(&mut self, mut other: Handles) {
        self.0.append(&mut other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A handle bag that callbacks can add to after installation (timers armed
/// on `load`, for instance). The owner half clears it on drop, which breaks
/// the cycle between the bag and the callbacks it holds.
#[derive(Clone, Default)]
pub struct SharedHandles(Rc<RefCell<Handles>>);

impl SharedHandles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: 'static>(&self, handle: T) {
        match self.0.try_borrow_mut() {
            Ok(mut bag) => bag.push(handle),
            Err(_) => log::warn!("handle bag busy; dropping a late handle"),
        }
    }

    /// Owner half: dropping it tears down everything pushed so far.
    pub fn owner(&self) -> SharedHandlesOwner {
        SharedHandlesOwner(self.clone())
    }
}

pub struct SharedHandlesOwner(SharedHandles);

impl Drop for SharedHandlesOwner {
    fn drop(&mut self) {
        let drained = match self.0 .0.try_borrow_mut() {
            Ok(mut bag) => std::mem::take(&mut *bag),
            Err(_) => return,
        };
        drop(drained);
    }
}
