//! Sticky nav class driven by window scroll.

use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

use crate::consts::CLASS_STICKY;
use crate::dom::{Handles, Listener, ListenerOptions, scroll_y, set_class};
use crate::state::sticky_nav::is_sticky;

/// Evaluate once now, then on every (passive) scroll.
///
/// # Errors
///
/// Returns the browser exception if the scroll listener could not be added.
pub fn install(window: &Window, nav: &Element) -> Result<Handles, JsValue> {
    let update = {
        let window = window.clone();
        let nav = nav.clone();
        move || set_class(&nav, CLASS_STICKY, is_sticky(scroll_y(&window)))
    };
    update();

    let options = ListenerOptions { passive: true, once: false };
    let listener = Listener::with_options(window.as_ref(), "scroll", options, move |_| update())?;

    let mut handles = Handles::new();
    handles.push(listener);
    Ok(handles)
}
