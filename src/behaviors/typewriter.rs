//! Typewriter rotator over the page's `Typed` library.
//!
//! The rotator itself is third-party JavaScript loaded by the page; this
//! module only prepares its phrase list and options. Without the library the
//! first phrase is shown as static text.

use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::consts::{TYPED_ITEMS_ATTR, TYPED_TARGET_SELECTOR};
use crate::util::phrases::{TypedOptions, phrases_from_attr};

/// Start the rotator on `target`. Does nothing when the phrase list is empty.
pub fn install(window: &Window, target: &Element) {
    let raw = target.get_attribute(TYPED_ITEMS_ATTR).unwrap_or_default();
    let phrases = phrases_from_attr(&raw);
    let Some(first) = phrases.first().cloned() else {
        log::debug!("typewriter: no phrases");
        return;
    };

    target.set_text_content(Some(""));
    match start_rotator(window, phrases) {
        Ok(true) => {}
        Ok(false) => target.set_text_content(Some(&first)),
        Err(err) => {
            log::warn!("typewriter: rotator failed to start: {err:?}");
            target.set_text_content(Some(&first));
        }
    }
}

/// `new Typed(".typed", options)`; `Ok(false)` when the library is absent.
fn start_rotator(window: &Window, phrases: Vec<String>) -> Result<bool, JsValue> {
    let ctor = Reflect::get(window.as_ref(), &JsValue::from_str("Typed"))?;
    let Some(ctor) = ctor.dyn_ref::<Function>() else {
        return Ok(false);
    };
    let json = serde_json::to_string(&TypedOptions::new(phrases)).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = JSON::parse(&json)?;
    let args = Array::of2(&JsValue::from_str(TYPED_TARGET_SELECTOR), &options);
    Reflect::construct(ctor, &args)?;
    Ok(true)
}
