//! Pointer parallax on `[data-depth]` layers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, PointerEvent, Window};

use crate::dom::{FrameLoop, Handles, Listener, ListenerOptions, ignore, viewport_size};
use crate::state::parallax::{ParallaxState, parse_depth};

/// Track the pointer and ease every layer toward it, one step per frame.
/// Skipped entirely under reduced motion or with no layers.
///
/// # Errors
///
/// Returns the browser exception if the listener or the frame loop could not
/// be started.
pub fn install(window: &Window, layers: &[HtmlElement], reduced_motion: bool) -> Result<Handles, JsValue> {
    let mut handles = Handles::new();
    if reduced_motion || layers.is_empty() {
        return Ok(handles);
    }

    let state = Rc::new(RefCell::new(ParallaxState::default()));
    let layers: Vec<(HtmlElement, f64)> = layers
        .iter()
        .map(|el| (el.clone(), parse_depth(el.get_attribute("data-depth").as_deref())))
        .collect();

    let on_pointer = {
        let state = Rc::clone(&state);
        let window = window.clone();
        move |event: Event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            state.borrow_mut().set_target_from_pointer(
                f64::from(pointer.client_x()),
                f64::from(pointer.client_y()),
                width,
                height,
            );
        }
    };
    let options = ListenerOptions { passive: true, once: false };
    handles.push(Listener::with_options(window.as_ref(), "pointermove", options, on_pointer)?);

    let frames = FrameLoop::start(window, move || {
        let mut state = state.borrow_mut();
        state.step();
        for (layer, depth) in &layers {
            ignore("parallax transform", layer.style().set_property("transform", &state.transform(*depth)));
        }
    })?;
    handles.push(frames);
    Ok(handles)
}
