//! Older markup variant: a toggle button and a panel hidden by attribute.

use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

use crate::dom::{Handles, Listener, ignore, query_all_in};
use crate::state::legacy_menu::{LegacyMenu, MenuView};

fn apply(toggle: &Element, menu: &Element, view: MenuView) {
    ignore("aria-expanded", toggle.set_attribute("aria-expanded", view.aria_expanded()));
    if view.hidden {
        ignore("hidden", menu.set_attribute("hidden", ""));
    } else {
        ignore("hidden", menu.remove_attribute("hidden"));
    }
}

/// Toggle on button click; collapse when any link inside the panel is clicked.
///
/// The expanded state is re-read from `aria-expanded` on every click so the
/// markup stays the source of truth.
///
/// # Errors
///
/// Returns the browser exception if a click listener could not be added.
pub fn install(toggle: &Element, menu: &Element) -> Result<Handles, JsValue> {
    let mut handles = Handles::new();

    let on_toggle = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |_: Event| {
            let mut state = LegacyMenu::from_aria(toggle.get_attribute("aria-expanded").as_deref());
            apply(&toggle, &menu, state.toggle());
        }
    };
    handles.push(Listener::new(toggle.as_ref(), "click", on_toggle)?);

    for link in query_all_in(menu, "a") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let on_link = move |_: Event| {
            let mut state = LegacyMenu::from_aria(toggle.get_attribute("aria-expanded").as_deref());
            apply(&toggle, &menu, state.reset());
        };
        handles.push(Listener::new(link.as_ref(), "click", on_link)?);
    }

    Ok(handles)
}
