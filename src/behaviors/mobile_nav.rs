//! Slide-in header nav over the [`MobileNav`] machine.
//!
//! ARCHITECTURE
//! ============
//! [`DomNavSurface`] is the web-sys side of [`NavSurface`]. The machine lives
//! in an `Rc<RefCell<..>>` shared by the toggle, overlay and link handlers.
//! The keydown trap is built on demand by a factory holding a `Weak` to that
//! cell, so the trap never keeps the machine alive. The cell is created with
//! `Rc::new_cyclic` because a header that ships expanded installs its trap
//! while the machine is being built.
//!
//! Escape closes the nav from inside the trap's own callback. Removing the
//! trap therefore only detaches it and parks the listener in `retired_trap`;
//! the closure is dropped at the next install or when the surface goes away.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use crate::consts::{CLASS_EXPANDED, CLASS_NAV_ACTIVE, CLASS_OVERLAY_ACTIVE, FOCUSABLE_SELECTORS, NAV_CONTROLS_ID, SEL_NAV_MENU_LINKS};
use crate::dom::{Handles, Listener, cast, focus_quietly, has_class, ignore, query_all_in, scroll_y, set_class};
use crate::state::mobile_nav::{KeyOutcome, MobileNav, NavKey, NavOptions, NavSurface};

type TrapFactory = Box<dyn Fn() -> Result<Listener, JsValue>>;
type SharedNav = Rc<RefCell<MobileNav<DomNavSurface>>>;

/// Elements the mobile nav works on.
pub struct NavElements {
    pub header: HtmlElement,
    pub body: HtmlElement,
    pub overlay: Element,
    pub toggle: Option<HtmlElement>,
    pub main: Option<Element>,
}

pub struct DomNavSurface {
    window: Window,
    document: Document,
    elements: NavElements,
    trap_factory: TrapFactory,
    trap: Option<Listener>,
    retired_trap: Option<Listener>,
}

impl NavSurface for DomNavSurface {
    type Focusable = HtmlElement;

    fn is_container_expanded(&self) -> bool {
        has_class(&self.elements.header, CLASS_EXPANDED)
    }

    fn scroll_y(&self) -> f64 {
        scroll_y(&self.window)
    }

    fn scroll_to_y(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn set_container_expanded(&self, expanded: bool) {
        set_class(&self.elements.header, CLASS_EXPANDED, expanded);
        set_class(&self.elements.body, CLASS_NAV_ACTIVE, expanded);
    }

    fn set_main_marker(&self, active: bool) {
        if let Some(main) = &self.elements.main {
            set_class(main, CLASS_NAV_ACTIVE, active);
        }
    }

    fn set_overlay_active(&self, active: bool) {
        set_class(&self.elements.overlay, CLASS_OVERLAY_ACTIVE, active);
    }

    fn set_toggle_expanded(&self, expanded: bool) {
        let Some(toggle) = &self.elements.toggle else {
            return;
        };
        ignore("aria-expanded", toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" }));
        if !toggle.has_attribute("aria-controls") {
            ignore("aria-controls", toggle.set_attribute("aria-controls", NAV_CONTROLS_ID));
        }
    }

    /// Visible focusables, plus the active element even when it has no
    /// layout box.
    fn collect_focusables(&self) -> Vec<HtmlElement> {
        let active = self.document.active_element();
        query_all_in(&self.elements.header, &FOCUSABLE_SELECTORS.join(","))
            .into_iter()
            .filter_map(cast::<HtmlElement>)
            .filter(|el| {
                let as_element: &Element = el.as_ref();
                el.offset_parent().is_some() || active.as_ref() == Some(as_element)
            })
            .collect()
    }

    fn focus(&self, target: &HtmlElement) {
        focus_quietly(target);
    }

    fn focus_toggle(&self) {
        if let Some(toggle) = &self.elements.toggle {
            focus_quietly(toggle);
        }
    }

    fn install_key_trap(&mut self) {
        self.retired_trap = None;
        if self.trap.is_some() {
            return;
        }
        match (self.trap_factory)() {
            Ok(listener) => self.trap = Some(listener),
            Err(err) => log::warn!("mobile nav: key trap not installed: {err:?}"),
        }
    }

    fn remove_key_trap(&mut self) {
        if let Some(mut listener) = self.trap.take() {
            listener.detach();
            self.retired_trap = Some(listener);
        }
    }
}

fn key_trap_factory(weak: Weak<RefCell<MobileNav<DomNavSurface>>>, header: &HtmlElement, document: &Document) -> TrapFactory {
    let header = header.clone();
    let document = document.clone();
    Box::new(move || {
        let weak = weak.clone();
        let document = document.clone();
        Listener::new(header.as_ref(), "keydown", move |event: Event| {
            let Some(nav) = weak.upgrade() else {
                return;
            };
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = NavKey::from_key(&key_event.key(), key_event.shift_key());
            if key == NavKey::Other {
                return;
            }
            let active = document.active_element().and_then(cast::<HtmlElement>);
            let Ok(mut nav) = nav.try_borrow_mut() else {
                return;
            };
            if nav.on_key(key, active.as_ref()) == KeyOutcome::Wrapped {
                event.prevent_default();
            }
        })
    })
}

fn with_nav(nav: &SharedNav, action: impl FnOnce(&mut MobileNav<DomNavSurface>)) {
    match nav.try_borrow_mut() {
        Ok(mut nav) => action(&mut nav),
        Err(_) => log::debug!("mobile nav busy; event skipped"),
    }
}

/// Install the nav. The returned handles own the machine; dropping them
/// removes every listener including an active key trap.
///
/// # Errors
///
/// Returns the browser exception if a listener could not be added.
pub fn install(window: &Window, document: &Document, elements: NavElements, options: NavOptions) -> Result<Handles, JsValue> {
    ignore("header transform", elements.header.style().remove_property("transform"));

    let header = elements.header.clone();
    let overlay = elements.overlay.clone();
    let toggle = elements.toggle.clone();

    let nav: SharedNav = Rc::new_cyclic(|weak| {
        let surface = DomNavSurface {
            window: window.clone(),
            document: document.clone(),
            elements,
            trap_factory: key_trap_factory(weak.clone(), &header, document),
            trap: None,
            retired_trap: None,
        };
        RefCell::new(MobileNav::new(surface, options))
    });

    let mut handles = Handles::new();

    if let Some(toggle) = &toggle {
        let nav = Rc::clone(&nav);
        handles.push(Listener::new(toggle.as_ref(), "click", move |_| with_nav(&nav, MobileNav::toggle))?);
    }

    {
        let nav = Rc::clone(&nav);
        let on_overlay = move |_: Event| {
            with_nav(&nav, |nav| {
                nav.close();
            });
        };
        handles.push(Listener::new(overlay.as_ref(), "click", on_overlay)?);
    }

    for link in query_all_in(&header, SEL_NAV_MENU_LINKS) {
        let nav = Rc::clone(&nav);
        let on_link = move |_: Event| {
            with_nav(&nav, |nav| {
                nav.close();
            });
        };
        handles.push(Listener::new(link.as_ref(), "click", on_link)?);
    }

    handles.push(nav);
    Ok(handles)
}
