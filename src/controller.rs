//! Page controller: one element snapshot, one handle bag per feature.
//!
//! ARCHITECTURE
//! ============
//! [`PageElements::snapshot`] looks every element up once when the document
//! becomes interactive. [`PageController::start`] hands each installer only
//! the elements it needs. Features whose elements are missing are skipped;
//! an installer that fails is logged and skipped. Neither stops the rest of
//! the page from initializing.
//!
//! Dropping the controller drops every handle bag, which removes listeners,
//! disconnects the observer, cancels timers and stops the parallax loop.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

use crate::behaviors::{
    contact_form, legacy_menu, marquee, mobile_nav, parallax, preloader, reveal, sticky_nav, typewriter, year,
};
use crate::config::PageConfig;
use crate::consts::{
    CLASS_OVERLAY, ID_CONTACT_FORM, ID_HEADER, ID_MOBILE_MENU, ID_PAGE_CONFIG, ID_PRELOADER, ID_YEAR,
    REDUCED_MOTION_QUERY, SEL_ANIMATE, SEL_DEPTH, SEL_MAIN, SEL_MARQUEE_TRACK, SEL_MOBILE_NAV_TOGGLE, SEL_NAV,
    SEL_NAV_TOGGLE, SEL_OVERLAY, TYPED_TARGET_SELECTOR,
};
use crate::dom::{Handles, cast, found, ignore, query, query_all};
use crate::state::mobile_nav::NavOptions;

fn as_html(element: Option<Element>) -> Option<HtmlElement> {
    element.and_then(cast::<HtmlElement>)
}

/// Every element a behavior may need, looked up once.
pub struct PageElements {
    pub body: HtmlElement,
    pub animated: Vec<Element>,
    pub nav: Option<Element>,
    pub legacy_toggle: Option<Element>,
    pub legacy_menu: Option<Element>,
    pub header: Option<HtmlElement>,
    pub mobile_toggle: Option<HtmlElement>,
    pub main: Option<Element>,
    pub overlay: Option<Element>,
    pub depth_layers: Vec<HtmlElement>,
    pub marquee_track: Option<HtmlElement>,
    pub typed_target: Option<Element>,
    pub preloader: Option<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub year: Option<Element>,
}

impl PageElements {
    /// Look everything up. `None` only when the document has no body.
    pub fn snapshot(document: &Document) -> Option<Self> {
        let body = document.body()?;
        let header = as_html(document.get_element_by_id(ID_HEADER));
        let overlay = match header {
            Some(_) => query(document, SEL_OVERLAY).or_else(|| create_overlay(document, &body)),
            None => query(document, SEL_OVERLAY),
        };

        Some(Self {
            animated: query_all(document, SEL_ANIMATE),
            nav: query(document, SEL_NAV),
            legacy_toggle: query(document, SEL_NAV_TOGGLE),
            legacy_menu: document.get_element_by_id(ID_MOBILE_MENU),
            mobile_toggle: as_html(query(document, SEL_MOBILE_NAV_TOGGLE)),
            main: query(document, SEL_MAIN),
            overlay,
            depth_layers: query_all(document, SEL_DEPTH)
                .into_iter()
                .filter_map(cast::<HtmlElement>)
                .collect(),
            marquee_track: as_html(query(document, SEL_MARQUEE_TRACK)),
            typed_target: query(document, TYPED_TARGET_SELECTOR),
            preloader: document.get_element_by_id(ID_PRELOADER),
            contact_form: document
                .get_element_by_id(ID_CONTACT_FORM)
                .and_then(cast::<HtmlFormElement>),
            year: document.get_element_by_id(ID_YEAR),
            header,
            body,
        })
    }
}

/// Append an empty overlay to `body` for pages that do not ship one.
fn create_overlay(document: &Document, body: &HtmlElement) -> Option<Element> {
    let overlay = match document.create_element("div") {
        Ok(el) => el,
        Err(err) => {
            log::debug!("overlay not created: {err:?}");
            return None;
        }
    };
    overlay.set_class_name(CLASS_OVERLAY);
    ignore("aria-hidden", overlay.set_attribute("aria-hidden", "true"));
    match body.append_child(&overlay) {
        Ok(_) => Some(overlay),
        Err(err) => {
            log::debug!("overlay not attached: {err:?}");
            None
        }
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    found("matchMedia", window.match_media(REDUCED_MOTION_QUERY)).is_some_and(|query| query.matches())
}

fn read_config(document: &Document) -> PageConfig {
    document
        .get_element_by_id(ID_PAGE_CONFIG)
        .and_then(|el| el.text_content())
        .map_or_else(PageConfig::default, |raw| PageConfig::from_json_or_default(&raw))
}

/// Owns every installed feature for the page lifetime.
pub struct PageController {
    config: PageConfig,
    reduced_motion: bool,
    installed: Vec<(&'static str, Handles)>,
}

impl PageController {
    /// Snapshot the page and install every feature whose elements exist.
    pub fn start(window: &Window, document: &Document) -> Option<Self> {
        let Some(elements) = PageElements::snapshot(document) else {
            log::warn!("page controller: document has no body");
            return None;
        };
        let mut controller = Self {
            config: read_config(document),
            reduced_motion: prefers_reduced_motion(window),
            installed: Vec::new(),
        };
        controller.install_all(window, document, elements);

        let names: Vec<&str> = controller.installed().collect();
        log::info!(
            "page behaviors ready (reduced motion: {}): {}",
            controller.reduced_motion,
            names.join(", ")
        );
        Some(controller)
    }

    /// Names of the features that were installed, in install order.
    pub fn installed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.installed.iter().map(|(name, _)| *name)
    }

    fn record(&mut self, name: &'static str, result: Result<Handles, JsValue>) {
        match result {
            Ok(handles) => {
                if handles.is_empty() {
                    log::debug!("{name}: installed, nothing to watch");
                } else {
                    log::debug!("{name}: installed with {} handles", handles.len());
                }
                self.installed.push((name, handles));
            }
            Err(err) => log::error!("{name}: install failed: {err:?}"),
        }
    }

    fn skip(name: &str, missing: &str) {
        log::debug!("{name}: skipped, no {missing}");
    }

    fn install_all(&mut self, window: &Window, document: &Document, elements: PageElements) {
        let reduced = self.reduced_motion;

        if elements.animated.is_empty() {
            Self::skip("reveal", "[data-animate] elements");
        } else {
            let result = reveal::install(
                window,
                document,
                &elements.animated,
                reduced,
                self.config.force_reveal_fallback,
            );
            self.record("reveal", result);
        }

        match &elements.nav {
            Some(nav) => self.record("sticky-nav", sticky_nav::install(window, nav)),
            None => Self::skip("sticky-nav", "nav"),
        }

        match (&elements.legacy_toggle, &elements.legacy_menu) {
            (Some(toggle), Some(menu)) => self.record("legacy-menu", legacy_menu::install(toggle, menu)),
            _ => Self::skip("legacy-menu", "toggle/panel pair"),
        }

        match (elements.header, elements.overlay) {
            (Some(header), Some(overlay)) => {
                let nav_elements = mobile_nav::NavElements {
                    header,
                    body: elements.body.clone(),
                    overlay,
                    toggle: elements.mobile_toggle,
                    main: elements.main,
                };
                let options = NavOptions {
                    restore_scroll: self.config.restore_scroll_on_open,
                    toggle_main: self.config.toggle_main_class,
                };
                self.record("mobile-nav", mobile_nav::install(window, document, nav_elements, options));
            }
            _ => Self::skip("mobile-nav", "header"),
        }

        if elements.depth_layers.is_empty() || reduced {
            Self::skip("parallax", "depth layers or motion");
        } else {
            self.record("parallax", parallax::install(window, &elements.depth_layers, reduced));
        }

        if let Some(track) = &elements.marquee_track {
            marquee::install(track, reduced);
            self.installed.push(("marquee", Handles::new()));
        }

        match &elements.typed_target {
            Some(target) => {
                typewriter::install(window, target);
                self.installed.push(("typewriter", Handles::new()));
            }
            None => Self::skip("typewriter", "typed target"),
        }

        let result = preloader::install(window, document, &elements.body, elements.preloader, reduced);
        self.record("preloader", result);

        match &elements.contact_form {
            Some(form) => self.record("contact-form", contact_form::install(window, document, form, &self.config)),
            None => Self::skip("contact-form", "contact form"),
        }

        if let Some(target) = &elements.year {
            year::install(target);
            self.installed.push(("year", Handles::new()));
        }
    }
}
