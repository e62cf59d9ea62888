//! Contact form submit handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `cf-*` fields on submit and hands them to
//! [`crate::contact::submit`] on a local task. [`DomContactUi`] maps the
//! router's side effects onto the page (alerts, the submit button,
//! navigation); [`HttpTransport`] performs the POST.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use crate::config::PageConfig;
use crate::consts::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, FIELD_PHONE, FIELD_ROUTE, FIELD_SUBJECT, SEL_SUBMIT};
use crate::contact::{ContactSubmission, ContactUi, RawContactFields, submit};
use crate::dom::{Handles, Listener, cast, ignore, query_in};
use crate::net::api::HttpTransport;

struct DomContactUi {
    window: Window,
    form: HtmlFormElement,
    submit_button: Option<HtmlElement>,
}

impl ContactUi for DomContactUi {
    fn alert(&self, message: &str) {
        ignore("alert", self.window.alert_with_message(message));
    }

    fn submit_label(&self) -> Option<String> {
        self.submit_button.as_ref().and_then(|button| button.text_content())
    }

    fn set_submit_state(&self, disabled: bool, label: &str) {
        let Some(button) = &self.submit_button else {
            return;
        };
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            ignore("disabled", button.set_attribute("disabled", ""));
        } else {
            ignore("disabled", button.remove_attribute("disabled"));
        }
        button.set_text_content(Some(label));
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn navigate(&self, url: &str) {
        ignore("location.href", self.window.location().set_href(url));
    }

    fn open_external(&self, url: &str) {
        ignore("window.open", self.window.open_with_url_and_target(url, "_blank"));
    }
}

/// Value of a text input, textarea or select by id; `None` when absent.
fn field_value(document: &Document, id: &str) -> Option<String> {
    let element = document.get_element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

fn read_fields(document: &Document) -> RawContactFields {
    RawContactFields {
        name: field_value(document, FIELD_NAME),
        email: field_value(document, FIELD_EMAIL),
        phone: field_value(document, FIELD_PHONE),
        subject: field_value(document, FIELD_SUBJECT),
        message: field_value(document, FIELD_MESSAGE),
        route: field_value(document, FIELD_ROUTE),
    }
}

/// Intercept `submit` on `form` and route each submission.
///
/// # Errors
///
/// Returns the browser exception if the submit listener could not be added.
pub fn install(window: &Window, document: &Document, form: &HtmlFormElement, config: &PageConfig) -> Result<Handles, JsValue> {
    let submit_button = query_in(form, SEL_SUBMIT).and_then(cast::<HtmlElement>);
    let ui = Rc::new(DomContactUi { window: window.clone(), form: form.clone(), submit_button });
    let transport = Rc::new(HttpTransport::new(config));
    let config = Rc::new(config.clone());
    let document = document.clone();

    let on_submit = move |event: Event| {
        event.prevent_default();
        let submission = ContactSubmission::from_raw(&read_fields(&document));
        let ui = Rc::clone(&ui);
        let transport = Rc::clone(&transport);
        let config = Rc::clone(&config);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(&submission, ui.as_ref(), transport.as_ref(), &config).await;
            log::debug!("contact form outcome: {outcome:?}");
        });
    };

    let mut handles = Handles::new();
    handles.push(Listener::new(form.as_ref(), "submit", on_submit)?);
    Ok(handles)
}
