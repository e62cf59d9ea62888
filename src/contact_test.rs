use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

// =============================================================
// Fakes
// =============================================================

struct FakeUi {
    alerts: RefCell<Vec<String>>,
    label: Option<String>,
    submit_states: RefCell<Vec<(bool, String)>>,
    resets: Cell<u32>,
    navigated: RefCell<Vec<String>>,
    opened: RefCell<Vec<String>>,
}

impl FakeUi {
    fn with_label(label: Option<&str>) -> Self {
        Self {
            alerts: RefCell::new(Vec::new()),
            label: label.map(str::to_owned),
            submit_states: RefCell::new(Vec::new()),
            resets: Cell::new(0),
            navigated: RefCell::new(Vec::new()),
            opened: RefCell::new(Vec::new()),
        }
    }

    fn last_submit_state(&self) -> Option<(bool, String)> {
        self.submit_states.borrow().last().cloned()
    }
}

impl ContactUi for FakeUi {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn submit_label(&self) -> Option<String> {
        self.label.clone()
    }

    fn set_submit_state(&self, disabled: bool, label: &str) {
        self.submit_states.borrow_mut().push((disabled, label.to_owned()));
    }

    fn reset_form(&self) {
        self.resets.set(self.resets.get() + 1);
    }

    fn navigate(&self, url: &str) {
        self.navigated.borrow_mut().push(url.to_owned());
    }

    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_owned());
    }
}

struct FakeTransport {
    reply: Result<ContactResponse, ContactError>,
    requests: RefCell<Vec<ContactRequest>>,
}

impl FakeTransport {
    fn replying(reply: Result<ContactResponse, ContactError>) -> Self {
        Self { reply, requests: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ContactTransport for FakeTransport {
    async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, ContactError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

fn raw(name: &str, email: &str, subject: &str, message: &str, route: Option<&str>) -> RawContactFields {
    RawContactFields {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        phone: None,
        subject: Some(subject.to_owned()),
        message: Some(message.to_owned()),
        route: route.map(str::to_owned),
    }
}

fn ok_reply() -> Result<ContactResponse, ContactError> {
    Ok(ContactResponse { success: true, error: None, message: Some("Message sent successfully!".to_owned()) })
}

fn run(fields: &RawContactFields, ui: &FakeUi, transport: &FakeTransport) -> SubmitOutcome {
    let submission = ContactSubmission::from_raw(fields);
    block_on(submit(&submission, ui, transport, &PageConfig::default()))
}

// =============================================================
// Parsing and validation
// =============================================================

#[test]
fn route_parse_defaults_and_fallbacks() {
    assert_eq!(ContactRoute::parse(None), ContactRoute::Telegram);
    assert_eq!(ContactRoute::parse(Some("")), ContactRoute::Telegram);
    assert_eq!(ContactRoute::parse(Some("telegram")), ContactRoute::Telegram);
    assert_eq!(ContactRoute::parse(Some("email")), ContactRoute::Email);
    assert_eq!(ContactRoute::parse(Some("whatsapp")), ContactRoute::WhatsApp);
    assert_eq!(ContactRoute::parse(Some("sms")), ContactRoute::WhatsApp);
}

#[test]
fn from_raw_trims_route_before_parsing() {
    let email = ContactSubmission::from_raw(&raw("Ada", "a@b.c", "", "Hello", Some(" email ")));
    assert_eq!(email.route, ContactRoute::Email);
    let blank = ContactSubmission::from_raw(&raw("Ada", "", "", "Hello", Some("  ")));
    assert_eq!(blank.route, ContactRoute::Telegram);
}

#[test]
fn from_raw_trims_every_field() {
    let submission = ContactSubmission::from_raw(&raw("  Ada ", " a@b.c ", " Hi ", "\nHello\t", Some("email")));
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.email, "a@b.c");
    assert_eq!(submission.subject, "Hi");
    assert_eq!(submission.message, "Hello");
    assert_eq!(submission.route, ContactRoute::Email);
}

#[test]
fn validate_requires_name_and_message() {
    let missing_name = ContactSubmission::from_raw(&raw("   ", "", "", "Hello", None));
    assert_eq!(missing_name.validate(), Err(ContactError::MissingNameOrMessage));
    let missing_message = ContactSubmission::from_raw(&raw("Ada", "", "", "", None));
    assert_eq!(missing_message.validate(), Err(ContactError::MissingNameOrMessage));
    let absent = ContactSubmission::from_raw(&RawContactFields::default());
    assert_eq!(absent.validate(), Err(ContactError::MissingNameOrMessage));
}

#[test]
fn validate_requires_email_only_for_email_route() {
    let email_route = ContactSubmission::from_raw(&raw("Ada", "", "", "Hello", Some("email")));
    assert_eq!(email_route.validate(), Err(ContactError::MissingEmail));
    let chat_route = ContactSubmission::from_raw(&raw("Ada", "", "", "Hello", Some("whatsapp")));
    assert_eq!(chat_route.validate(), Ok(()));
}

// =============================================================
// Message composition
// =============================================================

#[test]
fn mail_body_includes_subject_line_only_when_given() {
    let with_subject = ContactSubmission::from_raw(&raw("Ada", "a@b.c", "Hi", "Hello", None));
    assert_eq!(with_subject.mail_body(), "Name: Ada\nEmail: a@b.c\nSubject: Hi\n\nHello");
    assert_eq!(with_subject.mail_subject(), "Hi");

    let without = ContactSubmission::from_raw(&raw("Ada", "a@b.c", "", "Hello", None));
    assert_eq!(without.mail_body(), "Name: Ada\nEmail: a@b.c\n\nHello");
    assert_eq!(without.mail_subject(), "New message from portfolio");
}

#[test]
fn chat_text_skips_missing_optional_lines() {
    let full = ContactSubmission::from_raw(&raw("Ada", "a@b.c", "Hi", "Hello", None));
    assert_eq!(full.chat_text(), "New message from portfolio\nName: Ada\nEmail: a@b.c\nSubject: Hi\n\nHello");

    let minimal = ContactSubmission::from_raw(&raw("Ada", "", "", "Hello", None));
    assert_eq!(minimal.chat_text(), "New message from portfolio\nName: Ada\n\nHello");
}

// =============================================================
// Routing
// =============================================================

#[test]
fn empty_name_aborts_without_network_call() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(ok_reply());
    let outcome = run(&raw("", "a@b.c", "", "Hello", Some("telegram")), &ui, &transport);

    assert_eq!(outcome, SubmitOutcome::Invalid(ContactError::MissingNameOrMessage));
    assert_eq!(transport.calls(), 0);
    assert_eq!(*ui.alerts.borrow(), vec!["Please provide your name and a message.".to_owned()]);
    assert!(ui.submit_states.borrow().is_empty());
}

#[test]
fn email_route_without_email_aborts_without_navigation() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(ok_reply());
    let outcome = run(&raw("Ada", "", "", "Hello", Some("email")), &ui, &transport);

    assert_eq!(outcome, SubmitOutcome::Invalid(ContactError::MissingEmail));
    assert!(ui.navigated.borrow().is_empty());
    assert_eq!(*ui.alerts.borrow(), vec!["Please enter your email so I can reply.".to_owned()]);
}

#[test]
fn remote_success_clears_form_and_restores_button() {
    let ui = FakeUi::with_label(Some("Send message"));
    let transport = FakeTransport::replying(ok_reply());
    let outcome = run(&raw("Ada", "a@b.c", "Hi", "Hello", Some("telegram")), &ui, &transport);

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(ui.resets.get(), 1);
    assert_eq!(transport.calls(), 1);
    assert_eq!(transport.requests.borrow()[0].message, "Hello");
    assert_eq!(
        *ui.submit_states.borrow(),
        vec![(true, "Sending...".to_owned()), (false, "Send message".to_owned())]
    );
    assert_eq!(ui.alerts.borrow()[0], MSG_SENT);
}

#[test]
fn remote_failure_surfaces_server_text() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(Ok(ContactResponse {
        success: false,
        error: Some("X".to_owned()),
        message: None,
    }));
    let outcome = run(&raw("Ada", "", "", "Hello", None), &ui, &transport);

    assert_eq!(outcome, SubmitOutcome::ServerRejected("X".to_owned()));
    assert!(ui.alerts.borrow()[0].contains('X'));
    assert_eq!(ui.resets.get(), 0);
    assert_eq!(ui.last_submit_state(), Some((false, "Send".to_owned())));
}

#[test]
fn remote_failure_without_text_uses_generic_message() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(Ok(ContactResponse::default()));
    run(&raw("Ada", "", "", "Hello", None), &ui, &transport);

    assert_eq!(ui.alerts.borrow()[0], "❌ Failed to send. Please try again.");
}

#[test]
fn network_failure_surfaces_generic_error_and_restores_button() {
    let ui = FakeUi::with_label(Some("Go"));
    let transport = FakeTransport::replying(Err(ContactError::Network("offline".to_owned())));
    let outcome = run(&raw("Ada", "", "", "Hello", None), &ui, &transport);

    assert!(matches!(outcome, SubmitOutcome::NetworkFailed(ContactError::Network(_))));
    assert_eq!(*ui.alerts.borrow(), vec![MSG_NETWORK_ERROR.to_owned()]);
    assert_eq!(ui.last_submit_state(), Some((false, "Go".to_owned())));
}

#[test]
fn missing_or_blank_label_restores_default() {
    for label in [None, Some("")] {
        let ui = FakeUi::with_label(label);
        let transport = FakeTransport::replying(Err(ContactError::Decode("bad json".to_owned())));
        run(&raw("Ada", "", "", "Hello", None), &ui, &transport);
        assert_eq!(ui.last_submit_state(), Some((false, "Send".to_owned())));
    }
}

#[test]
fn email_route_navigates_to_mail_link() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(ok_reply());
    let outcome = run(&raw("Ada", "a@b.c", "", "Hello", Some("email")), &ui, &transport);

    let expected = "mailto:sasuisaac332@gmail.com?subject=New%20message%20from%20portfolio\
                    &body=Name%3A%20Ada%0AEmail%3A%20a%40b.c%0A%0AHello";
    assert_eq!(outcome, SubmitOutcome::MailOpened(expected.to_owned()));
    assert_eq!(*ui.navigated.borrow(), vec![expected.to_owned()]);
    assert_eq!(transport.calls(), 0);
    assert!(ui.alerts.borrow().is_empty());
}

#[test]
fn chat_route_opens_prefilled_link() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(ok_reply());
    let outcome = run(&raw("Ada", "", "", "Hi", Some("whatsapp")), &ui, &transport);

    let expected = "https://wa.me/233201142183?text=New%20message%20from%20portfolio%0AName%3A%20Ada%0A%0AHi";
    assert_eq!(outcome, SubmitOutcome::ChatOpened(expected.to_owned()));
    assert_eq!(*ui.opened.borrow(), vec![expected.to_owned()]);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn phone_is_forwarded_to_backend_when_filled() {
    let ui = FakeUi::with_label(Some("Send"));
    let transport = FakeTransport::replying(ok_reply());
    let mut fields = raw("Ada", "", "", "Hello", None);
    fields.phone = Some(" +233 20 ".to_owned());
    run(&fields, &ui, &transport);

    assert_eq!(transport.requests.borrow()[0].phone, "+233 20");
}
