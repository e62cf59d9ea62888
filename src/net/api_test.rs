use super::*;

#[test]
fn transport_targets_contact_path_of_configured_backend() {
    let config = PageConfig { backend_url: "https://api.example.com/".to_owned(), ..PageConfig::default() };
    assert_eq!(HttpTransport::new(&config).endpoint(), "https://api.example.com/api/contact");
}

#[test]
fn unexpected_body_message_includes_status() {
    assert_eq!(unexpected_body_message(502, "expected value"), "status 502: expected value");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_transport_reports_network_failure() {
    let transport = HttpTransport::new(&PageConfig::default());
    let result = futures::executor::block_on(transport.send(&ContactRequest::default()));
    assert!(matches!(result, Err(ContactError::Network(_))));
}
