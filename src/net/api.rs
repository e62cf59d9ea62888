//! HTTP transport for the contact backend.
//!
//! Client-side (hydrate): real POST via `gloo-net`.
//! Native builds: a stub that reports the transport as unavailable, so the
//! router still compiles and is exercised through fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers failures with a JSON body and a 4xx/5xx status, so the
//! status is not inspected; only a missing or unparsable body is an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::PageConfig;
use crate::contact::ContactTransport;
use crate::error::ContactError;
use crate::net::types::{ContactRequest, ContactResponse};

/// Transport that POSTs JSON to `{backend}/api/contact`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { endpoint: config.contact_endpoint() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn unexpected_body_message(status: u16, detail: &str) -> String {
    format!("status {status}: {detail}")
}

impl ContactTransport for HttpTransport {
    async fn send(&self, request: &ContactRequest) -> Result<ContactResponse, ContactError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| ContactError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;
            let status = resp.status();
            resp.json::<ContactResponse>()
                .await
                .map_err(|e| ContactError::Decode(unexpected_body_message(status, &e.to_string())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("no browser transport; dropping contact request from {}", request.name);
            Err(ContactError::Network("not available outside the browser".to_owned()))
        }
    }
}
