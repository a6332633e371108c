//! Request context value objects
//!
//! Concrete carriers for the header lookup the identity resolver needs.
//! Adapters for a real transport can implement the port traits directly
//! instead.

use crate::ports::infrastructure::{RequestContext, RequestHeaders};
use std::collections::HashMap;

/// Headers of an inbound request
///
/// Header names are matched case-insensitively, values are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct InboundRequest {
    headers: HashMap<String, String>,
}

impl InboundRequest {
    /// Create a request with no headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, replacing any previous value with the same name
    pub fn with_header<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.insert_header(name, value);
        self
    }

    /// Insert a header, replacing any previous value with the same name
    pub fn insert_header<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }
}

impl RequestHeaders for InboundRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Context handed to a protected operation
///
/// The request is optional: operations invoked outside a transport (jobs,
/// CLI) have none, and the resolver rejects them.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    request: Option<InboundRequest>,
}

impl OperationContext {
    /// Context carrying an inbound request
    pub fn with_request(request: InboundRequest) -> Self {
        Self {
            request: Some(request),
        }
    }

    /// Context without a request
    pub fn detached() -> Self {
        Self { request: None }
    }

    /// Shorthand for a request carrying `Authorization: Bearer <token>`
    pub fn bearer(token: &str) -> Self {
        Self::with_request(
            InboundRequest::new().with_header("Authorization", format!("Bearer {token}")),
        )
    }
}

impl RequestContext for OperationContext {
    fn request(&self) -> Option<&dyn RequestHeaders> {
        self.request.as_ref().map(|r| r as &dyn RequestHeaders)
    }
}
