//! Request Context Port
//!
//! Header lookup contract the identity resolver consumes. Transport
//! adapters implement these for their own request types.

/// Header lookup on an inbound request
pub trait RequestHeaders: Send + Sync {
    /// Value of the header `name` (case-insensitive), if present and textual
    fn header(&self, name: &str) -> Option<&str>;
}

/// Access to the request embedded in an operation context
pub trait RequestContext: Send + Sync {
    /// The inbound request, `None` when the context carries none
    fn request(&self) -> Option<&dyn RequestHeaders>;
}
