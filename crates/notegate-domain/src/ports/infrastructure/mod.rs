//! Infrastructure service ports

/// Bearer token service port
pub mod auth;
/// Request context accessor ports
pub mod request;

pub use auth::TokenService;
pub use request::{RequestContext, RequestHeaders};
