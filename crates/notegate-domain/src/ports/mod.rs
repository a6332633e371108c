//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The domain
//! defines the traits; notegate-infrastructure implements them and the
//! application layer consumes them through `Arc<dyn ...>`.
//!
//! ## Organization
//!
//! - **infrastructure/** - token service and request context accessors
//! - **providers/** - credential hasher and breach checker

/// Infrastructure service ports
pub mod infrastructure;
/// External provider ports
pub mod providers;

pub use infrastructure::{RequestContext, RequestHeaders, TokenService};
pub use providers::{BreachChecker, CredentialHasher};
