//! Domain services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`PasswordPolicy`] | Length and breach rules for new passwords |
//! | [`email`] | Email address format check |
//! | [`IdentityResolver`] | Bearer credential to identity |
//! | [`Gate`] | Authorization gates and the owner-or-admin predicate |

pub mod email;
pub mod gates;
pub mod identity_resolver;
pub mod password_policy;

pub use email::ensure_valid_email;
pub use gates::{Gate, ensure_owner_or_admin};
pub use identity_resolver::IdentityResolver;
pub use password_policy::PasswordPolicy;
