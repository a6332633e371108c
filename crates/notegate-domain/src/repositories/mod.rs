//! Repository Interfaces
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`IdentityRepository`] | Persistence of identities |

/// Identity repository interface
pub mod identity_repository;

pub use identity_repository::IdentityRepository;
