//! Breached-password lookup

pub mod pwned;

pub use pwned::{PwnedPasswordsClient, parse_range, split_digest};
