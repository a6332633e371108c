//! Application Layer - notegate
//!
//! Orchestrates the domain ports into the authentication core:
//!
//! - `domain_services::*`: password policy, email validation, identity
//!   resolution and the authorization gates every protected operation runs
//!   through
//! - `use_cases::*`: account flows (register, login, token renewal, update,
//!   queries, administrator bootstrap)
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `notegate-domain`: entities, value objects and port traits
//! - Pure Rust libraries for async, logging and regex matching
//!
//! Concrete adapters are injected as `Arc<dyn Port>` by the caller.

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
