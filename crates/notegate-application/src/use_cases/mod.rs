//! Use cases

pub mod account_service;

pub use account_service::{
    AccountService, AdminSeed, LoginOutcome, RegisterRequest, RegistrationPolicy,
};
