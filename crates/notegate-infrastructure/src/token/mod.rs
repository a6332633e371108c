//! Bearer token service

pub mod jwt;

pub use jwt::JwtTokenService;
