//! Authentication module: bearer JWT plus request nonces
//!
//! Provides:
//! - JWT token encoding/decoding (`jwt` submodule)
//! - Anti-forgery nonces (`nonce` submodule)
//! - Route middleware and the `AuthUser` extractor

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod nonce;

pub use extractor::AuthUser;
