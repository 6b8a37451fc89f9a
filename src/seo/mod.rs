//! SEO analysis domain: records, canned results, the store seam, and input
//! sanitization.

pub mod fixtures;
pub mod models;
pub mod sanitize;
pub mod store;

pub use models::*;
pub use store::{FixtureStore, SeoStore};
