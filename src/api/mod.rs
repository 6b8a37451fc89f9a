//! HTTP API for the SEO service

pub mod admin_handlers;
pub mod cluster_handlers;
pub mod handlers;
pub mod project_handlers;
pub mod routes;

pub use routes::create_router;
