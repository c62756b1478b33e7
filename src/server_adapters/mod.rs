//! Server adapters: expose the connector's provider proxy endpoints through
//! web frameworks.
//!
//! Enabled by the `server-adapters` cargo feature.

pub mod axum;

pub use axum::proxy_router;
