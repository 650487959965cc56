//! Read-only analytics endpoints.

pub mod handlers;
pub mod routes;
