//! Email template resource endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
