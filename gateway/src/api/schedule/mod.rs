//! Delivery schedule endpoints.
//!
//! The recurring delivery config lives in the injected store; the send
//! queue entries are proxied to the upstream scheduler.

pub mod handlers;
pub mod models;
pub mod routes;
