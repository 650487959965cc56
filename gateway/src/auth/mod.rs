//! Module for authentication-related request handling.
//!
//! The gateway holds no credentials of its own: tokens issued by the
//! upstream backend are stored in HTTP-only cookies and relayed verbatim on
//! every proxied call. This module owns the cookie lifecycle and the four
//! session endpoints (login, register, me, logout).

pub mod cookies;
pub mod handlers;
pub mod models;
pub mod routes;
