//! Injected stores for gateway-local state.
//!
//! The two fixture endpoints (delivery config, subscription snapshot) keep
//! their state behind store traits instead of process-global mutables. The
//! in-memory implementations are synchronized and reset on restart; they
//! are not a source of truth.

pub mod schedule_repository;
pub mod subscription_repository;
