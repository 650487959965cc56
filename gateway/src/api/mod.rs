//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the resource routers the
//! gateway exposes, excluding the authentication routes which are handled
//! separately.

pub mod admin;
pub mod analytics;
pub mod articles;
pub mod common;
pub mod feed;
pub mod generate;
pub mod newsletters;
pub mod schedule;
pub mod subscription;
pub mod templates;
