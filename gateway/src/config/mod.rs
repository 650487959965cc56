//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the upstream backend base URL, server port, and cookie security settings.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub server_port: u16,
    pub upstream_timeout_seconds: u64,
    pub secure_cookies: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECONDS must be a valid number")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let secure_cookies = environment == "production";

        Ok(Config {
            backend_url,
            server_port,
            upstream_timeout_seconds,
            secure_cookies,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: "http://localhost:8000/api".to_string(),
            server_port: 3000,
            upstream_timeout_seconds: 10,
            secure_cookies: false,
        }
    }
}
