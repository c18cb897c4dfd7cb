//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The server provides the loaded value as Leptos context so server functions
//! can read it.

use crate::core::templates::Framework;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template preselected in the framework picker
    /// Read from DEFAULT_TEMPLATE, unknown keys fall back to Next.js
    pub default_template: Framework,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("DEFAULT_TEMPLATE").ok())
    }

    /// Build a config from raw variable values
    pub fn from_values(default_template: Option<String>) -> Self {
        let default_template = match default_template.as_deref() {
            Some(key) if !key.trim().is_empty() => key.parse().unwrap_or_else(|err| {
                tracing::warn!("{}, using {}", err, Framework::default().key());
                Framework::default()
            }),
            _ => Framework::default(),
        };

        Self { default_template }
    }
}
