//! Framework templates offered by the app builder

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a template key does not match any framework
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown framework template: {0}")]
pub struct UnknownFramework(pub String);

/// Starter template the generated app is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    NextJs,
    Vite,
    Expo,
}

impl Framework {
    /// All frameworks in menu order
    pub const ALL: [Framework; 3] = [Framework::NextJs, Framework::Vite, Framework::Expo];

    /// Key used in URLs and configuration
    pub fn key(&self) -> &'static str {
        match self {
            Framework::NextJs => "nextjs",
            Framework::Vite => "vite",
            Framework::Expo => "expo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Vite => "React (Vite)",
            Framework::Expo => "Expo",
        }
    }

    /// Path of the logo asset
    pub fn logo(&self) -> &'static str {
        match self {
            Framework::NextJs => "/logos/nextjs.svg",
            Framework::Vite => "/logos/vite.svg",
            Framework::Expo => "/logos/expo.svg",
        }
    }

    /// Parse a key, falling back to the default framework
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for Framework {
    type Err = UnknownFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .into_iter()
            .find(|framework| framework.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFramework(s.to_string()))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Template the framework picker starts on
///
/// Taken from the server `Config` in context, or read from the environment
/// when none was provided.
#[leptos::server]
pub async fn get_default_template() -> Result<Framework, leptos::prelude::ServerFnError> {
    use crate::core::config::Config;

    let config = leptos::prelude::use_context::<Config>().unwrap_or_else(Config::from_env);
    Ok(config.default_template)
}
