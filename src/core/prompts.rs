//! Example prompts and the hand-off to the app builder
//!
//! Holds the ideas cycled by the placeholder animation, the example prompt
//! buttons shown under the input, and [`BuildRequest`], which turns a submitted
//! prompt into the `/app/new` URL where generation starts.

use serde::{Deserialize, Serialize};

use crate::core::templates::Framework;

/// Path that starts a new app build
pub const NEW_APP_PATH: &str = "/app/new";

/// Ideas cycled through the prompt placeholder
pub const EXAMPLE_IDEAS: [&str; 4] = [
    "an accessible e-commerce platform with screen reader support",
    "a universally designed portfolio with keyboard navigation",
    "an inclusive dashboard with voice commands and high contrast",
    "an accessible learning platform for diverse abilities",
];

/// One clickable example under the prompt input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePrompt {
    /// Short button label
    pub label: &'static str,
    /// Full prompt copied into the input on click
    pub prompt: &'static str,
}

pub const EXAMPLE_PROMPTS: [ExamplePrompt; 3] = [
    ExamplePrompt {
        label: "Accessible E-commerce",
        prompt: "Build an accessible e-commerce site with screen reader support, keyboard navigation, and high contrast options for selling artisan goods.",
    },
    ExamplePrompt {
        label: "Inclusive Portfolio",
        prompt: "Create an accessible personal portfolio with proper heading structure, alt text for images, and keyboard navigation for showcasing creative work.",
    },
    ExamplePrompt {
        label: "Universal Dashboard",
        prompt: "Build a universally designed admin dashboard with voice commands, screen reader support, and customizable layouts for managing business operations.",
    },
];

/// A prompt submitted from the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub message: String,
    pub template: Framework,
}

impl BuildRequest {
    pub fn new(message: impl Into<String>, template: Framework) -> Self {
        Self {
            message: message.into(),
            template,
        }
    }

    /// Whether there is anything to build
    pub fn is_submittable(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// URL of the build page for this request
    pub fn to_path(&self) -> String {
        format!(
            "{}?message={}&template={}",
            NEW_APP_PATH,
            urlencoding::encode(&self.message),
            self.template.key()
        )
    }

    /// Rebuild a request from already decoded query parameters
    ///
    /// Missing or unknown templates fall back to the default framework.
    pub fn from_query(message: Option<String>, template: Option<String>) -> Self {
        Self {
            message: message.unwrap_or_default(),
            template: template
                .as_deref()
                .map(Framework::from_key_or_default)
                .unwrap_or_default(),
        }
    }
}
