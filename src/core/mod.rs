//! Core domain logic for the landing page: the typing placeholder animation,
//! framework templates and example prompts

#[cfg(feature = "ssr")]
pub mod config;
pub mod prompts;
pub mod templates;
pub mod typing_animation;

pub use prompts::{BuildRequest, EXAMPLE_IDEAS, EXAMPLE_PROMPTS, ExamplePrompt};
pub use templates::{Framework, UnknownFramework};
