pub mod common;
pub mod example_button;
pub mod framework_selector;
pub mod icon;
pub mod pages;
pub mod prompt_input;
pub mod typing_animation;

pub use example_button::ExampleButton;
pub use framework_selector::FrameworkSelector;
pub use icon::{Icon, icons};
pub use prompt_input::{PromptInput, PromptTextarea};
pub use typing_animation::use_typing_animation;
