use leptos::prelude::*;

use crate::core::ExamplePrompt;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};

/// Pill button that fills the prompt with an example
#[component]
pub fn ExampleButton(
    example: ExamplePrompt,
    /// Receives the full example prompt
    on_click: Callback<String>,
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let on_click = Callback::new(move |_: ()| on_click.run(example.prompt.to_string()));

    view! {
        <Button
            variant=ButtonVariant::Outline
            size=ButtonSize::Small
            on_click=on_click
            aria_label=format!("Example prompt: {}", example.prompt)
            class=format!("example-button rounded-full min-h-[44px] {}", class)
        >
            {example.label}
        </Button>
    }
}
