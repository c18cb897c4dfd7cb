//! Prompt input with the animated placeholder
//!
//! The textarea placeholder cycles through example ideas while the input is
//! empty. Enter submits, Shift+Enter inserts a newline.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::core::typing_animation::TypingConfig;
use crate::core::{EXAMPLE_IDEAS, Framework};
use crate::ui::common::{Button, ButtonSize};
use crate::ui::framework_selector::FrameworkSelector;
use crate::ui::typing_animation::use_typing_animation;

/// Textarea whose placeholder types and erases example ideas
#[component]
pub fn PromptTextarea(
    /// Prompt text
    prompt: RwSignal<String>,
    /// Called on Enter without Shift
    on_enter: Callback<()>,
) -> impl IntoView {
    let ideas = Signal::derive(|| {
        EXAMPLE_IDEAS
            .iter()
            .map(|idea| idea.to_string())
            .collect::<Vec<_>>()
    });
    let placeholder = use_typing_animation(ideas, TypingConfig::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_enter.run(());
        }
    };

    view! {
        <textarea
            class="prompt-textarea min-h-[100px] w-full bg-transparent backdrop-blur-sm pr-12"
            placeholder=move || placeholder.get()
            prop:value=move || prompt.get()
            on:input=move |ev| prompt.set(event_target_value(&ev))
            on:keydown=on_keydown
            aria-label="Describe the accessible application you want to build"
        ></textarea>
    }
}

/// Prompt box: framework picker, animated textarea and submit button
#[component]
pub fn PromptInput(
    /// Prompt text
    prompt: RwSignal<String>,
    /// Selected starter template
    framework: RwSignal<Framework>,
    /// Whether a submission is in flight
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Called when the user submits a non-blank prompt
    on_submit: Callback<()>,
) -> impl IntoView {
    let can_submit = Signal::derive(move || !is_loading.get() && !prompt.get().trim().is_empty());

    let submit = Callback::new(move |_: ()| {
        if can_submit.get_untracked() {
            on_submit.run(());
        }
    });

    let submit_label = Signal::derive(move || {
        if is_loading.get() {
            "Creating accessible app...".to_string()
        } else {
            "Start creating accessible app".to_string()
        }
    });

    view! {
        <div class="prompt-input w-full bg-accent rounded-md relative z-10 border transition-colors">
            <PromptTextarea prompt=prompt on_enter=submit />
            <div class="prompt-input-actions flex items-center justify-between gap-2 p-2">
                <FrameworkSelector value=framework />
                <Button
                    size=ButtonSize::Small
                    on_click=submit
                    disabled=Signal::derive(move || !can_submit.get())
                    loading=is_loading
                    aria_label=submit_label
                    class="h-8 text-sm font-medium".to_string()
                >
                    <span class="hidden sm:inline">"Build Accessible App ⏎"</span>
                    <span class="sm:hidden">"Build ⏎"</span>
                </Button>
            </div>
        </div>
    }
}
