//! Home page: the app-builder landing page
//!
//! - Header with the Freestyle link and logo
//! - Hero with title and description
//! - Prompt input with animated placeholder and framework picker
//! - Example prompt buttons
//! - Footer link

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::core::templates::get_default_template;
use crate::core::{BuildRequest, EXAMPLE_PROMPTS, Framework};
use crate::ui::example_button::ExampleButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::prompt_input::PromptInput;

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let framework = RwSignal::new(Framework::default());
    let is_loading = RwSignal::new(false);

    // Preselect the server's configured template once it arrives
    let default_template = Resource::new(|| (), |_| get_default_template());
    Effect::new(move |applied: Option<bool>| {
        if applied == Some(true) {
            return true;
        }
        match default_template.get() {
            Some(Ok(template)) => {
                framework.set(template);
                true
            }
            Some(Err(err)) => {
                tracing::warn!("Could not load default template: {}", err);
                true
            }
            None => false,
        }
    });

    let on_submit = Callback::new(move |_: ()| {
        let request = BuildRequest::new(prompt.get_untracked(), framework.get_untracked());
        if !request.is_submittable() {
            return;
        }
        is_loading.set(true);
        let navigate = use_navigate();
        navigate(&request.to_path(), Default::default());
    });

    let set_prompt = Callback::new(move |text: String| {
        leptos::logging::log!("Example clicked: {}", text);
        prompt.set(text);
    });

    view! {
        <Title text="Access.Able - Universal Design AI Builder"/>
        <Meta
            name="description"
            content="AI-powered app builder with Universal Design principles baked in. Create accessible, inclusive experiences for everyone."
        />

        <main class="min-h-screen p-4 relative">
            <div class="flex w-full justify-between items-center">
                <div class="text-lg font-bold flex-1 sm:w-80">
                    <a href="https://www.freestyle.sh">"freestyle.sh"</a>
                </div>
                <Icon name=icons::LOGO class="w-9 h-9 mx-2 dark:invert" />
                <div class="flex-1 sm:w-80"></div>
            </div>

            <div class="w-full max-w-lg px-4 sm:px-0 mx-auto flex flex-col items-center mt-16 sm:mt-24 md:mt-32">
                <div class="text-center mb-8">
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-4">"Access.Able"</h1>
                    <p class="text-lg sm:text-xl max-w-2xl mx-auto leading-relaxed">
                        "AI-powered app builder with Universal Design principles baked in. "
                        "Create accessible, inclusive experiences for everyone."
                    </p>
                </div>

                <div class="w-full relative my-5">
                    <PromptInput
                        prompt=prompt
                        framework=framework
                        is_loading=is_loading
                        on_submit=on_submit
                    />
                </div>

                <Examples on_pick=set_prompt />

                <div class="mt-8 mb-16">
                    <a
                        href="https://freestyle.sh"
                        class="border rounded-md px-4 py-2 mt-4 text-sm font-semibold w-full max-w-72 text-center block"
                        aria-label="Learn more about Freestyle.sh - JavaScript infrastructure for AI"
                    >
                        <span class="block font-bold">"By " <span class="underline">"freestyle.sh"</span></span>
                        <span class="text-xs">"JavaScript infrastructure for AI."</span>
                    </a>
                </div>
            </div>
        </main>
    }
}

/// Example prompt buttons under the input
#[component]
fn Examples(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="mt-2" role="region" aria-labelledby="examples-heading">
            <h3 id="examples-heading" class="sr-only">"Example prompts to get started"</h3>
            <div class="flex flex-wrap justify-center gap-2 px-2">
                {EXAMPLE_PROMPTS
                    .into_iter()
                    .map(|example| view! { <ExampleButton example=example on_click=on_pick /> })
                    .collect_view()}
            </div>
        </div>
    }
}
