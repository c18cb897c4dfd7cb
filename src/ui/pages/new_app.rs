//! New app page
//!
//! Target of a submitted prompt. Reads `message` and `template` from the query
//! string; the app-generation backend picks the request up from here.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::BuildRequest;

/// Summary of the build request taken from the URL
#[component]
pub fn NewAppPage() -> impl IntoView {
    let query = use_query_map();

    let request = Memo::new(move |_| {
        let query = query.get();
        BuildRequest::from_query(
            query.get("message").map(|s| s.to_string()),
            query.get("template").map(|s| s.to_string()),
        )
    });

    view! {
        <Title text="Building your app - Access.Able"/>

        <main class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-lg text-center">
                <Show
                    when=move || request.get().is_submittable()
                    fallback=|| view! {
                        <h1 class="text-2xl font-semibold mb-4">"Nothing to build yet"</h1>
                        <p class="mb-8">"Describe the app you want on the home page first."</p>
                    }
                >
                    <h1 class="text-2xl font-semibold mb-2">"Building your accessible app"</h1>
                    <p class="text-sm mb-6" aria-live="polite">
                        "Template: " {move || request.get().template.display_name()}
                    </p>
                    <blockquote class="border rounded-md p-4 mb-8 text-left whitespace-pre-wrap">
                        {move || request.get().message}
                    </blockquote>
                </Show>

                <A href="/" attr:class="border rounded-md px-4 py-2 text-sm font-semibold">
                    "Back to start"
                </A>
            </div>
        </main>
    }
}
