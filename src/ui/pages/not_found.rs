//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not found - Access.Able"/>

        <main class="min-h-screen flex flex-col items-center justify-center p-4 text-center">
            <Icon name=icons::DOCUMENT_TEXT class="w-12 h-12 mb-6 opacity-60" />
            <h1 class="text-4xl font-bold mb-2">"Page not found"</h1>
            <p class="mb-8 max-w-md">
                "There is nothing here. Describe the app you want to build on the home page."
            </p>
            <A href="/" attr:class="border rounded-md px-4 py-2 text-sm font-semibold">
                "Start building"
            </A>
        </main>
    }
}
