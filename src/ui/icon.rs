use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names available under /icons
pub mod icons {
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const LOADER: &str = "loader";
    pub const LOGO: &str = "logo";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
