//! Framework picker shown at the left of the prompt input

use leptos::prelude::*;

use crate::core::Framework;
use crate::ui::common::{Dropdown, DropdownItem};
use crate::ui::icon::{Icon, icons};

/// Dropdown for choosing the starter template
#[component]
pub fn FrameworkSelector(
    /// Currently selected framework
    value: RwSignal<Framework>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let items = Framework::ALL
        .into_iter()
        .map(|framework| {
            DropdownItem::new(framework.key(), framework.display_name())
                .with_image(framework.logo())
                .with_aria_label(format!("Select {} framework", framework.display_name()))
        })
        .collect::<Vec<_>>();

    let on_select = Callback::new(move |key: String| {
        match key.parse::<Framework>() {
            Ok(framework) => value.set(framework),
            Err(err) => leptos::logging::warn!("{}", err),
        }
    });

    let trigger_label = Signal::derive(move || {
        format!(
            "Selected framework: {}. Click to change framework.",
            value.get().display_name()
        )
    });

    view! {
        <Dropdown
            items=items
            on_select=on_select
            trigger_label=trigger_label
            menu_label="Select framework for your accessible app"
            class=format!("framework-selector {}", class)
            trigger=Box::new(move || view! {
                <img
                    class="framework-selector-logo"
                    src=move || value.get().logo()
                    alt=move || value.get().display_name()
                    width="16"
                    height="16"
                />
                <span>{move || value.get().display_name()}</span>
                <Icon name=icons::CHEVRON_DOWN class="w-3 h-3 opacity-70" />
            }.into_any())
        />
    }
}
