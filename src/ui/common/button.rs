use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = false.into())]
    loading: Signal<bool>,
    /// Accessible label, for buttons whose text is abbreviated
    #[prop(optional, into)]
    aria_label: Option<Signal<String>>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
            aria-label=move || aria_label.map(|label| label.get())
        >
            {move || loading.get().then(|| view! {
                <span class="btn-spinner">
                    <Icon name=icons::LOADER class="icon-spin"/>
                </span>
            })}
            {children()}
        </button>
    }
}
