use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

/// Dropdown menu item definition
#[derive(Clone, PartialEq)]
pub struct DropdownItem {
    /// Unique identifier for the item
    pub id: String,
    /// Display label
    pub label: String,
    /// Optional image shown before the label
    pub image: Option<&'static str>,
    /// Accessible label for the menu item
    pub aria_label: Option<String>,
}

impl DropdownItem {
    /// Create a new dropdown item
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            image: None,
            aria_label: None,
        }
    }

    /// Add an image to the item
    pub fn with_image(mut self, src: &'static str) -> Self {
        self.image = Some(src);
        self
    }

    /// Set the accessible label
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }
}

/// Dropdown component with menu items
#[component]
pub fn Dropdown(
    /// List of dropdown items
    items: Vec<DropdownItem>,
    /// Callback when an item is selected
    on_select: Callback<String>,
    /// Trigger button content
    trigger: Children,
    /// Accessible label of the trigger button
    #[prop(optional, into)]
    trigger_label: Option<Signal<String>>,
    /// Accessible label of the menu
    #[prop(optional, into)]
    menu_label: Option<String>,
    /// Additional CSS classes for the container
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let items = StoredValue::new(items);
    let (is_open, set_is_open) = signal(false);

    let toggle = move |_: MouseEvent| {
        set_is_open.update(|open| *open = !*open);
    };

    let close = move || set_is_open.set(false);

    let handle_select = move |item_id: String| {
        on_select.run(item_id);
        close();
    };

    let container_class = if class.is_empty() {
        "dropdown-container".to_string()
    } else {
        format!("dropdown-container {}", class)
    };

    // Close dropdown when clicking outside
    let close_on_outside = move |_| {
        if is_open.get() {
            close();
        }
    };

    view! {
        <div class=container_class>
            <button
                type="button"
                class="dropdown-trigger"
                on:click=toggle
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                aria-label=move || trigger_label.map(|label| label.get())
            >
                {trigger()}
            </button>

            <Show when=move || is_open.get()>
                <div class="dropdown-backdrop" on:click=close_on_outside></div>
                <div class="dropdown-menu" role="menu" aria-label=menu_label.clone()>
                    {items.get_value().into_iter().map(|item| {
                        let item_id = item.id.clone();
                        let on_click = move |_: MouseEvent| handle_select(item_id.clone());

                        view! {
                            <button
                                type="button"
                                class="dropdown-item"
                                on:click=on_click
                                role="menuitem"
                                aria-label=item.aria_label
                            >
                                {item.image.map(|src| {
                                    view! {
                                        <img class="dropdown-item-image" src=src alt="" width="16" height="16" />
                                    }
                                })}
                                <span class="dropdown-item-label">{item.label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
