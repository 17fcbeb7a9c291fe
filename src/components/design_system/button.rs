use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 hover:bg-indigo-500 text-white shadow-lg shadow-indigo-900/50 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-gray-700 hover:bg-gray-600 text-gray-200 border border-gray-600"
            }
            ButtonVariant::Danger => {
                "bg-red-600 hover:bg-red-500 text-white shadow-lg shadow-red-900/50 border border-transparent"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-gray-400 hover:text-white border border-transparent"
            }
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler - accepts any closure taking MouseEvent
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = false.into())]
    disabled: MaybeSignal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900 focus:ring-indigo-500";
    let variant_class = variant.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed transform-none"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=move || disabled.get()
            title=title
        >
            {children()}
        </button>
    }
}
