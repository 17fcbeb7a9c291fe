use leptos::prelude::*;

/// Badge variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-700 text-gray-200 border-transparent",
            BadgeVariant::Success => "bg-emerald-900/50 text-emerald-400 border-emerald-500/30",
            BadgeVariant::Info => "bg-indigo-900/50 text-indigo-400 border-indigo-500/30",
        }
    }
}

/// A styled badge/tag component
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "px-2 py-0.5 text-xs font-medium rounded-full border";
    let variant_class = variant.class();
    let full_class = format!("{base_class} {variant_class} {class}");

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
