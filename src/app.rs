use leptos::prelude::*;

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100 font-sans">
            <Home />
        </div>
    }
}
