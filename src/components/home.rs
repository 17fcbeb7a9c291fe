//! Home Page
//!
//! The single page of the app: a short guide for pulling the transcript PDF
//! from the student service centre, the upload panel, and the results.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_total_money_saved;
use crate::components::design_system::{Card, CardBody, CardHeader};
use crate::components::upload::{MoneySavedBanner, PageResults, UploadPanel, UploadState};

#[component]
pub fn Home() -> impl IntoView {
    // Provide shared state
    let state = UploadState::new();
    provide_context(state.clone());

    // Fetch the running total once per page load, not per render. A failure
    // leaves the banner hidden and is reported to the console only.
    Effect::new({
        let money_saved = state.money_saved;
        move |_| {
            spawn_local(async move {
                match fetch_total_money_saved().await {
                    Ok(total) => {
                        money_saved.set(Some(total));
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch money-saved total: {}", e);
                    }
                }
            });
        }
    });

    view! {
        <div class="mx-auto flex max-w-3xl flex-col gap-6 px-6 py-10">
            <header class="text-center">
                <h1 class="text-3xl font-bold">"Transcript Uploader"</h1>
                <MoneySavedBanner />
            </header>

            <Card>
                <CardHeader>
                    <h2 class="text-lg font-semibold">"How to download your transcript"</h2>
                </CardHeader>
                <CardBody>
                    <ol class="list-inside list-decimal space-y-1 text-sm text-gray-300">
                        <li>"Log into your Student Service Centre"</li>
                        <li>"Navigate to your grades summary"</li>
                        <li>"Download the PDF via Print on the top right"</li>
                        <li>"Submit the PDF below"</li>
                        <li>"Voila!"</li>
                    </ol>
                </CardBody>
            </Card>

            <UploadPanel />
            <PageResults />
        </div>
    }
}
