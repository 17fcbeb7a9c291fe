//! Extracted Page Display
//!
//! Renders one block per extracted page, in the order the service returned
//! them, with a human-readable 1-based page label.

use leptos::prelude::*;

use crate::components::design_system::{Badge, BadgeVariant, Card, CardBody, CardHeader};
use crate::utils::formatting::page_label;

use super::use_upload_state;

/// Per-page results, rendered only after a successful upload.
#[component]
pub fn PageResults() -> impl IntoView {
    let pages = use_upload_state().pages;

    view! {
        {move || {
            pages.get().map(|pages| {
                let count = pages.len();
                view! {
                    <Card>
                        <CardHeader>
                            <h2 class="text-lg font-semibold">"Extracted Text"</h2>
                            <Badge variant=BadgeVariant::Info>
                                {format!("{} page{}", count, if count == 1 { "" } else { "s" })}
                            </Badge>
                        </CardHeader>
                        <CardBody class="flex flex-col gap-4">
                            {pages
                                .into_iter()
                                .enumerate()
                                .map(|(index, text)| {
                                    view! {
                                        <div>
                                            <h3 class="font-medium text-gray-200">
                                                {page_label(index)}
                                            </h3>
                                            <p class="mt-1 whitespace-pre-wrap text-sm text-gray-300">
                                                {text}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </CardBody>
                    </Card>
                }
            })
        }}
    }
}
