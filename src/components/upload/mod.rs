//! Transcript Upload
//!
//! Owns the upload workflow state: the picked PDF, the per-page text returned
//! by the extraction service, and the running money-saved total shown on the
//! home page.
//!
//! # Components
//! - `UploadPanel` - File picker, drag-and-drop target, and submit control
//! - `PageResults` - Per-page extracted text, in document order
//! - `MoneySavedBanner` - Server-maintained aggregate, shown once fetched

mod page_results;

pub use page_results::PageResults;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::api::upload_transcript;
use crate::components::design_system::{Button, Card, CardBody, CardHeader};
use crate::utils::formatting::format_money;

// ============================================================================
// Upload State Context
// ============================================================================

/// Shared upload state provided to the home page components.
///
/// One instance lives for the whole page load. Signals holding DOM values
/// (`web_sys::File` is not `Send`) use local storage.
#[derive(Clone)]
pub struct UploadState {
    /// PDF picked by the user; replaced on every new selection.
    pub selected_file: RwSignal<Option<File>, LocalStorage>,
    /// Text of each extracted page, in document order. Each successful
    /// upload replaces this wholesale; a failed upload leaves it untouched.
    pub pages: RwSignal<Option<Vec<String>>>,
    /// Running total maintained by the service, unset until the one-time
    /// fetch lands. Never mutated locally afterwards.
    pub money_saved: RwSignal<Option<f64>>,
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            selected_file: RwSignal::new_local(None),
            pages: RwSignal::new(None),
            money_saved: RwSignal::new(None),
        }
    }
}

/// Get upload state from context
pub fn use_upload_state() -> UploadState {
    expect_context::<UploadState>()
}

// ============================================================================
// Components
// ============================================================================

/// Running money-saved total, rendered only once the fetch has landed.
#[component]
pub fn MoneySavedBanner() -> impl IntoView {
    let money_saved = use_upload_state().money_saved;

    view! {
        {move || {
            money_saved.get().map(|amount| {
                view! {
                    <p class="mt-2 text-emerald-400">
                        {format!("Total student money saved: {}", format_money(amount))}
                    </p>
                }
            })
        }}
    }
}

/// Upload panel: file picker, drag-and-drop target, and submit control.
///
/// Submitting while a previous upload is still in flight is allowed; the
/// later-arriving response wins. There is no in-flight guard and no
/// cancellation.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = use_upload_state();
    let selected_file = state.selected_file;
    let pages = state.pages;

    let is_drag_over = RwSignal::new(false);

    let on_file_change = move |evt: ev::Event| {
        let picked = evt
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        // An empty selection leaves the previous choice in place
        if let Some(file) = picked {
            selected_file.set(Some(file));
        }
    };

    // Drag-and-drop mirrors the picker: dropping a PDF selects it
    let on_drag_enter = move |evt: ev::DragEvent| {
        evt.prevent_default();
        is_drag_over.set(true);
    };

    let on_drag_over = move |evt: ev::DragEvent| {
        evt.prevent_default();
        is_drag_over.set(true);
    };

    let on_drag_leave = move |evt: ev::DragEvent| {
        evt.prevent_default();
        is_drag_over.set(false);
    };

    let on_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        is_drag_over.set(false);

        let dropped = evt
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));

        if let Some(file) = dropped {
            selected_file.set(Some(file));
        }
    };

    let on_submit = move |_: ev::MouseEvent| {
        // No file selected: strict no-op, no request goes out
        let Some(file) = selected_file.get() else {
            return;
        };

        spawn_local(async move {
            match upload_transcript(&file).await {
                Ok(result) => {
                    // Each response replaces the previous pages wholesale
                    pages.set(Some(result.pages));
                }
                Err(e) => {
                    tracing::error!("Transcript upload failed: {}", e);
                }
            }
        });
    };

    let drop_zone_class = move || {
        if is_drag_over.get() {
            "rounded-lg border-2 border-dashed border-indigo-400 bg-indigo-900/20 p-6 text-center transition-colors"
        } else {
            "rounded-lg border-2 border-dashed border-gray-600 p-6 text-center transition-colors"
        }
    };

    view! {
        <Card>
            <CardHeader>
                <h2 class="text-lg font-semibold">"Upload your transcript"</h2>
                {move || {
                    selected_file.get().map(|file| {
                        view! { <span class="text-sm text-gray-400">{file.name()}</span> }
                    })
                }}
            </CardHeader>
            <CardBody>
                <div
                    class=drop_zone_class
                    on:dragenter=on_drag_enter
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input
                        type="file"
                        accept="application/pdf"
                        class="block w-full text-sm text-gray-300 file:mr-4 file:rounded file:border-0 file:bg-gray-700 file:px-4 file:py-2 file:text-sm file:font-medium file:text-gray-200 hover:file:bg-gray-600"
                        on:change=on_file_change
                    />
                    <p class="mt-3 text-sm text-gray-500">"or drag a PDF here"</p>
                </div>
                <div class="mt-4 flex justify-end">
                    <Button on_click=on_submit>"Upload PDF"</Button>
                </div>
            </CardBody>
        </Card>
    }
}
