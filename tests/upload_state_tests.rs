//! Upload State Tests
//!
//! Tests for the upload workflow state: initial values, wholesale page
//! replacement, and independence of the three pieces of state.

use js_sys::Array;
use leptos::prelude::*;
use transcript_uploader_frontend::components::upload::UploadState;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;

wasm_bindgen_test_configure!(run_in_browser);

fn pdf_file(name: &str) -> File {
    let parts = Array::new();
    parts.push(&JsValue::from_str("%PDF-1.4\n"));
    File::new_with_str_sequence(&parts, name).unwrap()
}

// ============================================================================
// Initial State Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_initial_state_is_unset() {
    let state = UploadState::new();
    assert!(state.selected_file.get_untracked().is_none());
    assert!(state.pages.get_untracked().is_none());
    assert!(state.money_saved.get_untracked().is_none());
}

// ============================================================================
// Page Replacement Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_successful_upload_replaces_pages_wholesale() {
    let state = UploadState::new();

    state
        .pages
        .set(Some(vec!["Text A".to_string(), "Text B".to_string()]));
    state.pages.set(Some(vec!["Only page".to_string()]));

    // No merging across uploads: the later result is all that remains
    assert_eq!(
        state.pages.get_untracked(),
        Some(vec!["Only page".to_string()])
    );
}

#[wasm_bindgen_test]
fn test_pages_keep_document_order() {
    let state = UploadState::new();

    let pages: Vec<String> = (1..=5).map(|n| format!("page {n}")).collect();
    state.pages.set(Some(pages.clone()));

    assert_eq!(state.pages.get_untracked(), Some(pages));
}

// ============================================================================
// State Independence Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_new_selection_keeps_previous_pages() {
    let state = UploadState::new();

    state.pages.set(Some(vec!["Text A".to_string()]));
    state.selected_file.set(Some(pdf_file("transcript.pdf")));

    assert_eq!(state.pages.get_untracked(), Some(vec!["Text A".to_string()]));
}

#[wasm_bindgen_test]
fn test_new_selection_replaces_previous_file() {
    let state = UploadState::new();

    state.selected_file.set(Some(pdf_file("fall-term.pdf")));
    state.selected_file.set(Some(pdf_file("winter-term.pdf")));

    let name = state
        .selected_file
        .get_untracked()
        .map(|file| file.name())
        .unwrap();
    assert_eq!(name, "winter-term.pdf");
}

#[wasm_bindgen_test]
fn test_money_saved_is_untouched_by_uploads() {
    let state = UploadState::new();

    state.money_saved.set(Some(42.5));
    state.pages.set(Some(vec!["Text A".to_string()]));
    state.selected_file.set(Some(pdf_file("transcript.pdf")));

    assert_eq!(state.money_saved.get_untracked(), Some(42.5));
}
