use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use super::http::{get_json, js_error_to_string, post_form};

/// Base origin of the extraction service, fixed per deployment.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Join the base origin and an endpoint path with exactly one separator.
pub fn endpoint_url(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// ============================================================================
// Transcript Extraction
// ============================================================================

/// Per-page text extracted from an uploaded transcript, in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub pages: Vec<String>,
}

/// Fetch the running money-saved total maintained by the service.
///
/// The response body is a bare JSON number.
pub async fn fetch_total_money_saved() -> Result<f64, String> {
    get_json(&endpoint_url("total-student-money-saved")).await
}

/// Upload a transcript PDF and get back one text block per page.
pub async fn upload_transcript(file: &File) -> Result<ExtractionResponse, String> {
    let form = FormData::new().map_err(js_error_to_string)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error_to_string)?;

    post_form(&endpoint_url("upload"), &form).await
}
