use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// Stringify a JS exception for the `Result<T, String>` seam.
pub fn js_error_to_string(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error_to_string)?;

    response
        .dyn_into::<Response>()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, String> {
    if !response.ok() {
        return Err(format!("server responded with status {}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_error_to_string)?)
        .await
        .map_err(js_error_to_string)?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| format!("failed to deserialize response: {}", e))
}

/// Issue a GET request and deserialize the JSON response body.
pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error_to_string)?;
    let response = send(request).await?;
    read_json(response).await
}

/// POST a multipart form and deserialize the JSON response body.
///
/// The browser sets the `multipart/form-data` content type (including the
/// boundary) from the `FormData` value itself.
pub async fn post_form<R: DeserializeOwned>(url: &str, form: &FormData) -> Result<R, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error_to_string)?;
    let response = send(request).await?;
    read_json(response).await
}
