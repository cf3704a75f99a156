//! HTTP Client
//!
//! Fetch transport for the REST backend, shared by the typed resource
//! wrappers.

mod foods;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use foods::*;

/// Render an opaque JS error for logs and the flash banner.
fn describe_js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| {
        js_sys::JSON::stringify(&err)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| format!("{:?}", err))
    })
}

/// Build the request, send it, and check the status. Non-2xx is an error.
async fn perform(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(path, &opts).map_err(describe_js_error)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(describe_js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("server responded with status {}", response.status()));
    }
    Ok(response)
}

/// Issue a request and decode the JSON response body.
pub(crate) async fn request_json(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<JsValue, String> {
    let response = perform(method, path, body).await?;
    let json = response.json().map_err(describe_js_error)?;
    JsFuture::from(json).await.map_err(describe_js_error)
}

/// Issue a request and discard the response body.
pub(crate) async fn request_unit(method: &str, path: &str) -> Result<(), String> {
    perform(method, path, None).await.map(|_| ())
}
