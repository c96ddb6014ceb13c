//! Transform endpoint client.
//!
//! Issues one `POST` with a JSON body via `window.fetch` and parses the
//! JSON reply. There is no retry, timeout, or cancellation: the request
//! runs until the browser's transport resolves or rejects it.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use ghibli_core::{TransformRequest, TransformResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Errors that can occur when calling the transform endpoint.
///
/// The page treats every variant the same way (log and carry on); the
/// split exists so the log says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A browser API call failed, including network errors from `fetch`.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The endpoint answered with a non-2xx status.
    #[error("transform endpoint returned HTTP {0}")]
    Status(u16),

    /// The request body could not be serialized.
    #[error("failed to encode transform request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not the expected JSON shape.
    #[error("malformed transform response: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl From<JsValue> for TransformError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// POST `request` to `endpoint` and return the parsed response.
///
/// # Errors
///
/// Returns [`TransformError::JsError`] if the window is unavailable or
/// `fetch` rejects, [`TransformError::Status`] for a non-2xx reply, and
/// [`TransformError::Malformed`] if the body is not
/// `{"transformedImage": "<base64>"}`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
pub async fn request_transform(
    endpoint: &str,
    request: &TransformRequest,
) -> Result<TransformResponse, TransformError> {
    let body = serde_json::to_string(request).map_err(TransformError::Encode)?;

    let window =
        web_sys::window().ok_or_else(|| TransformError::JsError("no global window".into()))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let http_request = Request::new_with_str_and_init(endpoint, &opts)?;

    let reply = JsFuture::from(window.fetch_with_request(&http_request)).await?;
    let response: Response = reply
        .dyn_into()
        .map_err(|_| TransformError::JsError("fetch did not resolve to a Response".into()))?;

    if !response.ok() {
        return Err(TransformError::Status(response.status()));
    }

    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| TransformError::JsError("response body is not text".into()))?;

    parse_response(&text)
}

/// Parse a transform endpoint response body.
///
/// # Errors
///
/// Returns [`TransformError::Malformed`] if `body` is not a JSON object
/// with a string `transformedImage` field.
pub fn parse_response(body: &str) -> Result<TransformResponse, TransformError> {
    serde_json::from_str(body).map_err(TransformError::Malformed)
}
