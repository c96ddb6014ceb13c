//! File download via a temporary link.
//!
//! Dioxus has no built-in file download API. The transformed image is
//! already a data URI, so a download is one hidden `<a href download>`
//! that is appended, clicked, and removed again.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use ghibli_core::DownloadPlan;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a browser download for `plan`.
///
/// Creates a hidden `<a href=plan.href download=plan.filename>`,
/// appends it to `<body>`, clicks it once, and removes it. The document
/// is left as it was found.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document, or body
/// is missing, or if creating or attaching the element fails.
pub fn trigger_download(plan: &DownloadPlan) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(&plan.href);
    anchor.set_download(&plan.filename);
    anchor.set_attribute("style", "display: none")?;

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; a failed removal is not a
    // failed download.
    if let Err(e) = body.remove_child(&anchor) {
        tracing::warn!("failed to remove download link: {e:?}");
    }

    Ok(())
}
