//! ghibli-io: Browser I/O and Dioxus component library.
//!
//! Sends transform requests with `fetch`, saves results through a
//! temporary download link, and provides the drop zone, preview, and
//! action bar components for the ghibli web application.

pub mod api;
pub mod components;
pub mod download;

pub use api::{TransformError, request_transform};
pub use components::{ActionBar, FileUpload, PreviewPanel};
pub use download::{DownloadError, trigger_download};
