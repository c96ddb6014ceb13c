//! ghibli-core: Studio state and wire types (sans-IO).
//!
//! Holds everything the studio page decides without touching the
//! browser: which uploads are accepted, how image bytes become data
//! URIs, what the transform endpoint expects and returns, and the
//! three-field state container that drives the page.
//!
//! All browser interaction (file reads, `fetch`, downloads) lives in
//! `ghibli-io`.

pub mod accept;
pub mod config;
pub mod data_uri;
pub mod session;
pub mod theme;
pub mod transform;

pub use accept::{AcceptList, AcceptedFile, UploadRejection};
pub use config::StudioConfig;
pub use data_uri::{DataUri, DataUriError, ImageMime};
pub use session::{Completion, DownloadPlan, Phase, StudioState, TransformTicket, UploadPolicy};
pub use theme::{Fonts, Palette, Theme};
pub use transform::{DOWNLOAD_FILENAME, TRANSFORM_ENDPOINT, TransformRequest, TransformResponse};
