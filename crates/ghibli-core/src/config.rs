//! Studio configuration.

use serde::{Deserialize, Serialize};

use crate::accept::AcceptList;
use crate::session::UploadPolicy;
use crate::transform::{DOWNLOAD_FILENAME, TRANSFORM_ENDPOINT};

/// Runtime configuration for the studio page.
///
/// The app builds this once at startup and provides it to the page.
/// Every field has a default, so a partial JSON document deserializes
/// into a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// URL the transform request is POSTed to.
    pub endpoint: String,
    /// Filename offered for the downloaded result.
    pub download_filename: String,
    /// Which files the drop zone accepts.
    pub accept: AcceptList,
    /// What a new upload does to an existing or pending result.
    pub upload_policy: UploadPolicy,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            endpoint: TRANSFORM_ENDPOINT.to_owned(),
            download_filename: DOWNLOAD_FILENAME.to_owned(),
            accept: AcceptList::default(),
            upload_policy: UploadPolicy::default(),
        }
    }
}
