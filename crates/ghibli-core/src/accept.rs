//! Upload accept rules for the drop zone.
//!
//! Decides which of the files handed over by a drop or file-picker
//! event may become the original image. A drop is accepted only when
//! it holds at most [`AcceptList::max_files`] files and the file has an
//! allowed image extension; anything else is rejected as a whole and
//! leaves the page state untouched.

use serde::{Deserialize, Serialize};

use crate::data_uri::ImageMime;

/// Why a drop or file selection was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    /// The event carried no files.
    #[error("no file selected")]
    Empty,

    /// More files than allowed were dropped at once.
    #[error("too many files: got {got}, at most {max} allowed")]
    TooMany {
        /// Number of files in the event.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The file's extension is not on the accept list.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

/// A file that passed the accept rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedFile {
    /// Index of the file within the event's file list.
    pub index: usize,
    /// MIME type derived from the file extension.
    pub mime: ImageMime,
}

/// Allowed extensions and the per-drop file limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptList {
    /// Allowed extensions, lowercase, without the leading dot.
    pub extensions: Vec<String>,
    /// Maximum number of files per drop. Larger drops are rejected.
    pub max_files: usize,
}

impl Default for AcceptList {
    fn default() -> Self {
        Self {
            extensions: vec!["jpeg".into(), "jpg".into(), "png".into()],
            max_files: 1,
        }
    }
}

impl AcceptList {
    /// MIME type for `name` if its extension is allowed.
    ///
    /// Extensions outside [`ImageMime`]'s vocabulary are never allowed,
    /// even if listed.
    #[must_use]
    pub fn mime_for(&self, name: &str) -> Option<ImageMime> {
        let (_, ext) = name.rsplit_once('.')?;
        let listed = self
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext));
        if listed {
            ImageMime::from_extension(ext)
        } else {
            None
        }
    }

    /// Pick the file to load from a drop or picker event.
    ///
    /// # Errors
    ///
    /// Returns [`UploadRejection::Empty`] for an empty list,
    /// [`UploadRejection::TooMany`] when the list exceeds
    /// [`max_files`](Self::max_files), and
    /// [`UploadRejection::UnsupportedType`] when the first file's
    /// extension is not allowed.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<AcceptedFile, UploadRejection> {
        let first = names.first().ok_or(UploadRejection::Empty)?;
        if names.len() > self.max_files {
            return Err(UploadRejection::TooMany {
                got: names.len(),
                max: self.max_files,
            });
        }
        let name = first.as_ref();
        let mime = self
            .mime_for(name)
            .ok_or_else(|| UploadRejection::UnsupportedType(name.to_owned()))?;
        Ok(AcceptedFile { index: 0, mime })
    }

    /// Value for an `<input type="file" accept=...>` attribute,
    /// e.g. `".jpeg,.jpg,.png"`.
    #[must_use]
    pub fn input_accept(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
