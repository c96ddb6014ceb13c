//! Drop zone with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use ghibli_core::{AcceptList, DataUri};

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Which files are accepted and how many per drop.
    accept: AcceptList,
    /// Called with the file's data URI after a successful read.
    on_upload: EventHandler<DataUri>,
}

/// A drag-and-drop zone that also opens the file picker when clicked.
///
/// Rejected drops (wrong type, too many files) and read failures are
/// silent: `on_upload` simply does not fire.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_upload = props.on_upload;
    let input_accept = format!("image/*,{}", props.accept.input_accept());

    let handle_files = {
        let accept = props.accept.clone();
        move |evt: FormEvent| {
            let accept = accept.clone();
            async move {
                if let Some(uri) = read_accepted(&accept, evt.files()).await {
                    on_upload.call(uri);
                }
            }
        }
    };

    let handle_drop = {
        let accept = props.accept;
        move |evt: DragEvent| {
            evt.prevent_default();
            dragging.set(false);
            let accept = accept.clone();
            async move {
                if let Some(uri) = read_accepted(&accept, evt.files()).await {
                    on_upload.call(uri);
                }
            }
        }
    };

    let drag_class = if dragging() { "dragging" } else { "" };

    rsx! {
        label {
            class: "studio-dropzone {drag_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            input {
                r#type: "file",
                accept: "{input_accept}",
                onchange: handle_files,
            }

            if dragging() {
                p { "Drop the image here..." }
            } else {
                p { "Drag and drop an image here, or click to select one" }
            }

            Icon { width: 24, height: 24, icon: LdUpload }
        }
    }
}

/// A dropped or picked file: its name and an async read of its bytes.
trait PickedFile {
    fn file_name(&self) -> String;
    async fn bytes(&self) -> Result<Vec<u8>, String>;
}

impl PickedFile for FileData {
    fn file_name(&self) -> String {
        self.name()
    }

    async fn bytes(&self) -> Result<Vec<u8>, String> {
        self.read_bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| e.to_string())
    }
}

/// Apply the accept rules to `files` and read the chosen file into a
/// data URI.
///
/// Returns `None` for a rejected selection or a failed read, so the
/// caller never fires `on_upload` for either.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
async fn read_accepted<F: PickedFile>(accept: &AcceptList, files: Vec<F>) -> Option<DataUri> {
    let names: Vec<String> = files.iter().map(PickedFile::file_name).collect();
    let accepted = match accept.select(&names) {
        Ok(accepted) => accepted,
        Err(rejection) => {
            tracing::debug!("upload rejected: {rejection}");
            return None;
        }
    };

    let file = files.get(accepted.index)?;
    match file.bytes().await {
        Ok(bytes) => Some(DataUri::encode(accepted.mime, &bytes)),
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", file.file_name());
            None
        }
    }
}
