//! The studio page: upload, transform, preview, download.

use dioxus::prelude::*;
use ghibli_core::{Completion, DataUri, StudioConfig, StudioState};
use ghibli_io::{ActionBar, FileUpload, PreviewPanel, request_transform, trigger_download};
use tracing::{debug, error};

/// Clears the processing flag if an in-flight transform is dropped
/// before it resolves.
struct ProcessingGuard {
    studio: Signal<StudioState>,
    armed: bool,
}

impl ProcessingGuard {
    const fn new(studio: Signal<StudioState>) -> Self {
        Self {
            studio,
            armed: true,
        }
    }

    /// The transform resolved normally; nothing to clean up.
    const fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // The signal is gone if the page unmounted first.
        if let Ok(mut state) = self.studio.try_write() {
            state.release();
        }
    }
}

/// Page component for the root route.
///
/// Owns the [`StudioState`] signal and wires the drop zone, previews,
/// and action buttons to it.
#[component]
pub fn Home() -> Element {
    let config = use_context::<StudioConfig>();
    let mut studio = use_signal(|| StudioState::new(config.upload_policy));

    // --- Upload ---
    let on_upload = move |uri: DataUri| {
        studio.write().accept_original(uri);
        debug!(phase = ?studio.peek().phase(), "original replaced");
    };

    // --- Transform ---
    let on_transform = {
        let endpoint = config.endpoint.clone();
        move |()| {
            let Some(ticket) = studio.write().begin_transform() else {
                return;
            };
            let endpoint = endpoint.clone();
            spawn(async move {
                let mut guard = ProcessingGuard::new(studio);
                let outcome = request_transform(&endpoint, &ticket.request).await;
                guard.disarm();

                let completion = studio.write().finish_transform(ticket.generation, outcome);
                match completion {
                    Ok(Completion::Applied) => debug!("transform applied"),
                    Ok(Completion::Discarded) => {
                        debug!("discarded transform result for a replaced image");
                    }
                    Err(e) => error!("Error transforming image: {e}"),
                }
            });
        }
    };

    // --- Download ---
    let on_download = {
        let filename = config.download_filename.clone();
        move |()| {
            let Some(plan) = studio.read().download(&filename) else {
                return;
            };
            if let Err(e) = trigger_download(&plan) {
                error!("Download failed: {e}");
            }
        }
    };

    // --- Share ---
    let on_share = move |()| {
        debug!("share is not implemented");
    };

    let state = studio.read();
    let original = state.original().cloned();
    let transformed = state.transformed().cloned();
    let can_transform = state.can_transform();
    let processing = state.is_processing();
    drop(state);

    rsx! {
        div { class: "studio-page",
            h1 { class: "studio-title", "Ghibli AI Art Studio" }
            p { class: "studio-description",
                "Transform your photos into magical Ghibli-style artworks with our AI-powered tool. "
                "Upload an image and watch it transform into a scene straight out of your favorite Studio Ghibli film!"
            }

            FileUpload {
                accept: config.accept.clone(),
                on_upload: on_upload,
            }

            PreviewPanel {
                original: original,
                transformed: transformed.clone(),
            }

            ActionBar {
                can_transform: can_transform,
                processing: processing,
                has_result: transformed.is_some(),
                on_transform: on_transform,
                on_download: on_download,
                on_share: on_share,
            }
        }
    }
}
