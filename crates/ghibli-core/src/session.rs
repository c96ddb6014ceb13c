//! The studio page's state container.
//!
//! [`StudioState`] owns the three observable fields of the page (the
//! original image, the transformed image, and the processing flag) and
//! the operations that move between them. The UI layer keeps one
//! instance in a reactive signal; every update goes through a method
//! here so the guard conditions live in one place.
//!
//! # Phases
//!
//! The page is always in exactly one [`Phase`], derived from the fields:
//!
//! ```text
//!   Idle --upload--> Ready --transform--> Processing --ok--> Complete
//!                      ^                      |
//!                      +-------error----------+
//! ```
//!
//! Uploading a new original while `Complete` keeps the old result under
//! [`UploadPolicy::KeepStale`] and drops it under
//! [`UploadPolicy::Invalidate`].

use serde::{Deserialize, Serialize};

use crate::data_uri::DataUri;
use crate::transform::{TransformRequest, TransformResponse};

/// What a new upload does to an existing or pending transform result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UploadPolicy {
    /// Keep the previous transformed image and still apply an in-flight
    /// response, even though it belongs to the earlier original.
    #[default]
    KeepStale,
    /// Clear the transformed image and ignore any in-flight response
    /// issued for an earlier original.
    Invalidate,
}

/// Observable page phase, derived from [`StudioState`]'s fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No original image yet. Only the drop zone is active.
    Idle,
    /// Original present, nothing transformed, not processing.
    Ready,
    /// A transform request is in flight.
    Processing,
    /// A transformed image is available for download.
    Complete,
}

/// Outcome of a successful transform response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was stored as the transformed image.
    Applied,
    /// The result belonged to an invalidated original and was dropped.
    Discarded,
}

/// An issued transform request, tagged with the upload generation it
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTicket {
    /// Body to POST to the transform endpoint.
    pub request: TransformRequest,
    /// Generation of the original image at issue time.
    pub generation: u64,
}

/// A pending browser download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Link target: the transformed image's data URI.
    pub href: String,
    /// Suggested filename for the saved file.
    pub filename: String,
}

/// State of the studio page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioState {
    original: Option<DataUri>,
    transformed: Option<DataUri>,
    processing: bool,
    /// Bumped whenever an upload invalidates earlier results.
    generation: u64,
    policy: UploadPolicy,
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}

impl StudioState {
    /// Empty state in the [`Phase::Idle`] phase.
    #[must_use]
    pub const fn new(policy: UploadPolicy) -> Self {
        Self {
            original: None,
            transformed: None,
            processing: false,
            generation: 0,
            policy,
        }
    }

    /// The uploaded image, if any.
    #[must_use]
    pub const fn original(&self) -> Option<&DataUri> {
        self.original.as_ref()
    }

    /// The most recent transform result, if any.
    #[must_use]
    pub const fn transformed(&self) -> Option<&DataUri> {
        self.transformed.as_ref()
    }

    /// Whether a transform request is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.processing {
            Phase::Processing
        } else if self.transformed.is_some() {
            Phase::Complete
        } else if self.original.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Whether the transform control is enabled: an original is present
    /// and no request is in flight.
    #[must_use]
    pub const fn can_transform(&self) -> bool {
        self.original.is_some() && !self.processing
    }

    /// Replace the original image.
    ///
    /// Always accepted, including while a transform is in flight.
    pub fn accept_original(&mut self, uri: DataUri) {
        self.original = Some(uri);
        if self.policy == UploadPolicy::Invalidate {
            self.transformed = None;
            self.generation += 1;
        }
    }

    /// Start a transform if the guard allows it.
    ///
    /// Returns `None` (and changes nothing) unless
    /// [`can_transform`](Self::can_transform). Otherwise sets the
    /// processing flag and returns the request to send.
    pub fn begin_transform(&mut self) -> Option<TransformTicket> {
        if !self.can_transform() {
            return None;
        }
        let request = TransformRequest::from_original(self.original.as_ref()?);
        self.processing = true;
        Some(TransformTicket {
            request,
            generation: self.generation,
        })
    }

    /// Resolve an in-flight transform.
    ///
    /// The processing flag is cleared on every path. A success is stored
    /// as the transformed image unless the ticket's generation has been
    /// invalidated since it was issued.
    ///
    /// # Errors
    ///
    /// Hands the transport error back unchanged so the caller can log
    /// it. The state is already reset when this returns.
    pub fn finish_transform<E>(
        &mut self,
        generation: u64,
        outcome: Result<TransformResponse, E>,
    ) -> Result<Completion, E> {
        self.processing = false;
        let response = outcome?;
        if generation != self.generation {
            return Ok(Completion::Discarded);
        }
        self.transformed = Some(response.into_data_uri());
        Ok(Completion::Applied)
    }

    /// Clear the processing flag without a result.
    ///
    /// Used when an in-flight request is abandoned before
    /// [`finish_transform`](Self::finish_transform) could run.
    pub const fn release(&mut self) {
        self.processing = false;
    }

    /// Plan a download of the transformed image under `filename`.
    ///
    /// Returns `None` when there is nothing to download.
    #[must_use]
    pub fn download(&self, filename: &str) -> Option<DownloadPlan> {
        self.transformed.as_ref().map(|uri| DownloadPlan {
            href: uri.as_str().to_owned(),
            filename: filename.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::data_uri::ImageMime;
    use crate::transform::DOWNLOAD_FILENAME;

    fn png(payload: &str) -> DataUri {
        DataUri::from_base64(ImageMime::Png, payload)
    }

    fn ok(payload: &str) -> Result<TransformResponse, &'static str> {
        Ok(TransformResponse {
            transformed_image: payload.into(),
        })
    }

    #[test]
    fn starts_idle() {
        let state = StudioState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.can_transform());
        assert!(state.original().is_none());
        assert!(state.transformed().is_none());
    }

    #[test]
    fn upload_stores_encoded_file() {
        let bytes = [0xFF, 0xD8, 0xFF, 0xE0];
        let mut state = StudioState::default();
        state.accept_original(DataUri::encode(ImageMime::Jpeg, &bytes));
        assert_eq!(
            state.original().unwrap().as_str(),
            "data:image/jpeg;base64,/9j/4A=="
        );
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn can_transform_iff_original_and_not_processing() {
        let mut state = StudioState::default();
        assert!(!state.can_transform());

        state.accept_original(png("AAAA"));
        assert!(state.can_transform());

        let _ticket = state.begin_transform().unwrap();
        assert!(state.is_processing());
        assert!(!state.can_transform());

        state.finish_transform(0, ok("BBBB")).unwrap();
        assert!(state.can_transform());
    }

    #[test]
    fn begin_without_original_is_noop() {
        let mut state = StudioState::default();
        assert!(state.begin_transform().is_none());
        assert!(!state.is_processing());
    }

    #[test]
    fn second_begin_while_processing_is_noop() {
        let mut state = StudioState::default();
        state.accept_original(png("AAAA"));
        assert!(state.begin_transform().is_some());
        assert!(state.begin_transform().is_none());
        assert!(state.is_processing());
    }

    #[test]
    fn ticket_carries_stripped_payload() {
        let mut state = StudioState::default();
        state.accept_original(png("iVBORw0KGgo="));
        let ticket = state.begin_transform().unwrap();
        assert_eq!(ticket.request.image, "iVBORw0KGgo=");
        assert_eq!(state.phase(), Phase::Processing);
    }

    #[test]
    fn success_stores_jpeg_data_uri() {
        let mut state = StudioState::default();
        state.accept_original(png("ZZZZ"));
        let ticket = state.begin_transform().unwrap();

        let completion = state.finish_transform(ticket.generation, ok("AAAA"));
        assert_eq!(completion, Ok(Completion::Applied));
        assert_eq!(
            state.transformed().unwrap().as_str(),
            "data:image/jpeg;base64,AAAA"
        );
        assert!(!state.is_processing());
        assert_eq!(state.phase(), Phase::Complete);
    }

    #[test]
    fn failure_resets_processing_and_leaves_result_unset() {
        let mut state = StudioState::default();
        state.accept_original(png("ZZZZ"));
        let ticket = state.begin_transform().unwrap();

        let outcome: Result<TransformResponse, &str> = Err("network down");
        let completion = state.finish_transform(ticket.generation, outcome);
        assert_eq!(completion, Err("network down"));
        assert!(!state.is_processing());
        assert!(state.transformed().is_none());
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut state = StudioState::default();
        state.accept_original(png("ZZZZ"));
        let ticket = state.begin_transform().unwrap();
        state.finish_transform(ticket.generation, ok("AAAA")).unwrap();

        let ticket = state.begin_transform().unwrap();
        let _ = state.finish_transform(ticket.generation, Err::<TransformResponse, _>("boom"));
        assert_eq!(
            state.transformed().unwrap().as_str(),
            "data:image/jpeg;base64,AAAA"
        );
        assert_eq!(state.phase(), Phase::Complete);
    }

    #[test]
    fn release_clears_processing() {
        let mut state = StudioState::default();
        state.accept_original(png("ZZZZ"));
        state.begin_transform().unwrap();
        state.release();
        assert!(!state.is_processing());
        assert!(state.can_transform());
    }

    #[test]
    fn drop_while_pending_updates_original_and_applies_response() {
        let mut state = StudioState::new(UploadPolicy::KeepStale);
        state.accept_original(png("FIRST"));
        let ticket = state.begin_transform().unwrap();

        state.accept_original(png("SECOND"));
        assert_eq!(state.original().unwrap().payload(), "SECOND");
        assert!(state.is_processing());

        let completion = state.finish_transform(ticket.generation, ok("AAAA"));
        assert_eq!(completion, Ok(Completion::Applied));
        assert_eq!(state.transformed().unwrap().payload(), "AAAA");
    }

    #[test]
    fn keep_stale_retains_result_across_uploads() {
        let mut state = StudioState::new(UploadPolicy::KeepStale);
        state.accept_original(png("FIRST"));
        let ticket = state.begin_transform().unwrap();
        state.finish_transform(ticket.generation, ok("AAAA")).unwrap();

        state.accept_original(png("SECOND"));
        assert!(state.transformed().is_some());
        assert_eq!(state.phase(), Phase::Complete);
    }

    #[test]
    fn invalidate_clears_result_on_upload() {
        let mut state = StudioState::new(UploadPolicy::Invalidate);
        state.accept_original(png("FIRST"));
        let ticket = state.begin_transform().unwrap();
        state.finish_transform(ticket.generation, ok("AAAA")).unwrap();

        state.accept_original(png("SECOND"));
        assert!(state.transformed().is_none());
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn invalidate_discards_pending_response() {
        let mut state = StudioState::new(UploadPolicy::Invalidate);
        state.accept_original(png("FIRST"));
        let ticket = state.begin_transform().unwrap();

        state.accept_original(png("SECOND"));
        let completion = state.finish_transform(ticket.generation, ok("AAAA"));
        assert_eq!(completion, Ok(Completion::Discarded));
        assert!(state.transformed().is_none());
        assert!(!state.is_processing());
        assert_eq!(state.original().unwrap().payload(), "SECOND");
    }

    #[test]
    fn download_requires_result() {
        let mut state = StudioState::default();
        assert!(state.download(DOWNLOAD_FILENAME).is_none());

        state.accept_original(png("ZZZZ"));
        assert!(state.download(DOWNLOAD_FILENAME).is_none());
    }

    #[test]
    fn download_plan_points_at_result() {
        let mut state = StudioState::default();
        state.accept_original(png("ZZZZ"));
        let ticket = state.begin_transform().unwrap();
        state.finish_transform(ticket.generation, ok("AAAA")).unwrap();

        let plan = state.download(DOWNLOAD_FILENAME).unwrap();
        assert_eq!(plan.href, "data:image/jpeg;base64,AAAA");
        assert_eq!(plan.filename, "ghibli-transformed.jpg");
    }
}
