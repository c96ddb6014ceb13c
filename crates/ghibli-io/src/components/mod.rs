//! Dioxus UI components for ghibli.
//!
//! Provides the drop zone, the original/transformed preview pair, and
//! the transform/download/share action bar.

mod actions;
mod preview;
mod upload;

pub use actions::ActionBar;
pub use preview::PreviewPanel;
pub use upload::FileUpload;
