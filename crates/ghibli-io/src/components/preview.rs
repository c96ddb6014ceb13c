//! Side-by-side original and transformed previews.

use dioxus::prelude::*;
use ghibli_core::DataUri;

/// Props for the [`PreviewPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewPanelProps {
    /// The uploaded image.
    original: Option<DataUri>,
    /// The transform result.
    transformed: Option<DataUri>,
}

/// Shows each image that is present; renders an empty row otherwise.
#[component]
pub fn PreviewPanel(props: PreviewPanelProps) -> Element {
    rsx! {
        div { class: "studio-previews",
            if let Some(ref uri) = props.original {
                img {
                    class: "studio-preview",
                    src: "{uri}",
                    alt: "Original",
                }
            }
            if let Some(ref uri) = props.transformed {
                img {
                    class: "studio-preview",
                    src: "{uri}",
                    alt: "Transformed",
                }
            }
        }
    }
}
