//! Transform, download, and share buttons.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdShare2};

/// Props for the [`ActionBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ActionBarProps {
    /// Enables the transform button.
    can_transform: bool,
    /// Shows the busy label on the transform button.
    processing: bool,
    /// Shows the download and share buttons.
    has_result: bool,
    on_transform: EventHandler<()>,
    on_download: EventHandler<()>,
    on_share: EventHandler<()>,
}

/// Action buttons below the previews.
///
/// The transform button is always rendered; download and share only
/// appear once a result exists.
#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    let on_transform = props.on_transform;
    let on_download = props.on_download;
    let on_share = props.on_share;
    let label = if props.processing {
        "Processing..."
    } else {
        "Transform Image"
    };

    rsx! {
        div {
            button {
                class: "studio-button",
                disabled: !props.can_transform,
                "aria-busy": "{props.processing}",
                onclick: move |_| on_transform.call(()),
                "{label}"
            }

            if props.has_result {
                button {
                    class: "studio-button",
                    onclick: move |_| on_download.call(()),
                    Icon { width: 16, height: 16, icon: LdDownload }
                    "Download"
                }
                button {
                    class: "studio-button",
                    onclick: move |_| on_share.call(()),
                    Icon { width: 16, height: 16, icon: LdShare2 }
                    "Share"
                }
            }
        }
    }
}
