mod home;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use ghibli_core::{StudioConfig, Theme};

use crate::home::Home;

/// The app's only route.
#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    // Routes `tracing` output to the browser console. Fails only if a
    // subscriber is already installed, which then receives the warning.
    if let Err(e) = dioxus::logger::init(log_level()) {
        tracing::warn!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

/// Debug builds also show the page's `debug!` events.
const fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Root application component.
///
/// Builds the theme and studio configuration once, injects the global
/// stylesheet, and mounts the router inside the fading shell container.
#[component]
fn App() -> Element {
    let theme = use_hook(Theme::default);
    use_context_provider(StudioConfig::default);

    rsx! {
        GlobalStyle { theme }
        div { class: "studio-shell",
            Router::<Route> {}
        }
    }
}

/// Injects the theme's global stylesheet.
#[component]
fn GlobalStyle(theme: Theme) -> Element {
    let css = theme.stylesheet();
    rsx! {
        style { dangerous_inner_html: "{css}" }
    }
}
