//! Theme tokens and the global stylesheet.
//!
//! The app builds one [`Theme`] at startup and hands it to the shell,
//! which injects [`Theme::stylesheet`] once. Components reference the
//! palette through CSS custom properties (`--primary`, `--accent`, ...)
//! and the `studio-*` classes defined here.

use serde::{Deserialize, Serialize};

/// Google Fonts stylesheet for the two theme font families.
const FONT_IMPORT: &str = "https://fonts.googleapis.com/css2?family=M+PLUS+Rounded+1c:wght@400;700&family=Quicksand:wght@400;600&display=swap";

/// Color palette as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#8B9EB7".into(),
            secondary: "#E6B89C".into(),
            background: "#F5F5F5".into(),
            text: "#333333".into(),
            accent: "#D4A5A5".into(),
        }
    }
}

/// CSS `font-family` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    /// Headings and body text.
    pub primary: String,
    /// Descriptive copy.
    pub secondary: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            primary: "'M PLUS Rounded 1c', sans-serif".into(),
            secondary: "'Quicksand', sans-serif".into(),
        }
    }
}

/// Visual configuration for the whole app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: Palette,
    pub fonts: Fonts,
    /// Duration of the shell's fade-in on mount, in milliseconds.
    #[serde(default = "Theme::default_fade_in_ms")]
    pub fade_in_ms: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette::default(),
            fonts: Fonts::default(),
            fade_in_ms: Self::DEFAULT_FADE_IN_MS,
        }
    }
}

impl Theme {
    /// Default fade-in duration.
    pub const DEFAULT_FADE_IN_MS: u32 = 500;

    const fn default_fade_in_ms() -> u32 {
        Self::DEFAULT_FADE_IN_MS
    }

    /// Render the global stylesheet.
    ///
    /// Contains the font import, a box-model reset, body colors, the
    /// palette as custom properties, the `studio-*` component classes,
    /// and the shell fade-in animation.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let Palette {
            primary,
            secondary,
            background,
            text,
            accent,
        } = &self.colors;
        let Fonts {
            primary: font_primary,
            secondary: font_secondary,
        } = &self.fonts;
        let fade = self.fade_in_ms;

        // `@import` must precede every other rule.
        let mut css = format!(
            r"@import url('{FONT_IMPORT}');
:root {{
  --primary: {primary};
  --secondary: {secondary};
  --background: {background};
  --text: {text};
  --accent: {accent};
  --font-primary: {font_primary};
  --font-secondary: {font_secondary};
}}
* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}
body {{
  font-family: var(--font-primary);
  background-color: var(--background);
  color: var(--text);
}}
@keyframes studio-fade-in {{
  from {{ opacity: 0; }}
  to {{ opacity: 1; }}
}}
.studio-shell {{
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  animation: studio-fade-in {fade}ms ease-out both;
}}
"
        );
        css.push_str(COMPONENT_CSS);
        css
    }
}

/// Page and component classes. Colors come from the `:root` properties.
const COMPONENT_CSS: &str = r".studio-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}
.studio-title {
  font-size: 3rem;
  color: var(--primary);
  margin-bottom: 2rem;
  font-family: var(--font-primary);
}
.studio-description {
  font-size: 1.2rem;
  color: var(--text);
  margin-bottom: 3rem;
  font-family: var(--font-secondary);
}
.studio-dropzone {
  display: block;
  border: 2px dashed var(--primary);
  border-radius: 10px;
  padding: 3rem;
  margin: 2rem 0;
  cursor: pointer;
  transition: all 0.3s ease;
}
.studio-dropzone:hover,
.studio-dropzone.dragging {
  border-color: var(--accent);
  transform: scale(1.02);
}
.studio-dropzone input {
  display: none;
}
.studio-dropzone svg {
  margin-top: 1rem;
}
.studio-previews {
  display: flex;
  justify-content: center;
  gap: 2rem;
  margin: 2rem 0;
}
.studio-preview {
  max-width: 400px;
  border-radius: 10px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  animation: studio-fade-in 0.3s ease-out both;
}
.studio-button {
  background-color: var(--primary);
  color: white;
  border: none;
  padding: 1rem 2rem;
  border-radius: 5px;
  font-size: 1rem;
  cursor: pointer;
  margin: 1rem;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  transition: transform 0.15s ease, background-color 0.3s ease;
}
.studio-button:hover:not(:disabled) {
  background-color: var(--accent);
  transform: scale(1.05);
}
.studio-button:active:not(:disabled) {
  transform: scale(0.95);
}
.studio-button:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}
";
