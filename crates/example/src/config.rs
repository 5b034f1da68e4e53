//! Demo configuration.

use serde::Deserialize;
use std::path::Path;
use webres_renderer::RendererConfig;
use webres_renderer::url::UrlConfig;

use crate::PageError;

/// Settings for the demo page, loaded from JSON.
///
/// Every field is optional.
///
/// ```json
/// {
///   "locale": "ar",
///   "renderer": { "emit_markers": false },
///   "urls": { "context_path": "/shop", "add_last_modified": "always" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Locale of the response.
    pub locale: String,
    /// Renderer settings.
    pub renderer: RendererConfig,
    /// URL decoration settings.
    pub urls: UrlConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            renderer: RendererConfig::default(),
            urls: UrlConfig::default(),
        }
    }
}

impl PageConfig {
    /// Reads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
