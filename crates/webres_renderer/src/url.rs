//! URL decoration for rendered resources.
//!
//! A [`UrlBuilder`] turns the raw URI stored in a descriptor into the URL
//! written to the page. [`LastModifiedUrls`] is the usual choice: it
//! resolves URIs against the application root, prefixes the context path
//! and appends a `lastModified` parameter so browsers can cache static
//! files indefinitely while still seeing new versions.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::time::{Duration, SystemTime};
//! use webres_renderer::url::{LastModifiedUrls, UrlBuilder, UrlConfig};
//!
//! let mut times = HashMap::new();
//! times.insert("/css/site.css".to_string(), SystemTime::UNIX_EPOCH + Duration::from_secs(255));
//!
//! let urls = LastModifiedUrls::new(UrlConfig::default().with_context_path("/shop"), times);
//! assert_eq!(urls.build_url("/css/site.css").unwrap(), "/shop/css/site.css?lastModified=ff");
//! assert_eq!(urls.build_url("css/site.css").unwrap(), "/shop/css/site.css?lastModified=ff");
//! ```

use crate::error::RenderError;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use url::{ParseError, Position, Url};

/// Query parameter carrying the last-modified stamp.
pub const LAST_MODIFIED_PARAMETER: &str = "lastModified";

/// Extensions stamped under [`AddLastModified::Auto`].
const STATIC_EXTENSIONS: &[&str] = &[
    "css", "eot", "gif", "ico", "jpeg", "jpg", "js", "mjs", "otf", "png", "svg", "ttf", "webp",
    "woff", "woff2",
];

/// Stand-in origin for the application root. Relative URIs are resolved
/// against it; the `.invalid` host never matches a real one.
const APPLICATION_ROOT: &str = "http://webres.invalid/";

// ─────────────────────────────────────────────────────────────────────────────
// UrlBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the URL written for a resource URI.
pub trait UrlBuilder: Send + Sync {
    /// Decorates a raw resource URI.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MalformedUri`] if the URI cannot be used.
    fn build_url(&self, uri: &str) -> Result<String, RenderError>;
}

/// Writes URIs unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughUrls;

impl UrlBuilder for PassThroughUrls {
    fn build_url(&self, uri: &str) -> Result<String, RenderError> {
        Ok(uri.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// When to append the last-modified parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddLastModified {
    /// Only for static file types such as stylesheets, scripts, images and fonts.
    #[default]
    Auto,
    /// For every local resource with a known modification time.
    Always,
    /// Never.
    Never,
}

/// URL decoration settings.
///
/// # Example
///
/// ```
/// use webres_renderer::url::{AddLastModified, UrlConfig};
///
/// let config: UrlConfig =
///     serde_json::from_str(r#"{"context_path": "/app", "add_last_modified": "never"}"#).unwrap();
/// assert_eq!(config.context_path, "/app");
/// assert_eq!(config.add_last_modified, AddLastModified::Never);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Prefix for root-relative URIs, such as `/app`. Empty for the root.
    pub context_path: String,
    /// When to append the last-modified parameter.
    pub add_last_modified: AddLastModified,
}

impl UrlConfig {
    /// Sets the context path. A trailing `/` is dropped.
    #[must_use]
    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        let mut context_path = context_path.into();
        while context_path.ends_with('/') {
            context_path.pop();
        }
        self.context_path = context_path;
        self
    }

    /// Sets when to append the last-modified parameter.
    #[must_use]
    pub fn with_add_last_modified(mut self, add_last_modified: AddLastModified) -> Self {
        self.add_last_modified = add_last_modified;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Last-modified sources
// ─────────────────────────────────────────────────────────────────────────────

/// Provides modification times of application resources.
pub trait LastModifiedSource: Send + Sync {
    /// Returns the modification time of the resource at an application path
    /// (the URI path without context path or query).
    fn last_modified(&self, path: &str) -> Option<SystemTime>;
}

impl LastModifiedSource for HashMap<String, SystemTime> {
    fn last_modified(&self, path: &str) -> Option<SystemTime> {
        self.get(path).copied()
    }
}

/// Reads modification times from files under a document root.
#[derive(Debug, Clone)]
pub struct StaticRoot {
    root: PathBuf,
}

impl StaticRoot {
    /// Creates a source for files under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The document root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LastModifiedSource for StaticRoot {
    fn last_modified(&self, path: &str) -> Option<SystemTime> {
        let relative = Path::new(path.trim_start_matches('/'));
        // Never look outside the document root.
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }
        std::fs::metadata(self.root.join(relative))
            .and_then(|metadata| metadata.modified())
            .ok()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LastModifiedUrls
// ─────────────────────────────────────────────────────────────────────────────

/// Cache-busting [`UrlBuilder`].
///
/// - Absolute URLs are normalized and otherwise written unchanged, and
///   protocol-relative URLs keep their missing scheme.
/// - Every other URI is resolved against the application root, so
///   `css/a.css` and `/css/a.css` name the same resource, and is prefixed
///   with the context path. Dot segments cannot climb above the root.
/// - Characters not allowed in a URL, such as spaces, are percent-encoded.
/// - Local resources selected by [`AddLastModified`] get
///   `lastModified=<hex seconds since the epoch>` appended when the source
///   knows their modification time and the URI does not already carry one.
///
/// Only URIs that cannot be parsed at all, such as a host containing a
/// space, are [malformed](RenderError::MalformedUri).
#[derive(Debug, Clone)]
pub struct LastModifiedUrls<S> {
    config: UrlConfig,
    source: S,
}

impl<S: LastModifiedSource> LastModifiedUrls<S> {
    /// Creates a builder with the given settings and time source.
    #[must_use]
    pub fn new(config: UrlConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The settings in use.
    #[must_use]
    pub fn config(&self) -> &UrlConfig {
        &self.config
    }

    fn wants_stamp(&self, path: &str) -> bool {
        match self.config.add_last_modified {
            AddLastModified::Never => false,
            AddLastModified::Always => true,
            AddLastModified::Auto => {
                let file = path.rsplit('/').next().unwrap_or(path);
                file.rsplit_once('.').is_some_and(|(_, ext)| {
                    STATIC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                })
            }
        }
    }

    fn stamp(&self, path: &str) -> Option<u64> {
        if !self.wants_stamp(path) {
            return None;
        }
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let modified = self.source.last_modified(&decoded)?;
        Some(
            modified
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default(),
        )
    }
}

impl<S: LastModifiedSource> UrlBuilder for LastModifiedUrls<S> {
    fn build_url(&self, uri: &str) -> Result<String, RenderError> {
        match Url::parse(uri) {
            Ok(absolute) => return Ok(absolute.into()),
            Err(ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(RenderError::malformed_uri(uri, e)),
        }

        let root = Url::parse(APPLICATION_ROOT).map_err(|e| RenderError::malformed_uri(uri, e))?;
        let resolved = root
            .join(uri)
            .map_err(|e| RenderError::malformed_uri(uri, e))?;
        if resolved.host_str() != root.host_str() {
            return Ok(format!("//{}", &resolved[Position::BeforeUsername..]));
        }

        let path = resolved.path();
        let query = resolved.query();
        let mut decorated = String::with_capacity(self.config.context_path.len() + uri.len() + 24);
        decorated.push_str(&self.config.context_path);
        decorated.push_str(path);
        if let Some(query) = query {
            decorated.push('?');
            decorated.push_str(query);
        }

        let already_stamped = query.is_some_and(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .any(|(name, _)| name == LAST_MODIFIED_PARAMETER)
        });
        if !already_stamped && let Some(seconds) = self.stamp(path) {
            decorated.push(if query.is_some() { '&' } else { '?' });
            decorated.push_str(LAST_MODIFIED_PARAMETER);
            decorated.push('=');
            decorated.push_str(&format!("{seconds:x}"));
        }

        if let Some(fragment) = resolved.fragment() {
            decorated.push('#');
            decorated.push_str(fragment);
        }
        Ok(decorated)
    }
}
