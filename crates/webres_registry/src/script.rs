//! Script descriptors.

use crate::cross_origin::CrossOrigin;
use crate::error::{RegistryError, normalize};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Where in the page a script is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Directly after the opening `<head>`.
    HeadStart,
    /// Directly before the closing `</head>`.
    HeadEnd,
    /// Directly after the opening `<body>`.
    BodyStart,
    /// Directly before the closing `</body>`.
    BodyEnd,
}

impl Position {
    /// All positions in page order.
    pub const ALL: [Self; 4] = [
        Self::HeadStart,
        Self::HeadEnd,
        Self::BodyStart,
        Self::BodyEnd,
    ];

    /// Returns the kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeadStart => "head-start",
            Self::HeadEnd => "head-end",
            Self::BodyStart => "body-start",
            Self::BodyEnd => "body-end",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| RegistryError::InvalidPosition(s.to_string()))
    }
}

/// A script resource.
///
/// Like [`Style`](crate::Style), equality and ordering cover every field.
///
/// # Example
///
/// ```
/// use webres_registry::{Position, Script};
///
/// let script = Script::new("/js/app.js", Position::BodyEnd).with_defer(true);
/// assert!(script.is_defer());
/// assert!(!script.is_async());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    uri: Option<String>,
    position: Position,
    #[serde(default, rename = "async")]
    is_async: bool,
    #[serde(default)]
    defer: bool,
    #[serde(default)]
    crossorigin: Option<CrossOrigin>,
}

impl Script {
    /// Creates a script for the given URI at a position.
    #[must_use]
    pub fn new(uri: impl Into<String>, position: Position) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::without_uri(position)
        }
    }

    /// Creates a script with no URI.
    #[must_use]
    pub fn without_uri(position: Position) -> Self {
        Self {
            uri: None,
            position,
            is_async: false,
            defer: false,
            crossorigin: None,
        }
    }

    /// Sets the `async` attribute.
    #[must_use]
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Sets the `defer` attribute.
    #[must_use]
    pub fn with_defer(mut self, defer: bool) -> Self {
        self.defer = defer;
        self
    }

    /// Sets the `crossorigin` attribute.
    #[must_use]
    pub fn with_crossorigin(mut self, crossorigin: CrossOrigin) -> Self {
        self.crossorigin = Some(crossorigin);
        self
    }

    /// The script URI, before any URL decoration.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The page position this script is rendered at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the script is `async`.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// Whether the script is `defer`.
    #[must_use]
    pub fn is_defer(&self) -> bool {
        self.defer
    }

    /// The `crossorigin` attribute.
    #[must_use]
    pub fn crossorigin(&self) -> Option<CrossOrigin> {
        self.crossorigin
    }
}
