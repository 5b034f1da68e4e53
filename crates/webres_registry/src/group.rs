//! Named groups of styles and scripts.

use crate::script::Script;
use crate::set::{Scripts, Styles};
use crate::style::Style;
use core::borrow::Borrow;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of a [`Group`].
///
/// Names are opaque, case-sensitive keys. Cloning is cheap, so the same name
/// can be held by a registry's group map, its activation map and any number
/// of per-request override maps.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(Arc<str>);

impl GroupName {
    /// Creates a group name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GroupName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GroupName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A named bundle of styles and scripts.
///
/// Groups are populated by registration code and then only read while
/// rendering.
///
/// # Example
///
/// ```
/// use webres_registry::{Group, Position, Script, Style};
///
/// let group = Group::new("checkout")
///     .with_style(Style::new("/css/checkout.css"))
///     .with_script(Script::new("/js/checkout.js", Position::BodyEnd));
///
/// assert_eq!(group.name().as_str(), "checkout");
/// assert_eq!(group.styles().len(), 1);
/// assert_eq!(group.scripts().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: GroupName,
    #[serde(default)]
    styles: Styles,
    #[serde(default)]
    scripts: Scripts,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<GroupName>) -> Self {
        Self {
            name: name.into(),
            styles: Styles::new(),
            scripts: Scripts::new(),
        }
    }

    /// Adds a style, builder style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.add(style);
        self
    }

    /// Adds a script, builder style.
    #[must_use]
    pub fn with_script(mut self, script: Script) -> Self {
        self.scripts.add(script);
        self
    }

    /// Adds a style, returning `false` if an equal style was already present.
    pub fn add_style(&mut self, style: Style) -> bool {
        self.styles.add(style)
    }

    /// Adds a script, returning `false` if an equal script was already present.
    pub fn add_script(&mut self, script: Script) -> bool {
        self.scripts.add(script)
    }

    /// The group name.
    #[must_use]
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// The group's styles.
    #[must_use]
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// The group's scripts.
    #[must_use]
    pub fn scripts(&self) -> &Scripts {
        &self.scripts
    }
}
