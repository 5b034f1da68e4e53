//! Stylesheet descriptors.
//!
//! A [`Style`] is an immutable value: two styles with the same content in
//! every field are the same element of a [`Styles`](crate::set::Styles) set.
//! The derived ordering compares fields in declaration order, which is also
//! the order in which unioned styles are emitted.

use crate::cross_origin::CrossOrigin;
use crate::error::{RegistryError, normalize};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Direction
// ─────────────────────────────────────────────────────────────────────────────

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "iw", "ji", "ur", "yi"];

/// Text direction a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Resolves the text direction of a locale.
    ///
    /// Accepts both `ar-EG` and `ar_EG` forms; only the primary language
    /// subtag is considered. Unknown and empty locales are left-to-right.
    ///
    /// ```
    /// use webres_registry::Direction;
    ///
    /// assert_eq!(Direction::for_locale("he-IL"), Direction::Rtl);
    /// assert_eq!(Direction::for_locale("en_US"), Direction::Ltr);
    /// ```
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&language.as_str()) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// Returns the value used for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(RegistryError::InvalidDirection(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style
// ─────────────────────────────────────────────────────────────────────────────

/// A stylesheet resource.
///
/// # Example
///
/// ```
/// use webres_registry::{Direction, Style};
///
/// let style = Style::new("/styles/rtl.css")
///     .with_media("screen")
///     .with_direction(Direction::Rtl);
///
/// assert_eq!(style.uri(), Some("/styles/rtl.css"));
/// assert_eq!(style.direction(), Some(Direction::Rtl));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    uri: Option<String>,
    media: Option<String>,
    direction: Option<Direction>,
    disabled: bool,
    ie_condition: Option<String>,
    crossorigin: Option<CrossOrigin>,
}

impl Style {
    /// Creates a style for the given URI with no other attributes.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Creates a style with no URI.
    ///
    /// Renders as a `<link>` without an `href`.
    #[must_use]
    pub fn without_uri() -> Self {
        Self::default()
    }

    /// Sets the `media` query.
    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Restricts the style to responses of one text direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Marks the stylesheet as disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets a legacy Internet Explorer conditional comment expression,
    /// such as `lt IE 9`.
    #[must_use]
    pub fn with_ie_condition(mut self, condition: impl Into<String>) -> Self {
        self.ie_condition = Some(condition.into());
        self
    }

    /// Sets the `crossorigin` attribute.
    #[must_use]
    pub fn with_crossorigin(mut self, crossorigin: CrossOrigin) -> Self {
        self.crossorigin = Some(crossorigin);
        self
    }

    /// The stylesheet URI, before any URL decoration.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The `media` query.
    #[must_use]
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    /// The direction this style is restricted to, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether the stylesheet is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The legacy conditional comment expression.
    #[must_use]
    pub fn ie_condition(&self) -> Option<&str> {
        self.ie_condition.as_deref()
    }

    /// The `crossorigin` attribute.
    #[must_use]
    pub fn crossorigin(&self) -> Option<CrossOrigin> {
        self.crossorigin
    }

    /// Whether this style applies to a response of the given direction.
    ///
    /// Styles without a direction apply to every response.
    #[must_use]
    pub fn applies_to(&self, direction: Direction) -> bool {
        self.direction.is_none_or(|d| d == direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_languages_resolve_rtl() {
        for locale in ["ar", "AR-eg", "fa_IR", "he", "iw-IL", "ur", "yi", "ji"] {
            assert_eq!(Direction::for_locale(locale), Direction::Rtl, "{locale}");
        }
    }

    #[test]
    fn other_locales_resolve_ltr() {
        for locale in ["", "en", "en-US", "fr_CA", "arn", "zh-Hant-TW"] {
            assert_eq!(Direction::for_locale(locale), Direction::Ltr, "{locale}");
        }
    }

    #[test]
    fn direction_parse() {
        assert_eq!("RTL".parse(), Ok(Direction::Rtl));
        assert_eq!(" ltr ".parse(), Ok(Direction::Ltr));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn orders_by_uri_first() {
        let a = Style::new("/a.css").with_direction(Direction::Rtl);
        let b = Style::new("/b.css");
        assert!(a < b);
    }

    #[test]
    fn missing_fields_sort_first() {
        assert!(Style::without_uri() < Style::new("/a.css"));
        assert!(Style::new("/a.css") < Style::new("/a.css").with_media("print"));
    }

    #[test]
    fn builder_order_does_not_affect_equality() {
        let a = Style::new("/a.css")
            .with_media("print")
            .with_direction(Direction::Ltr);
        let b = Style::new("/a.css")
            .with_direction(Direction::Ltr)
            .with_media("print");
        assert_eq!(a, b);
    }

    #[test]
    fn undirected_style_applies_everywhere() {
        let style = Style::new("/a.css");
        assert!(style.applies_to(Direction::Ltr));
        assert!(style.applies_to(Direction::Rtl));

        let rtl = Style::new("/b.css").with_direction(Direction::Rtl);
        assert!(rtl.applies_to(Direction::Rtl));
        assert!(!rtl.applies_to(Direction::Ltr));
    }

    #[test]
    fn deserializes_with_defaults() {
        let style: Style =
            serde_json::from_str(r#"{"uri": "/a.css", "direction": "rtl"}"#).unwrap();
        assert_eq!(style, Style::new("/a.css").with_direction(Direction::Rtl));
    }
}
