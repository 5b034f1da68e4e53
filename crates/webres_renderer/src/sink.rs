//! Output of rendered tags.
//!
//! The renderer hands every tag to a [`TagSink`] as a plain record, in
//! emission order, as soon as it is decided. Two sinks are provided:
//!
//! - [`HtmlSink`] writes HTML to any [`std::io::Write`].
//! - [`TagBuffer`] records tags in memory so they can be inspected or
//!   [replayed](TagBuffer::replay) into another sink later.

use crate::error::RenderError;
use html_escape::encode_double_quoted_attribute;
use std::io::Write;
use webres_registry::CrossOrigin;

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A `<link rel="stylesheet">` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetLink {
    /// Decorated URL, or `None` when the style has no URI.
    pub href: Option<String>,
    /// `media` attribute.
    pub media: Option<String>,
    /// `crossorigin` attribute.
    pub crossorigin: Option<CrossOrigin>,
    /// `disabled` attribute.
    pub disabled: bool,
    /// Legacy conditional comment expression wrapping the tag.
    pub ie_condition: Option<String>,
}

/// A `<script>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTag {
    /// Decorated URL, or `None` when the script has no URI.
    pub src: Option<String>,
    /// `async` attribute.
    pub is_async: bool,
    /// `defer` attribute.
    pub defer: bool,
    /// `crossorigin` attribute.
    pub crossorigin: Option<CrossOrigin>,
}

/// Any item written to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A stylesheet link.
    StylesheetLink(StylesheetLink),
    /// A script.
    Script(ScriptTag),
    /// A diagnostic HTML comment, including its `<!--` and `-->`.
    Marker(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// TagSink
// ─────────────────────────────────────────────────────────────────────────────

/// Append-only destination for rendered tags.
pub trait TagSink {
    /// Writes a stylesheet link.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn write_stylesheet_link(&mut self, link: &StylesheetLink) -> Result<(), RenderError>;

    /// Writes a script tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn write_script(&mut self, script: &ScriptTag) -> Result<(), RenderError>;

    /// Writes a complete HTML comment verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn write_marker(&mut self, marker: &str) -> Result<(), RenderError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// TagBuffer
// ─────────────────────────────────────────────────────────────────────────────

/// A sink that records tags in memory.
///
/// # Example
///
/// ```
/// use webres_renderer::sink::{Tag, TagBuffer, TagSink};
///
/// let mut buffer = TagBuffer::new();
/// buffer.write_marker("<!-- hello -->").unwrap();
/// assert_eq!(buffer.tags(), [Tag::Marker("<!-- hello -->".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuffer {
    tags: Vec<Tag>,
}

impl TagBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded tags, in write order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Consumes the buffer, returning its tags.
    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Writes every recorded tag to another sink, in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error of `sink`.
    pub fn replay(&self, sink: &mut dyn TagSink) -> Result<(), RenderError> {
        for tag in &self.tags {
            match tag {
                Tag::StylesheetLink(link) => sink.write_stylesheet_link(link)?,
                Tag::Script(script) => sink.write_script(script)?,
                Tag::Marker(marker) => sink.write_marker(marker)?,
            }
        }
        Ok(())
    }
}

impl TagSink for TagBuffer {
    fn write_stylesheet_link(&mut self, link: &StylesheetLink) -> Result<(), RenderError> {
        self.tags.push(Tag::StylesheetLink(link.clone()));
        Ok(())
    }

    fn write_script(&mut self, script: &ScriptTag) -> Result<(), RenderError> {
        self.tags.push(Tag::Script(script.clone()));
        Ok(())
    }

    fn write_marker(&mut self, marker: &str) -> Result<(), RenderError> {
        self.tags.push(Tag::Marker(marker.to_string()));
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HtmlSink
// ─────────────────────────────────────────────────────────────────────────────

/// A sink writing HTML, one tag per line.
///
/// Attribute values are escaped for double-quoted attributes. Nothing is
/// buffered beyond what the writer itself buffers, so a failure part way
/// through leaves the tags written so far in the output.
///
/// A link whose legacy conditional comment expression contains anything
/// beyond that grammar's characters (letters, digits, spaces, `.`, `!`,
/// `&`, `|`, parentheses) is refused with
/// [`RenderError::MalformedCondition`] before anything is written.
///
/// # Example
///
/// ```
/// use webres_renderer::sink::{HtmlSink, StylesheetLink, TagSink};
///
/// let mut sink = HtmlSink::new(Vec::new());
/// sink.write_stylesheet_link(&StylesheetLink {
///     href: Some("/a.css?x=1&y=2".to_string()),
///     media: Some("print".to_string()),
///     ..StylesheetLink::default()
/// })
/// .unwrap();
///
/// let html = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(html, "<link rel=\"stylesheet\" href=\"/a.css?x=1&amp;y=2\" media=\"print\">\n");
/// ```
#[derive(Debug)]
pub struct HtmlSink<W> {
    writer: W,
    indent: String,
}

impl<W: Write> HtmlSink<W> {
    /// Creates a sink writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            indent: String::new(),
        }
    }

    /// Prefixes every line with `indent`.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn attribute(&mut self, name: &str, value: &str) -> std::io::Result<()> {
        write!(
            self.writer,
            " {name}=\"{}\"",
            encode_double_quoted_attribute(value)
        )
    }
}

impl<W: Write> TagSink for HtmlSink<W> {
    fn write_stylesheet_link(&mut self, link: &StylesheetLink) -> Result<(), RenderError> {
        if let Some(condition) = &link.ie_condition
            && !is_valid_condition(condition)
        {
            return Err(RenderError::MalformedCondition(condition.clone()));
        }
        self.writer.write_all(self.indent.as_bytes())?;
        if let Some(condition) = &link.ie_condition {
            write!(self.writer, "<!--[if {condition}]>")?;
        }
        self.writer.write_all(b"<link rel=\"stylesheet\"")?;
        if let Some(href) = &link.href {
            self.attribute("href", href)?;
        }
        if let Some(media) = &link.media {
            self.attribute("media", media)?;
        }
        if let Some(crossorigin) = link.crossorigin {
            self.attribute("crossorigin", crossorigin.as_str())?;
        }
        if link.disabled {
            self.writer.write_all(b" disabled")?;
        }
        self.writer.write_all(b">")?;
        if link.ie_condition.is_some() {
            self.writer.write_all(b"<![endif]-->")?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_script(&mut self, script: &ScriptTag) -> Result<(), RenderError> {
        self.writer.write_all(self.indent.as_bytes())?;
        self.writer.write_all(b"<script")?;
        if let Some(src) = &script.src {
            self.attribute("src", src)?;
        }
        if script.is_async {
            self.writer.write_all(b" async")?;
        }
        if script.defer {
            self.writer.write_all(b" defer")?;
        }
        if let Some(crossorigin) = script.crossorigin {
            self.attribute("crossorigin", crossorigin.as_str())?;
        }
        self.writer.write_all(b"></script>\n")?;
        Ok(())
    }

    fn write_marker(&mut self, marker: &str) -> Result<(), RenderError> {
        self.writer.write_all(self.indent.as_bytes())?;
        self.writer.write_all(marker.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Whether a conditional comment expression, such as `lt IE 9` or
/// `(gt IE 5)&(lt IE 7)`, is limited to the characters of that grammar.
fn is_valid_condition(condition: &str) -> bool {
    !condition.trim().is_empty()
        && condition.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '!' | '&' | '|' | '(' | ')')
        })
}
