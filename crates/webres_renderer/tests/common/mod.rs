//! Shared fixtures for `webres_renderer` integration tests.
//!
//! Import via `mod common;` in test files.

#![allow(
    dead_code,
    missing_docs,
    reason = "shared test utilities, not every item is used by every test binary"
)]

use std::cell::Cell;
use webres_registry::{Direction, Group, GroupName, Registry, ResourceRegistry, Style};
use webres_renderer::sink::{ScriptTag, StylesheetLink, Tag, TagBuffer, TagSink};
use webres_renderer::{Overrides, RenderContext, RenderError, RenderOutcome, Renderer};

// ═══════════════════════════════════════════════════════════════════════════════
// CONTEXTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Context with a fixed response direction.
///
/// URLs are decorated by appending `?v=1`; any URI containing `bad` fails.
pub struct FixedContext {
    direction: Direction,
    direction_lookups: Cell<usize>,
    url_builds: Cell<usize>,
}

impl FixedContext {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            direction_lookups: Cell::new(0),
            url_builds: Cell::new(0),
        }
    }

    pub fn ltr() -> Self {
        Self::new(Direction::Ltr)
    }

    pub fn rtl() -> Self {
        Self::new(Direction::Rtl)
    }

    /// How often the renderer asked for the response direction.
    pub fn direction_lookups(&self) -> usize {
        self.direction_lookups.get()
    }

    /// How often the renderer decorated a URL.
    pub fn url_builds(&self) -> usize {
        self.url_builds.get()
    }
}

impl RenderContext for FixedContext {
    fn response_direction(&self) -> Direction {
        self.direction_lookups.set(self.direction_lookups.get() + 1);
        self.direction
    }

    fn build_url(&self, uri: &str) -> Result<String, RenderError> {
        self.url_builds.set(self.url_builds.get() + 1);
        if uri.contains("bad") {
            return Err(RenderError::malformed_uri(uri, "rejected by test context"));
        }
        Ok(format!("{uri}?v=1"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SINKS
// ═══════════════════════════════════════════════════════════════════════════════

/// Sink that accepts `capacity` writes and fails on the next one.
#[derive(Default)]
pub struct FailingSink {
    pub capacity: usize,
    pub accepted: TagBuffer,
}

impl FailingSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            accepted: TagBuffer::new(),
        }
    }

    fn check(&self) -> Result<(), RenderError> {
        if self.accepted.tags().len() >= self.capacity {
            Err(RenderError::sink("sink full"))
        } else {
            Ok(())
        }
    }
}

impl TagSink for FailingSink {
    fn write_stylesheet_link(&mut self, link: &StylesheetLink) -> Result<(), RenderError> {
        self.check()?;
        self.accepted.write_stylesheet_link(link)
    }

    fn write_script(&mut self, script: &ScriptTag) -> Result<(), RenderError> {
        self.check()?;
        self.accepted.write_script(script)
    }

    fn write_marker(&mut self, marker: &str) -> Result<(), RenderError> {
        self.check()?;
        self.accepted.write_marker(marker)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRIES
// ═══════════════════════════════════════════════════════════════════════════════

/// Wraps present registries for the renderer.
pub fn present<'r>(registries: &[&'r Registry]) -> Vec<Option<&'r dyn ResourceRegistry>> {
    registries
        .iter()
        .map(|&registry| Some(registry as &dyn ResourceRegistry))
        .collect()
}

/// Builds an override map.
pub fn overrides(entries: &[(&str, Option<bool>)]) -> Overrides {
    entries
        .iter()
        .map(|&(name, activated)| (GroupName::from(name), activated))
        .collect()
}

/// Registry with group `g` holding `/a.css` and an RTL-only `/b.css`.
/// Nothing is activated.
pub fn scenario_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        Group::new("g")
            .with_style(Style::new("/a.css"))
            .with_style(Style::new("/b.css").with_direction(Direction::Rtl)),
    );
    registry
}

// ═══════════════════════════════════════════════════════════════════════════════
// ASSERTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Renders styles into a fresh buffer.
pub fn render_styles(
    ctx: &FixedContext,
    apply_registered: bool,
    overrides: Option<&Overrides>,
    registries: Option<&[Option<&dyn ResourceRegistry>]>,
) -> (RenderOutcome, Vec<Tag>) {
    let mut sink = TagBuffer::new();
    let outcome = Renderer::default()
        .render_styles(ctx, &mut sink, apply_registered, overrides, registries)
        .unwrap();
    (outcome, sink.into_tags())
}

/// The hrefs of the stylesheet links among `tags`.
pub fn hrefs(tags: &[Tag]) -> Vec<&str> {
    tags.iter()
        .filter_map(|tag| match tag {
            Tag::StylesheetLink(link) => link.href.as_deref(),
            _ => None,
        })
        .collect()
}

/// The srcs of the script tags among `tags`.
pub fn srcs(tags: &[Tag]) -> Vec<&str> {
    tags.iter()
        .filter_map(|tag| match tag {
            Tag::Script(script) => script.src.as_deref(),
            _ => None,
        })
        .collect()
}

/// A marker tag.
pub fn marker(text: &str) -> Tag {
    Tag::Marker(text.to_string())
}
