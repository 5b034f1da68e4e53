//! Stylesheet and script rendering.
//!
//! A render runs in three steps:
//!
//! 1. Resolve the active groups (see [`activation`](crate::activation)).
//! 2. Look every active group up in every present registry and union the
//!    style (or script) sets of the groups found.
//! 3. Walk the union in its total order, filter each resource against the
//!    response (direction for styles, position for scripts) and write a tag
//!    for each one that passes.
//!
//! Whenever a render ends up writing no tags, exactly one [`Marker`] explains
//! why. Markers are outcomes, not errors.

use crate::activation::{Overrides, Registries, Resolution, resolve_active_groups};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::sink::{ScriptTag, StylesheetLink, TagSink};
use core::fmt;
use serde::Deserialize;
use std::collections::BTreeSet;
use webres_registry::{
    Direction, Group, GroupName, Position, ResourceRegistry, ResourceSet, Scripts, Styles,
};

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Why a render wrote no tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// No registry was present.
    NoRegistries,
    /// No group was active.
    NoActivations,
    /// The active groups have no styles.
    NoStyles,
    /// Styles exist, but none match the response direction.
    NoApplicableStyles,
    /// The active groups have no scripts.
    NoScripts,
    /// Scripts exist, but none are at the requested position.
    NoApplicableScripts,
}

impl Marker {
    /// The HTML comment written for this marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoRegistries => "<!-- ao-web-resources-renderer: no registries -->",
            Self::NoActivations => "<!-- ao-web-resources-renderer: no activations -->",
            Self::NoStyles => "<!-- ao-web-resources-renderer: no styles -->",
            Self::NoApplicableStyles => {
                "<!-- ao-web-resources-renderer: no applicable styles -->"
            }
            Self::NoScripts => "<!-- ao-web-resources-renderer: no scripts -->",
            Self::NoApplicableScripts => {
                "<!-- ao-web-resources-renderer: no applicable scripts -->"
            }
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// This many tags were written. Never zero.
    Rendered(usize),
    /// Nothing was rendered, for the given reason.
    Empty(Marker),
}

impl RenderOutcome {
    /// The marker, if nothing was rendered.
    #[must_use]
    pub fn marker(self) -> Option<Marker> {
        match self {
            Self::Rendered(_) => None,
            Self::Empty(marker) => Some(marker),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Renderer settings.
///
/// # Example
///
/// ```
/// use webres_renderer::RendererConfig;
///
/// let config: RendererConfig = serde_json::from_str(r#"{"emit_markers": false}"#).unwrap();
/// assert!(!config.emit_markers);
/// assert!(RendererConfig::default().emit_markers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Whether markers are written to the sink. The outcome is returned
    /// either way.
    pub emit_markers: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { emit_markers: true }
    }
}

impl RendererConfig {
    /// Sets whether markers are written to the sink.
    #[must_use]
    pub fn with_emit_markers(mut self, emit_markers: bool) -> Self {
        self.emit_markers = emit_markers;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Renders the tags of the activated resource groups.
///
/// A renderer holds no per-request state; one instance, created by the host
/// application at startup, serves every request.
///
/// # Example
///
/// ```
/// use webres_registry::{Group, Registry, ResourceRegistry, Style};
/// use webres_renderer::{Renderer, RenderOutcome, ResponseContext};
/// use webres_renderer::sink::HtmlSink;
/// use webres_renderer::url::PassThroughUrls;
///
/// let mut registry = Registry::new();
/// registry.register(Group::new("site").with_style(Style::new("/site.css")));
/// registry.activate("site");
///
/// let renderer = Renderer::default();
/// let ctx = ResponseContext::new("en", &PassThroughUrls);
/// let mut sink = HtmlSink::new(Vec::new());
/// let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
///
/// let outcome = renderer
///     .render_styles(&ctx, &mut sink, true, None, Some(&registries))
///     .unwrap();
///
/// assert_eq!(outcome, RenderOutcome::Rendered(1));
/// assert_eq!(
///     String::from_utf8(sink.into_inner()).unwrap(),
///     "<link rel=\"stylesheet\" href=\"/site.css\">\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Creates a renderer with the given settings.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// The settings in use.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders the stylesheet links of all active groups.
    ///
    /// Styles restricted to a direction are only written when it matches
    /// the response direction.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The response being written
    /// * `sink` - Destination for tags and markers
    /// * `apply_registered` - Whether the registries' own activations apply
    /// * `overrides` - Activations applied after those of the registries
    /// * `registries` - Searched in order, first for activations and then
    ///   for the active groups
    ///
    /// # Errors
    ///
    /// Returns the first error of the sink or of URL decoration. Tags
    /// written before the failure stay written.
    pub fn render_styles(
        &self,
        ctx: &dyn RenderContext,
        sink: &mut dyn TagSink,
        apply_registered: bool,
        overrides: Option<&Overrides>,
        registries: Registries<'_, '_>,
    ) -> Result<RenderOutcome, RenderError> {
        let sets = match self.active_sets(registries, apply_registered, overrides, Group::styles) {
            Ok(sets) => sets,
            Err(marker) => return self.finish_empty(sink, marker),
        };
        if sets.is_empty() {
            return self.finish_empty(sink, Marker::NoStyles);
        }
        let styles = Styles::union(sets);
        tracing::trace!(?styles, "unioned styles");

        let mut has_style = false;
        let mut rendered = 0;
        let mut response_direction: Option<Direction> = None;
        for style in &styles {
            has_style = true;
            if let Some(direction) = style.direction() {
                let response = *response_direction.get_or_insert_with(|| ctx.response_direction());
                if direction != response {
                    continue;
                }
            }
            let href = style.uri().map(|uri| ctx.build_url(uri)).transpose()?;
            sink.write_stylesheet_link(&StylesheetLink {
                href,
                media: style.media().map(str::to_string),
                crossorigin: style.crossorigin(),
                disabled: style.is_disabled(),
                ie_condition: style.ie_condition().map(str::to_string),
            })?;
            rendered += 1;
        }

        if rendered == 0 {
            let marker = if has_style {
                Marker::NoApplicableStyles
            } else {
                Marker::NoStyles
            };
            return self.finish_empty(sink, marker);
        }
        tracing::debug!(rendered, "rendered styles");
        Ok(RenderOutcome::Rendered(rendered))
    }

    /// Renders the script tags of all active groups at one position.
    ///
    /// Only scripts registered for exactly `position` are written.
    ///
    /// # Errors
    ///
    /// Returns the first error of the sink or of URL decoration. Tags
    /// written before the failure stay written.
    pub fn render_scripts(
        &self,
        ctx: &dyn RenderContext,
        sink: &mut dyn TagSink,
        position: Position,
        apply_registered: bool,
        overrides: Option<&Overrides>,
        registries: Registries<'_, '_>,
    ) -> Result<RenderOutcome, RenderError> {
        let sets = match self.active_sets(registries, apply_registered, overrides, Group::scripts) {
            Ok(sets) => sets,
            Err(marker) => return self.finish_empty(sink, marker),
        };
        if sets.is_empty() {
            return self.finish_empty(sink, Marker::NoScripts);
        }
        let scripts = Scripts::union(sets);
        tracing::trace!(?scripts, "unioned scripts");

        let mut has_script = false;
        let mut rendered = 0;
        for script in &scripts {
            has_script = true;
            if script.position() != position {
                continue;
            }
            let src = script.uri().map(|uri| ctx.build_url(uri)).transpose()?;
            sink.write_script(&ScriptTag {
                src,
                is_async: script.is_async(),
                defer: script.is_defer(),
                crossorigin: script.crossorigin(),
            })?;
            rendered += 1;
        }

        if rendered == 0 {
            let marker = if has_script {
                Marker::NoApplicableScripts
            } else {
                Marker::NoScripts
            };
            return self.finish_empty(sink, marker);
        }
        tracing::debug!(rendered, %position, "rendered scripts");
        Ok(RenderOutcome::Rendered(rendered))
    }

    /// Renders the scripts placed before the closing `</head>`.
    ///
    /// # Errors
    ///
    /// See [`render_scripts`](Self::render_scripts).
    pub fn render_scripts_head_end(
        &self,
        ctx: &dyn RenderContext,
        sink: &mut dyn TagSink,
        apply_registered: bool,
        overrides: Option<&Overrides>,
        registries: Registries<'_, '_>,
    ) -> Result<RenderOutcome, RenderError> {
        self.render_scripts(
            ctx,
            sink,
            Position::HeadEnd,
            apply_registered,
            overrides,
            registries,
        )
    }

    /// Renders the scripts placed before the closing `</body>`.
    ///
    /// # Errors
    ///
    /// See [`render_scripts`](Self::render_scripts).
    pub fn render_scripts_body_end(
        &self,
        ctx: &dyn RenderContext,
        sink: &mut dyn TagSink,
        apply_registered: bool,
        overrides: Option<&Overrides>,
        registries: Registries<'_, '_>,
    ) -> Result<RenderOutcome, RenderError> {
        self.render_scripts(
            ctx,
            sink,
            Position::BodyEnd,
            apply_registered,
            overrides,
            registries,
        )
    }

    /// Resolves the active groups and gathers one set per group found in a
    /// present registry.
    fn active_sets<'r, T>(
        &self,
        registries: Registries<'_, 'r>,
        apply_registered: bool,
        overrides: Option<&Overrides>,
        select: fn(&Group) -> &ResourceSet<T>,
    ) -> Result<Vec<&'r ResourceSet<T>>, Marker> {
        let resolution = resolve_active_groups(registries, apply_registered, overrides);

        // Overrides alone can activate groups when every registry is absent.
        let present: Vec<&'r dyn ResourceRegistry> =
            registries.unwrap_or_default().iter().flatten().copied().collect();
        if present.is_empty() {
            return Err(Marker::NoRegistries);
        }
        match resolution {
            Resolution::Active(groups) => Ok(lookup(&present, &groups, select)),
            Resolution::NoRegistries => Err(Marker::NoRegistries),
            Resolution::NoActivations => Err(Marker::NoActivations),
        }
    }

    fn finish_empty(
        &self,
        sink: &mut dyn TagSink,
        marker: Marker,
    ) -> Result<RenderOutcome, RenderError> {
        tracing::debug!(%marker, "nothing rendered");
        if self.config.emit_markers {
            sink.write_marker(marker.as_str())?;
        }
        Ok(RenderOutcome::Empty(marker))
    }
}

fn lookup<'r, T>(
    registries: &[&'r dyn ResourceRegistry],
    groups: &BTreeSet<GroupName>,
    select: fn(&Group) -> &ResourceSet<T>,
) -> Vec<&'r ResourceSet<T>> {
    let mut sets = Vec::new();
    for &registry in registries {
        for name in groups {
            let group = registry.group(name);
            tracing::trace!(%name, found = group.is_some(), "group lookup");
            if let Some(group) = group {
                sets.push(select(group));
            }
        }
    }
    sets
}
