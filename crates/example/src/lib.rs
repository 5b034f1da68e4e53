//! Example page rendered with webres.
//!
//! The demo plays the part of a web application: one registry holds the
//! groups every page can use, a second holds what the current session added,
//! and each request may switch groups on or off for itself.
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │ application      │   │ session          │   │ request       │
//! │ SharedRegistry   │   │ Registry         │   │ Overrides     │
//! └────────┬─────────┘   └────────┬─────────┘   └───────┬───────┘
//!          └───────────────┬──────┘                     │
//!                          ▼                            │
//!                   ┌────────────┐◀─────────────────────┘
//!                   │  Renderer  │
//!                   └─────┬──────┘
//!                         ▼
//!                   ┌────────────┐
//!                   │  HtmlSink  │
//!                   └────────────┘
//! ```

mod config;
mod site;

pub use config::PageConfig;
pub use site::{application_registry, parse_override, session_registry};

use std::io::Write;
use webres_registry::ResourceRegistry;
use webres_renderer::sink::HtmlSink;
use webres_renderer::{Overrides, RenderContext, RenderError, Renderer};

/// Errors of the demo.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Reading a file or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A command-line override could not be parsed.
    #[error("invalid override '{0}', expected <group>=on|off|inherit")]
    Override(String),

    /// Rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Renders a minimal HTML page with every resource slot filled.
///
/// # Errors
///
/// Returns the first rendering error.
pub fn render_page(
    renderer: &Renderer,
    ctx: &dyn RenderContext,
    registries: &[Option<&dyn ResourceRegistry>],
    overrides: &Overrides,
) -> Result<String, PageError> {
    let mut out = Vec::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "  <head>")?;
    {
        let mut sink = HtmlSink::new(&mut out).with_indent("    ");
        renderer.render_styles(ctx, &mut sink, true, Some(overrides), Some(registries))?;
        renderer.render_scripts_head_end(ctx, &mut sink, true, Some(overrides), Some(registries))?;
    }
    writeln!(out, "  </head>")?;
    writeln!(out, "  <body>")?;
    {
        let mut sink = HtmlSink::new(&mut out).with_indent("    ");
        renderer.render_scripts_body_end(ctx, &mut sink, true, Some(overrides), Some(registries))?;
    }
    writeln!(out, "  </body>")?;
    writeln!(out, "</html>")?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
