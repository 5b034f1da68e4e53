//! Activation resolution and tag rendering for webres.
//!
//! Given the registries in scope for a request (typically one per
//! application and one per session), the [`Renderer`] works out which
//! resource groups are active, unions their styles or scripts, filters them
//! for the response and writes one tag per resource to a [`TagSink`].
//!
//! # Collaborators
//!
//! The renderer itself knows nothing about HTTP or HTML libraries:
//!
//! | Interface | Provided implementations |
//! |-----------|--------------------------|
//! | [`RenderContext`] | [`ResponseContext`] |
//! | [`UrlBuilder`](url::UrlBuilder) | [`PassThroughUrls`](url::PassThroughUrls), [`LastModifiedUrls`](url::LastModifiedUrls) |
//! | [`TagSink`] | [`HtmlSink`](sink::HtmlSink), [`TagBuffer`](sink::TagBuffer) |
//!
//! # Outcomes
//!
//! Rendering nothing is not an error. Every render returns a
//! [`RenderOutcome`]; when no tag was written it carries a [`Marker`],
//! which is also written to the sink as an HTML comment so the reason is
//! visible in the page source.

pub mod activation;
mod context;
mod error;
mod renderer;
pub mod sink;
pub mod url;

pub use activation::{Overrides, Registries, Resolution, resolve_active_groups};
pub use context::{RenderContext, ResponseContext};
pub use error::RenderError;
pub use renderer::{Marker, RenderOutcome, Renderer, RendererConfig};
pub use sink::TagSink;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::sink::{HtmlSink, TagBuffer, TagSink};
    pub use crate::url::{LastModifiedUrls, PassThroughUrls, UrlBuilder, UrlConfig};
    pub use crate::{
        Marker, Overrides, RenderContext, RenderError, RenderOutcome, Renderer, RendererConfig,
        ResponseContext,
    };
}
