//! Per-response rendering context.

use crate::error::RenderError;
use crate::url::UrlBuilder;
use webres_registry::Direction;

/// What the renderer needs to know about the response being written.
pub trait RenderContext {
    /// Text direction of the response.
    ///
    /// Called at most once per render, and only if a resource is restricted
    /// to a direction.
    fn response_direction(&self) -> Direction;

    /// Decorates a resource URI for output.
    ///
    /// # Errors
    ///
    /// Propagates failures of the URL decoration, which abort the render.
    fn build_url(&self, uri: &str) -> Result<String, RenderError>;
}

/// A [`RenderContext`] for a response with a known locale.
///
/// # Example
///
/// ```
/// use webres_registry::Direction;
/// use webres_renderer::{RenderContext, ResponseContext};
/// use webres_renderer::url::PassThroughUrls;
///
/// let ctx = ResponseContext::new("ar-EG", &PassThroughUrls);
/// assert_eq!(ctx.response_direction(), Direction::Rtl);
/// ```
pub struct ResponseContext<'a> {
    locale: String,
    urls: &'a dyn UrlBuilder,
}

impl core::fmt::Debug for ResponseContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponseContext")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl<'a> ResponseContext<'a> {
    /// Creates a context for a response in `locale`, decorating URLs with
    /// `urls`.
    #[must_use]
    pub fn new(locale: impl Into<String>, urls: &'a dyn UrlBuilder) -> Self {
        Self {
            locale: locale.into(),
            urls,
        }
    }

    /// The response locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl RenderContext for ResponseContext<'_> {
    fn response_direction(&self) -> Direction {
        Direction::for_locale(&self.locale)
    }

    fn build_url(&self, uri: &str) -> Result<String, RenderError> {
        self.urls.build_url(uri)
    }
}
