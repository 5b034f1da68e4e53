//! Renders `<link rel="stylesheet">` and `<script>` tags for the activated
//! groups of one or more web resource registries.
//!
//! ```
//! use webres::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry.register(Group::new("site").with_script(Script::new("/site.js", Position::BodyEnd)));
//! registry.activate("site");
//!
//! let ctx = ResponseContext::new("en", &PassThroughUrls);
//! let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
//! let mut sink = TagBuffer::new();
//! let outcome = Renderer::default()
//!     .render_scripts_body_end(&ctx, &mut sink, true, None, Some(&registries))
//!     .unwrap();
//! assert_eq!(outcome, RenderOutcome::Rendered(1));
//! ```

pub use webres_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use webres_internal::prelude::*;
}
