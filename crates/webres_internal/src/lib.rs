//! # webres Internal Library
//!
//! Re-exports the core webres crates for convenience.

/// Layer 1: resource descriptors, sets, groups and registries.
pub use webres_registry;

/// Layer 2: activation resolution and tag rendering.
pub use webres_renderer;

/// Ambient infrastructure (tracing setup).
pub use webres_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use webres_core::{TracingConfig, TracingFormat};
    pub use webres_registry::prelude::*;
    pub use webres_renderer::prelude::*;
}
