//! Resource descriptors, sets, groups and registries for webres.
//!
//! This crate holds the data side of web resource management:
//!
//! - [`Style`] and [`Script`] are immutable descriptors with a total order
//!   over all of their fields.
//! - [`ResourceSet`] ([`Styles`], [`Scripts`]) is an ordered,
//!   deduplicating set with [`union`](ResourceSet::union).
//! - [`Group`] bundles one style set and one script set under a
//!   [`GroupName`].
//! - [`Registry`] indexes groups and records explicit activations. The
//!   renderer reads registries only through [`ResourceRegistry`].
//! - [`SharedRegistry`] is a copy-on-write handle for registries shared
//!   between concurrent requests.
//!
//! # Example
//!
//! ```
//! use webres_registry::{Direction, Group, Position, Registry, Script, Style};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     Group::new("site")
//!         .with_style(Style::new("/css/site.css"))
//!         .with_style(Style::new("/css/site-rtl.css").with_direction(Direction::Rtl))
//!         .with_script(Script::new("/js/site.js", Position::BodyEnd).with_defer(true)),
//! );
//! registry.activate("site");
//! ```

mod cross_origin;
pub mod error;
mod group;
mod registry;
mod script;
mod set;
mod shared;
mod style;

pub use cross_origin::CrossOrigin;
pub use error::RegistryError;
pub use group::{Group, GroupName};
pub use registry::{Activations, Registry, ResourceRegistry};
pub use script::{Position, Script};
pub use set::{ResourceSet, Scripts, Styles};
pub use shared::SharedRegistry;
pub use style::{Direction, Style};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::{
        CrossOrigin, Direction, Group, GroupName, Position, Registry, ResourceRegistry, Script,
        SharedRegistry, Style, Styles, Scripts,
    };
}
