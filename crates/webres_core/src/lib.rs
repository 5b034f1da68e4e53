//! Ambient infrastructure shared by webres hosts.
//!
//! The library crates only emit `tracing` events. Installing a subscriber
//! is left to the host application, which can do so with
//! [`TracingConfig::init`].

mod tracing_config;

pub use tracing_config::{TracingConfig, TracingFormat};
