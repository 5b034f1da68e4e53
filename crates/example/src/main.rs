//! Renders a demo page to standard output.
//!
//! # Usage
//!
//! ```bash
//! render-page <static_root> [group=on|off|inherit ...]
//! ```
//!
//! `WEBRES_CONFIG` may name a JSON [`PageConfig`] file and `WEBRES_LOG` an
//! env filter such as `webres_renderer=debug`.
//!
//! # Example
//!
//! ```bash
//! WEBRES_LOG=webres_renderer=debug render-page ./public analytics=on site=off
//! ```

use example::{
    PageConfig, PageError, application_registry, parse_override, render_page, session_registry,
};
use std::io::Write;
use std::path::PathBuf;
use webres_core::{TracingConfig, TracingFormat};
use webres_registry::{ResourceRegistry, SharedRegistry};
use webres_renderer::url::{LastModifiedUrls, StaticRoot};
use webres_renderer::{Overrides, Renderer, ResponseContext};

fn main() {
    let mut logging = TracingConfig::default().with_format(TracingFormat::Compact);
    if let Ok(filter) = std::env::var("WEBRES_LOG") {
        logging = logging.with_env_filter(filter);
    }
    logging.init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PageError> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: <static_root> [group=on|off|inherit ...]");
        eprintln!("Example: ./public analytics=on site=off");
        std::process::exit(1);
    }

    let static_root = PathBuf::from(&args[1]);
    let overrides = args[2..]
        .iter()
        .map(|arg| parse_override(arg))
        .collect::<Result<Overrides, _>>()?;

    let config = match std::env::var_os("WEBRES_CONFIG") {
        Some(path) => PageConfig::load(path.as_ref())?,
        None => PageConfig::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    // Created once at startup and shared by every request.
    let application = SharedRegistry::new(application_registry());
    let renderer = Renderer::new(config.renderer);
    let urls = LastModifiedUrls::new(config.urls, StaticRoot::new(static_root));

    // Per request.
    let session = session_registry();
    let snapshot = application.snapshot();
    let registries: [Option<&dyn ResourceRegistry>; 2] = [Some(&*snapshot), Some(&session)];
    let ctx = ResponseContext::new(config.locale, &urls);

    let html = render_page(&renderer, &ctx, &registries, &overrides)?;
    std::io::stdout().lock().write_all(html.as_bytes())?;
    Ok(())
}
