//! End-to-end rendering into HTML with cache-busting URLs.

use std::fs::File;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use webres_registry::{Direction, Group, Position, Registry, ResourceRegistry, Script, Style};
use webres_renderer::sink::HtmlSink;
use webres_renderer::url::{LastModifiedUrls, StaticRoot, UrlConfig};
use webres_renderer::{RenderError, RenderOutcome, Renderer, ResponseContext};

// ═══════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

/// Creates `path` under `root` with a modification time of `secs`.
fn touch(root: &TempDir, path: &str, secs: u64) {
    let full = root.path().join(path);
    std::fs::create_dir_all(full.parent().unwrap()).unwrap();
    let file = File::create(&full).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

fn site() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        Group::new("site")
            .with_style(Style::new("/css/site.css"))
            .with_style(Style::new("/css/rtl.css").with_direction(Direction::Rtl))
            .with_style(Style::new("https://cdn.example.com/font.css").with_media("screen"))
            .with_script(Script::new("/js/site.js", Position::BodyEnd).with_defer(true)),
    );
    registry.activate("site");
    registry
}

fn static_root() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    touch(&root, "css/site.css", 0x100);
    touch(&root, "css/rtl.css", 0x200);
    touch(&root, "js/site.js", 0x300);
    root
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn head_for_ltr_response() {
    let root = static_root();
    let urls = LastModifiedUrls::new(
        UrlConfig::default().with_context_path("/shop"),
        StaticRoot::new(root.path()),
    );
    let ctx = ResponseContext::new("en-US", &urls);
    let registry = site();
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let mut sink = HtmlSink::new(Vec::new()).with_indent("  ");

    let outcome = Renderer::default()
        .render_styles(&ctx, &mut sink, true, None, Some(&registries))
        .unwrap();

    assert_eq!(outcome, RenderOutcome::Rendered(2));
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "  <link rel=\"stylesheet\" href=\"/shop/css/site.css?lastModified=100\">\n  \
         <link rel=\"stylesheet\" href=\"https://cdn.example.com/font.css\" media=\"screen\">\n"
    );
}

#[test]
fn head_for_rtl_response_includes_rtl_style() {
    let root = static_root();
    let urls = LastModifiedUrls::new(UrlConfig::default(), StaticRoot::new(root.path()));
    let ctx = ResponseContext::new("he", &urls);
    let registry = site();
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let mut sink = HtmlSink::new(Vec::new());

    Renderer::default()
        .render_styles(&ctx, &mut sink, true, None, Some(&registries))
        .unwrap();

    let html = String::from_utf8(sink.into_inner()).unwrap();
    assert!(html.contains("href=\"/css/rtl.css?lastModified=200\""));
}

#[test]
fn body_end_scripts() {
    let root = static_root();
    let urls = LastModifiedUrls::new(UrlConfig::default(), StaticRoot::new(root.path()));
    let ctx = ResponseContext::new("en", &urls);
    let registry = site();
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let mut sink = HtmlSink::new(Vec::new());

    Renderer::default()
        .render_scripts_body_end(&ctx, &mut sink, true, None, Some(&registries))
        .unwrap();

    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "<script src=\"/js/site.js?lastModified=300\" defer></script>\n"
    );
}

#[test]
fn marker_is_written_as_comment() {
    let urls = LastModifiedUrls::new(UrlConfig::default(), StaticRoot::new("."));
    let ctx = ResponseContext::new("en", &urls);
    let registry = site();
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let mut sink = HtmlSink::new(Vec::new());

    Renderer::default()
        .render_scripts_head_end(&ctx, &mut sink, true, None, Some(&registries))
        .unwrap();

    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "<!-- ao-web-resources-renderer: no applicable scripts -->\n"
    );
}

#[test]
fn unsafe_characters_do_not_abort_render() {
    let mut registry = Registry::new();
    registry.register(
        Group::new("g")
            .with_style(Style::new("/my file.css"))
            .with_style(Style::new("/next.css")),
    );
    registry.activate("g");
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let urls = LastModifiedUrls::new(UrlConfig::default(), StaticRoot::new("."));
    let ctx = ResponseContext::new("en", &urls);
    let mut sink = HtmlSink::new(Vec::new());

    let outcome = Renderer::default()
        .render_styles(&ctx, &mut sink, true, None, Some(&registries))
        .unwrap();

    assert_eq!(outcome, RenderOutcome::Rendered(2));
    assert_eq!(
        String::from_utf8(sink.into_inner()).unwrap(),
        "<link rel=\"stylesheet\" href=\"/my%20file.css\">\n\
         <link rel=\"stylesheet\" href=\"/next.css\">\n"
    );
}

#[test]
fn malformed_uri_aborts_render() {
    let mut registry = Registry::new();
    registry.register(Group::new("g").with_style(Style::new("https://exa mple.com/a.css")));
    registry.activate("g");
    let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
    let urls = LastModifiedUrls::new(UrlConfig::default(), StaticRoot::new("."));
    let ctx = ResponseContext::new("en", &urls);
    let mut sink = HtmlSink::new(Vec::new());

    let result = Renderer::default().render_styles(&ctx, &mut sink, true, None, Some(&registries));

    assert!(matches!(result, Err(RenderError::MalformedUri { .. })));
    assert!(sink.into_inner().is_empty());
}
