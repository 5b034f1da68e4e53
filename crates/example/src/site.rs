//! Resource groups of the demo site.

use crate::PageError;
use webres_registry::{CrossOrigin, Direction, Group, GroupName, Position, Registry, Script, Style};

/// Groups available on every page. Only `site` is active by default.
#[must_use]
pub fn application_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        Group::new("site")
            .with_style(Style::new("/css/site.css"))
            .with_style(Style::new("/css/site-rtl.css").with_direction(Direction::Rtl))
            .with_style(Style::new("/css/print.css").with_media("print"))
            .with_script(Script::new("/js/site.js", Position::BodyEnd).with_defer(true)),
    );
    registry.register(
        Group::new("analytics").with_script(
            Script::new("https://stats.example.com/a.js", Position::HeadEnd)
                .with_async(true)
                .with_crossorigin(CrossOrigin::Anonymous),
        ),
    );
    registry.register(
        Group::new("legacy-ie")
            .with_style(Style::new("/css/ie.css").with_ie_condition("lt IE 9")),
    );
    registry.activate("site");
    registry
}

/// What the current session added: a theme, active for this session only.
#[must_use]
pub fn session_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(Group::new("session-theme").with_style(Style::new("/css/theme-dark.css")));
    registry.activate("session-theme");
    registry
}

/// Parses a request override of the form `<group>=on|off|inherit`.
///
/// # Errors
///
/// Returns [`PageError::Override`] for anything else.
pub fn parse_override(arg: &str) -> Result<(GroupName, Option<bool>), PageError> {
    let Some((name, state)) = arg.split_once('=') else {
        return Err(PageError::Override(arg.to_string()));
    };
    let activated = match state {
        "on" => Some(true),
        "off" => Some(false),
        "inherit" => None,
        _ => return Err(PageError::Override(arg.to_string())),
    };
    if name.is_empty() {
        return Err(PageError::Override(arg.to_string()));
    }
    Ok((GroupName::from(name), activated))
}
