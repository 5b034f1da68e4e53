//! Resolution of the active groups for one render.
//!
//! Activations are merged in two phases:
//!
//! 1. When requested, the explicit activations stored in every registry are
//!    applied in registry order, then in each registry's
//!    [`Activations`](webres_registry::Activations) order. The last entry for
//!    a name wins, across registries as well as within one.
//! 2. Per-request [`Overrides`] are applied on top. A `None` override leaves
//!    the group as phase 1 resolved it.
//!
//! This lets a page honor the registries' own defaults while forcing groups
//! on or off for a single request, without touching shared registry state.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use webres_registry::{GroupName, ResourceRegistry};

/// Per-request activation overrides.
///
/// `Some(true)` activates, `Some(false)` deactivates and `None` leaves the
/// group unchanged.
pub type Overrides = IndexMap<GroupName, Option<bool>>;

/// The registries taking part in a render.
///
/// `None` means no registry sequence was given at all; `None` entries are
/// scopes that have no registry (such as a request without a session).
pub type Registries<'s, 'r> = Option<&'s [Option<&'r dyn ResourceRegistry>]>;

/// Outcome of resolving activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No registries were given, or all of them were absent while registered
    /// activations were requested.
    NoRegistries,
    /// Every group ended up inactive.
    NoActivations,
    /// The names of the active groups. Never empty.
    Active(BTreeSet<GroupName>),
}

/// Computes the set of active group names.
///
/// # Arguments
///
/// * `registries` - Registries whose activations are read when
///   `apply_registered` is set
/// * `apply_registered` - Whether to start from the registries' activations
/// * `overrides` - Activations applied after those of the registries
///
/// # Example
///
/// ```
/// use webres_registry::{GroupName, Registry, ResourceRegistry};
/// use webres_renderer::activation::{Overrides, Resolution, resolve_active_groups};
///
/// let mut registry = Registry::new();
/// registry.activate("site");
/// registry.activate("legacy");
///
/// let mut overrides = Overrides::new();
/// overrides.insert("legacy".into(), Some(false));
///
/// let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
/// let Resolution::Active(groups) =
///     resolve_active_groups(Some(&registries), true, Some(&overrides))
/// else {
///     panic!("expected active groups");
/// };
/// assert_eq!(groups.into_iter().collect::<Vec<_>>(), [GroupName::from("site")]);
/// ```
#[must_use]
pub fn resolve_active_groups(
    registries: Registries<'_, '_>,
    apply_registered: bool,
    overrides: Option<&Overrides>,
) -> Resolution {
    let Some(registries) = registries else {
        return Resolution::NoRegistries;
    };

    let mut groups = BTreeSet::new();
    if apply_registered {
        let mut has_registry = false;
        for registry in registries.iter().flatten() {
            has_registry = true;
            for (name, &activated) in registry.activations() {
                apply(&mut groups, name, activated);
            }
        }
        if !has_registry {
            return Resolution::NoRegistries;
        }
    }

    if let Some(overrides) = overrides {
        for (name, activated) in overrides {
            if let Some(activated) = *activated {
                apply(&mut groups, name, activated);
            }
        }
    }

    tracing::debug!(?groups, "resolved active groups");
    if groups.is_empty() {
        Resolution::NoActivations
    } else {
        Resolution::Active(groups)
    }
}

fn apply(groups: &mut BTreeSet<GroupName>, name: &GroupName, activated: bool) {
    if activated {
        groups.insert(name.clone());
    } else {
        groups.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webres_registry::Registry;

    fn names(resolution: Resolution) -> Vec<String> {
        match resolution {
            Resolution::Active(groups) => groups.iter().map(ToString::to_string).collect(),
            other => panic!("expected active groups, got {other:?}"),
        }
    }

    fn overrides(entries: &[(&str, Option<bool>)]) -> Overrides {
        entries
            .iter()
            .map(|&(name, activated)| (GroupName::from(name), activated))
            .collect()
    }

    #[test]
    fn absent_registries() {
        let overrides = overrides(&[("g", Some(true))]);
        assert_eq!(
            resolve_active_groups(None, true, Some(&overrides)),
            Resolution::NoRegistries
        );
        assert_eq!(
            resolve_active_groups(None, false, Some(&overrides)),
            Resolution::NoRegistries
        );
    }

    #[test]
    fn all_null_registries_with_registered_activations() {
        let registries: [Option<&dyn ResourceRegistry>; 2] = [None, None];
        assert_eq!(
            resolve_active_groups(Some(&registries), true, None),
            Resolution::NoRegistries
        );
    }

    #[test]
    fn all_null_registries_resolve_through_overrides() {
        let registries: [Option<&dyn ResourceRegistry>; 2] = [None, None];
        let overrides = overrides(&[("g", Some(true))]);
        assert_eq!(
            names(resolve_active_groups(Some(&registries), false, Some(&overrides))),
            ["g"]
        );
    }

    #[test]
    fn empty_activation_maps_are_not_missing_registries() {
        let registry = Registry::new();
        let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
        assert_eq!(
            resolve_active_groups(Some(&registries), true, None),
            Resolution::NoActivations
        );
    }

    #[test]
    fn registered_activations_ignored_when_not_applied() {
        let mut registry = Registry::new();
        registry.activate("g");
        let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
        assert_eq!(
            resolve_active_groups(Some(&registries), false, Some(&Overrides::new())),
            Resolution::NoActivations
        );
    }

    #[test]
    fn later_registry_wins() {
        let mut app = Registry::new();
        app.activate("a");
        app.activate("b");
        let mut session = Registry::new();
        session.deactivate("a");

        let registries: [Option<&dyn ResourceRegistry>; 3] = [Some(&app), None, Some(&session)];
        assert_eq!(
            names(resolve_active_groups(Some(&registries), true, None)),
            ["b"]
        );

        let reversed: [Option<&dyn ResourceRegistry>; 2] = [Some(&session), Some(&app)];
        assert_eq!(
            names(resolve_active_groups(Some(&reversed), true, None)),
            ["a", "b"]
        );
    }

    #[test]
    fn override_beats_registry() {
        let mut registry = Registry::new();
        registry.activate("g1");
        registry.activate("g2");
        let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
        let overrides = overrides(&[("g1", Some(false))]);

        assert_eq!(
            names(resolve_active_groups(Some(&registries), true, Some(&overrides))),
            ["g2"]
        );
    }

    #[test]
    fn null_override_is_a_no_op() {
        let mut registry = Registry::new();
        registry.activate("g");
        let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
        let overrides = overrides(&[("g", None), ("h", None)]);

        assert_eq!(
            names(resolve_active_groups(Some(&registries), true, Some(&overrides))),
            ["g"]
        );
    }

    #[test]
    fn override_can_deactivate_everything() {
        let mut registry = Registry::new();
        registry.activate("g");
        let registries: [Option<&dyn ResourceRegistry>; 1] = [Some(&registry)];
        let overrides = overrides(&[("g", Some(false))]);

        assert_eq!(
            resolve_active_groups(Some(&registries), true, Some(&overrides)),
            Resolution::NoActivations
        );
    }
}
