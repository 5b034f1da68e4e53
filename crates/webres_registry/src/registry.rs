//! Resource registries.
//!
//! A registry maps group names to [`Group`]s and records which groups have
//! been explicitly activated or deactivated. Rendering only ever reads a
//! registry through the [`ResourceRegistry`] trait, so hosts can back it
//! with their own storage.
//!
//! # Usage
//!
//! ```
//! use webres_registry::{Group, Registry, ResourceRegistry, Style};
//!
//! let mut registry = Registry::new();
//! registry.register(Group::new("site").with_style(Style::new("/css/site.css")));
//! registry
//!     .group_mut("print")
//!     .add_style(Style::new("/css/print.css").with_media("print"));
//!
//! registry.activate("site");
//!
//! assert!(registry.group(&"print".into()).is_some());
//! assert_eq!(registry.activations().get("site"), Some(&true));
//! ```

use crate::group::{Group, GroupName};
use indexmap::IndexMap;

/// Explicit group activations.
///
/// `true` activates a group and `false` deactivates it. A group without an
/// entry has no stated preference. Iteration follows the order in which
/// names were first given an activation.
pub type Activations = IndexMap<GroupName, bool>;

/// Read access to a registry, as needed while rendering.
pub trait ResourceRegistry {
    /// Looks up a group by name.
    fn group(&self, name: &GroupName) -> Option<&Group>;

    /// Returns the explicit activations.
    fn activations(&self) -> &Activations;
}

/// An in-memory registry of resource groups.
///
/// Typically one registry is held per application and, optionally, one per
/// session. See [`SharedRegistry`](crate::SharedRegistry) for sharing one
/// between concurrent requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Registry {
    groups: IndexMap<GroupName, Group>,
    activations: Activations,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("groups", &self.groups.keys().collect::<Vec<_>>())
            .field("activations", &self.activations)
            .finish()
    }
}

impl ResourceRegistry for Registry {
    fn group(&self, name: &GroupName) -> Option<&Group> {
        self.groups.get(name)
    }

    fn activations(&self) -> &Activations {
        &self.activations
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
            activations: Activations::new(),
        }
    }

    /// Registers a fully built group.
    ///
    /// # Panics
    ///
    /// Panics if a group with the same name is already registered.
    pub fn register(&mut self, group: Group) {
        let name = group.name().clone();
        assert!(
            !self.groups.contains_key(&name),
            "Group '{name}' is already registered"
        );
        self.groups.insert(name, group);
    }

    /// Returns the named group, creating an empty one if missing.
    pub fn group_mut(&mut self, name: impl Into<GroupName>) -> &mut Group {
        let name = name.into();
        self.groups
            .entry(name.clone())
            .or_insert_with(|| Group::new(name))
    }

    /// Looks up a group by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Removes a group, returning it if it was registered.
    ///
    /// The group's activation, if any, is left untouched.
    pub fn remove_group(&mut self, name: &str) -> Option<Group> {
        self.groups.shift_remove(name)
    }

    /// Names of all registered groups, in registration order.
    pub fn group_names(&self) -> impl Iterator<Item = &GroupName> {
        self.groups.keys()
    }

    /// Number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no groups are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Activates a group. The group does not need to be registered.
    pub fn activate(&mut self, name: impl Into<GroupName>) {
        self.activations.insert(name.into(), true);
    }

    /// Deactivates a group, overriding activations from earlier registries.
    pub fn deactivate(&mut self, name: impl Into<GroupName>) {
        self.activations.insert(name.into(), false);
    }

    /// Sets or clears a group's activation, returning the previous value.
    ///
    /// `None` removes the entry so the group has no stated preference.
    pub fn set_activation(
        &mut self,
        name: impl Into<GroupName>,
        activated: Option<bool>,
    ) -> Option<bool> {
        let name = name.into();
        match activated {
            Some(activated) => self.activations.insert(name, activated),
            None => self.activations.shift_remove(&name),
        }
    }

    /// Returns the explicit activation of a group, if any.
    #[must_use]
    pub fn activation(&self, name: &str) -> Option<bool> {
        self.activations.get(name).copied()
    }

    /// Merges several registries into a new one.
    ///
    /// Groups with the same name have their styles and scripts unioned.
    /// Activations are applied in input order, so later registries win.
    #[must_use]
    pub fn union(registries: &[&Registry]) -> Self {
        let mut merged = Self::new();
        for registry in registries {
            for (name, group) in &registry.groups {
                let target = merged.group_mut(name.clone());
                for style in group.styles() {
                    target.add_style(style.clone());
                }
                for script in group.scripts() {
                    target.add_script(script.clone());
                }
            }
            for (name, &activated) in &registry.activations {
                merged.activations.insert(name.clone(), activated);
            }
        }
        merged
    }
}
