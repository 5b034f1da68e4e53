//! Registries shared between concurrent requests.

use crate::registry::Registry;
use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe, copy-on-write handle to a [`Registry`].
///
/// Readers take a [`snapshot`](Self::snapshot) that stays internally
/// consistent for as long as they hold it, even while another thread
/// registers groups or flips activations through [`update`](Self::update).
/// Writers clone the registry only when a snapshot is still alive.
///
/// # Example
///
/// ```
/// use webres_registry::{Group, Registry, SharedRegistry, Style};
///
/// let shared = SharedRegistry::new(Registry::new());
/// let before = shared.snapshot();
///
/// shared.update(|registry| {
///     registry.register(Group::new("site").with_style(Style::new("/site.css")));
///     registry.activate("site");
/// });
///
/// assert!(before.is_empty());
/// assert_eq!(shared.snapshot().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Arc<Registry>>>,
}

impl core::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SharedRegistry")
            .field(&*self.snapshot())
            .finish()
    }
}

impl SharedRegistry {
    /// Wraps a registry for sharing.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Returns the current state of the registry.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.read())
    }

    /// Mutates the registry.
    ///
    /// Snapshots taken before the call keep seeing the previous state.
    pub fn update<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.inner.write();
        f(Arc::make_mut(&mut guard))
    }
}
