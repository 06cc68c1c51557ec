use crate::variant::{RegistryEntry, Snapshot, VariantRegistry};
use mcrs_protocol::DataValue;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

/// A [`VariantRegistry`] that many threads read while registrations keep arriving.
///
/// Writers build the next index off to the side and swap it in. Readers only wait on the
/// swap itself and never observe a half-applied registration. Writers are serialized.
pub struct SharedRegistry<E> {
    current: RwLock<VariantRegistry<E>>,
}

impl<E> Default for SharedRegistry<E> {
    fn default() -> Self {
        Self {
            current: RwLock::new(VariantRegistry::default()),
        }
    }
}

impl<E: RegistryEntry> SharedRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> VariantRegistry<E> {
        self.current.read().clone()
    }

    pub fn get_by_code(&self, code: DataValue) -> Option<Arc<E>> {
        self.current.read().get_by_code(code).cloned()
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<E>> {
        self.current.read().get_by_name(name).cloned()
    }

    pub fn all(&self) -> Snapshot<E> {
        self.current.read().all()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    pub fn register(&self, entry: E) -> Arc<E> {
        self.update(|registry| registry.register(entry))
    }

    pub fn alias(&self, name: &str, code: DataValue) -> bool {
        self.update(|registry| registry.alias(name, code))
    }

    /// Applies `f` to a private copy of the registry and publishes the result.
    ///
    /// Reads continue against the old registry while `f` runs.
    pub fn update<R>(&self, f: impl FnOnce(&mut VariantRegistry<E>) -> R) -> R {
        let current = self.current.upgradable_read();
        let mut next = current.clone();
        let result = f(&mut next);
        *RwLockUpgradableReadGuard::upgrade(current) = next;
        result
    }
}
