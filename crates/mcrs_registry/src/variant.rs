use indexmap::IndexMap;
use indexmap::map::Values;
use mcrs_protocol::DataValue;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::trace;

/// An entry addressable by its data value and by a case-insensitive name.
pub trait RegistryEntry {
    fn code(&self) -> DataValue;
    fn name(&self) -> &str;
}

struct Index<E> {
    // Kept in registration order; a replaced code moves to the back.
    by_code: IndexMap<DataValue, Arc<E>>,
    by_name: FxHashMap<String, Arc<E>>,
}

impl<E> Clone for Index<E> {
    fn clone(&self) -> Self {
        Self {
            by_code: self.by_code.clone(),
            by_name: self.by_name.clone(),
        }
    }
}

impl<E> Default for Index<E> {
    fn default() -> Self {
        Self {
            by_code: IndexMap::with_capacity(DataValue::COUNT),
            by_name: FxHashMap::default(),
        }
    }
}

#[inline]
fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Per-family index from data value and name to variant.
///
/// Cloning is cheap: clones share the index until one of them registers something,
/// at which point that clone copies it. Readers holding an older clone keep seeing
/// the index as it was.
pub struct VariantRegistry<E> {
    index: Arc<Index<E>>,
}

impl<E> Clone for VariantRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl<E> Default for VariantRegistry<E> {
    fn default() -> Self {
        Self {
            index: Arc::default(),
        }
    }
}

impl<E: RegistryEntry> VariantRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry`. An existing entry with the same code or the same name loses that key
    /// to the new one.
    pub fn register(&mut self, entry: E) -> Arc<E> {
        self.register_arc(Arc::new(entry))
    }

    pub fn register_arc(&mut self, entry: Arc<E>) -> Arc<E> {
        let index = Arc::make_mut(&mut self.index);
        let code = entry.code();
        if let Some(previous) = index.by_code.shift_remove(&code) {
            trace!(code = %code, previous = previous.name(), name = entry.name(), "replacing variant");
        }
        index.by_code.insert(code, Arc::clone(&entry));
        index.by_name.insert(fold(entry.name()), Arc::clone(&entry));
        entry
    }

    /// Makes the entry currently stored at `code` reachable under `name` as well.
    /// Returns `false` when nothing is registered at `code`.
    pub fn alias(&mut self, name: &str, code: DataValue) -> bool {
        let Some(entry) = self.index.by_code.get(&code).cloned() else {
            return false;
        };
        Arc::make_mut(&mut self.index)
            .by_name
            .insert(fold(name), entry);
        true
    }

    /// Drops a name key. The entry stays reachable through its code.
    pub fn forget_name(&mut self, name: &str) -> Option<Arc<E>> {
        let key = fold(name);
        if !self.index.by_name.contains_key(&key) {
            return None;
        }
        Arc::make_mut(&mut self.index).by_name.remove(&key)
    }

    /// Points every name key that resolves to `old` at `new` instead. Returns how many keys
    /// moved.
    pub fn retarget(&mut self, old: &Arc<E>, new: &Arc<E>) -> usize {
        if !self.index.by_name.values().any(|entry| Arc::ptr_eq(entry, old)) {
            return 0;
        }
        let mut moved = 0;
        for entry in Arc::make_mut(&mut self.index).by_name.values_mut() {
            if Arc::ptr_eq(entry, old) {
                *entry = Arc::clone(new);
                moved += 1;
            }
        }
        moved
    }

    pub fn get_by_code(&self, code: DataValue) -> Option<&Arc<E>> {
        self.index.by_code.get(&code)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Arc<E>> {
        self.index.by_name.get(&fold(name))
    }

    pub fn contains_code(&self, code: DataValue) -> bool {
        self.index.by_code.contains_key(&code)
    }

    /// Number of entries reachable by code.
    pub fn len(&self) -> usize {
        self.index.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.by_code.is_empty()
    }

    /// Entries reachable by code, in registration order, frozen at the time of the call.
    pub fn all(&self) -> Snapshot<E> {
        Snapshot {
            index: Arc::clone(&self.index),
        }
    }
}

/// Frozen view of a [`VariantRegistry`]; iterate it as often as needed.
pub struct Snapshot<E> {
    index: Arc<Index<E>>,
}

impl<E> Clone for Snapshot<E> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl<E> Snapshot<E> {
    pub fn iter(&self) -> Values<'_, DataValue, Arc<E>> {
        self.index.by_code.values()
    }

    pub fn len(&self) -> usize {
        self.index.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.by_code.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Arc<E>> {
        self.iter().cloned().collect()
    }
}

impl<'a, E> IntoIterator for &'a Snapshot<E> {
    type Item = &'a Arc<E>;
    type IntoIter = Values<'a, DataValue, Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        code: DataValue,
        name: &'static str,
    }

    impl RegistryEntry for Entry {
        fn code(&self) -> DataValue {
            self.code
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn entry(code: u8, name: &'static str) -> Entry {
        Entry {
            code: DataValue::from_bits_truncate(code),
            name,
        }
    }

    fn code(value: u8) -> DataValue {
        DataValue::from_bits_truncate(value)
    }

    fn names(snapshot: &Snapshot<Entry>) -> Vec<&'static str> {
        snapshot.iter().map(|e| e.name).collect()
    }

    #[test]
    fn lookup_by_code_and_name() {
        let mut registry = VariantRegistry::new();
        registry.register(entry(2, "NORTH"));
        registry.register(entry(3, "SOUTH"));

        assert_eq!(registry.get_by_code(code(3)).map(|e| e.name), Some("SOUTH"));
        assert_eq!(registry.get_by_name("south").map(|e| e.code), Some(code(3)));
        assert_eq!(registry.get_by_name("SoUtH").map(|e| e.code), Some(code(3)));
        assert!(registry.get_by_code(code(7)).is_none());
        assert!(registry.get_by_name("UP").is_none());
    }

    #[test]
    fn duplicate_code_replaces_previous_entry() {
        let mut registry = VariantRegistry::new();
        registry.register(entry(0, "A"));
        registry.register(entry(1, "B"));
        registry.register(entry(0, "C"));

        assert_eq!(registry.get_by_code(code(0)).map(|e| e.name), Some("C"));
        assert_eq!(names(&registry.all()), vec!["B", "C"]);
        assert_eq!(registry.len(), 2);
        // the stale name key still resolves to the replaced entry
        assert_eq!(registry.get_by_name("a").map(|e| e.code), Some(code(0)));
    }

    #[test]
    fn duplicate_name_moves_name_key() {
        let mut registry = VariantRegistry::new();
        registry.register(entry(0, "SAME"));
        registry.register(entry(1, "same"));

        assert_eq!(registry.get_by_name("SAME").map(|e| e.code), Some(code(1)));
        assert_eq!(registry.get_by_code(code(0)).map(|e| e.name), Some("SAME"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn alias_and_forget_name() {
        let mut registry = VariantRegistry::new();
        registry.register(entry(7, "AGE_7"));

        assert!(registry.alias("RIPE", code(7)));
        assert!(!registry.alias("MISSING", code(8)));
        assert!(Arc::ptr_eq(
            registry.get_by_name("ripe").unwrap(),
            registry.get_by_code(code(7)).unwrap()
        ));

        assert!(registry.forget_name("ripe").is_some());
        assert!(registry.forget_name("ripe").is_none());
        assert!(registry.get_by_name("RIPE").is_none());
        assert!(registry.get_by_code(code(7)).is_some());
    }

    #[test]
    fn retarget_moves_only_matching_keys() {
        let mut registry = VariantRegistry::new();
        let old = registry.register(entry(7, "AGE_7"));
        registry.register(entry(6, "AGE_6"));
        registry.alias("RIPE", code(7));
        registry.alias("GOLDEN", code(7));
        registry.alias("ALMOST", code(6));

        let new = registry.register(entry(7, "MATURE"));
        // "age_7" was not forgotten, so it moves along with the aliases
        assert_eq!(registry.retarget(&old, &new), 3);
        for name in ["ripe", "golden", "age_7", "mature"] {
            assert!(Arc::ptr_eq(registry.get_by_name(name).unwrap(), &new), "{name}");
        }
        assert_eq!(registry.get_by_name("almost").map(|e| e.name), Some("AGE_6"));
        assert_eq!(registry.retarget(&old, &new), 0);
    }

    #[test]
    fn snapshot_ignores_later_registrations() {
        let mut registry = VariantRegistry::new();
        registry.register(entry(0, "A"));
        let before = registry.all();
        let cloned = registry.clone();

        registry.register(entry(1, "B"));
        registry.register(entry(0, "C"));

        assert_eq!(names(&before), vec!["A"]);
        assert_eq!(names(&before), vec!["A"]);
        assert_eq!(names(&cloned.all()), vec!["A"]);
        assert_eq!(names(&registry.all()), vec!["B", "C"]);
        assert_eq!((&registry.all()).into_iter().count(), 2);
    }
}
