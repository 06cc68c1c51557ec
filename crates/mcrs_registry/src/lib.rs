use indexmap::IndexMap;
use std::marker::PhantomData;
use valence_ident::Ident;

mod shared;
mod variant;

pub use shared::SharedRegistry;
pub use variant::{RegistryEntry, Snapshot, VariantRegistry};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegistryId<E> {
    Index {
        index: usize,
        marker: PhantomData<E>,
    },
    Identifier {
        identifier: Ident<String>,
    },
    StaticIdentifier {
        identifier: Ident<&'static str>,
    },
}

impl<E> From<Ident<String>> for RegistryId<E> {
    fn from(value: Ident<String>) -> Self {
        RegistryId::Identifier { identifier: value }
    }
}

impl<E> From<Ident<&'static str>> for RegistryId<E> {
    fn from(value: Ident<&'static str>) -> Self {
        RegistryId::StaticIdentifier { identifier: value }
    }
}

impl<E> From<usize> for RegistryId<E> {
    fn from(index: usize) -> Self {
        RegistryId::Index {
            index,
            marker: PhantomData,
        }
    }
}

/// Insertion-ordered table keyed by resource identifier.
pub struct Registry<E> {
    items: IndexMap<Ident<String>, E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    pub fn get(&self, id: impl Into<RegistryId<E>>) -> Option<&E> {
        self.get_full(id).map(|(_, v)| v)
    }

    pub fn get_full(&self, id: impl Into<RegistryId<E>>) -> Option<(usize, &E)> {
        match id.into() {
            RegistryId::Index { index, .. } => self.items.get_index(index).map(|(_, v)| (index, v)),
            RegistryId::Identifier { identifier } => self.get_str_full(identifier.as_str()),
            RegistryId::StaticIdentifier { identifier } => self.get_str_full(identifier.as_str()),
        }
    }

    /// Looks an entry up by the textual form of its identifier, e.g. `"minecraft:chest"`.
    pub fn get_str(&self, identifier: &str) -> Option<&E> {
        self.get_str_full(identifier).map(|(_, v)| v)
    }

    fn get_str_full(&self, identifier: &str) -> Option<(usize, &E)> {
        self.items
            .get_full(identifier)
            .map(|(index, _, v)| (index, v))
    }

    /// Inserts `entry`, replacing any entry under the same identifier in place.
    pub fn insert(&mut self, id: impl Into<Ident<String>>, entry: E) -> RegistryRef<E> {
        let id = id.into();
        let (index, _) = self.items.insert_full(id.clone(), entry);

        RegistryRef {
            index,
            identifier: id,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident<String>, &E)> + '_ {
        self.items.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &E> + '_ {
        self.items.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = RegistryId<E>> + '_ {
        (0..self.items.len()).map(RegistryId::from)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegistryRef<E> {
    index: usize,
    identifier: Ident<String>,
    marker: PhantomData<E>,
}

impl<E> RegistryRef<E> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn identifier(&self) -> &Ident<String> {
        &self.identifier
    }
}

impl<E> From<RegistryRef<E>> for RegistryId<E> {
    fn from(value: RegistryRef<E>) -> Self {
        RegistryId::Index {
            index: value.index,
            marker: PhantomData,
        }
    }
}
