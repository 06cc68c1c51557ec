use crate::codec::Codec;
use crate::family::Family;
use crate::variant::{Physical, Variant};
use mcrs_protocol::{DataValue, LegacyBlockState};
use std::fmt;
use std::sync::Arc;

/// A variant together with the family it was looked up in.
///
/// Capability traits are implemented on this type; their `with_*` operators go back to the
/// family to find the neighbouring variant.
pub struct Material<'a, C: Codec> {
    family: &'a Family<C>,
    variant: Arc<Variant<C::Attributes>>,
}

impl<'a, C: Codec> Material<'a, C> {
    pub(crate) fn new(family: &'a Family<C>, variant: Arc<Variant<C::Attributes>>) -> Self {
        Self { family, variant }
    }

    pub fn family(&self) -> &'a Family<C> {
        self.family
    }

    pub fn entry(&self) -> &Arc<Variant<C::Attributes>> {
        &self.variant
    }

    #[inline]
    pub fn code(&self) -> DataValue {
        self.variant.code()
    }

    pub fn name(&self) -> &str {
        self.variant.name()
    }

    pub fn attributes(&self) -> &C::Attributes {
        self.variant.attributes()
    }

    pub fn physical(&self) -> &Physical {
        self.variant.physical()
    }

    pub fn legacy_state(&self) -> LegacyBlockState {
        self.variant.legacy_state()
    }

    /// Looks up the variant whose attributes are these ones after `f` has changed them.
    pub fn with_attributes(&self, f: impl FnOnce(&mut C::Attributes)) -> Self {
        let mut attributes = self.attributes().clone();
        f(&mut attributes);
        self.family.resolve(&attributes)
    }
}

impl<C: Codec> Clone for Material<'_, C> {
    fn clone(&self) -> Self {
        Self {
            family: self.family,
            variant: Arc::clone(&self.variant),
        }
    }
}

impl<C: Codec> PartialEq for Material<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.family, other.family) && *self.variant == *other.variant
    }
}

impl<C: Codec> fmt::Debug for Material<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("family", &self.family.name())
            .field("code", &self.code())
            .field("name", &self.name())
            .field("attributes", self.attributes())
            .finish()
    }
}

impl<C: Codec> fmt::Display for Material<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family.name(), self.name())
    }
}
