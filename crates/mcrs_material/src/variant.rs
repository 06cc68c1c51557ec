use crate::behaviour::Properties;
use mcrs_protocol::{BlockId, DataValue, Ident, LegacyBlockState};
use mcrs_registry::RegistryEntry;

/// Constants shared by every variant of one family.
#[derive(Clone, Debug, PartialEq)]
pub struct Physical {
    pub block_id: BlockId,
    pub identifier: Ident<&'static str>,
    pub properties: Properties,
}

impl Physical {
    #[inline]
    pub fn hardness(&self) -> f32 {
        self.properties.hardness
    }

    pub fn explosion_resistance(&self) -> f32 {
        self.properties.explosion_resistance
    }

    pub fn max_stack_size(&self) -> u8 {
        self.properties.max_stack_size
    }

    pub fn fuel_power(&self) -> u16 {
        self.properties.fuel_power
    }
}

/// One concrete sub-type of a family. Immutable once built; deriving a neighbour always goes
/// back through the family's registry.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant<A> {
    family: &'static str,
    code: DataValue,
    name: String,
    attributes: A,
    physical: Physical,
}

impl<A> Variant<A> {
    pub fn new(
        family: &'static str,
        code: DataValue,
        name: impl Into<String>,
        attributes: A,
        physical: Physical,
    ) -> Self {
        Self {
            family,
            code,
            name: name.into(),
            attributes,
            physical,
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn code(&self) -> DataValue {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    pub fn physical(&self) -> &Physical {
        &self.physical
    }

    pub fn legacy_state(&self) -> LegacyBlockState {
        LegacyBlockState::new(self.physical.block_id, self.code)
    }
}

impl<A: Clone> Variant<A> {
    /// The same variant under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl<A> RegistryEntry for Variant<A> {
    fn code(&self) -> DataValue {
        self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}
