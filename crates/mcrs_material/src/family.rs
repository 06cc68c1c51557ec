use crate::attribute::Attributes;
use crate::behaviour::Properties;
use crate::codec::{Capabilities, Codec, Unpack};
use crate::error::MaterialError;
use crate::material::Material;
use crate::variant::{Physical, Variant};
use mcrs_protocol::{BlockId, DataValue, Ident, LegacyBlockState};
use mcrs_registry::{SharedRegistry, Snapshot};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, warn};

/// Static description of one block family. Built-in families are `const` items, and the
/// descriptor value doubles as the typed key for [`Catalog::family`](crate::Catalog::family).
#[derive(Clone, Debug)]
pub struct FamilyDescriptor<C> {
    pub name: &'static str,
    pub identifier: Ident<&'static str>,
    pub block_id: BlockId,
    pub codec: C,
    pub default_code: DataValue,
    pub properties: Properties,
    /// Historical names registered next to the generated ones.
    pub aliases: &'static [(u8, &'static str)],
}

impl<C: Codec> FamilyDescriptor<C> {
    pub const fn new(
        name: &'static str,
        identifier: Ident<&'static str>,
        block_id: u16,
        codec: C,
    ) -> Self {
        Self {
            name,
            identifier,
            block_id: BlockId(block_id),
            codec,
            default_code: DataValue::MIN,
            properties: Properties::new(),
            aliases: &[],
        }
    }

    pub const fn with_default(mut self, code: u8) -> Self {
        self.default_code = DataValue::from_bits_truncate(code);
        self
    }

    pub const fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub const fn with_aliases(mut self, aliases: &'static [(u8, &'static str)]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// All variants of one block kind, indexed by data value and by name.
pub struct Family<C: Codec> {
    name: &'static str,
    codec: C,
    default_code: DataValue,
    physical: Physical,
    registry: SharedRegistry<Variant<C::Attributes>>,
    default: Arc<Variant<C::Attributes>>,
}

impl<C: Codec> Family<C> {
    /// Registers a variant for every legal attribute tuple of the codec, then the aliases.
    pub fn new(descriptor: FamilyDescriptor<C>) -> Result<Self, MaterialError> {
        let FamilyDescriptor {
            name,
            identifier,
            block_id,
            codec,
            default_code,
            properties,
            aliases,
        } = descriptor;
        let physical = Physical {
            block_id,
            identifier,
            properties,
        };

        let registry = SharedRegistry::new();
        registry.update(|registry| {
            for attributes in codec.legal() {
                let code = codec.pack(&attributes);
                let variant_name = attributes.variant_name();
                registry.register(Variant::new(
                    name,
                    code,
                    variant_name,
                    attributes,
                    physical.clone(),
                ));
            }
            for &(code, alias) in aliases {
                let aliased = DataValue::new(code).is_some_and(|code| registry.alias(alias, code));
                if !aliased {
                    warn!(family = name, alias, code, "ignoring alias of an unregistered data value");
                }
            }
        });

        let default = registry
            .get_by_code(default_code)
            .or_else(|| registry.all().iter().next().cloned())
            .ok_or(MaterialError::EmptyFamily(name))?;
        if default.code() != default_code {
            warn!(
                family = name,
                "default data value {default_code} is not registered, using {}",
                default.code()
            );
        }
        debug!(
            family = name,
            block_id = %physical.block_id,
            variants = registry.len(),
            "registered family"
        );

        Ok(Self {
            name,
            codec,
            default_code,
            physical,
            registry,
            default,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn identifier(&self) -> &Ident<&'static str> {
        &self.physical.identifier
    }

    pub fn block_id(&self) -> BlockId {
        self.physical.block_id
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn physical(&self) -> &Physical {
        &self.physical
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut capabilities = C::CAPABILITIES;
        if self.physical.fuel_power() > 0 {
            capabilities |= Capabilities::FUEL_SOURCE;
        }
        capabilities
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn by_code(&self, code: DataValue) -> Option<Material<'_, C>> {
        self.registry
            .get_by_code(code)
            .map(|variant| Material::new(self, variant))
    }

    /// Case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<Material<'_, C>> {
        self.registry
            .get_by_name(name)
            .map(|variant| Material::new(self, variant))
    }

    /// Variants reachable by data value, in registration order, as of now.
    pub fn all(&self) -> Snapshot<Variant<C::Attributes>> {
        self.registry.all()
    }

    pub fn materials(&self) -> Vec<Material<'_, C>> {
        self.all()
            .iter()
            .map(|variant| Material::new(self, variant.clone()))
            .collect()
    }

    /// The variant at the family's default data value, or the first one the family was built
    /// with if that data value has since been unregistered.
    pub fn default_material(&self) -> Material<'_, C> {
        let variant = self
            .registry
            .get_by_code(self.default_code)
            .unwrap_or_else(|| self.default.clone());
        Material::new(self, variant)
    }

    /// Finds the variant for `attributes`. Never fails: a tuple without a registered variant
    /// resolves through the codec, and a data value without a variant resolves to the default.
    pub fn resolve(&self, attributes: &C::Attributes) -> Material<'_, C> {
        let snapshot = self.registry.all();
        if let Some(variant) = snapshot.iter().find(|v| v.attributes() == attributes) {
            return Material::new(self, variant.clone());
        }
        self.by_code(self.codec.pack(attributes))
            .unwrap_or_else(|| self.default_material())
    }

    /// A fresh variant of this family for `attributes`, named the way built-in variants are.
    pub fn variant(&self, attributes: C::Attributes) -> Variant<C::Attributes> {
        let code = self.codec.pack(&attributes);
        let name = attributes.variant_name();
        Variant::new(self.name, code, name, attributes, self.physical.clone())
    }

    /// Inserts `variant`, replacing whatever holds its data value or name.
    pub fn register(&self, variant: Variant<C::Attributes>) -> Material<'_, C> {
        let variant = self.registry.register(variant);
        Material::new(self, variant)
    }

    pub fn alias(&self, name: &str, code: DataValue) -> bool {
        self.registry.alias(name, code)
    }

    /// Re-registers the variant at `code` under `name` and drops its previous name.
    pub fn rename(&self, code: DataValue, name: &str) -> bool {
        self.registry.update(|registry| {
            let Some(current) = registry.get_by_code(code).cloned() else {
                return false;
            };
            if registry
                .get_by_name(current.name())
                .is_some_and(|named| Arc::ptr_eq(named, &current))
            {
                registry.forget_name(current.name());
            }
            let renamed = registry.register(current.renamed(name));
            registry.retarget(&current, &renamed);
            true
        })
    }
}

impl<C: Unpack> Family<C> {
    pub fn unpack(&self, code: DataValue) -> Option<C::Attributes> {
        self.codec.unpack(code)
    }
}

/// A variant with its attributes rendered as JSON, for consumers that do not know the
/// family's codec type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantRecord {
    pub family: &'static str,
    pub identifier: String,
    pub block_id: BlockId,
    pub code: DataValue,
    pub name: String,
    pub attributes: serde_json::Value,
}

impl VariantRecord {
    pub fn legacy_state(&self) -> LegacyBlockState {
        LegacyBlockState::new(self.block_id, self.code)
    }
}

impl<A: Attributes> From<&Variant<A>> for VariantRecord {
    fn from(variant: &Variant<A>) -> Self {
        VariantRecord {
            family: variant.family(),
            identifier: variant.physical().identifier.as_str().to_owned(),
            block_id: variant.physical().block_id,
            code: variant.code(),
            name: variant.name().to_owned(),
            attributes: serde_json::to_value(variant.attributes()).unwrap_or_default(),
        }
    }
}

/// Codec-erased view of a [`Family`], as stored in the catalog.
pub trait AnyFamily: Send + Sync + 'static {
    fn name(&self) -> &'static str;
    fn identifier(&self) -> &Ident<&'static str>;
    fn block_id(&self) -> BlockId;
    fn capabilities(&self) -> Capabilities;
    fn physical(&self) -> &Physical;
    fn len(&self) -> usize;
    fn variant_by_code(&self, code: DataValue) -> Option<VariantRecord>;
    fn variant_by_name(&self, name: &str) -> Option<VariantRecord>;
    fn default_variant(&self) -> VariantRecord;
    fn records(&self) -> Vec<VariantRecord>;
    fn alias(&self, name: &str, code: DataValue) -> bool;
    fn rename(&self, code: DataValue, name: &str) -> bool;
    fn as_any(&self) -> &dyn Any;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Codec> AnyFamily for Family<C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn identifier(&self) -> &Ident<&'static str> {
        Family::identifier(self)
    }

    fn block_id(&self) -> BlockId {
        Family::block_id(self)
    }

    fn capabilities(&self) -> Capabilities {
        Family::capabilities(self)
    }

    fn physical(&self) -> &Physical {
        &self.physical
    }

    fn len(&self) -> usize {
        Family::len(self)
    }

    fn variant_by_code(&self, code: DataValue) -> Option<VariantRecord> {
        self.registry
            .get_by_code(code)
            .map(|variant| VariantRecord::from(variant.as_ref()))
    }

    fn variant_by_name(&self, name: &str) -> Option<VariantRecord> {
        self.registry
            .get_by_name(name)
            .map(|variant| VariantRecord::from(variant.as_ref()))
    }

    fn default_variant(&self) -> VariantRecord {
        VariantRecord::from(self.default_material().entry().as_ref())
    }

    fn records(&self) -> Vec<VariantRecord> {
        self.all()
            .iter()
            .map(|variant| VariantRecord::from(variant.as_ref()))
            .collect()
    }

    fn alias(&self, name: &str, code: DataValue) -> bool {
        Family::alias(self, name, code)
    }

    fn rename(&self, code: DataValue, name: &str) -> bool {
        Family::rename(self, code, name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
