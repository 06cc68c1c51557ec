pub mod minecraft;

use crate::codec::Codec;
use crate::error::MaterialError;
use crate::family::{AnyFamily, Family, FamilyDescriptor, VariantRecord};
use bevy_ecs::prelude::Resource;
use mcrs_protocol::{BlockId, LegacyBlockState};
use mcrs_registry::Registry;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use tracing::info;

/// Every registered family, in registration order.
#[derive(Resource, Default)]
pub struct Catalog {
    families: Registry<Box<dyn AnyFamily>>,
    by_block_id: FxHashMap<BlockId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding every built-in family.
    pub fn bootstrap() -> Result<Self, MaterialError> {
        let mut catalog = Self::new();
        minecraft::register_all(&mut catalog)?;
        info!(
            families = catalog.len(),
            variants = catalog.families().map(|family| family.len()).sum::<usize>(),
            "material catalog ready"
        );
        Ok(catalog)
    }

    pub fn register<C: Codec>(&mut self, descriptor: FamilyDescriptor<C>) -> Result<(), MaterialError> {
        if self.families.get_str(descriptor.identifier.as_str()).is_some() {
            return Err(MaterialError::DuplicateFamily(
                descriptor.identifier.as_str().to_owned(),
            ));
        }
        if let Some(existing) = self.by_block_id(descriptor.block_id) {
            return Err(MaterialError::DuplicateBlockId {
                block_id: descriptor.block_id,
                family: existing.identifier().as_str().to_owned(),
            });
        }

        let family = Family::new(descriptor)?;
        let block_id = family.block_id();
        let identifier = family.identifier().clone();
        let entry = self.families.insert(identifier, Box::new(family));
        self.by_block_id.insert(block_id, entry.index());
        Ok(())
    }

    /// Typed access; the descriptor a family was registered from is its key.
    pub fn family<C: Codec>(&self, descriptor: &FamilyDescriptor<C>) -> Option<&Family<C>> {
        self.families
            .get_str(descriptor.identifier.as_str())?
            .as_any()
            .downcast_ref()
    }

    /// Looks a family up by protocol id. A missing namespace means `minecraft:`.
    pub fn get(&self, identifier: &str) -> Option<&dyn AnyFamily> {
        let identifier = normalize_identifier(identifier);
        self.families
            .get_str(&identifier)
            .map(|family| &**family)
    }

    pub fn by_block_id(&self, block_id: BlockId) -> Option<&dyn AnyFamily> {
        let index = *self.by_block_id.get(&block_id)?;
        self.families.get(index).map(|family| &**family)
    }

    pub fn decode(&self, state: LegacyBlockState) -> Option<VariantRecord> {
        self.by_block_id(state.id)?.variant_by_code(state.data)
    }

    /// Decodes a combined `(id << 4) | data` value.
    pub fn decode_raw(&self, raw: u16) -> Option<VariantRecord> {
        self.decode(LegacyBlockState::unpack(raw))
    }

    pub fn families(&self) -> impl Iterator<Item = &dyn AnyFamily> + '_ {
        self.families.values().map(|family| &**family)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

fn normalize_identifier(identifier: &str) -> Cow<'_, str> {
    let identifier = if identifier.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(identifier.to_ascii_lowercase())
    } else {
        Cow::Borrowed(identifier)
    };
    if identifier.contains(':') {
        identifier
    } else {
        Cow::Owned(format!("minecraft:{identifier}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::tag::{SlabHalf, StoneSlabKind};
    use crate::attribute::{HasVariant, Slab};
    use crate::capability::{Directional, Variantable};
    use crate::catalog::minecraft::{CHEST, STONE_SLAB, STONE_SLAB2, WHEAT};
    use crate::codec::{AgeCodec, PlainCodec};
    use mcrs_protocol::{DataValue, Direction, ident};
    use std::collections::HashSet;

    fn code(value: u8) -> DataValue {
        DataValue::from_bits_truncate(value)
    }

    #[test]
    fn bootstrap_registers_every_family() {
        let catalog = Catalog::bootstrap().unwrap();
        assert_eq!(catalog.len(), minecraft::FAMILY_COUNT);
        assert!(catalog.families().all(|family| !family.is_empty()));

        let ids = catalog
            .families()
            .map(|family| family.block_id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn typed_and_erased_lookup() {
        let catalog = Catalog::bootstrap().unwrap();
        let chest = catalog.family(&CHEST).unwrap();
        let south = chest.by_name("SOUTH").unwrap();
        assert_eq!(south.facing(), Direction::South);

        assert_eq!(catalog.get("chest").unwrap().block_id(), BlockId(54));
        assert_eq!(catalog.get("minecraft:chest").unwrap().name(), "CHEST");
        assert_eq!(catalog.get("Minecraft:Chest").unwrap().name(), "CHEST");
        assert!(catalog.get("minecraft:not_a_block").is_none());
        assert_eq!(catalog.by_block_id(BlockId(59)).unwrap().name(), "CROPS");
        assert!(catalog.by_block_id(BlockId(4000)).is_none());
    }

    #[test]
    fn decode_legacy_state() {
        let catalog = Catalog::bootstrap().unwrap();
        let record = catalog
            .decode(LegacyBlockState::new(BlockId(54), code(4)))
            .unwrap();
        assert_eq!(record.name, "WEST");
        assert_eq!(catalog.decode_raw((59 << 4) | 7).unwrap().name, "AGE_7");
        assert!(catalog.decode_raw(54 << 4).is_none());
        assert!(catalog.decode_raw(4000 << 4).is_none());
    }

    #[test]
    fn codes_and_names_are_unique_per_family() {
        let catalog = Catalog::bootstrap().unwrap();
        for family in catalog.families() {
            let records = family.records();
            let codes = records.iter().map(|r| r.code).collect::<HashSet<_>>();
            let names = records
                .iter()
                .map(|r| r.name.to_ascii_lowercase())
                .collect::<HashSet<_>>();
            assert_eq!(codes.len(), records.len(), "{}", family.name());
            assert_eq!(names.len(), records.len(), "{}", family.name());
            for record in &records {
                assert_eq!(
                    family.variant_by_name(&record.name).map(|r| r.code),
                    Some(record.code)
                );
            }
        }
    }

    #[test]
    fn invertible_families_round_trip() {
        let catalog = Catalog::bootstrap().unwrap();
        let wheat = catalog.family(&WHEAT).unwrap();
        for variant in wheat.all().iter() {
            let attributes = wheat.unpack(variant.code()).unwrap();
            assert_eq!(wheat.codec().pack(&attributes), variant.code());
        }
        let chest = catalog.family(&CHEST).unwrap();
        for variant in chest.all().iter() {
            let attributes = chest.unpack(variant.code()).unwrap();
            assert_eq!(&attributes, variant.attributes());
        }
    }

    #[test]
    fn stone_slab_siblings_resolve_by_full_tuple() {
        let catalog = Catalog::bootstrap().unwrap();
        let red_upper = Slab {
            kind: StoneSlabKind::RedSandstone,
            half: SlabHalf::Upper,
        };
        let stone_upper = Slab {
            kind: StoneSlabKind::Stone,
            half: SlabHalf::Upper,
        };

        let red = minecraft::stone_slab(&catalog, &red_upper).unwrap();
        let stone = minecraft::stone_slab(&catalog, &stone_upper).unwrap();
        assert_eq!(red.code(), stone.code());
        assert_ne!(red.legacy_state(), stone.legacy_state());
        assert_eq!(red.variant(), StoneSlabKind::RedSandstone);
        assert_eq!(red.attributes().variant(), StoneSlabKind::RedSandstone);
        assert_eq!(red.family().block_id(), catalog.family(&STONE_SLAB2).unwrap().block_id());
        assert_eq!(stone.family().block_id(), catalog.family(&STONE_SLAB).unwrap().block_id());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .register(FamilyDescriptor::new("A", ident!("a"), 1, PlainCodec))
            .unwrap();
        assert!(matches!(
            catalog.register(FamilyDescriptor::new("A", ident!("a"), 2, PlainCodec)),
            Err(MaterialError::DuplicateFamily(_))
        ));
        assert!(matches!(
            catalog.register(FamilyDescriptor::new("B", ident!("b"), 1, AgeCodec::new(3))),
            Err(MaterialError::DuplicateBlockId { .. })
        ));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.family(&FamilyDescriptor::new("A", ident!("a"), 1, AgeCodec::new(3))).is_none());
    }
}
