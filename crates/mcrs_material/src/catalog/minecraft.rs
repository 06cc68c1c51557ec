//! Built-in block families with their legacy block ids.

use crate::catalog::Catalog;
use crate::error::MaterialError;

macro_rules! declare_families {
    (
        $(
            $module:ident => [$($family:ident),* $(,)?]
        ),* $(,)?
    ) => {
        // Declare modules
        $(
            pub mod $module;
        )*

        // Re-export family descriptors
        $(
            pub use $module::{$($family),*};
        )*

        pub const FAMILY_COUNT: usize = [$($(stringify!($family)),*),*].len();

        /// Registers every family above, in declaration order.
        pub(crate) fn register_all(catalog: &mut Catalog) -> Result<(), MaterialError> {
            $($(
                catalog.register($family)?;
            )*)*
            Ok(())
        }
    };
}

declare_families! {
    natural => [
        STONE,
        DIRT,
        SAND,
        SANDSTONE,
        SPONGE,
        PRISMARINE,
        BROWN_MUSHROOM_BLOCK,
        RED_MUSHROOM_BLOCK,
        BONE_BLOCK,
        COAL_BLOCK,
    ],
    wood => [
        PLANKS,
        LOG,
        LOG2,
        OAK_STAIRS,
        WOODEN_SLAB,
        DOUBLE_WOODEN_SLAB,
        OAK_FENCE_GATE,
        SPRUCE_FENCE_GATE,
        TRAPDOOR,
        WOODEN_DOOR,
        CRAFTING_TABLE,
        LADDER,
    ],
    plants => [
        SAPLING,
        TALLGRASS,
        RED_FLOWER,
        CACTUS,
        REEDS,
        WHEAT,
        CARROTS,
        POTATOES,
        BEETROOTS,
        NETHER_WART,
        PUMPKIN_STEM,
        MELON_STEM,
        COCOA,
        PUMPKIN,
        LIT_PUMPKIN,
        HAY_BLOCK,
    ],
    redstone => [
        DISPENSER,
        DROPPER,
        PISTON,
        STICKY_PISTON,
        LEVER,
        STONE_BUTTON,
        WOODEN_BUTTON,
        STONE_PRESSURE_PLATE,
        WOODEN_PRESSURE_PLATE,
        TORCH,
        REDSTONE_TORCH,
        END_ROD,
        IRON_DOOR,
        IRON_TRAPDOOR,
    ],
    rails => [
        RAIL,
        POWERED_RAIL,
        DETECTOR_RAIL,
        ACTIVATOR_RAIL,
    ],
    containers => [
        CHEST,
        TRAPPED_CHEST,
        FURNACE,
        LIT_FURNACE,
    ],
    building => [
        WOOL,
        CARPET,
        STAINED_GLASS,
        STONEBRICK,
        QUARTZ_BLOCK,
        STONE_STAIRS,
        BRICK_STAIRS,
        STONE_SLAB,
        DOUBLE_STONE_SLAB,
        STONE_SLAB2,
        DOUBLE_STONE_SLAB2,
        WALL_SIGN,
    ],
}

pub use building::stone_slab;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::HasFacing;
    use crate::attribute::tag::WoodSpecies;
    use crate::capability::{Ageable, Directional, FuelSource, Openable, Variantable};
    use crate::codec::Codec;
    use crate::family::FamilyDescriptor;
    use mcrs_protocol::{BlockId, DataValue, Direction, LegacyBlockState};

    fn decode(catalog: &Catalog, id: u16, data: u8) -> String {
        catalog
            .decode(LegacyBlockState::new(
                BlockId(id),
                DataValue::from_bits_truncate(data),
            ))
            .map(|record| record.name)
            .unwrap_or_default()
    }

    #[test]
    fn legacy_data_values() {
        let catalog = Catalog::bootstrap().unwrap();
        assert_eq!(decode(&catalog, 1, 5), "ANDESITE");
        assert_eq!(decode(&catalog, 17, 0x6), "BIRCH_EAST_WEST");
        assert_eq!(decode(&catalog, 162, 0x9), "DARK_OAK_NORTH_SOUTH");
        assert_eq!(decode(&catalog, 44, 0xF), "QUARTZ_UPPER");
        assert_eq!(decode(&catalog, 182, 0x8), "RED_SANDSTONE_UPPER");
        assert_eq!(decode(&catalog, 43, 0x8), "STONE_SMOOTH_FULL");
        assert_eq!(decode(&catalog, 99, 14), "ALL_CAP");
        assert_eq!(decode(&catalog, 99, 12), "");
        assert_eq!(decode(&catalog, 64, 0x8), "UPPER_LEFT");
        assert_eq!(decode(&catalog, 64, 0x3), "LOWER_NORTH");
        assert_eq!(decode(&catalog, 27, 0xD), "ASCENDING_SOUTH_POWERED");
        assert_eq!(decode(&catalog, 66, 0x9), "NORTH_EAST");
        assert_eq!(decode(&catalog, 50, 0x5), "UP");
        assert_eq!(decode(&catalog, 35, 14), "RED");
        assert_eq!(decode(&catalog, 38, 8), "OXEYE_DAISY");
        assert_eq!(decode(&catalog, 6, 0xD), "DARK_OAK_AGE_1");
        assert_eq!(decode(&catalog, 127, 0xB), "EAST_AGE_2");
        assert_eq!(decode(&catalog, 96, 0xE), "WEST_TOP_OPEN");
        assert_eq!(decode(&catalog, 53, 0x7), "NORTH_UPSIDE_DOWN");
        assert_eq!(decode(&catalog, 70, 0x1), "POWERED");
        assert_eq!(decode(&catalog, 58, 0x0), "DEFAULT");
        assert_eq!(decode(&catalog, 69, 0x1), "EAST");
        assert_eq!(decode(&catalog, 69, 0x5), "UP_NORTH_SOUTH");
        assert_eq!(decode(&catalog, 69, 0x6), "UP_EAST_WEST");
        assert_eq!(decode(&catalog, 69, 0x7), "DOWN_NORTH_SOUTH");
        assert_eq!(decode(&catalog, 69, 0xE), "UP_EAST_WEST_POWERED");
        assert_eq!(decode(&catalog, 69, 0xF), "DOWN_NORTH_SOUTH_POWERED");
        assert_eq!(catalog.get("lever").unwrap().len(), DataValue::COUNT);
    }

    #[test]
    fn crops_carry_growth_stage_names() {
        let catalog = Catalog::bootstrap().unwrap();
        for descriptor in [&WHEAT, &CARROTS, &POTATOES] {
            let crop = catalog.family(descriptor).unwrap();
            assert_eq!(crop.by_name("seeded").unwrap().age(), 0);
            assert_eq!(crop.by_name("very_tall").unwrap().age(), 6);
            assert_eq!(crop.by_name("RIPE").unwrap().age(), 7);
        }
        let beetroots = catalog.family(&BEETROOTS).unwrap();
        assert!(beetroots.by_name("RIPE").is_none());
        assert_eq!(beetroots.default_material().with_age(4).age(), 0);
    }

    #[test]
    fn fuel_values() {
        let catalog = Catalog::bootstrap().unwrap();
        let fuel = |identifier: &str| catalog.get(identifier).unwrap().physical().fuel_power();
        assert_eq!(fuel("planks"), 300);
        assert_eq!(fuel("coal_block"), 16000);
        assert_eq!(fuel("wooden_slab"), 150);
        assert_eq!(fuel("sapling"), 100);
        assert_eq!(fuel("carpet"), 67);
        assert_eq!(fuel("stone"), 0);

        let planks = catalog.family(&PLANKS).unwrap();
        let birch = planks.default_material().with_variant(WoodSpecies::Birch);
        assert_eq!(birch.code().get(), 2);
        assert!(birch.is_fuel());
    }

    #[test]
    fn stack_sizes() {
        let catalog = Catalog::bootstrap().unwrap();
        let stack = |identifier: &str| catalog.get(identifier).unwrap().physical().max_stack_size();
        assert_eq!(stack("wall_sign"), 16);
        assert_eq!(stack("ladder"), 64);
        assert_eq!(stack("chest"), 64);
    }

    #[test]
    fn defaults_match_legacy_placement() {
        let catalog = Catalog::bootstrap().unwrap();
        assert_eq!(catalog.family(&CHEST).unwrap().default_material().facing(), Direction::North);
        assert_eq!(catalog.family(&TORCH).unwrap().default_material().facing(), Direction::Up);
        assert_eq!(catalog.family(&END_ROD).unwrap().default_material().facing(), Direction::Up);
        assert_eq!(catalog.get("tallgrass").unwrap().default_variant().name, "TALL_GRASS");
        assert_eq!(
            catalog.get("brown_mushroom_block").unwrap().default_variant().name,
            "ALL_CAP"
        );
        let gate = catalog.family(&OAK_FENCE_GATE).unwrap().default_material();
        assert!(!gate.is_open());
        assert_eq!(gate.facing(), Direction::South);
    }

    fn assert_unplaceable_facing_is_default<C>(catalog: &Catalog, descriptor: &FamilyDescriptor<C>)
    where
        C: Codec,
        C::Attributes: HasFacing,
    {
        let family = catalog.family(descriptor).unwrap();
        let default = family.default_material();
        for facing in [Direction::Center, Direction::Down] {
            if family.all().iter().any(|v| v.attributes().facing() == facing) {
                continue;
            }
            assert_eq!(default.with_facing(facing), default, "{} {facing:?}", family.name());
        }
    }

    #[test]
    fn unplaceable_facing_resolves_to_family_default() {
        let catalog = Catalog::bootstrap().unwrap();
        macro_rules! check {
            ($($family:ident),+ $(,)?) => {
                $(assert_unplaceable_facing_is_default(&catalog, &$family);)+
            };
        }
        check!(
            CHEST,
            TRAPPED_CHEST,
            FURNACE,
            LIT_FURNACE,
            LADDER,
            WALL_SIGN,
            PUMPKIN,
            LIT_PUMPKIN,
            COCOA,
            TORCH,
            REDSTONE_TORCH,
            END_ROD,
            DISPENSER,
            DROPPER,
            PISTON,
            STICKY_PISTON,
            LEVER,
            STONE_BUTTON,
            WOODEN_BUTTON,
            OAK_FENCE_GATE,
            SPRUCE_FENCE_GATE,
            TRAPDOOR,
            IRON_TRAPDOOR,
            OAK_STAIRS,
            STONE_STAIRS,
            BRICK_STAIRS,
            WOODEN_DOOR,
            IRON_DOOR,
        );
    }
}
