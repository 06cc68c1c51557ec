use crate::attribute::tag::{DirtKind, PrismarineKind, SandKind, SandstoneKind, SpongeKind, StoneKind};
use crate::behaviour::Properties;
use crate::codec::{MushroomCodec, OrientedCodec, PlainCodec, TagCodec};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

pub const STONE: FamilyDescriptor<TagCodec<StoneKind>> =
    FamilyDescriptor::new("STONE", ident!("stone"), 1, TagCodec::new()).with_properties(
        Properties::new()
            .requires_correct_tool_for_drops()
            .with_hardness(1.5)
            .with_explosion_resistance(6.0),
    );

pub const DIRT: FamilyDescriptor<TagCodec<DirtKind>> =
    FamilyDescriptor::new("DIRT", ident!("dirt"), 3, TagCodec::new())
        .with_properties(Properties::new().with_strength(0.5));

pub const SAND: FamilyDescriptor<TagCodec<SandKind>> =
    FamilyDescriptor::new("SAND", ident!("sand"), 12, TagCodec::new())
        .with_properties(Properties::new().with_strength(0.5));

pub const SANDSTONE: FamilyDescriptor<TagCodec<SandstoneKind>> =
    FamilyDescriptor::new("SANDSTONE", ident!("sandstone"), 24, TagCodec::new())
        .with_properties(Properties::new().requires_correct_tool_for_drops().with_strength(0.8));

pub const SPONGE: FamilyDescriptor<TagCodec<SpongeKind>> =
    FamilyDescriptor::new("SPONGE", ident!("sponge"), 19, TagCodec::new())
        .with_properties(Properties::new().with_strength(0.6));

pub const PRISMARINE: FamilyDescriptor<TagCodec<PrismarineKind>> =
    FamilyDescriptor::new("PRISMARINE", ident!("prismarine"), 168, TagCodec::new())
        .with_properties(
            Properties::new()
                .requires_correct_tool_for_drops()
                .with_hardness(1.5)
                .with_explosion_resistance(6.0),
        );

pub const BROWN_MUSHROOM_BLOCK: FamilyDescriptor<MushroomCodec> = FamilyDescriptor::new(
    "HUGE_MUSHROOM_1",
    ident!("brown_mushroom_block"),
    99,
    MushroomCodec,
)
.with_default(14)
.with_properties(Properties::new().with_strength(0.2).ignited_by_lava());

pub const RED_MUSHROOM_BLOCK: FamilyDescriptor<MushroomCodec> = FamilyDescriptor::new(
    "HUGE_MUSHROOM_2",
    ident!("red_mushroom_block"),
    100,
    MushroomCodec,
)
.with_default(14)
.with_properties(Properties::new().with_strength(0.2).ignited_by_lava());

pub const BONE_BLOCK: FamilyDescriptor<OrientedCodec> =
    FamilyDescriptor::new("BONE_BLOCK", ident!("bone_block"), 216, OrientedCodec)
        .with_properties(Properties::new().requires_correct_tool_for_drops().with_strength(2.0));

pub const COAL_BLOCK: FamilyDescriptor<PlainCodec> =
    FamilyDescriptor::new("COAL_BLOCK", ident!("coal_block"), 173, PlainCodec).with_properties(
        Properties::new()
            .requires_correct_tool_for_drops()
            .with_hardness(5.0)
            .with_explosion_resistance(6.0)
            .with_fuel_power(16000),
    );
