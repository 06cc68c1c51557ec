use crate::attribute::Slab;
use crate::attribute::tag::{DyeColor, QuartzKind, StoneBrickKind, StoneSlabKind};
use crate::behaviour::Properties;
use crate::catalog::Catalog;
use crate::codec::{FacingCodec, SlabCodec, StairsCodec, TagCodec, WallLayout};
use crate::family::FamilyDescriptor;
use crate::material::Material;
use mcrs_protocol::ident;

const STONE_SLAB_KINDS: &[StoneSlabKind] = &[
    StoneSlabKind::Stone,
    StoneSlabKind::Sandstone,
    StoneSlabKind::Wood,
    StoneSlabKind::Cobblestone,
    StoneSlabKind::Brick,
    StoneSlabKind::StoneBrick,
    StoneSlabKind::NetherBrick,
    StoneSlabKind::Quartz,
];

const STONE_SLAB2_KINDS: &[StoneSlabKind] = &[StoneSlabKind::RedSandstone];

const MASONRY_PROPERTIES: Properties = Properties::new()
    .requires_correct_tool_for_drops()
    .with_hardness(2.0)
    .with_explosion_resistance(6.0);

pub const WOOL: FamilyDescriptor<TagCodec<DyeColor>> =
    FamilyDescriptor::new("WOOL", ident!("wool"), 35, TagCodec::new()).with_properties(
        Properties::new()
            .with_strength(0.8)
            .ignited_by_lava()
            .with_fuel_power(100),
    );

pub const CARPET: FamilyDescriptor<TagCodec<DyeColor>> =
    FamilyDescriptor::new("CARPET", ident!("carpet"), 171, TagCodec::new()).with_properties(
        Properties::new()
            .with_strength(0.1)
            .ignited_by_lava()
            .with_fuel_power(67),
    );

pub const STAINED_GLASS: FamilyDescriptor<TagCodec<DyeColor>> =
    FamilyDescriptor::new("STAINED_GLASS", ident!("stained_glass"), 95, TagCodec::new())
        .with_properties(Properties::new().with_strength(0.3));

pub const STONEBRICK: FamilyDescriptor<TagCodec<StoneBrickKind>> =
    FamilyDescriptor::new("SMOOTH_BRICK", ident!("stonebrick"), 98, TagCodec::new())
        .with_properties(MASONRY_PROPERTIES.with_hardness(1.5));

pub const QUARTZ_BLOCK: FamilyDescriptor<TagCodec<QuartzKind>> =
    FamilyDescriptor::new("QUARTZ_BLOCK", ident!("quartz_block"), 155, TagCodec::new())
        .with_properties(
            Properties::new()
                .requires_correct_tool_for_drops()
                .with_strength(0.8),
        );

pub const STONE_STAIRS: FamilyDescriptor<StairsCodec> =
    FamilyDescriptor::new("COBBLESTONE_STAIRS", ident!("stone_stairs"), 67, StairsCodec)
        .with_properties(MASONRY_PROPERTIES);

pub const BRICK_STAIRS: FamilyDescriptor<StairsCodec> =
    FamilyDescriptor::new("BRICK_STAIRS", ident!("brick_stairs"), 108, StairsCodec)
        .with_properties(MASONRY_PROPERTIES);

pub const STONE_SLAB: FamilyDescriptor<SlabCodec<StoneSlabKind>> = FamilyDescriptor::new(
    "STEP",
    ident!("stone_slab"),
    44,
    SlabCodec::new(STONE_SLAB_KINDS, SlabCodec::<StoneSlabKind>::SINGLE),
)
.with_properties(MASONRY_PROPERTIES);

pub const DOUBLE_STONE_SLAB: FamilyDescriptor<SlabCodec<StoneSlabKind>> = FamilyDescriptor::new(
    "DOUBLE_STEP",
    ident!("double_stone_slab"),
    43,
    SlabCodec::new(STONE_SLAB_KINDS, SlabCodec::<StoneSlabKind>::DOUBLE),
)
.with_properties(MASONRY_PROPERTIES);

pub const STONE_SLAB2: FamilyDescriptor<SlabCodec<StoneSlabKind>> = FamilyDescriptor::new(
    "STONE_SLAB2",
    ident!("stone_slab2"),
    182,
    SlabCodec::new(STONE_SLAB2_KINDS, SlabCodec::<StoneSlabKind>::SINGLE),
)
.with_properties(MASONRY_PROPERTIES);

pub const DOUBLE_STONE_SLAB2: FamilyDescriptor<SlabCodec<StoneSlabKind>> = FamilyDescriptor::new(
    "DOUBLE_STONE_SLAB2",
    ident!("double_stone_slab2"),
    181,
    SlabCodec::new(STONE_SLAB2_KINDS, SlabCodec::<StoneSlabKind>::DOUBLE),
)
.with_properties(MASONRY_PROPERTIES);

pub const WALL_SIGN: FamilyDescriptor<FacingCodec<WallLayout>> =
    FamilyDescriptor::new("WALL_SIGN", ident!("wall_sign"), 68, FacingCodec::new())
        .with_default(0x2)
        .with_properties(
            Properties::new()
                .with_strength(1.0)
                .with_max_stack_size(16)
                .ignited_by_lava()
                .with_fuel_power(200),
        );

/// Stone slabs share one data value space across two block ids. Picks the family by kind and
/// half, then resolves the attributes in it.
pub fn stone_slab<'a>(
    catalog: &'a Catalog,
    slab: &Slab<StoneSlabKind>,
) -> Option<Material<'a, SlabCodec<StoneSlabKind>>> {
    let candidates = if SlabCodec::<StoneSlabKind>::SINGLE.contains(&slab.half) {
        [&STONE_SLAB, &STONE_SLAB2]
    } else {
        [&DOUBLE_STONE_SLAB, &DOUBLE_STONE_SLAB2]
    };
    let descriptor = candidates
        .into_iter()
        .find(|descriptor| descriptor.codec.kinds.contains(&slab.kind))?;
    Some(catalog.family(descriptor)?.resolve(slab))
}
