use crate::attribute::tag::{SlabHalf, Tag, WoodSpecies};
use crate::behaviour::Properties;
use crate::codec::{
    DoorCodec, FacingCodec, FacingOpenCodec, HorizontalLayout, PillarCodec, PlainCodec, SlabCodec,
    StairsCodec, TagCodec, TrapdoorCodec, WallLayout,
};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

const LOG_SPECIES: &[WoodSpecies] = &[
    WoodSpecies::Oak,
    WoodSpecies::Spruce,
    WoodSpecies::Birch,
    WoodSpecies::Jungle,
];

const LOG2_SPECIES: &[WoodSpecies] = &[WoodSpecies::Acacia, WoodSpecies::DarkOak];

const PLANK_PROPERTIES: Properties = Properties::new()
    .with_hardness(2.0)
    .with_explosion_resistance(3.0)
    .ignited_by_lava()
    .with_fuel_power(300);

pub const PLANKS: FamilyDescriptor<TagCodec<WoodSpecies>> =
    FamilyDescriptor::new("WOOD", ident!("planks"), 5, TagCodec::new())
        .with_properties(PLANK_PROPERTIES);

pub const LOG: FamilyDescriptor<PillarCodec<WoodSpecies>> =
    FamilyDescriptor::new("LOG", ident!("log"), 17, PillarCodec::of(LOG_SPECIES))
        .with_properties(PLANK_PROPERTIES.with_strength(2.0));

pub const LOG2: FamilyDescriptor<PillarCodec<WoodSpecies>> =
    FamilyDescriptor::new("LOG_2", ident!("log2"), 162, PillarCodec::of(LOG2_SPECIES))
        .with_properties(PLANK_PROPERTIES.with_strength(2.0));

pub const OAK_STAIRS: FamilyDescriptor<StairsCodec> =
    FamilyDescriptor::new("WOOD_STAIRS", ident!("oak_stairs"), 53, StairsCodec)
        .with_properties(PLANK_PROPERTIES);

pub const WOODEN_SLAB: FamilyDescriptor<SlabCodec<WoodSpecies>> = FamilyDescriptor::new(
    "WOOD_STEP",
    ident!("wooden_slab"),
    126,
    SlabCodec::new(WoodSpecies::ALL, SlabCodec::<WoodSpecies>::SINGLE),
)
.with_properties(PLANK_PROPERTIES.with_fuel_power(150));

pub const DOUBLE_WOODEN_SLAB: FamilyDescriptor<SlabCodec<WoodSpecies>> = FamilyDescriptor::new(
    "WOOD_DOUBLE_STEP",
    ident!("double_wooden_slab"),
    125,
    SlabCodec::new(WoodSpecies::ALL, &[SlabHalf::Full]),
)
.with_properties(PLANK_PROPERTIES);

pub const OAK_FENCE_GATE: FamilyDescriptor<FacingOpenCodec<HorizontalLayout>> =
    FamilyDescriptor::new("FENCE_GATE", ident!("fence_gate"), 107, FacingOpenCodec::new())
        .with_properties(PLANK_PROPERTIES);

pub const SPRUCE_FENCE_GATE: FamilyDescriptor<FacingOpenCodec<HorizontalLayout>> =
    FamilyDescriptor::new(
        "SPRUCE_FENCE_GATE",
        ident!("spruce_fence_gate"),
        183,
        FacingOpenCodec::new(),
    )
    .with_properties(PLANK_PROPERTIES);

pub const TRAPDOOR: FamilyDescriptor<TrapdoorCodec> =
    FamilyDescriptor::new("TRAP_DOOR", ident!("trapdoor"), 96, TrapdoorCodec)
        .with_properties(PLANK_PROPERTIES.with_strength(3.0));

pub const WOODEN_DOOR: FamilyDescriptor<DoorCodec> =
    FamilyDescriptor::new("WOODEN_DOOR", ident!("wooden_door"), 64, DoorCodec)
        .with_properties(PLANK_PROPERTIES.with_strength(3.0).with_fuel_power(200));

pub const CRAFTING_TABLE: FamilyDescriptor<PlainCodec> =
    FamilyDescriptor::new("WORKBENCH", ident!("crafting_table"), 58, PlainCodec)
        .with_properties(PLANK_PROPERTIES.with_strength(2.5));

pub const LADDER: FamilyDescriptor<FacingCodec<WallLayout>> =
    FamilyDescriptor::new("LADDER", ident!("ladder"), 65, FacingCodec::new())
        .with_default(0x2)
        .with_properties(Properties::new().with_strength(0.4).with_fuel_power(300));
