use crate::attribute::tag::{FlowerKind, GrassKind};
use crate::behaviour::Properties;
use crate::codec::{
    AgeCodec, CocoaCodec, FacingCodec, HorizontalLayout, OrientedCodec, SaplingCodec, TagCodec,
};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

/// Growth stage names used by wheat, carrots and potatoes.
const CROP_STAGES: &[(u8, &str)] = &[
    (0, "SEEDED"),
    (1, "GERMINATED"),
    (2, "VERY_SMALL"),
    (3, "SMALL"),
    (4, "MEDIUM"),
    (5, "TALL"),
    (6, "VERY_TALL"),
    (7, "RIPE"),
];

const CROP_PROPERTIES: Properties = Properties::new().instant_break();

pub const SAPLING: FamilyDescriptor<SaplingCodec> =
    FamilyDescriptor::new("SAPLING", ident!("sapling"), 6, SaplingCodec)
        .with_properties(Properties::new().instant_break().with_fuel_power(100));

pub const TALLGRASS: FamilyDescriptor<TagCodec<GrassKind>> =
    FamilyDescriptor::new("LONG_GRASS", ident!("tallgrass"), 31, TagCodec::new())
        .with_default(0x1)
        .with_properties(Properties::new().instant_break().ignited_by_lava());

pub const RED_FLOWER: FamilyDescriptor<TagCodec<FlowerKind>> =
    FamilyDescriptor::new("RED_ROSE", ident!("red_flower"), 38, TagCodec::new())
        .with_properties(Properties::new().instant_break());

pub const CACTUS: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("CACTUS", ident!("cactus"), 81, AgeCodec::new(15))
        .with_properties(Properties::new().with_strength(0.4));

pub const REEDS: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("SUGAR_CANE_BLOCK", ident!("reeds"), 83, AgeCodec::new(15))
        .with_properties(Properties::new().instant_break());

pub const WHEAT: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("CROPS", ident!("wheat"), 59, AgeCodec::new(7))
        .with_properties(CROP_PROPERTIES)
        .with_aliases(CROP_STAGES);

pub const CARROTS: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("CARROT", ident!("carrots"), 141, AgeCodec::new(7))
        .with_properties(CROP_PROPERTIES)
        .with_aliases(CROP_STAGES);

pub const POTATOES: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("POTATO", ident!("potatoes"), 142, AgeCodec::new(7))
        .with_properties(CROP_PROPERTIES)
        .with_aliases(CROP_STAGES);

pub const BEETROOTS: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("BEETROOT_BLOCK", ident!("beetroots"), 207, AgeCodec::new(3))
        .with_properties(CROP_PROPERTIES);

pub const NETHER_WART: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("NETHER_WARTS", ident!("nether_wart"), 115, AgeCodec::new(3))
        .with_properties(CROP_PROPERTIES);

pub const PUMPKIN_STEM: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("PUMPKIN_STEM", ident!("pumpkin_stem"), 104, AgeCodec::new(7))
        .with_properties(CROP_PROPERTIES);

pub const MELON_STEM: FamilyDescriptor<AgeCodec> =
    FamilyDescriptor::new("MELON_STEM", ident!("melon_stem"), 105, AgeCodec::new(7))
        .with_properties(CROP_PROPERTIES);

pub const COCOA: FamilyDescriptor<CocoaCodec> =
    FamilyDescriptor::new("COCOA", ident!("cocoa"), 127, CocoaCodec).with_properties(
        Properties::new()
            .with_hardness(0.2)
            .with_explosion_resistance(3.0),
    );

pub const PUMPKIN: FamilyDescriptor<FacingCodec<HorizontalLayout>> =
    FamilyDescriptor::new("PUMPKIN", ident!("pumpkin"), 86, FacingCodec::new())
        .with_properties(Properties::new().with_strength(1.0));

pub const LIT_PUMPKIN: FamilyDescriptor<FacingCodec<HorizontalLayout>> =
    FamilyDescriptor::new("JACK_O_LANTERN", ident!("lit_pumpkin"), 91, FacingCodec::new())
        .with_properties(Properties::new().with_strength(1.0));

pub const HAY_BLOCK: FamilyDescriptor<OrientedCodec> =
    FamilyDescriptor::new("HAY_BLOCK", ident!("hay_block"), 170, OrientedCodec)
        .with_properties(Properties::new().with_strength(0.5));
