use crate::behaviour::Properties;
use crate::codec::{ChestLayout, FacingCodec};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

const CHEST_PROPERTIES: Properties = Properties::new()
    .with_strength(2.5)
    .ignited_by_lava()
    .with_fuel_power(300);

const FURNACE_PROPERTIES: Properties = Properties::new()
    .requires_correct_tool_for_drops()
    .with_strength(3.5);

pub const CHEST: FamilyDescriptor<FacingCodec<ChestLayout>> =
    FamilyDescriptor::new("CHEST", ident!("chest"), 54, FacingCodec::new())
        .with_default(0x2)
        .with_properties(CHEST_PROPERTIES);

pub const TRAPPED_CHEST: FamilyDescriptor<FacingCodec<ChestLayout>> =
    FamilyDescriptor::new("TRAPPED_CHEST", ident!("trapped_chest"), 146, FacingCodec::new())
        .with_default(0x2)
        .with_properties(CHEST_PROPERTIES);

pub const FURNACE: FamilyDescriptor<FacingCodec<ChestLayout>> =
    FamilyDescriptor::new("FURNACE", ident!("furnace"), 61, FacingCodec::new())
        .with_default(0x2)
        .with_properties(FURNACE_PROPERTIES);

pub const LIT_FURNACE: FamilyDescriptor<FacingCodec<ChestLayout>> =
    FamilyDescriptor::new("BURNING_FURNACE", ident!("lit_furnace"), 62, FacingCodec::new())
        .with_default(0x2)
        .with_properties(FURNACE_PROPERTIES);
