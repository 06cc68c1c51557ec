use crate::behaviour::Properties;
use crate::codec::{
    CubeLayout, DoorCodec, FacingCodec, FacingPoweredCodec, LeverCodec, PoweredCodec, RodLayout,
    SwitchLayout, TorchLayout, TrapdoorCodec,
};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

const MACHINE_PROPERTIES: Properties = Properties::new()
    .requires_correct_tool_for_drops()
    .with_strength(3.5);

const PISTON_PROPERTIES: Properties = Properties::new().with_strength(1.5);

const SWITCH_PROPERTIES: Properties = Properties::new().with_strength(0.5);

const METAL_DOOR_PROPERTIES: Properties = Properties::new()
    .requires_correct_tool_for_drops()
    .with_strength(5.0);

pub const DISPENSER: FamilyDescriptor<FacingPoweredCodec<CubeLayout>> =
    FamilyDescriptor::new("DISPENSER", ident!("dispenser"), 23, FacingPoweredCodec::new())
        .with_default(0x2)
        .with_properties(MACHINE_PROPERTIES);

pub const DROPPER: FamilyDescriptor<FacingPoweredCodec<CubeLayout>> =
    FamilyDescriptor::new("DROPPER", ident!("dropper"), 158, FacingPoweredCodec::new())
        .with_default(0x2)
        .with_properties(MACHINE_PROPERTIES);

pub const PISTON: FamilyDescriptor<FacingPoweredCodec<CubeLayout>> =
    FamilyDescriptor::new("PISTON_BASE", ident!("piston"), 33, FacingPoweredCodec::new())
        .with_default(0x2)
        .with_properties(PISTON_PROPERTIES);

pub const STICKY_PISTON: FamilyDescriptor<FacingPoweredCodec<CubeLayout>> =
    FamilyDescriptor::new(
        "PISTON_STICKY_BASE",
        ident!("sticky_piston"),
        29,
        FacingPoweredCodec::new(),
    )
    .with_default(0x2)
    .with_properties(PISTON_PROPERTIES);

pub const LEVER: FamilyDescriptor<LeverCodec> =
    FamilyDescriptor::new("LEVER", ident!("lever"), 69, LeverCodec)
        .with_default(0x5)
        .with_properties(SWITCH_PROPERTIES);

pub const STONE_BUTTON: FamilyDescriptor<FacingPoweredCodec<SwitchLayout>> =
    FamilyDescriptor::new("STONE_BUTTON", ident!("stone_button"), 77, FacingPoweredCodec::new())
        .with_default(0x5)
        .with_properties(SWITCH_PROPERTIES);

pub const WOODEN_BUTTON: FamilyDescriptor<FacingPoweredCodec<SwitchLayout>> =
    FamilyDescriptor::new("WOOD_BUTTON", ident!("wooden_button"), 143, FacingPoweredCodec::new())
        .with_default(0x5)
        .with_properties(SWITCH_PROPERTIES.with_fuel_power(100));

pub const STONE_PRESSURE_PLATE: FamilyDescriptor<PoweredCodec> =
    FamilyDescriptor::new("STONE_PLATE", ident!("stone_pressure_plate"), 70, PoweredCodec)
        .with_properties(SWITCH_PROPERTIES.requires_correct_tool_for_drops());

pub const WOODEN_PRESSURE_PLATE: FamilyDescriptor<PoweredCodec> =
    FamilyDescriptor::new("WOOD_PLATE", ident!("wooden_pressure_plate"), 72, PoweredCodec)
        .with_properties(SWITCH_PROPERTIES.with_fuel_power(300));

pub const TORCH: FamilyDescriptor<FacingCodec<TorchLayout>> =
    FamilyDescriptor::new("TORCH", ident!("torch"), 50, FacingCodec::new())
        .with_default(0x5)
        .with_properties(Properties::new().instant_break());

pub const REDSTONE_TORCH: FamilyDescriptor<FacingCodec<TorchLayout>> =
    FamilyDescriptor::new("REDSTONE_TORCH_ON", ident!("redstone_torch"), 76, FacingCodec::new())
        .with_default(0x5)
        .with_properties(Properties::new().instant_break());

pub const END_ROD: FamilyDescriptor<FacingCodec<RodLayout>> =
    FamilyDescriptor::new("END_ROD", ident!("end_rod"), 198, FacingCodec::new())
        .with_default(0x1)
        .with_properties(Properties::new().instant_break());

pub const IRON_DOOR: FamilyDescriptor<DoorCodec> =
    FamilyDescriptor::new("IRON_DOOR_BLOCK", ident!("iron_door"), 71, DoorCodec)
        .with_properties(METAL_DOOR_PROPERTIES);

pub const IRON_TRAPDOOR: FamilyDescriptor<TrapdoorCodec> =
    FamilyDescriptor::new("IRON_TRAPDOOR", ident!("iron_trapdoor"), 167, TrapdoorCodec)
        .with_properties(METAL_DOOR_PROPERTIES);
