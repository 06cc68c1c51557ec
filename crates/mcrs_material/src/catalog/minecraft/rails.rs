use crate::behaviour::Properties;
use crate::codec::{PoweredRailCodec, RailCodec};
use crate::family::FamilyDescriptor;
use mcrs_protocol::ident;

const RAIL_PROPERTIES: Properties = Properties::new().with_strength(0.7);

pub const RAIL: FamilyDescriptor<RailCodec> =
    FamilyDescriptor::new("RAILS", ident!("rail"), 66, RailCodec).with_properties(RAIL_PROPERTIES);

pub const POWERED_RAIL: FamilyDescriptor<PoweredRailCodec> =
    FamilyDescriptor::new("POWERED_RAIL", ident!("golden_rail"), 27, PoweredRailCodec)
        .with_properties(RAIL_PROPERTIES);

pub const DETECTOR_RAIL: FamilyDescriptor<PoweredRailCodec> =
    FamilyDescriptor::new("DETECTOR_RAIL", ident!("detector_rail"), 28, PoweredRailCodec)
        .with_properties(RAIL_PROPERTIES);

pub const ACTIVATOR_RAIL: FamilyDescriptor<PoweredRailCodec> =
    FamilyDescriptor::new("ACTIVATOR_RAIL", ident!("activator_rail"), 157, PoweredRailCodec)
        .with_properties(RAIL_PROPERTIES);
