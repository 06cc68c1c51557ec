//! Decoded attribute tuples, one shape per codec.

pub mod tag;

use crate::attribute::tag::{DoorHalf, DoorHinge, RailShape, SlabHalf, Tag, WoodSpecies};
use mcrs_protocol::{Axis, Direction};
use serde::Serialize;
use std::fmt::Debug;

pub trait Attributes: Clone + PartialEq + Debug + Serialize + Send + Sync + 'static {
    /// Name a variant with these attributes is registered under.
    fn variant_name(&self) -> String;
}

pub trait HasFacing: Attributes {
    fn facing(&self) -> Direction;
    fn set_facing(&mut self, facing: Direction);
}

pub trait HasPower: Attributes {
    fn powered(&self) -> bool;
    fn set_powered(&mut self, powered: bool);
}

pub trait HasAge: Attributes {
    fn age(&self) -> u8;
    fn set_age(&mut self, age: u8);
}

pub trait HasOpen: Attributes {
    fn open(&self) -> bool;
    fn set_open(&mut self, open: bool);
}

pub trait HasVariant: Attributes {
    type Tag: Tag;

    fn variant(&self) -> Self::Tag;
    fn set_variant(&mut self, tag: Self::Tag);
}

pub trait HasAxis: Attributes {
    fn axis(&self) -> Axis;
    fn set_axis(&mut self, axis: Axis);
}

pub trait HasSlabHalf: Attributes {
    fn half(&self) -> SlabHalf;
    fn set_half(&mut self, half: SlabHalf);
}

pub trait HasRailShape: Attributes {
    fn shape(&self) -> RailShape;
    fn set_shape(&mut self, shape: RailShape);
}

macro_rules! accessor {
    ($ty:ty, $trait:ident, $field:ident: $value:ty, $get:ident, $set:ident) => {
        impl $trait for $ty {
            #[inline]
            fn $get(&self) -> $value {
                self.$field
            }

            #[inline]
            fn $set(&mut self, value: $value) {
                self.$field = value;
            }
        }
    };
}

fn suffixed(base: &str, flags: &[(bool, &str)]) -> String {
    let mut name = base.to_owned();
    for (set, suffix) in flags {
        if *set {
            name.push('_');
            name.push_str(suffix);
        }
    }
    name
}

/// Families with a single variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Plain;

impl Attributes for Plain {
    fn variant_name(&self) -> String {
        "DEFAULT".to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Facing {
    pub facing: Direction,
}

impl Attributes for Facing {
    fn variant_name(&self) -> String {
        self.facing.name().to_owned()
    }
}

accessor!(Facing, HasFacing, facing: Direction, facing, set_facing);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FacingPowered {
    pub facing: Direction,
    pub powered: bool,
}

impl Attributes for FacingPowered {
    fn variant_name(&self) -> String {
        suffixed(self.facing.name(), &[(self.powered, "POWERED")])
    }
}

accessor!(FacingPowered, HasFacing, facing: Direction, facing, set_facing);
accessor!(FacingPowered, HasPower, powered: bool, powered, set_powered);

/// Levers. Floor and ceiling levers also record which horizontal axis the handle swings
/// along; wall levers carry [`Axis::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Lever {
    pub facing: Direction,
    pub powered: bool,
    pub along: Axis,
}

impl Attributes for Lever {
    fn variant_name(&self) -> String {
        let base = match self.along {
            Axis::None => self.facing.name().to_owned(),
            along => format!("{}_{}", self.facing.name(), along.name()),
        };
        suffixed(&base, &[(self.powered, "POWERED")])
    }
}

accessor!(Lever, HasFacing, facing: Direction, facing, set_facing);
accessor!(Lever, HasPower, powered: bool, powered, set_powered);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FacingOpen {
    pub facing: Direction,
    pub open: bool,
}

impl Attributes for FacingOpen {
    fn variant_name(&self) -> String {
        suffixed(self.facing.name(), &[(self.open, "OPEN")])
    }
}

accessor!(FacingOpen, HasFacing, facing: Direction, facing, set_facing);
accessor!(FacingOpen, HasOpen, open: bool, open, set_open);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Trapdoor {
    pub facing: Direction,
    pub open: bool,
    /// Placed against the upper half of a block.
    pub top: bool,
}

impl Attributes for Trapdoor {
    fn variant_name(&self) -> String {
        suffixed(self.facing.name(), &[(self.top, "TOP"), (self.open, "OPEN")])
    }
}

accessor!(Trapdoor, HasFacing, facing: Direction, facing, set_facing);
accessor!(Trapdoor, HasOpen, open: bool, open, set_open);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Stairs {
    pub facing: Direction,
    pub upside_down: bool,
}

impl Attributes for Stairs {
    fn variant_name(&self) -> String {
        suffixed(self.facing.name(), &[(self.upside_down, "UPSIDE_DOWN")])
    }
}

accessor!(Stairs, HasFacing, facing: Direction, facing, set_facing);

/// Both halves of a door share the attribute shape, but each half only stores part of it:
/// the lower half keeps facing and open, the upper half keeps hinge and powered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Door {
    pub half: DoorHalf,
    pub facing: Direction,
    pub open: bool,
    pub hinge: DoorHinge,
    pub powered: bool,
}

impl Attributes for Door {
    fn variant_name(&self) -> String {
        match self.half {
            DoorHalf::Lower => format!(
                "LOWER_{}",
                suffixed(self.facing.name(), &[(self.open, "OPEN")])
            ),
            DoorHalf::Upper => format!(
                "UPPER_{}",
                suffixed(self.hinge.name(), &[(self.powered, "POWERED")])
            ),
        }
    }
}

accessor!(Door, HasFacing, facing: Direction, facing, set_facing);
accessor!(Door, HasOpen, open: bool, open, set_open);
accessor!(Door, HasPower, powered: bool, powered, set_powered);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FacingAge {
    pub facing: Direction,
    pub age: u8,
}

impl Attributes for FacingAge {
    fn variant_name(&self) -> String {
        format!("{}_AGE_{}", self.facing.name(), self.age)
    }
}

accessor!(FacingAge, HasFacing, facing: Direction, facing, set_facing);
accessor!(FacingAge, HasAge, age: u8, age, set_age);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Age {
    pub age: u8,
}

impl Attributes for Age {
    fn variant_name(&self) -> String {
        format!("AGE_{}", self.age)
    }
}

accessor!(Age, HasAge, age: u8, age, set_age);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Powered {
    pub powered: bool,
}

impl Attributes for Powered {
    fn variant_name(&self) -> String {
        let name = if self.powered { "POWERED" } else { "UNPOWERED" };
        name.to_owned()
    }
}

accessor!(Powered, HasPower, powered: bool, powered, set_powered);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tagged<T> {
    pub tag: T,
}

impl<T: Tag> Attributes for Tagged<T> {
    fn variant_name(&self) -> String {
        self.tag.name().to_owned()
    }
}

impl<T: Tag> HasVariant for Tagged<T> {
    type Tag = T;

    fn variant(&self) -> T {
        self.tag
    }

    fn set_variant(&mut self, tag: T) {
        self.tag = tag;
    }
}

/// Logs and other blocks with a species and a grain direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar<T> {
    pub species: T,
    pub axis: Axis,
}

impl<T: Tag> Attributes for Pillar<T> {
    fn variant_name(&self) -> String {
        format!("{}_{}", self.species.name(), self.axis.name())
    }
}

impl<T: Tag> HasVariant for Pillar<T> {
    type Tag = T;

    fn variant(&self) -> T {
        self.species
    }

    fn set_variant(&mut self, tag: T) {
        self.species = tag;
    }
}

impl<T: Tag> HasAxis for Pillar<T> {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Oriented {
    pub axis: Axis,
}

impl Attributes for Oriented {
    fn variant_name(&self) -> String {
        self.axis.name().to_owned()
    }
}

accessor!(Oriented, HasAxis, axis: Axis, axis, set_axis);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Slab<T> {
    pub kind: T,
    pub half: SlabHalf,
}

impl<T: Tag> Attributes for Slab<T> {
    fn variant_name(&self) -> String {
        format!("{}_{}", self.kind.name(), self.half.name())
    }
}

impl<T: Tag> HasVariant for Slab<T> {
    type Tag = T;

    fn variant(&self) -> T {
        self.kind
    }

    fn set_variant(&mut self, tag: T) {
        self.kind = tag;
    }
}

impl<T: Tag> HasSlabHalf for Slab<T> {
    fn half(&self) -> SlabHalf {
        self.half
    }

    fn set_half(&mut self, half: SlabHalf) {
        self.half = half;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Sapling {
    pub species: WoodSpecies,
    pub age: u8,
}

impl Attributes for Sapling {
    fn variant_name(&self) -> String {
        format!("{}_AGE_{}", self.species.name(), self.age)
    }
}

accessor!(Sapling, HasAge, age: u8, age, set_age);

impl HasVariant for Sapling {
    type Tag = WoodSpecies;

    fn variant(&self) -> WoodSpecies {
        self.species
    }

    fn set_variant(&mut self, tag: WoodSpecies) {
        self.species = tag;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rail {
    pub shape: RailShape,
}

impl Attributes for Rail {
    fn variant_name(&self) -> String {
        self.shape.name().to_owned()
    }
}

accessor!(Rail, HasRailShape, shape: RailShape, shape, set_shape);

/// Powered, detector and activator rails: straight shapes only, plus a power bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PoweredRail {
    pub shape: RailShape,
    pub powered: bool,
}

impl Attributes for PoweredRail {
    fn variant_name(&self) -> String {
        suffixed(self.shape.name(), &[(self.powered, "POWERED")])
    }
}

accessor!(PoweredRail, HasRailShape, shape: RailShape, shape, set_shape);
accessor!(PoweredRail, HasPower, powered: bool, powered, set_powered);
