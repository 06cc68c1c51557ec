//! One trait per attribute dimension. Each getter reads the variant's attributes and each
//! `with_*` operator returns the registered variant with that one attribute changed, falling
//! back the same way [`Family::resolve`](crate::Family::resolve) does.

use crate::attribute::tag::{RailShape, SlabHalf, Tag};
use crate::attribute::{
    HasAge, HasAxis, HasFacing, HasOpen, HasPower, HasRailShape, HasSlabHalf, HasVariant,
};
use crate::codec::{Attaching, Codec};
use crate::material::Material;
use mcrs_protocol::{Axis, Direction};

pub trait Directional: Sized {
    fn facing(&self) -> Direction;
    /// Faces the family cannot store resolve to its default facing.
    fn with_facing(&self, facing: Direction) -> Self;
}

pub trait Powerable: Sized {
    fn is_powered(&self) -> bool;
    fn with_powered(&self, powered: bool) -> Self;
}

pub trait Ageable: Sized {
    fn age(&self) -> u8;
    /// Ages past the family's maximum resolve to age 0.
    fn with_age(&self, age: u8) -> Self;
}

pub trait Openable: Sized {
    fn is_open(&self) -> bool;
    fn with_open(&self, open: bool) -> Self;
}

pub trait Variantable: Sized {
    type Tag: Tag;

    fn variant(&self) -> Self::Tag;
    /// Tags the family does not carry resolve to its canonical tag.
    fn with_variant(&self, tag: Self::Tag) -> Self;
}

pub trait Rotatable: Sized {
    fn axis(&self) -> Axis;
    fn with_axis(&self, axis: Axis) -> Self;

    fn facing(&self) -> Direction {
        self.axis().facing()
    }
}

pub trait SlabTyped: Variantable {
    fn slab_half(&self) -> SlabHalf;
    fn with_slab_half(&self, half: SlabHalf) -> Self;
}

pub trait RailShaped: Sized {
    fn rail_shape(&self) -> RailShape;
    fn with_rail_shape(&self, shape: RailShape) -> Self;
}

pub trait FuelSource {
    /// Furnace burn time in ticks.
    fn fuel_power(&self) -> u16;

    fn is_fuel(&self) -> bool {
        self.fuel_power() > 0
    }
}

pub trait Attachable: Directional {
    /// The face of the neighbouring block this one hangs off.
    fn attached_face(&self) -> Direction {
        self.facing().opposite()
    }
}

impl<C> Directional for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasFacing,
{
    fn facing(&self) -> Direction {
        self.attributes().facing()
    }

    fn with_facing(&self, facing: Direction) -> Self {
        self.with_attributes(|a| a.set_facing(facing))
    }
}

impl<C> Powerable for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasPower,
{
    fn is_powered(&self) -> bool {
        self.attributes().powered()
    }

    fn with_powered(&self, powered: bool) -> Self {
        self.with_attributes(|a| a.set_powered(powered))
    }
}

impl<C> Ageable for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasAge,
{
    fn age(&self) -> u8 {
        self.attributes().age()
    }

    fn with_age(&self, age: u8) -> Self {
        self.with_attributes(|a| a.set_age(age))
    }
}

impl<C> Openable for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasOpen,
{
    fn is_open(&self) -> bool {
        self.attributes().open()
    }

    fn with_open(&self, open: bool) -> Self {
        self.with_attributes(|a| a.set_open(open))
    }
}

impl<C> Variantable for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasVariant,
{
    type Tag = <C::Attributes as HasVariant>::Tag;

    fn variant(&self) -> Self::Tag {
        self.attributes().variant()
    }

    fn with_variant(&self, tag: Self::Tag) -> Self {
        self.with_attributes(|a| a.set_variant(tag))
    }
}

impl<C> Rotatable for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasAxis,
{
    fn axis(&self) -> Axis {
        self.attributes().axis()
    }

    fn with_axis(&self, axis: Axis) -> Self {
        self.with_attributes(|a| a.set_axis(axis))
    }
}

impl<C> SlabTyped for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasSlabHalf + HasVariant,
{
    fn slab_half(&self) -> SlabHalf {
        self.attributes().half()
    }

    fn with_slab_half(&self, half: SlabHalf) -> Self {
        self.with_attributes(|a| a.set_half(half))
    }
}

impl<C> RailShaped for Material<'_, C>
where
    C: Codec,
    C::Attributes: HasRailShape,
{
    fn rail_shape(&self) -> RailShape {
        self.attributes().shape()
    }

    fn with_rail_shape(&self, shape: RailShape) -> Self {
        self.with_attributes(|a| a.set_shape(shape))
    }
}

impl<C: Codec> FuelSource for Material<'_, C> {
    fn fuel_power(&self) -> u16 {
        self.physical().fuel_power()
    }
}

impl<C> Attachable for Material<'_, C>
where
    C: Attaching,
    C::Attributes: HasFacing,
{
}
