//! Pack attribute tuples into 4-bit data values and, where the data value determines every
//! attribute, unpack them again.

mod door;
mod facing;
mod rail;
mod slab;

pub use door::DoorCodec;
pub use facing::{
    Attached, ChestLayout, CocoaCodec, CubeLayout, DoorLayout, FacingCodec, FacingLayout,
    FacingOpenCodec, FacingPoweredCodec, HorizontalLayout, LeverCodec, RodLayout, StairsCodec,
    StairsLayout, SwitchLayout, TorchLayout, TrapdoorCodec, TrapdoorLayout, WallLayout,
};
pub use rail::{PoweredRailCodec, RailCodec};
pub use slab::{SlabCodec, SlabMaterial};

use crate::attribute::tag::{MushroomTexture, Tag, WoodSpecies};
use crate::attribute::{Age, Attributes, Oriented, Pillar, Plain, Powered, Sapling, Tagged};
use mcrs_protocol::{Axis, DataValue};

bitflags::bitflags! {
    /// Attribute dimensions a family exposes.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        const DIRECTIONAL = 1;
        const POWERABLE   = 2;
        const AGEABLE     = 4;
        const OPENABLE    = 8;
        const VARIANTABLE = 16;
        const ROTATABLE   = 32;
        const SLAB_TYPED  = 64;
        const FUEL_SOURCE = 128;
        const ATTACHABLE  = 256;
        const RAIL_SHAPED = 512;
    }
}

pub trait Codec: Send + Sync + 'static {
    type Attributes: Attributes;

    const CAPABILITIES: Capabilities;

    /// Total over the attribute domain. Values the family cannot represent are replaced by the
    /// family's canonical value before packing.
    fn pack(&self, attributes: &Self::Attributes) -> DataValue;

    /// Every attribute tuple the family registers a variant for, in registration order.
    fn legal(&self) -> Vec<Self::Attributes>;
}

/// Codecs whose data value determines every attribute.
pub trait Unpack: Codec {
    fn unpack(&self, code: DataValue) -> Option<Self::Attributes>;
}

/// Codecs whose blocks hang off the face opposite their facing.
pub trait Attaching: Codec {}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlainCodec;

impl Codec for PlainCodec {
    type Attributes = Plain;

    const CAPABILITIES: Capabilities = Capabilities::empty();

    fn pack(&self, _: &Plain) -> DataValue {
        DataValue::MIN
    }

    fn legal(&self) -> Vec<Plain> {
        vec![Plain]
    }
}

impl Unpack for PlainCodec {
    fn unpack(&self, code: DataValue) -> Option<Plain> {
        (code == DataValue::MIN).then_some(Plain)
    }
}

/// Pressure plates: bit 0 is the power state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoweredCodec;

impl Codec for PoweredCodec {
    type Attributes = Powered;

    const CAPABILITIES: Capabilities = Capabilities::POWERABLE;

    fn pack(&self, attributes: &Powered) -> DataValue {
        DataValue::from_bits_truncate(attributes.powered as u8)
    }

    fn legal(&self) -> Vec<Powered> {
        vec![Powered { powered: false }, Powered { powered: true }]
    }
}

impl Unpack for PoweredCodec {
    fn unpack(&self, code: DataValue) -> Option<Powered> {
        match code.get() {
            0 => Some(Powered { powered: false }),
            1 => Some(Powered { powered: true }),
            _ => None,
        }
    }
}

/// Growth stage stored as the whole data value. Stages past `max` pack as stage 0.
#[derive(Clone, Copy, Debug)]
pub struct AgeCodec {
    pub max: u8,
}

impl AgeCodec {
    pub const fn new(max: u8) -> Self {
        Self { max }
    }

    fn normalize(&self, age: u8) -> u8 {
        if age > self.max { 0 } else { age }
    }
}

impl Codec for AgeCodec {
    type Attributes = Age;

    const CAPABILITIES: Capabilities = Capabilities::AGEABLE;

    fn pack(&self, attributes: &Age) -> DataValue {
        DataValue::from_bits_truncate(self.normalize(attributes.age))
    }

    fn legal(&self) -> Vec<Age> {
        (0..=self.max.min(DataValue::MAX.get()))
            .map(|age| Age { age })
            .collect()
    }
}

impl Unpack for AgeCodec {
    fn unpack(&self, code: DataValue) -> Option<Age> {
        (code.get() <= self.max).then_some(Age { age: code.get() })
    }
}

/// The data value is the tag's position in `tags`; tags outside the list pack as `tags[0]`.
#[derive(Clone, Copy, Debug)]
pub struct TagCodec<T: 'static> {
    pub tags: &'static [T],
}

impl<T: Tag> TagCodec<T> {
    pub const fn new() -> Self {
        Self { tags: T::ALL }
    }

    pub const fn of(tags: &'static [T]) -> Self {
        Self { tags }
    }
}

fn position_in<T: PartialEq>(tags: &[T], tag: &T) -> u8 {
    tags.iter().position(|t| t == tag).unwrap_or(0) as u8
}

impl<T: Tag> Codec for TagCodec<T> {
    type Attributes = Tagged<T>;

    const CAPABILITIES: Capabilities = Capabilities::VARIANTABLE;

    fn pack(&self, attributes: &Tagged<T>) -> DataValue {
        DataValue::from_bits_truncate(position_in(self.tags, &attributes.tag))
    }

    fn legal(&self) -> Vec<Tagged<T>> {
        self.tags
            .iter()
            .take(DataValue::COUNT)
            .map(|&tag| Tagged { tag })
            .collect()
    }
}

impl<T: Tag> Unpack for TagCodec<T> {
    fn unpack(&self, code: DataValue) -> Option<Tagged<T>> {
        self.tags
            .get(code.get() as usize)
            .map(|&tag| Tagged { tag })
    }
}

/// Huge mushroom blocks: data values 0 to 10, then 14 and 15.
#[derive(Clone, Copy, Debug, Default)]
pub struct MushroomCodec;

impl Codec for MushroomCodec {
    type Attributes = Tagged<MushroomTexture>;

    const CAPABILITIES: Capabilities = Capabilities::VARIANTABLE;

    fn pack(&self, attributes: &Self::Attributes) -> DataValue {
        DataValue::from_bits_truncate(attributes.tag.data())
    }

    fn legal(&self) -> Vec<Self::Attributes> {
        MushroomTexture::ALL
            .iter()
            .map(|&tag| Tagged { tag })
            .collect()
    }
}

impl Unpack for MushroomCodec {
    fn unpack(&self, code: DataValue) -> Option<Self::Attributes> {
        MushroomTexture::ALL
            .iter()
            .find(|tag| tag.data() == code.get())
            .map(|&tag| Tagged { tag })
    }
}

const fn axis_bits(axis: Axis) -> u8 {
    match axis {
        Axis::UpDown => 0x0,
        Axis::EastWest => 0x4,
        Axis::NorthSouth => 0x8,
        Axis::None => 0xC,
    }
}

const fn axis_of(bits: u8) -> Axis {
    match bits & 0xC {
        0x0 => Axis::UpDown,
        0x4 => Axis::EastWest,
        0x8 => Axis::NorthSouth,
        _ => Axis::None,
    }
}

/// Logs: species in the low two bits, grain axis in the high two.
#[derive(Clone, Copy, Debug)]
pub struct PillarCodec<T: 'static> {
    pub species: &'static [T],
}

impl<T: Tag> PillarCodec<T> {
    pub const fn of(species: &'static [T]) -> Self {
        Self { species }
    }
}

impl<T: Tag> Codec for PillarCodec<T> {
    type Attributes = Pillar<T>;

    const CAPABILITIES: Capabilities = Capabilities::VARIANTABLE.union(Capabilities::ROTATABLE);

    fn pack(&self, attributes: &Pillar<T>) -> DataValue {
        let species = position_in(self.species, &attributes.species) & 0x3;
        DataValue::from_bits_truncate(species | axis_bits(attributes.axis))
    }

    fn legal(&self) -> Vec<Pillar<T>> {
        Axis::all()
            .into_iter()
            .flat_map(|axis| {
                self.species
                    .iter()
                    .take(4)
                    .map(move |&species| Pillar { species, axis })
            })
            .collect()
    }
}

impl<T: Tag> Unpack for PillarCodec<T> {
    fn unpack(&self, code: DataValue) -> Option<Pillar<T>> {
        let species = *self.species.get((code.get() & 0x3) as usize)?;
        Some(Pillar {
            species,
            axis: axis_of(code.get()),
        })
    }
}

/// Hay bales and bone blocks: axis only, no unoriented form.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrientedCodec;

impl Codec for OrientedCodec {
    type Attributes = Oriented;

    const CAPABILITIES: Capabilities = Capabilities::ROTATABLE;

    fn pack(&self, attributes: &Oriented) -> DataValue {
        let axis = match attributes.axis {
            Axis::None => Axis::UpDown,
            axis => axis,
        };
        DataValue::from_bits_truncate(axis_bits(axis))
    }

    fn legal(&self) -> Vec<Oriented> {
        [Axis::UpDown, Axis::EastWest, Axis::NorthSouth]
            .into_iter()
            .map(|axis| Oriented { axis })
            .collect()
    }
}

impl Unpack for OrientedCodec {
    fn unpack(&self, code: DataValue) -> Option<Oriented> {
        match axis_of(code.get()) {
            Axis::None => None,
            _ if code.get() & 0x3 != 0 => None,
            axis => Some(Oriented { axis }),
        }
    }
}

/// Species in the low three bits, growth stage in bit 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct SaplingCodec;

impl SaplingCodec {
    pub const MAX_AGE: u8 = 1;
}

impl Codec for SaplingCodec {
    type Attributes = Sapling;

    const CAPABILITIES: Capabilities = Capabilities::VARIANTABLE.union(Capabilities::AGEABLE);

    fn pack(&self, attributes: &Sapling) -> DataValue {
        let age = if attributes.age > Self::MAX_AGE { 0 } else { attributes.age };
        DataValue::from_bits_truncate(attributes.species.position() as u8 | age << 3)
    }

    fn legal(&self) -> Vec<Sapling> {
        (0..=Self::MAX_AGE)
            .flat_map(|age| {
                WoodSpecies::ALL
                    .iter()
                    .map(move |&species| Sapling { species, age })
            })
            .collect()
    }
}

impl Unpack for SaplingCodec {
    fn unpack(&self, code: DataValue) -> Option<Sapling> {
        let species = *WoodSpecies::ALL.get((code.get() & 0x7) as usize)?;
        Some(Sapling {
            species,
            age: code.get() >> 3,
        })
    }
}
