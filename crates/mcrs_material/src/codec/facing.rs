use crate::attribute::{Facing, FacingAge, FacingOpen, FacingPowered, Lever, Stairs, Trapdoor};
use crate::codec::{Attaching, Capabilities, Codec, Unpack};
use mcrs_protocol::{Axis, DataValue, Direction};
use std::marker::PhantomData;

/// Assignment of facing directions to data bits for one group of blocks.
pub trait FacingLayout: Send + Sync + 'static {
    const FACES: &'static [(Direction, u8)];
    /// Packed in place of faces the layout does not list.
    const FALLBACK: Direction;
    const CAPABILITIES: Capabilities = Capabilities::empty();

    fn normalize(facing: Direction) -> Direction {
        if Self::FACES.iter().any(|(face, _)| *face == facing) {
            facing
        } else {
            Self::FALLBACK
        }
    }

    fn bits(facing: Direction) -> u8 {
        let facing = Self::normalize(facing);
        Self::FACES
            .iter()
            .find(|(face, _)| *face == facing)
            .map_or(0, |(_, bits)| *bits)
    }

    fn facing(bits: u8) -> Option<Direction> {
        Self::FACES
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|(face, _)| *face)
    }

    fn faces() -> impl Iterator<Item = Direction> {
        Self::FACES.iter().map(|(face, _)| *face)
    }
}

/// Layouts of blocks mounted on a neighbouring block.
pub trait Attached: FacingLayout {}

macro_rules! facing_layout {
    (
        $(#[$meta:meta])*
        $name:ident $([$attached:ident])? {
            fallback: $fallback:ident,
            $($face:ident => $bits:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl FacingLayout for $name {
            const FACES: &'static [(Direction, u8)] = &[$((Direction::$face, $bits)),+];
            const FALLBACK: Direction = Direction::$fallback;
            $(const CAPABILITIES: Capabilities = facing_layout!(@$attached);)?
        }

        $(facing_layout!(@impl $attached $name);)?
    };
    (@attached) => {
        Capabilities::ATTACHABLE
    };
    (@impl attached $name:ident) => {
        impl Attached for $name {}
    };
}

facing_layout! {
    /// Chests and furnaces.
    ChestLayout {
        fallback: North,
        North => 0x2,
        South => 0x3,
        West => 0x4,
        East => 0x5,
    }
}

facing_layout! {
    /// Ladders and wall signs: chest values, facing away from the wall they hang on.
    WallLayout[attached] {
        fallback: North,
        North => 0x2,
        South => 0x3,
        West => 0x4,
        East => 0x5,
    }
}

facing_layout! {
    /// Pumpkins, fence gates and cocoa pods.
    HorizontalLayout {
        fallback: South,
        South => 0x0,
        West => 0x1,
        North => 0x2,
        East => 0x3,
    }
}

facing_layout! {
    /// Dispensers, droppers and pistons.
    CubeLayout {
        fallback: North,
        Down => 0x0,
        Up => 0x1,
        North => 0x2,
        South => 0x3,
        West => 0x4,
        East => 0x5,
    }
}

facing_layout! {
    /// End rods: cube values, standing upright by default.
    RodLayout {
        fallback: Up,
        Down => 0x0,
        Up => 0x1,
        North => 0x2,
        South => 0x3,
        West => 0x4,
        East => 0x5,
    }
}

facing_layout! {
    TorchLayout[attached] {
        fallback: Up,
        East => 0x1,
        West => 0x2,
        South => 0x3,
        North => 0x4,
        Up => 0x5,
    }
}

facing_layout! {
    /// Levers and buttons.
    SwitchLayout[attached] {
        fallback: Up,
        Down => 0x0,
        East => 0x1,
        West => 0x2,
        South => 0x3,
        North => 0x4,
        Up => 0x5,
    }
}

facing_layout! {
    StairsLayout {
        fallback: East,
        East => 0x0,
        West => 0x1,
        South => 0x2,
        North => 0x3,
    }
}

facing_layout! {
    TrapdoorLayout[attached] {
        fallback: North,
        North => 0x0,
        South => 0x1,
        West => 0x2,
        East => 0x3,
    }
}

facing_layout! {
    /// Lower door halves.
    DoorLayout {
        fallback: East,
        East => 0x0,
        South => 0x1,
        West => 0x2,
        North => 0x3,
    }
}

pub struct FacingCodec<L>(PhantomData<L>);

impl<L> FacingCodec<L> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L: FacingLayout> Codec for FacingCodec<L> {
    type Attributes = Facing;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL.union(L::CAPABILITIES);

    fn pack(&self, attributes: &Facing) -> DataValue {
        DataValue::from_bits_truncate(L::bits(attributes.facing))
    }

    fn legal(&self) -> Vec<Facing> {
        L::faces().map(|facing| Facing { facing }).collect()
    }
}

impl<L: FacingLayout> Unpack for FacingCodec<L> {
    fn unpack(&self, code: DataValue) -> Option<Facing> {
        L::facing(code.get()).map(|facing| Facing { facing })
    }
}

impl<L: Attached> Attaching for FacingCodec<L> {}

/// Facing in the low three bits, power in bit 3.
pub struct FacingPoweredCodec<L>(PhantomData<L>);

impl<L> FacingPoweredCodec<L> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L: FacingLayout> Codec for FacingPoweredCodec<L> {
    type Attributes = FacingPowered;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL
        .union(Capabilities::POWERABLE)
        .union(L::CAPABILITIES);

    fn pack(&self, attributes: &FacingPowered) -> DataValue {
        DataValue::from_bits_truncate(L::bits(attributes.facing) | (attributes.powered as u8) << 3)
    }

    fn legal(&self) -> Vec<FacingPowered> {
        [false, true]
            .into_iter()
            .flat_map(|powered| L::faces().map(move |facing| FacingPowered { facing, powered }))
            .collect()
    }
}

impl<L: FacingLayout> Unpack for FacingPoweredCodec<L> {
    fn unpack(&self, code: DataValue) -> Option<FacingPowered> {
        L::facing(code.get() & 0x7).map(|facing| FacingPowered {
            facing,
            powered: code.contains(0x8),
        })
    }
}

impl<L: Attached> Attaching for FacingPoweredCodec<L> {}

/// Lever orientations by data value. Floor and ceiling levers take two values each, one per
/// axis the handle swings along.
const LEVER_ORIENTATIONS: [(Direction, Axis); 8] = [
    (Direction::Down, Axis::EastWest),
    (Direction::East, Axis::None),
    (Direction::West, Axis::None),
    (Direction::South, Axis::None),
    (Direction::North, Axis::None),
    (Direction::Up, Axis::NorthSouth),
    (Direction::Up, Axis::EastWest),
    (Direction::Down, Axis::NorthSouth),
];

/// Levers: orientation in the low three bits, power in bit 3. All sixteen values are used.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeverCodec;

impl LeverCodec {
    fn orientation(facing: Direction, along: Axis) -> u8 {
        match (facing, along) {
            (Direction::Down, Axis::NorthSouth) => 0x7,
            (Direction::Down, _) => 0x0,
            (Direction::Up, Axis::EastWest) => 0x6,
            (Direction::Up, _) => 0x5,
            (facing, _) => SwitchLayout::bits(facing),
        }
    }
}

impl Codec for LeverCodec {
    type Attributes = Lever;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL
        .union(Capabilities::POWERABLE)
        .union(Capabilities::ATTACHABLE);

    fn pack(&self, attributes: &Lever) -> DataValue {
        let orientation = Self::orientation(attributes.facing, attributes.along);
        DataValue::from_bits_truncate(orientation | (attributes.powered as u8) << 3)
    }

    fn legal(&self) -> Vec<Lever> {
        [false, true]
            .into_iter()
            .flat_map(|powered| {
                LEVER_ORIENTATIONS
                    .into_iter()
                    .map(move |(facing, along)| Lever {
                        facing,
                        powered,
                        along,
                    })
            })
            .collect()
    }
}

impl Unpack for LeverCodec {
    fn unpack(&self, code: DataValue) -> Option<Lever> {
        let (facing, along) = LEVER_ORIENTATIONS[(code.get() & 0x7) as usize];
        Some(Lever {
            facing,
            powered: code.contains(0x8),
            along,
        })
    }
}

impl Attaching for LeverCodec {}

/// Facing in the low two bits, open state in bit 2.
pub struct FacingOpenCodec<L>(PhantomData<L>);

impl<L> FacingOpenCodec<L> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L: FacingLayout> Codec for FacingOpenCodec<L> {
    type Attributes = FacingOpen;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL
        .union(Capabilities::OPENABLE)
        .union(L::CAPABILITIES);

    fn pack(&self, attributes: &FacingOpen) -> DataValue {
        DataValue::from_bits_truncate(L::bits(attributes.facing) | (attributes.open as u8) << 2)
    }

    fn legal(&self) -> Vec<FacingOpen> {
        [false, true]
            .into_iter()
            .flat_map(|open| L::faces().map(move |facing| FacingOpen { facing, open }))
            .collect()
    }
}

impl<L: FacingLayout> Unpack for FacingOpenCodec<L> {
    fn unpack(&self, code: DataValue) -> Option<FacingOpen> {
        if code.contains(0x8) {
            return None;
        }
        L::facing(code.get() & 0x3).map(|facing| FacingOpen {
            facing,
            open: code.contains(0x4),
        })
    }
}

/// Facing in the low two bits, open in bit 2, top half in bit 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrapdoorCodec;

impl Codec for TrapdoorCodec {
    type Attributes = Trapdoor;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL
        .union(Capabilities::OPENABLE)
        .union(TrapdoorLayout::CAPABILITIES);

    fn pack(&self, attributes: &Trapdoor) -> DataValue {
        DataValue::from_bits_truncate(
            TrapdoorLayout::bits(attributes.facing)
                | (attributes.open as u8) << 2
                | (attributes.top as u8) << 3,
        )
    }

    fn legal(&self) -> Vec<Trapdoor> {
        let mut legal = Vec::with_capacity(DataValue::COUNT);
        for top in [false, true] {
            for open in [false, true] {
                legal.extend(
                    TrapdoorLayout::faces().map(|facing| Trapdoor { facing, open, top }),
                );
            }
        }
        legal
    }
}

impl Unpack for TrapdoorCodec {
    fn unpack(&self, code: DataValue) -> Option<Trapdoor> {
        TrapdoorLayout::facing(code.get() & 0x3).map(|facing| Trapdoor {
            facing,
            open: code.contains(0x4),
            top: code.contains(0x8),
        })
    }
}

impl Attaching for TrapdoorCodec {}

/// Facing in the low two bits, upside-down in bit 2.
#[derive(Clone, Copy, Debug, Default)]
pub struct StairsCodec;

impl Codec for StairsCodec {
    type Attributes = Stairs;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL;

    fn pack(&self, attributes: &Stairs) -> DataValue {
        DataValue::from_bits_truncate(
            StairsLayout::bits(attributes.facing) | (attributes.upside_down as u8) << 2,
        )
    }

    fn legal(&self) -> Vec<Stairs> {
        [false, true]
            .into_iter()
            .flat_map(|upside_down| {
                StairsLayout::faces().map(move |facing| Stairs {
                    facing,
                    upside_down,
                })
            })
            .collect()
    }
}

impl Unpack for StairsCodec {
    fn unpack(&self, code: DataValue) -> Option<Stairs> {
        if code.contains(0x8) {
            return None;
        }
        StairsLayout::facing(code.get() & 0x3).map(|facing| Stairs {
            facing,
            upside_down: code.contains(0x4),
        })
    }
}

/// Cocoa pods: horizontal facing in the low two bits, age 0 to 2 in the high two.
#[derive(Clone, Copy, Debug, Default)]
pub struct CocoaCodec;

impl CocoaCodec {
    pub const MAX_AGE: u8 = 2;
}

impl Codec for CocoaCodec {
    type Attributes = FacingAge;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL.union(Capabilities::AGEABLE);

    fn pack(&self, attributes: &FacingAge) -> DataValue {
        let age = if attributes.age > Self::MAX_AGE { 0 } else { attributes.age };
        DataValue::from_bits_truncate(HorizontalLayout::bits(attributes.facing) | age << 2)
    }

    fn legal(&self) -> Vec<FacingAge> {
        (0..=Self::MAX_AGE)
            .flat_map(|age| HorizontalLayout::faces().map(move |facing| FacingAge { facing, age }))
            .collect()
    }
}

impl Unpack for CocoaCodec {
    fn unpack(&self, code: DataValue) -> Option<FacingAge> {
        let age = code.get() >> 2;
        if age > Self::MAX_AGE {
            return None;
        }
        HorizontalLayout::facing(code.get() & 0x3).map(|facing| FacingAge { facing, age })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::assert_invertible;

    fn facing(facing: Direction) -> Facing {
        Facing { facing }
    }

    #[test]
    fn chest_layout() {
        let codec = FacingCodec::<ChestLayout>::new();
        assert_eq!(codec.pack(&facing(Direction::North)).get(), 0x2);
        assert_eq!(codec.pack(&facing(Direction::South)).get(), 0x3);
        assert_eq!(codec.pack(&facing(Direction::West)).get(), 0x4);
        assert_eq!(codec.pack(&facing(Direction::East)).get(), 0x5);
        assert_eq!(codec.pack(&facing(Direction::Center)).get(), 0x2);
        assert_eq!(codec.pack(&facing(Direction::Up)).get(), 0x2);
        assert_eq!(codec.unpack(DataValue::MIN), None);
    }

    #[test]
    fn facing_codecs_are_invertible() {
        assert_invertible(&FacingCodec::<ChestLayout>::new());
        assert_invertible(&FacingCodec::<HorizontalLayout>::new());
        assert_invertible(&FacingCodec::<CubeLayout>::new());
        assert_invertible(&FacingCodec::<TorchLayout>::new());
        assert_invertible(&FacingPoweredCodec::<CubeLayout>::new());
        assert_invertible(&FacingPoweredCodec::<SwitchLayout>::new());
        assert_invertible(&LeverCodec);
        assert_invertible(&FacingOpenCodec::<HorizontalLayout>::new());
        assert_invertible(&TrapdoorCodec);
        assert_invertible(&StairsCodec);
        assert_invertible(&CocoaCodec);
    }

    #[test]
    fn facing_and_open_bits_are_disjoint() {
        let codec = FacingOpenCodec::<HorizontalLayout>::new();
        for facing in HorizontalLayout::faces() {
            let closed = codec.pack(&FacingOpen {
                facing,
                open: false,
            });
            let open = codec.pack(&FacingOpen {
                facing,
                open: true,
            });
            assert_eq!(closed.get() & 0x4, 0);
            assert_eq!(open.get(), closed.get() | 0x4);
        }
        assert_eq!(TrapdoorCodec.legal().len(), 16);
    }

    #[test]
    fn fallbacks_follow_layout() {
        assert_eq!(RodLayout::bits(Direction::Center), 0x1);
        assert_eq!(TorchLayout::bits(Direction::Down), 0x5);
        assert_eq!(StairsLayout::bits(Direction::Up), 0x0);
        assert_eq!(HorizontalLayout::normalize(Direction::Down), Direction::South);
        let cocoa = FacingAge {
            facing: Direction::East,
            age: 5,
        };
        assert_eq!(CocoaCodec.pack(&cocoa).get(), 0x3);
    }

    #[test]
    fn lever_uses_every_data_value() {
        assert_eq!(LeverCodec.legal().len(), DataValue::COUNT);
        let floor_east = Lever {
            facing: Direction::Up,
            powered: true,
            along: Axis::EastWest,
        };
        assert_eq!(LeverCodec.pack(&floor_east).get(), 0xE);
        assert_eq!(
            LeverCodec.unpack(DataValue::from_bits_truncate(0x7)),
            Some(Lever {
                facing: Direction::Down,
                powered: false,
                along: Axis::NorthSouth,
            })
        );
        // wall levers ignore the axis, floor levers without one stand north-south
        let wall = Lever {
            facing: Direction::West,
            powered: false,
            along: Axis::UpDown,
        };
        assert_eq!(LeverCodec.pack(&wall).get(), 0x2);
        let floor = Lever {
            facing: Direction::Up,
            powered: false,
            along: Axis::None,
        };
        assert_eq!(LeverCodec.pack(&floor).get(), 0x5);
        let nowhere = Lever {
            facing: Direction::Center,
            powered: false,
            along: Axis::None,
        };
        assert_eq!(LeverCodec.pack(&nowhere).get(), 0x5);
    }

    #[test]
    fn attached_layouts_report_capability() {
        assert!(FacingCodec::<WallLayout>::CAPABILITIES.contains(Capabilities::ATTACHABLE));
        assert!(!FacingCodec::<ChestLayout>::CAPABILITIES.contains(Capabilities::ATTACHABLE));
        assert!(TrapdoorCodec::CAPABILITIES.contains(Capabilities::ATTACHABLE));
    }
}
