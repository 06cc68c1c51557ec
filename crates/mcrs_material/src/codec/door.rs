use crate::attribute::Door;
use crate::attribute::tag::{DoorHalf, DoorHinge};
use crate::codec::facing::{DoorLayout, FacingLayout};
use crate::codec::{Capabilities, Codec};
use mcrs_protocol::{DataValue, Direction};

/// Two-block doors. Bit 3 selects the half; the lower half stores facing and open state,
/// the upper half stores hinge side and power. A data value therefore never determines the
/// whole tuple, and this codec has no unpack.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoorCodec;

impl DoorCodec {
    const UPPER: u8 = 0x8;

    /// Attribute values an upper half is registered with for the bits it does not store.
    pub const UPPER_FACING: Direction = Direction::East;
}

impl Codec for DoorCodec {
    type Attributes = Door;

    const CAPABILITIES: Capabilities = Capabilities::DIRECTIONAL
        .union(Capabilities::OPENABLE)
        .union(Capabilities::POWERABLE);

    fn pack(&self, attributes: &Door) -> DataValue {
        let bits = match attributes.half {
            DoorHalf::Lower => DoorLayout::bits(attributes.facing) | (attributes.open as u8) << 2,
            DoorHalf::Upper => {
                Self::UPPER
                    | (attributes.hinge == DoorHinge::Right) as u8
                    | (attributes.powered as u8) << 1
            }
        };
        DataValue::from_bits_truncate(bits)
    }

    fn legal(&self) -> Vec<Door> {
        let mut legal = Vec::with_capacity(12);
        for open in [false, true] {
            legal.extend(DoorLayout::faces().map(|facing| Door {
                half: DoorHalf::Lower,
                facing,
                open,
                hinge: DoorHinge::Left,
                powered: false,
            }));
        }
        for powered in [false, true] {
            for hinge in [DoorHinge::Left, DoorHinge::Right] {
                legal.push(Door {
                    half: DoorHalf::Upper,
                    facing: Self::UPPER_FACING,
                    open: false,
                    hinge,
                    powered,
                });
            }
        }
        legal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_layout() {
        let lower = Door {
            half: DoorHalf::Lower,
            facing: Direction::North,
            open: true,
            hinge: DoorHinge::Left,
            powered: false,
        };
        assert_eq!(DoorCodec.pack(&lower).get(), 0x7);

        let upper = Door {
            half: DoorHalf::Upper,
            hinge: DoorHinge::Right,
            powered: true,
            ..lower
        };
        assert_eq!(DoorCodec.pack(&upper).get(), 0xB);
        // the upper half does not store facing
        let turned = Door {
            facing: Direction::South,
            ..upper
        };
        assert_eq!(DoorCodec.pack(&turned), DoorCodec.pack(&upper));
    }

    #[test]
    fn legal_doors_cover_twelve_codes() {
        let mut codes = DoorCodec
            .legal()
            .iter()
            .map(|door| DoorCodec.pack(door).get())
            .collect::<Vec<_>>();
        codes.sort_unstable();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }
}
