use crate::attribute::tag::{RailShape, Tag};
use crate::attribute::{PoweredRail, Rail};
use crate::codec::{Capabilities, Codec, Unpack};
use mcrs_protocol::DataValue;

/// Plain rails: every shape, curves included, as the whole data value.
#[derive(Clone, Copy, Debug, Default)]
pub struct RailCodec;

impl Codec for RailCodec {
    type Attributes = Rail;

    const CAPABILITIES: Capabilities = Capabilities::RAIL_SHAPED;

    fn pack(&self, attributes: &Rail) -> DataValue {
        DataValue::from_bits_truncate(attributes.shape.position() as u8)
    }

    fn legal(&self) -> Vec<Rail> {
        RailShape::ALL.iter().map(|&shape| Rail { shape }).collect()
    }
}

impl Unpack for RailCodec {
    fn unpack(&self, code: DataValue) -> Option<Rail> {
        RailShape::ALL
            .get(code.get() as usize)
            .map(|&shape| Rail { shape })
    }
}

/// Powered, detector and activator rails. Straight shapes only; bit 3 is the power state.
/// Curved shapes pack as north-south.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoweredRailCodec;

impl PoweredRailCodec {
    const POWERED: u8 = 0x8;

    fn normalize(shape: RailShape) -> RailShape {
        if shape.is_curve() {
            RailShape::NorthSouth
        } else {
            shape
        }
    }
}

impl Codec for PoweredRailCodec {
    type Attributes = PoweredRail;

    const CAPABILITIES: Capabilities = Capabilities::RAIL_SHAPED.union(Capabilities::POWERABLE);

    fn pack(&self, attributes: &PoweredRail) -> DataValue {
        let shape = Self::normalize(attributes.shape).position() as u8;
        let powered = if attributes.powered { Self::POWERED } else { 0 };
        DataValue::from_bits_truncate(shape | powered)
    }

    fn legal(&self) -> Vec<PoweredRail> {
        [false, true]
            .into_iter()
            .flat_map(|powered| {
                RailShape::ALL
                    .iter()
                    .filter(|shape| !shape.is_curve())
                    .map(move |&shape| PoweredRail { shape, powered })
            })
            .collect()
    }
}

impl Unpack for PoweredRailCodec {
    fn unpack(&self, code: DataValue) -> Option<PoweredRail> {
        let shape = *RailShape::ALL.get((code.get() & 0x7) as usize)?;
        if shape.is_curve() {
            return None;
        }
        Some(PoweredRail {
            shape,
            powered: code.contains(Self::POWERED),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::assert_invertible;

    #[test]
    fn rail_codecs_are_invertible() {
        assert_invertible(&RailCodec);
        assert_invertible(&PoweredRailCodec);
        assert_eq!(RailCodec.legal().len(), 10);
        assert_eq!(PoweredRailCodec.legal().len(), 12);
    }

    #[test]
    fn powered_rail_layout() {
        let ascending = PoweredRail {
            shape: RailShape::AscendingSouth,
            powered: true,
        };
        assert_eq!(PoweredRailCodec.pack(&ascending).get(), 0xD);

        let curve = PoweredRail {
            shape: RailShape::NorthEast,
            powered: false,
        };
        assert_eq!(PoweredRailCodec.pack(&curve), DataValue::MIN);
        assert_eq!(PoweredRailCodec.unpack(DataValue::from_bits_truncate(0x6)), None);
    }
}
