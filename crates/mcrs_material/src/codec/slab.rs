use crate::attribute::Slab;
use crate::attribute::tag::{SlabHalf, StoneSlabKind, Tag, WoodSpecies};
use crate::codec::{Capabilities, Codec};
use mcrs_protocol::DataValue;

/// Slab materials and the low three data bits each one packs to.
pub trait SlabMaterial: Tag {
    fn slab_data(self) -> u8;
}

impl SlabMaterial for StoneSlabKind {
    fn slab_data(self) -> u8 {
        match self {
            StoneSlabKind::Stone | StoneSlabKind::RedSandstone => 0,
            StoneSlabKind::Sandstone => 1,
            StoneSlabKind::Wood => 2,
            StoneSlabKind::Cobblestone => 3,
            StoneSlabKind::Brick => 4,
            StoneSlabKind::StoneBrick => 5,
            StoneSlabKind::NetherBrick => 6,
            StoneSlabKind::Quartz => 7,
        }
    }
}

impl SlabMaterial for WoodSpecies {
    fn slab_data(self) -> u8 {
        self.position() as u8
    }
}

/// Kind in the low three bits; bit 3 marks an upper half or a smooth double slab.
///
/// Stone slab kinds are split over two block ids that reuse the same data values, so a data
/// value alone does not name a kind and this codec has no unpack.
#[derive(Clone, Copy, Debug)]
pub struct SlabCodec<T: 'static> {
    pub kinds: &'static [T],
    pub halves: &'static [SlabHalf],
}

impl<T: SlabMaterial> SlabCodec<T> {
    pub const SINGLE: &'static [SlabHalf] = &[SlabHalf::Bottom, SlabHalf::Upper];
    pub const DOUBLE: &'static [SlabHalf] = &[SlabHalf::Full, SlabHalf::SmoothFull];

    pub const fn new(kinds: &'static [T], halves: &'static [SlabHalf]) -> Self {
        Self { kinds, halves }
    }

    fn normalize(&self, attributes: &Slab<T>) -> Slab<T> {
        let kind = if self.kinds.contains(&attributes.kind) {
            attributes.kind
        } else {
            self.kinds.first().copied().unwrap_or(attributes.kind)
        };
        let half = if self.halves.contains(&attributes.half) {
            attributes.half
        } else {
            self.halves.first().copied().unwrap_or(attributes.half)
        };
        Slab { kind, half }
    }
}

impl<T: SlabMaterial> Codec for SlabCodec<T> {
    type Attributes = Slab<T>;

    const CAPABILITIES: Capabilities = Capabilities::VARIANTABLE.union(Capabilities::SLAB_TYPED);

    fn pack(&self, attributes: &Slab<T>) -> DataValue {
        let Slab { kind, half } = self.normalize(attributes);
        DataValue::from_bits_truncate((kind.slab_data() & 0x7) | (half.is_high() as u8) << 3)
    }

    fn legal(&self) -> Vec<Slab<T>> {
        self.halves
            .iter()
            .flat_map(|&half| self.kinds.iter().map(move |&kind| Slab { kind, half }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE_SLAB_KINDS: &[StoneSlabKind] = &[
        StoneSlabKind::Stone,
        StoneSlabKind::Sandstone,
        StoneSlabKind::Wood,
        StoneSlabKind::Cobblestone,
        StoneSlabKind::Brick,
        StoneSlabKind::StoneBrick,
        StoneSlabKind::NetherBrick,
        StoneSlabKind::Quartz,
    ];

    #[test]
    fn stone_slab_layout() {
        let codec = SlabCodec::new(STONE_SLAB_KINDS, SlabCodec::<StoneSlabKind>::SINGLE);
        let upper_quartz = Slab {
            kind: StoneSlabKind::Quartz,
            half: SlabHalf::Upper,
        };
        assert_eq!(codec.pack(&upper_quartz).get(), 0xF);
        assert_eq!(codec.legal().len(), 16);
        // red sandstone lives under the second stone slab id
        let red = Slab {
            kind: StoneSlabKind::RedSandstone,
            half: SlabHalf::Bottom,
        };
        assert_eq!(codec.pack(&red).get(), 0x0);
    }

    #[test]
    fn sibling_families_share_codes() {
        let first = SlabCodec::new(STONE_SLAB_KINDS, SlabCodec::<StoneSlabKind>::SINGLE);
        let second = SlabCodec::new(
            &[StoneSlabKind::RedSandstone],
            SlabCodec::<StoneSlabKind>::SINGLE,
        );
        let stone = Slab {
            kind: StoneSlabKind::Stone,
            half: SlabHalf::Upper,
        };
        let red = Slab {
            kind: StoneSlabKind::RedSandstone,
            half: SlabHalf::Upper,
        };
        assert_eq!(first.pack(&stone), second.pack(&red));
    }

    #[test]
    fn double_slabs_use_high_bit_for_smooth() {
        let codec = SlabCodec::new(WoodSpecies::ALL, SlabCodec::<WoodSpecies>::DOUBLE);
        let smooth = Slab {
            kind: WoodSpecies::Jungle,
            half: SlabHalf::SmoothFull,
        };
        assert_eq!(codec.pack(&smooth).get(), 0xB);
        let bottom = Slab {
            kind: WoodSpecies::Jungle,
            half: SlabHalf::Bottom,
        };
        assert_eq!(codec.pack(&bottom).get(), 0x3);
    }
}
