use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of named sub-kinds, such as wood species or wool colors.
pub trait Tag: Copy + Eq + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Every tag, in legacy data value order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn position(self) -> usize {
        Self::ALL.iter().position(|tag| *tag == self).unwrap_or(0)
    }
}

macro_rules! tags {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis enum $name:ident {
                $($variant:ident),+ $(,)?
            }
        )*
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
                #[serde(rename_all = "snake_case")]
                $vis enum $name {
                    $($variant),+
                }

                impl Tag for $name {
                    const ALL: &'static [Self] = &[$($name::$variant),+];

                    fn name(self) -> &'static str {
                        match self {
                            $($name::$variant => stringify!([<$variant:snake:upper>]),)+
                        }
                    }
                }
            )*
        }
    };
}

tags! {
    pub enum StoneKind {
        Stone,
        Granite,
        PolishedGranite,
        Diorite,
        PolishedDiorite,
        Andesite,
        PolishedAndesite,
    }

    pub enum DirtKind {
        Dirt,
        CoarseDirt,
        Podzol,
    }

    pub enum SandKind {
        Sand,
        RedSand,
    }

    pub enum SandstoneKind {
        Plain,
        Chiseled,
        Smooth,
    }

    pub enum WoodSpecies {
        Oak,
        Spruce,
        Birch,
        Jungle,
        Acacia,
        DarkOak,
    }

    pub enum DyeColor {
        White,
        Orange,
        Magenta,
        LightBlue,
        Yellow,
        Lime,
        Pink,
        Gray,
        Silver,
        Cyan,
        Purple,
        Blue,
        Brown,
        Green,
        Red,
        Black,
    }

    pub enum FlowerKind {
        Poppy,
        BlueOrchid,
        Allium,
        AzureBluet,
        RedTulip,
        OrangeTulip,
        WhiteTulip,
        PinkTulip,
        OxeyeDaisy,
    }

    pub enum GrassKind {
        DeadBush,
        TallGrass,
        Fern,
    }

    pub enum StoneBrickKind {
        Plain,
        Mossy,
        Cracked,
        Chiseled,
    }

    pub enum QuartzKind {
        Plain,
        Chiseled,
        Pillar,
        PillarNorthSouth,
        PillarEastWest,
    }

    pub enum PrismarineKind {
        Rough,
        Bricks,
        Dark,
    }

    pub enum SpongeKind {
        Dry,
        Wet,
    }

    /// Which faces of a huge mushroom block show cap, pores or stem.
    /// Data values 11 to 13 are unused.
    pub enum MushroomTexture {
        AllPores,
        CapNorthWest,
        CapNorth,
        CapNorthEast,
        CapWest,
        CapTop,
        CapEast,
        CapSouthWest,
        CapSouth,
        CapSouthEast,
        StemSides,
        AllCap,
        AllStem,
    }

    /// Slab materials sharing the stone slab code space across both stone slab block ids.
    pub enum StoneSlabKind {
        Stone,
        Sandstone,
        Wood,
        Cobblestone,
        Brick,
        StoneBrick,
        NetherBrick,
        Quartz,
        RedSandstone,
    }

    pub enum SlabHalf {
        Bottom,
        Upper,
        Full,
        SmoothFull,
    }

    pub enum RailShape {
        NorthSouth,
        EastWest,
        AscendingEast,
        AscendingWest,
        AscendingNorth,
        AscendingSouth,
        SouthEast,
        SouthWest,
        NorthWest,
        NorthEast,
    }

    pub enum DoorHalf {
        Lower,
        Upper,
    }

    pub enum DoorHinge {
        Left,
        Right,
    }
}

impl MushroomTexture {
    pub const fn data(self) -> u8 {
        match self {
            MushroomTexture::AllCap => 14,
            MushroomTexture::AllStem => 15,
            other => other as u8,
        }
    }
}

impl SlabHalf {
    /// Whether the half sets the high data bit.
    pub const fn is_high(self) -> bool {
        matches!(self, SlabHalf::Upper | SlabHalf::SmoothFull)
    }
}

impl RailShape {
    pub const fn is_curve(self) -> bool {
        matches!(
            self,
            RailShape::SouthEast | RailShape::SouthWest | RailShape::NorthWest | RailShape::NorthEast
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_upper_snake_case() {
        assert_eq!(WoodSpecies::DarkOak.name(), "DARK_OAK");
        assert_eq!(DyeColor::LightBlue.name(), "LIGHT_BLUE");
        assert_eq!(MushroomTexture::CapNorthWest.name(), "CAP_NORTH_WEST");
        assert_eq!(SlabHalf::SmoothFull.name(), "SMOOTH_FULL");
        assert_eq!(StoneKind::Stone.name(), "STONE");
    }

    #[test]
    fn all_lists_tags_in_data_order() {
        assert_eq!(DyeColor::ALL.len(), 16);
        assert_eq!(RailShape::ALL.len(), 10);
        assert_eq!(WoodSpecies::Jungle.position(), 3);
        assert_eq!(RailShape::AscendingSouth.position(), 5);
        assert!(RailShape::ALL.iter().skip(6).all(|shape| shape.is_curve()));
    }

    #[test]
    fn mushroom_data_skips_unused_values() {
        assert_eq!(MushroomTexture::StemSides.data(), 10);
        assert_eq!(MushroomTexture::AllCap.data(), 14);
        assert_eq!(MushroomTexture::AllStem.data(), 15);
    }

    #[test]
    fn tags_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&FlowerKind::OxeyeDaisy).unwrap(),
            "\"oxeye_daisy\""
        );
    }
}
