use derive_more::{Deref, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 4-bit block data value stored next to the block id in legacy chunk sections.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Debug, Into, Deref, Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DataValue(u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("data value {0} does not fit in 4 bits")]
pub struct DataValueError(pub u8);

impl DataValue {
    pub const MIN: DataValue = DataValue(0);
    pub const MAX: DataValue = DataValue(0x0F);
    pub const COUNT: usize = 16;

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Keeps the low nibble of `value`.
    pub const fn from_bits_truncate(value: u8) -> Self {
        Self(value & 0x0F)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, bits: u8) -> bool {
        self.0 & bits == bits
    }

    pub fn all() -> impl Iterator<Item = DataValue> {
        (Self::MIN.0..=Self::MAX.0).map(DataValue)
    }
}

impl TryFrom<u8> for DataValue {
    type Error = DataValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DataValueError(value))
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Numeric block id of the pre-flattening protocol. Only the low 12 bits are addressable.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Debug, Into, Deref, Serialize,
    Deserialize,
)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const MAX: BlockId = BlockId(0x0FFF);
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Block id and data value as they travel together on the wire: `(id << 4) | data`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LegacyBlockState {
    pub id: BlockId,
    pub data: DataValue,
}

impl LegacyBlockState {
    pub const fn new(id: BlockId, data: DataValue) -> Self {
        Self { id, data }
    }

    #[inline]
    pub const fn pack(self) -> u16 {
        ((self.id.0 & BlockId::MAX.0) << 4) | self.data.0 as u16
    }

    #[inline]
    pub const fn unpack(raw: u16) -> Self {
        Self {
            id: BlockId(raw >> 4),
            data: DataValue::from_bits_truncate((raw & 0x0F) as u8),
        }
    }
}

impl From<LegacyBlockState> for u16 {
    fn from(state: LegacyBlockState) -> Self {
        state.pack()
    }
}

impl From<u16> for LegacyBlockState {
    fn from(raw: u16) -> Self {
        Self::unpack(raw)
    }
}
