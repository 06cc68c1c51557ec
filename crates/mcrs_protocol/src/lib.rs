mod block;
mod direction;

pub use block::{BlockId, DataValue, DataValueError, LegacyBlockState};
pub use direction::{Axis, Direction};
pub use valence_ident::{Ident, ident};
