use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// -Y
    Down,
    /// +Y
    Up,
    /// -Z
    North,
    /// +Z
    South,
    /// -X
    West,
    /// +X
    East,
    /// No offset at all; `SELF` in legacy face enumerations.
    #[serde(rename = "self")]
    Center,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Down => "DOWN",
            Direction::Up => "UP",
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::East => "EAST",
            Direction::Center => "SELF",
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::Center => Direction::Center,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::UpDown,
            Direction::North | Direction::South => Axis::NorthSouth,
            Direction::West | Direction::East => Axis::EastWest,
            Direction::Center => Axis::None,
        }
    }

    pub fn all() -> [Direction; 6] {
        [
            Direction::Down,
            Direction::Up,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    UpDown,
    EastWest,
    NorthSouth,
    None,
}

impl Axis {
    pub const fn name(self) -> &'static str {
        match self {
            Axis::UpDown => "UP_DOWN",
            Axis::EastWest => "EAST_WEST",
            Axis::NorthSouth => "NORTH_SOUTH",
            Axis::None => "NONE",
        }
    }

    /// The face a pillar along this axis points to.
    pub const fn facing(self) -> Direction {
        match self {
            Axis::UpDown => Direction::Up,
            Axis::EastWest => Direction::East,
            Axis::NorthSouth => Direction::North,
            Axis::None => Direction::Center,
        }
    }

    pub fn all() -> [Axis; 4] {
        [Axis::UpDown, Axis::EastWest, Axis::NorthSouth, Axis::None]
    }
}
