use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Delta;

/// One of the eight compass winds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Canonical display order, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Unit step, with `y` growing downwards.
    pub const fn delta(self) -> Delta {
        use Direction::*;
        match self {
            N => (0, -1),
            NE => (1, -1),
            E => (1, 0),
            SE => (1, 1),
            S => (0, 1),
            SW => (-1, 1),
            W => (-1, 0),
            NW => (-1, -1),
        }
    }

    pub const fn label(self) -> &'static str {
        use Direction::*;
        match self {
            N => "N",
            NE => "NE",
            E => "E",
            SE => "SE",
            S => "S",
            SW => "SW",
            W => "W",
            NW => "NW",
        }
    }

    /// Compass bearing in degrees, clockwise from north.
    pub const fn bearing(self) -> u16 {
        (self as u16) * 45
    }

    pub const fn flag(self) -> DirectionSet {
        DirectionSet::from_bits_truncate(1 << (self as u8))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// Set of wind directions, used to track which winds have already blown.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DirectionSet: u8 {
        const N  = 1;
        const NE = 1 << 1;
        const E  = 1 << 2;
        const SE = 1 << 3;
        const S  = 1 << 4;
        const SW = 1 << 5;
        const W  = 1 << 6;
        const NW = 1 << 7;
    }
}

impl DirectionSet {
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    pub const fn len(self) -> u8 {
        self.bits().count_ones() as u8
    }

    /// Members in canonical order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has(direction))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}
