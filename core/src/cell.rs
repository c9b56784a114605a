use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Dandelion,
    Filled,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_dandelion(self) -> bool {
        matches!(self, Self::Dandelion)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
