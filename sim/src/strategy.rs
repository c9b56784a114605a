use clap::ValueEnum;
use dandelion_core::{BOARD_SIZE, Coord2, Direction, GameEngine};
use rand::prelude::*;

/// How the simulated planter picks where the next flower goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlanterStrategy {
    /// Any empty cell, uniformly.
    Random,
    /// The empty cell closest to the centre of the board.
    Greedy,
}

impl PlanterStrategy {
    pub fn pick(self, engine: &GameEngine, rng: &mut SmallRng) -> Option<Coord2> {
        let empty_cells = empty_cells(engine);
        match self {
            Self::Random if empty_cells.is_empty() => None,
            Self::Random => Some(empty_cells[rng.random_range(0..empty_cells.len())]),
            Self::Greedy => empty_cells.into_iter().min_by_key(|&c| centre_distance(c)),
        }
    }
}

/// Uniformly random wind among the ones still unused.
pub fn pick_wind(engine: &GameEngine, rng: &mut SmallRng) -> Option<Direction> {
    let used = engine.used_directions();
    let available: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&direction| !used.has(direction))
        .collect();

    if available.is_empty() {
        None
    } else {
        Some(available[rng.random_range(0..available.len())])
    }
}

/// Empty cells row by row.
fn empty_cells(engine: &GameEngine) -> Vec<Coord2> {
    (0..BOARD_SIZE)
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
        .filter(|&coords| engine.cell_at(coords).is_empty())
        .collect()
}

/// Squared distance to the board centre, doubled on each axis to stay in integers.
fn centre_distance((x, y): Coord2) -> u32 {
    let span = u32::from(BOARD_SIZE) - 1;
    let dx = (2 * u32::from(x)).abs_diff(span);
    let dy = (2 * u32::from(y)).abs_diff(span);
    dx * dx + dy * dy
}
