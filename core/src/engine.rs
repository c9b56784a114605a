use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

const WELCOME_MESSAGE: &str = "Welcome to Dandelion! Player 1, place your flower.";
const RESTART_MESSAGE: &str = "Game Restarted. Player 1's turn.";

/// Whose action is expected next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingPlacement,
    AwaitingWind,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::AwaitingPlacement
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Player 1, the board was completely covered.
    Planter,
    /// Player 2, some cell stayed empty.
    Wind,
}

impl Winner {
    pub fn evaluate(board: &Board) -> Self {
        if board.is_full() {
            Self::Planter
        } else {
            Self::Wind
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Planter => "Player 1 (The Planter)",
            Self::Wind => "Player 2 (The Wind)",
        }
    }
}

/// Everything that makes up one moment of a game. History entries are whole copies of this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    used_directions: DirectionSet,
    turn: TurnState,
    dandelion: Option<Coord2>,
    winner: Option<Winner>,
    log: MessageLog,
}

impl GameState {
    fn new(message: &str) -> Self {
        Self {
            board: Board::new(),
            used_directions: DirectionSet::empty(),
            turn: TurnState::AwaitingPlacement,
            dandelion: None,
            winner: None,
            log: MessageLog::new(message),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn used_directions(&self) -> DirectionSet {
        self.used_directions
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The flower placed this turn, cleared once the wind has blown.
    pub fn dandelion(&self) -> Option<Coord2> {
        self.dandelion
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    state: GameState,
    history: Vec<GameState>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(WELCOME_MESSAGE),
            history: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.state.board[coords]
    }

    pub fn used_directions(&self) -> DirectionSet {
        self.state.used_directions
    }

    pub fn directions_left(&self) -> u8 {
        DirectionSet::all().len() - self.state.used_directions.len()
    }

    pub fn turn(&self) -> TurnState {
        self.state.turn
    }

    pub fn dandelion(&self) -> Option<Coord2> {
        self.state.dandelion
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    pub fn is_finished(&self) -> bool {
        self.state.winner.is_some()
    }

    pub fn log(&self) -> &MessageLog {
        &self.state.log
    }

    /// The planter is due but the winds already covered the whole board. Only undo or
    /// restart can move the game on from here.
    pub fn is_blocked(&self) -> bool {
        !self.is_finished()
            && self.state.turn == TurnState::AwaitingPlacement
            && self.state.board.is_full()
    }

    pub fn empty_count(&self) -> CellCount {
        self.state.board.empty_count()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_place_at(&self, coords: Coord2) -> bool {
        self.check_placement(coords).is_ok()
    }

    pub fn can_choose(&self, direction: Direction) -> bool {
        self.check_wind(direction).is_ok()
    }

    pub fn place_dandelion(&mut self, coords: Coord2) -> Result<PlaceOutcome> {
        let coords = self.check_placement(coords).inspect_err(|err| {
            log::trace!("placement at {:?} rejected: {}", coords, err);
        })?;

        let mut next = self.state.clone();
        next.board[coords] = Cell::Dandelion;
        next.dandelion = Some(coords);
        next.turn = TurnState::AwaitingWind;
        next.log.push(format!(
            "Player 1 placed Dandelion at ({}, {}). Player 2, choose wind direction!",
            coords.0 + 1,
            coords.1 + 1
        ));
        self.commit(next);

        log::debug!("dandelion placed at {:?}", coords);
        Ok(PlaceOutcome { coords })
    }

    pub fn choose_wind(&mut self, direction: Direction) -> Result<WindOutcome> {
        self.check_wind(direction).inspect_err(|err| {
            log::trace!("wind {} rejected: {}", direction, err);
        })?;

        let mut next = self.state.clone();
        let filled = next.board.blow(direction.delta());
        next.used_directions |= direction.flag();
        let empty_left = next.board.empty_count();

        let mut message = format!("Wind blew {}! Filled {} cells.", direction, filled);
        if next.used_directions.is_all() {
            let winner = Winner::evaluate(&next.board);
            next.winner = Some(winner);
            message.push_str(&game_over_message(winner, empty_left));
        } else {
            next.turn = TurnState::AwaitingPlacement;
            next.dandelion = None;
            message.push_str(" Player 1, place a new Dandelion.");
        }
        next.log.push(message);
        let winner = next.winner;
        self.commit(next);

        log::debug!(
            "wind {} filled {} cells, {} empty left",
            direction,
            filled,
            empty_left
        );
        if let Some(winner) = winner {
            log::debug!("game over, winner: {:?}", winner);
        }

        Ok(WindOutcome {
            direction,
            filled,
            empty_left,
            winner,
        })
    }

    /// Restores the state from before the last accepted placement or wind.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.state = previous;
        log::debug!("undo, {} steps left", self.history.len());
        Ok(())
    }

    /// Starts over with a fresh board. Clears history, so this cannot be undone.
    pub fn restart(&mut self) {
        self.state = GameState::new(RESTART_MESSAGE);
        self.history.clear();
        log::debug!("game restarted");
    }

    fn commit(&mut self, next: GameState) {
        let previous = mem::replace(&mut self.state, next);
        self.history.push(previous);
    }

    fn check_placement(&self, coords: Coord2) -> Result<Coord2> {
        self.check_not_finished()?;
        if self.state.turn != TurnState::AwaitingPlacement {
            return Err(GameError::NotPlantersTurn);
        }
        let coords = self.state.board.validate_coords(coords)?;
        if !self.state.board[coords].is_empty() {
            return Err(GameError::CellOccupied);
        }
        Ok(coords)
    }

    fn check_wind(&self, direction: Direction) -> Result<()> {
        self.check_not_finished()?;
        if self.state.turn != TurnState::AwaitingWind {
            return Err(GameError::NotWindsTurn);
        }
        if self.state.used_directions.has(direction) {
            return Err(GameError::DirectionUsed);
        }
        Ok(())
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn game_over_message(winner: Winner, empty_left: CellCount) -> String {
    match winner {
        Winner::Planter => String::from(" GAME OVER: Perfect Board! Player 1 Wins!"),
        Winner::Wind => format!(
            " GAME OVER: {} cells remain empty. Player 2 Wins!",
            empty_left
        ),
    }
}
