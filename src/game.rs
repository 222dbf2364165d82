//! A single game session alternating turns between humans and the engine

use tracing::info;

use crate::{
    board::{Board, Piece, WinState},
    search::SearchEngine,
    Error, Result, WIDTH,
};

/// Who chooses the moves for one side
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Control {
    Human,
    Engine,
}

/// Controllers of both sides, `Piece::A` always moves first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub player_a: Control,
    pub player_b: Control,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_a: Control::Human,
            player_b: Control::Engine,
        }
    }
}

impl GameConfig {
    /// The controller of `piece`'s side. `Piece::Empty` belongs to neither
    /// side and reports `Human`, so it never starts a search
    pub fn control(&self, piece: Piece) -> Control {
        match piece {
            Piece::A => self.player_a,
            Piece::B => self.player_b,
            Piece::Empty => Control::Human,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    /// Waiting for a human to submit a column
    AwaitingMove,
    /// The engine is to move next
    ComputingEngineMove,
    GameOver(WinState),
}

/// A move applied to the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub piece: Piece,
    /// The state of the board after the move
    pub state: WinState,
}

/// Owns the board for one game and enforces turn order
pub struct GameController {
    board: Board,
    config: GameConfig,
    to_move: Piece,
    phase: Phase,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            to_move: Piece::A,
            phase: Self::phase_for(config.control(Piece::A)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The piece of the side to move
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Plays a human move in `column` for the side to move
    pub fn submit_move(&mut self, column: usize) -> Result<Placement> {
        match self.phase {
            Phase::AwaitingMove => {}
            Phase::ComputingEngineMove => return Err(Error::NotHumanTurn),
            Phase::GameOver(_) => return Err(Error::GameOver),
        }
        if column >= WIDTH {
            return Err(Error::ColumnOutOfRange { column });
        }
        if !self.board.is_column_open(column) {
            return Err(Error::InvalidMove { column });
        }
        self.apply(column)
    }

    /// Lets the engine choose and play a move for the side to move
    pub fn play_engine_move(&mut self) -> Result<Placement> {
        match self.phase {
            Phase::ComputingEngineMove => {}
            Phase::AwaitingMove => return Err(Error::NotEngineTurn),
            Phase::GameOver(_) => return Err(Error::GameOver),
        }
        let column = SearchEngine::new(&mut self.board, self.to_move, self.to_move.opponent())
            .compute_move()?;
        self.apply(column)
    }

    /// Clears the board and starts a new game with the same controllers
    pub fn restart(&mut self) {
        self.board.reset();
        self.to_move = Piece::A;
        self.phase = Self::phase_for(self.config.control(Piece::A));
        info!("game reset");
    }

    fn apply(&mut self, column: usize) -> Result<Placement> {
        let piece = self.to_move;
        let row = self.board.drop_piece(column, piece)?;
        let state = self.board.check_terminal_state();
        info!(column, row, ?piece, "move played");

        if state.is_finished() {
            info!(?state, "game over");
            self.phase = Phase::GameOver(state);
        } else {
            self.to_move = piece.opponent();
            self.phase = Self::phase_for(self.config.control(self.to_move));
        }

        Ok(Placement {
            column,
            row,
            piece,
            state,
        })
    }

    fn phase_for(control: Control) -> Phase {
        match control {
            Control::Human => Phase::AwaitingMove,
            Control::Engine => Phase::ComputingEngineMove,
        }
    }
}
