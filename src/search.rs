//! A depth-limited minimax agent for Connect 4

use tracing::debug;

use crate::{
    board::{Board, Piece, WinState},
    Error, Result, WIDTH,
};

/// The number of plies searched from the current position, including the
/// engine's own candidate move
pub const SEARCH_DEPTH: u32 = 6;

/// The base score of a won position, before adjusting for how deep the win was found
pub const WIN_SCORE: i32 = 1000;

/// The score of every window holding three pieces of one side and an empty cell
const THREAT_SCORE: i32 = 3;

/// An agent choosing moves by exhaustive minimax
///
/// # Notes
/// The search has no pruning and no caching: every legal line is explored
/// to [`SEARCH_DEPTH`] plies. The board is used as scratch space, each
/// candidate move is played onto it and taken back before the next one is
/// tried, so the board is unchanged when [`compute_move`] returns.
///
/// # Position Scoring
/// A position won by the engine scores `1000` minus the number of plies
/// taken to reach it, a position won by the opponent scores `-1000` plus
/// that number, so quicker wins and slower losses are preferred. A drawn
/// position scores 0. Positions at the depth limit are scored `+3` for
/// every window holding three engine pieces and one empty cell and `-3`
/// for every window holding three opponent pieces and one empty cell.
///
/// [`compute_move`]: SearchEngine::compute_move
pub struct SearchEngine<'a> {
    board: &'a mut Board,
    own: Piece,
    opponent: Piece,

    /// The number of positions visited by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> SearchEngine<'a> {
    /// Creates a `SearchEngine` playing `own` against `opponent` on `board`
    pub fn new(board: &'a mut Board, own: Piece, opponent: Piece) -> Self {
        Self {
            board,
            own,
            opponent,
            node_count: 0,
        }
    }

    /// Returns the column the engine should play next
    ///
    /// Ties between equally scored columns go to the lowest column. Fails
    /// with [`Error::NoLegalMove`] if no column is open.
    pub fn compute_move(&mut self) -> Result<usize> {
        let mut best: Option<(i32, usize)> = None;

        for column in 0..WIDTH {
            if let Some(row) = self.board.play(column, self.own) {
                let value = self.minimax(SEARCH_DEPTH - 1, false);
                self.board.undo(row, column);

                debug!(column, value, "evaluated root move");

                if best.map_or(true, |(best_value, _)| value > best_value) {
                    best = Some((value, column));
                }
            }
        }

        let (value, column) = best.ok_or(Error::NoLegalMove)?;
        debug!(column, value, nodes = self.node_count, "chose move");
        Ok(column)
    }

    /// Scores the current position with `depth` plies left to search,
    /// `maximizing` when the engine is to move
    pub(crate) fn minimax(&mut self, depth: u32, maximizing: bool) -> i32 {
        self.node_count += 1;

        let state = self.board.check_terminal_state();
        if depth == 0 || state.is_finished() {
            return self.score(depth, state);
        }

        let (piece, mut best) = if maximizing {
            (self.own, i32::MIN)
        } else {
            (self.opponent, i32::MAX)
        };

        for column in 0..WIDTH {
            if let Some(row) = self.board.play(column, piece) {
                let value = self.minimax(depth - 1, !maximizing);
                self.board.undo(row, column);

                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
        }
        best
    }

    /// The static value of the current position with `depth` plies left to search
    pub fn heuristic(&self, depth: u32) -> i32 {
        self.score(depth, self.board.check_terminal_state())
    }

    fn score(&self, depth: u32, state: WinState) -> i32 {
        let plies = SEARCH_DEPTH as i32 - depth as i32;

        if state == Board::win_state_for_piece(self.own) {
            return WIN_SCORE - plies;
        }
        if state == Board::win_state_for_piece(self.opponent) {
            return -WIN_SCORE + plies;
        }
        if state == WinState::Draw {
            return 0;
        }

        self.board
            .windows()
            .map(|window| {
                let own = window.iter().filter(|&&piece| piece == self.own).count();
                let opponent = window.iter().filter(|&&piece| piece == self.opponent).count();
                let empty = window.iter().filter(|piece| piece.is_empty()).count();

                match (own, opponent, empty) {
                    (3, _, 1) => THREAT_SCORE,
                    (_, 3, 1) => -THREAT_SCORE,
                    _ => 0,
                }
            })
            .sum()
    }
}

impl std::ops::Deref for SearchEngine<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}
