//! The game grid, gravity placement and terminal-state detection

use std::fmt;

use crate::{Error, Result, HEIGHT, WIDTH};

/// The contents of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Empty,
    A,
    B,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The piece of the other player, `Empty` maps to itself
    pub fn opponent(self) -> Self {
        match self {
            Piece::A => Piece::B,
            Piece::B => Piece::A,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// The outcome of a position, derived from the grid on demand
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WinState {
    NotFinished,
    Draw,
    WinA,
    WinB,
}

impl WinState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, WinState::NotFinished)
    }
}

/// Cell coordinates `(row, column)` of one length-4 line
pub type Window = [(usize, usize); 4];

/// The number of length-4 lines on the board across all four orientations
pub const WINDOW_COUNT: usize =
    WIDTH * (HEIGHT - 3) + HEIGHT * (WIDTH - 3) + 2 * (WIDTH - 3) * (HEIGHT - 3);

/// Every window on the board in scan order: vertical lines (columns then
/// rows), horizontal lines (rows then columns), then diagonals anchored at
/// their top-left column then row, down-right before down-left.
///
/// Terminal detection reports the first complete window in this order, so
/// the order decides which side wins if both have a line.
pub const fn scan_order() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); 4]; WINDOW_COUNT];
    let mut n = 0;

    let mut column = 0;
    while column < WIDTH {
        let mut row = 0;
        while row + 3 < HEIGHT {
            windows[n] = [
                (row, column),
                (row + 1, column),
                (row + 2, column),
                (row + 3, column),
            ];
            n += 1;
            row += 1;
        }
        column += 1;
    }

    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + 3 < WIDTH {
            windows[n] = [
                (row, column),
                (row, column + 1),
                (row, column + 2),
                (row, column + 3),
            ];
            n += 1;
            column += 1;
        }
        row += 1;
    }

    let mut column = 0;
    while column + 3 < WIDTH {
        let mut row = 0;
        while row + 3 < HEIGHT {
            windows[n] = [
                (row, column),
                (row + 1, column + 1),
                (row + 2, column + 2),
                (row + 3, column + 3),
            ];
            windows[n + 1] = [
                (row + 3, column),
                (row + 2, column + 1),
                (row + 1, column + 2),
                (row, column + 3),
            ];
            n += 2;
            row += 1;
        }
        column += 1;
    }
    windows
}

const WINDOWS: [Window; WINDOW_COUNT] = scan_order();

/// A `HEIGHT` x `WIDTH` grid, row 0 at the top
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Piece; WIDTH]; HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed column digits, alternating
    /// between `Piece::A` and `Piece::B` starting with `Piece::A`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::A;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.check_terminal_state().is_finished() {
                        return Err(Error::GameOver);
                    }
                    board.drop_piece(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => {
                    return Err(Error::Parse {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Result<Piece> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or(Error::IndexOutOfRange { row, column })
    }

    /// Overwrites a cell without any gravity or legality checks
    pub fn set(&mut self, row: usize, column: usize, piece: Piece) -> Result<()> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(Error::IndexOutOfRange { row, column })?;
        *cell = piece;
        Ok(())
    }

    /// Places `piece` in the lowest empty cell of `column` and returns its row
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= WIDTH {
            return Err(Error::ColumnOutOfRange { column });
        }
        self.play(column, piece).ok_or(Error::InvalidMove { column })
    }

    /// Gravity placement for the search, `None` unless the column is open
    pub(crate) fn play(&mut self, column: usize, piece: Piece) -> Option<usize> {
        // a filled top cell closes the column even if `set` left a gap below it
        if !self.is_column_open(column) {
            return None;
        }
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row].get(column) == Some(&Piece::Empty))?;
        self.cells[row][column] = piece;
        Some(row)
    }

    /// Empties a cell filled by `play`
    pub(crate) fn undo(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Piece::Empty;
    }

    pub fn is_column_open(&self, column: usize) -> bool {
        self.cells[0].get(column) == Some(&Piece::Empty)
    }

    /// Open columns in ascending order
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_column_open(column))
    }

    /// The number of occupied cells in a column
    pub fn height(&self, column: usize) -> usize {
        self.cells
            .iter()
            .filter(|cells| cells.get(column).map_or(false, |piece| !piece.is_empty()))
            .count()
    }

    /// The contents of every window, in scan order
    pub fn windows(&self) -> impl Iterator<Item = [Piece; 4]> + '_ {
        WINDOWS
            .iter()
            .map(move |window| window.map(|(row, column)| self.cells[row][column]))
    }

    pub fn check_terminal_state(&self) -> WinState {
        for window in self.windows() {
            let first = window[0];
            if !first.is_empty() && window[1..].iter().all(|&piece| piece == first) {
                return Self::win_state_for_piece(first);
            }
        }

        if self.cells[0].iter().all(|piece| !piece.is_empty()) {
            WinState::Draw
        } else {
            WinState::NotFinished
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[Piece::Empty; WIDTH]; HEIGHT];
    }

    pub fn piece_for_win_state(state: WinState) -> Piece {
        match state {
            WinState::WinA => Piece::A,
            WinState::WinB => Piece::B,
            WinState::NotFinished | WinState::Draw => Piece::Empty,
        }
    }

    pub fn win_state_for_piece(piece: Piece) -> WinState {
        match piece {
            Piece::A => WinState::WinA,
            Piece::B => WinState::WinB,
            Piece::Empty => WinState::NotFinished,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in self.cells.iter() {
            for piece in cells.iter() {
                let symbol = match piece {
                    Piece::A => 'X',
                    Piece::B => 'O',
                    Piece::Empty => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
