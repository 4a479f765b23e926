use tracing::{debug, info};

use super::player::Player;
use super::state::{GameOutcome, MoveResult};
use crate::error::BoardError;

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

/// Consecutive pieces needed to win
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player whose piece occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// A grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

/// The four lines a piece can win along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
    /// `/`: down-left to up-right
    DiagonalUp,
    /// `\`: up-left to down-right
    DiagonalDown,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (column, row) step. Rows grow downward.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalUp => (1, -1),
            Direction::DiagonalDown => (1, 1),
        }
    }
}

/// Steps that can be taken from `pos` by `delta` without leaving `0..len`.
/// Unbounded along an axis the direction does not move on.
fn reach(pos: usize, delta: isize, len: usize) -> usize {
    match delta.signum() {
        1 => len - 1 - pos,
        -1 => pos,
        _ => usize::MAX,
    }
}

/// Whether `line` holds at least [`WIN_LENGTH`] consecutive `cell`s.
fn has_run(line: impl Iterator<Item = Cell>, cell: Cell) -> bool {
    let mut count = 0;
    for value in line {
        if value == cell {
            count += 1;
            if count >= WIN_LENGTH {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

/// Connect Four grid plus the rules engine that fills it.
///
/// Cells are stored column-major. Pieces settle at the lowest empty row of a
/// column, so every column is filled contiguously from the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    last_move: Option<Position>,
    outcome: GameOutcome,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive and their
    /// product must fit in `usize`.
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        match columns.checked_mul(rows) {
            Some(size) if size > 0 => Ok(Self::empty(columns, rows, size)),
            _ => Err(BoardError::InvalidDimensions { columns, rows }),
        }
    }

    fn empty(columns: usize, rows: usize, size: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![Cell::Empty; size],
            last_move: None,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Where the most recent piece landed; `None` before the first move
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfBounds {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Get the cell at a specific position
    pub fn get(&self, column: usize, row: usize) -> Result<Cell, BoardError> {
        if column >= self.columns || row >= self.rows {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(self.cells[self.index(column, row)])
    }

    /// Cells of one row, left to right. Empty for a row outside the grid.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let columns = if row < self.rows { self.columns } else { 0 };
        (0..columns).map(move |column| self.cells[self.index(column, row)])
    }

    /// The row a piece dropped into `column` would land on, or `None` if the
    /// column is full
    pub fn lowest_open_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        self.check_column(column)?;
        Ok((0..self.rows)
            .rev()
            .find(|&row| self.cells[self.index(column, row)].is_empty()))
    }

    pub fn is_column_playable(&self, column: usize) -> Result<bool, BoardError> {
        self.check_column(column)?;
        Ok(self.cells[self.index(column, 0)].is_empty())
    }

    /// Columns that still accept a piece, ascending
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.cells[self.index(column, 0)].is_empty())
            .collect()
    }

    fn top_row_full(&self) -> bool {
        self.row_cells(0).all(|cell| !cell.is_empty())
    }

    /// Drop `piece` into `column`.
    ///
    /// A finished game or a full column leaves the board untouched and comes
    /// back as an unapplied [`MoveResult`]. Only a column outside the grid is
    /// an error.
    pub fn apply_move(&mut self, piece: Player, column: usize) -> Result<MoveResult, BoardError> {
        if self.outcome.is_terminal() {
            debug!(column, outcome = ?self.outcome, "move rejected, game is over");
            return Ok(MoveResult::rejected(self.outcome));
        }

        let Some(row) = self.lowest_open_row(column)? else {
            debug!(column, "move rejected, column is full");
            return Ok(MoveResult::rejected(self.outcome));
        };

        let index = self.index(column, row);
        self.cells[index] = piece.to_cell();
        let anchor = Position { column, row };
        self.last_move = Some(anchor);
        self.outcome = self.evaluate(anchor, piece);

        debug!(player = piece.name(), column, row, "piece placed");
        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, "game finished");
        }

        Ok(MoveResult::applied(self.outcome))
    }

    /// Clear every cell and start over with the same dimensions
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.last_move = None;
        self.outcome = GameOutcome::InProgress;
    }

    /// Outcome after `piece` landed on `anchor`. A win beats a draw.
    fn evaluate(&self, anchor: Position, piece: Player) -> GameOutcome {
        let draw_candidate = self.top_row_full();
        let cell = piece.to_cell();

        let win = Direction::ALL
            .iter()
            .any(|&direction| has_run(self.line_through(anchor, direction), cell));

        if win {
            piece.winning_outcome()
        } else if draw_candidate {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// The maximal in-bounds line through `anchor` along `direction`, in
    /// order. Its extent is bounded by the nearest grid edge on each side.
    fn line_through(
        &self,
        anchor: Position,
        direction: Direction,
    ) -> impl Iterator<Item = Cell> + '_ {
        let (dc, dr) = direction.step();
        let back = reach(anchor.column, -dc, self.columns).min(reach(anchor.row, -dr, self.rows));
        let forward = reach(anchor.column, dc, self.columns).min(reach(anchor.row, dr, self.rows));

        let start_column = anchor.column as isize - back as isize * dc;
        let start_row = anchor.row as isize - back as isize * dr;

        (0..=back + forward).map(move |step| {
            let column = (start_column + step as isize * dc) as usize;
            let row = (start_row + step as isize * dr) as usize;
            self.cells[self.index(column, row)]
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_COLUMNS * DEFAULT_ROWS)
    }
}
