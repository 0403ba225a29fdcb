use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, BoardError, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// 3x3 grid indexed by (row, col). Boards are small `Copy` values, so every
/// engine call works on its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: &[Vec<Mark>]) -> Result<Self, BoardError> {
        check_dimensions(rows)?;

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter().enumerate() {
            cells[row].copy_from_slice(values);
        }
        Ok(Self { cells })
    }

    /// Accepts the numeric encoding X = 1, O = -1, empty = 0.
    pub fn from_values(rows: &[Vec<i8>]) -> Result<Self, BoardError> {
        check_dimensions(rows)?;

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = Mark::try_from(value)?;
            }
        }
        Ok(Self { cells })
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns a copy of the board with `mark` placed at `pos`.
    pub fn place(&self, pos: Position, mark: Mark) -> Result<Board, BoardError> {
        if mark == Mark::Empty {
            return Err(BoardError::EmptyMark);
        }
        match self.get(pos) {
            None => Err(BoardError::OutOfBounds { position: pos }),
            Some(Mark::Empty) => Ok(self.with_mark(pos, mark)),
            Some(_) => Err(BoardError::CellOccupied { position: pos }),
        }
    }

    /// Unchecked variant of `place` for positions taken from `legal_moves`.
    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[pos.row][pos.col] = mark;
        next
    }

    pub fn check_winner(&self) -> Mark {
        check_winner(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(self)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Mark to move, given which mark opened the game.
    pub fn next_mark(&self, first: Mark) -> Mark {
        let Some(second) = first.opponent() else {
            return Mark::Empty;
        };
        if self.count(first) > self.count(second) {
            second
        } else {
            first
        }
    }

    /// Number of cells that differ between two boards.
    pub fn diff_count(&self, other: &Board) -> usize {
        self.cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .filter(|(a, b)| a != b)
            .count()
    }
}

fn check_dimensions<T>(rows: &[Vec<T>]) -> Result<(), BoardError> {
    let cols = rows.iter().map(Vec::len).find(|&len| len != BOARD_SIZE);
    if rows.len() != BOARD_SIZE || cols.is_some() {
        return Err(BoardError::InvalidDimensions {
            rows: rows.len(),
            cols: cols.unwrap_or(BOARD_SIZE),
        });
    }
    Ok(())
}

pub fn check_winner(board: &Board) -> Mark {
    board.winning_line().map_or(Mark::Empty, |line| line.mark)
}

pub fn is_full(board: &Board) -> bool {
    board
        .cells
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn is_terminal(board: &Board) -> bool {
    check_winner(board) != Mark::Empty || is_full(board)
}

/// Empty cells in row-major order. Move selection breaks ties by this order.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

impl FromStr for Board {
    type Err = BoardError;

    /// Nine cells of `X`, `O` or `.`/`_`/`-`; whitespace and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Mark::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardError::InvalidDimensions {
                rows: marks.len().div_ceil(BOARD_SIZE),
                cols: BOARD_SIZE,
            });
        }

        let rows: Vec<Vec<Mark>> = marks.chunks(BOARD_SIZE).map(<[Mark]>::to_vec).collect();
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(Mark::symbol).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
