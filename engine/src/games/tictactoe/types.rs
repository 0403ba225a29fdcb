use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

pub type Score = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// X = +1, O = -1, Empty = 0. Doubles as the score of a board won by
    /// this mark.
    pub fn value(&self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        }
    }

    pub fn score(&self) -> Score {
        self.value() as Score
    }

    pub fn is_maximizer(&self) -> bool {
        *self == Mark::X
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl TryFrom<i8> for Mark {
    type Error = BoardError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mark::X),
            -1 => Ok(Mark::O),
            0 => Ok(Mark::Empty),
            other => Err(BoardError::InvalidCell { value: other }),
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '_' | '-' => Ok(Mark::Empty),
            other => Err(BoardError::InvalidCharacter { character: other }),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Keypad numbering used by the console: 1..=9, row-major.
    pub fn from_keypad(key: u32) -> Option<Self> {
        if !(1..=9).contains(&key) {
            return None;
        }
        let index = (key - 1) as usize;
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_keypad(&self) -> u32 {
        (self.row * BOARD_SIZE + self.col + 1) as u32
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Random,
    Human,
    Ai,
}

/// Whether a session builds one tree for the whole game or a fresh subtree
/// from the current board on every AI turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStrategy {
    WholeGame,
    #[default]
    PerTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    #[default]
    Unbounded,
    Plies(usize),
}

impl DepthLimit {
    pub fn reached(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Unbounded => false,
            DepthLimit::Plies(limit) => depth >= *limit,
        }
    }

    /// Limit left for a subtree rooted one ply down.
    pub fn below(&self) -> DepthLimit {
        match self {
            DepthLimit::Unbounded => DepthLimit::Unbounded,
            DepthLimit::Plies(limit) => DepthLimit::Plies(limit.saturating_sub(1)),
        }
    }
}

impl From<Option<usize>> for DepthLimit {
    fn from(limit: Option<usize>) -> Self {
        match limit {
            Some(plies) => DepthLimit::Plies(plies),
            None => DepthLimit::Unbounded,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unbounded => write!(f, "unbounded"),
            DepthLimit::Plies(plies) => write!(f, "{} plies", plies),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { rows: usize, cols: usize },
    InvalidCell { value: i8 },
    InvalidCharacter { character: char },
    OutOfBounds { position: Position },
    CellOccupied { position: Position },
    EmptyMark,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Board must be 3x3, got {}x{}", rows, cols)
            }
            BoardError::InvalidCell { value } => {
                write!(f, "Invalid cell value {} (expected -1, 0 or 1)", value)
            }
            BoardError::InvalidCharacter { character } => {
                write!(f, "Invalid board character '{}' (expected X, O or .)", character)
            }
            BoardError::OutOfBounds { position } => {
                write!(f, "Position {} is out of bounds", position)
            }
            BoardError::CellOccupied { position } => {
                write!(f, "Cell {} is already marked", position)
            }
            BoardError::EmptyMark => write!(f, "Cannot place an empty mark"),
        }
    }
}

impl std::error::Error for BoardError {}
