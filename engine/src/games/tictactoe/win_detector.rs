use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Rows, columns, then the two diagonals, as (row, col) triples.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Every line is examined; the first completed one in `WINNING_LINES` order
/// is reported.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let mut winner = None;

    for line in WINNING_LINES.iter() {
        let Some(mark) = line_owner(board, line) else {
            continue;
        };
        if winner.is_none() {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[2];
            winner = Some(WinningLine::new(
                mark,
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            ));
        }
    }

    winner
}

fn line_owner(board: &Board, line: &[(usize, usize); 3]) -> Option<Mark> {
    let first = board.cell(line[0].0, line[0].1);
    if first == Mark::Empty {
        return None;
    }

    let complete = line
        .iter()
        .all(|&(row, col)| board.cell(row, col) == first);

    if complete { Some(first) } else { None }
}
