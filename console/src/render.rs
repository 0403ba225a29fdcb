use tictactoe_engine::tictactoe::{Board, GameStatus, Mark, Position, WinningLine};

/// Draws the board with keypad digits in the free cells.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => Position::new(row, col).to_keypad().to_string(),
                    other => other.to_string(),
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn describe_status(status: GameStatus, human_mark: Mark) -> String {
    match status {
        GameStatus::InProgress => "Game in progress".to_string(),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::XWon if human_mark == Mark::X => "You win!".to_string(),
        GameStatus::OWon if human_mark == Mark::O => "You win!".to_string(),
        GameStatus::XWon | GameStatus::OWon => "AI wins!".to_string(),
    }
}

pub fn describe_winning_line(line: &WinningLine) -> String {
    format!(
        "{} completed the line from key {} to key {}.",
        line.mark,
        line.start.to_keypad(),
        line.end.to_keypad()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_shows_marks_and_keys() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let expected = " X | 2 | O \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_describe_status_from_human_side() {
        assert_eq!(describe_status(GameStatus::XWon, Mark::X), "You win!");
        assert_eq!(describe_status(GameStatus::XWon, Mark::O), "AI wins!");
        assert_eq!(describe_status(GameStatus::OWon, Mark::O), "You win!");
        assert_eq!(describe_status(GameStatus::Draw, Mark::O), "It's a draw!");
    }

    #[test]
    fn test_describe_winning_line_uses_keys() {
        let board: Board = "O.X/OX./X..".parse().unwrap();
        let line = board.winning_line().unwrap();
        assert_eq!(
            describe_winning_line(&line),
            "X completed the line from key 3 to key 7."
        );
    }
}
