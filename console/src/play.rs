use std::io::{self, BufRead, Write};

use tictactoe_engine::tictactoe::{GameStatus, Position, TicTacToeGameState};
use tictactoe_engine::log;

use crate::render::{describe_status, describe_winning_line, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Finished(GameStatus),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum HumanInput {
    Move(Position),
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> HumanInput {
    if line.eq_ignore_ascii_case("q") {
        return HumanInput::Quit;
    }
    line.parse::<u32>()
        .ok()
        .and_then(Position::from_keypad)
        .map_or(HumanInput::Invalid, HumanInput::Move)
}

/// Runs the turn loop until the game ends, the player quits, or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    writeln!(
        output,
        "You are {}, the AI is {}. {} moves first.",
        state.human_mark,
        state.ai_mark,
        if state.is_ai_turn() { "The AI" } else { "You" }
    )?;

    loop {
        writeln!(output, "\n{}\n", render_board(&state.board))?;

        if state.status.is_over() {
            if let Some(line) = state.board.winning_line() {
                writeln!(output, "{}", describe_winning_line(&line))?;
            }
            writeln!(output, "{}", describe_status(state.status, state.human_mark))?;
            log!("Game finished: {:?}", state.status);
            return Ok(PlayOutcome::Finished(state.status));
        }

        if state.is_ai_turn() {
            match state.play_ai_turn().map_err(io::Error::other)? {
                Some(pos) => writeln!(output, "AI plays {}.", pos.to_keypad())?,
                None => return Ok(PlayOutcome::Finished(state.status)),
            }
            continue;
        }

        write!(output, "Your move (1-9, q to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayOutcome::Quit);
        }

        match parse_input(line.trim()) {
            HumanInput::Quit => return Ok(PlayOutcome::Quit),
            HumanInput::Move(pos) => {
                if let Err(e) = state.place_human_mark(pos) {
                    writeln!(output, "{}. Try again.", e)?;
                }
            }
            HumanInput::Invalid => {
                writeln!(output, "Please enter a digit from 1 to 9, or q to quit.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::SessionRng;
    use tictactoe_engine::tictactoe::{FirstPlayerMode, Mark, TicTacToeSessionSettings};

    fn new_state(first_player: FirstPlayerMode) -> TicTacToeGameState {
        let settings = TicTacToeSessionSettings {
            first_player,
            ..Default::default()
        };
        TicTacToeGameState::new(&settings, &mut SessionRng::new(11)).unwrap()
    }

    fn run(state: &mut TicTacToeGameState, input: &str) -> (PlayOutcome, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_game(state, &mut reader, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("q"), HumanInput::Quit);
        assert_eq!(parse_input("Q"), HumanInput::Quit);
        assert_eq!(parse_input("5"), HumanInput::Move(Position::new(1, 1)));
        assert_eq!(parse_input("0"), HumanInput::Invalid);
        assert_eq!(parse_input("12"), HumanInput::Invalid);
        assert_eq!(parse_input("x"), HumanInput::Invalid);
    }

    #[test]
    fn test_invalid_input_reprompts_then_quits() {
        let mut state = new_state(FirstPlayerMode::Human);
        let (outcome, output) = run(&mut state, "abc\n10\n5\nq\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(output.matches("Please enter a digit").count(), 2);
        assert_eq!(state.board.get(Position::new(1, 1)), Some(Mark::O));
        assert_eq!(state.board.count(Mark::X), 1);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = new_state(FirstPlayerMode::Ai);
        let (outcome, output) = run(&mut state, "1\n");

        // The AI opens in the first cell, so key 1 is taken; input then ends.
        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(output.contains("AI plays 1."));
        assert!(output.contains("already marked"));
        assert_eq!(state.board.count(Mark::O), 0);
    }

    #[test]
    fn test_game_played_to_the_end() {
        let mut state = new_state(FirstPlayerMode::Ai);
        // First free cell each turn: the edge reply loses to the corner opening.
        let (outcome, output) = run(&mut state, "2\n3\n4\n5\n6\n7\n8\n9\n");

        assert_eq!(outcome, PlayOutcome::Finished(GameStatus::XWon));
        assert!(output.contains("X completed the line from key"));
        assert!(output.contains("AI wins!"));
    }
}
