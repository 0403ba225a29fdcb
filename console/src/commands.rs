use std::io;

use tictactoe_engine::config::EngineConfig;
use tictactoe_engine::tictactoe::{
    Board, DepthLimit, Mark, TicTacToeGameState, best_ranked_move, build_tree, evaluate,
    rank_moves,
};
use tictactoe_engine::{SessionRng, log};

use crate::play::{PlayOutcome, run_game};
use crate::render::render_board;

pub fn play(config: &EngineConfig, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let settings = config.session_settings();
    log!(
        "Starting game: strategy {:?}, depth limit {}, seed {}",
        settings.tree_strategy,
        settings.depth_limit,
        rng.seed()
    );

    let mut state = TicTacToeGameState::new(&settings, &mut rng)?;
    let stdin = io::stdin();
    let outcome = run_game(&mut state, &mut stdin.lock(), &mut io::stdout())?;

    if outcome == PlayOutcome::Quit {
        println!("Game abandoned.");
    }
    Ok(())
}

fn mover_for(board: &Board, mark: Option<Mark>) -> Mark {
    mark.unwrap_or_else(|| board.next_mark(Mark::X))
}

/// The command-line limit wins; otherwise the configured one applies.
fn search_limit(config: &EngineConfig, depth_limit: Option<usize>) -> DepthLimit {
    DepthLimit::from(depth_limit.or(config.search.depth_limit))
}

pub fn suggest(
    config: &EngineConfig,
    board: Board,
    mark: Option<Mark>,
    depth_limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mover = mover_for(&board, mark);
    let depth_limit = search_limit(config, depth_limit);
    let ranked = rank_moves(board, mover, depth_limit);

    println!("{}\n", render_board(&board));
    println!("{} to move, depth limit {}", mover, depth_limit);

    for &(pos, score) in &ranked {
        println!("  key {} {}: score {:+}", pos.to_keypad(), pos, score);
    }

    match best_ranked_move(mover, &ranked) {
        Some(pos) => println!("Best move: key {} {}", pos.to_keypad(), pos),
        None => println!("No move: the board is full"),
    }
    Ok(())
}

pub fn tree(
    config: &EngineConfig,
    board: Board,
    mark: Option<Mark>,
    depth_limit: Option<usize>,
    outline: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mover = mover_for(&board, mark);
    let tree = build_tree(board, mover, search_limit(config, depth_limit));
    let stats = tree.stats();

    println!("Nodes:           {}", stats.nodes);
    println!("Leaves:          {}", stats.leaves);
    println!("Terminal leaves: {}", stats.terminal_leaves);
    println!("Max depth:       {}", stats.max_depth);
    println!(
        "Root score:      {:+}",
        evaluate(&tree, tree.root(), mover.is_maximizer())
    );

    if let Some(max_depth) = outline {
        for line in tree.outline(max_depth) {
            println!("{}", line);
        }
    }
    Ok(())
}
