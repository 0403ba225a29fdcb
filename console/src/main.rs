mod commands;
mod play;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::config::{ConfigManager, DEFAULT_CONFIG_FILE, EngineConfig, Validate};
use tictactoe_engine::tictactoe::{Board, FirstPlayerMode, Mark, TreeStrategy};
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play Tic-Tac-Toe against a minimax AI")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log search details
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive game on the terminal
    Play(PlayArgs),
    /// Score every legal move on a board and print the AI's choice
    Suggest(SearchArgs),
    /// Print statistics about the search tree for a board
    Tree {
        #[command(flatten)]
        search: SearchArgs,

        /// Print node ids down to this depth
        #[arg(long)]
        outline: Option<usize>,
    },
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    #[arg(long)]
    depth_limit: Option<usize>,

    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Seed for choosing who moves first
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Nine cells of X, O or '.', row by row ('/' separators allowed)
    #[arg(long, default_value = ".........", value_parser = parse_board)]
    board: Board,

    /// Mark to move; inferred from piece counts when omitted
    #[arg(long, value_enum)]
    mark: Option<MarkArg>,

    #[arg(long)]
    depth_limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    WholeGame,
    PerTurn,
}

impl From<StrategyArg> for TreeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::WholeGame => TreeStrategy::WholeGame,
            StrategyArg::PerTurn => TreeStrategy::PerTurn,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Random,
    Human,
    Ai,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Ai => FirstPlayerMode::Ai,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

fn parse_board(s: &str) -> Result<Board, String> {
    s.parse::<Board>().map_err(|e| e.to_string())
}

fn load_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let config_manager: ConfigManager<_, EngineConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(Command::Play(play_args)) = &args.command {
        if let Some(strategy) = play_args.strategy {
            config.search.tree_strategy = strategy.into();
        }
        if let Some(limit) = play_args.depth_limit {
            config.search.depth_limit = Some(limit);
        }
        if let Some(first) = play_args.first {
            config.session.first_player = first.into();
        }
    }
    if args.verbose {
        config.logging.verbose = true;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, config.logging.verbose);

    match args.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(play_args) => commands::play(&config, play_args.seed)?,
        Command::Suggest(search) => commands::suggest(
            &config,
            search.board,
            search.mark.map(Mark::from),
            search.depth_limit,
        )?,
        Command::Tree { search, outline } => commands::tree(
            &config,
            search.board,
            search.mark.map(Mark::from),
            search.depth_limit,
            outline,
        )?,
    }

    log!("Bye");
    Ok(())
}
