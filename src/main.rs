//! Tic-Tac-Toe command-line front end.

use std::io;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_tictactoe::core::{Board, GameConfig, GameResult, GameRng, Mark, Move};
use rust_tictactoe::play::{render_index_board, EnginePlayer, GameSession, HumanPlayer};
use rust_tictactoe::search::{Minimax, SearchConfig};

/// Play Tic-Tac-Toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-Tac-Toe against a perfect opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug"
    #[arg(long, global = true)]
    log: Option<String>,

    /// Subcommand to run (default: play)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine
    Play(PlayArgs),

    /// Watch the engine play itself
    Watch(OpeningArgs),

    /// Print the engine's value and best move for a position
    Solve {
        /// Nine cells, e.g. "OXO/XX./XO." ('.', '_' or '-' for empty)
        position: String,

        /// Side to move (default: inferred from piece counts)
        #[arg(long)]
        to_move: Option<Mark>,

        /// Disable alpha-beta pruning
        #[arg(long)]
        no_pruning: bool,
    },
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Your side; X moves first
    #[arg(long, default_value = "x")]
    human: Mark,

    #[command(flatten)]
    opening: OpeningArgs,
}

#[derive(Args, Debug, Default)]
struct OpeningArgs {
    /// Seed for the engine's opening pick
    #[arg(long)]
    seed: Option<u64>,

    /// Search the first move instead of picking a random cell
    #[arg(long)]
    no_random_opening: bool,
}

impl OpeningArgs {
    fn game_config(&self, human: Mark) -> GameConfig {
        let config = GameConfig::default()
            .with_human(human)
            .with_random_opening(!self.no_random_opening);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let command = cli.command.unwrap_or(Command::Play(PlayArgs {
        human: Mark::X,
        opening: OpeningArgs::default(),
    }));

    match command {
        Command::Play(args) => run_play(&args),
        Command::Watch(args) => run_watch(&args),
        Command::Solve {
            position,
            to_move,
            no_pruning,
        } => run_solve(&position, to_move, no_pruning),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_move(session: &GameSession, mv: Move) -> rust_tictactoe::Result<()> {
    let mark = session.to_move().opponent();
    println!("{mark} takes {mv}");
    println!("{}", session.board());
    println!();
    Ok(())
}

/// Human vs engine.
fn run_play(args: &PlayArgs) -> Result<()> {
    let config = args.opening.game_config(args.human);
    let mut engine = EnginePlayer::from_config(&config, SearchConfig::default());
    info!(human = %config.human, seed = engine.seed(), "starting game");

    println!("Welcome to Tic-Tac-Toe!");
    println!("{}", render_index_board());
    println!("To make a move, enter a number from 0-8 as shown.");
    println!("You play {}. X moves first.", config.human);
    println!();

    let mut human = HumanPlayer::new(io::stdin().lock(), io::stdout());
    let mut session = GameSession::new();
    let result = match config.human {
        Mark::X => session.run(&mut human, &mut engine, print_move)?,
        Mark::O => session.run(&mut engine, &mut human, print_move)?,
    };

    match result.winner() {
        Some(mark) if mark == config.human => println!("You win!"),
        Some(mark) => println!("{mark} wins. Better luck next time."),
        None => println!("It's a tie!"),
    }
    Ok(())
}

/// Engine vs engine.
fn run_watch(args: &OpeningArgs) -> Result<()> {
    let config = args.game_config(Mark::X);
    let mut x = EnginePlayer::from_config(&config, SearchConfig::default());
    let mut o = EnginePlayer::new(SearchConfig::default(), GameRng::new(x.seed()));
    info!(seed = x.seed(), "starting self-play");

    let mut session = GameSession::new();
    let result = session.run(&mut x, &mut o, print_move)?;

    match result {
        GameResult::Draw => println!("It's a tie!"),
        other => println!("{other}!"),
    }
    Ok(())
}

/// Value and best move of a single position.
fn run_solve(position: &str, to_move: Option<Mark>, no_pruning: bool) -> Result<()> {
    let board = Board::parse(position)?;
    println!("{board}");

    let result = board.result();
    if result.is_terminal() {
        println!("Position is finished: {result}");
        return Ok(());
    }

    let mark = to_move.unwrap_or_else(|| board.inferred_to_move());
    let mut engine = Minimax::new(SearchConfig::default().with_pruning(!no_pruning));
    let search = engine.best_move(&board, mark);

    let Some(best) = search.best_move else {
        bail!("no move found for {mark} on a non-terminal board");
    };

    let outcome = match search.score {
        1 => "O wins",
        -1 => "X wins",
        _ => "draw",
    };
    println!("{mark} to move: play {best} (score {}, {outcome} with best play)", search.score);
    println!("{}", engine.stats());
    Ok(())
}
