//! Headless Cram tools: list moves, ask the engine for a move, or watch
//! the computer play itself.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use cram::config::{init_tracing, AppConfig};
use cram::search::{CancelToken, Searcher};
use cram::{Board, Game, GameError, Player, SearchController};

#[derive(Parser, Debug)]
#[command(name = "cram-cli", version, about = "Headless tools for the Cram engine")]
struct Cli {
    /// TOML config file supplying default size and depth
    #[arg(long, global = true, default_value = "cram.toml")]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List legal moves in canonical order
    Moves {
        /// Board side for an empty board
        #[arg(long)]
        size: Option<usize>,
        /// Position in text form, rows separated by '/'
        #[arg(long, conflicts_with = "size")]
        board: Option<String>,
    },
    /// Search a position and print the chosen domino
    Best {
        /// Position in text form, rows separated by '/'
        #[arg(long)]
        board: String,
        /// Side expected to move; checked against the colour counts
        #[arg(long, value_enum)]
        to_move: Option<Side>,
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Computer against computer
    Selfplay {
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        red_depth: Option<u32>,
        #[arg(long)]
        blue_depth: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Red,
    Blue,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Player::Red,
            Side::Blue => Player::Blue,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing("warn");
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.cmd {
        Command::Moves { size, board } => {
            let game = match board {
                Some(text) => Game::from_board(text.parse::<Board>()?)?,
                None => Game::new(size.unwrap_or(config.game.board_size))?,
            };
            print_moves(&game);
        }
        Command::Best {
            board,
            to_move,
            depth,
        } => {
            let game = Game::from_board(board.parse::<Board>()?)?;
            best(&game, to_move.map(Player::from), depth.unwrap_or(config.game.difficulty))?;
        }
        Command::Selfplay {
            size,
            red_depth,
            blue_depth,
        } => {
            let depth = config.game.difficulty;
            selfplay(
                size.unwrap_or(config.game.board_size),
                red_depth.unwrap_or(depth),
                blue_depth.unwrap_or(depth),
            )?;
        }
    }
    Ok(())
}

fn print_moves(game: &Game) {
    println!("{}\n", game.board());
    match game.to_move() {
        Some(player) => println!("{player} to move"),
        None => println!("game over"),
    }
    let moves = game.legal_moves();
    for (i, domino) in moves.iter().enumerate() {
        println!("{:>3}. {domino}", i + 1);
    }
    println!("{} legal moves", moves.len());
}

fn best(game: &Game, expected: Option<Player>, depth: u32) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(winner) = game.winner() {
        println!("game over: {winner} wins");
        return Ok(());
    }
    let me = game
        .to_move()
        .ok_or_else(|| GameError::InvalidPosition("no side to move".into()))?;
    if let Some(expected) = expected.filter(|&p| p != me) {
        return Err(GameError::InvalidPosition(format!(
            "colour counts put {me} to move, not {expected}"
        ))
        .into());
    }

    let result = Searcher::new(game.size(), CancelToken::new()).search(game, me, depth)?;
    match result.best_move {
        Some(domino) => println!("best: {domino}"),
        None => println!("best: none"),
    }
    println!("score: {}", result.score);
    println!("nodes: {}", result.nodes);
    println!("time: {:.3}s", result.elapsed.as_secs_f64());
    Ok(())
}

fn selfplay(size: usize, red_depth: u32, blue_depth: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(size)?;
    info!(size, red_depth, blue_depth, "selfplay started");

    while let Some(player) = game.to_move() {
        let depth = match player {
            Player::Red => red_depth,
            Player::Blue => blue_depth,
        };
        let mut controller = SearchController::spawn(&game, depth)?;
        let result = controller.wait()?;
        let domino = result
            .best_move
            .ok_or_else(|| GameError::InvalidPosition("search returned no move".into()))?;
        game.apply(domino)?;
        println!(
            "{:>3}. {:<4} {domino}  (score {}, {} nodes)",
            game.history_len(),
            player.name(),
            result.score,
            result.nodes
        );
    }

    println!("\n{}\n", game.board());
    if let Some(winner) = game.winner() {
        println!("{winner} wins after {} moves", game.history_len());
    }
    Ok(())
}
