use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use slotchess::agent::ai::{mate_distance, Difficulty, EvalKind, SearchConfig};
use slotchess::game::Game;
use slotchess::game_repr::STANDARD_FEN;

#[derive(Parser, Debug)]
#[command(name = "slotchess", about = "Diagnostics driver for the slotchess engine")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// Options shared by the commands that run the search
#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u8,
    /// simple or rich
    #[arg(long, default_value = "rich")]
    eval: EvalKind,
    /// Preset that overrides --depth (easy, medium, hard, expert)
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Time budget per move in milliseconds
    #[arg(long)]
    movetime_ms: Option<u64>,
    /// Seed for the tie-break between equal moves
    #[arg(long)]
    seed: Option<u64>,
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        let mut config = match self.difficulty {
            Some(difficulty) => SearchConfig::from(difficulty),
            None => SearchConfig::default().with_depth(self.depth),
        }
        .with_eval(self.eval);
        if let Some(ms) = self.movetime_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(value_name = "DEPTH")]
        depth: u32,
        /// FEN string or "startpos"
        #[arg(value_name = "FEN", default_value = "startpos")]
        fen: String,
    },
    /// Perft split by root move
    Divide {
        #[arg(value_name = "DEPTH")]
        depth: u32,
        #[arg(value_name = "FEN", default_value = "startpos")]
        fen: String,
    },
    /// Search one position and print the chosen move
    Bestmove {
        #[arg(value_name = "FEN", default_value = "startpos")]
        fen: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Let the engine play both sides
    Selfplay {
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(value_name = "FEN", default_value = "startpos")]
        fen: String,
        #[command(flatten)]
        search: SearchArgs,
    },
}

fn load(fen: &str) -> anyhow::Result<Game> {
    let fen = if fen == "startpos" { STANDARD_FEN } else { fen };
    Game::from_fen(fen).with_context(|| format!("invalid position '{fen}'"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Perft { depth, fen } => {
            let game = load(&fen)?;
            let mut position = game.position().clone();
            let t0 = Instant::now();
            let nodes = position.perft(game.to_move(), depth);
            let dt = t0.elapsed().as_secs_f64();
            println!("nodes: {nodes} elapsed: {dt:.3}s nps: {:.0}", nodes as f64 / dt.max(1e-9));
        }
        Command::Divide { depth, fen } => {
            if depth == 0 {
                bail!("divide needs a depth of at least 1");
            }
            let game = load(&fen)?;
            let mut position = game.position().clone();
            let mut total = 0;
            for (mv, nodes) in position.divide(game.to_move(), depth) {
                println!("{mv}: {nodes}");
                total += nodes;
            }
            println!("\ntotal: {total}");
        }
        Command::Bestmove { fen, search } => {
            let mut game = load(&fen)?;
            let side = game.to_move();
            let result = game.analyse(side, &search.config());
            match result.best_move {
                Some(mv) => {
                    let score = match mate_distance(result.score) {
                        Some(plies) => format!("mate {plies}"),
                        None => format!("cp {}", result.score),
                    };
                    println!(
                        "bestmove {mv} score {score} depth {} nodes {} time {}ms",
                        result.depth,
                        result.nodes_searched,
                        result.elapsed.as_millis()
                    );
                }
                None => println!("bestmove (none) {:?}", game.status()),
            }
        }
        Command::Selfplay {
            max_plies,
            fen,
            search,
        } => {
            let mut game = load(&fen)?;
            let config = search.config();
            let mut moves = Vec::new();
            while moves.len() < max_plies && !game.status().is_over() {
                match game.play_computer_move(&config) {
                    Some(mv) => moves.push(mv.to_string()),
                    None => break,
                }
            }
            println!("{}", moves.join(" "));
            println!("{}", game.position());
            println!("result: {:?} after {} plies", game.status(), moves.len());
        }
    }
    Ok(())
}
