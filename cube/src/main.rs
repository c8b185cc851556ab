mod interactive;
mod render;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use cube_agents::{play_game, play_self, GameOutcome, MoveLearner, RandomAgent, ScoreTable};
use cube_core::{
    format_move_input, perft, perft_detailed, perft_divide, Board, Color, GameResult, MoveId,
};
use interactive::InteractiveGame;
use log::info;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "cube", about = "King and pawns on a 4x4x4 cube, against an opponent that learns")]
struct Args {
    /// Score table the learner reads at start and rewrites after every game
    #[arg(long, global = true, default_value = "ai_memory.json")]
    memory: PathBuf,

    /// Seed for the learner's random choices (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play White against the learner
    Play,
    /// Let the learner play Black in automated games
    Train {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: usize,

        /// Plies after which a game is abandoned and not recorded
        #[arg(long, default_value_t = 200)]
        max_plies: usize,

        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
    },
    /// Count move-tree leaves from the starting position
    Perft {
        depth: u8,

        /// Show the count under each of White's first moves
        #[arg(long, conflicts_with = "detailed")]
        divide: bool,

        /// Break leaf moves down into captures, King captures and climbs
        #[arg(long)]
        detailed: bool,
    },
    /// Show the best and worst remembered moves
    Stats {
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Print the starting position
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Uniformly random White
    Random,
    /// The learner plays both sides
    Learner,
}

fn load_learner(path: &Path, seed: Option<u64>) -> anyhow::Result<MoveLearner<StdRng>> {
    let learner = match seed {
        Some(seed) => MoveLearner::load_seeded(path, seed)?,
        None => MoveLearner::load(path)?,
    };
    info!(
        "loaded {} remembered moves from {}",
        learner.table().len(),
        path.display()
    );
    Ok(learner)
}

fn play(args: &Args) -> anyhow::Result<()> {
    let mut learner = load_learner(&args.memory, args.seed)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    InteractiveGame::new(&mut learner).run(&mut input, &mut stdout)?;
    Ok(())
}

fn train(args: &Args, games: usize, max_plies: usize, opponent: Opponent) -> anyhow::Result<()> {
    let mut learner = load_learner(&args.memory, args.seed)?;
    let mut random = match args.seed {
        Some(seed) => RandomAgent::seeded(seed.wrapping_add(1)),
        None => RandomAgent::new(),
    };

    let (mut white_wins, mut black_wins, mut draws, mut abandoned) = (0, 0, 0, 0);
    let start = Instant::now();

    for game in 1..=games {
        let outcome = match opponent {
            Opponent::Random => play_game(&mut random, &mut learner, max_plies)?,
            Opponent::Learner => play_self(&mut learner, max_plies)?,
        };

        match outcome {
            GameOutcome::Finished { result, history } => {
                learner.record_result(&history, result)?;
                match result {
                    GameResult::WhiteWins => white_wins += 1,
                    GameResult::BlackWins => black_wins += 1,
                    GameResult::Draw => draws += 1,
                }
                info!("game {}: {} in {} plies", game, result, history.len());
            }
            GameOutcome::Abandoned { plies } => {
                abandoned += 1;
                info!("game {}: abandoned at {} plies", game, plies);
            }
        }
    }

    println!("Games: {}", games);
    println!("White wins: {}", white_wins);
    println!("Black wins: {}", black_wins);
    println!("Draws: {}", draws);
    println!("Abandoned: {}", abandoned);
    println!("Remembered moves: {}", learner.table().len());
    println!("Time: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn run_perft(depth: u8, divide: bool, detailed: bool) -> anyhow::Result<()> {
    let board = Board::starting_position();
    println!("Running perft({})...", depth);

    if divide {
        let results = perft_divide(&board, Color::White, depth)?;
        let mut total = 0;
        for (mv, count) in &results {
            println!("{}: {}", mv, count);
            total += count;
        }
        println!("\nTotal: {}", total);
    } else if detailed {
        let results = perft_detailed(&board, Color::White, depth)?;
        println!("Nodes: {}", results.nodes);
        println!("Captures: {}", results.captures);
        println!("King captures: {}", results.king_captures);
        println!("Climbs: {}", results.climbs);
    } else {
        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth)?;
        let elapsed = start.elapsed();
        println!("Nodes: {}", nodes);
        println!("Time: {:.2}s", elapsed.as_secs_f64());
    }
    Ok(())
}

/// One line of `stats` output; the decoded move is shown the way it is typed.
fn stats_line(id: &str, score: i64) -> String {
    match id.parse::<MoveId>().and_then(|id| id.to_move()) {
        Ok(mv) => format!("  {} {:+}  ({})", id, score, format_move_input(mv)),
        Err(_) => format!("  {} {:+}  (malformed)", id, score),
    }
}

fn stats(path: &Path, top: usize) -> anyhow::Result<()> {
    let table = ScoreTable::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    if table.is_empty() {
        println!("No remembered moves in {}", path.display());
        return Ok(());
    }

    let mut entries: Vec<(&str, i64)> = table.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("{} remembered moves", entries.len());
    println!("\nBest:");
    for (id, score) in entries.iter().take(top) {
        println!("{}", stats_line(id, *score));
    }
    println!("\nWorst:");
    for (id, score) in entries.iter().rev().take(top) {
        println!("{}", stats_line(id, *score));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.command {
        Some(Command::Play) | None => play(&args),
        Some(Command::Train {
            games,
            max_plies,
            opponent,
        }) => train(&args, *games, *max_plies, *opponent),
        Some(Command::Perft {
            depth,
            divide,
            detailed,
        }) => run_perft(*depth, *divide, *detailed),
        Some(Command::Stats { top }) => stats(&args.memory, *top),
        Some(Command::Show) => {
            render::draw_board(&mut io::stdout(), &Board::starting_position())?;
            Ok(())
        }
    }
}
