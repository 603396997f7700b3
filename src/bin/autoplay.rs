//! Headless autoplayer: runs the planner for a number of games and prints results.
//!
//! No timers: every planned action is applied immediately, and a rejected
//! action falls back to one gravity tick so a blocked plan still ends in a lock.

use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};

use autotris::core::GameState;
use autotris::engine::{AiWeights, Autopilot};
use autotris::storage::{qualifies, FileStore, Storage, StorageConfig};
use autotris::types::{GameAction, MAX_START_LEVEL, MIN_START_LEVEL};

#[derive(Parser, Debug, Clone)]
#[command(name = "autoplay", about = "Run the heuristic autoplayer without a terminal UI")]
struct Opts {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Base seed; game N uses seed + N (defaults to AUTOTRIS_SEED, else random)
    #[arg(long)]
    seed: Option<u32>,
    /// Stop a game after this many pieces
    #[arg(long, default_value_t = 1000)]
    pieces: u32,
    /// Start level (defaults to the stored settings)
    #[arg(long)]
    start_level: Option<u32>,
    /// Weight for lines cleared
    #[arg(long)]
    lines_weight: Option<f64>,
    /// Weight for holes
    #[arg(long)]
    holes_weight: Option<f64>,
    /// Weight for the tallest column
    #[arg(long)]
    height_weight: Option<f64>,
    /// Weight for bumpiness
    #[arg(long)]
    bumpiness_weight: Option<f64>,
    /// Save finished games that make the high score table
    #[arg(long)]
    record: bool,
}

#[derive(Debug, Clone, Copy)]
struct GameResult {
    seed: u32,
    score: u32,
    level: u32,
    lines: u32,
    pieces: u32,
    topped_out: bool,
}

fn play(seed: u32, start_level: u32, weights: AiWeights, max_pieces: u32) -> GameResult {
    let mut state = GameState::with_seed(start_level, seed);
    let mut pilot = Autopilot::new(weights);

    while !state.game_over() && state.piece_id() <= max_pieces {
        let action = pilot.next_action(&state);
        if !state.apply_action(action) {
            state.apply_action(GameAction::Tick);
        }
    }

    GameResult {
        seed,
        score: state.score(),
        level: state.level(),
        lines: state.lines(),
        pieces: state.piece_id().min(max_pieces),
        topped_out: state.game_over(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    if opts.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = StorageConfig::from_env();
    let mut storage = Storage::new(FileStore::new(&config.data_dir));
    let settings = storage.load_settings();

    let start_level = opts
        .start_level
        .unwrap_or(settings.start_level)
        .clamp(MIN_START_LEVEL, MAX_START_LEVEL);
    let defaults = AiWeights::from(&settings.ai);
    let weights = AiWeights {
        lines_cleared: opts.lines_weight.unwrap_or(defaults.lines_cleared),
        holes: opts.holes_weight.unwrap_or(defaults.holes),
        height: opts.height_weight.unwrap_or(defaults.height),
        bumpiness: opts.bumpiness_weight.unwrap_or(defaults.bumpiness),
    };
    let base_seed = opts
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random);

    info!(
        "playing {} game(s) from seed {} at level {} with {:?}",
        opts.games, base_seed, start_level, weights
    );

    let mut results = Vec::with_capacity(opts.games as usize);
    for game in 0..opts.games {
        let result = play(base_seed.wrapping_add(game), start_level, weights, opts.pieces);
        println!(
            "game {:>3}  seed {:>10}  score {:>8}  lines {:>5}  level {:>3}  pieces {:>5}  {}",
            game + 1,
            result.seed,
            result.score,
            result.lines,
            result.level,
            result.pieces,
            if result.topped_out { "topped out" } else { "piece limit" }
        );

        if opts.record && qualifies(&storage.load_high_scores(), result.score) {
            if let Err(err) = storage.save_high_score(result.score, result.level, result.lines) {
                warn!("failed to record game {}: {}", game + 1, err);
            }
        }
        results.push(result);
    }

    let n = results.len() as f64;
    let mean_score = results.iter().map(|r| r.score as f64).sum::<f64>() / n;
    let mean_lines = results.iter().map(|r| r.lines as f64).sum::<f64>() / n;
    let best = results.iter().map(|r| r.score).max().unwrap_or(0);
    println!(
        "mean score {:.1}  mean lines {:.1}  best score {}",
        mean_score, mean_lines, best
    );

    Ok(())
}
