use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use connect383::ai::{AlphaBeta, Exhaustive, Searcher};
use connect383::config::{AgentConfig, AgentKind, AppConfig, BoardConfig};
use connect383::game::{GameState, Player};
use connect383::play::{build_agent, play_game};

/// Play Connect 383 between human, random and minimax agents.
#[derive(Parser)]
#[command(name = "connect383", about = "Minimax agents for Connect 383")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game and print the board after every move
    Play {
        /// Path to TOML configuration file
        #[arg(long, default_value = "connect383.toml")]
        config: PathBuf,

        /// Override player one's agent
        #[arg(long, value_enum)]
        p1: Option<AgentKind>,

        /// Override player two's agent
        #[arg(long, value_enum)]
        p2: Option<AgentKind>,

        /// Search depth for heuristic agents
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,

        /// Seed for random agents
        #[arg(long)]
        seed: Option<u64>,

        /// Override board rows
        #[arg(long)]
        rows: Option<usize>,

        /// Override board columns
        #[arg(long)]
        cols: Option<usize>,
    },

    /// Compare exhaustive and alpha-beta search on one position
    Count {
        #[arg(long, default_value_t = 3)]
        rows: usize,

        #[arg(long, default_value_t = 4)]
        cols: usize,

        /// Comma-separated columns to play before searching
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(serde::Serialize)]
struct SearchReport {
    searcher: String,
    value: f64,
    states: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            p1,
            p2,
            depth,
            seed,
            rows,
            cols,
        } => {
            let mut app_config = AppConfig::load_or_default(&config)
                .with_context(|| format!("loading config from {}", config.display()))?;

            // Apply CLI overrides
            if let Some(rows) = rows {
                app_config.board.rows = rows;
            }
            if let Some(cols) = cols {
                app_config.board.cols = cols;
            }
            apply_overrides(&mut app_config.player_one, p1, depth, seed);
            apply_overrides(&mut app_config.player_two, p2, depth, seed);
            app_config.validate().context("validating configuration")?;

            run_game(&app_config)
        }
        Command::Count {
            rows,
            cols,
            moves,
            json,
        } => run_count(rows, cols, &moves, json),
    }
}

fn apply_overrides(
    seat: &mut AgentConfig,
    kind: Option<AgentKind>,
    depth: Option<i64>,
    seed: Option<u64>,
) {
    if let Some(kind) = kind {
        seat.kind = kind;
    }
    if depth.is_some() {
        seat.depth = depth;
    }
    if seed.is_some() {
        seat.seed = seed;
    }
}

fn run_game(config: &AppConfig) -> Result<()> {
    let mut one = build_agent(&config.player_one).context("building player one")?;
    let mut two = build_agent(&config.player_two).context("building player two")?;
    println!(
        "{} ({}) vs {} ({})",
        Player::One.name(),
        one.name(),
        Player::Two.name(),
        two.name()
    );

    let state = GameState::initial(config.board.rows, config.board.cols);
    println!("{}\n", state.board());

    let record = play_game(&mut one, &mut two, state, |player, mv, next| {
        println!("{} plays column {}", player.name(), mv);
        println!("{next}\n");
    })?;

    match record.winner() {
        Some(player) => println!("{} wins by {}", player.name(), record.final_state.margin().abs()),
        None => println!("Tie game"),
    }
    Ok(())
}

fn run_count(rows: usize, cols: usize, moves: &[usize], json: bool) -> Result<()> {
    BoardConfig { rows, cols }
        .validate()
        .context("validating board size")?;
    let root = GameState::from_moves(rows, cols, moves)
        .with_context(|| format!("replaying moves {moves:?}"))?;

    let searchers: [&dyn Searcher<GameState>; 2] = [&Exhaustive, &AlphaBeta];
    let reports: Vec<SearchReport> = searchers
        .iter()
        .map(|searcher| {
            let before = root.counter().get();
            let value = searcher.minimax(&root);
            SearchReport {
                searcher: searcher.name().to_string(),
                value,
                states: root.counter().get() - before,
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("serializing report")?
        );
    } else {
        println!("{}\n", root.board());
        for report in &reports {
            println!(
                "{:<14} value {:>6}  states {:>10}",
                report.searcher, report.value, report.states
            );
        }
    }
    Ok(())
}
