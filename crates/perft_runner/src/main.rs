//! chess-perft CLI
//!
//! Perft counts, divide listings, EPD suites and position inspection.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_core::notation::{move_to_uci, render, to_san};
use chess_core::{Game, Position, perft_divide, perft_stats};
use perft_runner::cli::USAGE;
use perft_runner::{Cli, Command, RunnerConfig, run_suite_file};

#[derive(Serialize)]
struct PerftReport {
    fen: String,
    depth: u8,
    leaf_nodes: u64,
    total_nodes: u64,
    elapsed_ms: u128,
}

#[derive(Serialize)]
struct DivideReport {
    fen: String,
    depth: u8,
    moves: Vec<DivideEntry>,
    total: u64,
}

#[derive(Serialize)]
struct DivideEntry {
    uci: String,
    nodes: u64,
}

#[derive(Serialize)]
struct GameReport {
    fen: String,
    status: String,
    moves: Vec<String>,
    legal_moves: Vec<String>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = Cli::parse(&args).inspect_err(|_| eprintln!("{USAGE}\n"))?;

    let mut config = RunnerConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);
    init_tracing(&config.log_level);

    match cli.command {
        Command::Help => println!("{USAGE}"),
        Command::Perft { depth, fen } => {
            run_perft(&config, depth.unwrap_or(config.default_depth), fen)?
        }
        Command::Divide { depth, fen } => {
            run_divide(&config, depth.unwrap_or(config.default_depth), fen)?
        }
        Command::Suite { path } => run_suites(&config, path)?,
        Command::Show { fen } => {
            let game = Game::from_position(load_position(fen.as_deref())?);
            print_game(&config, &game, Vec::new())?;
        }
        Command::Play { fen, moves } => {
            let mut game = Game::from_position(load_position(fen.as_deref())?);
            let mut played = Vec::with_capacity(moves.len());
            for san in &moves {
                let status = game
                    .play_san(san)
                    .with_context(|| format!("cannot play '{san}' in {}", game.position()))?;
                played.push(san.clone());
                if status.is_terminal() && played.len() < moves.len() {
                    info!(%status, "game over, ignoring remaining moves");
                    break;
                }
            }
            print_game(&config, &game, played)?;
        }
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_position(fen: Option<&str>) -> Result<Position> {
    match fen {
        None => Ok(Position::startpos()),
        Some(fen) => Position::from_fen(fen).with_context(|| format!("invalid FEN '{fen}'")),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_perft(config: &RunnerConfig, depth: u8, fen: Option<String>) -> Result<()> {
    let mut pos = load_position(fen.as_deref())?;
    info!(fen = %pos, depth, "perft");

    let start = Instant::now();
    let stats = perft_stats(&mut pos, depth);
    let elapsed = start.elapsed();

    let report = PerftReport {
        fen: pos.to_fen(),
        depth,
        leaf_nodes: stats.leaf_nodes,
        total_nodes: stats.total_nodes,
        elapsed_ms: elapsed.as_millis(),
    };
    if config.json {
        return print_json(&report);
    }

    let nps = if elapsed.as_secs_f64() > 0.0 {
        stats.total_nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!("Position: {}", report.fen);
    println!("Depth: {depth}");
    println!("Nodes: {}", report.leaf_nodes);
    println!("Total nodes: {}", report.total_nodes);
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.2}M", nps / 1_000_000.0);
    Ok(())
}

fn run_divide(config: &RunnerConfig, depth: u8, fen: Option<String>) -> Result<()> {
    let mut pos = load_position(fen.as_deref())?;
    let mut moves: Vec<DivideEntry> = perft_divide(&mut pos, depth)
        .into_iter()
        .map(|(mv, nodes)| DivideEntry {
            uci: move_to_uci(mv),
            nodes,
        })
        .collect();
    moves.sort_by(|a, b| a.uci.cmp(&b.uci));
    let report = DivideReport {
        fen: pos.to_fen(),
        depth,
        total: moves.iter().map(|m| m.nodes).sum(),
        moves,
    };
    if config.json {
        return print_json(&report);
    }

    for entry in &report.moves {
        println!("{}: {}", entry.uci, entry.nodes);
    }
    println!();
    println!("Moves: {}", report.moves.len());
    println!("Nodes: {}", report.total);
    Ok(())
}

fn run_suites(config: &RunnerConfig, path: Option<PathBuf>) -> Result<()> {
    let paths = match path {
        Some(path) => vec![path],
        None if config.suites.is_empty() => {
            bail!("no suite file given and none listed under `suites` in the config")
        }
        None => config.suites.clone(),
    };

    let mut failures = 0;
    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        let report = run_suite_file(path, config.node_limit)?;
        failures += report.failures();
        if !config.json {
            report.print_report();
            println!();
        }
        reports.push(report);
    }
    if config.json {
        print_json(&reports)?;
    }

    if failures > 0 {
        bail!("{failures} suite case(s) failed");
    }
    Ok(())
}

fn print_game(config: &RunnerConfig, game: &Game, played: Vec<String>) -> Result<()> {
    let pos = game.position();
    let legal: Vec<String> = game
        .legal_moves()
        .into_iter()
        .map(|mv| to_san(pos, mv))
        .collect();

    if config.json {
        return print_json(&GameReport {
            fen: pos.to_fen(),
            status: game.status().to_string(),
            moves: played,
            legal_moves: legal,
        });
    }

    if !played.is_empty() {
        println!("Moves: {}", played.join(" "));
        println!();
    }
    println!("{}", render(pos));
    println!();
    println!("Status: {}", game.status());
    println!("Legal moves ({}): {}", legal.len(), legal.join(" "));
    Ok(())
}
