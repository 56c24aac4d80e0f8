//! Command-line parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

use crate::config::RunnerConfig;

pub const USAGE: &str = "\
chess-perft: perft and position inspection for chess_core

Usage:
  chess-perft perft [depth] [fen]      count leaf nodes
  chess-perft divide [depth] [fen]     leaf nodes below each root move
  chess-perft suite [file.epd]         run EPD perft expectations
  chess-perft show [fen]               board, legal moves and status
  chess-perft play <san>...            play moves from the start (or --fen)

Options:
  --config <path>      TOML configuration (default: chess-perft.toml if present)
  --json               print reports as JSON
  --node-limit <n>     skip suite depths expecting more than n nodes
  --log-level <level>  log filter when RUST_LOG is unset
  --fen <fen>          starting position for play

Examples:
  chess-perft perft 5
  chess-perft divide 3 r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1
  chess-perft play e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Perft { depth: Option<u8>, fen: Option<String> },
    Divide { depth: Option<u8>, fen: Option<String> },
    Suite { path: Option<PathBuf> },
    Show { fen: Option<String> },
    Play { fen: Option<String>, moves: Vec<String> },
    Help,
}

/// Parsed command line. Options override the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub node_limit: Option<u64>,
    pub log_level: Option<String>,
}

impl Cli {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut config = None;
        let mut json = false;
        let mut node_limit = None;
        let mut log_level = None;
        let mut start_fen = None;
        let mut positional: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            let mut value = || option_value(args, &mut i, arg);
            match arg {
                "--config" | "-c" => config = Some(PathBuf::from(value()?)),
                "--json" => json = true,
                "--node-limit" => {
                    let raw = value()?;
                    node_limit = Some(
                        raw.parse()
                            .with_context(|| format!("invalid node limit '{raw}'"))?,
                    );
                }
                "--log-level" => log_level = Some(value()?.to_string()),
                "--fen" => start_fen = Some(value()?.to_string()),
                "--help" | "-h" => positional.insert(0, "help"),
                _ if arg.starts_with("--") => bail!("unknown option {arg}"),
                _ => positional.push(arg),
            }
            i += 1;
        }

        let command = match positional.split_first() {
            None | Some((&"help", _)) => Command::Help,
            Some((&"perft", rest)) => {
                let (depth, fen) = depth_and_fen(rest)?;
                Command::Perft { depth, fen }
            }
            Some((&"divide", rest)) => {
                let (depth, fen) = depth_and_fen(rest)?;
                Command::Divide { depth, fen }
            }
            Some((&"suite", rest)) => match rest {
                [] => Command::Suite { path: None },
                [path] => Command::Suite {
                    path: Some(PathBuf::from(*path)),
                },
                _ => bail!("suite takes at most one EPD file"),
            },
            Some((&"show", rest)) => Command::Show { fen: join_fen(rest) },
            Some((&"play", rest)) => Command::Play {
                fen: start_fen.take(),
                moves: rest.iter().map(|s| s.to_string()).collect(),
            },
            Some((other, _)) => bail!("unknown command '{other}'"),
        };
        if start_fen.is_some() && !matches!(command, Command::Play { .. }) {
            bail!("--fen is only accepted by play");
        }

        Ok(Self {
            command,
            config,
            json,
            node_limit,
            log_level,
        })
    }

    /// Lays the command-line options over values read from the config file.
    pub fn apply(&self, config: &mut RunnerConfig) {
        if self.json {
            config.json = true;
        }
        if let Some(limit) = self.node_limit {
            config.node_limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
    }
}

fn option_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} needs a value"))
}

// A FEN arrives either quoted as one argument or split on its spaces.
fn join_fen(parts: &[&str]) -> Option<String> {
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn depth_and_fen(rest: &[&str]) -> Result<(Option<u8>, Option<String>)> {
    match rest.split_first() {
        None => Ok((None, None)),
        Some((first, tail)) => match first.parse::<u8>() {
            Ok(depth) => Ok((Some(depth), join_fen(tail))),
            // No depth given; everything is the FEN
            Err(_) if first.contains('/') => Ok((None, join_fen(rest))),
            Err(_) => bail!("invalid depth '{first}'"),
        },
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
