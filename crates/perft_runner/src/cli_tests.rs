use super::*;

fn parse(line: &str) -> Result<Cli> {
    let args: Vec<String> = line.split_whitespace().map(String::from).collect();
    Cli::parse(&args)
}

#[test]
fn test_no_arguments_is_help() {
    assert_eq!(parse("").unwrap().command, Command::Help);
    assert_eq!(parse("--help").unwrap().command, Command::Help);
    assert_eq!(parse("perft 3 -h").unwrap().command, Command::Help);
}

#[test]
fn test_perft_with_split_fen() {
    let cli = parse("perft 3 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(
        cli.command,
        Command::Perft {
            depth: Some(3),
            fen: Some("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".to_string()),
        }
    );
}

#[test]
fn test_depth_is_optional() {
    assert_eq!(
        parse("divide").unwrap().command,
        Command::Divide {
            depth: None,
            fen: None
        }
    );
    assert_eq!(
        parse("perft 8/8/8/4k3/8/4K3/8/8 w - -").unwrap().command,
        Command::Perft {
            depth: None,
            fen: Some("8/8/8/4k3/8/4K3/8/8 w - -".to_string()),
        }
    );
    assert!(parse("perft deep").is_err());
}

#[test]
fn test_play_collects_moves_and_start_fen() {
    let cli = parse("play --fen 4k3/8/8/8/8/8/8/4K2R e4 e5").unwrap();
    assert_eq!(
        cli.command,
        Command::Play {
            fen: Some("4k3/8/8/8/8/8/8/4K2R".to_string()),
            moves: vec!["e4".to_string(), "e5".to_string()],
        }
    );
    assert!(parse("show --fen 4k3/8/8/8/8/8/8/4K2R").is_err());
}

#[test]
fn test_suite_path() {
    assert_eq!(
        parse("suite").unwrap().command,
        Command::Suite { path: None }
    );
    assert_eq!(
        parse("suite tests/standard.epd").unwrap().command,
        Command::Suite {
            path: Some(PathBuf::from("tests/standard.epd"))
        }
    );
    assert!(parse("suite a.epd b.epd").is_err());
}

#[test]
fn test_options_override_config() {
    let cli = parse("suite --json --node-limit 5000 --log-level debug --config my.toml").unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));

    let mut config = RunnerConfig::default();
    cli.apply(&mut config);
    assert!(config.json);
    assert_eq!(config.node_limit, 5000);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.default_depth, 4);
}

#[test]
fn test_bad_options() {
    assert!(parse("perft 3 --node-limit").is_err());
    assert!(parse("perft 3 --node-limit lots").is_err());
    assert!(parse("perft 3 --verbose").is_err());
    assert!(parse("analyse").is_err());
}
