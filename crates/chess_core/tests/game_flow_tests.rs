//! Whole games played through `Game`, plus seeded random playouts that
//! cross-check the incremental bookkeeping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_core::notation::{parse_san, to_san};
use chess_core::{Game, GameStatus, MoveKind, Position, legal_moves};

fn play_line(game: &mut Game, line: &str) -> GameStatus {
    let mut status = game.status();
    for san in line.split_whitespace() {
        status = game
            .play_san(san)
            .unwrap_or_else(|e| panic!("{san} in '{line}': {e}"));
    }
    status
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    assert_eq!(play_line(&mut game, "f3 e5 g4 Qh4#"), GameStatus::Checkmate);
    assert!(game.legal_moves().is_empty());
    assert!(game.position().in_check());
}

#[test]
fn opera_game() {
    // Morphy vs Duke Karl / Count Isouard, Paris 1858
    let line = "e4 e5 Nf3 d6 d4 Bg4 dxe5 Bxf3 Qxf3 dxe5 Bc4 Nf6 Qb3 Qe7 Nc3 c6 Bg5 b5 \
                Nxb5 cxb5 Bxb5+ Nbd7 O-O-O Rd8 Rxd7 Rxd7 Rd1 Qe6 Bxd7+ Nxd7 Qb8+ Nxb8 Rd8#";
    let mut game = Game::new();
    assert_eq!(play_line(&mut game, line), GameStatus::Checkmate);
    assert_eq!(game.moves().count(), 33);
    assert_eq!(
        game.position().to_fen(),
        "1n1Rkb1r/p4ppp/4q3/4p1B1/4P3/8/PPP2PPP/2K5 b k - 1 17"
    );
}

#[test]
fn en_passant_only_on_the_next_ply() {
    let mut game = Game::new();
    play_line(&mut game, "e4 a6 e5 d5");
    let ep = game
        .legal_moves()
        .into_iter()
        .find(|m| m.kind() == MoveKind::EnPassant)
        .expect("exd6 available right after d5");
    assert_eq!(ep.to().to_string(), "d6");

    // Let the chance pass
    play_line(&mut game, "a3 a5");
    assert!(game.legal_moves().iter().all(|m| !m.is_en_passant()));
    assert!(matches!(
        game.play_san("exd6"),
        Err(chess_core::ChessError::NoSuchMove(_))
    ));
}

#[test]
fn en_passant_capture_round_trip() {
    let mut game = Game::new();
    play_line(&mut game, "e4 Nf6 e5 d5");
    let before = game.position().clone();
    play_line(&mut game, "exd6");
    assert!(game.position().piece_at("d5".parse().unwrap()).is_none());
    game.undo();
    assert_eq!(game.position(), &before);
}

#[test]
fn castling_through_attacked_square_is_refused() {
    // Black bishop on a6 covers f1
    let mut game = Game::from_fen("4k3/8/b7/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(game.legal_moves().iter().all(|m| !m.is_castle()));
    assert!(game.play_san("O-O").is_err());

    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(game.play_san("O-O").unwrap(), GameStatus::Ongoing);
    assert_eq!(game.position().to_fen(), "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
}

#[test]
fn promotion_in_play() {
    let mut game = Game::from_fen("8/P7/8/8/8/7k/8/2K5 w - - 0 1").unwrap();
    assert_eq!(game.play_san("a8=Q").unwrap(), GameStatus::Ongoing);
    assert_eq!(game.position().to_fen(), "Q7/8/8/8/8/7k/8/2K5 b - - 0 1");
    game.undo();

    // The same push with the king on the long diagonal gives check
    let mut game = Game::from_fen("8/P7/8/8/8/8/8/2K4k w - - 0 1").unwrap();
    assert_eq!(game.play_san("a8=Q+").unwrap(), GameStatus::Check);
}

#[test]
fn random_playouts_keep_bookkeeping_consistent() {
    let mut rng = StdRng::seed_from_u64(0x5eed_c0de);

    for game_no in 0..40 {
        let mut game = Game::new();
        let mut fens = vec![game.position().to_fen()];

        for _ in 0..200 {
            if game.status().is_terminal() {
                break;
            }
            let moves = game.legal_moves();
            let mv = moves[rng.gen_range(0..moves.len())];

            let san = to_san(game.position(), mv);
            assert_eq!(parse_san(game.position(), &san), Ok(mv), "game {game_no}: {san}");

            game.play(mv).unwrap();
            let pos = game.position();
            assert_eq!(pos.fingerprint(), pos.compute_fingerprint(), "game {game_no}");
            assert_eq!(
                &Position::from_fen(&pos.to_fen()).unwrap(),
                pos,
                "game {game_no}"
            );
            fens.push(pos.to_fen());
        }

        // Unwind the whole game and compare every intermediate position
        while game.undo().is_some() {
            fens.pop();
            assert_eq!(
                game.position().to_fen(),
                *fens.last().unwrap(),
                "game {game_no}"
            );
        }
        assert_eq!(game.position(), &Position::startpos());
        assert!(legal_moves(game.position()).len() == 20);
    }
}
