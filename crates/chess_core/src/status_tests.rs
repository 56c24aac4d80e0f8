use super::*;

fn status_of(fen: &str) -> GameStatus {
    let pos = Position::from_fen(fen).unwrap();
    let history = PositionHistory::starting_at(pos.fingerprint());
    classify(&pos, &history)
}

#[test]
fn test_fools_mate() {
    assert_eq!(
        status_of("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
        GameStatus::Checkmate
    );
}

#[test]
fn test_stalemates() {
    // Queen on b6 and king on c7 box in the a8 king
    assert_eq!(
        status_of("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"),
        GameStatus::Stalemate
    );
    assert_eq!(
        status_of("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"),
        GameStatus::Stalemate
    );
}

#[test]
fn test_mate_beats_fifty_move_rule() {
    // Back-rank mate delivered on the hundredth quiet ply
    assert_eq!(
        status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 80"),
        GameStatus::Checkmate
    );
}

#[test]
fn test_fifty_move_boundary() {
    assert_eq!(
        status_of("4k3/8/8/8/8/8/R7/4K3 w - - 99 60"),
        GameStatus::Ongoing
    );
    assert_eq!(
        status_of("4k3/8/8/8/8/8/R7/4K3 w - - 100 60"),
        GameStatus::DrawFiftyMove
    );
}

#[test]
fn test_check() {
    assert_eq!(
        status_of("4k3/8/8/8/8/8/4r3/R3K3 w - - 0 1"),
        GameStatus::Check
    );
}

#[test]
fn test_repetition_count() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 8 20").unwrap();
    let fp = pos.fingerprint();
    let mut history = PositionHistory::starting_at(fp);
    history.push(1);
    history.push(fp);
    assert_eq!(classify(&pos, &history), GameStatus::Ongoing);
    history.push(2);
    history.push(fp);
    assert_eq!(classify(&pos, &history), GameStatus::DrawRepetition);
}

#[test]
fn test_insufficient_material() {
    let drawn = [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/5B2 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/1n6 b - - 0 1",
        // Bishops on c1 and b2: both dark squares
        "8/8/8/4k3/8/4K3/1b6/2B5 w - - 0 1",
    ];
    for fen in drawn {
        let pos = Position::from_fen(fen).unwrap();
        assert!(pos.is_insufficient_material(), "{fen}");
        assert_eq!(status_of(fen), GameStatus::DrawInsufficientMaterial, "{fen}");
    }

    let playable = [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/1N3B2 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/1n3B2 w - - 0 1",
        // c1 is dark, f1 is light
        "8/8/8/4k3/8/4K3/8/2B2B2 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/R7 w - - 0 1",
    ];
    for fen in playable {
        let pos = Position::from_fen(fen).unwrap();
        assert!(!pos.is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_status_predicates() {
    assert!(GameStatus::Checkmate.is_terminal());
    assert!(!GameStatus::Checkmate.is_draw());
    assert!(GameStatus::Stalemate.is_draw());
    assert!(GameStatus::DrawRepetition.is_terminal());
    assert!(!GameStatus::Check.is_terminal());
    assert!(!GameStatus::Ongoing.is_draw());
    assert_eq!(GameStatus::DrawFiftyMove.to_string(), "draw by fifty-move rule");
}
