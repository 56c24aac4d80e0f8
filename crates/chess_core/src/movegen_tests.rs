use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from() == sq(from) && m.to() == sq(to))
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    let doubles = moves
        .iter()
        .filter(|m| m.kind() == MoveKind::DoublePawnPush)
        .count();
    assert_eq!(doubles, 8);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));
}

#[test]
fn test_generation_is_deterministic() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(legal_moves(&pos), legal_moves(&pos));
}

#[test]
fn test_legal_moves_into_leaves_position_untouched() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    let mut buf = Vec::new();
    legal_moves_into(&mut pos, &mut buf);
    assert_eq!(pos, before);
    assert_eq!(pos.fingerprint(), before.fingerprint());
}

#[test]
fn test_promotions_generate_four_choices() {
    // White pawn on b7 can push to b8 or capture on a8 and c8
    let pos = Position::from_fen("r1n1k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    let promos: Vec<&Move> = moves
        .iter()
        .filter(|m| m.promotion_piece().is_some())
        .collect();
    assert_eq!(promos.len(), 12);
    let captures = promos
        .iter()
        .filter(|m| m.kind() == MoveKind::PromotionCapture)
        .count();
    assert_eq!(captures, 8);
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 pinned against the king by the rook on e8
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| m.from() != sq("e2")));
}

#[test]
fn test_pseudo_legal_includes_pinned_moves() {
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    let pseudo = pseudo_legal_moves(&pos);
    assert!(has_move(&pseudo, "e2", "c3"));
}

#[test]
fn test_rook_pinned_along_rank_stays_on_rank() {
    // White rook e1 stands between the black rook a1 and the king on g1
    let pos = Position::from_fen("6k1/8/8/8/8/8/5PPP/r3R1K1 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    for m in &moves {
        let mut p = pos.clone();
        p.make_move_unchecked(*m);
        assert!(!p.is_in_check(Color::White), "{m} leaves king in check");
    }
    assert!(has_move(&moves, "e1", "a1"));
    assert!(!has_move(&moves, "e1", "e2"));
}

#[test]
fn test_en_passant_generated_only_for_target() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let moves = legal_moves(&pos);
    let ep: Vec<&Move> = moves.iter().filter(|m| m.is_en_passant()).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to(), sq("f6"));
    assert!(!has_move(&moves, "e5", "d6"));
}

#[test]
fn test_en_passant_discovered_check_is_illegal() {
    // Capturing en passant would expose the white king on a5 to the rook on h5
    let pos = Position::from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_castling_blocked_by_attacked_transit_square() {
    // Black bishop on c4 attacks f1: kingside castling is illegal
    let pos = Position::from_fen("4k3/8/8/8/2b5/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));
}

#[test]
fn test_queenside_castling_allows_attacked_b_file() {
    // b1 attacked by the rook on b8; the king never crosses b1
    let pos = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));
}

#[test]
fn test_no_castling_out_of_check() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_castle()));
}

#[test]
fn test_castling_needs_empty_squares() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_castle()));
}
