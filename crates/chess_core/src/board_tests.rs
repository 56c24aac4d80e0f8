use super::*;

#[test]
fn test_standard_layout() {
    let b = Board::standard();
    assert_eq!(b.occupied().popcount(), 32);
    assert_eq!(
        b.piece_at(Square::E1),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.piece_at(Square::D8),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(b.count(Color::White, PieceKind::Pawn), 8);
    assert_eq!(b.king_square(Color::Black), Some(Square::E8));
}

#[test]
fn test_place_and_remove_keep_sets_in_sync() {
    let mut b = Board::empty();
    let e4: Square = "e4".parse().unwrap();
    let knight = Piece::new(Color::Black, PieceKind::Knight);

    b.place(e4, knight);
    assert_eq!(b.piece_at(e4), Some(knight));
    assert!(b.squares_occupied_by(Color::Black, PieceKind::Knight).contains(e4));
    assert!(b.occupancy(Color::Black).contains(e4));
    assert!(!b.occupancy(Color::White).contains(e4));

    assert_eq!(b.remove(e4), Some(knight));
    assert!(b.is_empty_at(e4));
    assert!(b.occupied().is_empty());
    assert_eq!(b.remove(e4), None);
}

#[test]
#[should_panic]
fn test_place_on_occupied_square_panics() {
    let mut b = Board::standard();
    b.place(Square::E1, Piece::new(Color::White, PieceKind::Queen));
}

#[test]
fn test_pieces_iterator() {
    let b = Board::standard();
    let whites = b.pieces().filter(|(_, p)| p.color == Color::White).count();
    assert_eq!(whites, 16);
    let first = b.pieces().next().unwrap();
    assert_eq!(first.0, Square::A1);
}
