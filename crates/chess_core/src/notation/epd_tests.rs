use super::*;
use crate::types::{Color, Square};

#[test]
fn test_four_field_record() {
    let record = parse_epd("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
    assert_eq!(record.position, Position::startpos());
    assert!(record.operations.is_empty());
    assert_eq!(record.id(), None);
}

#[test]
fn test_en_passant_target_is_kept() {
    let record = parse_epd("r2qr1k1/1b1pppbp/1p4p1/pP2P1B1/3N4/R7/1PP2PPP/3QR1K1 w - a6").unwrap();
    let sq: Square = "a6".parse().unwrap();
    assert_eq!(record.position.en_passant(), Some(sq));
    assert_eq!(record.position.side_to_move(), Color::White);
}

#[test]
fn test_operations_and_quoted_strings() {
    let record = parse_epd(
        r#"r1bqk2r/pp2bppp/2p5/3pP3/P2Q1P2/2N1B3/1PP3PP/R4RK1 b kq - bm f6 Nd7; id "BK.01 ; semicolon"; c0 "";"#,
    )
    .unwrap();
    assert_eq!(record.id(), Some("BK.01 ; semicolon"));
    assert_eq!(
        record.operation("bm").unwrap().operands,
        vec!["f6".to_string(), "Nd7".to_string()]
    );
    assert_eq!(record.operation("c0").unwrap().operands, vec![String::new()]);
    assert!(record.operation("pv").is_none());
}

#[test]
fn test_counters_from_operations() {
    let record = parse_epd("4k3/8/8/8/8/8/8/4K3 b - - hmvc 12; fmvn 40;").unwrap();
    assert_eq!(record.position.halfmove_clock(), 12);
    assert_eq!(record.position.fullmove_number(), 40);

    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 b - - fmvn 0;"),
        Err(ParseError::FullmoveNumber(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 b - - hmvc x;"),
        Err(ParseError::HalfmoveClock(_))
    ));
}

#[test]
fn test_counters_are_bounded() {
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/R3K3 w - - hmvc 4294967295;"),
        Err(ParseError::HalfmoveClock(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/R3K3 b - - fmvn 4000000000;"),
        Err(ParseError::FullmoveNumber(_))
    ));
    // Six-field prefix
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/R3K3 w - - 20000 1 ;id \"x\";"),
        Err(ParseError::HalfmoveClock(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/R3K3 w - - 0 0;"),
        Err(ParseError::FullmoveNumber(_))
    ));
}

#[test]
fn test_en_passant_target_needs_the_pushed_pawn() {
    assert!(matches!(
        parse_epd("4k3/8/8/3P4/8/8/8/4K3 w - e6 id \"phantom\";"),
        Err(ParseError::EnPassant(_))
    ));
}

#[test]
fn test_perft_expectations() {
    let record = parse_epd(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - D2 2039; id \"kiwipete\"; D1 48;",
    )
    .unwrap();
    assert_eq!(record.id(), Some("kiwipete"));
    assert_eq!(record.perft_expectations(), vec![(1, 48), (2, 2039)]);
}

#[test]
fn test_six_field_perft_suite_line() {
    let record = parse_epd(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400 ;D3 8902",
    )
    .unwrap();
    assert_eq!(record.position, Position::startpos());
    assert_eq!(
        record.perft_expectations(),
        vec![(1, 20), (2, 400), (3, 8902)]
    );
}

#[test]
fn test_malformed_records() {
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 w"),
        Err(ParseError::FieldCount { expected: 4, found: 2 })
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 w - - id \"open"),
        Err(ParseError::EpdOperation(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 w - - 9bad 1;"),
        Err(ParseError::EpdOperation(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 w - - D3 lots;"),
        Err(ParseError::EpdOperation(_))
    ));
    assert!(matches!(
        parse_epd("4k3/8/8/8/8/8/8/4K3 w KQ -"),
        Err(ParseError::InconsistentCastling('K'))
    ));
}

#[test]
fn test_read_epd_skips_comments_and_blanks() {
    let text = "# perft suite\n\n4k3/8/8/8/8/8/8/4K3 w - - D1 5;\n  \nr3k2r/8/8/8/8/8/8/R3K2R w KQkq - D1 26;\n";
    let records = read_epd(text).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].perft_expectations(), vec![(1, 26)]);
}
