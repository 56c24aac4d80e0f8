use crate::error::{ChessError, ParseError};
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::*;

/// Coordinate notation: `e2e4`, `e1g1` for castling, `e7e8q` for promotions.
pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Resolve coordinate notation against the legal moves of `pos`.
///
/// Text is matched by squares and promotion piece only, so the returned move
/// carries the generator's kind (castle, en passant, capture).
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, ChessError> {
    let malformed = || ParseError::Notation(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(malformed().into());
    }
    let from: Square = txt[0..2].parse().map_err(|_| malformed())?;
    let to: Square = txt[2..4].parse().map_err(|_| malformed())?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(malformed().into()),
        },
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promotion_piece() == promo)
        .ok_or_else(|| ChessError::NoSuchMove(txt.to_string()))
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
