//! Standard Algebraic Notation.

use crate::error::{ChessError, ParseError};
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::*;

/// Render a legal move of `pos` in SAN, with minimal disambiguation and a
/// `+`/`#` suffix.
///
/// # Panics
/// If there is no piece on the move's origin square.
pub fn to_san(pos: &Position, mv: Move) -> String {
    let mut san = String::with_capacity(8);
    match mv.kind() {
        MoveKind::CastleKingside => san.push_str("O-O"),
        MoveKind::CastleQueenside => san.push_str("O-O-O"),
        _ => {
            let piece = pos
                .piece_at(mv.from())
                .unwrap_or_else(|| panic!("to_san: no piece on {} for {mv}", mv.from()));

            if piece.kind == PieceKind::Pawn {
                if mv.is_capture() {
                    san.push(mv.from().file_char());
                }
            } else {
                san.push(piece.kind.letter());
                push_disambiguation(pos, mv, piece.kind, &mut san);
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            if let Some(promo) = mv.promotion_piece() {
                san.push('=');
                san.push(promo.letter());
            }
        }
    }

    let mut after = pos.clone();
    after.make_move_unchecked(mv);
    if after.in_check() {
        san.push(if legal_moves(&after).is_empty() { '#' } else { '+' });
    }
    san
}

fn push_disambiguation(pos: &Position, mv: Move, kind: PieceKind, san: &mut String) {
    let rivals: Vec<Square> = legal_moves(pos)
        .into_iter()
        .filter(|m| {
            m.to() == mv.to()
                && m.from() != mv.from()
                && pos.piece_at(m.from()).map(|p| p.kind) == Some(kind)
        })
        .map(|m| m.from())
        .collect();
    if rivals.is_empty() {
        return;
    }
    let from = mv.from();
    if rivals.iter().all(|sq| sq.file() != from.file()) {
        san.push(from.file_char());
    } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
        san.push(from.rank_char());
    } else {
        san.push(from.file_char());
        san.push(from.rank_char());
    }
}

/// The parts of a SAN token that constrain which legal move it names.
#[derive(Debug, Default)]
struct SanPattern {
    kind: Option<PieceKind>,
    from_file: Option<i8>,
    from_rank: Option<i8>,
    capture: bool,
    to: Option<Square>,
    promotion: Option<PieceKind>,
    castle: Option<MoveKind>,
}

impl SanPattern {
    fn matches(&self, pos: &Position, mv: Move) -> bool {
        if let Some(castle) = self.castle {
            return mv.kind() == castle;
        }
        if mv.is_castle() {
            return false;
        }
        pos.piece_at(mv.from()).map(|p| p.kind) == self.kind
            && Some(mv.to()) == self.to
            && mv.promotion_piece() == self.promotion
            && self.from_file.is_none_or(|f| mv.from().file() == f)
            && self.from_rank.is_none_or(|r| mv.from().rank() == r)
            && (!self.capture || mv.is_capture())
    }
}

/// Resolve a SAN token against the legal moves of `pos`.
///
/// Trailing `+`, `#`, `!` and `?` are ignored, `0-0` is read as `O-O`, and a
/// promotion may be written with or without `=`.
pub fn parse_san(pos: &Position, text: &str) -> Result<Move, ChessError> {
    let pattern = parse_pattern(text)?;
    let mut found = legal_moves(pos)
        .into_iter()
        .filter(|&mv| pattern.matches(pos, mv));

    match (found.next(), found.count()) {
        (None, _) => Err(ChessError::NoSuchMove(text.to_string())),
        (Some(mv), 0) => Ok(mv),
        (Some(_), rest) => Err(ChessError::AmbiguousMove {
            notation: text.to_string(),
            candidates: rest + 1,
        }),
    }
}

fn parse_pattern(text: &str) -> Result<SanPattern, ParseError> {
    let malformed = || ParseError::Notation(text.to_string());
    let body = text
        .trim()
        .trim_end_matches(['+', '#', '!', '?'])
        .replace('0', "O");

    match body.as_str() {
        "O-O" => {
            return Ok(SanPattern {
                castle: Some(MoveKind::CastleKingside),
                ..Default::default()
            });
        }
        "O-O-O" => {
            return Ok(SanPattern {
                castle: Some(MoveKind::CastleQueenside),
                ..Default::default()
            });
        }
        _ => {}
    }

    let mut chars: Vec<char> = body.chars().collect();
    let mut pattern = SanPattern::default();

    // Promotion suffix: "=Q" or a bare trailing piece letter after the rank
    if let Some(&last) = chars.last()
        && let Some(kind) = PieceKind::from_letter(last).filter(|_| last.is_ascii_uppercase())
        && chars.len() >= 3
    {
        if !PieceKind::PROMOTIONS.contains(&kind) {
            return Err(malformed());
        }
        chars.pop();
        if chars.last() == Some(&'=') {
            chars.pop();
        }
        pattern.promotion = Some(kind);
    }

    let mut rest = chars.as_slice();
    pattern.kind = match rest.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            let kind = PieceKind::from_letter(c)
                .filter(|k| *k != PieceKind::Pawn)
                .ok_or_else(malformed)?;
            rest = &rest[1..];
            Some(kind)
        }
        Some(_) => Some(PieceKind::Pawn),
        None => return Err(malformed()),
    };

    if rest.len() < 2 {
        return Err(malformed());
    }
    let (prefix, dest) = rest.split_at(rest.len() - 2);
    let dest: String = dest.iter().collect();
    pattern.to = Some(dest.parse().map_err(|_| malformed())?);

    let mut prefix = prefix;
    if let Some((&last, head)) = prefix.split_last()
        && (last == 'x' || last == ':')
    {
        pattern.capture = true;
        prefix = head;
    }
    for &c in prefix {
        match c {
            'a'..='h' if pattern.from_file.is_none() && pattern.from_rank.is_none() => {
                pattern.from_file = Some((c as u8 - b'a') as i8);
            }
            '1'..='8' if pattern.from_rank.is_none() => {
                pattern.from_rank = Some((c as u8 - b'1') as i8);
            }
            _ => return Err(malformed()),
        }
    }

    if pattern.promotion.is_some() && pattern.kind != Some(PieceKind::Pawn) {
        return Err(malformed());
    }
    Ok(pattern)
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
