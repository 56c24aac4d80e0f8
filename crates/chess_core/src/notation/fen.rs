//! Forsyth-Edwards Notation.
//!
//! The reader is strict: anything that would let the move generator reach an
//! impossible position is rejected rather than repaired. That covers a missing
//! king, the side not to move in check, rights without the pieces behind them,
//! an en passant target no double push could have left, and counters past
//! [`MAX_HALFMOVE_CLOCK`] / [`MAX_FULLMOVE_NUMBER`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::error::ParseError;
use crate::position::{CastlingRights, Position};
use crate::types::*;

/// Largest halfmove clock accepted from FEN or EPD input.
pub const MAX_HALFMOVE_CLOCK: u32 = 10_000;
/// Largest fullmove number accepted from FEN or EPD input.
pub const MAX_FULLMOVE_NUMBER: u32 = 100_000;

/// Castling letters in the only order FEN allows them.
const CASTLING_ORDER: [char; 4] = ['K', 'Q', 'k', 'q'];

/// Parse a full six-field FEN record.
pub fn from_fen(fen: &str) -> Result<Position, ParseError> {
    parse(fen).inspect_err(|e| debug!(fen, error = %e, "rejected FEN"))
}

fn parse(fen: &str) -> Result<Position, ParseError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ParseError::FieldCount {
            expected: 6,
            found: fields.len(),
        });
    }
    let board = parse_placement(fields[0])?;
    let side = parse_side(fields[1])?;
    let castling = parse_castling(fields[2])?;
    let en_passant = parse_en_passant(fields[3], side)?;
    let halfmove = fields[4]
        .parse::<u32>()
        .map_err(|_| ParseError::HalfmoveClock(fields[4].to_string()))?;
    let fullmove = match fields[5].parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(ParseError::FullmoveNumber(fields[5].to_string())),
    };
    assemble(board, side, castling, en_passant, halfmove, fullmove)
}

/// Write the position as FEN. `from_fen(&to_fen(p)) == p` for every valid `p`.
pub fn to_fen(pos: &Position) -> String {
    let mut out = String::with_capacity(90);
    write_placement(pos.board(), &mut out);
    out.push(' ');
    out.push(match pos.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push(' ');
    out.push_str(&pos.castling().to_string());
    out.push(' ');
    match pos.en_passant() {
        Some(sq) => out.push_str(&sq.to_string()),
        None => out.push('-'),
    }
    out.push_str(&format!(
        " {} {}",
        pos.halfmove_clock(),
        pos.fullmove_number()
    ));
    out
}

fn write_placement(board: &Board, out: &mut String) {
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            let sq = Square::from_coords(file, rank).expect("coordinates in range");
            match board.piece_at(sq) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if rank > 0 {
            out.push('/');
        }
    }
}

pub(crate) fn parse_placement(field: &str) -> Result<Board, ParseError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (i, text) in ranks.iter().enumerate() {
        let rank_number = 8 - i;
        let rank = (7 - i) as i8;
        let mut file: i8 = 0;
        let mut last_was_digit = false;

        for c in text.chars() {
            if let Some(n) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                if last_was_digit {
                    return Err(ParseError::ConsecutiveDigits { rank: rank_number });
                }
                last_was_digit = true;
                file += n as i8;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(ParseError::InvalidPiece(c))?;
                last_was_digit = false;
                let sq = Square::from_coords(file, rank)
                    .ok_or(ParseError::TooManyFiles { rank: rank_number })?;
                board.place(sq, piece);
                file += 1;
            }
            if file > 8 {
                return Err(ParseError::TooManyFiles { rank: rank_number });
            }
        }
        if file < 8 {
            return Err(ParseError::TooFewFiles { rank: rank_number });
        }
    }
    Ok(board)
}

pub(crate) fn parse_side(field: &str) -> Result<Color, ParseError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseError::SideToMove(field.to_string())),
    }
}

pub(crate) fn parse_castling(field: &str) -> Result<CastlingRights, ParseError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    let invalid = || ParseError::Castling(field.to_string());
    if field.is_empty() {
        return Err(invalid());
    }

    let mut next = 0;
    for c in field.chars() {
        let idx = CASTLING_ORDER[next..]
            .iter()
            .position(|&k| k == c)
            .ok_or_else(invalid)?
            + next;
        next = idx + 1;
        match c {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            _ => rights.black_queenside = true,
        }
    }
    Ok(rights)
}

pub(crate) fn parse_en_passant(field: &str, side: Color) -> Result<Option<Square>, ParseError> {
    if field == "-" {
        return Ok(None);
    }
    let sq: Square = field
        .parse()
        .map_err(|_| ParseError::EnPassant(field.to_string()))?;
    let expected_rank = match side {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(ParseError::EnPassant(field.to_string()));
    }
    Ok(Some(sq))
}

/// Whether an enemy pawn could just have pushed two squares past `target`:
/// the target and the pawn's start square empty, the pawn right behind the target.
fn double_push_left(board: &Board, side: Color, target: Square) -> bool {
    let pushed = target.offset(0, -side.forward());
    let start = target.offset(0, side.forward());
    match (pushed, start) {
        (Some(pushed), Some(start)) => {
            board.piece_at(target).is_none()
                && board.piece_at(start).is_none()
                && board.piece_at(pushed) == Some(Piece::new(side.other(), PieceKind::Pawn))
        }
        _ => false,
    }
}

/// Cross-field checks, then build the position.
pub(crate) fn assemble(
    board: Board,
    side: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove: u32,
    fullmove: u32,
) -> Result<Position, ParseError> {
    if halfmove > MAX_HALFMOVE_CLOCK {
        return Err(ParseError::HalfmoveClock(halfmove.to_string()));
    }
    if fullmove == 0 || fullmove > MAX_FULLMOVE_NUMBER {
        return Err(ParseError::FullmoveNumber(fullmove.to_string()));
    }

    for color in Color::ALL {
        let count = board.count(color, PieceKind::King);
        if count != 1 {
            return Err(ParseError::KingCount { color, count });
        }
    }

    for (sq, piece) in board.pieces() {
        if piece.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7) {
            return Err(ParseError::PawnOnBackRank(sq));
        }
    }

    let checks = [
        (castling.white_kingside, 'K', Color::White, Square::H1),
        (castling.white_queenside, 'Q', Color::White, Square::A1),
        (castling.black_kingside, 'k', Color::Black, Square::H8),
        (castling.black_queenside, 'q', Color::Black, Square::A8),
    ];
    for (held, letter, color, rook_home) in checks {
        let king_home = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        if held
            && (board.piece_at(king_home) != Some(Piece::new(color, PieceKind::King))
                || board.piece_at(rook_home) != Some(Piece::new(color, PieceKind::Rook)))
        {
            return Err(ParseError::InconsistentCastling(letter));
        }
    }

    if let Some(target) = en_passant
        && !double_push_left(&board, side, target)
    {
        return Err(ParseError::EnPassant(target.to_string()));
    }

    let their_king = board
        .king_square(side.other())
        .ok_or(ParseError::KingCount {
            color: side.other(),
            count: 0,
        })?;
    if is_attacked(&board, their_king, side) {
        return Err(ParseError::OpponentInCheck);
    }

    Ok(Position::from_parts(
        board, side, castling, en_passant, halfmove, fullmove,
    ))
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let held = [
            self.white_kingside,
            self.white_queenside,
            self.black_kingside,
            self.black_queenside,
        ];
        for (letter, on) in CASTLING_ORDER.iter().zip(held) {
            if on {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        from_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        to_fen(self)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_fen(s)
    }
}

/// FEN, so positions print the way they are read.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_fen(self))
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
