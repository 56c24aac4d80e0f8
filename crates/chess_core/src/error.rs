//! Error types reported to callers of the core and the notation boundary.
//!
//! Programming errors inside the engine (undo records applied out of order,
//! a board without a king) are not represented here; they panic.

use thiserror::Error;

use crate::types::{Color, Move, Square};

/// Malformed FEN, EPD or move-notation input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes more than 8 files")]
    TooManyFiles { rank: usize },
    #[error("rank {rank} describes fewer than 8 files")]
    TooFewFiles { rank: usize },
    #[error("two consecutive digits in rank {rank}")]
    ConsecutiveDigits { rank: usize },
    #[error("invalid piece letter '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling field '{0}'")]
    Castling(String),
    #[error("castling right '{0}' has no king and rook on their home squares")]
    InconsistentCastling(char),
    #[error("invalid en passant target '{0}'")]
    EnPassant(String),
    #[error("invalid halfmove clock '{0}'")]
    HalfmoveClock(String),
    #[error("invalid fullmove number '{0}'")]
    FullmoveNumber(String),
    #[error("{color} has {count} kings")]
    KingCount { color: Color, count: u32 },
    #[error("the side not to move is in check")]
    OpponentInCheck,
    #[error("pawn on back rank at {0}")]
    PawnOnBackRank(Square),
    #[error("invalid square '{0}'")]
    Square(String),
    #[error("malformed move notation '{0}'")]
    Notation(String),
    #[error("malformed EPD operation: {0}")]
    EpdOperation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("'{notation}' matches {candidates} legal moves")]
    AmbiguousMove { notation: String, candidates: usize },
    #[error("no legal move matches '{0}'")]
    NoSuchMove(String),
}
