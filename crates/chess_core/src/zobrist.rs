//! Zobrist fingerprints for repetition detection.
//!
//! The fingerprint XORs together random values for:
//! - each piece on each square (12 pieces × 64 squares = 768 values)
//! - Black to move (1 value)
//! - each castling right held (4 values)
//! - the file of the en passant target, when one is set (8 values)
//!
//! The halfmove clock and fullmove number are not hashed, so positions that
//! differ only in counters share a fingerprint. `Position` keeps the value
//! up to date incrementally in make/unmake; `compute` rebuilds it from
//! scratch.

use crate::board::Board;
use crate::position::CastlingRights;
use crate::types::{Color, Piece, Square};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// [white kingside, white queenside, black kingside, black queenside]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Keys from a fixed-seed xorshift64 stream, so fingerprints are stable
    /// across runs and builds.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq.index()]
    }

    /// XOR of the keys of every right held.
    #[inline]
    pub fn castling_key(&self, rights: CastlingRights) -> u64 {
        let flags = [
            rights.white_kingside,
            rights.white_queenside,
            rights.black_kingside,
            rights.black_queenside,
        ];
        flags
            .iter()
            .zip(self.castling.iter())
            .filter(|(held, _)| **held)
            .fold(0, |acc, (_, key)| acc ^ key)
    }

    #[inline(always)]
    pub fn ep_key(&self, target: Square) -> u64 {
        self.en_passant[target.file() as usize]
    }

    /// Full recomputation of a fingerprint.
    pub fn compute(
        &self,
        board: &Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
    ) -> u64 {
        let mut hash = board
            .pieces()
            .fold(0u64, |acc, (sq, pc)| acc ^ self.piece_key(pc, sq));
        if side_to_move == Color::Black {
            hash ^= self.side_to_move;
        }
        hash ^= self.castling_key(castling);
        if let Some(ep) = en_passant {
            hash ^= self.ep_key(ep);
        }
        hash
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
