//! Attack detection.
//!
//! Knight, king and pawn attacks come from per-square tables built at compile
//! time. Slider attacks use precomputed rays cut at the first blocker, which
//! is the same ray-casting rule the move generator applies square by square.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, PieceKind, Square};

/// Pre-computed knight attacks for each square.
pub static KNIGHT_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_index(sq).0;
        let mut result = 0u64;

        result |= (bb << 17) & Bitboard::NOT_FILE_A.0;
        result |= (bb << 15) & Bitboard::NOT_FILE_H.0;
        result |= (bb << 10) & Bitboard::NOT_FILE_AB.0;
        result |= (bb << 6) & Bitboard::NOT_FILE_GH.0;
        result |= (bb >> 6) & Bitboard::NOT_FILE_AB.0;
        result |= (bb >> 10) & Bitboard::NOT_FILE_GH.0;
        result |= (bb >> 15) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 17) & Bitboard::NOT_FILE_H.0;

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pre-computed king attacks for each square.
pub static KING_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_index(sq).0;
        let mut result = 0u64;

        result |= bb << 8;
        result |= bb >> 8;
        result |= (bb << 1) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 1) & Bitboard::NOT_FILE_H.0;
        result |= (bb << 9) & Bitboard::NOT_FILE_A.0;
        result |= (bb << 7) & Bitboard::NOT_FILE_H.0;
        result |= (bb >> 7) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 9) & Bitboard::NOT_FILE_H.0;

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Squares attacked by a pawn standing on the index square, per color.
/// `PAWN_ATTACKS[0]` is White (north-east/north-west), `[1]` Black.
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_index(sq).0;
        attacks[0][sq as usize] =
            Bitboard(((bb << 9) & Bitboard::NOT_FILE_A.0) | ((bb << 7) & Bitboard::NOT_FILE_H.0));
        attacks[1][sq as usize] =
            Bitboard(((bb >> 7) & Bitboard::NOT_FILE_A.0) | ((bb >> 9) & Bitboard::NOT_FILE_H.0));
        sq += 1;
    }
    attacks
};

/// Direction vectors, indexed like `RAYS`: N, NE, E, SE, S, SW, W, NW.
const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// `RAYS[direction][square]`: every square from `square` to the edge in that
/// direction, the origin excluded.
pub static RAYS: [[Bitboard; 64]; 8] = {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0u8;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bb = 0u64;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << ((r * 8 + f) as u32);
                f += df;
                r += dr;
            }
            rays[dir][sq as usize] = Bitboard(bb);
            sq += 1;
        }
        dir += 1;
    }
    rays
};

// Rays that grow towards higher indices find their first blocker with lsb,
// the others with msb.
const POSITIVE_DIAGONALS: [usize; 2] = [1, 7];
const NEGATIVE_DIAGONALS: [usize; 2] = [3, 5];
const POSITIVE_LINES: [usize; 2] = [0, 2];
const NEGATIVE_LINES: [usize; 2] = [4, 6];

#[inline]
fn ray_attacks(sq: Square, occupied: Bitboard, positive: &[usize], negative: &[usize]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &dir in positive {
        let ray = RAYS[dir][sq.index()];
        attacks |= match (ray & occupied).lsb() {
            Some(blocker) => ray & !RAYS[dir][blocker.index()],
            None => ray,
        };
    }
    for &dir in negative {
        let ray = RAYS[dir][sq.index()];
        attacks |= match (ray & occupied).msb() {
            Some(blocker) => ray & !RAYS[dir][blocker.index()],
            None => ray,
        };
    }
    attacks
}

#[inline(always)]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.idx()][sq.index()]
}

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Bishop attacks from `sq`; blockers are included as attacked squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &POSITIVE_DIAGONALS, &NEGATIVE_DIAGONALS)
}

/// Rook attacks from `sq`; blockers are included as attacked squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &POSITIVE_LINES, &NEGATIVE_LINES)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// All pieces of color `by` that attack `sq`.
///
/// Pawn pushes are not attacks. A pawn of `by` attacks `sq` exactly when a
/// pawn of the other color on `sq` would attack the pawn's square.
pub fn attackers_of(board: &Board, sq: Square, by: Color) -> Bitboard {
    let occupied = board.occupied();
    let queens = board.squares_occupied_by(by, PieceKind::Queen);
    let diagonal = board.squares_occupied_by(by, PieceKind::Bishop) | queens;
    let straight = board.squares_occupied_by(by, PieceKind::Rook) | queens;

    (pawn_attacks(sq, by.other()) & board.squares_occupied_by(by, PieceKind::Pawn))
        | (knight_attacks(sq) & board.squares_occupied_by(by, PieceKind::Knight))
        | (king_attacks(sq) & board.squares_occupied_by(by, PieceKind::King))
        | (bishop_attacks(sq, occupied) & diagonal)
        | (rook_attacks(sq, occupied) & straight)
}

/// Whether any piece of color `by` attacks `sq`. Never mutates the board.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    if !(pawn_attacks(sq, by.other()) & board.squares_occupied_by(by, PieceKind::Pawn)).is_empty()
    {
        return true;
    }
    if !(knight_attacks(sq) & board.squares_occupied_by(by, PieceKind::Knight)).is_empty() {
        return true;
    }
    if !(king_attacks(sq) & board.squares_occupied_by(by, PieceKind::King)).is_empty() {
        return true;
    }

    let occupied = board.occupied();
    let queens = board.squares_occupied_by(by, PieceKind::Queen);
    let diagonal = board.squares_occupied_by(by, PieceKind::Bishop) | queens;
    if !diagonal.is_empty() && !(bishop_attacks(sq, occupied) & diagonal).is_empty() {
        return true;
    }
    let straight = board.squares_occupied_by(by, PieceKind::Rook) | queens;
    !straight.is_empty() && !(rook_attacks(sq, occupied) & straight).is_empty()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
