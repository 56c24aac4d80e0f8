//! Terminal and near-terminal game states.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bitboard::Bitboard;
use crate::history::PositionHistory;
use crate::movegen::legal_moves_into;
use crate::position::Position;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawInsufficientMaterial,
    DrawRepetition,
}

impl GameStatus {
    /// The game is over: mate, stalemate or any automatic draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawFiftyMove
                | GameStatus::DrawInsufficientMaterial
                | GameStatus::DrawRepetition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw by fifty-move rule",
            GameStatus::DrawInsufficientMaterial => "draw by insufficient material",
            GameStatus::DrawRepetition => "draw by threefold repetition",
        };
        f.write_str(text)
    }
}

/// Classify `pos`, whose fingerprint is expected to be the last entry of
/// `history`.
///
/// Mate and stalemate take precedence over the draw rules, and the draws
/// over a plain check.
pub fn classify(pos: &Position, history: &PositionHistory) -> GameStatus {
    let mut scratch = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut moves);

    let in_check = pos.in_check();
    let status = if moves.is_empty() {
        if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else if pos.is_fifty_move_draw() {
        GameStatus::DrawFiftyMove
    } else if history.occurrences(pos.fingerprint()) >= 3 {
        GameStatus::DrawRepetition
    } else if pos.is_insufficient_material() {
        GameStatus::DrawInsufficientMaterial
    } else if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    };

    if status.is_terminal() {
        debug!(fen = %pos, %status, "game over");
    }
    status
}

impl Position {
    /// 100 plies without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece,
    /// or only bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let board = self.board();
        let heavy_or_pawn = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen];
        for color in Color::ALL {
            if heavy_or_pawn.iter().any(|&k| board.count(color, k) > 0) {
                return false;
            }
        }

        let knights: u32 = Color::ALL
            .iter()
            .map(|&c| board.count(c, PieceKind::Knight))
            .sum();
        let bishops = Color::ALL.iter().fold(Bitboard::EMPTY, |acc, &c| {
            acc | board.squares_occupied_by(c, PieceKind::Bishop)
        });

        match (knights, bishops.popcount()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => {
                (bishops & Bitboard::LIGHT_SQUARES).is_empty()
                    || (bishops & Bitboard::DARK_SQUARES).is_empty()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
