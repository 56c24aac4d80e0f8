use tracing::{debug, trace};

use crate::error::{ChessError, ParseError};
use crate::history::PositionHistory;
use crate::movegen::legal_moves;
use crate::notation::{parse_san, parse_uci_move};
use crate::position::{Position, UndoRecord};
use crate::status::{GameStatus, classify};
use crate::types::Move;

/// A game in progress: the current position, every fingerprint reached so
/// far, and the undo records of the moves played.
///
/// The status is recomputed after each move or undo. Moves are still accepted
/// after an automatic draw; only positions without legal moves end play.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: PositionHistory,
    undo_stack: Vec<UndoRecord>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let history = PositionHistory::starting_at(position.fingerprint());
        let status = classify(&position, &history);
        Game {
            position,
            history,
            undo_stack: Vec::new(),
            status,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo_stack.iter().map(|record| record.mv)
    }

    /// Play a legal move and return the resulting status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, ChessError> {
        let record = self.position.make_move(mv)?;
        self.undo_stack.push(record);
        self.history.push(self.position.fingerprint());
        self.status = classify(&self.position, &self.history);
        debug!(
            ply = self.undo_stack.len(),
            mv = %mv,
            status = %self.status,
            "move played"
        );
        Ok(self.status)
    }

    pub fn play_san(&mut self, san: &str) -> Result<GameStatus, ChessError> {
        let mv = parse_san(&self.position, san)?;
        self.play(mv)
    }

    pub fn play_uci(&mut self, txt: &str) -> Result<GameStatus, ChessError> {
        let mv = parse_uci_move(&self.position, txt)?;
        self.play(mv)
    }

    /// Take back the last move, if any.
    pub fn undo(&mut self) -> Option<Move> {
        let record = self.undo_stack.pop()?;
        let mv = record.mv;
        self.position.unmake_move(record);
        self.history.pop();
        self.status = classify(&self.position, &self.history);
        trace!(mv = %mv, "move undone");
        Some(mv)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
