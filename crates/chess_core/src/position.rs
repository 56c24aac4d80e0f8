use crate::attacks::is_attacked;
use crate::board::Board;
use crate::error::ChessError;
use crate::movegen::legal_moves_into;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Which castling moves each side may still make. Rights only ever go from
/// `true` to `false` during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn is_empty(self) -> bool {
        self == CastlingRights::none()
    }

    fn revoke_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drop the right tied to a rook home square, if `sq` is one. Called for
    /// both ends of every move: a rook leaving home or being captured there.
    fn revoke_rook_square(&mut self, sq: Square) {
        match sq {
            Square::H1 => self.white_kingside = false,
            Square::A1 => self.white_queenside = false,
            Square::H8 => self.black_kingside = false,
            Square::A8 => self.black_queenside = false,
            _ => {}
        }
    }
}

/// Rook (from, to) for a castling move by `color`.
pub(crate) fn castle_rook_squares(color: Color, kind: MoveKind) -> (Square, Square) {
    match (color, kind) {
        (Color::White, MoveKind::CastleKingside) => (Square::H1, Square::F1),
        (Color::White, MoveKind::CastleQueenside) => (Square::A1, Square::D1),
        (Color::Black, MoveKind::CastleKingside) => (Square::H8, Square::F8),
        (Color::Black, MoveKind::CastleQueenside) => (Square::A8, Square::D8),
        _ => unreachable!("not a castling move: {kind:?}"),
    }
}

/// The square of the pawn removed by an en passant capture.
fn en_passant_victim(mv: Move) -> Square {
    Square::from_coords(mv.to().file(), mv.from().rank())
        .unwrap_or_else(|| unreachable!("en passant victim off board for {mv}"))
}

/// A chess position: placement plus every piece of state the rules need.
///
/// Mutated in place by [`Position::make_move`] / [`Position::unmake_move`].
/// Clone it to explore independent branches; a single `Position` must not be
/// mutated from two places at once.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>, // square behind a pawn that just advanced 2
    halfmove_clock: u32,
    fullmove_number: u32,
    fingerprint: u64,
    // Number of make_move records not yet unmade; polices LIFO order.
    depth: u32,
}

/// Everything `unmake_move` needs to reverse one `make_move`.
///
/// Records must be handed back in strict LIFO order. Each record is stamped
/// with the make depth it was produced at and the fingerprint the move left
/// behind; `unmake_move` panics when either stamp does not match, which also
/// catches a stale clone from an earlier make at the same depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    fingerprint: u64,
    after: u64,
    depth: u32,
}

/// Positions are equal when placement, side to move, rights, en passant
/// target and both counters match. The fingerprint follows from those and the
/// make depth is bookkeeping.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Position::from_parts(
            Board::standard(),
            Color::White,
            CastlingRights::all(),
            None,
            0,
            1,
        )
    }

    /// Assemble a position from already-validated parts (the FEN reader does
    /// the validation).
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let fingerprint = ZOBRIST.compute(&board, side_to_move, castling, en_passant);
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            fingerprint,
            depth: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Incrementally maintained repetition fingerprint.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// The fingerprint rebuilt from scratch; always equals `fingerprint()`.
    pub fn compute_fingerprint(&self) -> u64 {
        ZOBRIST.compute(
            &self.board,
            self.side_to_move,
            self.castling,
            self.en_passant,
        )
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// # Panics
    /// If `color` has no king, which legal play never produces.
    pub fn king_square(&self, color: Color) -> Square {
        self.board
            .king_square(color)
            .unwrap_or_else(|| panic!("position has no {color} king"))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_attacked(&self.board, self.king_square(color), color.other())
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Play `mv` after checking it is one of the legal moves here.
    ///
    /// An illegal move is reported, never adjusted to a nearby legal one.
    pub fn make_move(&mut self, mv: Move) -> Result<UndoRecord, ChessError> {
        let mut legal = Vec::with_capacity(64);
        legal_moves_into(self, &mut legal);
        if !legal.contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        Ok(self.make_move_unchecked(mv))
    }

    /// Play a move without the legality check.
    ///
    /// The caller guarantees `mv` came from the move generator for this exact
    /// position (pseudo-legal is enough; the legality filter relies on that).
    pub fn make_move_unchecked(&mut self, mv: Move) -> UndoRecord {
        let us = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let undo_base = UndoRecord {
            mv,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            fingerprint: self.fingerprint,
            after: 0,
            depth: self.depth,
        };

        let mut hash = self.fingerprint;
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.ep_key(ep);
        }
        hash ^= ZOBRIST.castling_key(self.castling);

        let capture_sq = if mv.is_en_passant() {
            en_passant_victim(mv)
        } else {
            to
        };
        let captured = self.board.remove(capture_sq);
        if let Some(victim) = captured {
            debug_assert!(victim.kind != PieceKind::King, "move {mv} captures a king");
            debug_assert!(victim.color != us, "move {mv} captures own piece");
            hash ^= ZOBRIST.piece_key(victim, capture_sq);
        }

        let moved = self
            .board
            .remove(from)
            .unwrap_or_else(|| panic!("make_move: no piece on {from} for {mv}"));
        hash ^= ZOBRIST.piece_key(moved, from);
        let placed = match mv.promotion_piece() {
            Some(kind) => Piece::new(us, kind),
            None => moved,
        };
        self.board.place(to, placed);
        hash ^= ZOBRIST.piece_key(placed, to);

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(us, mv.kind());
            let rook = self
                .board
                .remove(rook_from)
                .unwrap_or_else(|| panic!("castling without a rook on {rook_from}"));
            self.board.place(rook_to, rook);
            hash ^= ZOBRIST.piece_key(rook, rook_from) ^ ZOBRIST.piece_key(rook, rook_to);
        }

        if moved.kind == PieceKind::King {
            self.castling.revoke_color(us);
        }
        self.castling.revoke_rook_square(from);
        self.castling.revoke_rook_square(to);
        hash ^= ZOBRIST.castling_key(self.castling);

        self.en_passant = if mv.kind() == MoveKind::DoublePawnPush {
            from.offset(0, us.forward())
        } else {
            None
        };
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.ep_key(ep);
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = us.other();
        hash ^= ZOBRIST.side_to_move;
        self.fingerprint = hash;
        self.depth += 1;

        UndoRecord {
            captured,
            after: hash,
            ..undo_base
        }
    }

    /// Reverse the most recent `make_move`.
    ///
    /// # Panics
    /// If `record` is not the record of the latest outstanding make (applied
    /// twice, out of LIFO order, or a stale copy from another branch).
    pub fn unmake_move(&mut self, record: UndoRecord) {
        assert!(
            self.depth == record.depth + 1,
            "undo record for {} applied out of order (position depth {}, record depth {})",
            record.mv,
            self.depth,
            record.depth
        );
        assert!(
            self.fingerprint == record.after,
            "undo record for {} applied out of order (it was made in another position)",
            record.mv
        );
        let mv = record.mv;
        let us = self.side_to_move.other();

        let placed = self
            .board
            .remove(mv.to())
            .unwrap_or_else(|| panic!("unmake_move: {} is empty for {mv}", mv.to()));
        assert_eq!(placed.color, us, "unmake_move: wrong mover for {mv}");
        let original = if mv.promotion_piece().is_some() {
            Piece::new(us, PieceKind::Pawn)
        } else {
            placed
        };
        self.board.place(mv.from(), original);

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(us, mv.kind());
            let rook = self
                .board
                .remove(rook_to)
                .unwrap_or_else(|| panic!("unmake castling without a rook on {rook_to}"));
            self.board.place(rook_from, rook);
        }

        if let Some(victim) = record.captured {
            let sq = if mv.is_en_passant() {
                en_passant_victim(mv)
            } else {
                mv.to()
            };
            self.board.place(sq, victim);
        }

        self.side_to_move = us;
        self.castling = record.castling;
        self.en_passant = record.en_passant;
        self.halfmove_clock = record.halfmove_clock;
        self.fullmove_number = record.fullmove_number;
        self.fingerprint = record.fingerprint;
        self.depth = record.depth;
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
