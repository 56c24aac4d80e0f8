use crate::bitboard::Bitboard;
use crate::types::*;

/// Piece placement: a mailbox for `piece_at` plus one bitboard per
/// (color, kind) for set queries. Carries no side-to-move or rule state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pieces: [[Bitboard; 6]; 2],
    occupancy: [Bitboard; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancy: [Bitboard::EMPTY; 2],
        }
    }

    /// The standard initial layout.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (file, &kind) in back.iter().enumerate() {
                let file = file as i8;
                if let Some(sq) = Square::from_coords(file, color.back_rank()) {
                    b.place(sq, Piece::new(color, kind));
                }
                if let Some(sq) = Square::from_coords(file, color.pawn_start_rank()) {
                    b.place(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        b
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Put `piece` on an empty square.
    ///
    /// # Panics
    /// If the square is already occupied; make/unmake always clears first.
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        assert!(
            self.squares[sq.index()].is_none(),
            "place on occupied square {sq}"
        );
        self.squares[sq.index()] = Some(piece);
        self.pieces[piece.color.idx()][piece.kind.idx()].set(sq);
        self.occupancy[piece.color.idx()].set(sq);
    }

    /// Clear a square, returning what was there.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.pieces[piece.color.idx()][piece.kind.idx()].clear(sq);
        self.occupancy[piece.color.idx()].clear(sq);
        Some(piece)
    }

    #[inline]
    pub fn squares_occupied_by(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.idx()][kind.idx()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy[color.idx()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy[0] | self.occupancy[1]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_occupied_by(color, PieceKind::King).lsb()
    }

    /// All pieces with their squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.squares_occupied_by(color, kind).popcount()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
