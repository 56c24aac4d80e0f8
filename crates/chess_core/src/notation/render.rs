use std::fmt::{self, Write as _};

use crate::board::Board;
use crate::position::Position;
use crate::types::Square;

/// Eight rows, rank 8 first, `.` for empty squares, file letters underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let cell = Square::from_coords(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.fen_char());
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, "\n   a b c d e f g h")
    }
}

/// The board diagram plus the state a diagram cannot show.
pub fn render(pos: &Position) -> String {
    let mut out = pos.board().to_string();
    let ep = pos
        .en_passant()
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "\n\nSide to move: {}\nCastling:     {}\nEn passant:   {}\nClocks:       {} / {}\nFingerprint:  {:016x}\nFEN:          {}",
        pos.side_to_move(),
        pos.castling(),
        ep,
        pos.halfmove_clock(),
        pos.fullmove_number(),
        pos.fingerprint(),
        pos.to_fen(),
    );
    out
}
