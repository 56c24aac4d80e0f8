pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod history;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod status;
pub mod types;
pub mod zobrist;

// Re-export the rules core; notation stays behind its module path except for
// the handful of entry points every caller needs.
pub use attacks::{attackers_of, is_attacked};
pub use bitboard::*;
pub use board::*;
pub use error::{ChessError, ParseError};
pub use game::Game;
pub use history::PositionHistory;
pub use movegen::*;
pub use notation::{move_to_uci, parse_san, parse_uci_move, to_san};
pub use perft::{PerftStats, perft, perft_divide, perft_stats};
pub use position::{CastlingRights, Position, UndoRecord};
pub use status::{GameStatus, classify};
pub use types::*;
pub use zobrist::ZOBRIST;

/// FEN of the standard starting position.
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
