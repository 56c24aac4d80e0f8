//! Text formats at the edge of the core: FEN, EPD, SAN, coordinate moves and
//! a plain-text board diagram. Everything here is a thin layer over
//! `Position` and the move generator.

pub mod epd;
pub mod fen;
pub mod render;
pub mod san;
pub mod uci;

pub use epd::{EpdRecord, parse_epd, read_epd};
pub use fen::{from_fen, to_fen};
pub use render::render;
pub use san::{parse_san, to_san};
pub use uci::{move_to_uci, parse_uci_move};
