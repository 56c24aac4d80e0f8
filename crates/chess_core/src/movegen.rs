use crate::attacks::is_attacked;
use crate::position::Position;
use crate::types::*;

/// How a piece kind moves: a fixed set of single steps, or rays repeated
/// until the edge or the first occupied square. Pawns and castling are
/// special-cased and have no entry.
enum Movement {
    Step(&'static [(i8, i8)]),
    Slide(&'static [(i8, i8)]),
}

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const LINES: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Movement rule per `PieceKind::idx()`.
const MOVEMENT: [Option<Movement>; 6] = [
    None,
    Some(Movement::Step(&KNIGHT_STEPS)),
    Some(Movement::Slide(&DIAGONALS)),
    Some(Movement::Slide(&LINES)),
    Some(Movement::Slide(&KING_STEPS)),
    Some(Movement::Step(&KING_STEPS)),
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Each pseudo-legal move is played, the mover's king tested, and the move
/// taken back; `pos` is unchanged on return.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move();
    out.retain(|&mv| {
        let undo = pos.make_move_unchecked(mv);
        let illegal = pos.is_in_check(mover);
        pos.unmake_move(undo);
        !illegal
    });
}

/// Moves that obey piece movement rules but may leave the mover in check.
pub fn pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(pos, &mut out);
    out
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move();
    for kind in PieceKind::ALL {
        for from in pos.board().squares_occupied_by(us, kind) {
            match &MOVEMENT[kind.idx()] {
                None => gen_pawn(pos, from, us, out),
                Some(Movement::Step(steps)) => gen_steps(pos, from, us, steps, out),
                Some(Movement::Slide(dirs)) => gen_slides(pos, from, us, dirs, out),
            }
        }
    }
    gen_castles(pos, us, out);
}

fn push_pawn_move(from: Square, to: Square, us: Color, capture: bool, out: &mut Vec<Move>) {
    if to.rank() == us.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::promotion(from, to, kind, capture));
        }
    } else {
        let kind = if capture {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };
        out.push(Move::new(from, to, kind));
    }
}

fn gen_pawn(pos: &Position, from: Square, us: Color, out: &mut Vec<Move>) {
    let board = pos.board();
    let dir = us.forward();

    if let Some(one) = from.offset(0, dir)
        && board.is_empty_at(one)
    {
        push_pawn_move(from, one, us, false, out);

        if from.rank() == us.pawn_start_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && board.is_empty_at(two)
        {
            out.push(Move::new(from, two, MoveKind::DoublePawnPush));
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != us => push_pawn_move(from, to, us, true, out),
            Some(_) => {}
            None if pos.en_passant() == Some(to) => {
                out.push(Move::new(from, to, MoveKind::EnPassant));
            }
            None => {}
        }
    }
}

fn gen_steps(pos: &Position, from: Square, us: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in steps {
        if let Some(to) = from.offset(df, dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, MoveKind::Quiet)),
                Some(pc) if pc.color != us => out.push(Move::new(from, to, MoveKind::Capture)),
                _ => {}
            }
        }
    }
}

fn gen_slides(pos: &Position, from: Square, us: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut cursor = from.offset(df, dr);
        while let Some(to) = cursor {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, MoveKind::Quiet)),
                Some(pc) => {
                    if pc.color != us {
                        out.push(Move::new(from, to, MoveKind::Capture));
                    }
                    break;
                }
            }
            cursor = to.offset(df, dr);
        }
    }
}

/// One castling option: the king's landing square, squares that must be
/// empty, and squares the king passes through or lands on (must be safe).
struct CastlePath {
    kind: MoveKind,
    rook: Square,
    king_to: Square,
    empty: &'static [Square],
    safe: &'static [Square],
}

const WHITE_CASTLES: [CastlePath; 2] = [
    CastlePath {
        kind: MoveKind::CastleKingside,
        rook: Square::H1,
        king_to: Square::G1,
        empty: &[Square::F1, Square::G1],
        safe: &[Square::F1, Square::G1],
    },
    CastlePath {
        kind: MoveKind::CastleQueenside,
        rook: Square::A1,
        king_to: Square::C1,
        empty: &[Square::D1, Square::C1, Square::B1],
        safe: &[Square::D1, Square::C1],
    },
];

const BLACK_CASTLES: [CastlePath; 2] = [
    CastlePath {
        kind: MoveKind::CastleKingside,
        rook: Square::H8,
        king_to: Square::G8,
        empty: &[Square::F8, Square::G8],
        safe: &[Square::F8, Square::G8],
    },
    CastlePath {
        kind: MoveKind::CastleQueenside,
        rook: Square::A8,
        king_to: Square::C8,
        empty: &[Square::D8, Square::C8, Square::B8],
        safe: &[Square::D8, Square::C8],
    },
];

fn gen_castles(pos: &Position, us: Color, out: &mut Vec<Move>) {
    let rights = pos.castling();
    if !rights.kingside(us) && !rights.queenside(us) {
        return;
    }
    let (king_from, paths) = match us {
        Color::White => (Square::E1, &WHITE_CASTLES),
        Color::Black => (Square::E8, &BLACK_CASTLES),
    };
    let board = pos.board();
    if board.piece_at(king_from) != Some(Piece::new(us, PieceKind::King)) {
        return;
    }

    let them = us.other();
    // Can't castle out of check
    if is_attacked(board, king_from, them) {
        return;
    }

    for path in paths {
        let allowed = match path.kind {
            MoveKind::CastleKingside => rights.kingside(us),
            _ => rights.queenside(us),
        };
        if !allowed
            || board.piece_at(path.rook) != Some(Piece::new(us, PieceKind::Rook))
            || !path.empty.iter().all(|&sq| board.is_empty_at(sq))
            || path.safe.iter().any(|&sq| is_attacked(board, sq, them))
        {
            continue;
        }
        out.push(Move::new(king_from, path.king_to, path.kind));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
