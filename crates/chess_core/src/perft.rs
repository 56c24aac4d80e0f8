use serde::Serialize;

use crate::{movegen::legal_moves_into, position::Position, types::Move};

/// Leaf and interior node counts of one perft run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerftStats {
    /// Positions exactly `depth` plies deep; the number perft tables list.
    pub leaf_nodes: u64,
    /// Every position visited, the root included.
    pub total_nodes: u64,
}

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    perft_stats(pos, depth).leaf_nodes
}

/// Perft with both leaf and total node counts.
pub fn perft_stats(pos: &mut Position, depth: u8) -> PerftStats {
    let mut stats = PerftStats::default();
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    walk(pos, depth, &mut layers[..], &mut stats);
    stats
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);

    let mut layers = vec![Vec::with_capacity(64); depth as usize - 1];
    roots
        .into_iter()
        .map(|mv| {
            let mut stats = PerftStats::default();
            let undo = pos.make_move_unchecked(mv);
            walk(pos, depth - 1, &mut layers[..], &mut stats);
            pos.unmake_move(undo);
            (mv, stats.leaf_nodes)
        })
        .collect()
}

// One move buffer per remaining ply, so the walk never allocates.
fn walk(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>], stats: &mut PerftStats) {
    stats.total_nodes += 1;
    if depth == 0 {
        stats.leaf_nodes += 1;
        return;
    }

    let (buf, rest) = layers
        .split_first_mut()
        .expect("perft requires one buffer per remaining ply");

    legal_moves_into(pos, buf);
    if depth == 1 {
        // Bulk count: the children are leaves
        stats.leaf_nodes += buf.len() as u64;
        stats.total_nodes += buf.len() as u64;
        return;
    }

    for mv in buf.iter().copied() {
        let undo = pos.make_move_unchecked(mv);
        walk(pos, depth - 1, rest, stats);
        pos.unmake_move(undo);
    }
}
