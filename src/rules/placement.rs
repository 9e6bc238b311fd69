//! Placement gating
//!
//! Circuits unlock from the outside in: circuit 0 until it is full, then
//! circuit 1 until it is full, then circuit 2.

use crate::board::{Board, NodeId, INNER_CIRCUIT};

use super::Rejection;

/// The only circuit currently open for placement
pub fn unlocked_circuit(board: &Board) -> u8 {
    (0..INNER_CIRCUIT)
        .find(|&c| !board.is_circuit_full(c))
        .unwrap_or(INNER_CIRCUIT)
}

/// Check whether a titan may be placed on `node` by a player who has
/// already placed `placed` of `cap` titans.
///
/// Returns the first failing rule, or `None` if the placement is legal.
pub fn check_placement(board: &Board, node: NodeId, placed: u8, cap: u8) -> Option<Rejection> {
    if !board.is_empty(node) {
        return Some(Rejection::Occupied);
    }

    let unlocked = unlocked_circuit(board);
    if node.circuit() != unlocked {
        return Some(Rejection::CircuitLocked { unlocked });
    }

    if placed >= cap {
        return Some(Rejection::TitanCapReached);
    }

    None
}
