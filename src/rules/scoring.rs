//! Edge control and scores
//!
//! An edge is controlled by a player when both endpoints hold that
//! player's titans; its weight then counts toward that player's score.
//! Scores are always rebuilt from scratch from the current occupancy.

use crate::board::{Board, Edge, PerPlayer, Player};

pub type Scores = PerPlayer<u32>;

#[inline]
fn controller_of(board: &Board, edge: &Edge) -> Option<Player> {
    match (board.get(edge.start), board.get(edge.end)) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => None,
    }
}

/// Recompute every edge's controller and both scores.
pub fn recompute_scores(board: &mut Board) -> Scores {
    let controls: Vec<Option<Player>> = board.edges().iter().map(|e| controller_of(board, e)).collect();

    let mut scores = Scores::default();
    for (edge, control) in board.edges_mut().iter_mut().zip(controls) {
        edge.controlled_by = control;
        if let Some(player) = control {
            scores[player] += edge.weight;
        }
    }
    scores
}

/// Score of `player` for the current occupancy, without touching edge state
pub fn score_of(board: &Board, player: Player) -> u32 {
    board
        .edges()
        .iter()
        .filter(|e| controller_of(board, e) == Some(player))
        .map(|e| e.weight)
        .sum()
}
