//! Game rules for Titan Crash
//!
//! This module implements the rule set as free functions over a [`Board`]:
//! - Placement gating (circuit unlock order, titan cap)
//! - Scoring (edge control)
//! - Capture by surrounding
//! - Terminal detection and verdicts
//!
//! [`Board`]: crate::board::Board

pub mod capture;
pub mod placement;
pub mod scoring;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_by_move, execute_captures};
pub use placement::{check_placement, unlocked_circuit};
pub use scoring::{recompute_scores, score_of, Scores};
pub use win::{inner_circuit_full, EndReason, Outcome, Verdict};

/// Why an action was declined.
///
/// Declined actions never mutate state; the reason exists for logging
/// and UI hints only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Rejection {
    NotStarted,
    Paused,
    GameOver,
    /// Click did not land on a node
    NoNode,
    WrongPhase,
    NotYourTurn,
    Occupied,
    CircuitLocked { unlocked: u8 },
    TitanCapReached,
    NotOwnTitan,
    NotAdjacent,
}
