//! Terminal detection and verdicts
//!
//! The game ends when every node of the innermost circuit is occupied,
//! regardless of owner or score, or when a player's clock runs out.

use crate::board::{Board, Player, INNER_CIRCUIT};

use super::Scores;

/// True iff all six inner-circuit nodes are occupied
pub fn inner_circuit_full(board: &Board) -> bool {
    board.is_circuit_full(INNER_CIRCUIT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum EndReason {
    InnerCircuitFull,
    /// `expired` ran out of time
    Timeout { expired: Player },
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub reason: EndReason,
    pub scores: Scores,
}

impl Verdict {
    /// Higher score wins; equal scores draw
    pub fn by_score(scores: Scores) -> Self {
        let outcome = match scores.red.cmp(&scores.blue) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Red),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Blue),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        Self {
            outcome,
            reason: EndReason::InnerCircuitFull,
            scores,
        }
    }

    /// The opponent of the player whose clock expired wins, whatever the score
    pub fn by_timeout(expired: Player, scores: Scores) -> Self {
        Self {
            outcome: Outcome::Winner(expired.opponent()),
            reason: EndReason::Timeout { expired },
            scores,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw => None,
        }
    }

    /// Score announced with the verdict: the winner's, or the shared score on a draw
    pub fn reported_score(&self) -> u32 {
        match self.outcome {
            Outcome::Winner(p) => self.scores[p],
            Outcome::Draw => self.scores.red.max(self.scores.blue),
        }
    }

    /// Human-readable announcement
    pub fn message(&self) -> String {
        match (self.reason, self.outcome) {
            (EndReason::Timeout { .. }, Outcome::Winner(p)) => {
                format!("{} wins by timeout with a score of {}!", p, self.reported_score())
            }
            (EndReason::InnerCircuitFull, Outcome::Winner(p)) => format!(
                "Inner hexagon is fully occupied! {} wins with a score of {}!",
                p,
                self.reported_score()
            ),
            (_, Outcome::Draw) => format!(
                "Inner hexagon is fully occupied! It's a tie at {}!",
                self.reported_score()
            ),
        }
    }
}
