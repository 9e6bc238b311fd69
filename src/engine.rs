//! Rule engine: owns the board and game state, applies clicks
//!
//! The engine is a synchronous state machine. Each click resolves to an
//! [`ActionOutcome`]; illegal clicks come back as `Ignored` (or, for a
//! failed second movement click, `Deselected`) and leave the state alone.
//!
//! # Turn structure
//!
//! 1. **Placement**: players alternate placing titans on the unlocked
//!    circuit until both have placed their cap.
//! 2. **Movement**: select an own titan, then click an adjacent empty node.
//!    The move may capture surrounded opponent titans.
//!
//! After every successful action scores are rebuilt and the inner circuit
//! is checked; if it is full the game ends, otherwise the turn passes.
//!
//! # Example
//!
//! ```
//! use titan_crash::{ActionOutcome, NodeId, Player, RuleEngine, GameConfig};
//!
//! let mut engine = RuleEngine::with_config(&GameConfig::default());
//! engine.start();
//!
//! let outcome = engine.click(NodeId::new(0, 0));
//! assert!(matches!(outcome, ActionOutcome::Placed { .. }));
//! assert_eq!(engine.state().current, Player::Blue);
//! ```

use tracing::{debug, info};

use crate::board::{Board, NodeId, PerPlayer, Player};
use crate::config::GameConfig;
use crate::rules::{self, Rejection, Scores, Verdict};

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Placement,
    Movement,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Placement => "Placement",
            Phase::Movement => "Movement",
        }
    }
}

/// Mutable game state besides board occupancy
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub current: Player,
    pub phase: Phase,
    /// Titans placed so far (placement phase)
    pub placed: PerPlayer<u8>,
    /// Derived from the board after every change
    pub scores: Scores,
    /// First click of a movement turn
    pub selected: Option<NodeId>,
    pub started: bool,
    /// Set once the game has ended
    pub verdict: Option<Verdict>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current: Player::Red,
            phase: Phase::Placement,
            placed: PerPlayer::default(),
            scores: Scores::default(),
            selected: None,
            started: false,
            verdict: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn is_over(&self) -> bool {
        self.verdict.is_some()
    }
}

/// How a successful action ended the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// Play continues with `next`
    Passed { next: Player },
    /// The action filled the inner circuit
    Finished(Verdict),
}

/// Result of a single click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing changed
    Ignored(Rejection),
    /// Movement turn: titan picked up
    Selected(NodeId),
    /// Movement turn: second click was illegal, selection dropped
    Deselected { node: NodeId, reason: Rejection },
    Placed {
        node: NodeId,
        player: Player,
        turn: TurnEnd,
    },
    Moved {
        from: NodeId,
        to: NodeId,
        player: Player,
        captured: Vec<NodeId>,
        turn: TurnEnd,
    },
}

impl ActionOutcome {
    /// Turn-ending information for placements and moves
    pub fn turn(&self) -> Option<TurnEnd> {
        match self {
            ActionOutcome::Placed { turn, .. } | ActionOutcome::Moved { turn, .. } => Some(*turn),
            _ => None,
        }
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ActionOutcome::Ignored(_))
    }
}

/// Rule engine for one board
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEngine {
    board: Board,
    state: GameState,
    titans_per_player: u8,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            state: GameState::default(),
            titans_per_player: config.titans_per_player,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn titans_per_player(&self) -> u8 {
        self.titans_per_player
    }

    /// Re-layout node positions for a new drawing-area size
    pub fn layout(&mut self, size: f32) {
        self.board.layout(size);
    }

    /// Circuit open for placement
    pub fn unlocked_circuit(&self) -> u8 {
        rules::unlocked_circuit(&self.board)
    }

    /// Begin play: red to move, placement phase
    pub fn start(&mut self) {
        self.state.started = true;
        self.state.current = Player::Red;
        self.state.phase = Phase::Placement;
        info!("game started");
    }

    /// Clear occupancy and state, keeping the topology
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::default();
        info!("game reset");
    }

    /// Apply a click on `node` for the player to move.
    pub fn click(&mut self, node: NodeId) -> ActionOutcome {
        match self.state.phase {
            Phase::Placement => self.attempt_placement(node, self.state.current),
            Phase::Movement => self.handle_movement(node),
        }
    }

    /// Place a titan for `player`.
    ///
    /// Declined if it is not `player`'s placement turn, the node is
    /// occupied, its circuit is locked or `player` is at the titan cap.
    pub fn attempt_placement(&mut self, node: NodeId, player: Player) -> ActionOutcome {
        if let Some(reason) = self.gate(Phase::Placement) {
            return ignored(reason, node);
        }
        if player != self.state.current {
            return ignored(Rejection::NotYourTurn, node);
        }
        if let Some(reason) =
            rules::check_placement(&self.board, node, self.state.placed[player], self.titans_per_player)
        {
            return ignored(reason, node);
        }

        self.board.place(node, player);
        self.state.placed[player] += 1;
        self.recompute_scores();
        debug!(%player, %node, placed = self.state.placed[player], "titan placed");

        let turn = self.finish_turn();

        let cap = self.titans_per_player;
        if self.state.placed.red == cap && self.state.placed.blue == cap && self.state.phase == Phase::Placement {
            self.state.phase = Phase::Movement;
            info!("all titans placed, movement phase begins");
        }

        ActionOutcome::Placed { node, player, turn }
    }

    /// Two-click movement protocol.
    ///
    /// The first click selects an own titan. The second click moves it to
    /// an adjacent empty node; any other second click drops the selection.
    pub fn handle_movement(&mut self, node: NodeId) -> ActionOutcome {
        if let Some(reason) = self.gate(Phase::Movement) {
            return ignored(reason, node);
        }
        let player = self.state.current;

        let Some(from) = self.state.selected.take() else {
            if self.board.get(node) == Some(player) {
                self.state.selected = Some(node);
                debug!(%player, %node, "titan selected");
                return ActionOutcome::Selected(node);
            }
            return ignored(Rejection::NotOwnTitan, node);
        };

        let reason = if !self.board.are_adjacent(from, node) {
            Some(Rejection::NotAdjacent)
        } else if !self.board.is_empty(node) {
            Some(Rejection::Occupied)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(%player, %from, %node, ?reason, "move rejected, selection cleared");
            return ActionOutcome::Deselected { node, reason };
        }

        self.board.remove(from);
        self.board.place(node, player);
        self.recompute_scores();
        let captured = self.check_capture(node, player);
        debug!(%player, %from, to = %node, captured = captured.len(), "titan moved");

        let turn = self.finish_turn();
        ActionOutcome::Moved {
            from,
            to: node,
            player,
            captured,
            turn,
        }
    }

    /// Rebuild edge control and scores from the board
    pub fn recompute_scores(&mut self) -> Scores {
        self.state.scores = rules::recompute_scores(&mut self.board);
        self.state.scores
    }

    /// Remove opponent titans surrounded by a move to `moved_to`.
    pub fn check_capture(&mut self, moved_to: NodeId, mover: Player) -> Vec<NodeId> {
        let captured = rules::execute_captures(&mut self.board, moved_to, mover);
        if !captured.is_empty() {
            info!(%mover, ?captured, "titans captured");
            self.recompute_scores();
        }
        captured
    }

    /// Record a verdict if the inner circuit is full
    pub fn check_game_end(&mut self) -> Option<Verdict> {
        if !rules::inner_circuit_full(&self.board) {
            return None;
        }
        let verdict = Verdict::by_score(self.state.scores);
        self.state.verdict = Some(verdict);
        info!(?verdict.outcome, red = verdict.scores.red, blue = verdict.scores.blue, "inner circuit full, game over");
        Some(verdict)
    }

    /// End the game because `expired` ran out of time
    pub fn end_by_timeout(&mut self, expired: Player) -> Verdict {
        let verdict = Verdict::by_timeout(expired, self.state.scores);
        self.state.selected = None;
        self.state.verdict = Some(verdict);
        info!(%expired, winner = ?verdict.winner(), "clock expired, game over");
        verdict
    }

    /// Preconditions shared by every click
    fn gate(&self, phase: Phase) -> Option<Rejection> {
        if !self.state.started {
            Some(Rejection::NotStarted)
        } else if self.state.is_over() {
            Some(Rejection::GameOver)
        } else if self.state.phase != phase {
            Some(Rejection::WrongPhase)
        } else {
            None
        }
    }

    fn finish_turn(&mut self) -> TurnEnd {
        match self.check_game_end() {
            Some(verdict) => TurnEnd::Finished(verdict),
            None => {
                self.state.current = self.state.current.opponent();
                TurnEnd::Passed {
                    next: self.state.current,
                }
            }
        }
    }

    /// Place titans directly, bypassing turn order (test setup).
    #[cfg(test)]
    pub(crate) fn setup(&mut self, titans: &[(NodeId, Player)], phase: Phase, current: Player) {
        for &(node, player) in titans {
            self.board.place(node, player);
        }
        for player in Player::ALL {
            self.state.placed[player] = self.titans_per_player;
        }
        self.state.phase = phase;
        self.state.current = current;
        self.state.started = true;
        self.recompute_scores();
    }
}

fn ignored(reason: Rejection, node: NodeId) -> ActionOutcome {
    debug!(%node, ?reason, "click ignored");
    ActionOutcome::Ignored(reason)
}
