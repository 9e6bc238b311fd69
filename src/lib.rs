//! Titan Crash game engine
//!
//! A two-player game on three concentric hexagonal circuits:
//! - 18 nodes, 30 weighted edges (ring and radial)
//! - Placement phase: 4 titans each, circuits unlock from the outside in
//! - Movement phase: step to an adjacent empty node, surround to capture
//! - An edge held at both ends scores its weight for that player
//! - The game ends when the inner circuit is full or a clock runs out
//!
//! # Architecture
//!
//! - [`board`]: Topology generation and occupancy
//! - [`rules`]: Placement gating, scoring, capture, terminal detection
//! - [`engine`]: Rule engine applying clicks to the game state
//! - [`timer`]: Countdown clocks and time sources
//! - [`controller`]: Engine + clocks behind one event-driven interface
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use titan_crash::{GameConfig, GameController, ManualClock, Player};
//!
//! let mut game = GameController::with_clock(GameConfig::default(), ManualClock::new());
//! game.start();
//!
//! // Click the first outer node
//! let node = game.snapshot().nodes[0].pos;
//! game.report_click(node.x, node.y);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.current, Player::Blue);
//! assert_eq!(snapshot.scores.red, 0);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod rules;
pub mod snapshot;
pub mod timer;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, NodeId, PerPlayer, Player, Point, NODE_COUNT};
pub use config::GameConfig;
pub use controller::{GameController, GameEvent};
pub use engine::{ActionOutcome, GameState, Phase, RuleEngine, TurnEnd};
pub use error::ConfigError;
pub use rules::{EndReason, Outcome, Rejection, Scores, Verdict};
pub use snapshot::GameSnapshot;
pub use timer::{Clock, ManualClock, SystemClock, Timer, TimerEvent};
