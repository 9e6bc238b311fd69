//! Game controller: rule engine plus two clocks
//!
//! The controller is the single entry point for the outside world. It
//! turns pointer coordinates into nodes, drives the active player's
//! clock from a [`Clock`], swaps clocks when a turn passes, and queues
//! [`GameEvent`]s for the UI to drain. Everything runs synchronously on
//! the caller's thread; call [`GameController::poll`] once per frame.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{info, warn};

use crate::board::{NodeId, PerPlayer, Player, Point};
use crate::config::GameConfig;
use crate::engine::{ActionOutcome, RuleEngine, TurnEnd};
use crate::rules::{Rejection, Verdict};
use crate::snapshot::GameSnapshot;
use crate::timer::{Clock, SystemClock, Timer, TimerEvent};

/// Notifications for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player's displayed clock changed
    ClockTick { player: Player, display: String },
    TurnPassed { next: Player },
    Captured { by: Player, nodes: Vec<NodeId> },
    /// The game ended. Timeouts are followed by a reset.
    GameOver(Verdict),
}

pub struct GameController<C: Clock = SystemClock> {
    config: GameConfig,
    engine: RuleEngine,
    timers: PerPlayer<Timer>,
    clock: C,
    last_poll: Duration,
    paused: bool,
    events: VecDeque<GameEvent>,
}

impl GameController<SystemClock> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_clock(config, SystemClock::default())
    }
}

impl Default for GameController<SystemClock> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<C: Clock> GameController<C> {
    pub fn with_clock(config: GameConfig, clock: C) -> Self {
        let timers = PerPlayer::new(Timer::new(config.clock_seconds), Timer::new(config.clock_seconds));
        let last_poll = clock.now();
        Self {
            engine: RuleEngine::with_config(&config),
            config,
            timers,
            clock,
            last_poll,
            paused: false,
            events: VecDeque::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn timer(&self, player: Player) -> &Timer {
        &self.timers[player]
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.engine.state().started
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True while the active player's clock is counting down
    pub fn is_running(&self) -> bool {
        self.timers[self.engine.state().current].is_running()
    }

    /// Begin the game with red to move. No-op once started.
    pub fn start(&mut self) {
        if self.is_started() {
            return;
        }
        self.engine.start();
        self.paused = false;
        self.last_poll = self.clock.now();
        self.timers[Player::Red].start();
    }

    pub fn pause(&mut self) {
        if !self.is_started() || self.paused || self.engine.state().is_over() {
            return;
        }
        self.flush_clock();
        if !self.is_started() {
            // The clock ran out while flushing
            return;
        }
        self.timers[self.engine.state().current].pause();
        self.paused = true;
        info!("game paused");
    }

    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.last_poll = self.clock.now();
        self.timers[self.engine.state().current].start();
        self.paused = false;
        info!("game resumed");
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Clear the board and both clocks. Each clock reports its full duration.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.paused = false;
        for player in Player::ALL {
            let event = self.timers[player].reset();
            self.push_timer_event(player, event);
        }
        self.last_poll = self.clock.now();
    }

    /// Resize the drawing area
    pub fn resize(&mut self, size: f32) {
        if size.is_finite() && size > 0.0 {
            self.engine.layout(size);
        } else {
            warn!(size, "ignoring invalid board size");
        }
    }

    /// Handle a click at drawing-area coordinates.
    ///
    /// Ignored before start, while paused, after the game ended, and when
    /// no node lies within the node radius.
    pub fn report_click(&mut self, x: f32, y: f32) -> ActionOutcome {
        // Charge time up to the click to the player who made it
        self.flush_clock();

        if !self.is_started() {
            return ActionOutcome::Ignored(Rejection::NotStarted);
        }
        if self.paused {
            return ActionOutcome::Ignored(Rejection::Paused);
        }
        let Some(node) = self.engine.board().node_at(Point::new(x, y), self.config.node_radius) else {
            return ActionOutcome::Ignored(Rejection::NoNode);
        };

        let outcome = self.engine.click(node);

        if let ActionOutcome::Moved { player, captured, .. } = &outcome {
            if !captured.is_empty() {
                self.events.push_back(GameEvent::Captured {
                    by: *player,
                    nodes: captured.clone(),
                });
            }
        }

        match outcome.turn() {
            Some(TurnEnd::Passed { next }) => self.switch_clocks(next),
            Some(TurnEnd::Finished(verdict)) => self.finish(verdict),
            None => {}
        }

        outcome
    }

    /// Advance the active clock by the time elapsed since the last poll
    pub fn poll(&mut self) {
        self.flush_clock();
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let clocks = PerPlayer::new(self.timers.red.display(), self.timers.blue.display());
        GameSnapshot::capture(&self.engine, self.config.node_radius, self.paused, clocks)
    }

    fn flush_clock(&mut self) {
        let now = self.clock.now();
        let elapsed = now.saturating_sub(self.last_poll);
        self.last_poll = now;

        let state = self.engine.state();
        if !state.started || state.is_over() || self.paused {
            return;
        }

        let player = state.current;
        for event in self.timers[player].advance(elapsed) {
            match event {
                TimerEvent::Expired => {
                    self.timeout(player);
                    return;
                }
                tick => self.push_timer_event(player, tick),
            }
        }
    }

    /// Pause the outgoing clock, start the incoming one
    fn switch_clocks(&mut self, next: Player) {
        self.timers[next.opponent()].pause();
        self.timers[next].start();
        self.events.push_back(GameEvent::TurnPassed { next });
    }

    fn finish(&mut self, verdict: Verdict) {
        for player in Player::ALL {
            self.timers[player].pause();
        }
        info!(verdict = %verdict.message(), "game over");
        self.events.push_back(GameEvent::GameOver(verdict));
    }

    fn timeout(&mut self, expired: Player) {
        let verdict = self.engine.end_by_timeout(expired);
        self.finish(verdict);
        self.reset();
    }

    fn push_timer_event(&mut self, player: Player, event: TimerEvent) {
        if let TimerEvent::Tick { remaining } = event {
            self.events.push_back(GameEvent::ClockTick {
                player,
                display: crate::timer::format_clock(remaining),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn controller() -> (GameController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let ctrl = GameController::with_clock(GameConfig::default(), clock.clone());
        (ctrl, clock)
    }

    fn click_node(ctrl: &mut GameController<ManualClock>, c: u8, i: u8) -> ActionOutcome {
        let pos = ctrl.engine().board().node(NodeId::new(c, i)).pos;
        ctrl.report_click(pos.x, pos.y)
    }

    #[test]
    fn test_click_before_start_ignored() {
        let (mut ctrl, _) = controller();
        assert_eq!(click_node(&mut ctrl, 0, 0), ActionOutcome::Ignored(Rejection::NotStarted));
    }

    #[test]
    fn test_click_off_node_ignored() {
        let (mut ctrl, _) = controller();
        ctrl.start();
        assert_eq!(ctrl.report_click(300.0, 300.0), ActionOutcome::Ignored(Rejection::NoNode));
        assert_eq!(ctrl.engine().state().current, Player::Red);
    }

    #[test]
    fn test_start_runs_red_clock_only() {
        let (mut ctrl, clock) = controller();
        ctrl.start();
        assert!(ctrl.timer(Player::Red).is_running());
        assert!(!ctrl.timer(Player::Blue).is_running());

        clock.advance(Duration::from_secs(3));
        ctrl.poll();
        assert_eq!(ctrl.timer(Player::Red).remaining(), 297);
        assert_eq!(ctrl.timer(Player::Blue).remaining(), 300);
    }

    #[test]
    fn test_turn_swaps_clocks() {
        let (mut ctrl, clock) = controller();
        ctrl.start();
        clock.advance(Duration::from_secs(2));
        click_node(&mut ctrl, 0, 0);

        assert!(!ctrl.timer(Player::Red).is_running());
        assert!(ctrl.timer(Player::Blue).is_running());
        assert_eq!(ctrl.timer(Player::Red).remaining(), 298);

        clock.advance(Duration::from_secs(5));
        ctrl.poll();
        assert_eq!(ctrl.timer(Player::Red).remaining(), 298);
        assert_eq!(ctrl.timer(Player::Blue).remaining(), 295);

        let events = ctrl.drain_events();
        assert!(events.contains(&GameEvent::TurnPassed { next: Player::Blue }));
        assert!(events.contains(&GameEvent::ClockTick {
            player: Player::Blue,
            display: "04:55".to_string()
        }));
    }

    #[test]
    fn test_rejected_click_keeps_clock() {
        let (mut ctrl, _) = controller();
        ctrl.start();
        // Circuit 1 is locked
        assert!(click_node(&mut ctrl, 1, 0).is_ignored());
        assert!(ctrl.timer(Player::Red).is_running());
        assert!(!ctrl.timer(Player::Blue).is_running());
    }

    #[test]
    fn test_pause_stops_ticks() {
        let (mut ctrl, clock) = controller();
        ctrl.start();
        ctrl.pause();
        assert!(ctrl.is_paused());
        assert!(!ctrl.is_running());

        clock.advance(Duration::from_secs(30));
        ctrl.poll();
        assert_eq!(ctrl.timer(Player::Red).remaining(), 300);
        assert_eq!(click_node(&mut ctrl, 0, 0), ActionOutcome::Ignored(Rejection::Paused));

        ctrl.toggle_pause();
        assert!(ctrl.is_running());
        clock.advance(Duration::from_secs(1));
        ctrl.poll();
        assert_eq!(ctrl.timer(Player::Red).remaining(), 299);
    }

    #[test]
    fn test_no_stray_tick_after_reset() {
        let (mut ctrl, clock) = controller();
        ctrl.start();
        clock.advance(Duration::from_millis(2500));
        ctrl.poll();
        ctrl.reset();
        let events = ctrl.drain_events();
        assert!(events.contains(&GameEvent::ClockTick {
            player: Player::Red,
            display: "05:00".to_string()
        }));
        assert!(events.contains(&GameEvent::ClockTick {
            player: Player::Blue,
            display: "05:00".to_string()
        }));

        clock.advance(Duration::from_secs(10));
        ctrl.poll();
        assert!(ctrl.drain_events().is_empty());
        assert_eq!(ctrl.timer(Player::Red).remaining(), 300);
        assert!(!ctrl.is_started());
    }

    #[test]
    fn test_timeout_declares_opponent_and_resets() {
        let clock = ManualClock::new();
        let mut ctrl = GameController::with_clock(GameConfig::default().with_clock_seconds(5), clock.clone());
        ctrl.start();
        click_node(&mut ctrl, 0, 0); // red placed; blue to move
        ctrl.drain_events();

        clock.advance(Duration::from_secs(60));
        ctrl.poll();

        let events = ctrl.drain_events();
        let verdicts: Vec<&Verdict> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameOver(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].winner(), Some(Player::Red));

        // Reset followed the report
        assert!(!ctrl.is_started());
        assert!(ctrl.engine().board().is_empty(NodeId::new(0, 0)));
        assert_eq!(ctrl.timer(Player::Blue).remaining(), 5);
        assert!(matches!(events.last(), Some(GameEvent::ClockTick { .. })));
    }

    #[test]
    fn test_snapshot_controls() {
        let (mut ctrl, _) = controller();
        let snap = ctrl.snapshot();
        assert_eq!(snap.controls, crate::snapshot::Controls { start: true, pause: false, reset: false });
        assert_eq!(snap.clocks.red, "05:00");
        assert_eq!(snap.unlocked_circuit, Some(0));
        assert_eq!(snap.highlighted().count(), 6);

        ctrl.start();
        let snap = ctrl.snapshot();
        assert_eq!(snap.controls, crate::snapshot::Controls { start: false, pause: true, reset: true });
        assert_eq!(snap.nodes.len(), 18);
        assert_eq!(snap.edges.len(), 30);
    }

    #[test]
    fn test_resize_moves_click_targets() {
        let (mut ctrl, _) = controller();
        ctrl.start();
        ctrl.resize(300.0);
        let pos = ctrl.snapshot().node(NodeId::new(0, 0)).pos;
        assert!(matches!(ctrl.report_click(pos.x, pos.y), ActionOutcome::Placed { .. }));

        ctrl.resize(f32::NAN);
        assert_eq!(ctrl.engine().board().size(), 300.0);
    }
}
