//! End-to-end scenarios and properties over the public API

use std::time::Duration;

use proptest::prelude::*;
use titan_crash::board::{NodeId, Player};
use titan_crash::rules::{recompute_scores, score_of};
use titan_crash::{
    ActionOutcome, Board, GameConfig, GameController, GameEvent, ManualClock, Phase, Rejection, RuleEngine,
    Timer, TimerEvent, TurnEnd,
};

fn n(c: u8, i: u8) -> NodeId {
    NodeId::new(c, i)
}

#[test]
fn fresh_board_first_placement() {
    let mut engine = RuleEngine::new();
    engine.start();

    let outcome = engine.click(n(0, 0));
    assert_eq!(
        outcome.turn(),
        Some(TurnEnd::Passed { next: Player::Blue })
    );
    assert_eq!(engine.state().scores.red, 0);
    assert_eq!(engine.state().current, Player::Blue);
}

#[test]
fn outer_circuit_unlocks_middle() {
    let mut engine = RuleEngine::new();
    engine.start();

    // Red at even, blue at odd outer positions
    for i in 0..6 {
        if i == 3 {
            // Middle circuit stays locked while the outer one has vacancies
            let before = engine.clone();
            assert_eq!(
                engine.click(n(1, 0)),
                ActionOutcome::Ignored(Rejection::CircuitLocked { unlocked: 0 })
            );
            assert_eq!(engine, before);
        }
        engine.click(n(0, i));
    }
    assert_eq!(engine.board().get(n(0, 4)), Some(Player::Red));
    assert_eq!(engine.board().get(n(0, 5)), Some(Player::Blue));

    assert!(matches!(engine.click(n(1, 0)), ActionOutcome::Placed { player: Player::Red, .. }));
}

#[test]
fn fifth_titan_rejected() {
    let mut engine = RuleEngine::new();
    engine.start();
    for i in 0..6 {
        engine.click(n(0, i));
    }
    engine.click(n(1, 0));
    engine.click(n(1, 1));
    assert_eq!(engine.state().phase, Phase::Movement);

    let before = engine.clone();
    assert!(engine.attempt_placement(n(1, 2), Player::Red).is_ignored());
    assert_eq!(engine, before);
    assert_eq!(engine.board().titan_count(Player::Red), 4);
}

#[test]
fn full_game_to_inner_circuit() {
    let mut engine = RuleEngine::new();
    engine.start();
    // Placement: outer ring alternating, then red c1n0 / blue c1n1
    for i in 0..6 {
        engine.click(n(0, i));
    }
    engine.click(n(1, 0));
    engine.click(n(1, 1));
    assert_eq!(engine.state().phase, Phase::Movement);
    assert_eq!(engine.state().current, Player::Red);

    // Walk titans inward, alternating turns, with no captures along the way
    let moves = [
        (n(1, 0), n(2, 0)), // red
        (n(1, 1), n(2, 1)), // blue
        (n(0, 2), n(1, 2)), // red
        (n(0, 1), n(1, 1)), // blue
        (n(1, 2), n(2, 2)), // red
        (n(0, 3), n(1, 3)), // blue
        (n(0, 4), n(1, 4)), // red
        (n(1, 3), n(2, 3)), // blue
        (n(1, 4), n(2, 4)), // red
        (n(0, 5), n(1, 5)), // blue
        (n(0, 0), n(0, 1)), // red
    ];
    for (from, to) in moves {
        assert_eq!(engine.click(from), ActionOutcome::Selected(from));
        let outcome = engine.click(to);
        assert!(
            matches!(&outcome, ActionOutcome::Moved { captured, turn: TurnEnd::Passed { .. }, .. } if captured.is_empty()),
            "{:?}",
            outcome
        );
    }

    // Blue fills the last inner node
    engine.click(n(1, 5));
    let outcome = engine.click(n(2, 5));
    let verdict = match outcome.turn() {
        Some(TurnEnd::Finished(v)) => v,
        other => panic!("expected the game to end, got {:?}", other),
    };
    assert!(engine.state().is_over());
    // Only the radial c1n1-c2n1 is held by one side
    assert_eq!(verdict.scores, titan_crash::Scores::new(0, 9));
    assert_eq!(verdict.winner(), Some(Player::Blue));
    assert_eq!(engine.state().current, Player::Blue);
}

#[test]
fn clock_runs_out_after_300_ticks() {
    let mut timer = Timer::new(300);
    timer.start();
    let mut expired = 0;
    for _ in 0..300 {
        expired += timer.tick().into_iter().filter(|e| *e == TimerEvent::Expired).count();
    }
    assert_eq!(timer.remaining(), 0);
    assert!(!timer.is_running());
    assert_eq!(expired, 1);
    assert!(timer.tick().is_empty());
}

#[test]
fn controller_timeout_reports_then_resets() {
    let clock = ManualClock::new();
    let mut game = GameController::with_clock(GameConfig::default(), clock.clone());
    game.start();

    clock.advance(Duration::from_secs(299));
    game.poll();
    assert_eq!(game.snapshot().clocks.red, "00:01");

    clock.advance(Duration::from_secs(1));
    game.poll();
    let over: Vec<_> = game
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::GameOver(v) => Some(v),
            _ => None,
        })
        .collect();
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].winner(), Some(Player::Blue));

    let snap = game.snapshot();
    assert!(!snap.started);
    assert_eq!(snap.clocks.red, "05:00");
    assert!(snap.controls.start);
}

#[test]
fn snapshot_serializes() {
    let game = GameController::with_clock(GameConfig::default(), ManualClock::new());
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 18);
    assert_eq!(json["edges"].as_array().unwrap().len(), 30);
    assert_eq!(json["phase"], "placement");
    assert_eq!(json["current"], "red");
}

fn occupancy() -> impl Strategy<Value = Vec<Option<Player>>> {
    prop::collection::vec(
        prop_oneof![Just(None), Just(Some(Player::Red)), Just(Some(Player::Blue))],
        18,
    )
}

fn board_with(occ: &[Option<Player>]) -> Board {
    let mut board = Board::new(600.0);
    for (i, o) in occ.iter().enumerate() {
        if let Some(p) = o {
            board.place(NodeId::from_index(i), *p);
        }
    }
    board
}

proptest! {
    #[test]
    fn score_is_sum_of_controlled_weights(occ in occupancy()) {
        let mut board = board_with(&occ);
        let scores = recompute_scores(&mut board);

        for player in Player::ALL {
            let expected: u32 = board
                .edges()
                .iter()
                .filter(|e| board.get(e.start) == Some(player) && board.get(e.end) == Some(player))
                .map(|e| e.weight)
                .sum();
            prop_assert_eq!(scores[player], expected);
            prop_assert_eq!(score_of(&board, player), expected);
        }

        let again = recompute_scores(&mut board);
        prop_assert_eq!(scores, again);
    }

    #[test]
    fn random_clicks_respect_rules(clicks in prop::collection::vec(0usize..18, 0..300)) {
        let mut engine = RuleEngine::new();
        engine.start();

        for idx in clicks {
            let before = engine.clone();
            let outcome = engine.click(NodeId::from_index(idx));

            if let ActionOutcome::Ignored(_) = outcome {
                prop_assert_eq!(&engine, &before);
            }
            for player in Player::ALL {
                prop_assert!(engine.state().placed[player] <= 4);
                prop_assert!(engine.board().titan_count(player) <= 4);
            }
            let inner_full = engine.board().is_circuit_full(2);
            prop_assert_eq!(engine.state().is_over(), inner_full);
        }
    }
}
