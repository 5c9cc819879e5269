//! Integration tests: controller and player against real generators.
//!
//! Uses the shared fixtures and [`RecordingSink`] from
//! `sortviz-test-utils`, and checks played logs with `sortviz-replay`.

use std::time::Duration;

use proptest::prelude::*;
use sortviz_algos::generate;
use sortviz_core::{AlgorithmKind, ArrayShape, PlaybackState, Value};
use sortviz_engine::{ControlEvent, Controller, Player, PlayerEvent, Speed, Status};
use sortviz_replay::{final_state, verify_log};
use sortviz_test_utils::{
    config, finish, play_interrupted, play_straight, RecordingSink, EXAMPLE, EXAMPLE_BUBBLE,
};

fn arb_kind() -> impl Strategy<Value = AlgorithmKind> {
    prop::sample::select(AlgorithmKind::ALL.to_vec())
}

#[test]
fn bubble_example_walkthrough() {
    let log = generate(AlgorithmKind::Bubble, &EXAMPLE);
    let lines: Vec<String> = log.actions().map(|a| a.to_string()).collect();
    assert_eq!(lines, EXAMPLE_BUBBLE);

    let player = play_straight(AlgorithmKind::Bubble, &EXAMPLE);
    assert_eq!(player.visual().values(), &[1, 3, 5, 8]);
    assert_eq!(player.metrics().comparisons(), 6);
    assert_eq!(player.metrics().swaps(), 4);
}

#[test]
fn status_line_follows_the_run() {
    let mut ctl =
        Controller::new(config(AlgorithmKind::Bubble, 5, 1), RecordingSink::new()).unwrap();
    ctl.start();
    finish(&mut ctl);

    let texts = ctl.sink().status_texts();
    assert_eq!(texts.first().map(String::as_str), Some("Ready"));
    assert_eq!(texts[1], "Running");
    assert!(texts[2].starts_with("Comparing 0,1"));
    assert_eq!(texts.last().map(String::as_str), Some("Completed"));
    assert!(
        texts.iter().all(|t| !t.starts_with("Wrote")),
        "bubble never writes"
    );
}

#[test]
fn metrics_reported_match_log_totals() {
    for kind in AlgorithmKind::ALL {
        let mut ctl = Controller::new(config(kind, 40, 11), RecordingSink::new()).unwrap();
        let log = generate(kind, ctl.values());
        ctl.start();
        finish(&mut ctl);

        let last = ctl.sink().last_metrics().copied().unwrap();
        assert_eq!(last.counts, log.totals(), "{kind}");
        assert_eq!(last.elapsed, Duration::from_millis(log.len() as u64), "{kind}");
    }
}

#[test]
fn finished_runs_publish_nothing_for_ignored_events() {
    let mut ctl =
        Controller::new(config(AlgorithmKind::Selection, 8, 3), RecordingSink::new()).unwrap();
    ctl.start();
    finish(&mut ctl);
    let last = ctl.sink().last_frame().unwrap();
    assert_eq!(last.sorted_count(), 8);
    assert_eq!(last.highlighted().count(), 0);

    ctl.sink_mut().clear();
    ctl.toggle_pause();
    ctl.cancel();
    ctl.tick(Duration::from_millis(5));
    assert!(ctl.sink().last_frame().is_none());
    assert_eq!(ctl.sink().last_status(), None);

    assert!(ctl.generate_array());
    let fresh = ctl.sink().last_frame().unwrap();
    assert_eq!(fresh.len(), 8);
    assert_eq!(fresh.sorted_count(), 0);
    assert_eq!(ctl.sink().last_status(), Some(Status::Ready));
}

#[test]
fn merge_sort_reports_writes() {
    let mut ctl =
        Controller::new(config(AlgorithmKind::Merge, 16, 5), RecordingSink::new()).unwrap();
    ctl.start();
    finish(&mut ctl);
    assert!(ctl.metrics().writes() > 0);
    assert!(ctl
        .sink()
        .statuses
        .iter()
        .any(|s| matches!(s, Status::Wrote { .. })));
}

#[test]
fn second_run_sorts_already_sorted_values() {
    let mut ctl =
        Controller::new(config(AlgorithmKind::Insertion, 30, 2), RecordingSink::new()).unwrap();
    ctl.start();
    finish(&mut ctl);
    let sorted = ctl.values().to_vec();

    ctl.start();
    assert_eq!(ctl.metrics().comparisons(), 0);
    finish(&mut ctl);
    assert_eq!(ctl.values(), sorted.as_slice());
    // Insertion sort on sorted input: one comparison per element after the first.
    assert_eq!(ctl.metrics().comparisons(), 29);
}

#[test]
fn events_drive_a_full_session() {
    let mut ctl =
        Controller::new(config(AlgorithmKind::Quick, 10, 4), RecordingSink::new()).unwrap();
    let events = [
        ControlEvent::SetShape(ArrayShape::NearlySorted),
        ControlEvent::SetAlgorithm(AlgorithmKind::Selection),
        ControlEvent::SetSpeed(Speed::Level(1000)),
        ControlEvent::Start,
        ControlEvent::TogglePause,
        ControlEvent::Step,
        ControlEvent::Step,
        ControlEvent::TogglePause,
    ];
    for event in events {
        ctl.handle(event).unwrap();
    }
    assert_eq!(ctl.state(), PlaybackState::Running);
    assert_eq!(ctl.player().unwrap().position(), 2);
    assert_eq!(ctl.delay(), Duration::from_millis(5));
    finish(&mut ctl);
    assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
}

proptest! {
    #[test]
    fn pause_and_resume_match_uninterrupted(
        kind in arb_kind(),
        values in prop::collection::vec(1u32..=100, 0..=60),
        ticks in 1usize..5,
    ) {
        let mut pattern = vec![
            PlayerEvent::TogglePause,
            PlayerEvent::Step,
            PlayerEvent::Tick(Duration::from_millis(9)),
            PlayerEvent::TogglePause,
        ];
        pattern.extend(std::iter::repeat(PlayerEvent::Tick(Duration::from_millis(1))).take(ticks));

        let straight = play_straight(kind, &values);
        let bumpy = play_interrupted(kind, &values, &pattern);

        prop_assert_eq!(bumpy.state(), PlaybackState::Completed);
        prop_assert_eq!(bumpy.visual(), straight.visual());
        prop_assert_eq!(bumpy.metrics().counts, straight.metrics().counts);
    }

    #[test]
    fn played_state_matches_replayed_log(
        kind in arb_kind(),
        values in prop::collection::vec(1u32..=100, 0..=60),
    ) {
        let log = generate(kind, &values);
        prop_assert!(verify_log(&values, &log).is_ok());

        let player = play_straight(kind, &values);
        let replayed: Vec<Value> = final_state(&values, &log);
        prop_assert_eq!(player.visual().values(), replayed.as_slice());
        prop_assert!(player.visual().all_sorted());
    }

    #[test]
    fn cancel_never_marks_sorted(
        kind in arb_kind(),
        values in prop::collection::vec(1u32..=100, 2..=60),
        cut in 0usize..200,
    ) {
        let log = generate(kind, &values);
        let mut player = Player::new(&values, log);
        player.handle(PlayerEvent::Start);
        for _ in 0..cut.min(player.remaining().saturating_sub(1)) {
            player.handle(PlayerEvent::Tick(Duration::ZERO));
        }
        player.handle(PlayerEvent::Cancel);
        prop_assert_eq!(player.state(), PlaybackState::Cancelled);
        prop_assert!(!player.visual().all_sorted());
    }
}
