//! Tests for the session engine.

use std::time::Duration;

use super::*;

fn engine() -> (ManualClock, CookEngine<ManualClock>) {
    let clock = ManualClock::new();
    let engine = CookEngine::with_clock(clock.clone());
    (clock, engine)
}

fn assert_bounds(engine: &CookEngine<ManualClock>, recipe_id: &str) {
    let session = engine.session(recipe_id).expect("session exists");
    assert!(session.step_remaining_sec <= session.step_duration_sec());
    assert!(session.overall_remaining_sec <= session.total_duration_sec());
    assert!(session.current_step_index < session.step_count());
}

#[test]
fn test_start_initializes_session() {
    let (clock, mut engine) = engine();
    clock.set_ms(5_000);

    assert_eq!(engine.start_timeline("r1", vec![60, 120]), StartOutcome::Started);

    let session = engine.session("r1").unwrap();
    assert_eq!(session.current_step_index, 0);
    assert!(session.is_running);
    assert_eq!(session.step_remaining_sec, 60);
    assert_eq!(session.overall_remaining_sec, 180);
    assert_eq!(session.last_tick_ms, 5_000);
    assert_eq!(engine.active_recipe_id(), Some("r1"));
    assert!(engine.is_active("r1"));
}

#[test]
fn test_start_is_idempotent() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![100]);
    clock.advance(Duration::from_secs(10));
    engine.tick("r1");

    assert_eq!(
        engine.start_timeline("r1", vec![100]),
        StartOutcome::AlreadyStarted
    );
    assert_eq!(engine.session("r1").unwrap().step_remaining_sec, 90);
}

#[test]
fn test_single_active_session() {
    let (_clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60]);

    assert_eq!(
        engine.start_timeline("r2", vec![60]),
        StartOutcome::Conflict {
            active: "r1".to_string()
        }
    );
    assert!(engine.session("r2").is_none());
    assert_eq!(engine.active_recipe_id(), Some("r1"));

    engine.end_session("r1");
    assert_eq!(engine.start_timeline("r2", vec![60]), StartOutcome::Started);
    assert_eq!(engine.active_recipe_id(), Some("r2"));
}

#[test]
fn test_start_without_steps() {
    let (_clock, mut engine) = engine();
    assert_eq!(engine.start_timeline("r1", vec![]), StartOutcome::NoSteps);
    assert!(engine.active_recipe_id().is_none());
}

#[test]
fn test_zero_delta_tick_only_moves_anchor() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![100]);

    clock.advance(Duration::from_millis(999));
    assert_eq!(engine.tick("r1"), 0);

    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 100);
    assert_eq!(session.overall_remaining_sec, 100);
    assert_eq!(session.last_tick_ms, 999);
}

#[test]
fn test_sub_second_remainders_are_discarded() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![100]);

    for _ in 0..4 {
        clock.advance(Duration::from_millis(600));
        engine.tick("r1");
    }
    // 2.4s of wall time, four ticks of 0.6s, none of them a whole second
    assert_eq!(engine.session("r1").unwrap().step_remaining_sec, 100);
}

#[test]
fn test_single_tick_consumes_whole_gap() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![100]);

    clock.advance(Duration::from_secs(47));
    assert_eq!(engine.tick("r1"), 47);

    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 53);
    assert_eq!(session.overall_remaining_sec, 53);
}

#[test]
fn test_countdowns_floor_at_zero() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![30, 60]);

    clock.advance(Duration::from_secs(500));
    assert_eq!(engine.tick("r1"), 500);

    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 0);
    assert_eq!(session.overall_remaining_sec, 0);
    assert_bounds(&engine, "r1");
}

#[test]
fn test_clock_before_anchor_consumes_nothing() {
    let (clock, mut engine) = engine();
    clock.set_ms(10_000);
    engine.start_timeline("r1", vec![100]);

    clock.set_ms(2_000);
    assert_eq!(engine.tick("r1"), 0);
    assert_eq!(engine.session("r1").unwrap().step_remaining_sec, 100);
}

#[test]
fn test_pause_does_not_leak_time() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![100]);

    assert!(engine.pause_resume("r1", false));
    clock.advance(Duration::from_secs(30));
    assert_eq!(engine.tick("r1"), 0);

    assert!(engine.pause_resume("r1", true));
    clock.advance(Duration::from_secs(1));
    assert_eq!(engine.tick("r1"), 1);

    assert_eq!(engine.session("r1").unwrap().step_remaining_sec, 99);
}

#[test]
fn test_pause_resume_missing_session() {
    let (_clock, mut engine) = engine();
    assert!(!engine.pause_resume("nope", true));
    assert_eq!(engine.tick("nope"), 0);
}

#[test]
fn test_advance_step_sets_next_values() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120, 30]);
    engine.pause_resume("r1", false);
    clock.advance(Duration::from_secs(5));

    let outcome = engine.advance_step(
        "r1",
        Some(NextStep {
            step_duration_sec: 120,
            overall_remaining_sec: Some(150),
        }),
    );
    assert_eq!(outcome, Advance::Moved { step_index: 1 });

    let session = engine.session("r1").unwrap();
    assert_eq!(session.current_step_index, 1);
    assert_eq!(session.step_remaining_sec, 120);
    assert_eq!(session.overall_remaining_sec, 150);
    assert!(session.is_running);
    assert_eq!(session.last_tick_ms, 5_000);
}

#[test]
fn test_advance_step_keeps_overall_when_omitted() {
    let (_clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120]);

    engine.advance_step(
        "r1",
        Some(NextStep {
            step_duration_sec: 120,
            overall_remaining_sec: None,
        }),
    );
    assert_eq!(engine.session("r1").unwrap().overall_remaining_sec, 180);
}

#[test]
fn test_advance_step_none_ends_session() {
    let (_clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60]);

    assert_eq!(engine.advance_step("r1", None), Advance::Ended);
    assert!(engine.session("r1").is_none());
    assert!(engine.active_recipe_id().is_none());
    assert_eq!(engine.advance_step("r1", None), Advance::Ignored);
}

#[test]
fn test_advance_past_final_step_is_ignored() {
    let (_clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60]);

    let outcome = engine.advance_step(
        "r1",
        Some(NextStep {
            step_duration_sec: 10,
            overall_remaining_sec: None,
        }),
    );
    assert_eq!(outcome, Advance::Ignored);
    assert_eq!(engine.session("r1").unwrap().current_step_index, 0);
}

#[test]
fn test_end_session() {
    let (_clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60]);

    assert!(engine.end_session("r1"));
    assert!(!engine.end_session("r1"));
    assert!(engine.active_session().is_none());
}

#[test]
fn test_is_last_step() {
    let (_clock, mut engine) = engine();
    assert!(!engine.is_last_step("r1"));

    engine.start_timeline("r1", vec![60, 120]);
    assert!(!engine.is_last_step("r1"));
    engine.advance_or_end("r1");
    assert!(engine.is_last_step("r1"));
}

#[test]
fn test_manual_skip_drops_unspent_time() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120]);

    clock.advance(Duration::from_secs(20));
    engine.tick("r1");
    assert_eq!(engine.advance_or_end("r1"), Advance::Moved { step_index: 1 });

    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 120);
    assert_eq!(session.overall_remaining_sec, 120);
}

#[test]
fn test_two_step_scenario() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120]);

    clock.advance(Duration::from_secs(60));
    assert_eq!(engine.tick("r1"), 60);
    {
        let session = engine.session("r1").unwrap();
        assert_eq!(session.step_remaining_sec, 0);
        assert_eq!(session.overall_remaining_sec, 120);
    }
    assert!(!engine.is_last_step("r1"));

    assert_eq!(engine.advance_or_end("r1"), Advance::Moved { step_index: 1 });
    {
        let session = engine.session("r1").unwrap();
        assert_eq!(session.step_remaining_sec, 120);
        assert_eq!(session.overall_remaining_sec, 120);
    }

    clock.advance(Duration::from_secs(120));
    engine.tick("r1");
    assert!(engine.is_last_step("r1"));
    assert_eq!(engine.advance_or_end("r1"), Advance::Ended);
    assert!(engine.session("r1").is_none());
    assert!(engine.active_recipe_id().is_none());
}

#[test]
fn test_poll_drives_recipe_to_completion() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120]);

    clock.advance(Duration::from_secs(30));
    assert_eq!(engine.poll("r1"), PollOutcome::Ticked { consumed: 30 });

    clock.advance(Duration::from_secs(30));
    assert_eq!(
        engine.poll("r1"),
        PollOutcome::Advanced {
            step_index: 1,
            consumed: 30
        }
    );
    assert_bounds(&engine, "r1");

    clock.advance(Duration::from_secs(125));
    assert_eq!(engine.poll("r1"), PollOutcome::Finished { consumed: 125 });
    assert_eq!(engine.poll("r1"), PollOutcome::Idle);
}

#[test]
fn test_poll_faster_than_a_second_still_counts_down() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60]);

    for _ in 0..40 {
        clock.advance(Duration::from_millis(500));
        engine.poll("r1");
    }

    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 40);
    assert_eq!(session.overall_remaining_sec, 40);
}

#[test]
fn test_poll_carries_overflow_into_next_step() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 60, 60]);

    clock.advance(Duration::from_secs(90));
    assert_eq!(
        engine.poll("r1"),
        PollOutcome::Advanced {
            step_index: 1,
            consumed: 90
        }
    );
    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 30);
    assert_eq!(session.overall_remaining_sec, 90);

    clock.advance(Duration::from_secs(60));
    assert_eq!(
        engine.poll("r1"),
        PollOutcome::Advanced {
            step_index: 2,
            consumed: 60
        }
    );
    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 30);
    assert_eq!(session.overall_remaining_sec, 30);
    assert_bounds(&engine, "r1");
}

#[test]
fn test_poll_skips_several_steps_after_long_gap() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 60, 60]);

    clock.advance(Duration::from_secs(150));
    assert_eq!(
        engine.poll("r1"),
        PollOutcome::Advanced {
            step_index: 2,
            consumed: 150
        }
    );
    let session = engine.session("r1").unwrap();
    assert_eq!(session.step_remaining_sec, 30);
    assert_eq!(session.overall_remaining_sec, 30);
}

#[test]
fn test_poll_finishes_after_gap_longer_than_recipe() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 60, 60]);

    clock.advance(Duration::from_secs(600));
    assert_eq!(engine.poll("r1"), PollOutcome::Finished { consumed: 600 });
    assert!(engine.session("r1").is_none());
    assert!(engine.active_recipe_id().is_none());
}

#[test]
fn test_poll_paused_is_idle() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![10]);
    engine.pause_resume("r1", false);

    clock.advance(Duration::from_secs(60));
    assert_eq!(engine.poll("r1"), PollOutcome::Idle);
    assert_eq!(engine.session("r1").unwrap().step_remaining_sec, 10);
}

#[test]
fn test_bounds_hold_across_irregular_ticks() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![45, 90, 30]);

    for gap_ms in [250, 1_750, 12_000, 999, 47_000, 3_001, 60_000, 500] {
        clock.advance(Duration::from_millis(gap_ms));
        if let PollOutcome::Finished { .. } = engine.poll("r1") {
            break;
        }
        assert_bounds(&engine, "r1");
    }
}

#[test]
fn test_progress_snapshot() {
    let (clock, mut engine) = engine();
    engine.start_timeline("r1", vec![60, 120]);
    clock.advance(Duration::from_secs(45));
    engine.tick("r1");

    let progress = engine.progress("r1").unwrap();
    assert_eq!(progress.step_number(), 1);
    assert_eq!(progress.step_count, 2);
    assert_eq!(progress.step_duration_sec, 60);
    assert_eq!(progress.step_remaining_sec, 15);
    assert_eq!(progress.step_percent, 75);
    assert_eq!(progress.total_duration_sec, 180);
    assert_eq!(progress.overall_remaining_sec, 135);
    assert_eq!(progress.overall_percent, 25);
    assert!(progress.is_running);

    assert!(engine.progress("other").is_none());
}
