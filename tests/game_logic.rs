/// Integration tests for game logic
///
/// These tests drive a whole round through the public API without a terminal:
/// target lifecycle, hit and miss rules, and the end-of-round hand-off.
use aim_trainer::{
    GameConfig, GameState, Round, Target, TickInput, TickOutcome, accuracy, format_time, speed,
};
use proptest::prelude::*;
use std::time::Duration;

fn idle_ticks(round: &mut Round, count: usize) {
    for _ in 0..count {
        round.tick(&TickInput::default());
    }
}

fn click(x: f64, y: f64) -> TickInput {
    TickInput {
        clicks: 1,
        pointer: Some((x, y)),
        ..TickInput::default()
    }
}

#[test]
fn test_hit_target_after_growing_to_size_ten() {
    let mut round = Round::with_seed(GameConfig::default(), 1);
    round.spawn_target_at(100.0, 100.0);
    idle_ticks(&mut round, 50);
    assert!((round.targets()[0].size - 10.0).abs() < 1e-9);

    round.tick(&click(100.0, 100.0));

    assert!(round.targets().is_empty());
    assert_eq!(round.stats().hits, 1);
    assert_eq!(round.stats().misses, 0);
}

#[test]
fn test_unclicked_target_costs_a_life() {
    let mut round = Round::with_seed(GameConfig::default(), 1);
    round.spawn_target_at(100.0, 100.0);
    idle_ticks(&mut round, 300);

    assert!(round.targets().is_empty());
    assert_eq!(round.stats().misses, 1);
    assert_eq!(round.stats().hits, 0);
    assert_eq!(round.lives_remaining(), 2);
}

#[test]
fn test_click_near_edge_of_ring() {
    let mut round = Round::with_seed(GameConfig::default(), 1);
    round.spawn_target_at(100.0, 100.0);
    idle_ticks(&mut round, 99); // size ~19.8, next tick 20.0

    // Just outside the radius this tick
    round.tick(&click(120.5, 100.0));
    assert_eq!(round.stats().hits, 0);

    // Radius has grown past the pointer now
    idle_ticks(&mut round, 5);
    round.tick(&click(120.5, 100.0));
    assert_eq!(round.stats().hits, 1);
    assert_eq!(round.stats().clicks, 2);
}

#[test]
fn test_full_round_with_spawn_timer_input() {
    let mut round = Round::with_seed(GameConfig::default(), 99);
    let mut outcome = TickOutcome::Continue;
    let mut ticks = 0u64;

    // Spawn every 24 ticks (400 ms at 60 Hz) and never click
    while outcome == TickOutcome::Continue {
        outcome = round.tick(&TickInput {
            spawn: ticks % 24 == 0,
            elapsed: Duration::from_millis(ticks * 1000 / 60),
            ..TickInput::default()
        });
        ticks += 1;
        assert!(ticks < 10_000, "round never ended");
    }

    assert_eq!(outcome, TickOutcome::Ended);
    assert_eq!(round.state(), GameState::Ended);
    assert_eq!(round.stats().misses, 3);
    assert_eq!(round.stats().hits, 0);
    assert_eq!(round.stats().accuracy(), None);
    // Third target spawned on tick 48 expires 300 ticks later
    assert_eq!(ticks, 348);
}

#[test]
fn test_spawned_targets_stay_below_hud() {
    let config = GameConfig::default();
    let mut round = Round::with_seed(config, 5);
    for _ in 0..200 {
        round.spawn_target();
    }
    for target in round.targets() {
        assert!(target.y >= config.padding + config.hud_height);
        assert!(target.x >= config.padding && target.x <= config.width - config.padding);
    }
}

#[test]
fn test_expected_lifetime_matches_constants() {
    let expected = (2.0 * Target::MAX_SIZE / Target::GROWTH_RATE).round() as usize;
    assert_eq!(expected, 300);

    let mut target = Target::new(0.0, 0.0);
    for _ in 0..expected - 1 {
        target.advance();
        assert!(!target.is_expired());
    }
    target.advance();
    assert!(target.is_expired());
}

#[test]
fn test_metric_guards_return_defined_values() {
    assert_eq!(speed(0, 0.0), 0.0);
    assert_eq!(accuracy(0, 0), None);
    assert_eq!(format_time(65.0), "01:05.0");
    assert_eq!(format_time(0.0), "00:00.0");
}

/// One randomly generated tick of player input
fn tick_input() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        0u32..3,
        prop::option::of((0.0f64..800.0, 0.0f64..600.0)),
    )
        .prop_map(|(spawn, clicks, pointer)| TickInput {
            spawn,
            clicks,
            pointer,
            ..TickInput::default()
        })
}

proptest! {
    #[test]
    fn test_counters_are_monotonic_and_hits_never_exceed_clicks(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 0..600),
    ) {
        let mut round = Round::with_seed(GameConfig::default(), seed);
        let mut previous = *round.stats();

        for input in &inputs {
            let outcome = round.tick(input);
            let stats = *round.stats();

            prop_assert!(stats.hits >= previous.hits);
            prop_assert!(stats.clicks >= previous.clicks);
            prop_assert!(stats.misses >= previous.misses);
            prop_assert!(stats.hits <= stats.clicks);
            prop_assert!(stats.misses <= round.config().lives);
            prop_assert_eq!(
                outcome == TickOutcome::Ended,
                stats.misses >= round.config().lives
            );
            if let Some(accuracy) = stats.accuracy() {
                prop_assert!(accuracy <= 100.0);
            }
            previous = stats;
        }
    }
}
