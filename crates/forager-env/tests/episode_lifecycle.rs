//! Episode lifecycle integration tests: reset invariants, step-limit
//! termination, determinism, and post-termination gating.

use forager_core::{Action, EpisodeId, StepError, Vec3};
use forager_env::{EnvConfig, ForagerEnv};
use forager_test_utils::{RecordingSink, SharedAnchor, SharedBody};

/// Full harness: the environment plus the shared handles it was built
/// over, so tests can observe state the environment owns.
struct Harness {
    env: ForagerEnv,
    body: SharedBody,
    food: SharedAnchor,
    poison: SharedAnchor,
    sink: RecordingSink,
}

fn harness_with(config: EnvConfig) -> Harness {
    let body = SharedBody::at(config.agent_spawn);
    let food = SharedAnchor::at(Vec3::ZERO);
    let poison = SharedAnchor::at(Vec3::ZERO);
    let sink = RecordingSink::new();

    let mut env = ForagerEnv::new(config, Box::new(body.clone())).unwrap();
    env.attach_food(Box::new(food.clone()));
    env.attach_poison(Box::new(poison.clone()));
    env.set_sink(Box::new(sink.clone()));

    Harness {
        env,
        body,
        food,
        poison,
        sink,
    }
}

fn harness() -> Harness {
    harness_with(EnvConfig::default())
}

// ── Reset invariants ─────────────────────────────────────────

#[test]
fn reset_zeroes_state_and_places_entities_in_bounds() {
    let mut h = harness();

    // Dirty the state first.
    h.env.reset().unwrap();
    for _ in 0..10 {
        h.env.step(Action::Forward).unwrap();
    }
    assert!(h.env.step_count() > 0);

    h.env.reset().unwrap();
    assert_eq!(h.env.step_count(), 0);
    assert_eq!(h.env.episode_return(), 0.0);
    assert_eq!(h.body.snapshot().position, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(h.body.snapshot().velocity, Vec3::ZERO);

    for entity in [h.food.current(), h.poison.current()] {
        assert!((-4.0..=4.0).contains(&entity.x));
        assert!((-4.0..=4.0).contains(&entity.z));
        assert_eq!(entity.y, 1.0);
    }
}

#[test]
fn reset_bumps_episode_and_notifies_sink() {
    let mut h = harness();
    h.env.reset().unwrap();
    h.env.reset().unwrap();
    assert_eq!(h.env.current_episode(), EpisodeId(2));
    assert_eq!(h.sink.started(), vec![EpisodeId(1), EpisodeId(2)]);
}

#[test]
fn observation_is_idempotent_between_steps() {
    let mut h = harness();
    h.env.reset().unwrap();
    h.env.step(Action::Left).unwrap();
    let a = h.env.observe().unwrap();
    let b = h.env.observe().unwrap();
    assert_eq!(a, b);
}

// ── Motion ───────────────────────────────────────────────────

#[test]
fn forward_action_moves_along_positive_z() {
    let mut h = harness();
    h.env.reset().unwrap();
    h.env.step(Action::Forward).unwrap();

    // Impulse 5 in +Z, clamped at the 5 u/s cap, integrated over 0.02 s.
    let body = h.body.snapshot();
    assert!((body.velocity.z - 5.0).abs() < 1e-5);
    assert!((body.position.z - 0.1).abs() < 1e-5);
    assert_eq!(body.position.x, 0.0);
}

#[test]
fn speed_stays_capped_under_repeated_impulses() {
    let mut h = harness();
    h.env.reset().unwrap();
    for _ in 0..20 {
        h.env.step(Action::Right).unwrap();
        assert!(h.body.snapshot().velocity.length() <= 5.0 + 1e-4);
    }
}

// ── Step-limit termination ───────────────────────────────────

#[test]
fn step_limit_ends_episode_with_penalty_exactly_once() {
    let mut h = harness();
    h.env.reset().unwrap();

    // Stay keeps all distances constant: each tick earns only the time
    // penalty until the limit trips.
    let mut last_done = false;
    let mut ticks = 0u32;
    while !last_done {
        let result = h.env.step(Action::Stay).unwrap();
        last_done = result.done;
        ticks += 1;
        assert!(ticks <= 301, "episode failed to terminate at the limit");
    }

    assert_eq!(ticks, 301);
    let ended = h.sink.ended();
    assert_eq!(ended.len(), 1, "episode_ended must fire exactly once");

    // 301 ticks of −0.002 plus the −0.5 limit penalty.
    let expected = 301.0 * -0.002 - 0.5;
    assert!(
        (ended[0].1 - expected).abs() < 1e-3,
        "total reward {} != expected {expected}",
        ended[0].1
    );
}

#[test]
fn stepping_after_termination_is_rejected_until_reset() {
    let mut h = harness_with(EnvConfig {
        step_limit: 2,
        ..Default::default()
    });
    h.env.reset().unwrap();
    h.env.step(Action::Stay).unwrap();
    h.env.step(Action::Stay).unwrap();
    let result = h.env.step(Action::Stay).unwrap();
    assert!(result.done);

    assert!(matches!(
        h.env.step(Action::Stay),
        Err(StepError::EpisodeOver)
    ));

    h.env.reset().unwrap();
    assert!(h.env.step(Action::Stay).is_ok());
}

// ── Determinism ──────────────────────────────────────────────

#[test]
fn identical_seeds_replay_identically() {
    let mut a = harness();
    let mut b = harness();

    let obs_a = a.env.reset().unwrap();
    let obs_b = b.env.reset().unwrap();
    assert_eq!(obs_a, obs_b);
    assert_eq!(a.food.current(), b.food.current());
    assert_eq!(a.poison.current(), b.poison.current());

    let script = [
        Action::Forward,
        Action::Forward,
        Action::Left,
        Action::Stay,
        Action::Right,
        Action::Back,
    ];
    for action in script {
        let ra = a.env.step(action).unwrap();
        let rb = b.env.step(action).unwrap();
        assert_eq!(ra.observation, rb.observation);
        assert_eq!(ra.reward, rb.reward);
    }
}

#[test]
fn different_seeds_place_entities_differently() {
    let mut a = harness_with(EnvConfig {
        seed: 1,
        ..Default::default()
    });
    let mut b = harness_with(EnvConfig {
        seed: 2,
        ..Default::default()
    });
    a.env.reset().unwrap();
    b.env.reset().unwrap();
    assert!(a.food.current() != b.food.current() || a.poison.current() != b.poison.current());
}
