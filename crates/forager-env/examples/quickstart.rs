//! Forager Quickstart — a complete, minimal training-loop harness.
//!
//! Demonstrates:
//!   1. Wiring headless collaborators into the environment
//!   2. Resetting and stepping with a scripted random policy
//!   3. Feeding the collision channel from simple overlap checks
//!   4. Reading episode totals from the boundary sink
//!
//! Run with:
//!   cargo run --example quickstart

use forager_core::{Action, ContactTag, Vec3};
use forager_env::{EnvConfig, ForagerEnv};
use forager_test_utils::{RecordingSink, SharedAnchor, SharedBody};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ─── Harness parameters ─────────────────────────────────────────

/// Overlap radius standing in for the collision volumes a host engine
/// would provide.
const CONTACT_RADIUS: f32 = 0.5;

/// Walls of the arena (the spawn square plus a margin).
const WALL_EXTENT: f32 = 4.5;

const EPISODES: u32 = 5;

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Forager Quickstart ===\n");

    // 1. Headless collaborators. Keep handle clones so the harness can
    //    run its own overlap checks against the state the env owns.
    let config = EnvConfig::default();
    let body = SharedBody::at(config.agent_spawn);
    let food = SharedAnchor::at(Vec3::ZERO);
    let poison = SharedAnchor::at(Vec3::ZERO);
    let sink = RecordingSink::new();

    let mut env = ForagerEnv::new(config, Box::new(body.clone()))?;
    env.attach_food(Box::new(food.clone()));
    env.attach_poison(Box::new(poison.clone()));
    env.set_sink(Box::new(sink.clone()));

    // 2. A stand-in policy: uniform random actions. A real trainer
    //    would consume result.observation here.
    let mut rng = StdRng::seed_from_u64(7);

    let mut episode_steps = Vec::new();
    for _ in 0..EPISODES {
        env.reset()?;

        loop {
            let action = Action::from_index(rng.random_range(0..5u32));
            let result = env.step(action)?;

            // 3. Collision feed: report overlaps for the next tick,
            //    the way a physics engine's trigger volumes would.
            let agent = body.snapshot().position;
            if agent.distance(food.current()) < CONTACT_RADIUS {
                env.notify_contact(ContactTag::Food);
            }
            if agent.distance(poison.current()) < CONTACT_RADIUS {
                env.notify_contact(ContactTag::Poison);
            }
            if agent.x.abs() > WALL_EXTENT || agent.z.abs() > WALL_EXTENT {
                env.notify_contact(ContactTag::Wall);
            }

            if result.done {
                episode_steps.push(env.step_count());
                break;
            }
        }
    }

    // 4. Episode totals from the sink.
    println!("episode  steps  total reward");
    for ((episode, total), steps) in sink.ended().into_iter().zip(&episode_steps) {
        println!("  {episode:>5}  {steps:>5}  {total:>12.4}");
    }
    let returns: Vec<f32> = sink.ended().iter().map(|&(_, r)| r).collect();
    let mean = returns.iter().sum::<f32>() / returns.len() as f32;
    println!("\nmean return over {EPISODES} random episodes: {mean:.4}");

    Ok(())
}
