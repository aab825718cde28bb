//! Potential-based reward shaping over distance deltas.
//!
//! Reward is proportional to the *change* in distance since the previous
//! tick, not the distance itself, and each term is clamped so no single
//! tick can dominate the return. Approaching food is weighted twice as
//! strongly as retreating from poison (0.3 vs 0.15 scale), which biases
//! the learned policy toward seeking over fleeing.

use crate::config::EnvConfig;

/// Breakdown of one tick's shaping reward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapingTerms {
    /// Clamped food-approach term.
    pub food: f32,
    /// Clamped poison-retreat term.
    pub poison: f32,
    /// Fixed per-tick time pressure (negative).
    pub time: f32,
}

impl ShapingTerms {
    /// Sum of all terms: the tick's shaping reward.
    pub fn total(&self) -> f32 {
        self.food + self.poison + self.time
    }
}

/// Per-tick reward shaper with a one-tick distance lookback.
///
/// The distance memory always equals the Euclidean distances computed at
/// the end of the prior tick. [`rebase`](RewardShaper::rebase) restarts
/// it at episode boundaries; [`refresh_food`](RewardShaper::refresh_food)
/// / [`refresh_poison`](RewardShaper::refresh_poison) restart one side
/// after a contact relocation so the jump never reads as movement.
#[derive(Clone, Debug)]
pub struct RewardShaper {
    food_scale: f32,
    food_clamp: (f32, f32),
    poison_scale: f32,
    poison_clamp: (f32, f32),
    time_penalty: f32,
    prev_food_distance: f32,
    prev_poison_distance: f32,
}

impl RewardShaper {
    /// Create a shaper from the environment configuration.
    ///
    /// Distance memory starts at zero; callers must
    /// [`rebase`](RewardShaper::rebase) before the first
    /// [`shape`](RewardShaper::shape).
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            food_scale: config.food_scale,
            food_clamp: config.food_clamp,
            poison_scale: config.poison_scale,
            poison_clamp: config.poison_clamp,
            time_penalty: config.time_penalty,
            prev_food_distance: 0.0,
            prev_poison_distance: 0.0,
        }
    }

    /// Reset the distance memory to freshly computed distances.
    pub fn rebase(&mut self, food_distance: f32, poison_distance: f32) {
        self.prev_food_distance = food_distance;
        self.prev_poison_distance = poison_distance;
    }

    /// Replace the food side of the memory after a relocation.
    pub fn refresh_food(&mut self, distance: f32) {
        self.prev_food_distance = distance;
    }

    /// Replace the poison side of the memory after a relocation.
    pub fn refresh_poison(&mut self, distance: f32) {
        self.prev_poison_distance = distance;
    }

    /// Compute the tick's shaping terms and advance the memory.
    ///
    /// Food term: positive when the agent moved closer. Poison term:
    /// positive when the agent moved farther away. Both clamped to their
    /// configured ranges.
    pub fn shape(&mut self, food_distance: f32, poison_distance: f32) -> ShapingTerms {
        let food_delta = self.prev_food_distance - food_distance;
        let food = (food_delta * self.food_scale).clamp(self.food_clamp.0, self.food_clamp.1);

        let poison_delta = poison_distance - self.prev_poison_distance;
        let poison =
            (poison_delta * self.poison_scale).clamp(self.poison_clamp.0, self.poison_clamp.1);

        self.prev_food_distance = food_distance;
        self.prev_poison_distance = poison_distance;

        ShapingTerms {
            food,
            poison,
            time: self.time_penalty,
        }
    }

    /// Distance to food recorded at the end of the prior tick.
    pub fn previous_food_distance(&self) -> f32 {
        self.prev_food_distance
    }

    /// Distance to poison recorded at the end of the prior tick.
    pub fn previous_poison_distance(&self) -> f32 {
        self.prev_poison_distance
    }
}
