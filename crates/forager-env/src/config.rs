//! Environment configuration and validation.
//!
//! [`EnvConfig`] carries every policy constant in one place. The numeric
//! defaults are the tuned values the shaping scheme converges under;
//! [`validate()`](EnvConfig::validate) checks structural invariants at
//! construction time so the step loop never has to.

use forager_core::{ConfigError, Vec3};

/// All tunable constants for the foraging environment.
///
/// Reward-valued fields (`food_bonus`, penalties) carry their sign:
/// penalties are stored negative and added, never subtracted.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// Episode terminates once the step count exceeds this. Default: 300.
    pub step_limit: u32,
    /// Reward added on food contact. Default: +3.
    pub food_bonus: f32,
    /// Reward added on poison contact (negative). Default: −3.
    pub poison_penalty: f32,
    /// Reward added on wall contact (negative). Default: −0.5.
    pub wall_penalty: f32,
    /// Reward added when the step limit expires (negative). Default: −0.5.
    pub step_limit_penalty: f32,
    /// Reward added every tick (negative time pressure). Default: −0.002.
    pub time_penalty: f32,
    /// Scale applied to the food distance delta. Default: 0.3.
    pub food_scale: f32,
    /// Clamp range `(lo, hi)` for the food shaping term.
    /// Default: (−0.03, 0.3).
    pub food_clamp: (f32, f32),
    /// Scale applied to the poison distance delta. Default: 0.15.
    pub poison_scale: f32,
    /// Clamp range `(lo, hi)` for the poison shaping term.
    /// Default: (−0.03, 0.15).
    pub poison_clamp: (f32, f32),
    /// Canonical agent spawn point. Default: (0, 1, 0).
    pub agent_spawn: Vec3,
    /// Entities spawn uniformly in `[−h, h]` on X and Z. Default: 4.
    pub spawn_half_extent: f32,
    /// Fixed Y height for entity spawns. Default: 1.
    pub spawn_height: f32,
    /// Maximum agent speed, enforced through the physics port. Default: 5.
    pub speed_cap: f32,
    /// Impulse magnitude applied per movement action. Default: 5.
    pub force_magnitude: f32,
    /// Velocity multiplier applied on wall contact (bounce-back).
    /// Default: −0.5.
    pub wall_bounce: f32,
    /// Integration timestep handed to the physics port, in seconds.
    /// Default: 0.02.
    pub dt: f32,
    /// Seed for the entity relocation RNG. Identical seeds produce
    /// identical spawn sequences.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            step_limit: 300,
            food_bonus: 3.0,
            poison_penalty: -3.0,
            wall_penalty: -0.5,
            step_limit_penalty: -0.5,
            time_penalty: -0.002,
            food_scale: 0.3,
            food_clamp: (-0.03, 0.3),
            poison_scale: 0.15,
            poison_clamp: (-0.03, 0.15),
            agent_spawn: Vec3::new(0.0, 1.0, 0.0),
            spawn_half_extent: 4.0,
            spawn_height: 1.0,
            speed_cap: 5.0,
            force_magnitude: 5.0,
            wall_bounce: -0.5,
            dt: 0.02,
            seed: 42,
        }
    }
}

impl EnvConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: zero step limit, non-finite
    /// constants, non-positive scales/bounds/timestep, or inverted clamp
    /// ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_limit == 0 {
            return Err(ConfigError::StepLimitZero);
        }

        let finite_fields = [
            ("food_bonus", self.food_bonus),
            ("poison_penalty", self.poison_penalty),
            ("wall_penalty", self.wall_penalty),
            ("step_limit_penalty", self.step_limit_penalty),
            ("time_penalty", self.time_penalty),
            ("food_scale", self.food_scale),
            ("poison_scale", self.poison_scale),
            ("wall_bounce", self.wall_bounce),
            ("food_clamp.lo", self.food_clamp.0),
            ("food_clamp.hi", self.food_clamp.1),
            ("poison_clamp.lo", self.poison_clamp.0),
            ("poison_clamp.hi", self.poison_clamp.1),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if !self.agent_spawn.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "agent_spawn",
                value: f32::NAN,
            });
        }

        let positive_fields = [
            ("spawn_half_extent", self.spawn_half_extent),
            ("speed_cap", self.speed_cap),
            ("force_magnitude", self.force_magnitude),
            ("dt", self.dt),
        ];
        for (name, value) in positive_fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !self.spawn_height.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "spawn_height",
                value: self.spawn_height,
            });
        }

        if self.food_clamp.0 > self.food_clamp.1 {
            return Err(ConfigError::InvalidClamp {
                name: "food_clamp",
                lo: self.food_clamp.0,
                hi: self.food_clamp.1,
            });
        }
        if self.poison_clamp.0 > self.poison_clamp.1 {
            return Err(ConfigError::InvalidClamp {
                name: "poison_clamp",
                lo: self.poison_clamp.0,
                hi: self.poison_clamp.1,
            });
        }

        Ok(())
    }
}
