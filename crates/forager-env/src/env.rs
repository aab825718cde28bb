//! The foraging environment: episode lifecycle, tick sequencing, and
//! contact handling composed over the collaborator ports.
//!
//! [`ForagerEnv`] is `Send` (can be moved into a training thread) as
//! long as its boxed ports are; all mutating methods take `&mut self`,
//! so one outstanding tick at a time is enforced by the borrow checker.

use forager_core::{
    Action, ContactEvent, ContactTag, EntityAnchor, EpisodeId, EpisodeSink, PhysicsBody,
    ResetError, StepError, TickId, Vec3,
};
use tracing::{debug, trace, warn};

use crate::config::EnvConfig;
use crate::contact::{ContactBatch, ContactQueue};
use crate::observation::{self, Observation};
use crate::reward::RewardShaper;
use crate::spawn::SpawnSampler;

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`ForagerEnv::step()`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Observation of the post-tick world state.
    pub observation: Observation,
    /// This tick's reward: shaping terms plus any contact rewards.
    pub reward: f32,
    /// True when the episode terminated on this tick (step limit or
    /// hazard contact). The host must call [`ForagerEnv::reset()`]
    /// before the next step is accepted.
    pub done: bool,
    /// Contact events processed during this tick, in arrival order.
    pub contacts: ContactBatch,
}

// ── ForagerEnv ──────────────────────────────────────────────────

/// Single-agent foraging environment.
///
/// Created from an [`EnvConfig`] and a physics body port; food and
/// poison anchors are attached separately (they are owned by the host
/// scene). The environment is inert until the first successful
/// [`reset()`](ForagerEnv::reset) — per-tick operations return
/// [`StepError::NotReady`] until then.
///
/// # Example
///
/// ```ignore
/// let mut env = ForagerEnv::new(EnvConfig::default(), body)?;
/// env.attach_food(food);
/// env.attach_poison(poison);
/// let mut obs = env.reset()?;
/// loop {
///     let result = env.step(policy.act(&obs))?;
///     obs = result.observation;
///     if result.done {
///         obs = env.reset()?;
///     }
/// }
/// ```
pub struct ForagerEnv {
    config: EnvConfig,
    body: Box<dyn PhysicsBody>,
    food: Option<Box<dyn EntityAnchor>>,
    poison: Option<Box<dyn EntityAnchor>>,
    sink: Option<Box<dyn EpisodeSink>>,
    sampler: SpawnSampler,
    shaper: RewardShaper,
    contacts: ContactQueue,
    tick: TickId,
    episode: EpisodeId,
    step_count: u32,
    episode_return: f32,
    done: bool,
    ready: bool,
}

impl ForagerEnv {
    /// Create an environment over a physics body port.
    ///
    /// Validates the configuration and seeds the relocation RNG.
    /// The environment is inert until anchors are attached and
    /// [`reset()`](ForagerEnv::reset) succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`forager_core::ConfigError`] if the configuration fails
    /// structural validation.
    pub fn new(
        config: EnvConfig,
        body: Box<dyn PhysicsBody>,
    ) -> Result<Self, forager_core::ConfigError> {
        config.validate()?;
        let sampler = SpawnSampler::from_config(&config);
        let shaper = RewardShaper::new(&config);
        Ok(Self {
            config,
            body,
            food: None,
            poison: None,
            sink: None,
            sampler,
            shaper,
            contacts: ContactQueue::new(),
            tick: TickId(0),
            episode: EpisodeId(0),
            step_count: 0,
            episode_return: 0.0,
            done: false,
            ready: false,
        })
    }

    /// Attach the food entity anchor.
    pub fn attach_food(&mut self, anchor: Box<dyn EntityAnchor>) {
        self.food = Some(anchor);
    }

    /// Attach the poison entity anchor.
    pub fn attach_poison(&mut self, anchor: Box<dyn EntityAnchor>) {
        self.poison = Some(anchor);
    }

    /// Attach an episode boundary sink.
    pub fn set_sink(&mut self, sink: Box<dyn EpisodeSink>) {
        self.sink = Some(sink);
    }

    // ── Episode lifecycle ────────────────────────────────────

    /// Start a new episode.
    ///
    /// Zeroes the body's velocity, teleports the agent to the canonical
    /// spawn, relocates food and poison to independent uniform positions,
    /// rebases the distance memory, zeroes counters, fires
    /// `episode_started`, and returns the initial observation. The reset
    /// fully completes before the first tick of the new episode is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] if either entity anchor is missing. The
    /// failure is logged and the environment degrades to inert: per-tick
    /// operations return [`StepError::NotReady`] until a reset succeeds.
    pub fn reset(&mut self) -> Result<Observation, ResetError> {
        if self.food.is_none() || self.poison.is_none() {
            warn!(
                food_attached = self.food.is_some(),
                poison_attached = self.poison.is_some(),
                "missing entity anchors; environment is inert until both are attached"
            );
            self.ready = false;
            return Err(if self.food.is_none() {
                ResetError::MissingFood
            } else {
                ResetError::MissingPoison
            });
        }

        self.body.set_velocity(Vec3::ZERO);
        self.body.set_position(self.config.agent_spawn);

        let food_position = self.sampler.sample();
        let poison_position = self.sampler.sample();
        if let Some(food) = self.food.as_mut() {
            food.set_position(food_position);
        }
        if let Some(poison) = self.poison.as_mut() {
            poison.set_position(poison_position);
        }

        let agent = self.body.position();
        self.shaper
            .rebase(agent.distance(food_position), agent.distance(poison_position));

        self.contacts.clear();
        self.tick = TickId(0);
        self.step_count = 0;
        self.episode_return = 0.0;
        self.done = false;
        self.ready = true;
        self.episode = EpisodeId(self.episode.0 + 1);

        debug!(
            episode = %self.episode,
            %food_position,
            %poison_position,
            "episode started: agent reset, entities repositioned"
        );
        if let Some(sink) = self.sink.as_mut() {
            sink.episode_started(self.episode);
        }

        // Both anchors were verified above; encode directly from the
        // freshly placed state.
        Ok(observation::encode(
            agent,
            food_position,
            poison_position,
            Vec3::ZERO,
            &self.config,
        ))
    }

    /// Execute one tick.
    ///
    /// Applies the decoded action through the physics port, integrates
    /// motion, computes the shaping reward against the previous tick's
    /// distances, drains pending contact events (bonuses, relocations,
    /// termination), runs the step-limit check, and returns the post-tick
    /// observation bundle.
    ///
    /// # Errors
    ///
    /// [`StepError::NotReady`] before the first successful reset,
    /// [`StepError::EpisodeOver`] after termination until the host resets.
    pub fn step(&mut self, action: Action) -> Result<StepResult, StepError> {
        if !self.ready {
            return Err(StepError::NotReady);
        }
        if self.done {
            return Err(StepError::EpisodeOver);
        }

        self.tick = TickId(self.tick.0 + 1);

        // Action → motion. The speed clamp is the physics collaborator's
        // contract; the environment only requests it.
        self.body
            .apply_impulse(action.direction(), self.config.force_magnitude);
        self.body.clamp_speed(self.config.speed_cap);
        self.body.integrate(self.config.dt);

        // Shaping reads distances as settled by integration, before any
        // contact relocation applies; relocations refresh the memory
        // below instead of flowing through the delta.
        let agent = self.body.position();
        let food_position = self
            .food
            .as_ref()
            .map(|a| a.position())
            .ok_or(StepError::NotReady)?;
        let poison_position = self
            .poison
            .as_ref()
            .map(|a| a.position())
            .ok_or(StepError::NotReady)?;
        let food_distance = agent.distance(food_position);
        let poison_distance = agent.distance(poison_position);
        let terms = self.shaper.shape(food_distance, poison_distance);
        let mut reward = terms.total();

        // Contact drain: each event applies its own reward delta, in
        // arrival order.
        let events = self.contacts.drain();
        for event in &events {
            reward += self.handle_contact(event);
        }

        // Step limit — skipped when a hazard already ended the episode,
        // so the limit penalty never stacks onto a poison termination.
        if !self.done {
            self.step_count += 1;
            if self.step_count > self.config.step_limit {
                reward += self.config.step_limit_penalty;
                self.done = true;
                debug!(
                    episode = %self.episode,
                    steps = self.step_count,
                    "episode ended: step limit exceeded"
                );
            }
        }

        self.episode_return += reward;

        if self.done {
            debug!(
                episode = %self.episode,
                total_reward = self.episode_return,
                "episode ended"
            );
            if let Some(sink) = self.sink.as_mut() {
                sink.episode_ended(self.episode, self.episode_return);
            }
        }

        trace!(
            tick = %self.tick,
            %action,
            reward,
            total = self.episode_return,
            "step"
        );

        Ok(StepResult {
            observation: self.observe()?,
            reward,
            done: self.done,
            contacts: events,
        })
    }

    /// Apply one contact event; returns its reward delta.
    fn handle_contact(&mut self, event: &ContactEvent) -> f32 {
        match event.tag {
            ContactTag::Food => {
                let new_position = self.sampler.sample();
                if let Some(food) = self.food.as_mut() {
                    food.set_position(new_position);
                }
                self.shaper
                    .refresh_food(self.body.position().distance(new_position));
                debug!(tick = %self.tick, %new_position, "food eaten, relocated");
                self.config.food_bonus
            }
            ContactTag::Poison => {
                let new_position = self.sampler.sample();
                if let Some(poison) = self.poison.as_mut() {
                    poison.set_position(new_position);
                }
                self.shaper
                    .refresh_poison(self.body.position().distance(new_position));
                self.done = true;
                debug!(tick = %self.tick, "poison hit, episode terminating");
                self.config.poison_penalty
            }
            ContactTag::Wall => {
                let bounced = self.body.velocity() * self.config.wall_bounce;
                self.body.set_velocity(bounced);
                trace!(tick = %self.tick, "wall hit, bounce applied");
                self.config.wall_penalty
            }
        }
    }

    // ── Collision feed ───────────────────────────────────────

    /// Report a contact from the collision feed.
    ///
    /// Events accumulate in arrival order and are processed during the
    /// next [`step()`](ForagerEnv::step). Events reported after
    /// termination are discarded at the episode boundary.
    pub fn notify_contact(&mut self, tag: ContactTag) {
        self.contacts.push(ContactEvent {
            tag,
            tick: self.tick,
        });
    }

    // ── Observation ──────────────────────────────────────────

    /// Encode the current observation tensor.
    ///
    /// Pure read: calling this twice with no intervening state change
    /// yields identical tensors.
    ///
    /// # Errors
    ///
    /// [`StepError::NotReady`] when the environment is inert (encoding
    /// is never silently padded; the fixed tensor width is only
    /// guaranteed when both anchors are attached).
    pub fn observe(&self) -> Result<Observation, StepError> {
        let food = self
            .food
            .as_ref()
            .map(|a| a.position())
            .ok_or(StepError::NotReady)?;
        let poison = self
            .poison
            .as_ref()
            .map(|a| a.position())
            .ok_or(StepError::NotReady)?;
        Ok(observation::encode(
            self.body.position(),
            food,
            poison,
            self.body.velocity(),
            &self.config,
        ))
    }

    // ── Accessors ────────────────────────────────────────────

    /// The environment configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Current tick within the episode (0 after reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Current episode (0 before the first successful reset).
    pub fn current_episode(&self) -> EpisodeId {
        self.episode
    }

    /// Steps taken in the current episode.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Reward accumulated over the current episode.
    pub fn episode_return(&self) -> f32 {
        self.episode_return
    }

    /// True when the episode has terminated and a reset is required.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// True once a reset has succeeded and ticks are accepted.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The agent's current position, read through the physics port.
    pub fn agent_position(&self) -> Vec3 {
        self.body.position()
    }

    /// The agent's current velocity, read through the physics port.
    pub fn agent_velocity(&self) -> Vec3 {
        self.body.velocity()
    }

    /// The food entity's position, if attached.
    pub fn food_position(&self) -> Option<Vec3> {
        self.food.as_ref().map(|a| a.position())
    }

    /// The poison entity's position, if attached.
    pub fn poison_position(&self) -> Option<Vec3> {
        self.poison.as_ref().map(|a| a.position())
    }

    /// Number of contact events awaiting the next tick.
    pub fn pending_contacts(&self) -> usize {
        self.contacts.len()
    }
}

impl std::fmt::Debug for ForagerEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForagerEnv")
            .field("episode", &self.episode)
            .field("tick", &self.tick)
            .field("step_count", &self.step_count)
            .field("episode_return", &self.episode_return)
            .field("done", &self.done)
            .field("ready", &self.ready)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forager_test_utils::{SharedAnchor, SharedBody};

    fn ready_env() -> ForagerEnv {
        let body = SharedBody::at(Vec3::new(0.0, 1.0, 0.0));
        let mut env = ForagerEnv::new(EnvConfig::default(), Box::new(body)).unwrap();
        env.attach_food(Box::new(SharedAnchor::at(Vec3::new(2.0, 1.0, 2.0))));
        env.attach_poison(Box::new(SharedAnchor::at(Vec3::new(-2.0, 1.0, -2.0))));
        env
    }

    #[test]
    fn new_env_is_inert_until_reset() {
        let mut env = ready_env();
        assert!(!env.is_ready());
        assert!(matches!(env.step(Action::Forward), Err(StepError::NotReady)));
        assert!(env.observe().is_ok(), "anchors attached, observe works");
        env.reset().unwrap();
        assert!(env.is_ready());
    }

    #[test]
    fn reset_without_anchors_degrades_to_inert() {
        let body = SharedBody::at(Vec3::ZERO);
        let mut env = ForagerEnv::new(EnvConfig::default(), Box::new(body)).unwrap();
        assert_eq!(env.reset(), Err(ResetError::MissingFood));
        assert!(!env.is_ready());
        assert!(matches!(env.step(Action::Stay), Err(StepError::NotReady)));
        assert_eq!(env.observe(), Err(StepError::NotReady));
    }

    #[test]
    fn missing_poison_is_reported_distinctly() {
        let body = SharedBody::at(Vec3::ZERO);
        let mut env = ForagerEnv::new(EnvConfig::default(), Box::new(body)).unwrap();
        env.attach_food(Box::new(SharedAnchor::at(Vec3::ZERO)));
        assert_eq!(env.reset(), Err(ResetError::MissingPoison));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let body = SharedBody::at(Vec3::ZERO);
        let config = EnvConfig {
            step_limit: 0,
            ..Default::default()
        };
        assert!(ForagerEnv::new(config, Box::new(body)).is_err());
    }

    #[test]
    fn notify_contact_queues_until_step() {
        let mut env = ready_env();
        env.reset().unwrap();
        env.notify_contact(ContactTag::Wall);
        env.notify_contact(ContactTag::Wall);
        assert_eq!(env.pending_contacts(), 2);
        let result = env.step(Action::Stay).unwrap();
        assert_eq!(result.contacts.len(), 2);
        assert_eq!(env.pending_contacts(), 0);
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let env = ready_env();
        let debug = format!("{env:?}");
        assert!(debug.contains("ForagerEnv"));
        assert!(debug.contains("episode"));
    }
}
