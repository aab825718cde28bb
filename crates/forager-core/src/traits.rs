//! Collaborator port traits.
//!
//! The environment never owns position or velocity storage directly: it
//! operates on the simulation through these narrow, object-safe ports.
//! The host wires in its physics engine; tests substitute the headless
//! fixtures from `forager-test-utils`.

use crate::id::EpisodeId;
use crate::vec3::Vec3;

/// The agent's rigid body, owned by the physics collaborator.
///
/// `apply_impulse` is an instantaneous velocity change; the collaborator
/// is responsible for resolving forces and collisions. `integrate`
/// advances the body's motion by one tick — in a host engine this is
/// where the physics step runs, while the headless test body performs
/// plain Euler integration.
pub trait PhysicsBody {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Current world-space velocity.
    fn velocity(&self) -> Vec3;

    /// Teleport the body. Used only at episode reset.
    fn set_position(&mut self, position: Vec3);

    /// Replace the body's velocity (also zeroes any derived motion the
    /// collaborator tracks, e.g. angular velocity).
    fn set_velocity(&mut self, velocity: Vec3);

    /// Apply an instantaneous velocity change of `direction * magnitude`.
    fn apply_impulse(&mut self, direction: Vec3, magnitude: f32);

    /// Clamp the body's speed to at most `max_speed`.
    fn clamp_speed(&mut self, max_speed: f32);

    /// Advance the body's motion by `dt` seconds.
    fn integrate(&mut self, dt: f32);
}

/// A relocatable entity transform (food or poison), owned by the host
/// scene but repositioned by the environment on reset and on contact.
pub trait EntityAnchor {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Relocate the entity.
    fn set_position(&mut self, position: Vec3);
}

/// Receiver for episode boundary notifications.
///
/// `episode_started` fires after a reset has fully completed (new random
/// entity positions, zeroed counters); `episode_ended` fires exactly once
/// per episode, on step-limit expiry or hazard contact.
pub trait EpisodeSink {
    /// A new episode began.
    fn episode_started(&mut self, episode: EpisodeId);

    /// The episode terminated with the given total accumulated reward.
    fn episode_ended(&mut self, episode: EpisodeId, total_reward: f32);
}
