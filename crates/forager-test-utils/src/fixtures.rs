//! Headless collaborator fixtures.
//!
//! The shared handle types use `Arc<Mutex<…>>` so a test harness can
//! keep a clone while the environment owns the boxed port. Lock
//! poisoning is tolerated (`into_inner` on the poisoned guard) — a
//! panicking test is already failing, and the fixtures should not
//! compound it.

use std::sync::{Arc, Mutex, MutexGuard};

use forager_core::{EntityAnchor, EpisodeId, EpisodeSink, PhysicsBody, Vec3};

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ── KinematicBody ───────────────────────────────────────────────

/// Headless rigid body: plain Euler integration, no collision response.
///
/// `apply_impulse` is an instantaneous velocity change, matching the
/// velocity-change force mode the environment assumes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicBody {
    /// World-space position.
    pub position: Vec3,
    /// World-space velocity.
    pub velocity: Vec3,
}

impl KinematicBody {
    /// Create a body at rest at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, direction: Vec3, magnitude: f32) {
        self.velocity += direction * magnitude;
    }

    fn clamp_speed(&mut self, max_speed: f32) {
        self.velocity = self.velocity.clamp_length(max_speed);
    }

    fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

// ── SharedBody ──────────────────────────────────────────────────

/// Cloneable handle over a [`KinematicBody`].
///
/// Box one clone into the environment; keep another in the harness to
/// inspect or teleport the agent mid-test.
#[derive(Clone, Debug, Default)]
pub struct SharedBody {
    inner: Arc<Mutex<KinematicBody>>,
}

impl SharedBody {
    /// Create a shared body at rest at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            inner: Arc::new(Mutex::new(KinematicBody::new(position))),
        }
    }

    /// Copy of the current body state.
    pub fn snapshot(&self) -> KinematicBody {
        *lock_or_recover(&self.inner)
    }

    /// Overwrite the body state (harness-side teleport).
    pub fn replace(&self, body: KinematicBody) {
        *lock_or_recover(&self.inner) = body;
    }
}

impl PhysicsBody for SharedBody {
    fn position(&self) -> Vec3 {
        lock_or_recover(&self.inner).position
    }

    fn velocity(&self) -> Vec3 {
        lock_or_recover(&self.inner).velocity
    }

    fn set_position(&mut self, position: Vec3) {
        lock_or_recover(&self.inner).position = position;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        lock_or_recover(&self.inner).velocity = velocity;
    }

    fn apply_impulse(&mut self, direction: Vec3, magnitude: f32) {
        lock_or_recover(&self.inner).apply_impulse(direction, magnitude);
    }

    fn clamp_speed(&mut self, max_speed: f32) {
        lock_or_recover(&self.inner).clamp_speed(max_speed);
    }

    fn integrate(&mut self, dt: f32) {
        lock_or_recover(&self.inner).integrate(dt);
    }
}

// ── SharedAnchor ────────────────────────────────────────────────

/// Cloneable handle over an entity position.
///
/// Box one clone into the environment as the food or poison anchor;
/// keep another in the harness to observe relocations.
#[derive(Clone, Debug, Default)]
pub struct SharedAnchor {
    inner: Arc<Mutex<Vec3>>,
}

impl SharedAnchor {
    /// Create an anchor at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            inner: Arc::new(Mutex::new(position)),
        }
    }

    /// The anchor's current position.
    pub fn current(&self) -> Vec3 {
        *lock_or_recover(&self.inner)
    }
}

impl EntityAnchor for SharedAnchor {
    fn position(&self) -> Vec3 {
        *lock_or_recover(&self.inner)
    }

    fn set_position(&mut self, position: Vec3) {
        *lock_or_recover(&self.inner) = position;
    }
}

// ── RecordingSink ───────────────────────────────────────────────

/// Episode sink that records every boundary notification.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    started: Arc<Mutex<Vec<EpisodeId>>>,
    ended: Arc<Mutex<Vec<(EpisodeId, f32)>>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All `episode_started` notifications, in order.
    pub fn started(&self) -> Vec<EpisodeId> {
        lock_or_recover(&self.started).clone()
    }

    /// All `episode_ended` notifications with their total rewards,
    /// in order.
    pub fn ended(&self) -> Vec<(EpisodeId, f32)> {
        lock_or_recover(&self.ended).clone()
    }
}

impl EpisodeSink for RecordingSink {
    fn episode_started(&mut self, episode: EpisodeId) {
        lock_or_recover(&self.started).push(episode);
    }

    fn episode_ended(&mut self, episode: EpisodeId, total_reward: f32) {
        lock_or_recover(&self.ended).push((episode, total_reward));
    }
}
