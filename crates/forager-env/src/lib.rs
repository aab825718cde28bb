//! Single-agent foraging environment for reinforcement-learning loops.
//!
//! [`ForagerEnv`] is the user-facing API: a continuous XZ-plane world
//! with one attractor (food) and one hazard (poison). Each call to
//! [`step()`](ForagerEnv::step) applies a discrete movement action
//! through the physics port, drains pending contact events, computes the
//! shaped reward from distance deltas, and returns an observation bundle
//! — the conventional `(observation, reward, done)` contract, callable
//! from any training loop.
//!
//! # Tick sequencing
//!
//! Within one `step()` call: decode action → impulse + speed clamp →
//! physics integration → reward shaping against the previous tick's
//! distances → contact drain (bonuses, relocations, termination) →
//! step-limit check → observation encoding. Contact events reported
//! between steps affect the tick in which they are drained.
//!
//! # Ownership model
//!
//! `ForagerEnv` owns its collaborator ports (boxed trait objects) and
//! all episode state. All mutating methods take `&mut self`; the host
//! scheduler guarantees one outstanding tick at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
pub mod env;
pub mod heuristic;
pub mod observation;
pub mod reward;
pub mod spawn;

pub use config::EnvConfig;
pub use contact::{ContactBatch, ContactQueue};
pub use env::{ForagerEnv, StepResult};
pub use heuristic::ManualKey;
pub use observation::{Observation, OBS_LEN};
pub use reward::{RewardShaper, ShapingTerms};
pub use spawn::SpawnSampler;
