//! Forager: a single-agent foraging environment for reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Forager sub-crates. For most users, adding `forager` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use forager::prelude::*;
//! use forager_test_utils::{SharedAnchor, SharedBody};
//!
//! // Headless collaborators (a host engine would wire in its own).
//! let body = SharedBody::at(Vec3::new(0.0, 1.0, 0.0));
//! let food = SharedAnchor::at(Vec3::ZERO);
//! let poison = SharedAnchor::at(Vec3::ZERO);
//!
//! let mut env = ForagerEnv::new(EnvConfig::default(), Box::new(body)).unwrap();
//! env.attach_food(Box::new(food));
//! env.attach_poison(Box::new(poison));
//!
//! let observation = env.reset().unwrap();
//! assert_eq!(observation.as_slice().len(), OBS_LEN);
//!
//! let result = env.step(Action::Forward).unwrap();
//! assert!(!result.done);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forager-core` | Vector math, IDs, actions, contacts, errors, port traits |
//! | [`env`] | `forager-env` | The environment, config, observation, reward shaping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and collaborator ports (`forager-core`).
///
/// Contains [`types::Vec3`], the [`types::Action`] vocabulary, contact
/// events, error types, and the fundamental port traits
/// ([`types::PhysicsBody`], [`types::EntityAnchor`],
/// [`types::EpisodeSink`]).
pub use forager_core as types;

/// The environment itself (`forager-env`).
///
/// [`env::ForagerEnv`] for the step/reset loop, [`env::EnvConfig`] for
/// the policy constants, plus observation encoding, reward shaping, and
/// the manual-override mapping.
pub use forager_env as env;

/// Common imports for typical Forager usage.
///
/// ```rust
/// use forager::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use forager_core::{
        Action, ContactEvent, ContactTag, EntityAnchor, EpisodeId, EpisodeSink, PhysicsBody,
        TickId, Vec3,
    };

    // Errors
    pub use forager_core::{ConfigError, ResetError, StepError};

    // Environment
    pub use forager_env::{
        EnvConfig, ForagerEnv, ManualKey, Observation, StepResult, OBS_LEN,
    };
}
