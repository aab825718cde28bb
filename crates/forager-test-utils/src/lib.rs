//! Reusable test fixtures for the Forager workspace.
//!
//! Headless substitutes for the collaborator ports:
//!
//! - [`KinematicBody`] — Euler-integrating rigid body with no collision
//!   resolution.
//! - [`SharedBody`] / [`SharedAnchor`] — handle types over shared state,
//!   so a harness can observe and perturb what the environment owns.
//! - [`RecordingSink`] — records episode boundary notifications.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{KinematicBody, RecordingSink, SharedAnchor, SharedBody};
