//! Error types for the Forager environment, organized by subsystem:
//! configuration validation, episode reset, and per-tick stepping.

use std::error::Error;
use std::fmt;

/// Errors detected while validating an environment configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The episode step limit is zero.
    StepLimitZero,
    /// A constant that must be finite is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// A constant that must be strictly positive is zero or negative.
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// A clamp range has its lower bound above its upper bound.
    InvalidClamp {
        /// Name of the offending clamp field.
        name: &'static str,
        /// Lower bound.
        lo: f32,
        /// Upper bound.
        hi: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepLimitZero => write!(f, "step_limit must be at least 1"),
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::InvalidClamp { name, lo, hi } => {
                write!(f, "{name} range is inverted: [{lo}, {hi}]")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from [`reset`](crate::traits::PhysicsBody)-time entity wiring.
///
/// The only recoverable runtime fault in the environment: a reset was
/// attempted before both entity anchors were attached. The environment
/// logs a diagnostic and stays inert until a valid reset succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetError {
    /// The food anchor is not attached.
    MissingFood,
    /// The poison anchor is not attached.
    MissingPoison,
}

impl fmt::Display for ResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFood => write!(f, "food anchor is not attached"),
            Self::MissingPoison => write!(f, "poison anchor is not attached"),
        }
    }
}

impl Error for ResetError {}

/// Errors from per-tick operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// No valid reset has completed; the environment is inert.
    NotReady,
    /// The episode has terminated; the host must call reset before the
    /// next tick is accepted.
    EpisodeOver,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "environment is inert until a valid reset"),
            Self::EpisodeOver => write!(f, "episode has ended; reset required"),
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_field() {
        let e = ConfigError::NonPositive {
            name: "speed_cap",
            value: -1.0,
        };
        assert!(e.to_string().contains("speed_cap"));

        let e = ConfigError::InvalidClamp {
            name: "food_clamp",
            lo: 0.3,
            hi: -0.03,
        };
        assert!(e.to_string().contains("food_clamp"));
    }
}
