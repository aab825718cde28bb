//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing tick counter within an episode.
///
/// Incremented each time the environment advances one step; reset to 0
/// at every episode boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing episode counter.
///
/// Incremented on every successful reset. Episode 0 never exists: the
/// first valid reset produces episode 1, so a zero value always means
/// "no episode has started".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeId(pub u64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EpisodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_and_display() {
        assert!(TickId(2) > TickId(1));
        assert!(EpisodeId(5) > EpisodeId(4));
        assert_eq!(TickId(7).to_string(), "7");
        assert_eq!(EpisodeId(3).to_string(), "3");
    }
}
