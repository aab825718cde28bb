//! Contact events reported by the collision feed.
//!
//! The host's collision detection (outside this crate) reports overlaps
//! between the agent's volume and tagged entities. Events are staged in
//! a queue and drained synchronously once per tick by the environment,
//! preserving arrival order.

use crate::id::TickId;
use std::fmt;

/// What the agent's collision volume overlapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactTag {
    /// The food entity (attractor).
    Food,
    /// The poison entity (hazard).
    Poison,
    /// An arena wall.
    Wall,
}

impl fmt::Display for ContactTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactTag::Food => "food",
            ContactTag::Poison => "poison",
            ContactTag::Wall => "wall",
        };
        write!(f, "{name}")
    }
}

/// A single contact notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEvent {
    /// What was contacted.
    pub tag: ContactTag,
    /// The tick during which the overlap was reported.
    pub tick: TickId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display_names() {
        assert_eq!(ContactTag::Food.to_string(), "food");
        assert_eq!(ContactTag::Poison.to_string(), "poison");
        assert_eq!(ContactTag::Wall.to_string(), "wall");
    }
}
