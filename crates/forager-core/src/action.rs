//! Discrete action vocabulary and the action-to-direction mapping.
//!
//! The policy emits one index in `{0, 1, 2, 3, 4}` per tick. Decoding is
//! permissive: any index outside that set maps to [`Action::Stay`]
//! rather than signaling an error, so a misbehaving policy degrades to
//! "no movement" instead of crashing the loop.

use crate::vec3::Vec3;
use std::fmt;

/// Discrete movement command for one tick.
///
/// The numeric values are the wire protocol with the policy side and
/// must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Action {
    /// Move forward (+Z).
    Forward = 0,
    /// Move backward (−Z).
    Back = 1,
    /// Move left (−X).
    Left = 2,
    /// Move right (+X).
    Right = 3,
    /// No movement.
    Stay = 4,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 5;

    /// All actions in index order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Forward,
        Action::Back,
        Action::Left,
        Action::Right,
        Action::Stay,
    ];

    /// Decode a discrete action index.
    ///
    /// Indices outside `0..=4` decode to [`Action::Stay`].
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Action::Forward,
            1 => Action::Back,
            2 => Action::Left,
            3 => Action::Right,
            _ => Action::Stay,
        }
    }

    /// The index this action encodes to.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The unit movement direction for this action.
    ///
    /// [`Action::Stay`] maps to the zero vector.
    pub fn direction(self) -> Vec3 {
        match self {
            Action::Forward => Vec3::FORWARD,
            Action::Back => Vec3::BACK,
            Action::Left => Vec3::LEFT,
            Action::Right => Vec3::RIGHT,
            Action::Stay => Vec3::ZERO,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Forward => "forward",
            Action::Back => "back",
            Action::Left => "left",
            Action::Right => "right",
            Action::Stay => "stay",
        };
        write!(f, "{name}")
    }
}
