//! Manual-override action mapping for interactive testing.
//!
//! When no policy is wired in, a human can drive the agent with
//! arrow-key-equivalent input. The mapping targets the same 0–4 action
//! index space the policy uses, so the rest of the loop is unchanged.

use forager_core::Action;

/// Arrow-key-equivalent manual input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ManualKey {
    /// Up arrow → forward.
    Up,
    /// Down arrow → backward.
    Down,
    /// Left arrow → left.
    Left,
    /// Right arrow → right.
    Right,
}

impl From<ManualKey> for Action {
    fn from(key: ManualKey) -> Self {
        match key {
            ManualKey::Up => Action::Forward,
            ManualKey::Down => Action::Back,
            ManualKey::Left => Action::Left,
            ManualKey::Right => Action::Right,
        }
    }
}

/// Resolve the pressed-key set to one action.
///
/// With nothing pressed the agent stays put. When several keys are held
/// the later binding wins, in the fixed order Up, Down, Left, Right —
/// so Right overrides Left, which overrides the vertical keys.
pub fn action_for(pressed: &[ManualKey]) -> Action {
    let mut action = Action::Stay;
    for key in [
        ManualKey::Up,
        ManualKey::Down,
        ManualKey::Left,
        ManualKey::Right,
    ] {
        if pressed.contains(&key) {
            action = key.into();
        }
    }
    action
}
