//! Fixed-width observation encoding.
//!
//! The policy consumes a flat tensor of [`OBS_LEN`] scalars per tick:
//! six 3-float triples in a fixed order that must match across the
//! training and inference paths. Positions are normalized by the spawn
//! half-extent, velocity by the speed cap; the two direction triples are
//! world-space unit vectors and are not rescaled.
//!
//! | Slice    | Contents                          |
//! |----------|-----------------------------------|
//! | `0..3`   | agent position / half_extent      |
//! | `3..6`   | food position / half_extent       |
//! | `6..9`   | poison position / half_extent     |
//! | `9..12`  | agent velocity / speed_cap        |
//! | `12..15` | unit vector agent → food          |
//! | `15..18` | unit vector agent → poison        |
//!
//! There is no zero-vector fallback for missing entities: encoding is
//! only reachable once the episode manager has verified both anchors,
//! so the tensor width is guaranteed on every path.

use crate::config::EnvConfig;
use forager_core::Vec3;

/// Width of the observation tensor.
pub const OBS_LEN: usize = 18;

/// One tick's observation: a fixed-order tensor of [`OBS_LEN`] scalars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation([f32; OBS_LEN]);

impl Observation {
    /// The tensor as a flat slice, in encoding order.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The tensor as a fixed-size array.
    pub fn to_array(self) -> [f32; OBS_LEN] {
        self.0
    }
}

impl AsRef<[f32]> for Observation {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

/// Encode the perception tensor from current world state.
///
/// Pure function of its inputs: calling it twice with unchanged state
/// yields identical tensors.
pub fn encode(
    agent_position: Vec3,
    food_position: Vec3,
    poison_position: Vec3,
    velocity: Vec3,
    config: &EnvConfig,
) -> Observation {
    let mut out = [0.0f32; OBS_LEN];

    let pos_norm = config.spawn_half_extent;
    write_triple(&mut out, 0, agent_position / pos_norm);
    write_triple(&mut out, 3, food_position / pos_norm);
    write_triple(&mut out, 6, poison_position / pos_norm);
    write_triple(&mut out, 9, velocity / config.speed_cap);
    write_triple(
        &mut out,
        12,
        (food_position - agent_position).normalized_or_zero(),
    );
    write_triple(
        &mut out,
        15,
        (poison_position - agent_position).normalized_or_zero(),
    );

    Observation(out)
}

fn write_triple(out: &mut [f32; OBS_LEN], offset: usize, v: Vec3) {
    out[offset] = v.x;
    out[offset + 1] = v.y;
    out[offset + 2] = v.z;
}
