//! Per-agent sampled pose.

use office_core::Vec3;

/// What the renderer needs to draw one agent this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovementSample {
    pub position: Vec3,

    /// Facing around the vertical axis: 0 faces `+z`, `π/2` faces `+x`.
    pub rotation_y: f32,

    /// `true` while the walk cycle should play.
    pub is_moving: bool,

    /// Fraction of the path walked, in `[0.0, 1.0]`.
    pub progress: f32,
}

impl MovementSample {
    /// A finished pose at `position`.
    #[inline]
    pub fn at_rest(position: Vec3, rotation_y: f32) -> Self {
        Self { position, rotation_y, is_moving: false, progress: 1.0 }
    }
}
