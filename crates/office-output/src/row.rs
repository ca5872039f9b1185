//! Plain data rows written by trace backends.

use office_core::{AgentId, Vec3};
use office_mobility::MovementSample;

/// One walking agent's pose at a sampled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRow {
    pub frame:        u64,
    pub elapsed_secs: f64,
    pub agent_id:     AgentId,
    pub position:     Vec3,
    pub rotation_y:   f32,
    pub is_moving:    bool,
    pub progress:     f32,
}

impl PoseRow {
    pub fn new(frame: u64, elapsed_secs: f64, agent_id: AgentId, sample: &MovementSample) -> Self {
        Self {
            frame,
            elapsed_secs,
            agent_id,
            position:   sample.position,
            rotation_y: sample.rotation_y,
            is_moving:  sample.is_moving,
            progress:   sample.progress,
        }
    }
}

/// A walk that ended.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalRow {
    pub frame:    u64,
    pub agent_id: AgentId,
    pub position: Vec3,
}
