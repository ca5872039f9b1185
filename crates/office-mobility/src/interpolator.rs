//! Speed-based interpolation along a discrete path.
//!
//! # States
//!
//! An interpolator is **active** until the distance walked reaches the total
//! path length, then **finished**.  Finished is terminal: further updates
//! keep returning the end pose.
//!
//! Elapsed time and walked distance never decrease; negative or NaN deltas
//! are ignored and a zero delta returns the same sample as the previous call.

use office_core::Vec3;
use office_spatial::PathNode;

use crate::MovementSample;

pub struct PathInterpolator {
    nodes:           Vec<PathNode>,
    /// `segment_lengths[i]` is the distance from `nodes[i]` to `nodes[i+1]`.
    segment_lengths: Vec<f32>,
    total_length:    f32,
    /// Facing of the last segment with non-zero length.
    final_heading:   f32,
    speed:           f32,
    elapsed:         f32,
    finished:        bool,
}

impl PathInterpolator {
    /// Precompute segment lengths for `nodes` walked at `speed` units/second.
    ///
    /// A non-positive or non-finite speed produces an interpolator that is
    /// finished from the start.
    pub fn new(nodes: Vec<PathNode>, speed: f32) -> Self {
        let segment_lengths: Vec<f32> = nodes
            .windows(2)
            .map(|w| w[0].position().distance(w[1].position()))
            .collect();
        let total_length = segment_lengths.iter().sum();

        let final_heading = nodes
            .windows(2)
            .zip(&segment_lengths)
            .rev()
            .find(|&(_, &len)| len > 0.0)
            .map(|(w, _)| w[0].position().heading_to(w[1].position()))
            .unwrap_or(0.0);

        let finished = !(speed.is_finite() && speed > 0.0);

        Self {
            nodes,
            segment_lengths,
            total_length,
            final_heading,
            speed,
            elapsed: 0.0,
            finished,
        }
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Seconds the whole walk takes.
    pub fn total_duration(&self) -> f32 {
        self.total_length / self.speed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `delta` seconds and sample the pose.
    pub fn update(&mut self, delta: f32) -> MovementSample {
        if delta > 0.0 {
            self.elapsed += delta;
        }

        if self.nodes.len() < 2 {
            self.finished = true;
            let end = self.nodes.last().map(PathNode::position).unwrap_or(Vec3::ZERO);
            return MovementSample::at_rest(end, 0.0);
        }
        if self.finished {
            return self.terminal_sample();
        }

        let distance = self.elapsed * self.speed;
        if distance >= self.total_length {
            self.finished = true;
            return self.terminal_sample();
        }

        let mut start = 0.0;
        for (i, &length) in self.segment_lengths.iter().enumerate() {
            let end = start + length;
            if length > 0.0 && distance <= end {
                let a = self.nodes[i].position();
                let b = self.nodes[i + 1].position();
                return MovementSample {
                    position:   a.lerp(b, (distance - start) / length),
                    rotation_y: a.heading_to(b),
                    is_moving:  true,
                    progress:   distance / self.total_length,
                };
            }
            start = end;
        }

        // Rounding left `distance` past the last segment end.
        self.finished = true;
        self.terminal_sample()
    }

    fn terminal_sample(&self) -> MovementSample {
        let end = self.nodes.last().map(PathNode::position).unwrap_or(Vec3::ZERO);
        MovementSample::at_rest(end, self.final_heading)
    }
}
