//! The `MovementLedger`: which agents are walking right now.

use office_core::{AgentId, AgentMap, WaypointId};
use office_spatial::{PathFinder, PathNode, WaypointGraph};
use tracing::{debug, trace};

use crate::{MobilityError, MobilityResult, MovementSample, PathInterpolator};

/// One agent's active walk plus its most recent sample.
pub struct MovementEntry {
    pub interpolator: PathInterpolator,
    pub sample:       MovementSample,
}

/// Agent → active walk.
///
/// An agent has at most one entry.  Entries are created by
/// [`start_movement`][Self::start_movement] and removed when their walk
/// finishes or is cancelled.
#[derive(Default)]
pub struct MovementLedger {
    entries: AgentMap<MovementEntry>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search a path and begin walking `agent` along it.
    ///
    /// Returns `false` (and leaves the ledger untouched) when the path search
    /// fails or yields fewer than two nodes.  If `agent` is already walking,
    /// the new path starts at its current sampled position and replaces the
    /// old walk.
    pub fn start_movement<R: PathFinder + ?Sized>(
        &mut self,
        finder: &R,
        agent:  &AgentId,
        graph:  &WaypointGraph,
        from:   &WaypointId,
        to:     &WaypointId,
        speed:  f32,
    ) -> bool {
        match self.try_start(finder, agent, graph, from, to, speed) {
            Ok(()) => true,
            Err(e) => {
                debug!(agent = %agent, from = %from, to = %to, error = %e, "walk_not_started");
                false
            }
        }
    }

    /// [`start_movement`][Self::start_movement] with the failure reason.
    pub fn try_start<R: PathFinder + ?Sized>(
        &mut self,
        finder: &R,
        agent:  &AgentId,
        graph:  &WaypointGraph,
        from:   &WaypointId,
        to:     &WaypointId,
        speed:  f32,
    ) -> MobilityResult<()> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(MobilityError::InvalidSpeed(speed));
        }
        let mut path = finder.find_path(graph, from, to)?;
        if path.len() < 2 {
            return Err(MobilityError::PathTooShort { len: path.len() });
        }
        if let Some(current) = self.entries.get(agent) {
            path.insert(0, PathNode::LivePosition { position: current.sample.position });
        }

        let mut interpolator = PathInterpolator::new(path, speed);
        let sample = interpolator.update(0.0);
        trace!(
            agent = %agent,
            nodes = interpolator.nodes().len(),
            length = interpolator.total_length(),
            "walk_started"
        );
        self.entries.insert(agent.clone(), MovementEntry { interpolator, sample });
        Ok(())
    }

    /// Advance every walk by `delta` seconds.
    ///
    /// Finished walks are removed; their final samples are returned sorted by
    /// agent id.
    pub fn tick(&mut self, delta: f32) -> Vec<(AgentId, MovementSample)> {
        let mut finished = Vec::new();
        for (agent, entry) in self.entries.iter_mut() {
            entry.sample = entry.interpolator.update(delta);
            if entry.interpolator.is_finished() {
                finished.push((agent.clone(), entry.sample));
            }
        }
        for (agent, _) in &finished {
            self.entries.remove(agent);
        }
        finished.sort_by(|a, b| a.0.cmp(&b.0));
        finished
    }

    /// Latest sample for `agent`, or `None` if it is not walking.
    pub fn position(&self, agent: &str) -> Option<MovementSample> {
        self.entries.get(agent).map(|e| e.sample)
    }

    pub fn is_moving(&self, agent: &str) -> bool {
        self.entries.contains_key(agent)
    }

    /// Stop `agent` where it is.  Returns whether a walk was removed.
    pub fn cancel_movement(&mut self, agent: &str) -> bool {
        self.entries.remove(agent).is_some()
    }

    pub fn get(&self, agent: &str) -> Option<&MovementEntry> {
        self.entries.get(agent)
    }

    /// Latest samples of all walking agents, sorted by agent id.
    pub fn samples(&self) -> Vec<(AgentId, MovementSample)> {
        let mut out: Vec<_> = self
            .entries
            .iter()
            .map(|(agent, e)| (agent.clone(), e.sample))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
