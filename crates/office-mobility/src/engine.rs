//! High-level mobility engine: one entry point per frame.

use office_core::{AgentId, MotionConfig};
use office_spatial::PathFinder;

use crate::{AnimationQueue, MoveRequest, MovementLedger, MovementSample};

/// Agents whose state changed during one [`MobilityEngine::tick`].
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    /// Walks that ended this frame with their final pose, sorted by id.
    pub finished: Vec<(AgentId, MovementSample)>,

    /// Agents whose parked walk started this frame, sorted by id.
    pub started: Vec<AgentId>,
}

/// Wraps a [`PathFinder`], the [`MovementLedger`], and the
/// [`AnimationQueue`].
///
/// `R` is fixed at compile time; use
/// [`office_spatial::DijkstraPathFinder`] for shortest walking distance.
pub struct MobilityEngine<R: PathFinder> {
    pub finder: R,
    pub ledger: MovementLedger,
    pub queue:  AnimationQueue,
}

impl<R: PathFinder> MobilityEngine<R> {
    pub fn new(finder: R, settle_delay_secs: f32) -> Self {
        Self {
            finder,
            ledger: MovementLedger::new(),
            queue:  AnimationQueue::new(settle_delay_secs),
        }
    }

    pub fn from_config(finder: R, motion: &MotionConfig) -> Self {
        Self::new(finder, motion.settle_delay_secs)
    }

    /// Start or park a walk for `agent`.
    pub fn enqueue(&mut self, agent: &AgentId, request: MoveRequest) -> bool {
        // Split borrow: finder is read while ledger and queue are mutated.
        let finder = &self.finder;
        self.queue.enqueue(&mut self.ledger, finder, agent, request)
    }

    /// Advance all walks, then start parked requests that have settled.
    pub fn tick(&mut self, delta: f32) -> TickReport {
        let finished = self.ledger.tick(delta);
        let finder = &self.finder;
        let started = self.queue.tick(&mut self.ledger, finder, delta);
        TickReport { finished, started }
    }

    /// Latest pose of a walking agent.
    pub fn position(&self, agent: &str) -> Option<MovementSample> {
        self.ledger.position(agent)
    }

    /// Walking, or has a parked walk.
    pub fn is_busy(&self, agent: &str) -> bool {
        self.queue.is_busy(&self.ledger, agent)
    }

    /// Stop `agent` and drop any parked walk.
    pub fn cancel(&mut self, agent: &str) {
        self.queue.cancel(&mut self.ledger, agent);
    }

    /// Drop `agent`'s parked walk only; a walk in flight carries on.
    pub fn cancel_pending(&mut self, agent: &str) -> bool {
        self.queue.cancel_pending(agent)
    }

    /// Poses of every walking agent, sorted by id.
    pub fn active_poses(&self) -> Vec<(AgentId, MovementSample)> {
        self.ledger.samples()
    }

    pub fn reset(&mut self) {
        self.ledger.clear();
        self.queue.clear();
    }
}
