//! Per-agent single-slot queue of walk requests.
//!
//! A request arriving while the agent is walking (or already has a request
//! waiting) is parked in the agent's pending slot; a newer request
//! overwrites the older one.  A parked request starts once the agent has
//! been still for `settle_delay_secs`.  The settle timer is measured in
//! frame time, so it freezes while frames are paused.

use std::sync::Arc;

use office_core::{AgentId, AgentMap, WaypointId};
use office_spatial::{PathFinder, WaypointGraph};
use tracing::trace;

use crate::MovementLedger;

/// Everything needed to start one walk later.
#[derive(Clone, Debug)]
pub struct MoveRequest {
    pub graph: Arc<WaypointGraph>,
    pub from:  WaypointId,
    pub to:    WaypointId,
    pub speed: f32,
}

impl MoveRequest {
    pub fn new(
        graph: Arc<WaypointGraph>,
        from:  impl Into<WaypointId>,
        to:    impl Into<WaypointId>,
        speed: f32,
    ) -> Self {
        Self { graph, from: from.into(), to: to.into(), speed }
    }
}

struct Pending {
    request: MoveRequest,
    /// Seconds since the agent's walk ended; `None` while it still walks.
    still_for: Option<f32>,
}

pub struct AnimationQueue {
    pending:           AgentMap<Pending>,
    settle_delay_secs: f32,
}

impl AnimationQueue {
    pub fn new(settle_delay_secs: f32) -> Self {
        Self { pending: AgentMap::default(), settle_delay_secs: settle_delay_secs.max(0.0) }
    }

    pub fn settle_delay_secs(&self) -> f32 {
        self.settle_delay_secs
    }

    /// Start `request` now if `agent` is idle with nothing pending, else park
    /// it.  Returns `false` only when an immediate start failed.
    pub fn enqueue<R: PathFinder + ?Sized>(
        &mut self,
        ledger:  &mut MovementLedger,
        finder:  &R,
        agent:   &AgentId,
        request: MoveRequest,
    ) -> bool {
        if !ledger.is_moving(agent.as_str()) && !self.pending.contains_key(agent) {
            return ledger.start_movement(
                finder,
                agent,
                &request.graph,
                &request.from,
                &request.to,
                request.speed,
            );
        }

        trace!(agent = %agent, to = %request.to, "walk_parked");
        match self.pending.get_mut(agent) {
            Some(slot) => slot.request = request,
            None => {
                self.pending.insert(agent.clone(), Pending { request, still_for: None });
            }
        }
        true
    }

    /// Advance settle timers by `delta` and start every request whose agent
    /// has been still long enough.  Must run after the ledger's own tick.
    ///
    /// Returns the agents whose parked walk started, sorted by id.
    pub fn tick<R: PathFinder + ?Sized>(
        &mut self,
        ledger: &mut MovementLedger,
        finder: &R,
        delta:  f32,
    ) -> Vec<AgentId> {
        let mut ready = Vec::new();
        for (agent, slot) in self.pending.iter_mut() {
            if ledger.is_moving(agent.as_str()) {
                slot.still_for = None;
                continue;
            }
            let still_for = match slot.still_for {
                None => 0.0,
                Some(t) => t + delta.max(0.0),
            };
            slot.still_for = Some(still_for);
            if still_for >= self.settle_delay_secs {
                ready.push(agent.clone());
            }
        }
        ready.sort();

        let mut started = Vec::with_capacity(ready.len());
        for agent in ready {
            let Some(Pending { request, .. }) = self.pending.remove(&agent) else {
                continue;
            };
            if ledger.start_movement(
                finder,
                &agent,
                &request.graph,
                &request.from,
                &request.to,
                request.speed,
            ) {
                started.push(agent);
            }
        }
        started
    }

    pub fn has_pending(&self, agent: &str) -> bool {
        self.pending.contains_key(agent)
    }

    /// Walking, or has a parked walk (including one still settling).
    pub fn is_busy(&self, ledger: &MovementLedger, agent: &str) -> bool {
        ledger.is_moving(agent) || self.has_pending(agent)
    }

    /// Target waypoint of the parked request, if any.
    pub fn pending_target(&self, agent: &str) -> Option<&WaypointId> {
        self.pending.get(agent).map(|p| &p.request.to)
    }

    /// Start waypoint of the parked request.  While a walk is in flight this
    /// is where that walk ends.
    pub fn pending_origin(&self, agent: &str) -> Option<&WaypointId> {
        self.pending.get(agent).map(|p| &p.request.from)
    }

    /// Drop `agent`'s parked request and settle timer, leaving any walk in
    /// flight untouched.
    pub fn cancel_pending(&mut self, agent: &str) -> bool {
        self.pending.remove(agent).is_some()
    }

    /// Stop `agent`'s walk and drop its parked request and settle timer.
    /// Returns whether anything was cancelled.
    pub fn cancel(&mut self, ledger: &mut MovementLedger, agent: &str) -> bool {
        let walked = ledger.cancel_movement(agent);
        let parked = self.pending.remove(agent).is_some();
        walked || parked
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
