//! The `OfficeSession` orchestrator.

use std::sync::Arc;

use office_behavior::{
    desk_index, diff_rosters, fallback_tag, target_tag, target_zone, AgentEvent, ZoneDirectory,
};
use office_core::{
    AgentId, AgentMap, AgentSnapshot, AgentStatus, OfficeConfig, ProjectId, Role, Vec3, WaypointId, ZoneId,
};
use office_mobility::{MobilityEngine, MoveRequest, MovementSample, TickReport};
use office_spatial::{
    find_nearest_waypoint, find_waypoints_by_zone_and_tag, pick_waypoint, PathFinder, Waypoint,
    WaypointGraph, WaypointTag, Zone,
};
use tracing::{debug, warn};

use crate::{SceneSource, SessionObserver, SimError, SimResult};

/// A decided walk, not yet handed to the engine.
struct Walk {
    zone:  ZoneId,
    graph: Arc<WaypointGraph>,
    from:  WaypointId,
    to:    WaypointId,
    rest:  Vec3,
}

enum Plan {
    Walk(Walk),
    /// Already where it belongs inside `zone`.
    Stay { zone: ZoneId },
    /// The walk in flight already ends at `rest`; drop the parked one.
    Unpark { zone: ZoneId, rest: Vec3 },
}

struct ActiveScene {
    graph: Arc<WaypointGraph>,
    zones: Arc<[Zone]>,
}

/// Owns everything one office scene needs to move its agents.
///
/// # Type parameters
///
/// - `S: SceneSource`: supplies the waypoint graph and zones.
/// - `R: PathFinder`: path search used for in-zone walks.
///
/// # Tracking
///
/// Per agent the session remembers the zone it was last sent to, the status
/// that decision was made for, and the position it will come to rest at.
/// These are updated only when a decision is carried out, so after a
/// dropped walk the next event is planned from where the agent really is.
pub struct OfficeSession<S: SceneSource, R: PathFinder> {
    config: OfficeConfig,
    scene:  S,
    engine: MobilityEngine<R>,
    roster: Vec<AgentSnapshot>,

    zone_of:   AgentMap<ZoneId>,
    status_of: AgentMap<AgentStatus>,
    resting:   AgentMap<Vec3>,

    frame:        u64,
    elapsed_secs: f64,
}

impl<S: SceneSource, R: PathFinder> OfficeSession<S, R> {
    /// An empty session.  Prefer [`SessionBuilder`][crate::SessionBuilder],
    /// which validates `config`.
    pub fn new(config: OfficeConfig, scene: S, finder: R) -> Self {
        let engine = MobilityEngine::from_config(finder, &config.motion);
        Self {
            config,
            scene,
            engine,
            roster:       Vec::new(),
            zone_of:      AgentMap::default(),
            status_of:    AgentMap::default(),
            resting:      AgentMap::default(),
            frame:        0,
            elapsed_secs: 0.0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    pub fn roster(&self) -> &[AgentSnapshot] {
        &self.roster
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene source; a replaced scene is used from the next event.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn engine(&self) -> &MobilityEngine<R> {
        &self.engine
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    // ── Render-side queries ───────────────────────────────────────────────

    /// Pose of a walking agent; `None` once it stands still.
    pub fn position(&self, agent: &str) -> Option<MovementSample> {
        self.engine.position(agent)
    }

    pub fn is_busy(&self, agent: &str) -> bool {
        self.engine.is_busy(agent)
    }

    /// Stop `agent` immediately and drop its parked walk.
    pub fn cancel_movement(&mut self, agent: &str) {
        self.engine.cancel(agent);
    }

    /// Zone the agent was last sent to.
    pub fn tracked_zone(&self, agent: &str) -> Option<&ZoneId> {
        self.zone_of.get(agent)
    }

    /// Where the agent stands (or will stand once its walk ends).
    pub fn resting_position(&self, agent: &str) -> Option<Vec3> {
        self.resting.get(agent).copied()
    }

    // ── Roster events ─────────────────────────────────────────────────────

    /// Adopt `next` as the roster and act on every difference from the
    /// previous one.  Returns the events in the order they were handled.
    pub fn sync_roster(&mut self, next: Vec<AgentSnapshot>) -> Vec<AgentEvent> {
        let events = diff_rosters(&self.roster, &next);
        let prev = std::mem::replace(&mut self.roster, next);
        for event in &events {
            match event {
                AgentEvent::Removed(id) => self.depart(id, prev.iter().find(|a| &a.id == id)),
                _ => self.process(event),
            }
        }
        events
    }

    /// Add (or replace) one agent and act on the resulting events.
    pub fn upsert_agent(&mut self, agent: AgentSnapshot) -> Vec<AgentEvent> {
        let mut next = self.roster.clone();
        match next.iter_mut().find(|a| a.id == agent.id) {
            Some(slot) => *slot = agent,
            None => next.push(agent),
        }
        self.sync_roster(next)
    }

    /// Apply one event to the held roster, then act on it.
    ///
    /// A `Spawned` event only places the agent; its snapshot must already be
    /// in the roster (see [`upsert_agent`][Self::upsert_agent]).
    pub fn handle_event(&mut self, event: &AgentEvent) {
        match event {
            AgentEvent::Spawned(id) => {
                if !self.roster.iter().any(|a| &a.id == id) {
                    warn!(agent = %id, "spawn_for_unknown_agent");
                    return;
                }
            }
            AgentEvent::Removed(id) => {
                let departed = self
                    .roster
                    .iter()
                    .position(|a| &a.id == id)
                    .map(|i| self.roster.remove(i));
                self.depart(id, departed.as_ref());
                return;
            }
            AgentEvent::StatusChanged { id, to, .. } => {
                if let Some(a) = self.roster.iter_mut().find(|a| &a.id == id) {
                    a.status = *to;
                }
            }
            AgentEvent::ProjectChanged { id, to, .. } => {
                if let Some(a) = self.roster.iter_mut().find(|a| &a.id == id) {
                    a.project_id = to.clone();
                }
            }
        }
        self.process(event);
    }

    fn process(&mut self, event: &AgentEvent) {
        match event {
            AgentEvent::Spawned(id) => self.place(id, true),
            AgentEvent::Removed(id) => self.depart(id, None),
            AgentEvent::StatusChanged { id, .. } => {
                self.place(id, false);
                if let Some(agent) = self.worker(id) {
                    let project = agent.project_id.clone();
                    self.reevaluate_leads(id, &[project]);
                }
            }
            AgentEvent::ProjectChanged { id, from, to } => {
                self.place(id, false);
                if self.worker(id).is_some() {
                    self.reevaluate_leads(id, &[from.clone(), to.clone()]);
                }
            }
        }
    }

    fn worker(&self, id: &AgentId) -> Option<&AgentSnapshot> {
        self.roster.iter().find(|a| &a.id == id && a.role == Role::Worker)
    }

    /// Re-place every team lead whose project is one of `projects`.
    fn reevaluate_leads(&mut self, cause: &AgentId, projects: &[Option<ProjectId>]) {
        let leads: Vec<AgentId> = self
            .roster
            .iter()
            .filter(|a| a.role == Role::TeamLead && projects.contains(&a.project_id))
            .map(|a| a.id.clone())
            .collect();
        for lead in leads {
            debug!(lead = %lead, cause = %cause, "team_lead_reevaluated");
            self.place(&lead, false);
        }
    }

    /// Forget `id`.  A departing worker may have been the one keeping its
    /// team leads out of the break room.
    fn depart(&mut self, id: &AgentId, departed: Option<&AgentSnapshot>) {
        self.forget(id);
        if let Some(agent) = departed.filter(|a| a.role == Role::Worker) {
            self.reevaluate_leads(id, &[agent.project_id.clone()]);
        }
    }

    fn forget(&mut self, id: &AgentId) {
        self.engine.cancel(id.as_str());
        self.zone_of.remove(id);
        self.status_of.remove(id);
        self.resting.remove(id);
    }

    /// Decide and dispatch the agent's next walk, logging why if none.
    fn place(&mut self, id: &AgentId, spawning: bool) {
        if let Err(e) = self.try_place(id, spawning) {
            debug!(agent = %id, error = %e, "movement_skipped");
        }
    }

    fn try_place(&mut self, id: &AgentId, spawning: bool) -> SimResult<()> {
        let scene = self.active_scene()?;
        let agent = self
            .roster
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| SimError::UnknownAgent(id.clone()))?;
        let status = agent.status;

        let plan = match self.zone_of.get(id) {
            Some(old_zone) if !spawning => self.plan_move(&scene, agent, old_zone)?,
            _ => self.plan_spawn(&scene, agent)?,
        };

        let zone = match plan {
            Plan::Stay { zone } => zone,
            Plan::Unpark { zone, rest } => {
                self.engine.cancel_pending(id.as_str());
                self.resting.insert(id.clone(), rest);
                zone
            }
            Plan::Walk(walk) => {
                let request = MoveRequest {
                    graph: walk.graph,
                    from:  walk.from,
                    to:    walk.to,
                    speed: self.config.motion.walk_speed,
                };
                if !self.engine.enqueue(id, request) {
                    return Err(SimError::WalkNotStarted(id.clone()));
                }
                self.resting.insert(id.clone(), walk.rest);
                walk.zone
            }
        };
        self.zone_of.insert(id.clone(), zone);
        self.status_of.insert(id.clone(), status);
        Ok(())
    }

    fn active_scene(&self) -> SimResult<ActiveScene> {
        let (graph, zones) = self
            .scene
            .active_scene()
            .and_then(|s| s.resolve())
            .ok_or(SimError::NoScene)?;
        Ok(ActiveScene { graph, zones })
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// From the entrance to the agent's spot in its target zone.
    fn plan_spawn(&self, scene: &ActiveScene, agent: &AgentSnapshot) -> SimResult<Plan> {
        let dir = ZoneDirectory::new(&scene.zones, &self.config);
        let target = target_zone(agent, &self.roster, &dir)
            .ok_or_else(|| SimError::NoTargetZone(agent.id.clone()))?;
        let tag = target_tag(agent.status, target, &dir);
        let desk = desk_index(agent, &self.roster, &dir);

        let dest = destination(&scene.graph, &dir, target, tag, desk)?;
        let start = entrance(&scene.graph, &dir).ok_or(SimError::NoEntrance)?;

        Ok(Plan::Walk(Walk {
            zone:  target.clone(),
            graph: Arc::clone(&scene.graph),
            from:  start.id.clone(),
            to:    dest.id.clone(),
            rest:  dest.position,
        }))
    }

    /// Re-place an agent already tracked in `old_zone`.
    ///
    /// Crossing zones is a straight hop from the old zone's resting spot to
    /// the new spot.  Inside one zone the agent walks the scene graph
    /// between its old and new tagged spots at the same seat ordinal, or
    /// from the start of its parked walk when one replaces it.
    fn plan_move(&self, scene: &ActiveScene, agent: &AgentSnapshot, old_zone: &ZoneId) -> SimResult<Plan> {
        let dir = ZoneDirectory::new(&scene.zones, &self.config);
        let target = target_zone(agent, &self.roster, &dir)
            .ok_or_else(|| SimError::NoTargetZone(agent.id.clone()))?;
        let tag = target_tag(agent.status, target, &dir);
        let desk = desk_index(agent, &self.roster, &dir);
        let graph = &scene.graph;

        if target != old_zone {
            let old_tag = fallback_tag(old_zone, &dir);
            let from = pick_waypoint(graph, old_zone, old_tag, 0)
                .or_else(|| {
                    self.resting
                        .get(&agent.id)
                        .and_then(|p| find_nearest_waypoint(graph, *p))
                })
                .ok_or_else(|| SimError::NoWaypoint { zone: old_zone.clone(), tag: old_tag })?;
            let to = destination(graph, &dir, target, tag, desk)?;

            return Ok(Plan::Walk(Walk {
                zone:  target.clone(),
                graph: Arc::new(WaypointGraph::direct_hop(from, to)),
                from:  from.id.clone(),
                to:    to.id.clone(),
                rest:  to.position,
            }));
        }

        let prev_status = self.status_of.get(&agent.id).copied().unwrap_or_default();
        let prev_tag = target_tag(prev_status, target, &dir);
        if prev_tag == tag {
            return Ok(Plan::Stay { zone: target.clone() });
        }

        let to = destination(graph, &dir, target, tag, desk)?;

        // A parked walk has not happened yet: the agent will stand where the
        // walk in flight ends, which is where the parked walk starts.
        if let Some(origin) = self.engine.queue.pending_origin(agent.id.as_str()) {
            if *origin == to.id {
                return Ok(Plan::Unpark { zone: target.clone(), rest: to.position });
            }
            return Ok(Plan::Walk(Walk {
                zone:  target.clone(),
                graph: Arc::clone(graph),
                from:  origin.clone(),
                to:    to.id.clone(),
                rest:  to.position,
            }));
        }

        let from = destination(graph, &dir, target, prev_tag, desk)?;
        if from.id == to.id {
            return Ok(Plan::Stay { zone: target.clone() });
        }

        Ok(Plan::Walk(Walk {
            zone:  target.clone(),
            graph: Arc::clone(graph),
            from:  from.id.clone(),
            to:    to.id.clone(),
            rest:  to.position,
        }))
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance every walk by `delta` seconds and report to `observer`.
    pub fn tick<O: SessionObserver>(&mut self, delta: f32, observer: &mut O) -> TickReport {
        let frame = self.frame;
        observer.on_frame_start(frame, self.elapsed_secs);

        let report = self.engine.tick(delta);
        if delta > 0.0 {
            self.elapsed_secs += f64::from(delta);
        }

        for (agent, pose) in &report.finished {
            self.resting.insert(agent.clone(), pose.position);
            observer.on_walk_finished(frame, agent, pose);
        }
        observer.on_frame_end(frame, self.elapsed_secs, &self.engine.ledger);

        self.frame += 1;
        report
    }

    /// Signal the end of the session to `observer`.
    pub fn finish<O: SessionObserver>(&mut self, observer: &mut O) {
        observer.on_session_end(self.frame);
    }
}

// ── Waypoint selection ────────────────────────────────────────────────────────

/// The `desk`-th `tag` waypoint in `zone`, else the zone's fallback-tag
/// waypoint at the same ordinal.
fn destination<'g>(
    graph: &'g WaypointGraph,
    dir:   &ZoneDirectory<'_>,
    zone:  &ZoneId,
    tag:   WaypointTag,
    desk:  usize,
) -> SimResult<&'g Waypoint> {
    pick_waypoint(graph, zone, tag, desk)
        .or_else(|| pick_waypoint(graph, zone, fallback_tag(zone, dir), desk))
        .ok_or_else(|| SimError::NoWaypoint { zone: zone.clone(), tag })
}

/// Spawn point: the main zone's entrance, else a hallway entrance, else any
/// entrance.
fn entrance<'g>(graph: &'g WaypointGraph, dir: &ZoneDirectory<'_>) -> Option<&'g Waypoint> {
    dir.main_zone()
        .and_then(|z| pick_waypoint(graph, &z.id, WaypointTag::Entrance, 0))
        .or_else(|| {
            find_waypoints_by_zone_and_tag(graph, None, WaypointTag::Entrance)
                .into_iter()
                .next()
        })
        .or_else(|| {
            graph
                .waypoints()
                .iter()
                .find(|wp| wp.tag == Some(WaypointTag::Entrance))
        })
}
