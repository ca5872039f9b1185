//! Unit tests for office-sim.

use office_core::{AgentId, AgentSnapshot, AgentStatus, MotionConfig, OfficeConfig, Role, Vec3};
use office_mobility::{MovementLedger, MovementSample};
use office_spatial::{DijkstraPathFinder, Waypoint, WaypointGraph, WaypointGraphBuilder, WaypointTag, Zone};

use crate::{NoopObserver, OfficeSession, SceneData, SessionBuilder, SessionObserver, SimError, StaticScene};

// ── Helpers ───────────────────────────────────────────────────────────────────

type Session = OfficeSession<StaticScene, DijkstraPathFinder>;

const FRAME: f32 = 1.0 / 60.0;

/// Main office with an entrance, a hallway junction, the break room, and
/// one project room.
///
/// ```text
///   main-desk-1   main-desk-2      p1-desk-1   p1-desk-2
///          \       /                     \       /
///         main-center ── hall ──────── p1-center
///              |           \
///       main-entrance     br-lounge ── br-desk
/// ```
fn office_graph() -> WaypointGraph {
    use WaypointTag::*;
    let mut b = WaypointGraphBuilder::new();
    let mut wp = |id: &str, x: f32, z: f32, tag: WaypointTag, zone: Option<&str>| {
        let w = Waypoint::new(id, Vec3::new(x, 0.0, z)).tagged(tag);
        b.add_waypoint(match zone {
            Some(zone) => w.in_zone(zone),
            None => w,
        });
    };
    wp("main-entrance", 0.0, 0.0, Entrance, Some("main"));
    wp("main-center", 0.0, 6.0, Center, Some("main"));
    wp("main-desk-1", -3.0, 9.0, Desk, Some("main"));
    wp("main-desk-2", 3.0, 9.0, Desk, Some("main"));
    wp("hall", 6.0, 6.0, Hallway, None);
    wp("br-lounge", 12.0, 6.0, Lounge, Some("break-room"));
    wp("br-desk", 12.0, 9.0, Desk, Some("break-room"));
    wp("p1-center", 6.0, 12.0, Center, Some("proj-1-room"));
    wp("p1-desk-1", 3.0, 15.0, Desk, Some("proj-1-room"));
    wp("p1-desk-2", 9.0, 15.0, Desk, Some("proj-1-room"));

    for (a, c) in [
        ("main-entrance", "main-center"),
        ("main-center", "main-desk-1"),
        ("main-center", "main-desk-2"),
        ("main-center", "hall"),
        ("hall", "br-lounge"),
        ("br-lounge", "br-desk"),
        ("hall", "p1-center"),
        ("p1-center", "p1-desk-1"),
        ("p1-center", "p1-desk-2"),
    ] {
        b.add_edge(a, c);
    }
    b.build().unwrap()
}

fn office_zones() -> Vec<Zone> {
    vec![
        Zone::shared("main"),
        Zone::shared("break-room"),
        Zone::for_project("proj-1-room", "proj-1"),
    ]
}

fn office_scene() -> StaticScene {
    StaticScene::new(SceneData::new(office_graph(), office_zones()))
}

fn session(roster: Vec<AgentSnapshot>) -> Session {
    SessionBuilder::new(office_scene(), DijkstraPathFinder)
        .roster(roster)
        .build()
        .unwrap()
}

fn worker(id: &str, status: AgentStatus) -> AgentSnapshot {
    AgentSnapshot::new(id, Role::Worker, status)
}

/// Waypoint ids of the agent's active walk; live positions show as `*`.
fn walk_ids(s: &Session, agent: &str) -> Vec<String> {
    s.engine()
        .ledger
        .get(agent)
        .map(|e| {
            e.interpolator
                .nodes()
                .iter()
                .map(|n| n.waypoint_id().map_or_else(|| "*".to_owned(), |w| w.as_str().to_owned()))
                .collect()
        })
        .unwrap_or_default()
}

/// Tick until nobody walks or has a parked walk.
fn settle(s: &mut Session) {
    for _ in 0..10_000 {
        if s.roster().iter().all(|a| !s.is_busy(a.id.as_str())) {
            return;
        }
        s.tick(FRAME, &mut NoopObserver);
    }
    panic!("agents never settled");
}

fn pos(s: &Session, agent: &str) -> Vec3 {
    s.resting_position(agent).unwrap()
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn unassigned_worker_walks_from_entrance_to_main_center() {
        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        assert!(s.is_busy("w"));
        assert_eq!(walk_ids(&s, "w"), vec!["main-entrance", "main-center"]);
        assert_eq!(s.tracked_zone("w").unwrap().as_str(), "main");

        settle(&mut s);
        assert!(s.position("w").is_none());
        assert_eq!(pos(&s, "w"), Vec3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn project_worker_walks_through_the_hall() {
        let s = session(vec![worker("w", AgentStatus::Idle).with_project("proj-1")]);
        assert_eq!(walk_ids(&s, "w"), vec!["main-entrance", "main-center", "hall", "p1-center"]);
        assert_eq!(s.tracked_zone("w").unwrap().as_str(), "proj-1-room");
    }

    #[test]
    fn idle_team_lead_heads_for_the_break_room_lounge() {
        let lead = AgentSnapshot::new("tl", Role::TeamLead, AgentStatus::Idle).with_project("proj-1");
        let s = session(vec![lead]);
        assert_eq!(walk_ids(&s, "tl").last().map(String::as_str), Some("br-lounge"));
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "break-room");
    }

    #[test]
    fn ceo_never_walks() {
        let s = session(vec![AgentSnapshot::new("ceo", Role::Ceo, AgentStatus::Acting)]);
        assert!(!s.is_busy("ceo"));
        assert!(s.tracked_zone("ceo").is_none());
    }

    #[test]
    fn missing_scene_means_no_movement() {
        let mut s = SessionBuilder::new(StaticScene::none(), DijkstraPathFinder)
            .roster(vec![worker("w", AgentStatus::Idle)])
            .build()
            .unwrap();
        assert!(!s.is_busy("w"));
        assert!(s.tracked_zone("w").is_none());

        // Zones without a graph are not enough either.
        s.scene_mut().set(SceneData { waypoint_graph: None, zones: Some(office_zones().into()) });
        s.upsert_agent(worker("w", AgentStatus::Done));
        assert!(!s.is_busy("w"));

        // Once a scene appears, the next change of an untracked agent spawns it.
        s.scene_mut().set(SceneData::new(office_graph(), office_zones()));
        s.upsert_agent(worker("w", AgentStatus::Thinking));
        assert_eq!(walk_ids(&s, "w"), vec!["main-entrance", "main-center", "main-desk-1"]);
    }
}

// ── Status and project changes ────────────────────────────────────────────────

#[cfg(test)]
mod changes {
    use super::*;

    #[test]
    fn status_flip_walks_center_to_desk_and_back() {
        let mut s = session(vec![worker("w", AgentStatus::Idle).with_project("proj-1")]);
        settle(&mut s);

        s.upsert_agent(worker("w", AgentStatus::Thinking).with_project("proj-1"));
        assert_eq!(walk_ids(&s, "w"), vec!["p1-center", "p1-desk-1"]);
        settle(&mut s);
        assert_eq!(pos(&s, "w"), Vec3::new(3.0, 0.0, 15.0));

        s.upsert_agent(worker("w", AgentStatus::Idle).with_project("proj-1"));
        assert_eq!(walk_ids(&s, "w"), vec!["p1-desk-1", "p1-center"]);
        settle(&mut s);
        assert_eq!(pos(&s, "w"), Vec3::new(6.0, 0.0, 12.0));
    }

    #[test]
    fn same_tag_change_does_not_walk() {
        let mut s = session(vec![worker("w", AgentStatus::Thinking)]);
        settle(&mut s);
        s.upsert_agent(worker("w", AgentStatus::Acting));
        assert!(!s.is_busy("w"));
    }

    #[test]
    fn project_assignment_is_a_direct_hop() {
        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        settle(&mut s);

        let events = s.upsert_agent(worker("w", AgentStatus::Idle).with_project("proj-1"));
        assert_eq!(events.len(), 1);
        assert_eq!(walk_ids(&s, "w"), vec!["main-center", "p1-center"]);
        assert_eq!(s.tracked_zone("w").unwrap().as_str(), "proj-1-room");
    }

    #[test]
    fn active_worker_pulls_team_lead_out_of_break_room() {
        let lead = AgentSnapshot::new("tl", Role::TeamLead, AgentStatus::Idle).with_project("proj-1");
        let w = worker("w", AgentStatus::Idle).with_project("proj-1");
        let mut s = session(vec![lead.clone(), w.clone()]);
        settle(&mut s);
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "break-room");

        let mut busy = w.clone();
        busy.status = AgentStatus::Thinking;
        s.sync_roster(vec![lead.clone(), busy]);

        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "proj-1-room");
        assert_eq!(walk_ids(&s, "tl"), vec!["br-lounge", "p1-center"]);
        // The lead now holds slot 0 of the project room, the worker slot 1.
        assert_eq!(walk_ids(&s, "w"), vec!["p1-center", "p1-desk-2"]);

        settle(&mut s);
        s.sync_roster(vec![lead, w]);
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "break-room");
    }

    #[test]
    fn flip_back_before_parked_walk_starts_does_not_jump() {
        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        for _ in 0..10 {
            s.tick(FRAME, &mut NoopObserver);
        }

        s.upsert_agent(worker("w", AgentStatus::Thinking));
        assert_eq!(s.engine().queue.pending_target("w").map(|w| w.as_str()), Some("main-desk-1"));

        // Back to idle while still on the way to center: nothing left to park.
        s.upsert_agent(worker("w", AgentStatus::Idle));
        assert!(!s.engine().queue.has_pending("w"));
        assert_eq!(walk_ids(&s, "w"), vec!["main-entrance", "main-center"]);
        assert_eq!(pos(&s, "w"), Vec3::new(0.0, 0.0, 6.0));

        let mut last = s.position("w").unwrap().position;
        let mut max_step = 0.0_f32;
        for _ in 0..600 {
            s.tick(FRAME, &mut NoopObserver);
            let now = s.position("w").map_or_else(|| pos(&s, "w"), |p| p.position);
            max_step = max_step.max(last.distance(now));
            last = now;
        }
        // Walk speed 3 covers 0.05 per frame.
        assert!(max_step < 0.06, "stepped {max_step} in one frame");
        assert!(!s.is_busy("w"));
        assert_eq!(last, Vec3::new(0.0, 0.0, 6.0));

        // The next flip plans from where the agent really stands.
        s.upsert_agent(worker("w", AgentStatus::Thinking));
        assert_eq!(walk_ids(&s, "w"), vec!["main-center", "main-desk-1"]);
    }

    #[test]
    fn removing_last_busy_worker_sends_team_lead_to_break_room() {
        let lead = AgentSnapshot::new("tl", Role::TeamLead, AgentStatus::Idle).with_project("proj-1");
        let busy = worker("w", AgentStatus::Thinking).with_project("proj-1");
        let mut s = session(vec![lead.clone(), busy]);
        settle(&mut s);
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "proj-1-room");

        s.sync_roster(vec![lead]);
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "break-room");
        assert_eq!(walk_ids(&s, "tl"), vec!["p1-center", "br-lounge"]);
    }

    #[test]
    fn removal_event_also_releases_team_lead() {
        use office_behavior::AgentEvent;

        let lead = AgentSnapshot::new("tl", Role::TeamLead, AgentStatus::Idle).with_project("proj-1");
        let busy = worker("w", AgentStatus::Acting).with_project("proj-1");
        let mut s = session(vec![lead, busy]);
        settle(&mut s);

        s.handle_event(&AgentEvent::Removed(AgentId::new("w")));
        assert_eq!(s.tracked_zone("tl").unwrap().as_str(), "break-room");
    }

    #[test]
    fn missing_old_zone_fallback_uses_nearest_waypoint() {
        let mut b = WaypointGraphBuilder::new();
        b.add_waypoint(Waypoint::new("door", Vec3::ZERO).tagged(WaypointTag::Entrance).in_zone("main"));
        b.add_waypoint(Waypoint::new("center", Vec3::new(0.0, 0.0, 4.0)).tagged(WaypointTag::Center).in_zone("main"));
        b.add_waypoint(Waypoint::new("p-desk", Vec3::new(4.0, 0.0, 4.0)).tagged(WaypointTag::Desk).in_zone("p-room"));
        b.add_edge("door", "center");
        b.add_edge("center", "p-desk");
        let zones = vec![Zone::shared("main"), Zone::for_project("p-room", "proj-1")];
        let scene = StaticScene::new(SceneData::new(b.build().unwrap(), zones));

        let mut s = SessionBuilder::new(scene, DijkstraPathFinder)
            .roster(vec![worker("w", AgentStatus::Thinking).with_project("proj-1")])
            .build()
            .unwrap();
        assert_eq!(walk_ids(&s, "w"), vec!["door", "center", "p-desk"]);
        settle(&mut s);

        // p-room has no center; main has no desk, so the agent heads for center.
        s.upsert_agent(worker("w", AgentStatus::Thinking));
        assert_eq!(walk_ids(&s, "w"), vec!["p-desk", "center"]);
    }
}

// ── Removal and cancellation ──────────────────────────────────────────────────

#[cfg(test)]
mod teardown {
    use super::*;

    #[test]
    fn removal_cancels_and_forgets() {
        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        assert!(s.is_busy("w"));

        let events = s.sync_roster(Vec::new());
        assert_eq!(events.len(), 1);
        assert!(!s.is_busy("w"));
        assert!(s.position("w").is_none());
        assert!(s.tracked_zone("w").is_none());
        assert!(s.resting_position("w").is_none());
    }

    #[test]
    fn cancel_purges_the_parked_walk() {
        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        s.upsert_agent(worker("w", AgentStatus::Thinking));
        assert!(s.engine().queue.has_pending("w"));

        s.cancel_movement("w");
        assert!(!s.is_busy("w"));
        for _ in 0..600 {
            s.tick(FRAME, &mut NoopObserver);
            assert!(s.position("w").is_none());
        }
    }

    #[test]
    fn handle_event_applies_removal() {
        use office_behavior::AgentEvent;

        let mut s = session(vec![worker("w", AgentStatus::Idle)]);
        s.handle_event(&AgentEvent::Removed(AgentId::new("w")));
        assert!(s.roster().is_empty());
        assert!(!s.is_busy("w"));
    }
}

// ── Observer and builder ──────────────────────────────────────────────────────

#[cfg(test)]
mod plumbing {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames:   u64,
        finished: Vec<(u64, String)>,
        walking:  usize,
        ended_at: Option<u64>,
    }

    impl SessionObserver for Recorder {
        fn on_frame_start(&mut self, _frame: u64, _elapsed_secs: f64) {
            self.frames += 1;
        }

        fn on_walk_finished(&mut self, frame: u64, agent: &AgentId, pose: &MovementSample) {
            assert!(!pose.is_moving);
            self.finished.push((frame, agent.to_string()));
        }

        fn on_frame_end(&mut self, _frame: u64, _elapsed_secs: f64, ledger: &MovementLedger) {
            self.walking = self.walking.max(ledger.len());
        }

        fn on_session_end(&mut self, final_frame: u64) {
            self.ended_at = Some(final_frame);
        }
    }

    #[test]
    fn observer_sees_frames_and_arrivals() {
        let mut s = session(vec![worker("a", AgentStatus::Idle), worker("b", AgentStatus::Idle)]);
        let mut rec = Recorder::default();
        for _ in 0..240 {
            s.tick(FRAME, &mut rec);
        }
        s.finish(&mut rec);

        assert_eq!(rec.frames, 240);
        assert_eq!(rec.walking, 2);
        let names: Vec<&str> = rec.finished.iter().map(|(_, a)| a.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(rec.finished[0].0, rec.finished[1].0);
        assert_eq!(rec.ended_at, Some(240));
        assert_eq!(s.frame(), 240);
    }

    #[test]
    fn builder_rejects_duplicate_agents() {
        let err = SessionBuilder::new(office_scene(), DijkstraPathFinder)
            .roster(vec![worker("w", AgentStatus::Idle), worker("w", AgentStatus::Acting)])
            .build();
        assert!(matches!(err, Err(SimError::DuplicateAgent(id)) if id.as_str() == "w"));
    }

    #[test]
    fn builder_validates_config() {
        let config = OfficeConfig {
            motion: MotionConfig { walk_speed: 0.0, ..MotionConfig::default() },
            ..OfficeConfig::default()
        };
        let err = SessionBuilder::new(office_scene(), DijkstraPathFinder).config(config).build();
        assert!(matches!(err, Err(SimError::Config(_))));
    }
}
