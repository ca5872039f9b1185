//! office-floor: a minute in a small virtual office.
//!
//! Six agents spawn at the lobby door and walk to their seats.  Every
//! 1.5 seconds one agent's status flips at random (and now and then a worker
//! switches project); the session re-plans and the CSV trace records where
//! everyone walked.
//!
//! ```text
//! cargo run -p office-floor -- [output-dir]
//! RUST_LOG=debug cargo run -p office-floor    # include dropped-walk reasons
//! ```

mod scene;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use office_core::{AgentId, AgentSnapshot, AgentStatus, OfficeConfig, ProjectId, Role};
use office_mobility::{MovementLedger, MovementSample};
use office_output::{CsvTraceWriter, TraceObserver};
use office_sim::{SessionBuilder, SessionObserver, StaticScene};
use office_spatial::DijkstraPathFinder;

use scene::load_scene;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 7;
const FRAME_SECS:        f32 = 1.0 / 60.0;
const TOTAL_FRAMES:      u64 = 60 * 60;  // one minute at 60 Hz
const FLIP_EVERY_FRAMES: u64 = 90;
const SAMPLE_EVERY:      u64 = 6;        // 10 pose rows per second per walker

/// `(id, role, status, project)` in the registry's string form.
const ROSTER: &[(&str, &str, &str, Option<&str>)] = &[
    ("coo",        "coo",             "idle",     None),
    ("assistant",  "admin_assistant", "idle",     None),
    ("scheduler",  "scheduler",       "acting",   None),
    ("lead-atlas", "team_lead",       "idle",     Some("atlas")),
    ("dev-1",      "worker",          "thinking", Some("atlas")),
    ("dev-2",      "worker",          "idle",     Some("borealis")),
];

const STATUSES: [AgentStatus; 4] =
    [AgentStatus::Idle, AgentStatus::Thinking, AgentStatus::Acting, AgentStatus::Done];

const PROJECTS: [&str; 2] = ["atlas", "borealis"];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Wraps the trace observer and counts what it saw.
struct CountingObserver<O: SessionObserver> {
    inner:        O,
    arrivals:     u64,
    busiest:      usize,
}

impl<O: SessionObserver> CountingObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, arrivals: 0, busiest: 0 }
    }
}

impl<O: SessionObserver> SessionObserver for CountingObserver<O> {
    fn on_frame_start(&mut self, frame: u64, elapsed_secs: f64) {
        self.inner.on_frame_start(frame, elapsed_secs);
    }

    fn on_walk_finished(&mut self, frame: u64, agent: &AgentId, pose: &MovementSample) {
        self.arrivals += 1;
        info!(frame, agent = %agent, at = %pose.position, "arrived");
        self.inner.on_walk_finished(frame, agent, pose);
    }

    fn on_frame_end(&mut self, frame: u64, elapsed_secs: f64, ledger: &MovementLedger) {
        self.busiest = self.busiest.max(ledger.len());
        self.inner.on_frame_end(frame, elapsed_secs, ledger);
    }

    fn on_session_end(&mut self, final_frame: u64) {
        self.inner.on_session_end(final_frame);
    }
}

// ── Registry simulation ───────────────────────────────────────────────────────

/// Next roster: one random status flip, sometimes a worker changes project.
fn churn(roster: &[AgentSnapshot], rng: &mut SmallRng) -> Vec<AgentSnapshot> {
    let mut next = roster.to_vec();
    let i = rng.gen_range(0..next.len());
    next[i].status = STATUSES[rng.gen_range(0..STATUSES.len())];

    if next[i].role == Role::Worker && rng.gen_bool(0.25) {
        let project = PROJECTS[rng.gen_range(0..PROJECTS.len())];
        next[i].project_id = Some(ProjectId::from(project));
    }
    next
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    // 1. Scene.
    let scene = load_scene()?;
    if let Some(graph) = &scene.waypoint_graph {
        info!(waypoints = graph.waypoint_count(), edges = graph.edge_count(), "scene_loaded");
    }

    // 2. Roster from the registry's string form.
    let roster = ROSTER
        .iter()
        .map(|&(id, role, status, project)| AgentSnapshot::parse(id, role, status, project))
        .collect::<Result<Vec<_>, _>>()?;

    // 3. Session; the initial roster spawns at the lobby door.
    let mut session = SessionBuilder::new(StaticScene::new(scene), DijkstraPathFinder)
        .config(OfficeConfig::default())
        .roster(roster)
        .build()?;

    // 4. Trace output.
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/office-floor"));
    let writer = CsvTraceWriter::new(&out_dir)?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer, SAMPLE_EVERY));

    // 5. Run.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut events = 0usize;
    let t0 = Instant::now();
    for frame in 0..TOTAL_FRAMES {
        if frame > 0 && frame % FLIP_EVERY_FRAMES == 0 {
            let next = churn(session.roster(), &mut rng);
            for event in session.sync_roster(next) {
                info!(frame, ?event, "roster_event");
                events += 1;
            }
        }
        session.tick(FRAME_SECS, &mut obs);
    }
    session.finish(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "{} frames ({:.1} s simulated) in {:.3} s",
        session.frame(),
        session.elapsed_secs(),
        elapsed.as_secs_f64()
    );
    println!("  roster events   : {events}");
    println!("  walks finished  : {}", obs.arrivals);
    println!("  peak walkers    : {}", obs.busiest);
    println!("  trace directory : {}", out_dir.display());
    println!();

    println!("{:<12} {:<16} {:<10} {:<14} {:<8}", "Agent", "Role", "Status", "Zone", "Busy");
    println!("{}", "-".repeat(62));
    for agent in session.roster() {
        println!(
            "{:<12} {:<16} {:<10} {:<14} {:<8}",
            agent.id.as_str(),
            agent.role.as_str(),
            agent.status.as_str(),
            session.tracked_zone(agent.id.as_str()).map_or("-", |z| z.as_str()),
            if session.is_busy(agent.id.as_str()) { "yes" } else { "no" },
        );
    }

    Ok(())
}
