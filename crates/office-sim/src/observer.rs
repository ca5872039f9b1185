//! Session observer trait for tracing and data collection.

use office_core::AgentId;
use office_mobility::{MovementLedger, MovementSample};

/// Callbacks invoked by [`OfficeSession::tick`][crate::OfficeSession::tick].
///
/// All methods default to no-ops.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct Arrivals;
///
/// impl SessionObserver for Arrivals {
///     fn on_walk_finished(&mut self, frame: u64, agent: &AgentId, pose: &MovementSample) {
///         println!("frame {frame}: {agent} arrived at {}", pose.position);
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Before the engine advances.
    fn on_frame_start(&mut self, _frame: u64, _elapsed_secs: f64) {}

    /// Once per walk that ended this frame, in agent id order.
    fn on_walk_finished(&mut self, _frame: u64, _agent: &AgentId, _pose: &MovementSample) {}

    /// After the engine advanced.  `ledger` holds every walk still active.
    fn on_frame_end(&mut self, _frame: u64, _elapsed_secs: f64, _ledger: &MovementLedger) {}

    /// Once, from [`OfficeSession::finish`][crate::OfficeSession::finish].
    fn on_session_end(&mut self, _final_frame: u64) {}
}

pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
