//! `TraceObserver<W>`: bridges `SessionObserver` to a `TraceWriter`.

use office_core::AgentId;
use office_mobility::{MovementLedger, MovementSample};
use office_sim::SessionObserver;

use crate::row::{ArrivalRow, PoseRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes every arrival and, every
/// `sample_every` frames, the pose of every walking agent.
///
/// Errors from the writer are kept (first one wins) because observer
/// callbacks return nothing; check [`take_error`][Self::take_error] after
/// the session finishes.
pub struct TraceObserver<W: TraceWriter> {
    writer:       W,
    sample_every: u64,
    last_error:   Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// `sample_every` of 0 is treated as 1.
    pub fn new(writer: W, sample_every: u64) -> Self {
        Self { writer, sample_every: sample_every.max(1), last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SessionObserver for TraceObserver<W> {
    fn on_walk_finished(&mut self, frame: u64, agent: &AgentId, pose: &MovementSample) {
        let row = ArrivalRow { frame, agent_id: agent.clone(), position: pose.position };
        let result = self.writer.write_arrival(&row);
        self.store_err(result);
    }

    fn on_frame_end(&mut self, frame: u64, elapsed_secs: f64, ledger: &MovementLedger) {
        if frame % self.sample_every != 0 || ledger.is_empty() {
            return;
        }
        let rows: Vec<PoseRow> = ledger
            .samples()
            .into_iter()
            .map(|(agent, sample)| PoseRow::new(frame, elapsed_secs, agent, &sample))
            .collect();
        let result = self.writer.write_poses(&rows);
        self.store_err(result);
    }

    fn on_session_end(&mut self, _final_frame: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
