//! CSV trace backend.
//!
//! Creates two files in the output directory:
//! - `agent_poses.csv`
//! - `arrivals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{ArrivalRow, OutputResult, PoseRow};

pub const POSES_FILE: &str = "agent_poses.csv";
pub const ARRIVALS_FILE: &str = "arrivals.csv";

pub struct CsvTraceWriter {
    poses:    Writer<File>,
    arrivals: Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut poses = Writer::from_path(dir.join(POSES_FILE))?;
        poses.write_record([
            "frame", "elapsed_secs", "agent_id", "x", "y", "z", "rotation_y", "is_moving", "progress",
        ])?;

        let mut arrivals = Writer::from_path(dir.join(ARRIVALS_FILE))?;
        arrivals.write_record(["frame", "agent_id", "x", "y", "z"])?;

        Ok(Self { poses, arrivals, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.frame.to_string(),
                format!("{:.4}", row.elapsed_secs),
                row.agent_id.to_string(),
                row.position.x.to_string(),
                row.position.y.to_string(),
                row.position.z.to_string(),
                row.rotation_y.to_string(),
                (row.is_moving as u8).to_string(),
                row.progress.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()> {
        self.arrivals.write_record(&[
            row.frame.to_string(),
            row.agent_id.to_string(),
            row.position.x.to_string(),
            row.position.y.to_string(),
            row.position.z.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.arrivals.flush()?;
        Ok(())
    }
}
