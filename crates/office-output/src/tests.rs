//! Integration tests for office-output.

#[cfg(test)]
mod csv_tests {
    use office_core::{AgentId, Vec3};
    use tempfile::TempDir;

    use crate::csv::{CsvTraceWriter, ARRIVALS_FILE, POSES_FILE};
    use crate::row::{ArrivalRow, PoseRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn pose_row(agent: &str, frame: u64) -> PoseRow {
        PoseRow {
            frame,
            elapsed_secs: frame as f64 / 60.0,
            agent_id:     AgentId::new(agent),
            position:     Vec3::new(1.5, 0.0, -2.0),
            rotation_y:   0.0,
            is_moving:    true,
            progress:     0.25,
        }
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(POSES_FILE).exists());
        assert!(dir.path().join(ARRIVALS_FILE).exists());
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("0001");
        let _w = CsvTraceWriter::new(&nested).unwrap();
        assert!(nested.join(POSES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(POSES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["frame", "elapsed_secs", "agent_id", "x", "y", "z", "rotation_y", "is_moving", "progress"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(ARRIVALS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "agent_id", "x", "y", "z"]);
    }

    #[test]
    fn pose_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_poses(&[pose_row("w1", 6), pose_row("w2", 6)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, POSES_FILE);
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "6");
        assert_eq!(&rows[0][1], "0.1000");
        assert_eq!(&rows[0][2], "w1");
        assert_eq!(&rows[0][3], "1.5");
        assert_eq!(&rows[0][5], "-2");
        assert_eq!(&rows[0][7], "1");
        assert_eq!(&rows[0][8], "0.25");
        assert_eq!(&rows[1][2], "w2");
    }

    #[test]
    fn arrival_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_arrival(&ArrivalRow { frame: 42, agent_id: AgentId::new("lead"), position: Vec3::new(3.0, 0.0, 9.0) })
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, ARRIVALS_FILE);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "42");
        assert_eq!(&rows[0][1], "lead");
        assert_eq!(&rows[0][4], "9");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = tmp();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();
        assert!(CsvTraceWriter::new(&file).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use office_core::{AgentSnapshot, AgentStatus, Role, Vec3};
    use office_sim::{SceneData, SessionBuilder, StaticScene};
    use office_spatial::{DijkstraPathFinder, Waypoint, WaypointGraphBuilder, WaypointTag, Zone};
    use tempfile::TempDir;

    use crate::csv::{CsvTraceWriter, ARRIVALS_FILE, POSES_FILE};
    use crate::observer::TraceObserver;
    use crate::row::{ArrivalRow, PoseRow};
    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult};

    /// Entrance and center 3 units apart: a one-second walk at default speed.
    fn scene() -> StaticScene {
        let mut b = WaypointGraphBuilder::new();
        b.add_waypoint(Waypoint::new("door", Vec3::ZERO).tagged(WaypointTag::Entrance).in_zone("main"));
        b.add_waypoint(Waypoint::new("center", Vec3::new(0.0, 0.0, 3.0)).tagged(WaypointTag::Center).in_zone("main"));
        b.add_edge("door", "center");
        StaticScene::new(SceneData::new(b.build().unwrap(), vec![Zone::shared("main")]))
    }

    fn roster() -> Vec<AgentSnapshot> {
        vec![
            AgentSnapshot::new("w1", Role::Worker, AgentStatus::Idle),
            AgentSnapshot::new("w2", Role::Worker, AgentStatus::Idle),
        ]
    }

    #[test]
    fn session_trace_end_to_end() {
        let dir = TempDir::new().unwrap();
        let mut session = SessionBuilder::new(scene(), DijkstraPathFinder)
            .roster(roster())
            .build()
            .unwrap();

        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap(), 10);
        for _ in 0..120 {
            session.tick(1.0 / 60.0, &mut obs);
        }
        session.finish(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(ARRIVALS_FILE)).unwrap();
        let arrivals: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(arrivals.len(), 2);
        assert_eq!(&arrivals[0][1], "w1");
        assert_eq!(&arrivals[1][1], "w2");
        assert_eq!(&arrivals[0][4], "3");

        let mut rdr = csv::Reader::from_path(dir.path().join(POSES_FILE)).unwrap();
        let poses: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert!(!poses.is_empty());
        for row in &poses {
            let frame: u64 = row[0].parse().unwrap();
            assert_eq!(frame % 10, 0);
            assert_eq!(&row[7], "1");
        }
    }

    /// Records calls and fails every write after the first.
    #[derive(Default)]
    struct Flaky {
        pose_batches: Vec<Vec<PoseRow>>,
        arrivals:     Vec<ArrivalRow>,
        finished:     u32,
    }

    impl TraceWriter for Flaky {
        fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
            self.pose_batches.push(rows.to_vec());
            if self.pose_batches.len() > 1 {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }

        fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()> {
            self.arrivals.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_sampling_respected() {
        let mut session = SessionBuilder::new(scene(), DijkstraPathFinder)
            .roster(roster())
            .build()
            .unwrap();
        let mut obs = TraceObserver::new(Flaky::default(), 0);
        for _ in 0..3 {
            session.tick(1.0 / 60.0, &mut obs);
        }
        session.finish(&mut obs);

        let err = obs.take_error();
        assert!(matches!(err, Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        // Interval 0 means every frame.
        assert_eq!(writer.pose_batches.len(), 3);
        assert_eq!(writer.pose_batches[0].len(), 2);
        assert!(writer.arrivals.is_empty());
        assert_eq!(writer.finished, 1);
    }
}
