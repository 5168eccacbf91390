//! Integration tests for lp-output.

#[cfg(test)]
mod helpers {
    use lp_core::Cell;
    use lp_schedule::{ConflictScheduler, ScheduledPath};
    use lp_spatial::{CostField, LatticeGraph, Path};

    /// Agent 0 takes three free steps; agent 1 is held one tick at (1,0,0).
    pub fn sample() -> Vec<ScheduledPath> {
        let field = CostField::uniform(3);
        let graph = LatticeGraph::new(&field);
        let cells = |v: &[(i32, i32, i32)]| v.iter().map(|&t| Cell::from(t)).collect::<Vec<_>>();

        let a = Path::from_cells(&graph, cells(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)])).unwrap();
        let b = Path::from_cells(&graph, cells(&[(1, 1, 0), (1, 0, 0)])).unwrap();
        ConflictScheduler::default().schedule(&[a, b]).unwrap().paths
    }
}

#[cfg(test)]
mod row_tests {
    use super::helpers::sample;
    use crate::row::{AgentPathRecord, PathStepRow};

    #[test]
    fn one_row_per_step() {
        let paths = sample();
        let rows: Vec<_> = PathStepRow::rows_of(&paths[1]).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], PathStepRow {
            agent_id:       1,
            step:           1,
            x:              1,
            y:              0,
            z:              0,
            nominal_tick:   1,
            effective_tick: 2,
        });
    }

    #[test]
    fn record_summarizes_path() {
        let paths = sample();
        let rec = AgentPathRecord::from(&paths[1]);
        assert_eq!(rec.agent_id, 1);
        assert_eq!(rec.cells, [[1, 1, 0], [1, 0, 0]]);
        assert_eq!(rec.times, [0, 2]);
        assert_eq!(rec.total_delay, 1);
        assert_eq!(rec.total_weight, 1.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::sample;
    use crate::csv::{CsvRenderer, PATHS_FILE};
    use crate::writer::PathRenderer;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut r = CsvRenderer::new(dir.path()).unwrap();
        r.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(PATHS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "step", "x", "y", "z", "nominal_tick", "effective_tick"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut r = CsvRenderer::new(dir.path()).unwrap();
        r.render(&sample()).unwrap();
        r.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(PATHS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[2][2], "2"); // x of agent 0's goal
        assert_eq!(&rows[4][0], "1");
        assert_eq!(&rows[4][5], "1"); // nominal
        assert_eq!(&rows[4][6], "2"); // effective
    }

    #[test]
    fn csv_to_buffer() {
        let mut r = CsvRenderer::from_writer(Vec::new()).unwrap();
        r.render(&sample()[..1]).unwrap();
        let text = String::from_utf8(r.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "agent_id,step,x,y,z,nominal_tick,effective_tick");
        assert_eq!(lines[1], "0,0,0,0,0,0,0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut r = CsvRenderer::new(dir.path()).unwrap();
        r.finish().unwrap();
        r.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        let result = CsvRenderer::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod text_tests {
    use super::helpers::sample;
    use crate::text::TextRenderer;
    use crate::writer::PathRenderer;

    #[test]
    fn one_line_per_agent() {
        let mut r = TextRenderer::new(Vec::new());
        r.render(&sample()).unwrap();
        r.finish().unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("AgentId(0)  steps=3  weight=2.00  delay=0"));
        assert!(lines[0].ends_with("(0, 0, 0) -> (1, 0, 0) -> (2, 0, 0)"));
        assert!(lines[1].ends_with("(1, 1, 0) -> (1, 0, 0)@T2"));
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let mut r = TextRenderer::new(Vec::new());
        r.render(&[]).unwrap();
        r.finish().unwrap();
        assert!(r.into_inner().is_empty());
    }
}

#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::helpers::sample;
    use crate::json::JsonRenderer;
    use crate::writer::PathRenderer;

    #[test]
    fn array_written_on_finish() {
        let mut r = JsonRenderer::new(Vec::new());
        r.render(&sample()).unwrap();
        r.finish().unwrap();
        r.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&r.into_inner()).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["agent_id"], 1);
        assert_eq!(arr[1]["times"], serde_json::json!([0, 2]));
        assert_eq!(arr[0]["cells"][2], serde_json::json!([2, 0, 0]));
    }
}

#[cfg(test)]
mod observer_tests {
    use lp_core::{AgentRequest, PlannerConfig};
    use lp_plan::PlannerBuilder;
    use lp_spatial::DijkstraRouter;

    use crate::observer::RenderObserver;
    use crate::text::TextRenderer;

    #[test]
    fn renders_scheduled_agents_only() {
        let config = PlannerConfig {
            grid_size:      3,
            obstacle_count: 0,
            num_threads:    Some(1),
            agents:         vec![
                AgentRequest::new((0, 0, 0), (2, 2, 2)),
                AgentRequest::new((0, 0, 0), (3, 0, 0)),
                AgentRequest::new((2, 2, 2), (0, 0, 0)),
            ],
            ..Default::default()
        };
        let planner = PlannerBuilder::new(config, DijkstraRouter).build().unwrap();

        let mut obs = RenderObserver::new(TextRenderer::new(Vec::new()));
        let report = planner.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(report.failure_count(), 1);

        let text = String::from_utf8(obs.into_renderer().into_inner()).unwrap();
        let agents: Vec<_> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(agents, ["AgentId(0)", "AgentId(2)"]);
    }
}
