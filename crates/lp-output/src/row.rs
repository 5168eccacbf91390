//! Plain data records written by the backends.

use lp_schedule::ScheduledPath;

/// One step of one agent's scheduled path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStepRow {
    pub agent_id:       u32,
    pub step:           u32,
    pub x:              i32,
    pub y:              i32,
    pub z:              i32,
    pub nominal_tick:   u64,
    /// Equal to `nominal_tick` unless the step was delayed.
    pub effective_tick: u64,
}

impl PathStepRow {
    /// All rows for `sp`, in step order.
    pub fn rows_of(sp: &ScheduledPath) -> impl Iterator<Item = PathStepRow> + '_ {
        sp.steps().enumerate().map(move |(step, (cell, nominal, effective))| PathStepRow {
            agent_id:       sp.agent().0,
            step:           step as u32,
            x:              cell.x,
            y:              cell.y,
            z:              cell.z,
            nominal_tick:   nominal.0,
            effective_tick: effective.0,
        })
    }
}

/// Whole-path summary for one agent, as emitted by the JSON backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AgentPathRecord {
    pub agent_id:     u32,
    pub total_weight: f64,
    pub total_delay:  u64,
    pub cells:        Vec<[i32; 3]>,
    pub times:        Vec<u64>,
}

impl From<&ScheduledPath> for AgentPathRecord {
    fn from(sp: &ScheduledPath) -> Self {
        Self {
            agent_id:     sp.agent().0,
            total_weight: sp.path().total_weight(),
            total_delay:  sp.total_delay(),
            cells:        sp.path().cells().iter().map(|c| [c.x, c.y, c.z]).collect(),
            times:        sp.times().iter().map(|t| t.0).collect(),
        }
    }
}
