use office_core::{AgentId, CoreError, ZoneId};
use office_spatial::WaypointTag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agent {0} appears more than once in the roster")]
    DuplicateAgent(AgentId),

    #[error("no active scene with both a waypoint graph and zones")]
    NoScene,

    #[error("agent {0} is not in the roster")]
    UnknownAgent(AgentId),

    #[error("agent {0} has no target zone")]
    NoTargetZone(AgentId),

    #[error("zone {zone} has no {tag:?} waypoint")]
    NoWaypoint { zone: ZoneId, tag: WaypointTag },

    #[error("scene has no entrance waypoint")]
    NoEntrance,

    #[error("walk for agent {0} did not start")]
    WalkNotStarted(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
