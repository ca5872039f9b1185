//! Spatial-subsystem error type.

use thiserror::Error;

use office_core::WaypointId;

/// Errors produced by `office-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: WaypointId, to: WaypointId },

    #[error("waypoint {0} not found in graph")]
    WaypointNotFound(WaypointId),

    #[error("waypoint id {0} is used more than once")]
    DuplicateWaypoint(WaypointId),

    #[error("edge {from} - {to} references an unknown waypoint")]
    UnknownEdgeEndpoint { from: WaypointId, to: WaypointId },

    #[error("edge from {0} to itself")]
    SelfLoop(WaypointId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
