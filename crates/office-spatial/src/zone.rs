//! Zones: named rooms that group waypoints.

use office_core::{ProjectId, ZoneId};

/// A room in the active scene.
///
/// `project_id == None` marks a shared zone (the main office or the break
/// room); `Some` marks a room dedicated to one project.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Zone {
    pub id:         ZoneId,
    pub project_id: Option<ProjectId>,
    /// Display name; unused by placement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name:       Option<String>,
}

impl Zone {
    /// A shared zone (no project).
    pub fn shared(id: impl Into<ZoneId>) -> Self {
        Self { id: id.into(), project_id: None, name: None }
    }

    /// A zone dedicated to `project`.
    pub fn for_project(id: impl Into<ZoneId>, project: impl Into<ProjectId>) -> Self {
        Self { id: id.into(), project_id: Some(project.into()), name: None }
    }

    #[inline]
    pub fn is_shared(&self) -> bool {
        self.project_id.is_none()
    }
}
