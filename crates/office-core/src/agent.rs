//! Agent roles, statuses, and the registry snapshot of one agent.

use std::fmt;
use std::str::FromStr;

use crate::{AgentId, CoreError, ProjectId};

/// The job an agent holds in the office.  Placement policy dispatches on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Ceo,
    Coo,
    AdminAssistant,
    TeamLead,
    Worker,
    Scheduler,
}

impl Role {
    /// Registry string form (`"team_lead"`, `"admin_assistant"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Ceo            => "ceo",
            Role::Coo            => "coo",
            Role::AdminAssistant => "admin_assistant",
            Role::TeamLead       => "team_lead",
            Role::Worker         => "worker",
            Role::Scheduler      => "scheduler",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceo"             => Ok(Role::Ceo),
            "coo"             => Ok(Role::Coo),
            "admin_assistant" => Ok(Role::AdminAssistant),
            "team_lead"       => Ok(Role::TeamLead),
            "worker"          => Ok(Role::Worker),
            "scheduler"       => Ok(Role::Scheduler),
            other             => Err(CoreError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an agent is currently doing, as reported by the registry.
///
/// Only `Thinking` and `Acting` count as working; every other status is
/// treated as idle when choosing where an agent should stand.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentStatus {
    #[default]
    Idle,
    Thinking,
    Acting,
    Done,
    Error,
}

impl AgentStatus {
    /// `true` for `Thinking` and `Acting`.
    #[inline]
    pub fn is_working(self) -> bool {
        matches!(self, AgentStatus::Thinking | AgentStatus::Acting)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Idle     => "idle",
            AgentStatus::Thinking => "thinking",
            AgentStatus::Acting   => "acting",
            AgentStatus::Done     => "done",
            AgentStatus::Error    => "error",
        }
    }
}

impl FromStr for AgentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle"     => Ok(AgentStatus::Idle),
            "thinking" => Ok(AgentStatus::Thinking),
            "acting"   => Ok(AgentStatus::Acting),
            "done"     => Ok(AgentStatus::Done),
            "error"    => Ok(AgentStatus::Error),
            other      => Err(CoreError::UnknownStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agent as the registry reports it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AgentSnapshot {
    pub id:         AgentId,
    pub role:       Role,
    pub status:     AgentStatus,
    pub project_id: Option<ProjectId>,
}

impl AgentSnapshot {
    pub fn new(id: impl Into<AgentId>, role: Role, status: AgentStatus) -> Self {
        Self { id: id.into(), role, status, project_id: None }
    }

    /// Builder-style project assignment.
    pub fn with_project(mut self, project: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project.into());
        self
    }

    /// Parse the registry's string form of role and status.
    pub fn parse(
        id:         &str,
        role:       &str,
        status:     &str,
        project_id: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id:         AgentId::from(id),
            role:       role.parse()?,
            status:     status.parse()?,
            project_id: project_id.map(ProjectId::from),
        })
    }
}
