//! Roster change events.

use office_core::{AgentId, AgentMap, AgentSnapshot, AgentStatus, ProjectId};

/// One observed change in the agent registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentEvent {
    Spawned(AgentId),
    Removed(AgentId),
    StatusChanged { id: AgentId, from: AgentStatus, to: AgentStatus },
    ProjectChanged { id: AgentId, from: Option<ProjectId>, to: Option<ProjectId> },
}

impl AgentEvent {
    pub fn agent(&self) -> &AgentId {
        match self {
            AgentEvent::Spawned(id)
            | AgentEvent::Removed(id)
            | AgentEvent::StatusChanged { id, .. }
            | AgentEvent::ProjectChanged { id, .. } => id,
        }
    }
}

/// Events turning `prev` into `next`.
///
/// Order: every spawn (in `next` order), then every removal (in `prev`
/// order), then status and project changes per agent in `next` order, a
/// status change before a project change of the same agent.
pub fn diff_rosters(prev: &[AgentSnapshot], next: &[AgentSnapshot]) -> Vec<AgentEvent> {
    let before: AgentMap<&AgentSnapshot> = prev.iter().map(|a| (a.id.clone(), a)).collect();
    let after: AgentMap<&AgentSnapshot> = next.iter().map(|a| (a.id.clone(), a)).collect();

    let mut events: Vec<AgentEvent> = next
        .iter()
        .filter(|a| !before.contains_key(&a.id))
        .map(|a| AgentEvent::Spawned(a.id.clone()))
        .collect();

    events.extend(
        prev.iter()
            .filter(|a| !after.contains_key(&a.id))
            .map(|a| AgentEvent::Removed(a.id.clone())),
    );

    for agent in next {
        let Some(old) = before.get(&agent.id) else {
            continue;
        };
        if old.status != agent.status {
            events.push(AgentEvent::StatusChanged {
                id:   agent.id.clone(),
                from: old.status,
                to:   agent.status,
            });
        }
        if old.project_id != agent.project_id {
            events.push(AgentEvent::ProjectChanged {
                id:   agent.id.clone(),
                from: old.project_id.clone(),
                to:   agent.project_id.clone(),
            });
        }
    }
    events
}
