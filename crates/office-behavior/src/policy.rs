//! Destination policy: role × status × zones → zone, tag, and seat.
//!
//! | Role              | Target zone                                                     |
//! |-------------------|-----------------------------------------------------------------|
//! | `Scheduler`       | break room                                                      |
//! | `AdminAssistant`  | break room while not working, else main zone                    |
//! | `Coo`             | main zone                                                       |
//! | `TeamLead`        | break room while it and its project are quiet, else project zone |
//! | `Worker`          | project zone, else main zone                                    |
//! | `Ceo`             | none (the CEO is placed by the renderer, never walked)          |
//!
//! Wherever the break room or a project zone is missing, the main zone is
//! used instead.

use office_core::{AgentSnapshot, AgentStatus, Role, ZoneId};
use office_spatial::WaypointTag;

use crate::ZoneDirectory;

/// Zone `agent` should be in, or `None` if it should not move.
pub fn target_zone<'z>(
    agent:  &AgentSnapshot,
    roster: &[AgentSnapshot],
    zones:  &ZoneDirectory<'z>,
) -> Option<&'z ZoneId> {
    let break_room = zones.break_room().map(|z| &z.id);
    let main = zones.main_zone().map(|z| &z.id);
    let project = || {
        agent
            .project_id
            .as_ref()
            .and_then(|p| zones.project_zone(p))
            .map(|z| &z.id)
    };

    match agent.role {
        Role::Ceo => None,
        Role::Coo => main,
        Role::Scheduler => break_room.or(main),
        Role::AdminAssistant if !agent.status.is_working() => break_room.or(main),
        Role::AdminAssistant => main,
        Role::TeamLead if !agent.status.is_working() && !project_is_active(agent, roster) => {
            break_room.or_else(project).or(main)
        }
        Role::TeamLead | Role::Worker => project().or(main),
    }
}

/// Whether any other worker or team lead sharing `lead`'s project is
/// currently working.
fn project_is_active(lead: &AgentSnapshot, roster: &[AgentSnapshot]) -> bool {
    roster.iter().any(|other| {
        other.id != lead.id
            && matches!(other.role, Role::Worker | Role::TeamLead)
            && other.project_id == lead.project_id
            && other.status.is_working()
    })
}

/// Waypoint tag an agent with `status` heads for inside `zone`.
pub fn target_tag(status: AgentStatus, zone: &ZoneId, zones: &ZoneDirectory<'_>) -> WaypointTag {
    if status.is_working() {
        WaypointTag::Desk
    } else {
        fallback_tag(zone, zones)
    }
}

/// The zone's generic resting tag: `Lounge` in the break room, `Center`
/// everywhere else.
pub fn fallback_tag(zone: &ZoneId, zones: &ZoneDirectory<'_>) -> WaypointTag {
    if zones.is_break_room(zone) {
        WaypointTag::Lounge
    } else {
        WaypointTag::Center
    }
}

const BREAK_ROOM_ORDER: &[Role] = &[Role::Scheduler, Role::AdminAssistant, Role::TeamLead];
const MAIN_ZONE_ORDER: &[Role] =
    &[Role::Ceo, Role::Coo, Role::AdminAssistant, Role::TeamLead, Role::Worker];
const PROJECT_ZONE_ORDER: &[Role] = &[Role::TeamLead, Role::Worker];

/// Seat ordinal of `agent` among the agents sharing its target zone.
///
/// Agents are enumerated by role in a fixed per-zone order, and by roster
/// order within a role.  In the main zone the CEO always takes the leading
/// slot(s) even though it never walks, because the renderer seats it there.
/// Two agents with the same target zone never share an ordinal.
///
/// Returns 0 for an agent with no target zone or absent from `roster`.
pub fn desk_index(agent: &AgentSnapshot, roster: &[AgentSnapshot], zones: &ZoneDirectory<'_>) -> usize {
    let Some(target) = target_zone(agent, roster, zones) else {
        return 0;
    };

    let is_main = zones.is_main_zone(target);
    let order = if zones.is_break_room(target) {
        BREAK_ROOM_ORDER
    } else if is_main {
        MAIN_ZONE_ORDER
    } else {
        PROJECT_ZONE_ORDER
    };

    let mut slot = 0;
    for &role in order {
        for other in roster.iter().filter(|a| a.role == role) {
            let seated_here = (role == Role::Ceo && is_main)
                || target_zone(other, roster, zones) == Some(target);
            if !seated_here {
                continue;
            }
            if other.id == agent.id {
                return slot;
            }
            slot += 1;
        }
    }
    0
}
