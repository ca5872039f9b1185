//! Predicate lookups over a [`WaypointGraph`].
//!
//! Results preserve authored waypoint order.  Callers pick the Nth match by
//! a separately computed ordinal, so the order must be identical for
//! identical input.

use office_core::{Vec3, ZoneId};

use crate::{Waypoint, WaypointGraph, WaypointTag};

/// All waypoints in `zone_id` (or the hallway, for `None`) carrying `tag`,
/// in authored order.
pub fn find_waypoints_by_zone_and_tag<'g>(
    graph:   &'g WaypointGraph,
    zone_id: Option<&ZoneId>,
    tag:     WaypointTag,
) -> Vec<&'g Waypoint> {
    graph
        .waypoints()
        .iter()
        .filter(|wp| wp.tag == Some(tag) && wp.zone_id.as_ref() == zone_id)
        .collect()
}

/// Euclidean-nearest waypoint to `position`.
pub fn find_nearest_waypoint(graph: &WaypointGraph, position: Vec3) -> Option<&Waypoint> {
    graph.nearest_waypoint(position)
}

/// Up to `k` waypoints sorted by distance from `position`.
pub fn k_nearest_waypoints(graph: &WaypointGraph, position: Vec3, k: usize) -> Vec<&Waypoint> {
    graph.k_nearest_waypoints(position, k)
}

/// The `ordinal`-th waypoint (modulo the number of matches) in `zone_id`
/// tagged `tag`, or `None` if the zone has no such waypoint.
pub fn pick_waypoint<'g>(
    graph:   &'g WaypointGraph,
    zone_id: &ZoneId,
    tag:     WaypointTag,
    ordinal: usize,
) -> Option<&'g Waypoint> {
    let slots = find_waypoints_by_zone_and_tag(graph, Some(zone_id), tag);
    if slots.is_empty() {
        return None;
    }
    Some(slots[ordinal % slots.len()])
}
