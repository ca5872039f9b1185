//! Path search over the waypoint graph.
//!
//! # Pluggability
//!
//! The mobility engine calls path search through the [`PathFinder`] trait,
//! so applications can swap the default [`DijkstraPathFinder`] (shortest
//! walking distance) for [`BfsPathFinder`] (fewest waypoints) or their own
//! implementation without touching the engine.
//!
//! A found path is never approximated: either every consecutive pair of
//! nodes is joined by a graph edge, or the search fails.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use office_core::{Vec3, WaypointId};

use crate::graph::WaypointGraph;
use crate::{SpatialError, SpatialResult};

// ── PathNode ──────────────────────────────────────────────────────────────────

/// One point of a walk.
#[derive(Clone, Debug, PartialEq)]
pub enum PathNode {
    /// A real waypoint of the graph.
    Waypoint { id: WaypointId, position: Vec3 },

    /// The agent's current rendered position, spliced in front of a new
    /// path so an interrupted walk continues without snapping.
    LivePosition { position: Vec3 },
}

impl PathNode {
    #[inline]
    pub fn position(&self) -> Vec3 {
        match self {
            PathNode::Waypoint { position, .. } | PathNode::LivePosition { position } => *position,
        }
    }

    /// The waypoint id, or `None` for a live-position node.
    #[inline]
    pub fn waypoint_id(&self) -> Option<&WaypointId> {
        match self {
            PathNode::Waypoint { id, .. } => Some(id),
            PathNode::LivePosition { .. } => None,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, PathNode::LivePosition { .. })
    }

    fn at(graph: &WaypointGraph, index: u32) -> Self {
        let wp = graph.waypoint_at(index);
        PathNode::Waypoint { id: wp.id.clone(), position: wp.position }
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
pub trait PathFinder: Send + Sync {
    /// Ordered nodes from `from` to `to`, both included.
    ///
    /// `from == to` yields a single-node path.  Fails with
    /// [`SpatialError::WaypointNotFound`] if either id is absent and with
    /// [`SpatialError::NoPath`] if `to` is unreachable.
    fn find_path(
        &self,
        graph: &WaypointGraph,
        from:  &WaypointId,
        to:    &WaypointId,
    ) -> SpatialResult<Vec<PathNode>>;
}

/// Shortest path by total segment length using the default finder.
///
/// Returns `None` when either id is missing or no path exists; callers treat
/// that as "nothing to walk".
pub fn find_path(graph: &WaypointGraph, from: &WaypointId, to: &WaypointId) -> Option<Vec<PathNode>> {
    DijkstraPathFinder.find_path(graph, from, to).ok()
}

fn endpoints(graph: &WaypointGraph, from: &WaypointId, to: &WaypointId) -> SpatialResult<(u32, u32)> {
    let src = graph
        .index_of(from.as_str())
        .ok_or_else(|| SpatialError::WaypointNotFound(from.clone()))?;
    let dst = graph
        .index_of(to.as_str())
        .ok_or_else(|| SpatialError::WaypointNotFound(to.clone()))?;
    Ok((src, dst))
}

/// Walk `prev` back from `dst` to `src` and emit nodes in travel order.
fn reconstruct(graph: &WaypointGraph, prev: &[u32], src: u32, dst: u32) -> Vec<PathNode> {
    let mut indices = vec![dst];
    let mut cur = dst;
    while cur != src {
        cur = prev[cur as usize];
        indices.push(cur);
    }
    indices.reverse();
    indices.into_iter().map(|i| PathNode::at(graph, i)).collect()
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Dijkstra's algorithm with Euclidean segment lengths as cost.
///
/// Ties are broken by waypoint index, so identical input always yields the
/// identical path.
pub struct DijkstraPathFinder;

/// Heap key: a non-NaN distance with a total order.
#[derive(Copy, Clone, Debug)]
struct Cost(f32);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PathFinder for DijkstraPathFinder {
    fn find_path(
        &self,
        graph: &WaypointGraph,
        from:  &WaypointId,
        to:    &WaypointId,
    ) -> SpatialResult<Vec<PathNode>> {
        let (src, dst) = endpoints(graph, from, to)?;
        if src == dst {
            return Ok(vec![PathNode::at(graph, src)]);
        }

        let n = graph.waypoint_count();
        let mut dist = vec![f32::INFINITY; n];
        let mut prev = vec![u32::MAX; n];
        dist[src as usize] = 0.0;

        // Reverse turns the max-heap into a min-heap; the index breaks ties.
        let mut heap: BinaryHeap<Reverse<(Cost, u32)>> = BinaryHeap::new();
        heap.push(Reverse((Cost(0.0), src)));

        while let Some(Reverse((Cost(cost), node))) = heap.pop() {
            if node == dst {
                return Ok(reconstruct(graph, &prev, src, dst));
            }
            // Skip stale heap entries.
            if cost > dist[node as usize] {
                continue;
            }
            for (neighbor, length) in graph.neighbors(node) {
                let next = cost + length;
                if next < dist[neighbor as usize] {
                    dist[neighbor as usize] = next;
                    prev[neighbor as usize] = node;
                    heap.push(Reverse((Cost(next), neighbor)));
                }
            }
        }

        Err(SpatialError::NoPath { from: from.clone(), to: to.clone() })
    }
}

// ── BfsPathFinder ─────────────────────────────────────────────────────────────

/// Breadth-first search: the path with the fewest waypoints, ignoring
/// segment lengths.
pub struct BfsPathFinder;

impl PathFinder for BfsPathFinder {
    fn find_path(
        &self,
        graph: &WaypointGraph,
        from:  &WaypointId,
        to:    &WaypointId,
    ) -> SpatialResult<Vec<PathNode>> {
        let (src, dst) = endpoints(graph, from, to)?;
        if src == dst {
            return Ok(vec![PathNode::at(graph, src)]);
        }

        let n = graph.waypoint_count();
        let mut visited = vec![false; n];
        let mut prev    = vec![u32::MAX; n];
        let mut queue   = VecDeque::new();
        visited[src as usize] = true;
        queue.push_back(src);

        while let Some(node) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(node) {
                if visited[neighbor as usize] {
                    continue;
                }
                visited[neighbor as usize] = true;
                prev[neighbor as usize] = node;
                if neighbor == dst {
                    return Ok(reconstruct(graph, &prev, src, dst));
                }
                queue.push_back(neighbor);
            }
        }

        Err(SpatialError::NoPath { from: from.clone(), to: to.clone() })
    }
}
