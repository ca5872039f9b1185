//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Authored edges are undirected.  At build time each one is stored in both
//! directions in **Compressed Sparse Row (CSR)** form, so the neighbours of
//! waypoint index `i` occupy:
//!
//! ```text
//! adj_to[ adj_start[i] .. adj_start[i+1] ]
//! ```
//!
//! with the Euclidean segment length alongside in `adj_length`.  Within one
//! source waypoint, neighbours keep authored edge order, which makes every
//! search over the graph deterministic.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a scene position to the nearest waypoint.
//! Used to guess an agent's location when its last real waypoint is unknown.

use std::collections::{HashMap, HashSet};

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use office_core::{Vec3, WaypointId, ZoneId};

use crate::{SpatialError, SpatialResult};

// ── Authored data ─────────────────────────────────────────────────────────────

/// Semantic role of a waypoint within its zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WaypointTag {
    Entrance,
    Desk,
    Center,
    Lounge,
    Hallway,
    Meeting,
}

/// A named point agents can stand at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Waypoint {
    pub id:       WaypointId,
    pub position: Vec3,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag:      Option<WaypointTag>,
    /// `None` means the waypoint belongs to the shared hallway.
    #[cfg_attr(feature = "serde", serde(default))]
    pub zone_id:  Option<ZoneId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label:    Option<String>,
}

impl Waypoint {
    pub fn new(id: impl Into<WaypointId>, position: Vec3) -> Self {
        Self { id: id.into(), position, tag: None, zone_id: None, label: None }
    }

    pub fn tagged(mut self, tag: WaypointTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn in_zone(mut self, zone: impl Into<ZoneId>) -> Self {
        self.zone_id = Some(zone.into());
        self
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// An undirected walkable connection between two waypoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointEdge {
    pub from: WaypointId,
    pub to:   WaypointId,
}

impl WaypointEdge {
    pub fn new(from: impl Into<WaypointId>, to: impl Into<WaypointId>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

/// The graph exactly as the scene source authored it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointGraphData {
    pub waypoints: Vec<Waypoint>,
    pub edges:     Vec<WaypointEdge>,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct WaypointEntry {
    point: [f32; 3],
    index: u32,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// Read-only waypoint graph for one scene: authored data plus CSR adjacency
/// and a spatial index.
///
/// Construct with [`WaypointGraph::from_data`] or [`WaypointGraphBuilder`].
pub struct WaypointGraph {
    waypoints: Vec<Waypoint>,
    edges:     Vec<WaypointEdge>,
    index:     HashMap<WaypointId, u32>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    adj_start:  Vec<u32>,
    adj_to:     Vec<u32>,
    adj_length: Vec<f32>,

    spatial_idx: RTree<WaypointEntry>,
}

impl WaypointGraph {
    /// Validate and index authored graph data.
    pub fn from_data(data: WaypointGraphData) -> SpatialResult<Self> {
        WaypointGraphBuilder { waypoints: data.waypoints, edges: data.edges }.build()
    }

    /// A graph with no waypoints.  Every path query against it fails.
    pub fn empty() -> Self {
        assemble(Vec::new(), Vec::new(), HashMap::new())
    }

    /// Two waypoints joined by a single edge.
    ///
    /// Zone-to-zone walks use this instead of the scene graph so the agent
    /// walks straight from the old room to its new spot.
    pub fn direct_hop(from: &Waypoint, to: &Waypoint) -> Self {
        if from.id == to.id {
            let index = HashMap::from([(from.id.clone(), 0)]);
            return assemble(vec![from.clone()], Vec::new(), index);
        }
        let index = HashMap::from([(from.id.clone(), 0), (to.id.clone(), 1)]);
        let edges = vec![WaypointEdge { from: from.id.clone(), to: to.id.clone() }];
        assemble(vec![from.clone(), to.clone()], edges, index)
    }

    /// Copy of the authored data (e.g. to hand back to an editor).
    pub fn to_data(&self) -> WaypointGraphData {
        WaypointGraphData { waypoints: self.waypoints.clone(), edges: self.edges.clone() }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// All waypoints in authored order.
    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// All distinct undirected edges in authored order.
    #[inline]
    pub fn edges(&self) -> &[WaypointEdge] {
        &self.edges
    }

    #[inline]
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.index_of(id).map(|i| &self.waypoints[i as usize])
    }

    #[inline]
    pub fn waypoint_at(&self, index: u32) -> &Waypoint {
        &self.waypoints[index as usize]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(neighbour index, segment length)` pairs of waypoint `index`.
    ///
    /// This is a contiguous slice scan: no heap allocation.
    #[inline]
    pub fn neighbors(&self, index: u32) -> impl Iterator<Item = (u32, f32)> + '_ {
        let start = self.adj_start[index as usize] as usize;
        let end   = self.adj_start[index as usize + 1] as usize;
        (start..end).map(move |e| (self.adj_to[e], self.adj_length[e]))
    }

    #[inline]
    pub fn degree(&self, index: u32) -> usize {
        (self.adj_start[index as usize + 1] - self.adj_start[index as usize]) as usize
    }

    /// `true` if an edge joins `a` and `b` (either direction).
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.neighbors(ia).any(|(n, _)| n == ib),
            _ => false,
        }
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Euclidean-nearest waypoint to `position`, or `None` for an empty graph.
    pub fn nearest_waypoint(&self, position: Vec3) -> Option<&Waypoint> {
        self.spatial_idx
            .nearest_neighbor(&position.to_array())
            .map(|e| &self.waypoints[e.index as usize])
    }

    /// Up to `k` waypoints sorted by ascending distance from `position`.
    pub fn k_nearest_waypoints(&self, position: Vec3, k: usize) -> Vec<&Waypoint> {
        self.spatial_idx
            .nearest_neighbor_iter(&position.to_array())
            .take(k)
            .map(|e| &self.waypoints[e.index as usize])
            .collect()
    }
}

impl std::fmt::Debug for WaypointGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaypointGraph")
            .field("waypoints", &self.waypoints.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use office_core::Vec3;
/// use office_spatial::{Waypoint, WaypointGraphBuilder, WaypointTag};
///
/// let mut b = WaypointGraphBuilder::new();
/// b.add_waypoint(Waypoint::new("door", Vec3::new(0.0, 0.0, 0.0)).tagged(WaypointTag::Entrance));
/// b.add_waypoint(Waypoint::new("desk-1", Vec3::new(4.0, 0.0, 0.0)).tagged(WaypointTag::Desk));
/// b.add_edge("door", "desk-1");
/// let graph = b.build().unwrap();
/// assert_eq!(graph.waypoint_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct WaypointGraphBuilder {
    waypoints: Vec<Waypoint>,
    edges:     Vec<WaypointEdge>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(waypoints: usize, edges: usize) -> Self {
        Self {
            waypoints: Vec::with_capacity(waypoints),
            edges:     Vec::with_capacity(edges),
        }
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Add an undirected edge.  Endpoints are resolved at `build()`.
    pub fn add_edge(&mut self, from: impl Into<WaypointId>, to: impl Into<WaypointId>) {
        self.edges.push(WaypointEdge::new(from, to));
    }

    pub fn waypoint_count(&self) -> usize { self.waypoints.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Validate and consume the builder.
    ///
    /// # Errors
    ///
    /// Duplicate waypoint ids, edges naming an unknown waypoint, and
    /// self-loops are rejected.  An edge repeating an earlier pair (in either
    /// direction) is dropped.
    pub fn build(self) -> SpatialResult<WaypointGraph> {
        let mut index = HashMap::with_capacity(self.waypoints.len());
        for (i, wp) in self.waypoints.iter().enumerate() {
            if index.insert(wp.id.clone(), i as u32).is_some() {
                return Err(SpatialError::DuplicateWaypoint(wp.id.clone()));
            }
        }

        let mut seen  = HashSet::with_capacity(self.edges.len());
        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in self.edges {
            let (Some(&a), Some(&b)) = (index.get(&edge.from), index.get(&edge.to)) else {
                return Err(SpatialError::UnknownEdgeEndpoint { from: edge.from, to: edge.to });
            };
            if a == b {
                return Err(SpatialError::SelfLoop(edge.from));
            }
            if !seen.insert((a.min(b), a.max(b))) {
                debug!(from = %edge.from, to = %edge.to, "duplicate_edge_dropped");
                continue;
            }
            edges.push(edge);
        }

        Ok(assemble(self.waypoints, edges, index))
    }
}

/// Build CSR adjacency and the R-tree from already-validated parts.
fn assemble(
    waypoints: Vec<Waypoint>,
    edges:     Vec<WaypointEdge>,
    index:     HashMap<WaypointId, u32>,
) -> WaypointGraph {
    let n = waypoints.len();

    // Each undirected edge becomes two directed arcs.
    let mut arcs: Vec<(u32, u32, f32)> = Vec::with_capacity(edges.len() * 2);
    for edge in &edges {
        let a = index[&edge.from];
        let b = index[&edge.to];
        let len = waypoints[a as usize].position.distance(waypoints[b as usize].position);
        arcs.push((a, b, len));
        arcs.push((b, a, len));
    }
    // Stable sort keeps authored order among one waypoint's neighbours.
    arcs.sort_by_key(|&(from, _, _)| from);

    let mut adj_start = vec![0u32; n + 1];
    for &(from, _, _) in &arcs {
        adj_start[from as usize + 1] += 1;
    }
    for i in 1..=n {
        adj_start[i] += adj_start[i - 1];
    }
    debug_assert_eq!(adj_start[n] as usize, arcs.len());

    let adj_to     = arcs.iter().map(|&(_, to, _)| to).collect();
    let adj_length = arcs.iter().map(|&(_, _, len)| len).collect();

    let entries: Vec<WaypointEntry> = waypoints
        .iter()
        .enumerate()
        .map(|(i, wp)| WaypointEntry { point: wp.position.to_array(), index: i as u32 })
        .collect();
    let spatial_idx = RTree::bulk_load(entries);

    WaypointGraph {
        waypoints,
        edges,
        index,
        adj_start,
        adj_to,
        adj_length,
        spatial_idx,
    }
}
