//! `office-spatial`: waypoint graph, zones, spatial indexing, and path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`graph`]  | `Waypoint`, `WaypointTag`, `WaypointEdge`, `WaypointGraph` (CSR + R-tree), builder |
//! | [`zone`]   | `Zone`                                                          |
//! | [`router`] | `PathNode`, `PathFinder` trait, `DijkstraPathFinder`, `BfsPathFinder`, `find_path` |
//! | [`query`]  | zone/tag lookup, nearest-waypoint lookup, ordinal slot picking  |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the authored data types. |

pub mod error;
pub mod graph;
pub mod query;
pub mod router;
pub mod zone;


pub use error::{SpatialError, SpatialResult};
pub use graph::{Waypoint, WaypointEdge, WaypointGraph, WaypointGraphBuilder, WaypointGraphData, WaypointTag};
pub use query::{find_nearest_waypoint, find_waypoints_by_zone_and_tag, k_nearest_waypoints, pick_waypoint};
pub use router::{find_path, BfsPathFinder, DijkstraPathFinder, PathFinder, PathNode};
pub use zone::Zone;
