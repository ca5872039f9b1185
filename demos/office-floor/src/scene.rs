//! The embedded office floor: lobby, open-plan office, break room, and two
//! project rooms joined by a hallway.
//!
//! ```text
//!   (atlas-room)          hall-n ────────── (borealis-room)
//!        |                  |                      |
//!   (main office) ──── hall-c ──── (break room)
//!        |
//!     lobby door
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use office_sim::SceneData;
use office_spatial::{WaypointGraph, WaypointGraphData, Zone};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneFile {
    zones:          Vec<Zone>,
    waypoint_graph: WaypointGraphData,
}

const SCENE_JSON: &str = r#"{
  "zones": [
    { "id": "main",          "name": "Open Office" },
    { "id": "break-room",    "name": "Break Room" },
    { "id": "atlas-room",    "name": "Atlas",    "projectId": "atlas" },
    { "id": "borealis-room", "name": "Borealis", "projectId": "borealis" }
  ],
  "waypointGraph": {
    "waypoints": [
      { "id": "lobby-door",  "position": { "x": 0.0,  "y": 0.0, "z": -4.0 }, "tag": "entrance", "zoneId": "main" },
      { "id": "main-center", "position": { "x": 0.0,  "y": 0.0, "z": 2.0 },  "tag": "center",   "zoneId": "main" },
      { "id": "main-desk-1", "position": { "x": -3.0, "y": 0.0, "z": 4.0 },  "tag": "desk",     "zoneId": "main" },
      { "id": "main-desk-2", "position": { "x": -1.0, "y": 0.0, "z": 5.0 },  "tag": "desk",     "zoneId": "main" },
      { "id": "main-desk-3", "position": { "x": 1.0,  "y": 0.0, "z": 5.0 },  "tag": "desk",     "zoneId": "main" },
      { "id": "main-desk-4", "position": { "x": 3.0,  "y": 0.0, "z": 4.0 },  "tag": "desk",     "zoneId": "main" },

      { "id": "hall-c", "position": { "x": 6.0, "y": 0.0, "z": 2.0 },  "tag": "hallway", "label": "Central hall" },
      { "id": "hall-n", "position": { "x": 6.0, "y": 0.0, "z": 10.0 }, "tag": "hallway", "label": "North hall" },

      { "id": "br-lounge-1", "position": { "x": 11.0, "y": 0.0, "z": 1.0 }, "tag": "lounge", "zoneId": "break-room" },
      { "id": "br-lounge-2", "position": { "x": 12.0, "y": 0.0, "z": 3.0 }, "tag": "lounge", "zoneId": "break-room" },
      { "id": "br-desk",     "position": { "x": 14.0, "y": 0.0, "z": 2.0 }, "tag": "desk",   "zoneId": "break-room" },

      { "id": "atlas-center", "position": { "x": 0.0,  "y": 0.0, "z": 12.0 }, "tag": "center", "zoneId": "atlas-room" },
      { "id": "atlas-desk-1", "position": { "x": -2.0, "y": 0.0, "z": 15.0 }, "tag": "desk",   "zoneId": "atlas-room" },
      { "id": "atlas-desk-2", "position": { "x": 2.0,  "y": 0.0, "z": 15.0 }, "tag": "desk",   "zoneId": "atlas-room" },

      { "id": "borealis-center", "position": { "x": 12.0, "y": 0.0, "z": 12.0 }, "tag": "center", "zoneId": "borealis-room" },
      { "id": "borealis-desk-1", "position": { "x": 10.0, "y": 0.0, "z": 15.0 }, "tag": "desk",   "zoneId": "borealis-room" },
      { "id": "borealis-desk-2", "position": { "x": 14.0, "y": 0.0, "z": 15.0 }, "tag": "desk",   "zoneId": "borealis-room" }
    ],
    "edges": [
      { "from": "lobby-door",  "to": "main-center" },
      { "from": "main-center", "to": "main-desk-1" },
      { "from": "main-center", "to": "main-desk-2" },
      { "from": "main-center", "to": "main-desk-3" },
      { "from": "main-center", "to": "main-desk-4" },
      { "from": "main-center", "to": "hall-c" },
      { "from": "hall-c",      "to": "br-lounge-1" },
      { "from": "br-lounge-1", "to": "br-lounge-2" },
      { "from": "br-lounge-2", "to": "br-desk" },
      { "from": "hall-c",      "to": "hall-n" },
      { "from": "hall-n",      "to": "atlas-center" },
      { "from": "atlas-center", "to": "atlas-desk-1" },
      { "from": "atlas-center", "to": "atlas-desk-2" },
      { "from": "hall-n",      "to": "borealis-center" },
      { "from": "borealis-center", "to": "borealis-desk-1" },
      { "from": "borealis-center", "to": "borealis-desk-2" }
    ]
  }
}"#;

/// Parse and index the embedded scene.
pub fn load_scene() -> Result<SceneData> {
    let file: SceneFile = serde_json::from_str(SCENE_JSON).context("parse embedded scene")?;
    let graph = WaypointGraph::from_data(file.waypoint_graph).context("build waypoint graph")?;
    Ok(SceneData::new(graph, file.zones))
}
