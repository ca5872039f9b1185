//! Where the session gets its waypoint graph and zones from.

use std::sync::Arc;

use office_spatial::{WaypointGraph, Zone};

/// The active scene's movement data.  Either part may be missing, which
/// disables all movement until it appears.
#[derive(Clone, Debug, Default)]
pub struct SceneData {
    pub waypoint_graph: Option<Arc<WaypointGraph>>,
    pub zones:          Option<Arc<[Zone]>>,
}

impl SceneData {
    pub fn new(graph: WaypointGraph, zones: Vec<Zone>) -> Self {
        Self { waypoint_graph: Some(Arc::new(graph)), zones: Some(zones.into()) }
    }

    /// Both parts, if present.
    pub(crate) fn resolve(&self) -> Option<(Arc<WaypointGraph>, Arc<[Zone]>)> {
        match (&self.waypoint_graph, &self.zones) {
            (Some(graph), Some(zones)) => Some((Arc::clone(graph), Arc::clone(zones))),
            _ => None,
        }
    }
}

/// Supplies the currently active scene.  Queried on every roster event, so
/// swapping scenes takes effect at the next event.
pub trait SceneSource {
    fn active_scene(&self) -> Option<SceneData>;
}

/// A scene source holding one (replaceable) scene.
#[derive(Clone, Debug, Default)]
pub struct StaticScene {
    scene: Option<SceneData>,
}

impl StaticScene {
    pub fn new(scene: SceneData) -> Self {
        Self { scene: Some(scene) }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, scene: SceneData) {
        self.scene = Some(scene);
    }

    pub fn clear(&mut self) {
        self.scene = None;
    }
}

impl SceneSource for StaticScene {
    fn active_scene(&self) -> Option<SceneData> {
        self.scene.clone()
    }
}
