//! Role-relevant lookups over the active scene's zones.

use office_core::{OfficeConfig, ProjectId, ZoneId};
use office_spatial::Zone;

/// Borrowed view over a zone list that knows which zone is the break room
/// and which is the shared main office.
#[derive(Copy, Clone, Debug)]
pub struct ZoneDirectory<'z> {
    zones:         &'z [Zone],
    break_room_id: &'z ZoneId,
    main_id:       Option<&'z ZoneId>,
}

impl<'z> ZoneDirectory<'z> {
    pub fn new(zones: &'z [Zone], config: &'z OfficeConfig) -> Self {
        Self::with_ids(zones, &config.break_room_zone_id, config.main_zone_id.as_ref())
    }

    pub fn with_ids(zones: &'z [Zone], break_room_id: &'z ZoneId, main_id: Option<&'z ZoneId>) -> Self {
        Self { zones, break_room_id, main_id }
    }

    pub fn zones(&self) -> &'z [Zone] {
        self.zones
    }

    pub fn get(&self, id: &ZoneId) -> Option<&'z Zone> {
        self.zones.iter().find(|z| &z.id == id)
    }

    pub fn break_room(&self) -> Option<&'z Zone> {
        self.get(self.break_room_id)
    }

    pub fn is_break_room(&self, id: &ZoneId) -> bool {
        id == self.break_room_id
    }

    /// The configured main zone if the scene has it, otherwise the first
    /// shared zone that is not the break room.
    pub fn main_zone(&self) -> Option<&'z Zone> {
        self.main_id
            .and_then(|id| self.get(id))
            .or_else(|| {
                self.zones
                    .iter()
                    .find(|z| z.is_shared() && !self.is_break_room(&z.id))
            })
    }

    pub fn is_main_zone(&self, id: &ZoneId) -> bool {
        self.main_zone().is_some_and(|z| &z.id == id)
    }

    /// First zone dedicated to `project`.
    pub fn project_zone(&self, project: &ProjectId) -> Option<&'z Zone> {
        self.zones
            .iter()
            .find(|z| z.project_id.as_ref() == Some(project))
    }
}
