//! Motion and placement configuration.

use crate::{CoreError, CoreResult, ZoneId};

/// Default walking speed, scene units per second.
pub const DEFAULT_WALK_SPEED: f32 = 3.0;

/// Pause between two consecutive queued walks of one agent, in seconds.
pub const DEFAULT_SETTLE_DELAY_SECS: f32 = 0.15;

/// Reserved id of the shared break-room zone.
pub const BREAK_ROOM_ZONE_ID: &str = "break-room";

/// Walk timing parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MotionConfig {
    /// Speed used for every walk started by the orchestrator.
    pub walk_speed: f32,

    /// Settle delay between consecutive walks of the same agent.
    pub settle_delay_secs: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            walk_speed:        DEFAULT_WALK_SPEED,
            settle_delay_secs: DEFAULT_SETTLE_DELAY_SECS,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.walk_speed.is_finite() || self.walk_speed <= 0.0 {
            return Err(CoreError::Config(format!(
                "walk_speed must be finite and positive, got {}",
                self.walk_speed
            )));
        }
        if !self.settle_delay_secs.is_finite() || self.settle_delay_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "settle_delay_secs must be finite and non-negative, got {}",
                self.settle_delay_secs
            )));
        }
        Ok(())
    }
}

/// Top-level configuration of one office session.
///
/// Typically built in code or loaded from the scene's settings by the
/// application and handed to the session builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct OfficeConfig {
    pub motion: MotionConfig,

    /// Zone id that marks the break room.  Default: [`BREAK_ROOM_ZONE_ID`].
    pub break_room_zone_id: ZoneId,

    /// Zone id of the shared main office.  `None` picks the first zone
    /// without a project that is not the break room.
    pub main_zone_id: Option<ZoneId>,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            motion:             MotionConfig::default(),
            break_room_zone_id: ZoneId::from(BREAK_ROOM_ZONE_ID),
            main_zone_id:       None,
        }
    }
}

impl OfficeConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.motion.validate()?;
        if self.main_zone_id.as_ref() == Some(&self.break_room_zone_id) {
            return Err(CoreError::Config(format!(
                "main zone and break room cannot both be {}",
                self.break_room_zone_id
            )));
        }
        Ok(())
    }
}
