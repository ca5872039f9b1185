//! `office-behavior`: where each agent belongs, and what changed.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`zones`]  | `ZoneDirectory<'z>`: break room, main zone, project rooms        |
//! | [`policy`] | `target_zone`, `target_tag`, `fallback_tag`, `desk_index`        |
//! | [`event`]  | `AgentEvent`, `diff_rosters`                                     |
//!
//! Everything here is a pure function of the roster and the zone list.  The
//! orchestrator in `office-sim` calls it on every relevant event and never
//! caches a decision, so a dropped walk is simply recomputed next time.

pub mod event;
pub mod policy;
pub mod zones;


pub use event::{diff_rosters, AgentEvent};
pub use policy::{desk_index, fallback_tag, target_tag, target_zone};
pub use zones::ZoneDirectory;
