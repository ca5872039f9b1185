//! `office-core`: foundational types for the virtual office motion core.
//!
//! This crate is a dependency of every other `office-*` crate.  It has no
//! `office-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `WaypointId`, `ZoneId`, `ProjectId`            |
//! | [`geo`]     | `Vec3`, distance, lerp, facing angle                      |
//! | [`agent`]   | `Role`, `AgentStatus`, `AgentSnapshot`                    |
//! | [`config`]  | `OfficeConfig`, `MotionConfig`                            |
//! | [`map`]     | `AgentMap<V>`: per-agent map (FxHash with `fx-hash`)      |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | `AgentMap<V>` becomes `rustc_hash::FxHashMap`.           |

pub mod agent;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod map;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{AgentSnapshot, AgentStatus, Role};
pub use config::{MotionConfig, OfficeConfig, BREAK_ROOM_ZONE_ID, DEFAULT_SETTLE_DELAY_SECS, DEFAULT_WALK_SPEED};
pub use error::{CoreError, CoreResult};
pub use geo::Vec3;
pub use ids::{AgentId, ProjectId, WaypointId, ZoneId};
pub use map::AgentMap;
