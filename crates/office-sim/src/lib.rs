//! `office-sim`: the orchestrator that turns roster changes into walks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`scene`]    | `SceneSource` trait, `SceneData`, `StaticScene`                |
//! | [`session`]  | `OfficeSession<S, R>`: tracking maps, event handling, `tick`   |
//! | [`observer`] | `SessionObserver` trait, `NoopObserver`                        |
//! | [`builder`]  | `SessionBuilder<S, R>`: validated construction                 |
//! | [`error`]    | `SimError`, `SimResult<T>`                                     |
//!
//! # Frame loop
//!
//! ```text
//! registry change ──► sync_roster(next) ──► AgentEvent* ──► plan ──► enqueue
//!                                                                      │
//! render frame ─────► tick(delta) ──► engine.tick ──► observer ◄───────┘
//!                          │
//!                          └──► position(agent) / is_busy(agent)
//! ```
//!
//! Everything runs on the caller's thread.  Event handling and `tick` are
//! the only mutation points; a decision that cannot be carried out (no
//! scene, no zone, no waypoint, no path) is logged at `debug` and dropped.

pub mod builder;
pub mod error;
pub mod observer;
pub mod scene;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SessionObserver};
pub use scene::{SceneData, SceneSource, StaticScene};
pub use session::OfficeSession;
