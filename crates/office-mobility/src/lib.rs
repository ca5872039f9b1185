//! `office-mobility`: continuous walks along waypoint paths.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                       |
//! |------------------|----------------------------------------------------------------|
//! | [`state`]        | `MovementSample`: one sampled pose                             |
//! | [`interpolator`] | `PathInterpolator`: speed-based walk along a `PathNode` list   |
//! | [`ledger`]       | `MovementLedger`: agent → active interpolator + latest sample  |
//! | [`queue`]        | `AnimationQueue`, `MoveRequest`: one pending walk per agent    |
//! | [`engine`]       | `MobilityEngine<R>`: finder + ledger + queue, one tick entry   |
//! | [`error`]        | `MobilityError`, `MobilityResult<T>`                           |
//!
//! # Movement model
//!
//! 1. A walk request names a graph and two waypoints.  The engine starts it
//!    immediately if the agent is free, otherwise parks it in the agent's
//!    single pending slot (a newer request overwrites an older one).
//! 2. Starting a walk searches a path via a pluggable
//!    [`PathFinder`][office_spatial::PathFinder] and builds a
//!    `PathInterpolator`.  If the agent was mid-walk, its live position is
//!    spliced in front so the new walk starts where the agent is drawn.
//! 3. Every frame, `MobilityEngine::tick(delta)` advances all interpolators
//!    by the same `delta`, removes finished ones, and then lets pending
//!    walks start once their agent has been still for the settle delay.
//! 4. The renderer reads `MobilityEngine::position(agent)` each frame.

pub mod engine;
pub mod error;
pub mod interpolator;
pub mod ledger;
pub mod queue;
pub mod state;


pub use engine::{MobilityEngine, TickReport};
pub use error::{MobilityError, MobilityResult};
pub use interpolator::PathInterpolator;
pub use ledger::{MovementEntry, MovementLedger};
pub use queue::{AnimationQueue, MoveRequest};
pub use state::MovementSample;
