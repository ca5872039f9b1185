//! Per-agent keyed map.
//!
//! Every piece of mutable per-agent state (zone tracking, movement entries,
//! queued walks) is keyed by [`AgentId`].  With the `fx-hash` feature the
//! map uses FxHash instead of SipHash; construct it with
//! `AgentMap::default()` so both variants work.

use crate::AgentId;

#[cfg(feature = "fx-hash")]
pub type AgentMap<V> = rustc_hash::FxHashMap<AgentId, V>;

#[cfg(not(feature = "fx-hash"))]
pub type AgentMap<V> = std::collections::HashMap<AgentId, V>;
