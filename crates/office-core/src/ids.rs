//! Strongly typed string identifier wrappers.
//!
//! Every id in the office arrives from an external system (the agent
//! registry or the scene authoring tool) as a string, so the wrappers own a
//! `String` rather than an index.  All ids are `Clone + Ord + Hash` and
//! implement `Borrow<str>`, so a map keyed by `AgentId` can be queried with a
//! plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed id wrapper around a `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Registry id of an agent.
    pub struct AgentId;
}

string_id! {
    /// Id of a waypoint, unique within one `WaypointGraph`.
    pub struct WaypointId;
}

string_id! {
    /// Id of a zone (room) in the active scene.
    pub struct ZoneId;
}

string_id! {
    /// Id of the project an agent works on, and that a per-project zone hosts.
    pub struct ProjectId;
}
