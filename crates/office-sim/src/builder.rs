//! Fluent builder for constructing an [`OfficeSession`].

use std::collections::HashSet;

use office_core::{AgentSnapshot, OfficeConfig};
use office_spatial::PathFinder;

use crate::{OfficeSession, SceneSource, SimError, SimResult};

/// Fluent builder for [`OfficeSession<S, R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                   |
/// |---------------|---------------------------|
/// | `.config(c)`  | `OfficeConfig::default()` |
/// | `.roster(v)`  | empty roster              |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(StaticScene::new(scene), DijkstraPathFinder)
///     .roster(agents)
///     .build()?;
/// session.tick(1.0 / 60.0, &mut NoopObserver);
/// ```
pub struct SessionBuilder<S: SceneSource, R: PathFinder> {
    config: OfficeConfig,
    scene:  S,
    finder: R,
    roster: Vec<AgentSnapshot>,
}

impl<S: SceneSource, R: PathFinder> SessionBuilder<S, R> {
    pub fn new(scene: S, finder: R) -> Self {
        Self { config: OfficeConfig::default(), scene, finder, roster: Vec::new() }
    }

    pub fn config(mut self, config: OfficeConfig) -> Self {
        self.config = config;
        self
    }

    /// Agents present when the session starts.  Each is spawned during
    /// [`build`][Self::build].
    pub fn roster(mut self, roster: Vec<AgentSnapshot>) -> Self {
        self.roster = roster;
        self
    }

    /// Validate inputs, spawn the initial roster, and return the session.
    pub fn build(self) -> SimResult<OfficeSession<S, R>> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.roster.len());
        for agent in &self.roster {
            if !seen.insert(&agent.id) {
                return Err(SimError::DuplicateAgent(agent.id.clone()));
            }
        }

        let mut session = OfficeSession::new(self.config, self.scene, self.finder);
        if !self.roster.is_empty() {
            session.sync_roster(self.roster);
        }
        Ok(session)
    }
}
