use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;

use crate::game::GameState;
use crate::model::NoteId;
use crate::traits::render::{ProxyAttrs, RenderTarget};

/// Mirrors game state onto a render target.
///
/// Keeps the set of proxies it has created so `teardown` can release
/// whatever is still on screen when the game stops.
pub struct RenderSink<T: RenderTarget> {
    target: T,
    shown: HashSet<NoteId>,
}

impl<T: RenderTarget> RenderSink<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            shown: HashSet::new(),
        }
    }

    /// Upsert every live note and remove every note that exited in the last
    /// reduction.
    pub fn present(&mut self, state: &GameState) -> Result<()> {
        for entity in &state.live_notes {
            self.target
                .upsert(entity.id(), &ProxyAttrs::from_live(entity))?;
            self.shown.insert(entity.id());
        }
        for entity in &state.exited {
            self.target.remove(entity.id())?;
            self.shown.remove(&entity.id());
        }
        Ok(())
    }

    /// Remove every proxy still tracked.
    pub fn teardown(&mut self) -> Result<()> {
        let mut ids: Vec<NoteId> = self.shown.drain().collect();
        ids.sort();
        debug!(count = ids.len(), "Tearing down render proxies");
        for id in ids {
            self.target.remove(id)?;
        }
        Ok(())
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
