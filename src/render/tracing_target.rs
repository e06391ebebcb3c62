use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, trace};

use crate::model::NoteId;
use crate::traits::render::{ProxyAttrs, RenderTarget};

/// Headless render target that reports proxy changes through `tracing`.
#[derive(Debug, Default)]
pub struct TracingTarget {
    proxies: HashSet<NoteId>,
}

impl TracingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }
}

impl RenderTarget for TracingTarget {
    fn upsert(&mut self, id: NoteId, attrs: &ProxyAttrs) -> Result<()> {
        if self.proxies.insert(id) {
            debug!(
                note = %id,
                lane = attrs.lane.index(),
                instrument = %attrs.instrument,
                "Proxy created"
            );
        }
        trace!(
            note = %id,
            x = attrs.position.x,
            y = attrs.position.y,
            phase = attrs.phase.as_str(),
            "Proxy updated"
        );
        Ok(())
    }

    fn remove(&mut self, id: NoteId) -> Result<()> {
        if self.proxies.remove(&id) {
            debug!(note = %id, "Proxy removed");
        }
        Ok(())
    }
}
