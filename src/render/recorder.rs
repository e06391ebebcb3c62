use std::collections::HashMap;

use anyhow::Result;

use crate::model::NoteId;
use crate::traits::render::{ProxyAttrs, RenderTarget};

/// Recorded proxy command for testing.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Create(NoteId),
    Update(NoteId),
    Remove(NoteId),
}

/// A RenderTarget that keeps proxies in memory and logs every command.
/// Does not require a display.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    proxies: HashMap<NoteId, ProxyAttrs>,
    commands: Vec<RenderCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Clear recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn proxy(&self, id: NoteId) -> Option<&ProxyAttrs> {
        self.proxies.get(&id)
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}

impl RenderTarget for RecordingTarget {
    fn upsert(&mut self, id: NoteId, attrs: &ProxyAttrs) -> Result<()> {
        let command = if self.proxies.contains_key(&id) {
            RenderCommand::Update(id)
        } else {
            RenderCommand::Create(id)
        };
        self.proxies.insert(id, attrs.clone());
        self.commands.push(command);
        Ok(())
    }

    fn remove(&mut self, id: NoteId) -> Result<()> {
        if self.proxies.remove(&id).is_some() {
            self.commands.push(RenderCommand::Remove(id));
        }
        Ok(())
    }
}
