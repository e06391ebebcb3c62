use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chart::ParsePolicy;
use crate::game::JudgeConfig;
use crate::input::KeyBindings;
use crate::model::Playfield;

pub const CONFIG_FILE: &str = "notefall.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Clock period in milliseconds.
    pub tick_period_ms: u64,
    pub judge: JudgeConfig,
    pub playfield: Playfield,
    pub parse_policy: ParsePolicy,
    pub key_bindings: KeyBindings,
    /// Autoplay press offset from each hit instant (negative = early).
    pub autoplay_offset_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 500,
            judge: JudgeConfig::default(),
            playfield: Playfield::default(),
            parse_policy: ParsePolicy::Skip,
            key_bindings: KeyBindings::default(),
            autoplay_offset_ms: 0.0,
        }
    }
}

impl GameConfig {
    /// Loads config from the default config file.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config: {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            anyhow::bail!("tick_period_ms must be positive");
        }
        if !(self.judge.hit_window_ms.is_finite() && self.judge.hit_window_ms >= 0.0) {
            anyhow::bail!("hit_window_ms must be a non-negative number");
        }
        let (perfect, great) = (self.judge.perfect_ratio, self.judge.great_ratio);
        if !(perfect > 0.0 && perfect <= great && great <= 1.0) {
            anyhow::bail!(
                "judge ratios must satisfy 0 < perfect_ratio <= great_ratio <= 1 (got {perfect}, {great})"
            );
        }
        Ok(())
    }
}
