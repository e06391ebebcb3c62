use serde::{Deserialize, Serialize};

/// Timing direction for FAST/SLOW display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingDirection {
    Fast,
    Exact,
    Slow,
}

impl TimingDirection {
    const EXACT_THRESHOLD_MS: f64 = 1.0;

    /// `timing_diff_ms` is press time minus hit time (negative = early).
    pub fn from_timing_diff(timing_diff_ms: f64) -> Self {
        if timing_diff_ms < -Self::EXACT_THRESHOLD_MS {
            TimingDirection::Fast
        } else if timing_diff_ms > Self::EXACT_THRESHOLD_MS {
            TimingDirection::Slow
        } else {
            TimingDirection::Exact
        }
    }
}

/// Cumulative FAST/SLOW statistics during gameplay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingStats {
    pub fast_count: u32,
    pub slow_count: u32,
}

impl TimingStats {
    pub fn record(&mut self, grade: JudgeGrade, timing_diff_ms: f64) {
        // PERFECT is never shown as fast or slow
        if grade == JudgeGrade::Perfect {
            return;
        }

        match TimingDirection::from_timing_diff(timing_diff_ms) {
            TimingDirection::Fast => self.fast_count += 1,
            TimingDirection::Slow => self.slow_count += 1,
            TimingDirection::Exact => {}
        }
    }
}

/// Accuracy grade of a hit. Closer to the window centre is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgeGrade {
    Perfect,
    Great,
    Good,
}

impl JudgeGrade {
    /// Base points awarded before the combo multiplier.
    pub fn base_points(self) -> u64 {
        match self {
            Self::Perfect => 300,
            Self::Great => 200,
            Self::Good => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Half-width of the hit window (ε) in milliseconds.
    pub hit_window_ms: f64,
    /// Fraction of ε that still counts as PERFECT.
    pub perfect_ratio: f64,
    /// Fraction of ε that still counts as GREAT.
    pub great_ratio: f64,
}

impl JudgeConfig {
    pub const DEFAULT_HIT_WINDOW_MS: f64 = 50.0;

    pub fn with_hit_window(hit_window_ms: f64) -> Self {
        Self {
            hit_window_ms,
            ..Self::default()
        }
    }

    pub fn builder() -> JudgeConfigBuilder {
        JudgeConfigBuilder::default()
    }

    pub fn perfect_window(&self) -> f64 {
        self.hit_window_ms * self.perfect_ratio
    }

    pub fn great_window(&self) -> f64 {
        self.hit_window_ms * self.great_ratio
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            hit_window_ms: Self::DEFAULT_HIT_WINDOW_MS,
            perfect_ratio: 0.4,
            great_ratio: 0.7,
        }
    }
}

#[derive(Debug, Default)]
pub struct JudgeConfigBuilder {
    hit_window_ms: Option<f64>,
    perfect_ratio: Option<f64>,
    great_ratio: Option<f64>,
}

impl JudgeConfigBuilder {
    pub fn hit_window(mut self, ms: f64) -> Self {
        self.hit_window_ms = Some(ms);
        self
    }

    pub fn perfect_ratio(mut self, ratio: f64) -> Self {
        self.perfect_ratio = Some(ratio);
        self
    }

    pub fn great_ratio(mut self, ratio: f64) -> Self {
        self.great_ratio = Some(ratio);
        self
    }

    pub fn build(self) -> JudgeConfig {
        let default = JudgeConfig::default();
        JudgeConfig {
            hit_window_ms: self.hit_window_ms.unwrap_or(default.hit_window_ms),
            perfect_ratio: self.perfect_ratio.unwrap_or(default.perfect_ratio),
            great_ratio: self.great_ratio.unwrap_or(default.great_ratio),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgeSystem {
    config: JudgeConfig,
}

impl JudgeSystem {
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    pub fn hit_window_ms(&self) -> f64 {
        self.config.hit_window_ms
    }

    /// Grade a press. `time_diff_ms` is press time minus hit time.
    pub fn judge(&self, time_diff_ms: f64) -> Option<JudgeGrade> {
        let abs_diff = time_diff_ms.abs();
        // Also rejects NaN.
        if !(abs_diff <= self.config.hit_window_ms) {
            return None;
        }

        if abs_diff <= self.config.perfect_window() {
            Some(JudgeGrade::Perfect)
        } else if abs_diff <= self.config.great_window() {
            Some(JudgeGrade::Great)
        } else {
            Some(JudgeGrade::Good)
        }
    }

    pub fn is_in_window(&self, time_diff_ms: f64) -> bool {
        time_diff_ms.abs() <= self.config.hit_window_ms
    }

    /// True once the late edge of the window has passed.
    pub fn is_missed(&self, time_diff_ms: f64) -> bool {
        time_diff_ms > self.config.hit_window_ms
    }
}
