use super::JudgeGrade;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreManager {
    pub score: u64,
    pub perfect_count: u32,
    pub great_count: u32,
    pub good_count: u32,
    /// Notes that passed the hit line unjudged.
    pub miss_count: u32,
    /// Presses that matched no note.
    pub empty_press_count: u32,
    /// Degenerate notes retired without play.
    pub expired_count: u32,
    pub combo: u32,
    pub max_combo: u32,
}

impl ScoreManager {
    const COMBO_STEP: u32 = 10;
    const MULTIPLIER_STEP: f64 = 0.2;
    const MAX_MULTIPLIER: f64 = 4.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Score multiplier for the current combo.
    pub fn multiplier(&self) -> f64 {
        let steps = (self.combo / Self::COMBO_STEP) as f64;
        (1.0 + steps * Self::MULTIPLIER_STEP).min(Self::MAX_MULTIPLIER)
    }

    /// Record a hit and return the points it earned.
    pub fn add_hit(&mut self, grade: JudgeGrade) -> u64 {
        let points = (grade.base_points() as f64 * self.multiplier()).round() as u64;
        self.score += points;

        match grade {
            JudgeGrade::Perfect => self.perfect_count += 1,
            JudgeGrade::Great => self.great_count += 1,
            JudgeGrade::Good => self.good_count += 1,
        }
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        points
    }

    pub fn add_miss(&mut self) {
        self.miss_count += 1;
        self.combo = 0;
    }

    pub fn add_empty_press(&mut self) {
        self.empty_press_count += 1;
        self.combo = 0;
    }

    pub fn add_expired(&mut self) {
        self.expired_count += 1;
    }

    pub fn hit_count(&self) -> u32 {
        self.perfect_count + self.great_count + self.good_count
    }

    /// Notes that received a hit or miss judgement.
    pub fn total_judged(&self) -> u32 {
        self.hit_count() + self.miss_count
    }

    /// Weighted accuracy percentage over judged notes.
    pub fn accuracy(&self) -> f64 {
        let total = self.total_judged();
        if total == 0 {
            return 100.0;
        }
        let earned = self.perfect_count * 3 + self.great_count * 2 + self.good_count;
        (earned as f64 / (total * 3) as f64) * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
