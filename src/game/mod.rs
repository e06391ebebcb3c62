mod action;
mod game_state;
mod judge;
mod reducer;
mod result;
mod score;
mod state;

pub use action::{Action, sort_actions};
pub use game_state::{GameState, Judgement};
pub use judge::{
    JudgeConfig, JudgeConfigBuilder, JudgeGrade, JudgeSystem, TimingDirection, TimingStats,
};
pub use reducer::Reducer;
pub use result::PlayResult;
pub use score::ScoreManager;
pub use state::{LiveNote, NotePhase};
